//! The builder session - the single owner of the live `ResumeData` value,
//! the selected template, and the currently mounted visual document.
//!
//! Every mutation is a whole-value replacement flowing through this type:
//! editors replace one section, resets and example-loads replace the root
//! wholesale, and each change re-derives the mounted document from scratch
//! by re-running the active template. Consumers (templates, exporter) only
//! ever see snapshots; nothing aliases the live value.

pub mod handlers;

use crate::models::resume::ResumeData;
use crate::render::VisualDocument;
use crate::templates::{self, TemplateEntry};

pub struct Session {
    pub resume: ResumeData,
    template_key: String,
    /// The active template's rendered output, refreshed on every change.
    /// `None` only before the first render of the session.
    pub mounted: Option<VisualDocument>,
}

impl Session {
    /// Fresh session: all-empty resume, first catalog entry selected,
    /// nothing mounted yet.
    pub fn new() -> Self {
        Session {
            resume: ResumeData::default(),
            template_key: templates::catalog()[0].key.to_string(),
            mounted: None,
        }
    }

    pub fn template_key(&self) -> &str {
        &self.template_key
    }

    pub fn active_template(&self) -> &'static TemplateEntry {
        // the key is validated on selection, so this only falls back if the
        // catalog shrinks across a restart
        templates::find(&self.template_key).unwrap_or(&templates::catalog()[0])
    }

    /// Re-renders the active template from the current data and mounts the
    /// result. Render failures mount the inline error document instead.
    pub fn remount(&mut self) {
        let doc = self.active_template().render_checked(&self.resume);
        self.mounted = Some(doc);
    }

    /// Wholesale replacement: reset-to-default and load-example both come
    /// through here. Never a partial merge.
    pub fn replace_resume(&mut self, data: ResumeData) {
        self.resume = data;
        self.remount();
    }

    /// Switches the active template. Unknown keys are rejected without
    /// touching the session.
    pub fn select_template(&mut self, key: &str) -> Result<&'static TemplateEntry, UnknownTemplate> {
        let entry = templates::find(key).ok_or_else(|| UnknownTemplate(key.to_string()))?;
        self.template_key = entry.key.to_string();
        self.remount();
        Ok(entry)
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

#[derive(Debug)]
pub struct UnknownTemplate(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_empty_and_unmounted() {
        let session = Session::new();
        assert_eq!(session.resume, ResumeData::default());
        assert_eq!(session.template_key(), "modern");
        assert!(session.mounted.is_none(), "nothing mounted before first render");
    }

    #[test]
    fn test_replace_resume_is_total_and_remounts() {
        let mut session = Session::new();
        session.replace_resume(ResumeData::example());
        assert_eq!(session.resume.personal_info.full_name, "Sarah Johnson");
        let html = session.mounted.as_ref().unwrap().to_html();
        assert!(html.contains("Sarah Johnson"));

        session.replace_resume(ResumeData::default());
        assert_eq!(session.resume, ResumeData::default(), "reset replaces wholesale");
        let html = session.mounted.as_ref().unwrap().to_html();
        assert!(html.contains("Your Name"));
    }

    #[test]
    fn test_select_template_switches_and_remounts() {
        let mut session = Session::new();
        session.replace_resume(ResumeData::example());
        let entry = session.select_template("monochrome").unwrap();
        assert_eq!(entry.name, "Monochrome");
        assert_eq!(session.template_key(), "monochrome");
        let html = session.mounted.as_ref().unwrap().to_html();
        assert!(html.contains("whoami"), "monochrome output should be mounted");
    }

    #[test]
    fn test_select_unknown_template_leaves_session_intact() {
        let mut session = Session::new();
        let before = session.template_key().to_string();
        assert!(session.select_template("vaporwave").is_err());
        assert_eq!(session.template_key(), before);
        assert!(session.mounted.is_none());
    }

    #[test]
    fn test_section_replacement_flows_into_mounted_output() {
        let mut session = Session::new();
        session.remount();
        let mut edu = crate::models::resume::Education::default();
        edu.id = "e1".into();
        edu.institution = "MIT".into();
        session.resume.education = vec![edu];
        session.remount();
        assert!(session.mounted.as_ref().unwrap().to_html().contains("MIT"));
    }
}
