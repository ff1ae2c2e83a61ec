//! Template renderers - one contract, many interchangeable visual styles.
//!
//! Every variant is a pure function `render(&ResumeData) -> VisualDocument`
//! whose output carries the stable resume-root marker. The ordered
//! [`catalog`] is the only place a template is registered; adding a style
//! means adding one entry here and nothing else changes.
//!
//! # Contract (every variant)
//! - full name as the dominant heading, "Your Name" placeholder when blank
//! - contact fields only when non-blank; separator convention is per-variant
//! - a section with a false presence predicate leaves zero layout footprint
//! - skills grouped by category (derived at render time)
//! - work bullets in stored order, never reordered, deduped, or truncated
//! - `current` entries display "Present" regardless of the stored end date

pub mod helpers;

mod academic;
mod classic;
mod consultant;
mod corporate;
mod creative;
mod elegant;
mod executive;
mod executivepro;
mod minimalist;
mod modern;
mod modernpro;
mod monochrome;
mod professional;
mod timeline;

use std::panic::{catch_unwind, AssertUnwindSafe};

use serde::Serialize;
use tracing::error;

use crate::models::resume::ResumeData;
use crate::render::{
    Block, Edges, Rgb, Text, VisualDocument, Width, PAGE_MIN_HEIGHT_PX, PAGE_WIDTH_PX,
    RESUME_ROOT_CLASS, RESUME_ROOT_MARKER,
};

pub use academic::AcademicTemplate;
pub use classic::ClassicTemplate;
pub use consultant::ConsultantTemplate;
pub use corporate::CorporateTemplate;
pub use creative::CreativeTemplate;
pub use elegant::ElegantTemplate;
pub use executive::ExecutiveTemplate;
pub use executivepro::ExecutiveProTemplate;
pub use minimalist::MinimalistTemplate;
pub use modern::ModernTemplate;
pub use modernpro::ModernProTemplate;
pub use monochrome::MonochromeTemplate;
pub use professional::ProfessionalTemplate;
pub use timeline::TimelineTemplate;

/// The shared rendering contract. Implementations must be pure: identical
/// input renders identical output, with no clocks, counters, or randomness.
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, data: &ResumeData) -> VisualDocument;
}

/// One catalog row: stable key, display name, one-line description, renderer.
pub struct TemplateEntry {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub renderer: &'static dyn TemplateRenderer,
}

impl TemplateEntry {
    /// Renders with the panic boundary required by the contract: a variant
    /// that fails on given data is replaced by a visible inline error
    /// document instead of taking the whole request down. The error document
    /// intentionally carries no resume-root marker, so a subsequent export
    /// fails its precondition instead of shipping an error banner as a PDF.
    pub fn render_checked(&self, data: &ResumeData) -> VisualDocument {
        match catch_unwind(AssertUnwindSafe(|| self.renderer.render(data))) {
            Ok(doc) => doc,
            Err(_) => {
                error!(template = self.key, "template renderer panicked");
                error_document(self.name)
            }
        }
    }
}

/// Wire shape of one catalog row.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

static CATALOG: &[TemplateEntry] = &[
    TemplateEntry {
        key: "modern",
        name: "Modern",
        description: "Clean design with gradient header",
        renderer: &ModernTemplate,
    },
    TemplateEntry {
        key: "minimalist",
        name: "Minimalist",
        description: "Simple and elegant layout",
        renderer: &MinimalistTemplate,
    },
    TemplateEntry {
        key: "professional",
        name: "Professional",
        description: "Corporate-style formatting",
        renderer: &ProfessionalTemplate,
    },
    TemplateEntry {
        key: "creative",
        name: "Creative",
        description: "Colorful with unique elements",
        renderer: &CreativeTemplate,
    },
    TemplateEntry {
        key: "executive",
        name: "Executive",
        description: "Bold black & white executive style",
        renderer: &ExecutiveTemplate,
    },
    TemplateEntry {
        key: "classic",
        name: "Classic",
        description: "Traditional centered layout",
        renderer: &ClassicTemplate,
    },
    TemplateEntry {
        key: "monochrome",
        name: "Monochrome",
        description: "Tech-focused monospace design",
        renderer: &MonochromeTemplate,
    },
    TemplateEntry {
        key: "elegant",
        name: "Elegant",
        description: "Serif fonts with clean lines",
        renderer: &ElegantTemplate,
    },
    TemplateEntry {
        key: "corporate",
        name: "Corporate",
        description: "Structured sidebar layout",
        renderer: &CorporateTemplate,
    },
    TemplateEntry {
        key: "academic",
        name: "Academic",
        description: "Formal centered design",
        renderer: &AcademicTemplate,
    },
    TemplateEntry {
        key: "timeline",
        name: "Timeline",
        description: "Visual timeline with progress bars",
        renderer: &TimelineTemplate,
    },
    TemplateEntry {
        key: "executivepro",
        name: "Executive Pro",
        description: "Premium executive design with dark header",
        renderer: &ExecutiveProTemplate,
    },
    TemplateEntry {
        key: "modernpro",
        name: "Modern Pro",
        description: "Colorful sections with timeline elements",
        renderer: &ModernProTemplate,
    },
    TemplateEntry {
        key: "consultant",
        name: "Consultant",
        description: "Sophisticated layout with gradient accents",
        renderer: &ConsultantTemplate,
    },
];

/// The ordered template catalog.
pub fn catalog() -> &'static [TemplateEntry] {
    CATALOG
}

/// Looks a template up by its stable key.
pub fn find(key: &str) -> Option<&'static TemplateEntry> {
    CATALOG.iter().find(|t| t.key == key)
}

/// The marked A4 page container every variant starts from.
pub(crate) fn page_root() -> Block {
    Block::new()
        .width(Width::Px(PAGE_WIDTH_PX))
        .min_height(PAGE_MIN_HEIGHT_PX)
        .background(Rgb::WHITE)
        .attr(RESUME_ROOT_MARKER, "")
        .class(RESUME_ROOT_CLASS)
}

fn error_document(template_name: &str) -> VisualDocument {
    VisualDocument::new(
        Block::new()
            .width(Width::Px(PAGE_WIDTH_PX))
            .padding(Edges::all(24.0))
            .background(Rgb::new(0xfe, 0xf2, 0xf2))
            .child(
                Text::new(format!(
                    "The \"{template_name}\" template failed to render this resume. \
                     Your data is intact — switch to another template and try again."
                ))
                .size(14.0)
                .color(Rgb::new(0xb9, 0x1c, 0x1c)),
            ),
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Contract tests - run against every catalog entry
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Achievement, PersonalInfo, ResumeData, WorkExperience};

    fn current_job_data() -> ResumeData {
        ResumeData {
            personal_info: PersonalInfo {
                full_name: "Sarah Johnson".into(),
                ..Default::default()
            },
            work_experience: vec![WorkExperience {
                id: "1".into(),
                company: "TechCorp Inc.".into(),
                position: "Senior Software Engineer".into(),
                location: "San Francisco, CA".into(),
                start_date: "Jan 2022".into(),
                end_date: "Dec 2021".into(),
                current: true,
                description: vec!["Shipped things".into()],
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_catalog_is_nonempty_with_unique_keys() {
        let mut keys: Vec<&str> = catalog().iter().map(|t| t.key).collect();
        assert!(keys.len() >= 14);
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), catalog().len(), "catalog keys must be unique");
    }

    #[test]
    fn test_every_template_carries_the_root_marker() {
        let data = ResumeData::example();
        for entry in catalog() {
            let doc = entry.renderer.render(&data);
            assert!(
                doc.find_resume_root().is_some(),
                "template '{}' lost the resume root marker",
                entry.key
            );
        }
    }

    #[test]
    fn test_rendering_is_pure() {
        let data = ResumeData::example();
        for entry in catalog() {
            let first = entry.renderer.render(&data).to_html();
            let second = entry.renderer.render(&data).to_html();
            assert_eq!(first, second, "template '{}' is not pure", entry.key);
        }
    }

    #[test]
    fn test_empty_sections_leave_zero_footprint() {
        let data = ResumeData::default();
        for entry in catalog() {
            let html = entry.renderer.render(&data).to_html().to_lowercase();
            for heading in [
                "experience",
                "education",
                "skills",
                "projects",
                "certific",
                "hobbies",
                "interests",
                "achievements",
            ] {
                assert!(
                    !html.contains(heading),
                    "template '{}' emits '{}' for an empty section",
                    entry.key,
                    heading
                );
            }
        }
    }

    #[test]
    fn test_blank_name_renders_placeholder() {
        let data = ResumeData::default();
        for entry in catalog() {
            // some variants uppercase the headline, so compare case-insensitively
            let html = entry.renderer.render(&data).to_html().to_lowercase();
            assert!(
                html.contains("your name"),
                "template '{}' must fall back to the placeholder name",
                entry.key
            );
        }
    }

    #[test]
    fn test_current_role_renders_present_never_stored_end_date() {
        let data = current_job_data();
        for entry in catalog() {
            let html = entry.renderer.render(&data).to_html();
            assert!(
                html.contains("Present"),
                "template '{}' must display Present for a current role",
                entry.key
            );
            assert!(
                !html.contains("Dec 2021"),
                "template '{}' leaked the stored end date of a current role",
                entry.key
            );
        }
    }

    #[test]
    fn test_bullets_render_in_stored_order_untruncated() {
        let mut data = ResumeData::example();
        data.work_experience[0].description = vec![
            "first bullet marker".into(),
            "second bullet marker".into(),
            "third bullet marker".into(),
        ];
        for entry in catalog() {
            let html = entry.renderer.render(&data).to_html();
            let first = html.find("first bullet marker");
            let second = html.find("second bullet marker");
            let third = html.find("third bullet marker");
            assert!(
                first.is_some() && second.is_some() && third.is_some(),
                "template '{}' dropped a bullet",
                entry.key
            );
            assert!(
                first < second && second < third,
                "template '{}' reordered bullets",
                entry.key
            );
        }
    }

    #[test]
    fn test_skills_grouped_by_category() {
        let data = ResumeData::example();
        for entry in catalog() {
            let html = entry.renderer.render(&data).to_html();
            let lower = html.to_lowercase();
            assert!(
                lower.contains("programming languages") && lower.contains("frontend technologies"),
                "template '{}' must surface skill categories",
                entry.key
            );
            assert!(html.contains("JavaScript") && html.contains("Vue.js"));
        }
    }

    #[test]
    fn test_achievements_render_when_present() {
        let mut data = ResumeData::example();
        data.achievements = vec![Achievement {
            id: "a1".into(),
            title: "Regional Hackathon Winner".into(),
            description: "First place among 80 teams".into(),
            date: "Nov 2023".into(),
            organization: Some("DevFest".into()),
        }];
        for entry in catalog() {
            let html = entry.renderer.render(&data).to_html();
            assert!(
                html.contains("Regional Hackathon Winner"),
                "template '{}' must render achievements when present",
                entry.key
            );
        }
    }

    #[test]
    fn test_render_checked_recovers_from_panicking_renderer() {
        struct PanickingTemplate;
        impl TemplateRenderer for PanickingTemplate {
            fn render(&self, _data: &ResumeData) -> VisualDocument {
                panic!("intentional failure");
            }
        }
        let entry = TemplateEntry {
            key: "broken",
            name: "Broken",
            description: "always fails",
            renderer: &PanickingTemplate,
        };
        let doc = entry.render_checked(&ResumeData::example());
        let html = doc.to_html();
        assert!(html.contains("failed to render"));
        assert!(
            doc.find_resume_root().is_none(),
            "error document must not masquerade as a resume root"
        );
    }

    #[test]
    fn test_find_known_and_unknown_keys() {
        assert!(find("modern").is_some());
        assert!(find("no-such-template").is_none());
        assert_eq!(catalog()[0].key, "modern", "catalog order is stable");
    }
}
