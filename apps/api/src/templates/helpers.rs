//! Shared formatting used by the template variants.
//!
//! Only *shared semantics* live here - the presence rules, the "Present"
//! rule, name fallback, and category grouping that every variant must apply
//! identically. Visual styling stays in the individual templates.

use crate::models::resume::{PersonalInfo, Skill, WorkExperience};
use crate::render::{Node, Text, TextStyle};

/// Placeholder shown when the full name is blank.
pub const NAME_PLACEHOLDER: &str = "Your Name";

pub fn display_name(info: &PersonalInfo) -> String {
    let name = info.full_name.trim();
    if name.is_empty() {
        NAME_PLACEHOLDER.to_string()
    } else {
        name.to_string()
    }
}

/// "start - end" with blanks collapsed; `current` overrides the stored end
/// date with "Present".
pub fn date_range(start: &str, end: &str, current: bool) -> String {
    let start = start.trim();
    let end_label = if current { "Present" } else { end.trim() };
    match (start.is_empty(), end_label.is_empty()) {
        (true, true) => String::new(),
        (true, false) => end_label.to_string(),
        (false, true) => start.to_string(),
        (false, false) => format!("{start} - {end_label}"),
    }
}

pub fn work_dates(work: &WorkExperience) -> String {
    date_range(&work.start_date, &work.end_date, work.current)
}

/// Non-blank contact fields in display order: email, phone, location.
pub fn contact_parts(info: &PersonalInfo) -> Vec<String> {
    [&info.email, &info.phone, &info.location]
        .into_iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Non-blank link fields in display order: website, linkedin, github.
pub fn link_parts(info: &PersonalInfo) -> Vec<String> {
    [&info.website, &info.linkedin, &info.github]
        .into_iter()
        .filter_map(|o| o.as_deref())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Non-blank string from an optional field.
pub fn opt_text(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Groups skills by category in first-seen order, preserving skill order
/// within each group. Blank categories collapse into "Other".
pub fn grouped_skills(skills: &[Skill]) -> Vec<(String, Vec<&Skill>)> {
    let mut groups: Vec<(String, Vec<&Skill>)> = Vec::new();
    for skill in skills {
        let category = {
            let c = skill.category.trim();
            if c.is_empty() {
                "Other"
            } else {
                c
            }
        };
        match groups.iter_mut().find(|(name, _)| name == category) {
            Some((_, members)) => members.push(skill),
            None => groups.push((category.to_string(), vec![skill])),
        }
    }
    groups
}

/// A bullet list in stored order - no reordering, deduping, or truncation.
/// The caller supplies the text style; each item becomes one node.
pub fn bullet_nodes(items: &[String], style: &TextStyle, marker: &str) -> Vec<Node> {
    items
        .iter()
        .map(|item| {
            let mut text = Text::new(format!("{marker}{item}"));
            text.style = style.clone();
            text.into()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::SkillLevel;

    #[test]
    fn test_display_name_falls_back_on_blank() {
        let mut info = PersonalInfo::default();
        assert_eq!(display_name(&info), NAME_PLACEHOLDER);
        info.full_name = "  ".into();
        assert_eq!(display_name(&info), NAME_PLACEHOLDER);
        info.full_name = "Ada Lovelace".into();
        assert_eq!(display_name(&info), "Ada Lovelace");
    }

    #[test]
    fn test_date_range_current_overrides_end() {
        assert_eq!(date_range("Jan 2022", "Dec 2021", true), "Jan 2022 - Present");
        assert_eq!(date_range("Jan 2022", "Dec 2021", false), "Jan 2022 - Dec 2021");
    }

    #[test]
    fn test_date_range_collapses_blanks() {
        assert_eq!(date_range("", "", false), "");
        assert_eq!(date_range("Jan 2022", "", false), "Jan 2022");
        assert_eq!(date_range("", "May 2020", false), "May 2020");
        assert_eq!(date_range("", "", true), "Present");
    }

    #[test]
    fn test_contact_parts_skip_blanks() {
        let info = PersonalInfo {
            email: "a@b.c".into(),
            phone: "  ".into(),
            location: "Berlin".into(),
            ..Default::default()
        };
        assert_eq!(contact_parts(&info), ["a@b.c", "Berlin"]);
    }

    #[test]
    fn test_grouped_skills_first_seen_order() {
        let skills = vec![
            Skill {
                id: "1".into(),
                name: "Rust".into(),
                level: SkillLevel::Expert,
                category: "Languages".into(),
            },
            Skill {
                id: "2".into(),
                name: "Postgres".into(),
                level: SkillLevel::Advanced,
                category: "Databases".into(),
            },
            Skill {
                id: "3".into(),
                name: "Go".into(),
                level: SkillLevel::Intermediate,
                category: "Languages".into(),
            },
        ];
        let groups = grouped_skills(&skills);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Languages");
        assert_eq!(groups[1].0, "Databases");
        let names: Vec<&str> = groups[0].1.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Rust", "Go"], "within-group order is stored order");
    }

    #[test]
    fn test_grouped_skills_blank_category_becomes_other() {
        let skills = vec![Skill {
            id: "1".into(),
            name: "Chess".into(),
            level: SkillLevel::Beginner,
            category: " ".into(),
        }];
        assert_eq!(grouped_skills(&skills)[0].0, "Other");
    }
}
