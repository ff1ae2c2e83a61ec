#![allow(dead_code)]

//! Pure list operations behind every section editor.
//!
//! Each editor holds no state beyond transient input buffers; its add,
//! update, and remove actions are pure functions `input list + op → output
//! list`, and the resulting list flows back to the owning session as a
//! whole-section replacement. Nothing here touches shared state.

use uuid::Uuid;

use crate::models::resume::{
    Achievement, Certificate, Education, Hobby, Project, Skill, WorkExperience,
};

/// Anything that lives in a list-valued section under an opaque stable id.
pub trait SectionEntry {
    fn id(&self) -> &str;
    fn id_mut(&mut self) -> &mut String;
}

macro_rules! impl_section_entry {
    ($($ty:ty),+ $(,)?) => {
        $(impl SectionEntry for $ty {
            fn id(&self) -> &str {
                &self.id
            }
            fn id_mut(&mut self) -> &mut String {
                &mut self.id
            }
        })+
    };
}

impl_section_entry!(
    Education,
    WorkExperience,
    Project,
    Skill,
    Certificate,
    Hobby,
    Achievement,
);

/// Freshly generated opaque id for a new entry.
pub fn new_entry_id() -> String {
    Uuid::new_v4().to_string()
}

/// A blank entry with a fresh unique id - the editor's "add" seed.
pub fn draft<T: SectionEntry + Default>() -> T {
    let mut entry = T::default();
    *entry.id_mut() = new_entry_id();
    entry
}

/// Work-experience drafts start with one empty bullet so the editor always
/// has an editable slot; the bullet list itself may legitimately be empty.
pub fn draft_work_experience() -> WorkExperience {
    let mut entry: WorkExperience = draft();
    entry.description.push(String::new());
    entry
}

/// Appends a new entry. Display order is insertion order.
pub fn add_entry<T: SectionEntry + Clone>(list: &[T], entry: T) -> Vec<T> {
    let mut out = list.to_vec();
    out.push(entry);
    out
}

/// Replaces the targeted entry via `apply`; all other entries pass through
/// untouched. Unknown ids leave the list identical.
pub fn update_entry<T: SectionEntry + Clone>(
    list: &[T],
    id: &str,
    apply: impl Fn(&mut T),
) -> Vec<T> {
    list.iter()
        .map(|entry| {
            if entry.id() == id {
                let mut updated = entry.clone();
                apply(&mut updated);
                updated
            } else {
                entry.clone()
            }
        })
        .collect()
}

/// Filters the entry out by id, preserving the order of the rest.
pub fn remove_entry<T: SectionEntry + Clone>(list: &[T], id: &str) -> Vec<T> {
    list.iter()
        .filter(|entry| entry.id() != id)
        .cloned()
        .collect()
}

/// Adds a technology tag to a project's list, deduplicating by exact string
/// match. The model itself tolerates duplicates; this edit-boundary check is
/// the only place dedup happens.
pub fn add_technology(technologies: &[String], tech: &str) -> Vec<String> {
    let tech = tech.trim();
    if tech.is_empty() || technologies.iter().any(|t| t == tech) {
        return technologies.to_vec();
    }
    let mut out = technologies.to_vec();
    out.push(tech.to_string());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::SkillLevel;

    fn sample_skills() -> Vec<Skill> {
        vec![
            Skill {
                id: "a".into(),
                name: "Rust".into(),
                level: SkillLevel::Expert,
                category: "Languages".into(),
            },
            Skill {
                id: "b".into(),
                name: "Go".into(),
                level: SkillLevel::Intermediate,
                category: "Languages".into(),
            },
        ]
    }

    #[test]
    fn test_work_experience_draft_has_one_editable_bullet() {
        let entry = draft_work_experience();
        assert_eq!(entry.description, vec![String::new()]);
        assert!(!entry.current);
    }

    #[test]
    fn test_draft_gets_fresh_unique_ids() {
        let a: Education = draft();
        let b: Education = draft();
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert!(a.institution.is_empty(), "draft fields start blank");
    }

    #[test]
    fn test_add_then_remove_restores_original() {
        let original = sample_skills();
        let entry: Skill = draft();
        let id = entry.id.clone();
        let added = add_entry(&original, entry);
        assert_eq!(added.len(), 3);
        let restored = remove_entry(&added, &id);
        assert_eq!(restored, original, "order and content must round-trip");
    }

    #[test]
    fn test_add_appends_at_the_end() {
        let original = sample_skills();
        let entry: Skill = draft();
        let id = entry.id.clone();
        let added = add_entry(&original, entry);
        assert_eq!(added.last().unwrap().id, id);
    }

    #[test]
    fn test_update_touches_exactly_one_entry() {
        let original = sample_skills();
        let updated = update_entry(&original, "b", |s| s.level = SkillLevel::Advanced);
        assert_eq!(updated[0], original[0], "untargeted entry is byte-identical");
        assert_eq!(updated[1].level, SkillLevel::Advanced);
        assert_eq!(updated[1].name, "Go", "other fields of the target unchanged");
    }

    #[test]
    fn test_update_unknown_id_is_identity() {
        let original = sample_skills();
        let updated = update_entry(&original, "missing", |s| s.name = "changed".into());
        assert_eq!(updated, original);
    }

    #[test]
    fn test_remove_preserves_order_of_rest() {
        let mut list = sample_skills();
        let mut third: Skill = draft();
        third.name = "Zig".into();
        list = add_entry(&list, third);
        let removed = remove_entry(&list, "a");
        let names: Vec<&str> = removed.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Go", "Zig"]);
    }

    #[test]
    fn test_add_technology_dedupes_exact_match() {
        let techs = vec!["React".to_string(), "AWS".to_string()];
        let same = add_technology(&techs, "React");
        assert_eq!(same, techs, "exact duplicate is rejected at the boundary");
        let cased = add_technology(&techs, "react");
        assert_eq!(cased.len(), 3, "dedup is exact-match, not case-insensitive");
    }

    #[test]
    fn test_add_technology_ignores_blank() {
        let techs = vec!["React".to_string()];
        assert_eq!(add_technology(&techs, "   "), techs);
    }
}
