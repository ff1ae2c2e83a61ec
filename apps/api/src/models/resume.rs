//! The resume data model - the single root aggregate every other module
//! reads or writes.
//!
//! `ResumeData` is held in exactly one place (the builder session) and passed
//! down by reference; mutations replace a whole section with a new value,
//! never patch in place. Every list-valued section starts empty, and an empty
//! list (or a blank `PersonalInfo`) means "section absent" - see the
//! presence predicates at the bottom of this module.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Entities
// ────────────────────────────────────────────────────────────────────────────

/// Singleton personal/contact block. No id - exactly one instance exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    /// Ignored by every renderer when `current` is true ("Present" is shown).
    pub end_date: String,
    pub current: bool,
    /// Ordered bullet strings. Renderers must never reorder, dedupe, or
    /// truncate this list.
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Order-preserving; duplicates are tolerated here and deduplicated at
    /// the edit boundary (`forms::ops::add_technology`).
    pub technologies: Vec<String>,
    pub link: Option<String>,
    pub github: Option<String>,
    pub start_date: String,
    pub end_date: String,
}

/// Totally ordered 4-point proficiency scale.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// 1-based rank on the 4-point scale (Beginner = 1 … Expert = 4).
    /// Templates use this to draw proficiency dots and bars.
    pub fn rank(self) -> usize {
        match self {
            SkillLevel::Beginner => 1,
            SkillLevel::Intermediate => 2,
            SkillLevel::Advanced => 3,
            SkillLevel::Expert => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub level: SkillLevel,
    /// Free text. Grouping by category is a derived view computed at render
    /// time, not stored structure.
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certificate {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub issue_date: String,
    pub expiry_date: Option<String>,
    pub credential_id: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hobby {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

/// Modeled and rendered, but not populated by any editor route in current
/// scope. Wholesale replacement accepts it and templates render it when
/// present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub organization: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Root aggregate
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub education: Vec<Education>,
    pub work_experience: Vec<WorkExperience>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub achievements: Vec<Achievement>,
    pub certificates: Vec<Certificate>,
    pub hobbies: Vec<Hobby>,
}

// ────────────────────────────────────────────────────────────────────────────
// Section presence predicates
// ────────────────────────────────────────────────────────────────────────────

/// Whether a list-valued section has any content at all.
///
/// Load-bearing: every template must consult this before emitting a section
/// heading or container, so an empty section produces zero layout footprint.
pub fn has_entries<T>(items: &[T]) -> bool {
    !items.is_empty()
}

impl PersonalInfo {
    /// The personal block counts as present when any of the headline fields
    /// is non-blank.
    pub fn has_content(&self) -> bool {
        !self.full_name.trim().is_empty()
            || !self.email.trim().is_empty()
            || !self.phone.trim().is_empty()
            || !self.summary.trim().is_empty()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Bundled example instance
// ────────────────────────────────────────────────────────────────────────────

impl ResumeData {
    /// A fully populated example resume, used for one-click wholesale
    /// replacement. Total replacement only - never merged into existing data.
    pub fn example() -> Self {
        ResumeData {
            personal_info: PersonalInfo {
                full_name: "Sarah Johnson".into(),
                email: "sarah.johnson@email.com".into(),
                phone: "+1 (555) 123-4567".into(),
                location: "San Francisco, CA".into(),
                website: Some("https://sarahjohnson.dev".into()),
                linkedin: Some("linkedin.com/in/sarahjohnson".into()),
                github: Some("github.com/sarahjohnson".into()),
                summary: "Experienced Full Stack Developer with 5+ years building scalable \
                          web applications. Proficient in React, Node.js, and cloud \
                          technologies. Passionate about creating user-friendly solutions \
                          and leading development teams."
                    .into(),
            },
            education: vec![Education {
                id: "1".into(),
                institution: "University of California, Berkeley".into(),
                degree: "Bachelor of Science".into(),
                field: "Computer Science".into(),
                start_date: "Aug 2016".into(),
                end_date: "May 2020".into(),
                gpa: Some("3.8".into()),
                description: Some(
                    "Relevant coursework: Data Structures, Algorithms, Database Systems, \
                     Software Engineering"
                        .into(),
                ),
            }],
            work_experience: vec![
                WorkExperience {
                    id: "1".into(),
                    company: "TechCorp Inc.".into(),
                    position: "Senior Software Engineer".into(),
                    location: "San Francisco, CA".into(),
                    start_date: "Jan 2022".into(),
                    end_date: "Present".into(),
                    current: true,
                    description: vec![
                        "Led development of microservices architecture serving 1M+ users".into(),
                        "Reduced application load time by 40% through performance optimization"
                            .into(),
                    ],
                },
                WorkExperience {
                    id: "2".into(),
                    company: "StartupXYZ".into(),
                    position: "Frontend Developer".into(),
                    location: "Remote".into(),
                    start_date: "Jun 2020".into(),
                    end_date: "Dec 2021".into(),
                    current: false,
                    description: vec![
                        "Built responsive React applications with TypeScript".into(),
                        "Collaborated with UX team to implement pixel-perfect designs".into(),
                    ],
                },
            ],
            projects: vec![
                Project {
                    id: "1".into(),
                    name: "E-Commerce Platform".into(),
                    description: "Full-stack e-commerce application with payment processing, \
                                  inventory management, and admin dashboard"
                        .into(),
                    technologies: vec![
                        "React".into(),
                        "Node.js".into(),
                        "MongoDB".into(),
                        "Stripe API".into(),
                        "AWS".into(),
                    ],
                    link: Some("https://ecommerce-demo.com".into()),
                    github: Some("https://github.com/sarahjohnson/ecommerce-platform".into()),
                    start_date: "Mar 2023".into(),
                    end_date: "Jun 2023".into(),
                },
                Project {
                    id: "2".into(),
                    name: "Task Management App".into(),
                    description: "Real-time collaborative task management tool with \
                                  drag-and-drop functionality"
                        .into(),
                    technologies: vec![
                        "Next.js".into(),
                        "Socket.io".into(),
                        "PostgreSQL".into(),
                        "Tailwind CSS".into(),
                    ],
                    link: None,
                    github: Some("https://github.com/sarahjohnson/task-manager".into()),
                    start_date: "Jan 2023".into(),
                    end_date: "Feb 2023".into(),
                },
            ],
            skills: vec![
                skill("1", "JavaScript", SkillLevel::Expert, "Programming Languages"),
                skill("2", "TypeScript", SkillLevel::Advanced, "Programming Languages"),
                skill("3", "Python", SkillLevel::Intermediate, "Programming Languages"),
                skill("4", "React", SkillLevel::Expert, "Frontend Technologies"),
                skill("5", "Next.js", SkillLevel::Advanced, "Frontend Technologies"),
                skill("6", "Vue.js", SkillLevel::Intermediate, "Frontend Technologies"),
            ],
            achievements: vec![],
            certificates: vec![
                Certificate {
                    id: "1".into(),
                    name: "AWS Certified Developer - Associate".into(),
                    issuer: "Amazon Web Services".into(),
                    issue_date: "Mar 2023".into(),
                    expiry_date: Some("Mar 2026".into()),
                    credential_id: Some("AWS-DEV-2023-001234".into()),
                    link: Some("https://aws.amazon.com/verification".into()),
                },
                Certificate {
                    id: "2".into(),
                    name: "React Professional Certificate".into(),
                    issuer: "Meta".into(),
                    issue_date: "Jan 2022".into(),
                    expiry_date: None,
                    credential_id: None,
                    link: Some("https://coursera.org/verify/professional-cert".into()),
                },
            ],
            hobbies: vec![
                hobby("1", "Photography", "Landscape and portrait photography"),
                hobby("2", "Rock Climbing", "Indoor and outdoor climbing"),
                hobby("3", "Open Source", "Contributing to React ecosystem projects"),
                hobby("4", "Cooking", "Experimenting with international cuisines"),
            ],
        }
    }
}

fn skill(id: &str, name: &str, level: SkillLevel, category: &str) -> Skill {
    Skill {
        id: id.into(),
        name: name.into(),
        level,
        category: category.into(),
    }
}

fn hobby(id: &str, name: &str, description: &str) -> Hobby {
    Hobby {
        id: id.into(),
        name: name.into(),
        description: Some(description.into()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resume_is_all_empty() {
        let data = ResumeData::default();
        assert!(!data.personal_info.has_content());
        assert!(!has_entries(&data.education));
        assert!(!has_entries(&data.work_experience));
        assert!(!has_entries(&data.projects));
        assert!(!has_entries(&data.skills));
        assert!(!has_entries(&data.achievements));
        assert!(!has_entries(&data.certificates));
        assert!(!has_entries(&data.hobbies));
    }

    #[test]
    fn test_presence_iff_nonempty() {
        assert!(!has_entries::<Education>(&[]));
        assert!(has_entries(&[Education::default()]));
    }

    #[test]
    fn test_personal_presence_on_any_headline_field() {
        let mut p = PersonalInfo::default();
        assert!(!p.has_content());
        p.phone = "555".into();
        assert!(p.has_content());
        // location alone does not make the block present
        let p2 = PersonalInfo {
            location: "Berlin".into(),
            ..Default::default()
        };
        assert!(!p2.has_content());
    }

    #[test]
    fn test_skill_level_is_totally_ordered() {
        assert!(SkillLevel::Beginner < SkillLevel::Intermediate);
        assert!(SkillLevel::Intermediate < SkillLevel::Advanced);
        assert!(SkillLevel::Advanced < SkillLevel::Expert);
        assert_eq!(SkillLevel::Expert.rank(), 4);
    }

    #[test]
    fn test_serde_uses_camel_case_wire_names() {
        let json = serde_json::to_value(ResumeData::example()).unwrap();
        assert!(json.get("personalInfo").is_some());
        assert_eq!(json["personalInfo"]["fullName"], "Sarah Johnson");
        assert_eq!(json["workExperience"][0]["startDate"], "Jan 2022");
    }

    #[test]
    fn test_wholesale_round_trip() {
        let example = ResumeData::example();
        let json = serde_json::to_string(&example).unwrap();
        let back: ResumeData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, example);
    }

    #[test]
    fn test_example_current_entry_keeps_stored_end_date() {
        // The model stores whatever end_date it was given; ignoring it when
        // `current` is set is a renderer obligation, not a model one.
        let example = ResumeData::example();
        let current = &example.work_experience[0];
        assert!(current.current);
        assert!(!current.end_date.is_empty());
    }

    #[test]
    fn test_skill_level_serde_labels() {
        let s: SkillLevel = serde_json::from_str("\"Expert\"").unwrap();
        assert_eq!(s, SkillLevel::Expert);
        assert_eq!(
            serde_json::to_string(&SkillLevel::Beginner).unwrap(),
            "\"Beginner\""
        );
    }
}
