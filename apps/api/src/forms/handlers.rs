//! The onChange(section) callback contract as HTTP operations.
//!
//! Each handler receives exactly one section's full replacement value,
//! swaps it into the session, and re-mounts the active template - the same
//! cycle an editor triggers in the interactive flow. Achievements have no
//! editor in current scope; they arrive only through wholesale replacement
//! of the root value.

use axum::{extract::State, http::StatusCode, Json};

use crate::models::resume::{
    Certificate, Education, Hobby, PersonalInfo, Project, Skill, WorkExperience,
};
use crate::state::AppState;

macro_rules! section_handler {
    ($(#[$doc:meta])* $name:ident, $field:ident, $ty:ty) => {
        $(#[$doc])*
        pub async fn $name(
            State(state): State<AppState>,
            Json(section): Json<$ty>,
        ) -> StatusCode {
            let mut session = state.session.write().await;
            session.resume.$field = section;
            session.remount();
            StatusCode::NO_CONTENT
        }
    };
}

section_handler!(
    /// PUT /api/v1/resume/sections/personal-info
    handle_replace_personal_info,
    personal_info,
    PersonalInfo
);

section_handler!(
    /// PUT /api/v1/resume/sections/education
    handle_replace_education,
    education,
    Vec<Education>
);

section_handler!(
    /// PUT /api/v1/resume/sections/work-experience
    handle_replace_work_experience,
    work_experience,
    Vec<WorkExperience>
);

section_handler!(
    /// PUT /api/v1/resume/sections/projects
    handle_replace_projects,
    projects,
    Vec<Project>
);

section_handler!(
    /// PUT /api/v1/resume/sections/skills
    handle_replace_skills,
    skills,
    Vec<Skill>
);

section_handler!(
    /// PUT /api/v1/resume/sections/certificates
    handle_replace_certificates,
    certificates,
    Vec<Certificate>
);

section_handler!(
    /// PUT /api/v1/resume/sections/hobbies
    handle_replace_hobbies,
    hobbies,
    Vec<Hobby>
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::config::Config;
    use crate::layout::rasterizer::BoxModelRasterizer;

    fn test_state() -> AppState {
        let config = Config {
            port: 0,
            rust_log: "info".into(),
            export_dir: std::env::temp_dir(),
            raster_scale: 2,
        };
        AppState::new(config, Arc::new(BoxModelRasterizer))
    }

    #[tokio::test]
    async fn test_section_replacement_touches_only_its_section() {
        let state = test_state();
        {
            let mut session = state.session.write().await;
            session.replace_resume(crate::models::resume::ResumeData::example());
        }

        let status = handle_replace_skills(State(state.clone()), Json(vec![])).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let session = state.session.read().await;
        assert!(session.resume.skills.is_empty(), "skills replaced");
        assert_eq!(
            session.resume.personal_info.full_name, "Sarah Johnson",
            "other sections untouched"
        );
        assert_eq!(session.resume.work_experience.len(), 2);
    }

    #[tokio::test]
    async fn test_section_replacement_remounts_the_preview() {
        let state = test_state();
        let edu = Education {
            id: "e1".into(),
            institution: "ETH Zurich".into(),
            ..Default::default()
        };
        handle_replace_education(State(state.clone()), Json(vec![edu])).await;

        let session = state.session.read().await;
        let html = session.mounted.as_ref().unwrap().to_html();
        assert!(html.contains("ETH Zurich"), "mounted output must reflect the change");
    }
}
