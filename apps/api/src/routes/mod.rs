pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::builder::handlers as builder_handlers;
use crate::export::handlers as export_handlers;
use crate::forms::handlers as form_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume container
        .route(
            "/api/v1/resume",
            get(builder_handlers::handle_get_resume).put(builder_handlers::handle_replace_resume),
        )
        .route(
            "/api/v1/resume/reset",
            post(builder_handlers::handle_reset_resume),
        )
        .route(
            "/api/v1/resume/example",
            post(builder_handlers::handle_load_example),
        )
        // Section editors (whole-section replacement callbacks)
        .route(
            "/api/v1/resume/sections/personal-info",
            put(form_handlers::handle_replace_personal_info),
        )
        .route(
            "/api/v1/resume/sections/education",
            put(form_handlers::handle_replace_education),
        )
        .route(
            "/api/v1/resume/sections/work-experience",
            put(form_handlers::handle_replace_work_experience),
        )
        .route(
            "/api/v1/resume/sections/projects",
            put(form_handlers::handle_replace_projects),
        )
        .route(
            "/api/v1/resume/sections/skills",
            put(form_handlers::handle_replace_skills),
        )
        .route(
            "/api/v1/resume/sections/certificates",
            put(form_handlers::handle_replace_certificates),
        )
        .route(
            "/api/v1/resume/sections/hobbies",
            put(form_handlers::handle_replace_hobbies),
        )
        // Templates
        .route(
            "/api/v1/templates",
            get(builder_handlers::handle_list_templates),
        )
        .route(
            "/api/v1/template",
            put(builder_handlers::handle_select_template),
        )
        .route("/api/v1/preview", get(builder_handlers::handle_preview))
        // Export
        .route("/api/v1/export/pdf", post(export_handlers::handle_export_pdf))
        .route(
            "/api/v1/export/print",
            post(export_handlers::handle_export_print),
        )
        .with_state(state)
}
