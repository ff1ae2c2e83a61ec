use axum::{extract::State, http::StatusCode, response::Html, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::state::AppState;
use crate::templates::{self, TemplateInfo};

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeData> {
    let session = state.session.read().await;
    Json(session.resume.clone())
}

/// PUT /api/v1/resume
/// Wholesale replacement of the root value - never a partial merge.
pub async fn handle_replace_resume(
    State(state): State<AppState>,
    Json(data): Json<ResumeData>,
) -> StatusCode {
    state.session.write().await.replace_resume(data);
    StatusCode::NO_CONTENT
}

/// POST /api/v1/resume/reset
pub async fn handle_reset_resume(State(state): State<AppState>) -> StatusCode {
    state.session.write().await.replace_resume(ResumeData::default());
    StatusCode::NO_CONTENT
}

/// POST /api/v1/resume/example
pub async fn handle_load_example(State(state): State<AppState>) -> Json<ResumeData> {
    let mut session = state.session.write().await;
    session.replace_resume(ResumeData::example());
    Json(session.resume.clone())
}

/// GET /api/v1/templates
/// The ordered catalog consumed by the template selection control.
pub async fn handle_list_templates() -> Json<Vec<TemplateInfo>> {
    Json(
        templates::catalog()
            .iter()
            .map(|t| TemplateInfo {
                key: t.key,
                name: t.name,
                description: t.description,
            })
            .collect(),
    )
}

#[derive(Deserialize)]
pub struct SelectTemplateRequest {
    pub key: String,
}

/// PUT /api/v1/template
pub async fn handle_select_template(
    State(state): State<AppState>,
    Json(req): Json<SelectTemplateRequest>,
) -> Result<Json<TemplateInfo>, AppError> {
    let mut session = state.session.write().await;
    let entry = session.select_template(&req.key)?;
    Ok(Json(TemplateInfo {
        key: entry.key,
        name: entry.name,
        description: entry.description,
    }))
}

/// GET /api/v1/preview
/// Re-renders the active template, mounts the result, and returns its HTML.
/// A failing template yields the inline error document, not a 500.
pub async fn handle_preview(State(state): State<AppState>) -> Html<String> {
    let mut session = state.session.write().await;
    session.remount();
    let html = session
        .mounted
        .as_ref()
        .map(|doc| doc.to_html())
        .unwrap_or_default();
    Html(html)
}
