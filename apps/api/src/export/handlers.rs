use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::export::pdf::export_to_pdf;
use crate::export::print::{build_print_document, PrintPath};
use crate::export::{ExportLease, ExportOptions, ExportOutcome};
use crate::state::AppState;

/// POST /api/v1/export/pdf
///
/// Runs the full export pipeline against a snapshot of the mounted document.
/// A second call while one is in flight is rejected with 409 - the lease is
/// the busy flag, and dropping it (on success, failure, or early abort)
/// clears the flag.
pub async fn handle_export_pdf(
    State(state): State<AppState>,
    body: Option<Json<ExportOptions>>,
) -> Result<Json<ExportOutcome>, AppError> {
    let opts = body.map(|Json(o)| o).unwrap_or_default().clamped();
    let _lease = ExportLease::acquire(&state.export_busy).ok_or(AppError::ExportInFlight)?;

    // Snapshot under the read lock: a template switch mid-export affects
    // only subsequent exports, never this one.
    let (mounted, template_key, full_name) = {
        let session = state.session.read().await;
        (
            session.mounted.clone(),
            session.template_key().to_string(),
            session.resume.personal_info.full_name.clone(),
        )
    };

    info!(template = %template_key, "PDF export started");
    let result = export_to_pdf(
        mounted.as_ref(),
        &full_name,
        &template_key,
        &opts,
        state.rasterizer.as_ref(),
        state.config.raster_scale,
        &state.config.export_dir,
    )
    .await;

    match result {
        Ok(outcome) => {
            info!(
                filename = %outcome.filename,
                pages = outcome.pages,
                bytes = outcome.bytes,
                "PDF export finished"
            );
            Ok(Json(outcome))
        }
        Err(err) => {
            warn!("PDF export failed: {err}");
            Err(err.into())
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PrintQuery {
    #[serde(default)]
    pub path: PrintPath,
}

/// POST /api/v1/export/print
///
/// Returns the standalone print document for the requested path. Reads the
/// mounted snapshot only; session state is identical before and after,
/// including when the caller abandons the print dialog.
pub async fn handle_export_print(
    State(state): State<AppState>,
    Query(query): Query<PrintQuery>,
) -> Result<Html<String>, AppError> {
    let session = state.session.read().await;
    let document = build_print_document(session.mounted.as_ref(), query.path)?;
    info!(path = ?document.path, "print document prepared");
    Ok(Html(document.html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::config::Config;
    use crate::layout::rasterizer::{
        BoxModelRasterizer, DocumentRasterizer, RasterError, RasterOptions,
    };
    use crate::models::resume::ResumeData;
    use crate::render::VisualDocument;

    /// Slows rasterization down enough that a second export request lands
    /// while the first is still in flight, and counts invocations.
    struct SlowRasterizer {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl DocumentRasterizer for SlowRasterizer {
        async fn rasterize(
            &self,
            doc: &VisualDocument,
            opts: &RasterOptions,
        ) -> Result<image::RgbaImage, RasterError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(150)).await;
            BoxModelRasterizer.rasterize(doc, opts).await
        }
    }

    fn slow_state(calls: &Arc<AtomicUsize>, export_dir: std::path::PathBuf) -> AppState {
        let config = Config {
            port: 0,
            rust_log: "info".into(),
            export_dir,
            raster_scale: 2,
        };
        AppState::new(
            config,
            Arc::new(SlowRasterizer {
                calls: Arc::clone(calls),
            }),
        )
    }

    #[tokio::test]
    async fn test_second_export_in_flight_is_rejected() {
        let calls = Arc::new(AtomicUsize::new(0));
        let dir = tempfile::tempdir().unwrap();
        let state = slow_state(&calls, dir.path().to_path_buf());
        {
            let mut session = state.session.write().await;
            session.replace_resume(ResumeData::example());
        }

        let (first, second) = tokio::join!(
            handle_export_pdf(State(state.clone()), None),
            handle_export_pdf(State(state.clone()), None),
        );

        let results = [first, second];
        let ok_count = results.iter().filter(|r| r.is_ok()).count();
        let busy_count = results
            .iter()
            .filter(|r| matches!(r, Err(AppError::ExportInFlight)))
            .count();
        assert_eq!(ok_count, 1, "exactly one export runs");
        assert_eq!(busy_count, 1, "the overlapping call is rejected");
        assert_eq!(
            calls.load(Ordering::SeqCst),
            1,
            "exactly one rasterization sequence executes"
        );
    }

    #[tokio::test]
    async fn test_busy_flag_clears_after_failed_export() {
        let calls = Arc::new(AtomicUsize::new(0));
        let dir = tempfile::tempdir().unwrap();
        let state = slow_state(&calls, dir.path().to_path_buf());

        // nothing mounted yet: precondition failure, no rasterization
        let result = handle_export_pdf(State(state.clone()), None).await;
        assert!(matches!(
            result,
            Err(AppError::Export(crate::export::ExportError::RootNotFound))
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        // the flag must not be stuck: a retry after mounting succeeds
        {
            let mut session = state.session.write().await;
            session.replace_resume(ResumeData::example());
        }
        let retry = handle_export_pdf(State(state.clone()), None).await;
        assert!(retry.is_ok(), "flag cleared after the failed attempt");
    }

    #[tokio::test]
    async fn test_print_handler_requires_mounted_root() {
        let calls = Arc::new(AtomicUsize::new(0));
        let dir = tempfile::tempdir().unwrap();
        let state = slow_state(&calls, dir.path().to_path_buf());

        let result =
            handle_export_print(State(state.clone()), Query(PrintQuery::default())).await;
        assert!(result.is_err(), "no mounted root yet");

        {
            let mut session = state.session.write().await;
            session.replace_resume(ResumeData::example());
        }
        let html = handle_export_print(State(state), Query(PrintQuery::default()))
            .await
            .unwrap();
        assert!(html.0.contains("Sarah Johnson"));
    }
}
