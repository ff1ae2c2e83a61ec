use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::builder::Session;
use crate::config::Config;
use crate::layout::rasterizer::DocumentRasterizer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single builder session - exclusive owner of the live resume data,
    /// selected template, and mounted document. All mutations go through its
    /// write lock in one synchronous update cycle.
    pub session: Arc<RwLock<Session>>,
    /// Pluggable rasterization backend for the export pipeline.
    /// Default: the box-model software rasterizer.
    pub rasterizer: Arc<dyn DocumentRasterizer>,
    /// "At most one export in flight" - the only concurrency discipline the
    /// system needs. Guarded through `export::ExportLease`.
    pub export_busy: Arc<AtomicBool>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, rasterizer: Arc<dyn DocumentRasterizer>) -> Self {
        AppState {
            session: Arc::new(RwLock::new(Session::new())),
            rasterizer,
            export_busy: Arc::new(AtomicBool::new(false)),
            config,
        }
    }
}
