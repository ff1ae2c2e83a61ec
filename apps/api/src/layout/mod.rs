// Layout engine for the export pipeline: static font metrics plus the
// box-model rasterizer. CPU-bound work runs inside tokio::task::spawn_blocking.

pub mod font_metrics;
pub mod rasterizer;

// Re-export the public API consumed by other modules (render, export).
pub use font_metrics::{metrics, FontFamily, LINE_HEIGHT_FACTOR};
