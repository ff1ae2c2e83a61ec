//! Export pipeline - converts the mounted visual document into a paginated
//! PDF artifact or a print-ready document, without ever touching the resume
//! data itself.
//!
//! The operations here return structured outcomes and typed errors;
//! user-facing notification (logging, toasts, banners) is an adapter concern
//! of the HTTP handlers, not of the pipeline.

pub mod handlers;
pub mod pdf;
pub mod print;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::rasterizer::RasterError;

/// Fixed page margin on every side, in millimetres.
pub const PAGE_MARGIN_MM: f32 = 10.0;

// ────────────────────────────────────────────────────────────────────────────
// Options and outcomes
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageFormat {
    #[default]
    A4,
    Letter,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportOptions {
    /// Overrides the generated artifact name when set.
    pub filename: Option<String>,
    /// Clamped to (0, 1]. The bitmap is embedded losslessly, so the factor
    /// is accepted and validated but does not change the output bytes.
    pub quality: f32,
    pub format: PageFormat,
    pub orientation: Orientation,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            filename: None,
            quality: 0.95,
            format: PageFormat::A4,
            orientation: Orientation::Portrait,
        }
    }
}

impl ExportOptions {
    pub fn clamped(mut self) -> Self {
        self.quality = self.quality.clamp(0.05, 1.0);
        self
    }
}

/// Structured result of a finished PDF export.
#[derive(Debug, Clone, Serialize)]
pub struct ExportOutcome {
    pub filename: String,
    pub path: String,
    pub pages: usize,
    pub bytes: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Error taxonomy
// ────────────────────────────────────────────────────────────────────────────

/// Every failure mode of the export and print paths. All variants are
/// recoverable: the user may retry or switch templates, and the resume data
/// is never modified on any path.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("resume template element not found - render a preview first")]
    RootNotFound,

    #[error("resume element has zero dimensions - cannot generate a PDF")]
    ZeroDimensions,

    #[error("rasterized output is empty - no content to convert")]
    EmptyRaster,

    #[error(transparent)]
    Raster(#[from] RasterError),

    #[error("image conversion failed: {0}")]
    ImageEncoding(String),

    #[error("PDF serialization failed: {0}")]
    PdfWrite(String),

    #[error("could not write export artifact: {0}")]
    Io(#[from] std::io::Error),
}

// ────────────────────────────────────────────────────────────────────────────
// In-flight guard
// ────────────────────────────────────────────────────────────────────────────

/// RAII lease enforcing "at most one export in flight".
///
/// Acquisition flips the shared busy flag; dropping the lease clears it on
/// every path, including early aborts, so the flag can never stick.
pub struct ExportLease {
    flag: Arc<AtomicBool>,
}

impl ExportLease {
    pub fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| ExportLease {
                flag: Arc::clone(flag),
            })
    }
}

impl Drop for ExportLease {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Artifact naming
// ────────────────────────────────────────────────────────────────────────────

/// Collapses a display name into a filename-safe slug: every non-alphanumeric
/// byte becomes an underscore, the result is lowercased.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect()
}

/// `{sanitized_full_name_or_"resume"}_{template_key}_{ISO date}.pdf`
pub fn resume_filename(full_name: &str, template_key: &str, date: NaiveDate) -> String {
    let slug = sanitize_name(full_name.trim());
    let name = if slug.chars().all(|c| c == '_') {
        "resume".to_string()
    } else {
        slug
    };
    format!(
        "{name}_{}_{}.pdf",
        template_key.to_lowercase(),
        date.format("%Y-%m-%d")
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lease_rejects_second_acquisition() {
        let flag = Arc::new(AtomicBool::new(false));
        let first = ExportLease::acquire(&flag).expect("first acquisition succeeds");
        assert!(
            ExportLease::acquire(&flag).is_none(),
            "second acquisition while in flight must be rejected"
        );
        drop(first);
        assert!(
            ExportLease::acquire(&flag).is_some(),
            "flag must clear when the lease drops"
        );
    }

    #[test]
    fn test_lease_clears_on_early_abort() {
        let flag = Arc::new(AtomicBool::new(false));
        {
            let _lease = ExportLease::acquire(&flag).unwrap();
            // simulated abort: lease dropped by unwinding out of scope
        }
        assert!(!flag.load(Ordering::SeqCst));
    }

    #[test]
    fn test_sanitize_name_replaces_punctuation() {
        assert_eq!(sanitize_name("Sarah Johnson"), "sarah_johnson");
        assert_eq!(sanitize_name("J.R. O'Neil-Smith"), "j_r__o_neil_smith");
    }

    #[test]
    fn test_resume_filename_shape() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(
            resume_filename("Sarah Johnson", "modern", date),
            "sarah_johnson_modern_2024-03-09.pdf"
        );
    }

    #[test]
    fn test_resume_filename_falls_back_for_blank_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(
            resume_filename("  ", "Classic", date),
            "resume_classic_2024-03-09.pdf"
        );
    }

    #[test]
    fn test_quality_clamped_into_range() {
        let opts = ExportOptions {
            quality: 7.5,
            ..Default::default()
        }
        .clamped();
        assert_eq!(opts.quality, 1.0);
    }

    #[test]
    fn test_options_default_from_empty_json() {
        let opts: ExportOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts.format, PageFormat::A4);
        assert_eq!(opts.orientation, Orientation::Portrait);
        assert!((opts.quality - 0.95).abs() < 1e-6);
    }

    #[test]
    fn test_page_format_wire_names() {
        let f: PageFormat = serde_json::from_str("\"letter\"").unwrap();
        assert_eq!(f, PageFormat::Letter);
    }
}
