//! PDF generation: rasterize the mounted resume, slice the bitmap across A4
//! pages, serialize with printpdf, and write the artifact atomically.
//!
//! Pagination is "one continuous image sliced across N pages": successive
//! pages reveal successive vertical slices of a single rasterized bitmap.
//! No section is guaranteed to avoid a page boundary; that is the accepted
//! cost of template-agnostic visual fidelity.

use std::io::Write;
use std::path::Path;

use image::{DynamicImage, RgbaImage};
use printpdf::{Image, ImageTransform, Mm, PdfDocument};
use tempfile::NamedTempFile;

use crate::export::{
    resume_filename, ExportError, ExportOptions, ExportOutcome, Orientation, PageFormat,
    PAGE_MARGIN_MM,
};
use crate::layout::rasterizer::{measure_node, DocumentRasterizer, RasterOptions};
use crate::render::{Node, VisualDocument, Width, PAGE_WIDTH_PX};

// ────────────────────────────────────────────────────────────────────────────
// Page geometry
// ────────────────────────────────────────────────────────────────────────────

/// Physical page size in millimetres for a format/orientation pair.
pub fn page_dims_mm(format: PageFormat, orientation: Orientation) -> (f32, f32) {
    let (w, h) = match format {
        PageFormat::A4 => (210.0, 297.0),
        PageFormat::Letter => (215.9, 279.4),
    };
    match orientation {
        Orientation::Portrait => (w, h),
        Orientation::Landscape => (h, w),
    }
}

/// One page's vertical window into the rasterized bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlice {
    pub top_px: u32,
    pub height_px: u32,
}

/// Computes the per-page slices for a bitmap scaled to the printable width.
///
/// The image is laid out `page_width - 2 x margin` wide; one printable page
/// holds `page_height - 2 x margin` of it. Slices are contiguous and
/// non-overlapping: no content row is duplicated or skipped, and the page
/// count is exactly `ceil(image_height / printable_height)`.
pub fn paginate(img_w_px: u32, img_h_px: u32, page_w_mm: f32, page_h_mm: f32) -> Vec<PageSlice> {
    if img_w_px == 0 || img_h_px == 0 {
        return vec![];
    }
    let img_w_mm = page_w_mm - 2.0 * PAGE_MARGIN_MM;
    let printable_h_mm = page_h_mm - 2.0 * PAGE_MARGIN_MM;
    let px_per_mm = img_w_px as f32 / img_w_mm;
    let slice_h_px = ((printable_h_mm * px_per_mm).floor() as u32).max(1);

    let mut slices = Vec::new();
    let mut top = 0u32;
    while top < img_h_px {
        let height = slice_h_px.min(img_h_px - top);
        slices.push(PageSlice {
            top_px: top,
            height_px: height,
        });
        top += height;
    }
    slices
}

// ────────────────────────────────────────────────────────────────────────────
// Serialization
// ────────────────────────────────────────────────────────────────────────────

/// Serializes the sliced bitmap into PDF bytes. Pure CPU work - callers run
/// it under `spawn_blocking`.
pub fn write_pdf(
    bitmap: &RgbaImage,
    slices: &[PageSlice],
    page_w_mm: f32,
    page_h_mm: f32,
    title: &str,
) -> Result<Vec<u8>, ExportError> {
    if slices.is_empty() {
        return Err(ExportError::EmptyRaster);
    }

    let img_w_mm = page_w_mm - 2.0 * PAGE_MARGIN_MM;
    let px_per_mm = bitmap.width() as f32 / img_w_mm;
    // printpdf converts pixels to millimetres through DPI; pick the DPI that
    // makes the bitmap exactly img_w_mm wide.
    let dpi = px_per_mm * 25.4;

    let (doc, first_page, first_layer) =
        PdfDocument::new(title, Mm(page_w_mm), Mm(page_h_mm), "content");

    for (i, slice) in slices.iter().enumerate() {
        let layer = if i == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = doc.add_page(Mm(page_w_mm), Mm(page_h_mm), "content");
            doc.get_page(page).get_layer(layer)
        };

        let crop = image::imageops::crop_imm(bitmap, 0, slice.top_px, bitmap.width(), slice.height_px)
            .to_image();
        let rgb = DynamicImage::ImageRgba8(crop).to_rgb8();
        let pdf_image = Image::from_dynamic_image(&DynamicImage::ImageRgb8(rgb));

        let slice_h_mm = slice.height_px as f32 / px_per_mm;
        pdf_image.add_to_layer(
            layer,
            ImageTransform {
                translate_x: Some(Mm(PAGE_MARGIN_MM)),
                // y origin is the page's bottom-left; anchor the slice to the
                // top margin
                translate_y: Some(Mm(page_h_mm - PAGE_MARGIN_MM - slice_h_mm)),
                dpi: Some(dpi),
                ..Default::default()
            },
        );
    }

    doc.save_to_bytes()
        .map_err(|e| ExportError::PdfWrite(e.to_string()))
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs the full export: locate the resume root, rasterize it at the
/// configured upscale, paginate, serialize, and write the artifact
/// atomically into `export_dir`.
///
/// Preconditions are checked before any rasterization work happens, and the
/// resume data is never touched: the pipeline only reads the mounted
/// document snapshot it is handed.
pub async fn export_to_pdf(
    mounted: Option<&VisualDocument>,
    full_name: &str,
    template_key: &str,
    opts: &ExportOptions,
    rasterizer: &dyn DocumentRasterizer,
    raster_scale: u32,
    export_dir: &Path,
) -> Result<ExportOutcome, ExportError> {
    let doc = mounted.ok_or(ExportError::RootNotFound)?;
    let root = doc.find_resume_root().ok_or(ExportError::RootNotFound)?;

    // fail before rasterization on a degenerate layout
    let width = root_width(root);
    let height = measure_node(root, width);
    if width <= 0.0 || height <= 0.0 {
        return Err(ExportError::ZeroDimensions);
    }

    let root_doc = VisualDocument {
        root: root.clone(),
    };
    let raster_opts = RasterOptions::with_scale(raster_scale);
    let bitmap = rasterizer.rasterize(&root_doc, &raster_opts).await?;
    if bitmap.width() == 0 || bitmap.height() == 0 {
        return Err(ExportError::EmptyRaster);
    }

    let (page_w, page_h) = page_dims_mm(opts.format, opts.orientation);
    let slices = paginate(bitmap.width(), bitmap.height(), page_w, page_h);

    let filename = opts.filename.clone().unwrap_or_else(|| {
        resume_filename(full_name, template_key, chrono::Utc::now().date_naive())
    });

    let title = filename.trim_end_matches(".pdf").to_string();
    let pages = slices.len();
    let bytes = tokio::task::spawn_blocking(move || {
        write_pdf(&bitmap, &slices, page_w, page_h, &title)
    })
    .await
    .map_err(|e| ExportError::PdfWrite(e.to_string()))??;

    let final_path = export_dir.join(&filename);
    let mut tmp = NamedTempFile::new_in(export_dir)?;
    tmp.write_all(&bytes)?;
    tmp.persist(&final_path).map_err(|e| ExportError::Io(e.error))?;

    Ok(ExportOutcome {
        filename,
        path: final_path.display().to_string(),
        pages,
        bytes: bytes.len(),
    })
}

fn root_width(root: &Node) -> f32 {
    match root {
        Node::Block(b) => match b.style.width {
            Width::Px(w) => w,
            _ => PAGE_WIDTH_PX,
        },
        Node::Text(_) => PAGE_WIDTH_PX,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::layout::rasterizer::{BoxModelRasterizer, RasterError};
    use crate::models::resume::ResumeData;
    use crate::templates;

    const A4_W: f32 = 210.0;
    const A4_H: f32 = 297.0;

    fn slice_height_px(img_w_px: u32) -> u32 {
        let px_per_mm = img_w_px as f32 / (A4_W - 2.0 * PAGE_MARGIN_MM);
        ((A4_H - 2.0 * PAGE_MARGIN_MM) * px_per_mm).floor() as u32
    }

    #[test]
    fn test_paginate_single_page_when_image_fits() {
        let w = 1588;
        let slice = slice_height_px(w);
        let slices = paginate(w, slice - 10, A4_W, A4_H);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0], PageSlice { top_px: 0, height_px: slice - 10 });
    }

    #[test]
    fn test_paginate_page_count_is_ceiling() {
        let w = 1588;
        let slice = slice_height_px(w);
        for (h, expected) in [
            (slice, 1),
            (slice + 1, 2),
            (2 * slice, 2),
            (2 * slice + slice / 2, 3),
        ] {
            let slices = paginate(w, h, A4_W, A4_H);
            assert_eq!(
                slices.len(),
                expected,
                "image height {h} with slice {slice} should paginate to {expected} pages"
            );
            assert_eq!(slices.len(), ((h + slice - 1) / slice) as usize);
        }
    }

    #[test]
    fn test_paginate_slices_are_contiguous_and_exhaustive() {
        let w = 1588;
        let h = 5000;
        let slices = paginate(w, h, A4_W, A4_H);
        let mut expected_top = 0;
        for slice in &slices {
            assert_eq!(slice.top_px, expected_top, "no row skipped or duplicated");
            expected_top += slice.height_px;
        }
        assert_eq!(expected_top, h, "slices must cover the full image");
    }

    #[test]
    fn test_paginate_empty_bitmap_yields_no_pages() {
        assert!(paginate(0, 100, A4_W, A4_H).is_empty());
        assert!(paginate(100, 0, A4_W, A4_H).is_empty());
    }

    #[test]
    fn test_write_pdf_produces_pdf_bytes() {
        let bitmap = RgbaImage::from_pixel(200, 300, image::Rgba([0xee, 0xee, 0xee, 0xff]));
        let slices = paginate(200, 300, A4_W, A4_H);
        let bytes = write_pdf(&bitmap, &slices, A4_W, A4_H, "test").unwrap();
        assert!(bytes.starts_with(b"%PDF"), "output must be a PDF document");
    }

    #[test]
    fn test_write_pdf_rejects_empty_slice_list() {
        let bitmap = RgbaImage::new(10, 10);
        assert!(matches!(
            write_pdf(&bitmap, &[], A4_W, A4_H, "test"),
            Err(ExportError::EmptyRaster)
        ));
    }

    /// Counts rasterize calls so precondition tests can prove no
    /// rasterization work happened.
    struct CountingRasterizer {
        calls: Arc<AtomicUsize>,
        inner: BoxModelRasterizer,
    }

    #[async_trait]
    impl DocumentRasterizer for CountingRasterizer {
        async fn rasterize(
            &self,
            doc: &VisualDocument,
            opts: &RasterOptions,
        ) -> Result<image::RgbaImage, RasterError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.rasterize(doc, opts).await
        }
    }

    #[tokio::test]
    async fn test_export_without_mounted_document_fails_before_rasterizing() {
        let calls = Arc::new(AtomicUsize::new(0));
        let rasterizer = CountingRasterizer {
            calls: Arc::clone(&calls),
            inner: BoxModelRasterizer,
        };
        let dir = tempfile::tempdir().unwrap();
        let result = export_to_pdf(
            None,
            "Sarah Johnson",
            "modern",
            &ExportOptions::default(),
            &rasterizer,
            2,
            dir.path(),
        )
        .await;
        assert!(matches!(result, Err(ExportError::RootNotFound)));
        assert_eq!(calls.load(Ordering::SeqCst), 0, "no rasterization work on abort");
        assert_eq!(
            std::fs::read_dir(dir.path()).unwrap().count(),
            0,
            "no artifact written on abort"
        );
    }

    #[tokio::test]
    async fn test_export_unmarked_document_is_root_not_found() {
        use crate::render::{Block, Text};
        let doc = VisualDocument::new(Block::new().child(Text::new("no marker here")));
        let result = export_to_pdf(
            Some(&doc),
            "",
            "modern",
            &ExportOptions::default(),
            &BoxModelRasterizer,
            2,
            tempfile::tempdir().unwrap().path(),
        )
        .await;
        assert!(matches!(result, Err(ExportError::RootNotFound)));
    }

    #[tokio::test]
    async fn test_export_zero_width_root_fails_precondition() {
        use crate::render::{Block, RESUME_ROOT_MARKER};
        let calls = Arc::new(AtomicUsize::new(0));
        let rasterizer = CountingRasterizer {
            calls: Arc::clone(&calls),
            inner: BoxModelRasterizer,
        };
        let doc = VisualDocument::new(
            Block::new().width(Width::Px(0.0)).attr(RESUME_ROOT_MARKER, ""),
        );
        let result = export_to_pdf(
            Some(&doc),
            "",
            "modern",
            &ExportOptions::default(),
            &rasterizer,
            2,
            tempfile::tempdir().unwrap().path(),
        )
        .await;
        assert!(matches!(result, Err(ExportError::ZeroDimensions)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_export_full_pipeline_writes_artifact() {
        let data = ResumeData::example();
        let entry = templates::find("modern").unwrap();
        let doc = entry.renderer.render(&data);
        let dir = tempfile::tempdir().unwrap();

        let outcome = export_to_pdf(
            Some(&doc),
            &data.personal_info.full_name,
            entry.key,
            &ExportOptions::default(),
            &BoxModelRasterizer,
            2,
            dir.path(),
        )
        .await
        .expect("export should succeed");

        assert!(outcome.filename.starts_with("sarah_johnson_modern_"));
        assert!(outcome.filename.ends_with(".pdf"));
        assert!(outcome.pages >= 1);
        let written = std::fs::read(dir.path().join(&outcome.filename)).unwrap();
        assert_eq!(written.len(), outcome.bytes);
        assert!(written.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_export_respects_filename_override() {
        let data = ResumeData::example();
        let doc = templates::find("classic").unwrap().renderer.render(&data);
        let dir = tempfile::tempdir().unwrap();
        let opts = ExportOptions {
            filename: Some("custom.pdf".into()),
            ..Default::default()
        };
        let outcome = export_to_pdf(
            Some(&doc),
            "x",
            "classic",
            &opts,
            &BoxModelRasterizer,
            2,
            dir.path(),
        )
        .await
        .unwrap();
        assert_eq!(outcome.filename, "custom.pdf");
        assert!(dir.path().join("custom.pdf").exists());
    }
}
