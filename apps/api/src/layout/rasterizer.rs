//! Box-model rasterizer - lays out a [`VisualDocument`] and paints it into
//! an in-memory RGBA bitmap for the PDF export pipeline.
//!
//! The engine is deliberately a visual approximation: blocks become filled
//! rectangles, text becomes greeked ink boxes placed word-by-word using the
//! static font metric tables. Pagination correctness depends on laid-out
//! heights and densities, not glyph shapes, so this keeps the pipeline fully
//! deterministic and free of font-file assets.
//!
//! # spawn_blocking pattern
//! Layout and painting are CPU-bound. The [`DocumentRasterizer`] trait is
//! async; the default backend clones the tree and runs the synchronous
//! engine under `tokio::task::spawn_blocking` so the executor is never
//! blocked mid-export.

use async_trait::async_trait;
use image::{Rgba, RgbaImage};
use thiserror::Error;

use crate::layout::font_metrics::{metrics, LINE_HEIGHT_FACTOR};
use crate::render::{Align, Block, Direction, Node, Rgb, VisualDocument, Width, PAGE_WIDTH_PX};

/// Export sharpness floor. Upscale factors below this produce visibly soft
/// print output, so options are clamped here.
pub const MIN_RASTER_SCALE: u32 = 2;

#[derive(Debug, Clone, Copy)]
pub struct RasterOptions {
    /// Integer upscale factor applied to every laid-out pixel.
    pub scale: u32,
    pub background: Rgb,
}

impl RasterOptions {
    pub fn with_scale(scale: u32) -> Self {
        RasterOptions {
            scale: scale.max(MIN_RASTER_SCALE),
            background: Rgb::WHITE,
        }
    }
}

impl Default for RasterOptions {
    fn default() -> Self {
        RasterOptions::with_scale(MIN_RASTER_SCALE)
    }
}

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("rasterizer backend failure: {0}")]
    Backend(String),
}

/// Pluggable rasterization seam. Held in `AppState` as
/// `Arc<dyn DocumentRasterizer>` so the export pipeline never depends on a
/// concrete backend.
#[async_trait]
pub trait DocumentRasterizer: Send + Sync {
    async fn rasterize(
        &self,
        doc: &VisualDocument,
        opts: &RasterOptions,
    ) -> Result<RgbaImage, RasterError>;
}

/// Default backend: the synchronous box-model engine below.
pub struct BoxModelRasterizer;

#[async_trait]
impl DocumentRasterizer for BoxModelRasterizer {
    async fn rasterize(
        &self,
        doc: &VisualDocument,
        opts: &RasterOptions,
    ) -> Result<RgbaImage, RasterError> {
        let doc = doc.clone();
        let opts = *opts;
        // CPU-bound layout + paint - spawn_blocking to avoid starving the executor.
        tokio::task::spawn_blocking(move || rasterize_sync(&doc, &opts))
            .await
            .map_err(|e| RasterError::Backend(e.to_string()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Synchronous engine
// ────────────────────────────────────────────────────────────────────────────

/// Lays out the document at 1× and paints it at `opts.scale`.
pub fn rasterize_sync(doc: &VisualDocument, opts: &RasterOptions) -> RgbaImage {
    let width = document_width(&doc.root);
    let height = measure_node(&doc.root, width);

    let px_w = (width * opts.scale as f32).round() as u32;
    let px_h = (height.ceil() * opts.scale as f32) as u32;
    let mut img = RgbaImage::from_pixel(px_w, px_h, to_pixel(opts.background));

    paint_node(&mut img, &doc.root, 0.0, 0.0, width, opts.scale);
    img
}

/// The document's laid-out width: the root's fixed width if it has one,
/// otherwise the standard page width.
fn document_width(root: &Node) -> f32 {
    match root {
        Node::Block(b) => match b.style.width {
            Width::Px(w) => w,
            _ => PAGE_WIDTH_PX,
        },
        Node::Text(_) => PAGE_WIDTH_PX,
    }
}

/// Measures a node's laid-out height given its resolved outer width.
pub fn measure_node(node: &Node, avail_w: f32) -> f32 {
    match node {
        Node::Text(text) => {
            let table = metrics(text.style.family);
            let lines = table.wrap(&text.content, text.style.size, avail_w.max(1.0));
            lines.len() as f32 * text.style.size * LINE_HEIGHT_FACTOR
        }
        Node::Block(block) => measure_block(block, avail_w),
    }
}

fn measure_block(block: &Block, avail_w: f32) -> f32 {
    let style = &block.style;
    let content_w = (avail_w - style.padding.left - style.padding.right).max(0.0);
    let children_h = match style.direction {
        Direction::Column => {
            let mut total = 0.0;
            for (i, child) in block.children.iter().enumerate() {
                if i > 0 {
                    total += style.gap;
                }
                total += measure_node(child, child_width(child, content_w, block));
                total += child_margin_bottom(child);
            }
            total
        }
        Direction::Row => {
            let widths = row_widths(block, content_w);
            block
                .children
                .iter()
                .zip(widths.iter())
                .map(|(child, w)| measure_node(child, *w))
                .fold(0.0, f32::max)
        }
    };
    (children_h + style.padding.top + style.padding.bottom).max(style.min_height)
}

fn child_margin_bottom(node: &Node) -> f32 {
    match node {
        Node::Block(b) => b.style.margin_bottom,
        Node::Text(_) => 0.0,
    }
}

/// Width a column child occupies. Fixed widths are honored; everything else
/// fills the content width.
fn child_width(node: &Node, content_w: f32, _parent: &Block) -> f32 {
    match node {
        Node::Block(b) => match b.style.width {
            Width::Px(w) => w.min(content_w),
            Width::Fraction(f) => content_w * f,
            Width::Fill => content_w,
        },
        Node::Text(_) => content_w,
    }
}

/// Resolved widths of a row's children: fixed and fractional first, then the
/// leftover split equally among `Fill` children.
fn row_widths(block: &Block, content_w: f32) -> Vec<f32> {
    let gap_total = block.style.gap * block.children.len().saturating_sub(1) as f32;
    let usable = (content_w - gap_total).max(0.0);

    let mut widths = vec![0.0_f32; block.children.len()];
    let mut fill_count = 0usize;
    let mut fixed_total = 0.0_f32;

    for (i, child) in block.children.iter().enumerate() {
        match child {
            Node::Block(b) => match b.style.width {
                Width::Px(w) => {
                    widths[i] = w;
                    fixed_total += w;
                }
                Width::Fraction(f) => {
                    widths[i] = usable * f;
                    fixed_total += widths[i];
                }
                Width::Fill => fill_count += 1,
            },
            Node::Text(_) => fill_count += 1,
        }
    }

    if fill_count > 0 {
        let share = ((usable - fixed_total) / fill_count as f32).max(0.0);
        for (i, child) in block.children.iter().enumerate() {
            let is_fill = match child {
                Node::Block(b) => matches!(b.style.width, Width::Fill),
                Node::Text(_) => true,
            };
            if is_fill {
                widths[i] = share;
            }
        }
    }
    widths
}

// ────────────────────────────────────────────────────────────────────────────
// Painting
// ────────────────────────────────────────────────────────────────────────────

fn paint_node(img: &mut RgbaImage, node: &Node, x: f32, y: f32, avail_w: f32, scale: u32) {
    match node {
        Node::Block(block) => paint_block(img, block, x, y, avail_w, scale),
        Node::Text(text) => paint_text(img, text, x, y, avail_w, scale),
    }
}

fn paint_block(img: &mut RgbaImage, block: &Block, x: f32, y: f32, avail_w: f32, scale: u32) {
    let style = &block.style;
    let height = measure_block(block, avail_w);

    if let Some(bg) = style.background {
        fill_rect(img, x, y, avail_w, height, scale, bg);
    }
    if let Some(b) = style.border_top {
        fill_rect(img, x, y, avail_w, b.width, scale, b.color);
    }
    if let Some(b) = style.border_bottom {
        fill_rect(img, x, y + height - b.width, avail_w, b.width, scale, b.color);
    }
    if let Some(b) = style.border_left {
        fill_rect(img, x, y, b.width, height, scale, b.color);
    }

    let content_w = (avail_w - style.padding.left - style.padding.right).max(0.0);
    let mut cx = x + style.padding.left;
    let mut cy = y + style.padding.top;

    match style.direction {
        Direction::Column => {
            for child in &block.children {
                let w = child_width(child, content_w, block);
                paint_node(img, child, cx, cy, w, scale);
                cy += measure_node(child, w) + child_margin_bottom(child) + style.gap;
            }
        }
        Direction::Row => {
            let widths = row_widths(block, content_w);
            for (child, w) in block.children.iter().zip(widths.iter()) {
                paint_node(img, child, cx, cy, *w, scale);
                cx += w + style.gap;
            }
        }
    }
}

/// Greeked text: each wrapped line is painted word-by-word as ink boxes of
/// the word's measured width, honoring the line's alignment.
fn paint_text(img: &mut RgbaImage, text: &crate::render::Text, x: f32, y: f32, avail_w: f32, scale: u32) {
    let style = &text.style;
    let table = metrics(style.family);
    let line_h = style.size * LINE_HEIGHT_FACTOR;
    let ink_h = style.size * 0.62;
    let ink_top_offset = (line_h - ink_h) / 2.0;

    let mut line_y = y;
    for line in table.wrap(&text.content, style.size, avail_w.max(1.0)) {
        let line_w = table.measure_px(&line, style.size);
        let mut word_x = match style.align {
            Align::Left => x,
            Align::Center => x + ((avail_w - line_w) / 2.0).max(0.0),
            Align::Right => x + (avail_w - line_w).max(0.0),
        };
        let space_w = table.space_width * style.size;
        for word in line.split_whitespace() {
            let word_w = table.measure_px(word, style.size);
            fill_rect(
                img,
                word_x,
                line_y + ink_top_offset,
                word_w,
                ink_h,
                scale,
                style.color,
            );
            word_x += word_w + space_w;
        }
        line_y += line_h;
    }
}

fn fill_rect(img: &mut RgbaImage, x: f32, y: f32, w: f32, h: f32, scale: u32, color: Rgb) {
    if w <= 0.0 || h <= 0.0 {
        return;
    }
    let s = scale as f32;
    let x0 = (x * s).round().max(0.0) as u32;
    let y0 = (y * s).round().max(0.0) as u32;
    let x1 = (((x + w) * s).round() as u32).min(img.width());
    let y1 = (((y + h) * s).round() as u32).min(img.height());
    let px = to_pixel(color);
    for py in y0..y1 {
        for pxx in x0..x1 {
            img.put_pixel(pxx, py, px);
        }
    }
}

fn to_pixel(color: Rgb) -> Rgba<u8> {
    Rgba([color.r, color.g, color.b, 0xff])
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Block, Text, PAGE_MIN_HEIGHT_PX};

    fn page_doc(children: Vec<Node>) -> VisualDocument {
        VisualDocument::new(
            Block::new()
                .width(Width::Px(PAGE_WIDTH_PX))
                .min_height(PAGE_MIN_HEIGHT_PX)
                .children(children),
        )
    }

    #[test]
    fn test_blank_page_has_min_height() {
        let img = rasterize_sync(&page_doc(vec![]), &RasterOptions::with_scale(2));
        assert_eq!(img.width(), (PAGE_WIDTH_PX * 2.0) as u32);
        assert_eq!(img.height(), (PAGE_MIN_HEIGHT_PX * 2.0) as u32);
    }

    #[test]
    fn test_scale_multiplies_dimensions() {
        let doc = page_doc(vec![Text::new("hello world").into()]);
        let at_2 = rasterize_sync(&doc, &RasterOptions::with_scale(2));
        let at_3 = rasterize_sync(&doc, &RasterOptions::with_scale(3));
        assert_eq!(at_3.width(), at_2.width() / 2 * 3);
    }

    #[test]
    fn test_scale_below_floor_is_clamped() {
        assert_eq!(RasterOptions::with_scale(1).scale, MIN_RASTER_SCALE);
        assert_eq!(RasterOptions::with_scale(4).scale, 4);
    }

    #[test]
    fn test_overflow_grows_past_min_height() {
        let bullets: Vec<Node> = (0..200)
            .map(|i| Text::new(format!("Bullet line number {i} with some wrapping text inside")).into())
            .collect();
        let img = rasterize_sync(&page_doc(bullets), &RasterOptions::with_scale(2));
        assert!(
            img.height() > (PAGE_MIN_HEIGHT_PX * 2.0) as u32,
            "200 lines must overflow one page"
        );
    }

    #[test]
    fn test_painted_text_leaves_ink() {
        let doc = page_doc(vec![Text::new("Sarah Johnson").size(24.0).into()]);
        let img = rasterize_sync(&doc, &RasterOptions::with_scale(2));
        let has_ink = img.pixels().any(|p| p.0 != [0xff, 0xff, 0xff, 0xff]);
        assert!(has_ink, "text must produce non-background pixels");
    }

    #[test]
    fn test_rasterization_is_deterministic() {
        let doc = page_doc(vec![
            Block::new()
                .background(Rgb::new(0x05, 0x96, 0x69))
                .pad(12.0)
                .child(Text::new("Header").size(20.0).color(Rgb::WHITE))
                .into(),
            Text::new("Body content with several words to wrap").into(),
        ]);
        let a = rasterize_sync(&doc, &RasterOptions::default());
        let b = rasterize_sync(&doc, &RasterOptions::default());
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_background_block_fills_color() {
        let green = Rgb::new(0x05, 0x96, 0x69);
        let doc = page_doc(vec![Block::new()
            .background(green)
            .min_height(50.0)
            .into()]);
        let img = rasterize_sync(&doc, &RasterOptions::with_scale(2));
        assert_eq!(img.get_pixel(10, 10).0, [0x05, 0x96, 0x69, 0xff]);
    }

    #[test]
    fn test_row_splits_width_between_columns() {
        let sidebar = Block::new()
            .width(Width::Fraction(1.0 / 3.0))
            .background(Rgb::new(0xf3, 0xf4, 0xf6))
            .min_height(100.0);
        let main = Block::new().min_height(100.0);
        let doc = page_doc(vec![Block::new().row().child(sidebar).child(main).into()]);
        let img = rasterize_sync(&doc, &RasterOptions::with_scale(2));
        // inside the sidebar third
        assert_eq!(img.get_pixel(100, 20).0, [0xf3, 0xf4, 0xf6, 0xff]);
        // inside the main two-thirds - untouched background
        assert_eq!(img.get_pixel((794.0 * 2.0 * 0.8) as u32, 20).0, [0xff; 4]);
    }

    #[test]
    fn test_zero_width_root_yields_empty_bitmap() {
        let doc = VisualDocument::new(Block::new().width(Width::Px(0.0)));
        let img = rasterize_sync(&doc, &RasterOptions::default());
        assert_eq!(img.width(), 0);
    }

    #[tokio::test]
    async fn test_async_backend_matches_sync_engine() {
        let doc = page_doc(vec![Text::new("async parity").into()]);
        let opts = RasterOptions::default();
        let via_trait = BoxModelRasterizer
            .rasterize(&doc, &opts)
            .await
            .expect("rasterize should succeed");
        assert_eq!(via_trait.as_raw(), rasterize_sync(&doc, &opts).as_raw());
    }
}
