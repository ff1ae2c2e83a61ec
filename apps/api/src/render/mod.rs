//! The visual document tree - the output contract shared by all template
//! renderers and the input contract of the export pipeline.
//!
//! Templates build a tree of [`Block`] and [`Text`] nodes; the tree is a
//! plain value with no behavior of its own. Three consumers walk it:
//! the HTML serializer (preview and print), the box-model rasterizer
//! (PDF export), and the root lookup used by both export paths.
//!
//! The outermost container of every rendered resume carries the
//! [`RESUME_ROOT_MARKER`] attribute so collaborators can locate it without
//! knowing which template produced it.

use crate::layout::FontFamily;

/// Stable machine-discoverable attribute on the rendered resume's root.
pub const RESUME_ROOT_MARKER: &str = "data-resume-template";
/// First fallback for root discovery.
pub const RESUME_ROOT_CLASS: &str = "resume-template";

/// A4 at 96 DPI. Fixed width; height grows downward for overflow.
pub const PAGE_WIDTH_PX: f32 = 794.0;
pub const PAGE_MIN_HEIGHT_PX: f32 = 1123.0;

// ────────────────────────────────────────────────────────────────────────────
// Style primitives
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
    pub const BLACK: Rgb = Rgb::new(0x11, 0x18, 0x27);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Column,
    Row,
}

/// Horizontal sizing of a block inside its parent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Width {
    /// Take an equal share of whatever the fixed-width siblings leave over.
    #[default]
    Fill,
    Px(f32),
    /// Fraction of the parent's content width (0.0 – 1.0].
    Fraction(f32),
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    pub const fn all(v: f32) -> Self {
        Edges {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Edges {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Rgb,
}

impl Border {
    pub const fn new(width: f32, color: Rgb) -> Self {
        Border { width, color }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStyle {
    pub direction: Direction,
    pub width: Width,
    pub min_height: f32,
    pub padding: Edges,
    pub margin_bottom: f32,
    /// Vertical gap between children of a column, horizontal for a row.
    pub gap: f32,
    pub background: Option<Rgb>,
    pub border_top: Option<Border>,
    pub border_bottom: Option<Border>,
    pub border_left: Option<Border>,
}

impl Default for BlockStyle {
    fn default() -> Self {
        BlockStyle {
            direction: Direction::Column,
            width: Width::Fill,
            min_height: 0.0,
            padding: Edges::default(),
            margin_bottom: 0.0,
            gap: 0.0,
            background: None,
            border_top: None,
            border_bottom: None,
            border_left: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub family: FontFamily,
    pub size: f32,
    pub bold: bool,
    pub italic: bool,
    pub color: Rgb,
    pub align: Align,
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            family: FontFamily::Sans,
            size: 12.0,
            bold: false,
            italic: false,
            color: Rgb::BLACK,
            align: Align::Left,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Nodes
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Block(Block),
    Text(Text),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    pub style: BlockStyle,
    pub attrs: Vec<(String, String)>,
    pub classes: Vec<String>,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub style: TextStyle,
    pub content: String,
}

impl Block {
    pub fn new() -> Self {
        Block::default()
    }

    pub fn row(mut self) -> Self {
        self.style.direction = Direction::Row;
        self
    }

    pub fn width(mut self, width: Width) -> Self {
        self.style.width = width;
        self
    }

    pub fn min_height(mut self, px: f32) -> Self {
        self.style.min_height = px;
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.style.padding = edges;
        self
    }

    pub fn pad(self, px: f32) -> Self {
        self.padding(Edges::all(px))
    }

    pub fn margin_bottom(mut self, px: f32) -> Self {
        self.style.margin_bottom = px;
        self
    }

    pub fn gap(mut self, px: f32) -> Self {
        self.style.gap = px;
        self
    }

    pub fn background(mut self, color: Rgb) -> Self {
        self.style.background = Some(color);
        self
    }

    pub fn border_top(mut self, border: Border) -> Self {
        self.style.border_top = Some(border);
        self
    }

    pub fn border_bottom(mut self, border: Border) -> Self {
        self.style.border_bottom = Some(border);
        self
    }

    pub fn border_left(mut self, border: Border) -> Self {
        self.style.border_left = Some(border);
        self
    }

    pub fn attr(mut self, key: &str, value: &str) -> Self {
        self.attrs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn class(mut self, name: &str) -> Self {
        self.classes.push(name.to_string());
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Text {
            style: TextStyle::default(),
            content: content.into(),
        }
    }

    pub fn family(mut self, family: FontFamily) -> Self {
        self.style.family = family;
        self
    }

    pub fn size(mut self, px: f32) -> Self {
        self.style.size = px;
        self
    }

    pub fn bold(mut self) -> Self {
        self.style.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.style.italic = true;
        self
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.style.color = color;
        self
    }

    pub fn center(mut self) -> Self {
        self.style.align = Align::Center;
        self
    }

    pub fn right(mut self) -> Self {
        self.style.align = Align::Right;
        self
    }
}

impl From<Block> for Node {
    fn from(block: Block) -> Self {
        Node::Block(block)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Document
// ────────────────────────────────────────────────────────────────────────────

/// A rendered template's full output: one rooted tree.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualDocument {
    pub root: Node,
}

impl VisualDocument {
    pub fn new(root: impl Into<Node>) -> Self {
        VisualDocument { root: root.into() }
    }

    /// Cascading root lookup used by both export paths: marker attribute,
    /// then fallback class, then the fixed-794px-width heuristic.
    pub fn find_resume_root(&self) -> Option<&Node> {
        find_block(&self.root, &|b| {
            b.attrs.iter().any(|(k, _)| k == RESUME_ROOT_MARKER)
        })
        .or_else(|| {
            find_block(&self.root, &|b| {
                b.classes.iter().any(|c| c == RESUME_ROOT_CLASS)
            })
        })
        .or_else(|| {
            find_block(&self.root, &|b| {
                matches!(b.style.width, Width::Px(w) if (w - PAGE_WIDTH_PX).abs() < 0.5)
            })
        })
    }

    /// Serializes the tree to standalone-embeddable HTML with inline styles.
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(4096);
        write_node(&self.root, &mut out);
        out
    }
}

fn find_block<'a>(node: &'a Node, pred: &dyn Fn(&Block) -> bool) -> Option<&'a Node> {
    match node {
        Node::Text(_) => None,
        Node::Block(block) => {
            if pred(block) {
                return Some(node);
            }
            block.children.iter().find_map(|c| find_block(c, pred))
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// HTML serialization
// ────────────────────────────────────────────────────────────────────────────

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Block(block) => {
            out.push_str("<div");
            if !block.classes.is_empty() {
                out.push_str(&format!(" class=\"{}\"", escape_attr(&block.classes.join(" "))));
            }
            for (key, value) in &block.attrs {
                out.push_str(&format!(" {}=\"{}\"", key, escape_attr(value)));
            }
            out.push_str(&format!(" style=\"{}\">", block_css(&block.style)));
            for child in &block.children {
                write_node(child, out);
            }
            out.push_str("</div>");
        }
        Node::Text(text) => {
            out.push_str(&format!(
                "<div style=\"{}\">{}</div>",
                text_css(&text.style),
                escape_html(&text.content)
            ));
        }
    }
}

fn block_css(style: &BlockStyle) -> String {
    let mut css = String::from("display:flex;box-sizing:border-box;");
    css.push_str(match style.direction {
        Direction::Column => "flex-direction:column;",
        Direction::Row => "flex-direction:row;",
    });
    match style.width {
        Width::Fill => css.push_str("flex:1 1 0;"),
        Width::Px(w) => css.push_str(&format!("width:{w}px;flex:0 0 auto;")),
        Width::Fraction(f) => css.push_str(&format!("width:{:.4}%;flex:0 0 auto;", f * 100.0)),
    }
    if style.min_height > 0.0 {
        css.push_str(&format!("min-height:{}px;", style.min_height));
    }
    let p = style.padding;
    if p != Edges::default() {
        css.push_str(&format!(
            "padding:{}px {}px {}px {}px;",
            p.top, p.right, p.bottom, p.left
        ));
    }
    if style.margin_bottom > 0.0 {
        css.push_str(&format!("margin-bottom:{}px;", style.margin_bottom));
    }
    if style.gap > 0.0 {
        css.push_str(&format!("gap:{}px;", style.gap));
    }
    if let Some(bg) = style.background {
        css.push_str(&format!("background:{};", bg.to_css()));
    }
    if let Some(b) = style.border_top {
        css.push_str(&format!("border-top:{}px solid {};", b.width, b.color.to_css()));
    }
    if let Some(b) = style.border_bottom {
        css.push_str(&format!(
            "border-bottom:{}px solid {};",
            b.width,
            b.color.to_css()
        ));
    }
    if let Some(b) = style.border_left {
        css.push_str(&format!("border-left:{}px solid {};", b.width, b.color.to_css()));
    }
    css
}

fn text_css(style: &TextStyle) -> String {
    let mut css = format!(
        "font-family:{};font-size:{}px;line-height:1.4;color:{};",
        style.family.css_stack(),
        style.size,
        style.color.to_css()
    );
    if style.bold {
        css.push_str("font-weight:700;");
    }
    if style.italic {
        css.push_str("font-style:italic;");
    }
    match style.align {
        Align::Left => {}
        Align::Center => css.push_str("text-align:center;"),
        Align::Right => css.push_str("text-align:right;"),
    }
    css
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_html(s).replace('"', "&quot;")
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn marked_root() -> Block {
        Block::new()
            .width(Width::Px(PAGE_WIDTH_PX))
            .min_height(PAGE_MIN_HEIGHT_PX)
            .attr(RESUME_ROOT_MARKER, "")
            .class(RESUME_ROOT_CLASS)
            .child(Text::new("hello"))
    }

    #[test]
    fn test_find_root_by_marker_attribute() {
        let doc = VisualDocument::new(Block::new().child(marked_root()));
        let root = doc.find_resume_root().expect("root should be found");
        match root {
            Node::Block(b) => assert!(b.attrs.iter().any(|(k, _)| k == RESUME_ROOT_MARKER)),
            Node::Text(_) => panic!("root must be a block"),
        }
    }

    #[test]
    fn test_find_root_falls_back_to_class() {
        let inner = Block::new().class(RESUME_ROOT_CLASS).child(Text::new("x"));
        let doc = VisualDocument::new(Block::new().child(inner));
        assert!(doc.find_resume_root().is_some());
    }

    #[test]
    fn test_find_root_falls_back_to_known_width() {
        let inner = Block::new().width(Width::Px(794.0)).child(Text::new("x"));
        let doc = VisualDocument::new(Block::new().child(inner));
        assert!(doc.find_resume_root().is_some());
    }

    #[test]
    fn test_find_root_none_when_unmarked() {
        let doc = VisualDocument::new(Block::new().child(Text::new("plain")));
        assert!(doc.find_resume_root().is_none());
    }

    #[test]
    fn test_html_carries_marker_and_escapes_content() {
        let doc = VisualDocument::new(
            marked_root().child(Text::new("<script>alert('x')</script> & more")),
        );
        let html = doc.to_html();
        assert!(html.contains("data-resume-template=\"\""));
        assert!(html.contains("class=\"resume-template\""));
        assert!(html.contains("width:794px"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&amp; more"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_row_children_fraction_css() {
        let doc = VisualDocument::new(
            Block::new()
                .row()
                .child(Block::new().width(Width::Fraction(1.0 / 3.0)))
                .child(Block::new()),
        );
        let html = doc.to_html();
        assert!(html.contains("flex-direction:row"));
        assert!(html.contains("width:33.3333%"));
        assert!(html.contains("flex:1 1 0"));
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let doc = VisualDocument::new(marked_root());
        assert_eq!(doc.to_html(), doc.to_html());
    }
}
