//! Static font-metric tables for the three template font stacks.
//!
//! Character widths are in em units (relative to font size). This is an
//! intentional approximation: the export rasterizer needs line counts and
//! ink extents that are close enough to the on-screen layout to paginate
//! faithfully, not glyph-exact shaping. Static tables catch the real cases
//! (a bullet wrapping to a second line, a sidebar column growing taller
//! than the main column) while tolerating ±1–2% of line width.
//!
//! All tables cover ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

use serde::{Deserialize, Serialize};

/// Vertical advance per wrapped line, as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f32 = 1.4;

// ────────────────────────────────────────────────────────────────────────────
// Font families
// ────────────────────────────────────────────────────────────────────────────

/// The three font stacks the template set draws from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    /// Default for most templates - clean humanist sans-serif.
    #[default]
    Sans,
    /// Elegant/classic/academic templates - old-style serif.
    Serif,
    /// Monochrome template - fixed-width terminal look.
    Mono,
}

impl FontFamily {
    /// CSS font stack used by the HTML serializer.
    pub fn css_stack(self) -> &'static str {
        match self {
            FontFamily::Sans => "'Inter','Helvetica Neue',Arial,sans-serif",
            FontFamily::Serif => "Georgia,'Times New Roman',serif",
            FontFamily::Mono => "'JetBrains Mono','Courier New',monospace",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Metric tables
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for one font stack.
///
/// All widths are in em units at 1em. `widths[i]` = width of ASCII character
/// `(i + 32)`, covering 0x20 (space) through 0x7E (~).
pub struct FontMetricTable {
    pub family: FontFamily,
    widths: [f32; 95],
    /// Fallback width for non-ASCII characters (codepoints > 0x7E).
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in pixels at `size_px`.
    ///
    /// Non-ASCII characters fall back to `average_char_width`.
    pub fn measure_px(&self, s: &str, size_px: f32) -> f32 {
        let em: f32 = s
            .chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum();
        em * size_px
    }

    /// Greedy word-wrap at `max_width_px`, returning the wrapped lines.
    ///
    /// A single word wider than the line is placed on its own line rather
    /// than broken mid-word. Whitespace-only input yields no lines.
    pub fn wrap(&self, s: &str, size_px: f32, max_width_px: f32) -> Vec<String> {
        let words: Vec<&str> = s.split_whitespace().collect();
        if words.is_empty() {
            return vec![];
        }

        let space_px = self.space_width * size_px;
        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in words {
            let word_px = self.measure_px(word, size_px);
            if current.is_empty() {
                current.push_str(word);
                current_width = word_px;
            } else if current_width + space_px + word_px > max_width_px {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_px;
            } else {
                current.push(' ');
                current.push_str(word);
                current_width += space_px + word_px;
            }
        }
        lines.push(current);
        lines
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

/// Humanist sans-serif stack (Inter metrics).
static SANS_TABLE: FontMetricTable = FontMetricTable {
    family: FontFamily::Sans,
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.25, 0.30, 0.38, 0.56, 0.56, 0.89, 0.67, 0.22, 0.33, 0.33, 0.39, 0.59, 0.28, 0.33, 0.28, 0.31,
        // 0     1     2     3     4     5     6     7     8     9
        0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56,
        // :     ;     <     =     >     ?     @
        0.28, 0.28, 0.59, 0.59, 0.59, 0.50, 1.02,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.67, 0.61, 0.61, 0.67, 0.56, 0.50, 0.67, 0.67, 0.25, 0.39, 0.61, 0.53, 0.78,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.67, 0.72, 0.56, 0.72, 0.61, 0.50, 0.56, 0.67, 0.67, 0.89, 0.61, 0.61, 0.56,
        // [     \     ]     ^     _     `
        0.28, 0.31, 0.28, 0.47, 0.56, 0.34,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.56, 0.56, 0.50, 0.56, 0.56, 0.31, 0.56, 0.56, 0.22, 0.22, 0.53, 0.22, 0.83,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.56, 0.56, 0.56, 0.56, 0.33, 0.44, 0.39, 0.56, 0.50, 0.72, 0.50, 0.50, 0.44,
        // {     |     }     ~
        0.33, 0.26, 0.33, 0.59,
    ],
    average_char_width: 0.52,
    space_width: 0.25,
};

/// Old-style serif stack (Garamond-class metrics, ~85% of the sans widths).
static SERIF_TABLE: FontMetricTable = FontMetricTable {
    family: FontFamily::Serif,
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.21, 0.26, 0.32, 0.48, 0.48, 0.76, 0.57, 0.19, 0.28, 0.28, 0.33, 0.50, 0.24, 0.28, 0.24, 0.26,
        // 0     1     2     3     4     5     6     7     8     9
        0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48,
        // :     ;     <     =     >     ?     @
        0.24, 0.24, 0.50, 0.50, 0.50, 0.43, 0.87,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.57, 0.52, 0.52, 0.57, 0.48, 0.43, 0.57, 0.57, 0.21, 0.33, 0.52, 0.45, 0.66,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.57, 0.61, 0.48, 0.61, 0.52, 0.43, 0.48, 0.57, 0.57, 0.76, 0.52, 0.52, 0.48,
        // [     \     ]     ^     _     `
        0.24, 0.26, 0.24, 0.40, 0.48, 0.29,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.48, 0.48, 0.43, 0.48, 0.48, 0.26, 0.48, 0.48, 0.19, 0.19, 0.45, 0.19, 0.71,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.48, 0.48, 0.48, 0.48, 0.28, 0.37, 0.33, 0.48, 0.43, 0.61, 0.43, 0.43, 0.37,
        // {     |     }     ~
        0.28, 0.22, 0.28, 0.50,
    ],
    average_char_width: 0.44,
    space_width: 0.21,
};

/// Fixed-width stack - every glyph advances 0.60em.
static MONO_TABLE: FontMetricTable = FontMetricTable {
    family: FontFamily::Mono,
    widths: [0.60; 95],
    average_char_width: 0.60,
    space_width: 0.60,
};

/// Returns the static metric table for a font stack.
pub fn metrics(family: FontFamily) -> &'static FontMetricTable {
    match family {
        FontFamily::Sans => &SANS_TABLE,
        FontFamily::Serif => &SERIF_TABLE,
        FontFamily::Mono => &MONO_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_empty_returns_zero() {
        assert_eq!(metrics(FontFamily::Sans).measure_px("", 12.0), 0.0);
    }

    #[test]
    fn test_measure_scales_with_font_size() {
        let table = metrics(FontFamily::Sans);
        let at_12 = table.measure_px("Rust", 12.0);
        let at_24 = table.measure_px("Rust", 24.0);
        assert!((at_24 - at_12 * 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_measure_ascii_characters() {
        // "Rust" = R(0.61) + u(0.56) + s(0.44) + t(0.39) = 2.00em
        let width = metrics(FontFamily::Sans).measure_px("Rust", 10.0);
        assert!((width - 20.0).abs() < 1e-2, "Rust at 10px should be ~20px, got {width}");
    }

    #[test]
    fn test_measure_non_ascii_falls_back() {
        let table = metrics(FontFamily::Sans);
        let width = table.measure_px("é", 10.0);
        assert!((width - table.average_char_width * 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_mono_is_uniform() {
        let table = metrics(FontFamily::Mono);
        assert_eq!(table.measure_px("iiii", 10.0), table.measure_px("MMMM", 10.0));
    }

    #[test]
    fn test_serif_narrower_than_sans() {
        let text = "Led development of microservices architecture";
        let sans = metrics(FontFamily::Sans).measure_px(text, 12.0);
        let serif = metrics(FontFamily::Serif).measure_px(text, 12.0);
        assert!(serif < sans);
    }

    #[test]
    fn test_wrap_empty_is_no_lines() {
        assert!(metrics(FontFamily::Sans).wrap("   ", 12.0, 300.0).is_empty());
    }

    #[test]
    fn test_wrap_single_word_one_line() {
        let lines = metrics(FontFamily::Sans).wrap("Rust", 12.0, 300.0);
        assert_eq!(lines, ["Rust"]);
    }

    #[test]
    fn test_wrap_preserves_all_words_in_order() {
        let text = "Led development of microservices architecture serving one million users \
                    across three regions";
        let lines = metrics(FontFamily::Sans).wrap(text, 12.0, 180.0);
        assert!(lines.len() >= 2, "narrow column should force wrapping");
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn test_wrap_no_line_exceeds_width_except_long_word() {
        let table = metrics(FontFamily::Sans);
        let text = "short words only here but quite a few of them to wrap around";
        for line in table.wrap(text, 12.0, 150.0) {
            assert!(
                table.measure_px(&line, 12.0) <= 150.0 + 1e-3,
                "line '{line}' exceeds the wrap width"
            );
        }
    }

    #[test]
    fn test_wrap_oversized_word_gets_own_line() {
        let lines = metrics(FontFamily::Sans).wrap("a Pneumonoultramicroscopicsilicovolcanoconiosis b", 12.0, 60.0);
        assert_eq!(lines.len(), 3);
    }
}
