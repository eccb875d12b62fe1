/// Pixel-space extent of one rendered label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextExtent {
    pub width: f64,
    pub height: f64,
}

/// Capability interface for measuring rendered label text.
///
/// Scale-bar label placement is a two-pass algorithm: a label is placed
/// provisionally, measured, then repositioned using its own extent. The
/// measurer must be deterministic for a fixed backend state: placement is
/// only idempotent if measuring the same text twice returns the same box.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> TextExtent;
}

/// Deterministic measurer based on average glyph geometry.
///
/// Headless default with no font stack behind it. Backends with real
/// metrics (the `cairo-backend` feature) produce tighter boxes; the layout
/// only assumes the measurer is consistent, not exact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphEstimateMeasurer {
    /// Mean glyph advance as a fraction of the font size.
    pub advance_ratio: f64,
    /// Line height as a fraction of the font size.
    pub line_height_ratio: f64,
}

impl Default for GlyphEstimateMeasurer {
    fn default() -> Self {
        Self {
            advance_ratio: 0.6,
            line_height_ratio: 1.2,
        }
    }
}

impl TextMeasurer for GlyphEstimateMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> TextExtent {
        let glyphs = text.chars().count() as f64;
        TextExtent {
            width: self.advance_ratio * font_size_px * glyphs,
            height: self.line_height_ratio * font_size_px,
        }
    }
}
