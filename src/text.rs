//! Text-measurement interface to the external shaping/rasterizing
//! backend.
//!
//! The layout engine never draws text itself; it only needs string
//! extents to size occlusion radii, reserve label margins, and anchor
//! attachment glyphs. Implementations must be safe for concurrent
//! metric queries — a render derives sized measurements through `&self`
//! and never mutates a shared font.

/// Measured extent of a string at a given font size, in viewport units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextExtent {
    /// Advance width of the whole string.
    pub width: f64,
    /// Line height of the string.
    pub height: f64,
}

/// Glyph metrics provider.
pub trait TextMetrics {
    /// Measure `text` rendered at `size` (the font's em size in
    /// viewport units).
    fn measure(&self, text: &str, size: f64) -> TextExtent;
}

/// Deterministic stand-in metrics for headless rendering and tests:
/// every glyph advances 0.6 em, lines are 1.2 em tall. Close enough to
/// a regular-weight sans face for layout purposes and entirely
/// reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxTextMetrics;

/// Advance width per glyph, as a fraction of the em size.
const GLYPH_ADVANCE_EM: f64 = 0.6;
/// Line height, as a fraction of the em size.
const LINE_HEIGHT_EM: f64 = 1.2;

impl TextMetrics for BoxTextMetrics {
    fn measure(&self, text: &str, size: f64) -> TextExtent {
        let glyphs = text.chars().count() as f64;
        TextExtent {
            width: glyphs * GLYPH_ADVANCE_EM * size,
            height: LINE_HEIGHT_EM * size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_metrics_scale_linearly() {
        let m = BoxTextMetrics;
        let one = m.measure("N", 10.0);
        let two = m.measure("NH", 10.0);
        assert!((two.width - 2.0 * one.width).abs() < 1e-12);
        assert_eq!(one.height, two.height);
        let big = m.measure("N", 20.0);
        assert!((big.width - 2.0 * one.width).abs() < 1e-12);
    }

    #[test]
    fn empty_string_has_no_width() {
        let m = BoxTextMetrics;
        let e = m.measure("", 10.0);
        assert_eq!(e.width, 0.0);
        assert!(e.height > 0.0);
    }
}
