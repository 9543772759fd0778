//! Drawing primitives handed to the external rasterizing surface.
//!
//! A render produces an ordered `Vec<Primitive>` in viewport
//! coordinates (y grows downward). The rasterizer replays them in
//! order; the engine never touches pixels.

use crate::color::Rgba;
use crate::geometry::Point2D;

/// Line-end cap style for stroked primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    /// Rounded caps and joins — the default bond stroke.
    Round,
    /// Flat caps, mitered joins — used for split sub-segments so the
    /// gap between halves stays crisp.
    Butt,
}

/// Stroke parameters for line and path primitives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Stroke width in viewport units.
    pub width: f64,
    /// Cap/join style.
    pub cap: LineCap,
    /// On/off dash length; `None` strokes solid.
    pub dash: Option<f64>,
}

impl Stroke {
    /// Solid round-capped stroke.
    #[must_use]
    pub fn solid(width: f64) -> Self {
        Self {
            width,
            cap: LineCap::Round,
            dash: None,
        }
    }

    /// Solid butt-capped stroke.
    #[must_use]
    pub fn butt(width: f64) -> Self {
        Self {
            width,
            cap: LineCap::Butt,
            dash: None,
        }
    }

    /// Dashed round-capped stroke with the given on/off length.
    #[must_use]
    pub fn dashed(width: f64, dash: f64) -> Self {
        Self {
            width,
            cap: LineCap::Round,
            dash: Some(dash),
        }
    }
}

/// A positioned run of text at a baseline origin.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRun {
    /// The text to shape and draw.
    pub text: String,
    /// Baseline origin (left edge) in viewport coordinates.
    pub origin: Point2D,
    /// Font em size in viewport units.
    pub size: f64,
    /// Fill color.
    pub color: Rgba,
}

/// One drawing command in viewport coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A single stroked segment.
    StrokeLine {
        /// Segment start.
        from: Point2D,
        /// Segment end.
        to: Point2D,
        /// Stroke parameters.
        stroke: Stroke,
        /// Stroke color.
        color: Rgba,
    },
    /// An open stroked polyline (bracket marks).
    StrokePath {
        /// Polyline vertices in order.
        points: Vec<Point2D>,
        /// Stroke parameters.
        stroke: Stroke,
        /// Stroke color.
        color: Rgba,
    },
    /// A filled closed polygon (wedge triangles).
    FillPath {
        /// Polygon vertices in order; the path closes implicitly.
        points: Vec<Point2D>,
        /// Fill color.
        color: Rgba,
    },
    /// A filled disc (highlight halos, symbol-less atom dots).
    FillDisc {
        /// Disc center.
        center: Point2D,
        /// Disc radius in viewport units.
        radius: f64,
        /// Fill color.
        color: Rgba,
    },
    /// A positioned text run.
    Glyphs(GlyphRun),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_constructors() {
        assert_eq!(Stroke::solid(2.0).cap, LineCap::Round);
        assert_eq!(Stroke::butt(2.0).cap, LineCap::Butt);
        assert_eq!(Stroke::dashed(1.0, 4.0).dash, Some(4.0));
        assert_eq!(Stroke::solid(2.0).dash, None);
    }
}
