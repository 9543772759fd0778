//! Molecule-to-viewport coordinate transform.
//!
//! The transform is uniform-scale with a vertical flip: molecule space
//! is mathematical (y grows upward), viewport space is top-down. It is
//! rebuilt from scratch for every render and never mutated afterwards.

use glam::DVec2;

use crate::geometry::{BoundingRegion, Point2D};
use crate::options::StyleParameters;
use crate::text::TextMetrics;

/// Minimum margin reserved on each viewport axis, in viewport units.
const MIN_AXIS_MARGIN: f64 = 3.0;
/// Fraction of each viewport dimension reserved as margin.
const MARGIN_FRACTION: f64 = 0.25;
/// Extra inset reserved when a visible border is requested.
const BORDER_INSET: f64 = 3.0;
/// Molecule extents at or below this are treated as degenerate.
const DEGENERATE_EXTENT: f64 = 0.1;
/// Substitute extent for degenerate molecule dimensions.
const DEFAULT_EXTENT: f64 = 3.0;
/// Lower bound on the derived scale. Tiny molecules are drawn at least
/// at unit scale rather than shrinking toward zero; legacy behavior
/// that downstream image pipelines rely on.
const MIN_SCALE: f64 = 1.0;

/// Target rectangle for a render, in viewport units (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Viewport {
    /// A viewport anchored at the origin.
    #[must_use]
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    /// Center point of the viewport.
    #[must_use]
    pub fn center(&self) -> Point2D {
        Point2D::from_vec(DVec2::new(
            self.x + self.width / 2.0,
            self.y + self.height / 2.0,
        ))
    }
}

/// Uniform-scale vertical-flip affine transform centering a molecule's
/// bounding region inside a viewport.
///
/// Applying the transform performs, in order: translate by the negated
/// molecule center, scale by `(scale, -scale)`, translate by the
/// viewport center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    scale: f64,
    molecule_center: DVec2,
    viewport_center: DVec2,
}

impl ViewportTransform {
    /// Build the transform that fits `region` inside `viewport`.
    ///
    /// Margins of `max(3, 0.25 * dimension)` are reserved per axis
    /// (plus a fixed inset when `border` is set). Degenerate molecule
    /// extents are replaced by a default so the scale stays finite. The
    /// label margin is a two-pass fixed-point approximation: a
    /// provisional scale sizes the label font, the measured line height
    /// becomes an extra margin, and the scale is recomputed once. Font
    /// metrics vary slowly with scale, so one refinement suffices.
    pub fn fit(
        region: &BoundingRegion,
        viewport: &Viewport,
        avg_bond_length: f64,
        style: &StyleParameters,
        border: bool,
        metrics: &dyn TextMetrics,
    ) -> Self {
        let mut margin_w = (MARGIN_FRACTION * viewport.width).max(MIN_AXIS_MARGIN);
        let mut margin_h = (MARGIN_FRACTION * viewport.height).max(MIN_AXIS_MARGIN);
        if border {
            margin_w += BORDER_INSET;
            margin_h += BORDER_INSET;
        }

        let mut mol_w = region.width();
        let mut mol_h = region.height();
        if mol_w <= DEGENERATE_EXTENT {
            mol_w = DEFAULT_EXTENT;
        }
        if mol_h <= DEGENERATE_EXTENT {
            mol_h = DEFAULT_EXTENT;
        }

        let adj_w = ((viewport.width - margin_w) / mol_w).max(MIN_SCALE);
        let adj_h = ((viewport.height - margin_h) / mol_h).max(MIN_SCALE);
        let provisional = adj_w.min(adj_h);

        let font_size = style.label_font_fraction * provisional * avg_bond_length;
        let label_margin = metrics.measure("H", font_size).height.max(0.0);

        let adj_w = (viewport.width - margin_w - label_margin) / mol_w;
        let adj_h = (viewport.height - margin_h - label_margin) / mol_h;
        let scale = adj_w.min(adj_h).max(MIN_SCALE);

        Self {
            scale,
            molecule_center: region.center().as_vec(),
            viewport_center: viewport.center().as_vec(),
        }
    }

    /// Map a molecule-space point into viewport space.
    #[must_use]
    pub fn apply(&self, p: Point2D) -> Point2D {
        let d = p.as_vec() - self.molecule_center;
        Point2D::from_vec(
            self.viewport_center + DVec2::new(d.x * self.scale, -d.y * self.scale),
        )
    }

    /// Map a raw molecule-space vector into viewport space.
    pub(crate) fn apply_vec(&self, v: DVec2) -> DVec2 {
        let d = v - self.molecule_center;
        self.viewport_center + DVec2::new(d.x * self.scale, -d.y * self.scale)
    }

    /// The uniform scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::bounding_region_of;
    use crate::text::BoxTextMetrics;

    fn pt(x: f64, y: f64) -> Point2D {
        Point2D::new(x, y).unwrap()
    }

    fn fit(points: &[Point2D], viewport: &Viewport) -> ViewportTransform {
        let region = bounding_region_of(points, 0.0).unwrap();
        ViewportTransform::fit(
            &region,
            viewport,
            1.0,
            &StyleParameters::default(),
            false,
            &BoxTextMetrics,
        )
    }

    #[test]
    fn center_maps_to_viewport_center() {
        let viewport = Viewport::sized(200.0, 150.0);
        let t = fit(&[pt(0.0, 0.0), pt(4.0, 2.0)], &viewport);
        let c = t.apply(pt(2.0, 1.0));
        assert!((c.x() - 100.0).abs() < 1e-9);
        assert!((c.y() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn y_axis_is_flipped() {
        let viewport = Viewport::sized(200.0, 200.0);
        let t = fit(&[pt(0.0, 0.0), pt(2.0, 2.0)], &viewport);
        let low = t.apply(pt(1.0, 0.0));
        let high = t.apply(pt(1.0, 2.0));
        // Higher molecule y lands higher on screen, i.e. smaller
        // viewport y.
        assert!(high.y() < low.y());
    }

    #[test]
    fn scale_never_drops_below_one() {
        // A molecule far wider than the viewport would want scale << 1.
        let viewport = Viewport::sized(10.0, 10.0);
        let t = fit(&[pt(0.0, 0.0), pt(5000.0, 5000.0)], &viewport);
        assert!(t.scale() >= 1.0);
    }

    #[test]
    fn degenerate_extent_substituted() {
        // All-collinear molecule: zero height must not blow up the fit.
        let viewport = Viewport::sized(100.0, 100.0);
        let t = fit(&[pt(0.0, 0.0), pt(3.0, 0.0)], &viewport);
        assert!(t.scale().is_finite());
        assert!(t.scale() > 0.0);
    }

    #[test]
    fn offset_viewport_recenters() {
        let viewport = Viewport {
            x: 50.0,
            y: 30.0,
            width: 100.0,
            height: 100.0,
        };
        let t = fit(&[pt(-1.0, -1.0), pt(1.0, 1.0)], &viewport);
        let c = t.apply(pt(0.0, 0.0));
        assert!((c.x() - 100.0).abs() < 1e-9);
        assert!((c.y() - 80.0).abs() < 1e-9);
    }
}
