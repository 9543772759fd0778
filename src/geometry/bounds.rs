//! Axis-aligned bounding regions with symmetric padding.

use crate::error::RenderError;
use crate::geometry::Point2D;

/// An axis-aligned bounding region in molecule coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRegion {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl BoundingRegion {
    /// Minimum x.
    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    /// Minimum y.
    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    /// Maximum x.
    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    /// Maximum y.
    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Width of the region.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the region.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Center point of the region.
    #[must_use]
    pub fn center(&self) -> Point2D {
        Point2D::from_vec(glam::DVec2::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        ))
    }

    /// Whether the region contains the given point (inclusive edges).
    #[must_use]
    pub fn contains(&self, p: Point2D) -> bool {
        p.x() >= self.min_x
            && p.x() <= self.max_x
            && p.y() >= self.min_y
            && p.y() <= self.max_y
    }
}

/// Compute the padded bounding region of a point set.
///
/// A single linear min/max pass, then symmetric inflation by `padding`
/// on all sides. Exactly one input point gets two synthetic phantom
/// points at `(x-1, y-1)` and `(x+1, y+1)` so a lone atom still yields
/// a usable non-degenerate region with the atom at its center (room for
/// implicit hydrogens and charges without over-zooming).
pub fn bounding_region_of(
    points: &[Point2D],
    padding: f64,
) -> Result<BoundingRegion, RenderError> {
    if points.is_empty() {
        return Err(RenderError::EmptyPointSet);
    }

    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    let mut fold = |x: f64, y: f64| {
        if x < min_x {
            min_x = x;
        }
        if x > max_x {
            max_x = x;
        }
        if y < min_y {
            min_y = y;
        }
        if y > max_y {
            max_y = y;
        }
    };

    for p in points {
        fold(p.x(), p.y());
    }
    if points.len() == 1 {
        let (x, y) = (points[0].x(), points[0].y());
        fold(x - 1.0, y - 1.0);
        fold(x + 1.0, y + 1.0);
    }

    Ok(BoundingRegion {
        min_x: min_x - padding,
        min_y: min_y - padding,
        max_x: max_x + padding,
        max_y: max_y + padding,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point2D {
        Point2D::new(x, y).unwrap()
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(
            bounding_region_of(&[], 0.0),
            Err(RenderError::EmptyPointSet)
        ));
    }

    #[test]
    fn padded_extent_invariant() {
        let pts = [pt(0.0, 0.0), pt(3.0, 1.0), pt(-2.0, 4.0)];
        let r = bounding_region_of(&pts, 0.5).unwrap();
        assert!((r.width() - (5.0 + 1.0)).abs() < 1e-12);
        assert!((r.height() - (4.0 + 1.0)).abs() < 1e-12);
        assert!(r.width() >= 0.0 && r.height() >= 0.0);
    }

    #[test]
    fn single_point_inflation() {
        let r = bounding_region_of(&[pt(5.0, 5.0)], 0.0).unwrap();
        assert!(r.contains(pt(4.0, 4.0)));
        assert!(r.contains(pt(6.0, 6.0)));
        // The lone atom stays at the center.
        let c = r.center();
        assert!((c.x() - 5.0).abs() < 1e-12);
        assert!((c.y() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn zero_padding_hugs_points() {
        let r = bounding_region_of(&[pt(1.0, 2.0), pt(3.0, 7.0)], 0.0).unwrap();
        assert_eq!(r.min_x(), 1.0);
        assert_eq!(r.max_x(), 3.0);
        assert_eq!(r.min_y(), 2.0);
        assert_eq!(r.max_y(), 7.0);
    }
}
