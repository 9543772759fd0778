//! Immutable 2D point type used throughout the layout engine.

use glam::DVec2;

use crate::error::RenderError;

/// An immutable point in the plane with finite `f64` coordinates.
///
/// Construction rejects NaN and infinite coordinates so downstream
/// geometry never has to re-validate. Negative zero is normalized to
/// positive zero so coordinate equality behaves as expected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D(DVec2);

impl Point2D {
    /// Create a point, rejecting NaN/infinite coordinates.
    pub fn new(x: f64, y: f64) -> Result<Self, RenderError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(RenderError::NonFiniteCoordinate { x, y });
        }
        // -0.0 == 0.0 but they differ bitwise; normalize so equality,
        // sorting, and the polar-order comparator agree.
        let x = if x == 0.0 { 0.0 } else { x };
        let y = if y == 0.0 { 0.0 } else { y };
        Ok(Self(DVec2::new(x, y)))
    }

    /// Wrap an already-validated vector. Callers must guarantee both
    /// components are finite; all arithmetic on finite inputs inside the
    /// engine preserves that.
    pub(crate) fn from_vec(v: DVec2) -> Self {
        Self(DVec2::new(
            if v.x == 0.0 { 0.0 } else { v.x },
            if v.y == 0.0 { 0.0 } else { v.y },
        ))
    }

    /// The x-coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    /// The y-coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// The backing vector.
    #[must_use]
    pub(crate) fn as_vec(&self) -> DVec2 {
        self.0
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(&self, other: Self) -> f64 {
        self.0.distance(other.0)
    }

    /// Squared Euclidean distance to another point.
    #[must_use]
    pub fn distance_squared_to(&self, other: Self) -> f64 {
        self.0.distance_squared(other.0)
    }

    /// Angle (radians, in `[-pi, pi]`) of the ray from this point to
    /// `other`.
    #[must_use]
    pub fn angle_to(&self, other: Self) -> f64 {
        let d = other.0 - self.0;
        d.y.atan2(d.x)
    }

    /// Twice the signed area of triangle `a`-`b`-`c`. Positive for a
    /// counterclockwise turn, negative for clockwise, zero for collinear.
    #[must_use]
    pub fn signed_area2(a: Self, b: Self, c: Self) -> f64 {
        (b.0.x - a.0.x) * (c.0.y - a.0.y) - (b.0.y - a.0.y) * (c.0.x - a.0.x)
    }

    /// Turn direction of `a` -> `b` -> `c`: `1` counterclockwise, `-1`
    /// clockwise, `0` collinear.
    #[must_use]
    pub fn ccw(a: Self, b: Self, c: Self) -> i8 {
        let area2 = Self::signed_area2(a, b, c);
        if area2 < 0.0 {
            -1
        } else if area2 > 0.0 {
            1
        } else {
            0
        }
    }
}

/// Scale `v` to length `len`. The zero vector has no direction, so it
/// falls back to `(len, 0)` — the engine's default outward direction.
#[must_use]
pub(crate) fn scaled_or_default(v: DVec2, len: f64) -> DVec2 {
    let sq = v.length_squared();
    if sq == 0.0 {
        return DVec2::new(len, 0.0);
    }
    v * (len / sq.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_finite_coordinates() {
        assert!(Point2D::new(f64::NAN, 0.0).is_err());
        assert!(Point2D::new(0.0, f64::INFINITY).is_err());
        assert!(Point2D::new(f64::NEG_INFINITY, 1.0).is_err());
        assert!(Point2D::new(1.5, -2.5).is_ok());
    }

    #[test]
    fn negative_zero_normalized() {
        let a = Point2D::new(-0.0, 0.0).unwrap();
        let b = Point2D::new(0.0, -0.0).unwrap();
        assert_eq!(a, b);
        assert!(a.x().is_sign_positive());
        assert!(a.y().is_sign_positive());
    }

    #[test]
    fn ccw_turn_test() {
        let a = Point2D::new(0.0, 0.0).unwrap();
        let b = Point2D::new(1.0, 0.0).unwrap();
        let up = Point2D::new(1.0, 1.0).unwrap();
        let down = Point2D::new(1.0, -1.0).unwrap();
        let straight = Point2D::new(2.0, 0.0).unwrap();
        assert_eq!(Point2D::ccw(a, b, up), 1);
        assert_eq!(Point2D::ccw(a, b, down), -1);
        assert_eq!(Point2D::ccw(a, b, straight), 0);
    }

    #[test]
    fn zero_vector_falls_back_to_default_direction() {
        let v = scaled_or_default(DVec2::ZERO, 1.0);
        assert_eq!(v, DVec2::new(1.0, 0.0));
        let v = scaled_or_default(DVec2::new(0.0, 3.0), 1.0);
        assert!((v.y - 1.0).abs() < 1e-12);
    }
}
