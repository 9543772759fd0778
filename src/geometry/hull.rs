//! Convex hull via Graham scan.

use std::cmp::Ordering;

use crate::error::RenderError;
use crate::geometry::Point2D;

/// Compute the convex hull of a point set in counterclockwise order.
///
/// Runs in `O(n log n)`: pick the lowest point (ties broken by x) as the
/// pivot, sort the rest by polar angle about it (collinear ties broken
/// by distance to the pivot), then scan with a stack, popping while the
/// last two hull points and the candidate fail to make a strict
/// counterclockwise turn.
///
/// Degenerate inputs are not errors: all-identical points yield a
/// one-point hull and all-collinear points a two-point hull.
pub fn convex_hull_of(points: &[Point2D]) -> Result<Vec<Point2D>, RenderError> {
    if points.is_empty() {
        return Err(RenderError::EmptyPointSet);
    }

    let mut a: Vec<Point2D> = points.to_vec();
    // The lowest point (then leftmost) is an extreme point of the hull.
    a.sort_by(|p, q| cmp_f64(p.y(), q.y()).then(cmp_f64(p.x(), q.x())));
    let pivot = a[0];
    a[1..].sort_by(|p, q| polar_order(pivot, *p, *q));

    let n = a.len();
    let mut hull: Vec<Point2D> = vec![pivot];

    // Skip duplicates of the pivot.
    let Some(k1) = (1..n).find(|&i| a[i] != pivot) else {
        return Ok(hull); // all points identical
    };

    // Find the first point not collinear with pivot and a[k1]; the point
    // just before it is the second extreme point. If every point is
    // collinear this degenerates to the far endpoint of the segment.
    let k2 = (k1 + 1..n)
        .find(|&i| Point2D::ccw(pivot, a[k1], a[i]) != 0)
        .unwrap_or(n);
    hull.push(a[k2 - 1]);

    for &candidate in &a[k2..] {
        while hull.len() >= 2 {
            let top = hull[hull.len() - 1];
            let under = hull[hull.len() - 2];
            if Point2D::ccw(under, top, candidate) > 0 {
                break;
            }
            let _ = hull.pop();
        }
        hull.push(candidate);
    }
    Ok(hull)
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Compare `p` and `q` by polar angle (in `[0, 2pi)`) about `pivot`,
/// breaking collinear ties by distance to the pivot.
fn polar_order(pivot: Point2D, p: Point2D, q: Point2D) -> Ordering {
    let dy1 = p.y() - pivot.y();
    let dy2 = q.y() - pivot.y();
    let dx1 = p.x() - pivot.x();
    let dx2 = q.x() - pivot.x();

    if dy1 >= 0.0 && dy2 < 0.0 {
        Ordering::Less
    } else if dy2 >= 0.0 && dy1 < 0.0 {
        Ordering::Greater
    } else if dy1 == 0.0 && dy2 == 0.0 {
        // Both horizontal relative to the pivot.
        if dx1 >= 0.0 && dx2 < 0.0 {
            Ordering::Less
        } else if dx2 >= 0.0 && dx1 < 0.0 {
            Ordering::Greater
        } else {
            distance_order(pivot, p, q)
        }
    } else {
        match Point2D::ccw(pivot, p, q) {
            1 => Ordering::Less,
            -1 => Ordering::Greater,
            _ => distance_order(pivot, p, q),
        }
    }
}

fn distance_order(pivot: Point2D, p: Point2D, q: Point2D) -> Ordering {
    cmp_f64(
        pivot.distance_squared_to(p),
        pivot.distance_squared_to(q),
    )
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
            convex_hull_of(&[]),
            Err(RenderError::EmptyPointSet)
        ));
    }

    #[test]
    fn square_with_interior_point() {
        let pts = [
            pt(0.0, 0.0),
            pt(0.0, 1.0),
            pt(1.0, 0.0),
            pt(1.0, 1.0),
            pt(0.5, 0.5),
        ];
        let hull = convex_hull_of(&pts).unwrap();
        assert_eq!(
            hull,
            vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0), pt(0.0, 1.0)]
        );
        // Strictly convex: every consecutive triple turns counterclockwise.
        for i in 0..hull.len() {
            let a = hull[i];
            let b = hull[(i + 1) % hull.len()];
            let c = hull[(i + 2) % hull.len()];
            assert_eq!(Point2D::ccw(a, b, c), 1);
        }
    }

    #[test]
    fn repeated_point_degenerates_to_one() {
        let p = pt(2.0, 3.0);
        let hull = convex_hull_of(&[p, p, p]).unwrap();
        assert_eq!(hull, vec![p]);
    }

    #[test]
    fn collinear_points_degenerate_to_segment() {
        let pts = [pt(0.0, 0.0), pt(1.0, 1.0), pt(2.0, 2.0), pt(3.0, 3.0)];
        let hull = convex_hull_of(&pts).unwrap();
        assert_eq!(hull, vec![pt(0.0, 0.0), pt(3.0, 3.0)]);
    }

    #[test]
    fn triangle_kept_in_ccw_order() {
        let pts = [pt(0.0, 0.0), pt(4.0, 0.0), pt(2.0, 3.0), pt(2.0, 1.0)];
        let hull = convex_hull_of(&pts).unwrap();
        assert_eq!(hull, vec![pt(0.0, 0.0), pt(4.0, 0.0), pt(2.0, 3.0)]);
    }
}
