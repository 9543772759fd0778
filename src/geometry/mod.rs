//! Geometry kernel: points, bounding regions, convex hulls.
//!
//! Everything here is pure computation over immutable values; degenerate
//! inputs (single points, collinear sets) are handled by explicit
//! fallbacks rather than errors, so rendering stays robust for
//! pathological molecules.

mod bounds;
mod hull;
mod point;

pub use bounds::{bounding_region_of, BoundingRegion};
pub use hull::convex_hull_of;
pub use point::Point2D;
pub(crate) use point::scaled_or_default;
