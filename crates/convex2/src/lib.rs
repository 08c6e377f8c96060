//! Immutable convex polygons in 2D: validation, derived scalars, SAT queries.
//!
//! Purpose
//! - Provide a single validated value type (`ConvexPolygon`) that accepts a
//!   vertex sequence only if it forms a simple convex polygon, then answers
//!   geometric queries: area, perimeter, bounding box, point and polygon
//!   containment, fan triangulation, and SAT intersection tests.
//!
//! Why this design
//! - Validation happens exactly once, at construction; queries never fail on
//!   a constructed instance.
//! - Derived scalars (area, perimeter, bounding box) are computed eagerly in
//!   the constructor. Instances carry no interior mutability, so they are
//!   `Send + Sync` by composition and safe to share read-only across threads.

pub mod polygon;
pub mod primitives;
pub mod sampling;
mod validate;

pub use polygon::{BoundingBox, ConvexPolygon, Triangle};
pub use primitives::{cross, orientation, project, segments_intersect, Orientation, EPS};
pub use validate::PolygonError;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::polygon::{BoundingBox, ConvexPolygon, Triangle};
    pub use crate::primitives::{
        cross, orientation, project, segments_intersect, Orientation, EPS,
    };
    pub use crate::sampling::{draw_polygon, RadialCfg, ReplayToken, VertexCount};
    pub use crate::validate::PolygonError;
    pub use nalgebra::Vector2 as Vec2;
}

pub use nalgebra::Vector2 as Vec2;

#[cfg(test)]
mod tests;
