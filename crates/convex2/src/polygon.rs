//! Immutable convex polygon with eager derived properties and SAT queries.
//!
//! Purpose
//! - `ConvexPolygon` owns a validated vertex sequence and answers the
//!   geometric queries: area, perimeter, bounding box, point and polygon
//!   containment, SAT intersection, fan triangulation.
//!
//! Why eager derived fields
//! - Area, perimeter and bounding box are cheap relative to the O(n²)
//!   validation that already ran, and computing them in the constructor
//!   leaves the type free of interior mutability. Concurrent read-only
//!   access needs no synchronization.

use nalgebra::Vector2;

use crate::primitives::{convex_hull, cross, project, EPS};
use crate::validate::{validate_vertices, PolygonError};

/// Axis-aligned bounding box (componentwise min/max over the vertices).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    fn of(verts: &[Vector2<f64>]) -> Self {
        let mut b = Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        };
        for v in verts {
            b.min_x = b.min_x.min(v.x);
            b.min_y = b.min_y.min(v.y);
            b.max_x = b.max_x.max(v.x);
            b.max_y = b.max_y.max(v.y);
        }
        b
    }

    /// Point membership, boundary inclusive.
    #[inline]
    pub fn contains_point(&self, p: Vector2<f64>) -> bool {
        self.min_x <= p.x && p.x <= self.max_x && self.min_y <= p.y && p.y <= self.max_y
    }

    /// Whether `other` fits entirely inside `self`, boundary inclusive.
    #[inline]
    pub fn contains(&self, other: &BoundingBox) -> bool {
        self.min_x <= other.min_x
            && other.max_x <= self.max_x
            && self.min_y <= other.min_y
            && other.max_y <= self.max_y
    }

    /// Whether the two boxes overlap; touching counts.
    #[inline]
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        !(self.max_x < other.min_x
            || other.max_x < self.min_x
            || self.max_y < other.min_y
            || other.max_y < self.min_y)
    }
}

/// One triangle of a fan triangulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
    pub c: Vector2<f64>,
}

impl Triangle {
    /// Absolute area (half the cross product of two edges).
    #[inline]
    pub fn area(&self) -> f64 {
        (cross(self.a, self.b, self.c) / 2.0).abs()
    }
}

/// Simple convex polygon, validated once at construction.
///
/// Invariants (checked by the constructors, never re-checked):
/// - at least 3 pairwise distinct vertices,
/// - no two non-adjacent edges cross,
/// - consistent turning direction with at least one strict turn.
///
/// Vertices keep the caller-supplied winding order. Area, perimeter and
/// bounding box are computed up front, so queries never fail and instances
/// are plain immutable data.
#[derive(Clone, Debug)]
pub struct ConvexPolygon {
    vertices: Vec<Vector2<f64>>,
    area: f64,
    perimeter: f64,
    bbox: BoundingBox,
}

impl ConvexPolygon {
    /// Build from vertices in caller-supplied winding order.
    pub fn from_vertices(vertices: Vec<Vector2<f64>>) -> Result<Self, PolygonError> {
        validate_vertices(&vertices)?;
        let area = shoelace_area(&vertices);
        let perimeter = perimeter_of(&vertices);
        let bbox = BoundingBox::of(&vertices);
        Ok(Self {
            vertices,
            area,
            perimeter,
            bbox,
        })
    }

    /// Convenience constructor from `(x, y)` pairs.
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self, PolygonError> {
        Self::from_vertices(coords.iter().map(|&(x, y)| Vector2::new(x, y)).collect())
    }

    /// Build from an unordered point cloud by taking its convex hull.
    ///
    /// Interior, duplicate and edge-collinear points are discarded by the
    /// hull; the result is validated like any other input, so degenerate
    /// clouds (all collinear, too few distinct points) are rejected with the
    /// usual errors.
    pub fn from_points_hull(points: &[Vector2<f64>]) -> Result<Self, PolygonError> {
        if points.len() < 3 {
            return Err(PolygonError::TooFewVertices { got: points.len() });
        }
        let hull = convex_hull(points).unwrap_or_default();
        Self::from_vertices(hull)
    }

    /// Vertices in their validated winding order.
    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.vertices
    }

    /// Absolute polygon area (shoelace formula). Strictly positive.
    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Sum of Euclidean edge lengths.
    #[inline]
    pub fn perimeter(&self) -> f64 {
        self.perimeter
    }

    #[inline]
    pub fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    /// Whether `p` lies inside the polygon or on its boundary.
    ///
    /// Sign walk over the directed edges: a point strictly outside produces
    /// crosses of both signs; near-zero crosses (on an edge line) are
    /// skipped. Correct because convexity and consistent winding are
    /// construction invariants.
    pub fn contains_point(&self, p: Vector2<f64>) -> bool {
        let n = self.vertices.len();
        let mut sign = 0i32;
        for i in 0..n {
            let c = cross(self.vertices[i], self.vertices[(i + 1) % n], p);
            if c.abs() < EPS {
                continue;
            }
            let s = if c > 0.0 { 1 } else { -1 };
            if sign == 0 {
                sign = s;
            } else if s != sign {
                return false;
            }
        }
        true
    }

    /// Whether every point of `other` lies inside `self`.
    ///
    /// Vertex containment suffices: both polygons are convex, so an edge of
    /// `other` cannot bulge outside `self` between contained vertices.
    pub fn contains_polygon(&self, other: &ConvexPolygon) -> bool {
        self.bbox.contains(&other.bbox) && other.vertices.iter().all(|&v| self.contains_point(v))
    }

    /// SAT intersection test; boundary touching counts as intersecting.
    ///
    /// Bounding-box fast reject, then every edge normal of both polygons is
    /// tried as a candidate separating axis. No separating axis means the
    /// polygons overlap.
    pub fn intersects(&self, other: &ConvexPolygon) -> bool {
        if !self.bbox.overlaps(&other.bbox) {
            return false;
        }
        !separating_axis(self, other) && !separating_axis(other, self)
    }

    /// Fan triangulation from vertex 0: `n - 2` triangles `(v0, v_i, v_{i+1})`.
    ///
    /// A fresh iterator per call; nothing is cached. Valid only because the
    /// polygon is convex.
    pub fn triangulation(&self) -> impl Iterator<Item = Triangle> + '_ {
        let a = self.vertices[0];
        self.vertices.windows(2).skip(1).map(move |w| Triangle {
            a,
            b: w[0],
            c: w[1],
        })
    }
}

/// Whether some edge normal of `a` separates the projections of `a` and `b`.
fn separating_axis(a: &ConvexPolygon, b: &ConvexPolygon) -> bool {
    let verts = a.vertices();
    let n = verts.len();
    for i in 0..n {
        let edge = verts[(i + 1) % n] - verts[i];
        let axis = Vector2::new(-edge.y, edge.x);
        let len = axis.norm();
        if len < EPS {
            continue;
        }
        let axis = axis / len;
        let (min1, max1) = project(a.vertices(), axis);
        let (min2, max2) = project(b.vertices(), axis);
        if max1 < min2 || max2 < min1 {
            return true;
        }
    }
    false
}

/// Cyclic shoelace sum, absolute value halved.
fn shoelace_area(verts: &[Vector2<f64>]) -> f64 {
    let n = verts.len();
    let mut acc = 0.0;
    for i in 0..n {
        let p = verts[i];
        let q = verts[(i + 1) % n];
        acc += p.x * q.y - q.x * p.y;
    }
    acc.abs() / 2.0
}

fn perimeter_of(verts: &[Vector2<f64>]) -> f64 {
    let n = verts.len();
    (0..n).map(|i| (verts[(i + 1) % n] - verts[i]).norm()).sum()
}
