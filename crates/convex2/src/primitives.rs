//! Orientation and segment-intersection primitives.
//!
//! Purpose
//! - Pure numeric leaves of the crate: signed cross products, the tri-state
//!   orientation predicate, the classic segment-overlap test, axis projection
//!   for SAT, and a monotone-chain convex hull.
//!
//! Numeric policy
//! - `EPS` absorbs floating-point noise whenever a cross product is compared
//!   to zero. Validation, point containment, and SAT axis checks all share
//!   this tolerance so classifications cannot flip between them.

use nalgebra::Vector2;

/// Tolerance for comparing cross-product magnitudes to zero.
pub const EPS: f64 = 1e-10;

/// Turning direction at `b` along the path `a -> b -> c`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear,
}

/// Signed cross product of the edge vectors `a -> b` and `b -> c`.
///
/// Positive for a counter-clockwise turn at `b` (y-up coordinates), negative
/// for clockwise, near zero for collinear points.
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x)
}

/// Tri-state orientation of the triple `(a, b, c)` under `EPS`.
#[inline]
pub fn orientation(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Orientation {
    let v = cross(a, b, c);
    if v > EPS {
        Orientation::CounterClockwise
    } else if v < -EPS {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// `c` lies within the axis-aligned span of the segment `a -> b`.
///
/// Only meaningful when `c` is already known collinear with `a -> b`.
#[inline]
fn on_segment(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> bool {
    a.x.min(b.x) <= c.x && c.x <= a.x.max(b.x) && a.y.min(b.y) <= c.y && c.y <= a.y.max(b.y)
}

/// Whether segments `(p1, p2)` and `(p3, p4)` intersect, boundary included.
///
/// Orientation-pair test: the segments properly cross iff the endpoints of
/// each straddle the other; the four collinear cases catch touching and
/// overlapping configurations. Callers walking polygon edges must exclude
/// adjacent pairs themselves, since edges sharing a vertex trivially touch.
pub fn segments_intersect(
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    p3: Vector2<f64>,
    p4: Vector2<f64>,
) -> bool {
    let o1 = orientation(p1, p2, p3);
    let o2 = orientation(p1, p2, p4);
    let o3 = orientation(p3, p4, p1);
    let o4 = orientation(p3, p4, p2);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && on_segment(p1, p2, p3))
        || (o2 == Orientation::Collinear && on_segment(p1, p2, p4))
        || (o3 == Orientation::Collinear && on_segment(p3, p4, p1))
        || (o4 == Orientation::Collinear && on_segment(p3, p4, p2))
}

/// Projection interval `(min, max)` of `vertices` onto `axis`.
pub fn project(vertices: &[Vector2<f64>], axis: Vector2<f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in vertices {
        let d = v.dot(&axis);
        min = min.min(d);
        max = max.max(d);
    }
    (min, max)
}

/// Andrew's monotone chain convex hull (returns hull in CCW order, deduped).
///
/// Collinear points along hull edges are dropped, so the output is strictly
/// convex. `None` if fewer than two distinct points remain after dedup.
pub(crate) fn convex_hull(points: &[Vector2<f64>]) -> Option<Vec<Vector2<f64>>> {
    if points.len() < 2 {
        return None;
    }
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(
        |a, b| match a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal) {
            std::cmp::Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal),
            o => o,
        },
    );
    pts.dedup_by(|a, b| (*a - *b).norm() < 1e-12);
    if pts.len() < 2 {
        return None;
    }
    let mut lower: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    Some(hull)
}
