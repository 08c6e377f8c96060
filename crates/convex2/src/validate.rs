//! Construction-time acceptance checks for convex polygons.
//!
//! A vertex list is accepted iff it has at least three pairwise distinct
//! vertices, no two non-adjacent edges cross, and every turn goes the same
//! way with at least one strict turn. Validation is a pure predicate over
//! the caller-supplied order; it never reorders or mutates input.

use std::fmt;

use nalgebra::Vector2;

use crate::primitives::{cross, segments_intersect, EPS};

/// Reasons a vertex sequence is rejected at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolygonError {
    /// Fewer than three vertices supplied.
    TooFewVertices { got: usize },
    /// The vertices at the two indices coincide exactly.
    DuplicateVertices { first: usize, second: usize },
    /// Turning signs are inconsistent, or all vertices are collinear.
    NotConvex,
    /// The edges starting at the two vertex indices cross.
    SelfIntersecting { edges: (usize, usize) },
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewVertices { got } => {
                write!(f, "polygon needs at least 3 vertices, got {got}")
            }
            Self::DuplicateVertices { first, second } => {
                write!(f, "vertices {first} and {second} coincide")
            }
            Self::NotConvex => write!(f, "vertex sequence does not form a convex polygon"),
            Self::SelfIntersecting { edges: (i, j) } => {
                write!(f, "edges starting at vertices {i} and {j} intersect")
            }
        }
    }
}

impl std::error::Error for PolygonError {}

/// Accept or reject `verts` as a simple convex polygon.
///
/// Checks, in rejection order: vertex count, exact duplicates, crossing of
/// non-adjacent edges, then turning-sign consistency. Self-intersection runs
/// before the turn walk so that a crossing figure (e.g. a bowtie) reports
/// `SelfIntersecting` rather than the less specific `NotConvex`.
pub(crate) fn validate_vertices(verts: &[Vector2<f64>]) -> Result<(), PolygonError> {
    let n = verts.len();
    if n < 3 {
        return Err(PolygonError::TooFewVertices { got: n });
    }
    for i in 0..n {
        for j in (i + 1)..n {
            if verts[i] == verts[j] {
                return Err(PolygonError::DuplicateVertices { first: i, second: j });
            }
        }
    }
    // Non-adjacent edge pairs must not cross. Adjacent edges share a vertex
    // and would trivially "intersect" there, so they are skipped.
    for i in 0..n {
        for j in (i + 1)..n {
            if j == (i + 1) % n || i == (j + 1) % n {
                continue;
            }
            if segments_intersect(verts[i], verts[(i + 1) % n], verts[j], verts[(j + 1) % n]) {
                return Err(PolygonError::SelfIntersecting { edges: (i, j) });
            }
        }
    }
    // Consistent turning direction, with at least one strict turn. Zero
    // crosses (collinear triples) are tolerated as long as some turn is
    // strict; an all-collinear sequence is degenerate.
    let mut sign = 0i32;
    for i in 0..n {
        let c = cross(verts[i], verts[(i + 1) % n], verts[(i + 2) % n]);
        if c.abs() < EPS {
            continue;
        }
        let s = if c > 0.0 { 1 } else { -1 };
        if sign == 0 {
            sign = s;
        } else if s != sign {
            return Err(PolygonError::NotConvex);
        }
    }
    if sign == 0 {
        return Err(PolygonError::NotConvex);
    }
    Ok(())
}
