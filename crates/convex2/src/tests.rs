//! Cross-module scenarios and algebraic properties.

use nalgebra::{vector, Vector2};
use proptest::prelude::*;

use crate::polygon::{ConvexPolygon, Triangle};
use crate::sampling::{draw_polygon, RadialCfg, ReplayToken, VertexCount};
use crate::validate::PolygonError;

fn pentagon() -> ConvexPolygon {
    ConvexPolygon::from_coords(&[
        (0.0, 0.0),
        (2.0, 0.0),
        (3.0, 2.0),
        (1.0, 4.0),
        (-1.0, 2.0),
    ])
    .unwrap()
}

fn draw(seed: u64, index: u64) -> Option<ConvexPolygon> {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Uniform { min: 3, max: 12 },
        ..RadialCfg::default()
    };
    draw_polygon(cfg, ReplayToken { seed, index })
}

/// Shrink `p` towards its vertex centroid by `factor` in (0, 1).
fn shrink(p: &ConvexPolygon, factor: f64) -> ConvexPolygon {
    let verts = p.vertices();
    let c = verts.iter().fold(Vector2::zeros(), |acc, v| acc + v) / verts.len() as f64;
    let shrunk: Vec<_> = verts.iter().map(|&v| c + (v - c) * factor).collect();
    ConvexPolygon::from_vertices(shrunk).expect("shrunk polygon stays valid")
}

#[test]
fn unit_square_scenario() {
    let p = ConvexPolygon::from_coords(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]).unwrap();
    assert_eq!(p.area(), 16.0);
    assert_eq!(p.perimeter(), 16.0);
    let b = p.bounding_box();
    assert_eq!((b.min_x, b.min_y, b.max_x, b.max_y), (0.0, 0.0, 4.0, 4.0));
    assert!(p.contains_point(vector![2.0, 2.0]));
    assert!(!p.contains_point(vector![5.0, 5.0]));
    assert!(p.contains_point(vector![0.0, 0.0]));
}

#[test]
fn nested_squares_scenario() {
    let outer =
        ConvexPolygon::from_coords(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]).unwrap();
    let inner =
        ConvexPolygon::from_coords(&[(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)]).unwrap();
    assert!(outer.contains_polygon(&inner));
    assert!(outer.intersects(&inner));
}

#[test]
fn construction_failure_kinds() {
    assert_eq!(
        ConvexPolygon::from_coords(&[]).unwrap_err(),
        PolygonError::TooFewVertices { got: 0 }
    );
    assert_eq!(
        ConvexPolygon::from_coords(&[(0.0, 0.0)]).unwrap_err(),
        PolygonError::TooFewVertices { got: 1 }
    );
    assert_eq!(
        ConvexPolygon::from_coords(&[(0.0, 0.0), (1.0, 1.0)]).unwrap_err(),
        PolygonError::TooFewVertices { got: 2 }
    );
    assert_eq!(
        ConvexPolygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]).unwrap_err(),
        PolygonError::NotConvex
    );
    assert_eq!(
        ConvexPolygon::from_coords(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (1.0, 1.0), (0.0, 4.0)])
            .unwrap_err(),
        PolygonError::NotConvex
    );
    assert!(matches!(
        ConvexPolygon::from_coords(&[(0.0, 0.0), (3.0, 3.0), (3.0, 0.0), (0.0, 3.0)]).unwrap_err(),
        PolygonError::SelfIntersecting { .. }
    ));
    assert!(matches!(
        ConvexPolygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]).unwrap_err(),
        PolygonError::DuplicateVertices { .. }
    ));
}

#[test]
fn scalars_invariant_under_rotation_and_reversal() {
    let base = pentagon();
    let verts = base.vertices().to_vec();
    let n = verts.len();
    for k in 0..n {
        let mut rotated = verts.clone();
        rotated.rotate_left(k);
        let p = ConvexPolygon::from_vertices(rotated).unwrap();
        assert!((p.area() - base.area()).abs() < 1e-12);
        assert!((p.perimeter() - base.perimeter()).abs() < 1e-12);
        assert_eq!(p.bounding_box(), base.bounding_box());
    }
    let reversed: Vec<_> = verts.into_iter().rev().collect();
    let p = ConvexPolygon::from_vertices(reversed).unwrap();
    assert!((p.area() - base.area()).abs() < 1e-12);
    assert!((p.perimeter() - base.perimeter()).abs() < 1e-12);
}

#[test]
fn triangulation_counts_and_partitions() {
    let p = pentagon();
    let tris: Vec<Triangle> = p.triangulation().collect();
    assert_eq!(tris.len(), 3);
    let total: f64 = tris.iter().map(Triangle::area).sum();
    assert!((total - p.area()).abs() < 1e-9);
}

#[test]
fn containment_implies_intersection_deterministic() {
    let outer = pentagon();
    let inner = shrink(&outer, 0.5);
    assert!(outer.contains_polygon(&inner));
    assert!(outer.intersects(&inner));
    assert!(inner.intersects(&outer));
}

proptest! {
    #[test]
    fn area_positive_and_vertices_contained(seed in any::<u64>(), index in 0u64..64) {
        let p = draw(seed, index);
        prop_assume!(p.is_some());
        let p = p.unwrap();
        prop_assert!(p.area() > 0.0);
        prop_assert!(p.perimeter() > 0.0);
        for &v in p.vertices() {
            prop_assert!(p.contains_point(v));
        }
    }

    #[test]
    fn intersects_is_symmetric(seed in any::<u64>(), i in 0u64..32, j in 0u64..32) {
        let a = draw(seed, i);
        let b = draw(seed.wrapping_add(1), j);
        prop_assume!(a.is_some() && b.is_some());
        let (a, b) = (a.unwrap(), b.unwrap());
        prop_assert_eq!(a.intersects(&b), b.intersects(&a));
    }

    #[test]
    fn containment_implies_intersection(seed in any::<u64>(), index in 0u64..32) {
        let outer = draw(seed, index);
        prop_assume!(outer.is_some());
        let outer = outer.unwrap();
        let inner = shrink(&outer, 0.5);
        prop_assert!(outer.contains_polygon(&inner));
        prop_assert!(outer.intersects(&inner));
        prop_assert!(inner.intersects(&outer));
    }

    #[test]
    fn triangulation_partitions_area(seed in any::<u64>(), index in 0u64..64) {
        let p = draw(seed, index);
        prop_assume!(p.is_some());
        let p = p.unwrap();
        let tris: Vec<Triangle> = p.triangulation().collect();
        prop_assert_eq!(tris.len(), p.vertices().len() - 2);
        let total: f64 = tris.iter().map(Triangle::area).sum();
        prop_assert!((total - p.area()).abs() < 1e-9 * p.area().max(1.0));
    }

    #[test]
    fn scalars_survive_cyclic_rotation(seed in any::<u64>(), index in 0u64..32, k in 0usize..12) {
        let p = draw(seed, index);
        prop_assume!(p.is_some());
        let p = p.unwrap();
        let mut verts = p.vertices().to_vec();
        let k = k % verts.len();
        verts.rotate_left(k);
        let q = ConvexPolygon::from_vertices(verts).unwrap();
        prop_assert!((p.area() - q.area()).abs() < 1e-12 * p.area().max(1.0));
        prop_assert!((p.perimeter() - q.perimeter()).abs() < 1e-12 * p.perimeter().max(1.0));
    }
}
