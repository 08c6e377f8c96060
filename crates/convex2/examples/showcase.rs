//! Walk the library through a few sample polygons and print diagnostics.
//!
//! Usage:
//!   cargo run -p convex2 --example showcase

use convex2::prelude::*;

fn main() {
    match ConvexPolygon::from_coords(&[(0.0, 0.0), (3.0, 0.0), (3.0, 3.0), (0.0, 3.0)]) {
        Ok(p) => {
            println!("square accepted");
            println!("  vertices: {:?}", p.vertices());
            println!("  area: {}", p.area());
        }
        Err(e) => println!("square rejected: {e}"),
    }

    // Bowtie: non-adjacent edges cross.
    match ConvexPolygon::from_coords(&[(0.0, 0.0), (3.0, 3.0), (3.0, 0.0), (0.0, 3.0)]) {
        Ok(_) => println!("bowtie accepted (unexpected)"),
        Err(e) => println!("bowtie rejected: {e}"),
    }

    // Concave pentagon: inconsistent turning signs.
    match ConvexPolygon::from_coords(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (1.0, 1.0), (0.0, 4.0)])
    {
        Ok(_) => println!("concave pentagon accepted (unexpected)"),
        Err(e) => println!("concave pentagon rejected: {e}"),
    }

    let p1 = ConvexPolygon::from_coords(&[
        (0.0, 0.0),
        (2.0, 0.0),
        (3.0, 2.0),
        (1.0, 4.0),
        (-1.0, 2.0),
    ])
    .expect("pentagon is convex");
    let p2 = ConvexPolygon::from_coords(&[(1.0, 1.0), (3.0, 1.0), (5.0, 5.0), (1.0, 5.0)])
        .expect("quad is convex");

    println!("\npolygon 1: {:?}", p1.vertices());
    println!("polygon 2: {:?}", p2.vertices());
    println!("area 1: {}", p1.area());
    println!("area 2: {}", p2.area());
    println!("perimeter 1: {}", p1.perimeter());
    println!("perimeter 2: {}", p2.perimeter());
    let b = p1.bounding_box();
    println!(
        "bounding box 1: ({}, {}, {}, {})",
        b.min_x, b.min_y, b.max_x, b.max_y
    );
    println!(
        "triangulation 1: {:?}",
        p1.triangulation().collect::<Vec<_>>()
    );
    println!(
        "triangulation 2: {:?}",
        p2.triangulation().collect::<Vec<_>>()
    );

    if p2.contains_polygon(&p1) {
        println!("polygon 1 lies inside polygon 2");
    } else {
        println!("polygon 1 does not lie inside polygon 2");
    }
    if p1.intersects(&p2) {
        println!("the polygons intersect");
    } else {
        println!("the polygons do not intersect");
    }

    // A reproducible random polygon, for good measure.
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(8),
        ..RadialCfg::default()
    };
    if let Some(p) = draw_polygon(cfg, ReplayToken { seed: 2025, index: 0 }) {
        println!(
            "\nrandom octagon: {} vertices, area {:.4}, perimeter {:.4}",
            p.vertices().len(),
            p.area(),
            p.perimeter()
        );
    }
}
