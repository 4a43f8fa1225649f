//! Compare the two testers on the unit square, boundary points included.
//!
//! Usage:
//!   cargo run -p inpoly --example unit_square

use inpoly::prelude::*;

fn main() {
    let closed = ClosedRing::close(vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(1.0, 0.0),
    ])
    .expect("unit square is a valid ring");
    let cyc = closed.to_cyclic();
    println!("orientation: {:?}", cyc.orientation());

    let points = [
        Vec2::new(0.5, 0.5),
        Vec2::new(2.0, 2.0),
        Vec2::new(0.0, 0.5),
        Vec2::new(1.0, 0.5),
        Vec2::new(0.5, 1.0),
    ];
    for p in &points {
        println!(
            "({:>4}, {:>4})  crossing+edge={:<5} crossing-edge={:<5} winding={:<5} wn={}",
            p.x,
            p.y,
            crossing_contains(*p, &closed, true),
            crossing_contains(*p, &closed, false),
            winding_contains(*p, &cyc),
            winding_number(*p, &cyc),
        );
    }
}
