//! Pattern 2: Bridge (renderer-style)
//! Example: One circle drawn through two renderers
//!
//! Run with: cargo run --example p2_bridge

use structural_patterns::bridge::{Circle, RasterRenderer, VectorRenderer};

fn main() {
    println!("=== Bridge Demo ===\n");

    let vector_circle = Circle::new(5.0, Box::new(VectorRenderer));
    let raster_circle = Circle::new(5.0, Box::new(RasterRenderer));

    println!("{}", vector_circle.draw());
    println!("{}", raster_circle.draw());

    println!("\n=== Abstraction Changes, Renderer Stays ===");
    let mut circle = Circle::new(2.0, Box::new(VectorRenderer));
    circle.resize(3.0);
    println!("{}", circle.draw());
}
