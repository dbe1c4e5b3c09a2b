//! Pattern 10: Visitor
//! Example: Two visitors over one closed set of shapes
//!
//! Run with: cargo run --example p10_visitor

use behavioral_patterns::visitor::{total_area, AreaCalculator, Shape, ShapeNamer, ShapeVisitor};

fn main() {
    println!("=== Visitor Demo ===\n");

    let shapes = vec![
        Shape::Circle { radius: 1.0 },
        Shape::Rectangle {
            width: 3.0,
            height: 4.0,
        },
        Shape::Triangle {
            base: 6.0,
            height: 5.0,
        },
    ];

    let mut namer = ShapeNamer;
    let mut calculator = AreaCalculator;
    for shape in &shapes {
        println!("{}: area {:.2}", namer.visit(shape), calculator.visit(shape));
    }

    println!("\ntotal area: {:.2}", total_area(&shapes));
}
