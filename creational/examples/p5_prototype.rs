//! Pattern 5: Prototype
//! Example: Deep-copying a configured original
//!
//! Run with: cargo run --example p5_prototype

use creational_patterns::prototype::{Blueprint, Prototype};

fn main() {
    println!("=== Prototype Demo ===\n");

    let original = Blueprint::new("site plan", vec![1, 2, 3]);
    let mut spawned = original.spawn();

    spawned.add_layer(4);
    spawned.rename("floor plan");

    // The spawn took a deep copy; the original is untouched.
    println!("original: {} {:?}", original.name(), original.layers());
    println!("spawned:  {} {:?}", spawned.name(), spawned.layers());
}
