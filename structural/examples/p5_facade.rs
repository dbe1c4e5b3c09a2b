//! Pattern 5: Facade
//! Example: One call boots three subsystems in order
//!
//! Run with: cargo run --example p5_facade

use structural_patterns::facade::Computer;

fn main() {
    println!("=== Facade Demo ===\n");

    let computer = Computer::new();
    for line in computer.start() {
        println!("{line}");
    }
}
