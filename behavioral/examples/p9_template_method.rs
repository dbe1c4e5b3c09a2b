//! Pattern 9: Template Method
//! Example: Two reports sharing one fixed skeleton
//!
//! Run with: cargo run --example p9_template_method

use behavioral_patterns::template_method::{Report, SalesReport, UptimeReport};

fn main() {
    println!("=== Template Method Demo ===\n");

    let sales = SalesReport::new(vec![("north".to_string(), 120), ("south".to_string(), 95)]);
    for line in sales.generate() {
        println!("{line}");
    }

    println!();
    let uptime = UptimeReport::new(42);
    for line in uptime.generate() {
        println!("{line}");
    }
}
