//! Pattern 1: Singleton
//! Example: Process-wide registry with one lazy instance
//!
//! Run with: cargo run --example p1_singleton

use creational_patterns::singleton::AppRegistry;

fn main() {
    println!("=== Singleton Demo ===\n");

    let first = AppRegistry::instance();
    let second = AppRegistry::instance();

    println!("first and second are the same instance: {}", std::ptr::eq(first, second));

    // A write through one handle is visible through every other handle.
    first.set("theme", "dark");
    first.set("locale", "en-US");

    println!("theme via second handle: {:?}", second.get("theme"));
    println!("locale via second handle: {:?}", second.get("locale"));
    println!("settings stored: {}", second.len());
}
