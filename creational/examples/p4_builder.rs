//! Pattern 4: Builder
//! Example: Consuming builder with defaults and chained setters
//!
//! Run with: cargo run --example p4_builder

use creational_patterns::builder::ServerConfig;

fn main() {
    println!("=== Builder Demo ===\n");

    let config = ServerConfig::builder()
        .host("10.0.0.7")
        .port(9000)
        .workers(4)
        .build();

    println!("host:    {}", config.host());
    println!("port:    {}", config.port());
    println!("workers: {}", config.workers());

    println!("\n=== Defaults for Unset Fields ===");
    let minimal = ServerConfig::builder().port(3000).build();
    println!("host:    {}", minimal.host());
    println!("port:    {}", minimal.port());
    println!("workers: {}", minimal.workers());
}
