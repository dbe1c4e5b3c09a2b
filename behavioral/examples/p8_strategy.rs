//! Pattern 8: Strategy
//! Example: One checkout, three interchangeable shipping strategies
//!
//! Run with: cargo run --example p8_strategy

use behavioral_patterns::strategy::{Checkout, Express, FlatRate, PerKilogram};

fn main() {
    println!("=== Strategy Demo ===\n");

    let weight_kg = 8;
    let mut checkout = Checkout::new(Box::new(FlatRate));

    println!("{}: {} for {weight_kg} kg", checkout.strategy_name(), checkout.shipping_cost(weight_kg));

    checkout.set_strategy(Box::new(PerKilogram));
    println!("{}: {} for {weight_kg} kg", checkout.strategy_name(), checkout.shipping_cost(weight_kg));

    checkout.set_strategy(Box::new(Express));
    println!("{}: {} for {weight_kg} kg", checkout.strategy_name(), checkout.shipping_cost(weight_kg));
}
