//! Pattern 3: Interpreter
//! Example: Evaluating a small expression tree
//!
//! Run with: cargo run --example p3_interpreter

use behavioral_patterns::interpreter::{add, lit, mul, sub};

fn main() {
    println!("=== Interpreter Demo ===\n");

    let expr = mul(sub(lit(7), lit(2)), lit(3));
    println!("{} = {}", expr.render(), expr.interpret());

    let expr = add(lit(1), mul(lit(4), lit(10)));
    println!("{} = {}", expr.render(), expr.interpret());
}
