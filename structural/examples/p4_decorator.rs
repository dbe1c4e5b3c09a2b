//! Pattern 4: Decorator
//! Example: Stacking wrappers around a base component
//!
//! Run with: cargo run --example p4_decorator

use structural_patterns::decorator::{Component, ConcreteComponent, DecoratorA, DecoratorB};

fn main() {
    println!("=== Decorator Demo ===\n");

    let bare = ConcreteComponent;
    println!("{}", bare.describe());

    let once = DecoratorA::new(Box::new(ConcreteComponent));
    println!("{}", once.describe());

    let twice = DecoratorB::new(Box::new(DecoratorA::new(Box::new(ConcreteComponent))));
    println!("{}", twice.describe());
}
