//! Pattern 3: Abstract Factory
//! Example: Widget families selected by discriminator
//!
//! Run with: cargo run --example p3_abstract_factory

use creational_patterns::abstract_factory::factory_for;

fn main() {
    println!("=== Abstract Factory Demo ===\n");

    for family in ["mac", "win"] {
        match factory_for(family) {
            Ok(factory) => {
                // Every widget from one factory belongs to the same family.
                println!("{}", factory.button("ok").render());
                println!("{}", factory.checkbox("remember me").render());
            }
            Err(e) => println!("error: {e}"),
        }
    }

    println!("\n=== Unknown Family ===");
    if let Err(e) = factory_for("beos") {
        println!("error: {e}");
    }
}
