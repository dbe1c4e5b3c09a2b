//! Pattern 2: Factory Method
//! Example: Selecting a concrete animal by discriminator
//!
//! Run with: cargo run --example p2_factory_method

use creational_patterns::factory_method::make_animal;

fn main() {
    println!("=== Factory Method Demo ===\n");

    for kind in ["dog", "cat"] {
        // The caller never names Dog or Cat; the discriminator decides.
        match make_animal(kind) {
            Ok(animal) => println!("{} says {}", animal.name(), animal.speak()),
            Err(e) => println!("error: {e}"),
        }
    }

    println!("\n=== Unknown Discriminator ===");
    match make_animal("fox") {
        Ok(animal) => println!("{} says {}", animal.name(), animal.speak()),
        Err(e) => println!("error: {e}"),
    }
}
