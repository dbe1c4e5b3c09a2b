//! # Creational Patterns
//!
//! Catalogue entries 1-5: the idioms for producing objects without
//! spelling their concrete construction out at every use site.
//!
//! ## Pattern 1: Singleton
//! - A process-wide handle created lazily on first access
//! - The single-instance guarantee lives in the accessor, not in a hidden global
//!
//! ## Pattern 2: Factory Method
//! - One constructor selects a concrete role by discriminator
//! - Unknown discriminators surface as errors, never panics
//!
//! ## Pattern 3: Abstract Factory
//! - A factory trait producing a whole family of related roles
//! - Swapping the factory swaps every widget it makes
//!
//! ## Pattern 4: Builder
//! - Consuming builder: defaults up front, chained setters, one terminal build
//! - Setter order never changes the built value
//!
//! ## Pattern 5: Prototype
//! - New objects spawned by deep-copying a configured original
//! - Mutating the spawn never touches the prototype
//!
//! Run examples with: `cargo run --example <name>`

pub mod abstract_factory;
pub mod builder;
pub mod factory_method;
pub mod prototype;
pub mod singleton;
