//! # Structural Patterns
//!
//! Catalogue entries 6-12, plus the second Flyweight and Bridge variants
//! (entries 23 and 24): the idioms for composing objects into larger
//! shapes without the parts knowing the whole.
//!
//! ## Pattern 1: Adapter
//! - A wrapper translates one interface into another at the seam
//!
//! ## Pattern 2: Bridge (renderer-style)
//! - One abstraction drawn through interchangeable boxed implementors
//!
//! ## Pattern 3: Composite
//! - Leaves and containers behind one component trait; operations walk the tree
//!
//! ## Pattern 4: Decorator
//! - Each wrapper adds behavior, then forwards to what it wraps
//!
//! ## Pattern 5: Facade
//! - One call drives three subsystems in a fixed order
//!
//! ## Pattern 6: Flyweight (factory map)
//! - A factory memoizes instances by key; same key, same shared instance
//!
//! ## Pattern 7: Proxy
//! - A stand-in performs its own check, then forwards to the real subject
//!
//! ## Pattern 8: Flyweight (glyph pool)
//! - Concrete glyphs share intrinsic style; position is passed per draw
//!
//! ## Pattern 9: Bridge (device-style)
//! - A remote-control hierarchy varies independently of the devices it drives
//!
//! Run examples with: `cargo run --example <name>`

pub mod adapter;
pub mod bridge;
pub mod bridge_devices;
pub mod composite;
pub mod decorator;
pub mod facade;
pub mod flyweight;
pub mod flyweight_glyphs;
pub mod proxy;
