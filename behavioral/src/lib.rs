//! # Behavioral Patterns
//!
//! Catalogue entries 13-22: the idioms for routing a call through a wired
//! object graph — who handles it, who hears about it, and who decides.
//!
//! ## Pattern 1: Chain of Responsibility
//! - Each handler claims the request or passes it on
//! - A request nobody claims falls off the end silently, by design
//!
//! ## Pattern 2: Command
//! - Requests reified as objects, queued and run by an invoker
//!
//! ## Pattern 3: Interpreter
//! - A closed expression grammar evaluated by matching on the variant tag
//!
//! ## Pattern 4: Mediator
//! - A hub routes by sender identity; colleagues never talk directly
//!
//! ## Pattern 5: Memento
//! - Opaque snapshots saved and restored wholesale
//!
//! ## Pattern 6: Observer
//! - A subject fans each event out to its subscribers in order
//!
//! ## Pattern 7: State
//! - The context forwards to its bound state; rebinding is always explicit
//!
//! ## Pattern 8: Strategy
//! - The context forwards to its bound strategy; rebinding is always explicit
//!
//! ## Pattern 9: Template Method
//! - The trait fixes the step skeleton; implementors fill in the hooks
//!
//! ## Pattern 10: Visitor
//! - A closed element enum visited per-tag, no runtime type inspection
//!
//! Run examples with: `cargo run --example <name>`

pub mod chain;
pub mod command;
pub mod interpreter;
pub mod mediator;
pub mod memento;
pub mod observer;
pub mod state;
pub mod strategy;
pub mod template_method;
pub mod visitor;
