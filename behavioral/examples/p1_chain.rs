//! Pattern 1: Chain of Responsibility
//! Example: Two handlers, one silent fall-off
//!
//! Run with: cargo run --example p1_chain

use behavioral_patterns::chain::{Handler, TopicHandler};

fn main() {
    println!("=== Chain of Responsibility Demo ===\n");

    let chain = TopicHandler::new(
        "handler A",
        "A",
        Some(Box::new(TopicHandler::new("handler B", "B", None))),
    );

    for request in ["A", "B", "C"] {
        let trace = chain.handle(request);
        if trace.is_empty() {
            // Unclaimed requests are dropped silently; that is the contract.
            println!("request {request}: unhandled");
        } else {
            for line in trace {
                println!("request {request}: {line}");
            }
        }
    }
}
