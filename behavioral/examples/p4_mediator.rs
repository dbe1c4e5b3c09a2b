//! Pattern 4: Mediator
//! Example: A chat room routing by sender identity
//!
//! Run with: cargo run --example p4_mediator

use behavioral_patterns::mediator::{ChatRoom, Participant};

fn main() {
    println!("=== Mediator Demo ===\n");

    let mut room = ChatRoom::new();
    room.register(Participant::new("alice"));
    room.register(Participant::new("bob"));
    room.register(Participant::new("carol"));

    for line in room.send("alice", "hi") {
        println!("{line}");
    }

    println!();
    for line in room.send("bob", "lunch?") {
        println!("{line}");
    }
}
