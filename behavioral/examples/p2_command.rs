//! Pattern 2: Command
//! Example: Queued light switches run by one invoker
//!
//! Run with: cargo run --example p2_command

use behavioral_patterns::command::{Light, LightOff, LightOn, RemoteControl};
use std::rc::Rc;

fn main() {
    println!("=== Command Demo ===\n");

    let kitchen = Rc::new(Light::new("kitchen"));
    let porch = Rc::new(Light::new("porch"));

    let mut remote = RemoteControl::new();
    remote.submit(Box::new(LightOn::new(Rc::clone(&kitchen))));
    remote.submit(Box::new(LightOn::new(Rc::clone(&porch))));
    remote.submit(Box::new(LightOff::new(kitchen)));

    println!("commands queued: {}\n", remote.queued());
    for line in remote.run() {
        println!("{line}");
    }
}
