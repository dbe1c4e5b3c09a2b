//! Pattern 6: Observer
//! Example: A newsletter fanning one event out to its subscribers
//!
//! Run with: cargo run --example p6_observer

use behavioral_patterns::observer::{EmailAlert, Newsletter, SmsAlert};

fn main() {
    println!("=== Observer Demo ===\n");

    let mut newsletter = Newsletter::new();
    newsletter.subscribe(Box::new(EmailAlert::new("a@example.com")));
    newsletter.subscribe(Box::new(SmsAlert::new("555-0100")));
    newsletter.subscribe(Box::new(EmailAlert::new("b@example.com")));

    println!("subscribers: {}\n", newsletter.subscriber_count());
    for line in newsletter.publish("issue 12 out") {
        println!("{line}");
    }
}
