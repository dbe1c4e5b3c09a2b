//! Pattern 1: Adapter
//! Example: 220 V socket behind a 110 V outlet interface
//!
//! Run with: cargo run --example p1_adapter

use structural_patterns::adapter::{EuropeanSocket, StepDownAdapter, UsPowerOutlet, WallSocket};

fn main() {
    println!("=== Adapter Demo ===\n");

    let socket = WallSocket;
    println!("european socket: {} V", socket.voltage());

    // The appliance only sees the target interface.
    let outlet = StepDownAdapter::new(socket);
    println!("through adapter: {} V", outlet.voltage());
}
