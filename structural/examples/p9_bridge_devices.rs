//! Pattern 9: Bridge (device-style)
//! Example: Basic and advanced remotes over TV and radio
//!
//! Run with: cargo run --example p9_bridge_devices

use structural_patterns::bridge_devices::{AdvancedRemote, BasicRemote, Radio, Tv};

fn main() {
    println!("=== Bridge Devices Demo ===\n");

    let mut tv_remote = BasicRemote::new(Box::new(Tv::new()));
    println!("{}", tv_remote.volume_up());
    println!("{}", tv_remote.volume_up());
    println!("{}", tv_remote.volume_down());

    println!("\n=== Same Remote Shape, Different Device ===");
    let mut radio_remote = BasicRemote::new(Box::new(Radio::new()));
    println!("{}", radio_remote.volume_up());

    println!("\n=== Refined Abstraction ===");
    let mut advanced = AdvancedRemote::new(Box::new(Radio::new()));
    println!("{}", advanced.volume_up());
    println!("{}", advanced.mute());
    println!("{}", advanced.unmute());
}
