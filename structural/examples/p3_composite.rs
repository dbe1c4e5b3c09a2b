//! Pattern 3: Composite
//! Example: Files and directories behind one component trait
//!
//! Run with: cargo run --example p3_composite

use structural_patterns::composite::{Directory, File, FsNode};

fn main() {
    println!("=== Composite Demo ===\n");

    let tree = Directory::new("src")
        .add(Box::new(File::new("lib.rs", 120)))
        .add(Box::new(
            Directory::new("patterns")
                .add(Box::new(File::new("adapter.rs", 80)))
                .add(Box::new(File::new("bridge.rs", 95))),
        ));

    for line in tree.render(0) {
        println!("{line}");
    }

    println!("\ntotal size: {} bytes", tree.size());
}
