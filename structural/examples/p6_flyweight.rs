//! Pattern 6: Flyweight (factory map)
//! Example: A forest sharing tree kinds through a memoizing factory
//!
//! Run with: cargo run --example p6_flyweight

use std::rc::Rc;
use structural_patterns::flyweight::{Tree, TreeKindFactory};

fn main() {
    println!("=== Flyweight Demo ===\n");

    let mut factory = TreeKindFactory::new();

    let forest = vec![
        Tree::new(1, 2, factory.get("oak")),
        Tree::new(3, 4, factory.get("pine")),
        Tree::new(5, 6, factory.get("oak")),
        Tree::new(7, 8, factory.get("oak")),
    ];

    for tree in &forest {
        println!("{}", tree.draw());
    }

    println!("\ntrees planted: {}", forest.len());
    println!("kinds built:   {}", factory.kinds_built());
    println!(
        "first and third share a kind: {}",
        Rc::ptr_eq(forest[0].kind(), forest[2].kind())
    );
}
