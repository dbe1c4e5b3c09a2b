//! Pattern 5: Memento
//! Example: Saving, changing, and restoring editor state
//!
//! Run with: cargo run --example p5_memento

use behavioral_patterns::memento::{Editor, History};

fn main() {
    println!("=== Memento Demo ===\n");

    let mut editor = Editor::new("State 1");
    let mut history = History::new();

    println!("state: {}", editor.state());
    history.push(editor.save());

    editor.set_state("State 2");
    println!("state: {}", editor.state());

    if let Some(snapshot) = history.pop() {
        editor.restore(&snapshot);
    }
    println!("state after restore: {}", editor.state());
}
