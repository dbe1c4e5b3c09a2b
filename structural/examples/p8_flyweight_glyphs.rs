//! Pattern 8: Flyweight (glyph pool)
//! Example: Glyphs sharing intrinsic style, position supplied per draw
//!
//! Run with: cargo run --example p8_flyweight_glyphs

use std::rc::Rc;
use structural_patterns::flyweight_glyphs::{GlyphStyle, TextRun};

fn main() {
    println!("=== Flyweight Glyphs Demo ===\n");

    let mono = GlyphStyle::new("mono", 12);
    let run = TextRun::typeset("hello", &mono);

    for line in run.draw(0) {
        println!("{line}");
    }

    // One style instance backs the whole run: five glyphs plus our handle.
    println!("\nglyphs in run:        {}", run.glyphs().len());
    println!("style instances held: {}", Rc::strong_count(&mono));
}
