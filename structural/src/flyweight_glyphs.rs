//! Pattern 8: Flyweight, glyph-pool variant
//!
//! The class-hierarchy emphasis: concrete glyph structs hold their shared
//! intrinsic style directly (no factory map), and the extrinsic state, the
//! position, arrives with every draw call.

use std::rc::Rc;

/// Intrinsic state shared by every glyph set in the same style.
#[derive(Debug, PartialEq, Eq)]
pub struct GlyphStyle {
    font: String,
    point_size: u32,
}

impl GlyphStyle {
    pub fn new(font: impl Into<String>, point_size: u32) -> Rc<Self> {
        Rc::new(GlyphStyle {
            font: font.into(),
            point_size,
        })
    }
}

pub struct Glyph {
    ch: char,
    style: Rc<GlyphStyle>,
}

impl Glyph {
    pub fn new(ch: char, style: Rc<GlyphStyle>) -> Self {
        Glyph { ch, style }
    }

    /// Position is extrinsic; the glyph never stores it.
    pub fn draw(&self, column: usize, row: usize) -> String {
        format!(
            "'{}' in {} {}pt at ({column}, {row})",
            self.ch, self.style.font, self.style.point_size
        )
    }

    pub fn style(&self) -> &Rc<GlyphStyle> {
        &self.style
    }
}

pub struct TextRun {
    glyphs: Vec<Glyph>,
}

impl TextRun {
    /// Typesets `text`; every glyph shares the one style instance.
    pub fn typeset(text: &str, style: &Rc<GlyphStyle>) -> Self {
        TextRun {
            glyphs: text.chars().map(|ch| Glyph::new(ch, Rc::clone(style))).collect(),
        }
    }

    pub fn draw(&self, row: usize) -> Vec<String> {
        self.glyphs
            .iter()
            .enumerate()
            .map(|(column, glyph)| glyph.draw(column, row))
            .collect()
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_glyph_in_a_run_shares_one_style_instance() {
        let style = GlyphStyle::new("mono", 12);
        let run = TextRun::typeset("hi", &style);

        assert_eq!(run.glyphs().len(), 2);
        assert!(Rc::ptr_eq(run.glyphs()[0].style(), run.glyphs()[1].style()));
        assert!(Rc::ptr_eq(run.glyphs()[0].style(), &style));
    }

    #[test]
    fn runs_in_different_styles_do_not_share() {
        let mono = GlyphStyle::new("mono", 12);
        let serif = GlyphStyle::new("serif", 12);
        let a = TextRun::typeset("a", &mono);
        let b = TextRun::typeset("a", &serif);
        assert!(!Rc::ptr_eq(a.glyphs()[0].style(), b.glyphs()[0].style()));
    }

    #[test]
    fn extrinsic_position_arrives_per_draw() {
        let style = GlyphStyle::new("mono", 12);
        let run = TextRun::typeset("ok", &style);
        assert_eq!(
            run.draw(3),
            vec!["'o' in mono 12pt at (0, 3)", "'k' in mono 12pt at (1, 3)"]
        );
    }

    #[test]
    fn drawing_twice_replays_the_same_lines() {
        let style = GlyphStyle::new("mono", 12);
        let run = TextRun::typeset("ok", &style);
        assert_eq!(run.draw(0), run.draw(0));
    }
}
