//! Word assembly: left-to-right placement with kerning, and centering.
//!
//! The layout owns nothing the glyphs don't already carry — it is the same
//! pure data, positioned. No letter's geometry depends on its neighbours;
//! only the running cursor does.

use crate::errors::GlyphError;
use crate::float_types::Real;
use crate::glyph::{Glyph, GlyphOutline};
use crate::proportions::ProportionConstants;
use std::fmt::Debug;

/// One glyph with its horizontal position in the word.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedGlyph<S: Clone + Debug + Send + Sync> {
    pub outline: GlyphOutline<S>,
    /// Offset of the glyph origin from the word origin
    pub offset: Real,
}

impl<S: Clone + Debug + Send + Sync> PlacedGlyph<S> {
    /// The outline translated to its position in the word.
    pub fn positioned(&self) -> GlyphOutline<S> {
        self.outline.translate(self.offset, 0.0)
    }
}

/// A laid-out word: placed glyphs and the total width they span.
#[derive(Debug, Clone, PartialEq)]
pub struct WordLayout<S: Clone + Debug + Send + Sync> {
    pub glyphs: Vec<PlacedGlyph<S>>,
    width: Real,
}

impl<S: Clone + Debug + Send + Sync> WordLayout<S> {
    /// Total width of the word, advances plus kerning gaps.
    pub const fn width(&self) -> Real {
        self.width
    }

    /// Recenters the word about x = 0, shifting every glyph by half the
    /// total width.
    pub fn centered(mut self) -> Self {
        let shift = self.width / 2.0;
        for placed in &mut self.glyphs {
            placed.offset -= shift;
        }
        self
    }
}

/// Lays out `word` left to right: each glyph advances the cursor by its
/// width plus one kerning gap (`stroke / φ`).
///
/// Fails with [`GlyphError::UnknownGlyph`] on any letter outside
/// {M, Y, D, C, T}, or [`GlyphError::InvalidProportion`] on a bad constant
/// set — in either case no partial layout is returned.
///
/// # Example
/// ```
/// use goldglyph::{layout::layout_word, ProportionConstants};
///
/// let constants = ProportionConstants::default();
/// let logo = layout_word::<()>("MYDCT", &constants, None).unwrap().centered();
/// assert_eq!(logo.glyphs.len(), 5);
/// ```
pub fn layout_word<S: Clone + Debug + Send + Sync>(
    word: &str,
    constants: &ProportionConstants,
    metadata: Option<S>,
) -> Result<WordLayout<S>, GlyphError> {
    constants.validate()?;
    let kerning = constants.kerning();

    let mut glyphs = Vec::new();
    let mut cursor = 0.0;
    for letter in word.chars() {
        let glyph = Glyph::from_char(letter)?;
        let outline = glyph.outline(constants, metadata.clone())?;
        let advance = outline.advance;
        glyphs.push(PlacedGlyph {
            outline,
            offset: cursor,
        });
        cursor += advance + kerning;
    }

    let width = if glyphs.is_empty() { 0.0 } else { cursor - kerning };
    Ok(WordLayout { glyphs, width })
}
