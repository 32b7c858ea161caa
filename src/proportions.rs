//! The named proportion constants of the letterform grid, and the values
//! derived from them.
//!
//! Every derived quantity (kerning, Y split height, C gap length, D bowl
//! width) is a pure function of the base set, so each invariant can be
//! tested on its own instead of hiding in inline arithmetic at a use site.

use crate::errors::GlyphError;
use crate::float_types::{GOLDEN_RATIO, Real};

/// Fraction of the total height taken by the C's mouth, measured as arc
/// length along the stroke's nominal (centerline) circle.
pub const C_GAP_RATIO: Real = 0.3;

/// The immutable base constants every glyph is proportioned against.
///
/// The defaults are the Fibonacci set the logo grid was drawn on:
/// height 8, wide width 13, standard width 8, stroke 3.
///
/// # Example
/// ```
/// use goldglyph::ProportionConstants;
///
/// let constants = ProportionConstants::default();
/// assert!(constants.kerning() < constants.stroke);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProportionConstants {
    /// Golden ratio φ; must be > 1
    pub phi: Real,
    /// Base cap height H of every letter
    pub height: Real,
    /// Width of the wide letters (M, T)
    pub width_wide: Real,
    /// Width of the standard letters (Y, D, C)
    pub width_std: Real,
    /// Stroke thickness S
    pub stroke: Real,
}

impl Default for ProportionConstants {
    fn default() -> Self {
        Self {
            phi: GOLDEN_RATIO,
            height: 8.0,
            width_wide: 13.0,
            width_std: 8.0,
            stroke: 3.0,
        }
    }
}

impl ProportionConstants {
    /// Checks every base constant against its constraint.
    ///
    /// Called by the glyph builders before any geometry is produced, so a
    /// bad constant set never yields partial output. The comparisons are
    /// written so that a NaN in any field also fails.
    pub fn validate(&self) -> Result<(), GlyphError> {
        if !(self.height > 0.0) {
            return Err(GlyphError::InvalidProportion {
                name: "height",
                value: self.height,
                constraint: "height > 0",
            });
        }
        if !(self.width_wide > 0.0) {
            return Err(GlyphError::InvalidProportion {
                name: "width_wide",
                value: self.width_wide,
                constraint: "width_wide > 0",
            });
        }
        if !(self.width_std > 0.0) {
            return Err(GlyphError::InvalidProportion {
                name: "width_std",
                value: self.width_std,
                constraint: "width_std > 0",
            });
        }
        if !(self.phi > 1.0) {
            return Err(GlyphError::InvalidProportion {
                name: "phi",
                value: self.phi,
                constraint: "phi > 1",
            });
        }
        if !(self.stroke > 0.0) {
            return Err(GlyphError::InvalidProportion {
                name: "stroke",
                value: self.stroke,
                constraint: "stroke > 0",
            });
        }
        let limit = 0.5 * self.height.min(self.width_std).min(self.width_wide);
        if !(self.stroke < limit) {
            return Err(GlyphError::InvalidProportion {
                name: "stroke",
                value: self.stroke,
                constraint: "stroke < min(width, height) / 2",
            });
        }
        Ok(())
    }

    /// Horizontal spacing between adjacent letters: `stroke / φ`.
    ///
    /// Not owned by any single glyph; the word layout applies it as the
    /// offset between successive advances.
    pub fn kerning(&self) -> Real {
        self.stroke / self.phi
    }

    /// Height of the Y's lower stem: the Golden Section of the vertical
    /// axis, `height × (1 − 1/φ)`.
    pub fn y_split_height(&self) -> Real {
        self.height * (1.0 - 1.0 / self.phi)
    }

    /// Arc length of the C's mouth along the nominal circle: `0.3 × height`.
    pub fn c_gap_length(&self) -> Real {
        C_GAP_RATIO * self.height
    }

    /// Horizontal extent of the D's bowl: `height / φ`, so the bowl's
    /// bounding rectangle has aspect ratio φ.
    pub fn d_bowl_width(&self) -> Real {
        self.height / self.phi
    }
}
