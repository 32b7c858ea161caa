//! Validation errors

use crate::float_types::Real;

/// All the ways glyph generation can be refused.
///
/// Both kinds are raised before any geometry is constructed and are
/// unrecoverable at this level: the computation is deterministic and
/// side-effect-free, so retrying with the same inputs is meaningless.
/// No error is ever downgraded to default geometry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GlyphError {
    /// (InvalidProportion) A named constant violates its stated constraint
    #[error("(InvalidProportion) {name} = {value} violates: {constraint}")]
    InvalidProportion {
        name: &'static str,
        value: Real,
        constraint: &'static str,
    },
    /// (UnknownGlyph) The letter is outside the generated set {M, Y, D, C, T}
    #[error("(UnknownGlyph) '{0}' is not one of the generated letters M, Y, D, C, T")]
    UnknownGlyph(char),
}
