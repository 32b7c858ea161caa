//! Parametric letterform geometry on a Fibonacci/Golden-Ratio grid.
//!
//! Builds the letters **M, Y, D, C, T** as ordered 2D point paths —
//! straight-edged polygons and cubic-Bezier paths with explicit, absolute
//! handle pairs — ready for a host mesh system to loft into solids. The
//! whole crate is a pure function from a set of named proportion constants
//! to geometry: no I/O, no scene state, no randomness, and bit-identical
//! output for identical inputs.
//!
//! # Features
//! - **f64** (default): use f64 as Real
//! - **f32**: use f32 as Real, conflicts with f64
//!
//! # Example
//! ```
//! use goldglyph::{layout::layout_word, Glyph, ProportionConstants};
//!
//! let constants = ProportionConstants::default();
//! let d = Glyph::D.outline::<()>(&constants, None).unwrap();
//! assert_eq!(d.paths.len(), 2); // outer bowl + inner bowl
//!
//! let logo = layout_word::<()>("MYDCT", &constants, None).unwrap().centered();
//! assert!(logo.width() > 0.0);
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod glyph;
pub mod layout;
pub mod path;
pub mod proportions;

#[cfg(any(
    all(feature = "f64", feature = "f32"),
    not(any(feature = "f64", feature = "f32"))
))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::GlyphError;
pub use glyph::{Glyph, GlyphOutline, K_SMOOTH};
pub use path::{Anchor, PathRole, PointPath};
pub use proportions::ProportionConstants;
