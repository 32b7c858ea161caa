//! Letterform construction: the five generated letters and their outlines.
//!
//! Each letter is a pure function from a [`ProportionConstants`] value to
//! one or more [`PointPath`]s in the XY profile plane, glyph origin at the
//! bottom-left. Extrusion depth, beveling, materials and everything else
//! three-dimensional belong to the host.

mod curved;
mod straight;

pub use curved::K_SMOOTH;

use crate::errors::GlyphError;
use crate::float_types::Real;
use crate::path::{PathRole, PointPath};
use crate::proportions::ProportionConstants;
use geo::{Geometry, GeometryCollection, LineString, Polygon as GeoPolygon};
use std::fmt::Debug;

/// The generated letter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    M,
    Y,
    D,
    C,
    T,
}

impl Glyph {
    /// Maps a character (either case) to its glyph, or fails with
    /// [`GlyphError::UnknownGlyph`] for anything outside the set.
    pub fn from_char(letter: char) -> Result<Self, GlyphError> {
        match letter.to_ascii_uppercase() {
            'M' => Ok(Glyph::M),
            'Y' => Ok(Glyph::Y),
            'D' => Ok(Glyph::D),
            'C' => Ok(Glyph::C),
            'T' => Ok(Glyph::T),
            _ => Err(GlyphError::UnknownGlyph(letter)),
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Glyph::M => 'M',
            Glyph::Y => 'Y',
            Glyph::D => 'D',
            Glyph::C => 'C',
            Glyph::T => 'T',
        }
    }

    /// Horizontal advance of the glyph, before kerning: the wide width for
    /// M and T, the standard width for Y, D and C.
    pub fn advance(self, constants: &ProportionConstants) -> Real {
        match self {
            Glyph::M | Glyph::T => constants.width_wide,
            Glyph::Y | Glyph::D | Glyph::C => constants.width_std,
        }
    }

    /// Builds the glyph's outline from the constant set.
    ///
    /// Validates the constants first; on failure no geometry is produced.
    /// The construction is deterministic — the same inputs yield
    /// bit-identical point sequences.
    ///
    /// # Example
    /// ```
    /// use goldglyph::{Glyph, ProportionConstants};
    ///
    /// let outline = Glyph::T
    ///     .outline::<()>(&ProportionConstants::default(), None)
    ///     .unwrap();
    /// assert_eq!(outline.paths[0].anchors.len(), 8);
    /// ```
    pub fn outline<S: Clone + Debug + Send + Sync>(
        self,
        constants: &ProportionConstants,
        metadata: Option<S>,
    ) -> Result<GlyphOutline<S>, GlyphError> {
        constants.validate()?;
        let paths = match self {
            Glyph::T => straight::letter_t(constants, metadata),
            Glyph::M => straight::letter_m(constants, metadata),
            Glyph::Y => straight::letter_y(constants, metadata),
            Glyph::D => curved::letter_d(constants, metadata),
            Glyph::C => curved::letter_c(constants, metadata),
        };
        Ok(GlyphOutline {
            glyph: self,
            paths,
            advance: self.advance(constants),
        })
    }
}

/// One generated letter: its paths and its horizontal advance.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphOutline<S: Clone + Debug + Send + Sync> {
    pub glyph: Glyph,
    pub paths: Vec<PointPath<S>>,
    /// Advance width consumed when laying out a word, before kerning
    pub advance: Real,
}

impl<S: Clone + Debug + Send + Sync> GlyphOutline<S> {
    /// Bounding box `[min_x, min_y, max_x, max_y]` over all paths.
    pub fn bounding_box(&self) -> [Real; 4] {
        let mut bb = [Real::MAX, Real::MAX, Real::MIN, Real::MIN];
        for path in &self.paths {
            let pb = path.bounding_box();
            bb[0] = bb[0].min(pb[0]);
            bb[1] = bb[1].min(pb[1]);
            bb[2] = bb[2].max(pb[2]);
            bb[3] = bb[3].max(pb[3]);
        }
        if self.paths.is_empty() { [0.0; 4] } else { bb }
    }

    /// Returns a copy translated by `(dx, dy)`.
    pub fn translate(&self, dx: Real, dy: Real) -> Self {
        Self {
            glyph: self.glyph,
            paths: self.paths.iter().map(|p| p.translate(dx, dy)).collect(),
            advance: self.advance,
        }
    }

    /// Flattened handoff form for hosts that work on `geo` geometry.
    ///
    /// A closed `Outer` path becomes a filled [`geo::Polygon`]; any closed
    /// `Inner` paths that follow it become interior rings of that polygon
    /// (the boolean subtraction already performed). Open paths become
    /// [`geo::LineString`]s for the host to loft as ring profiles.
    pub fn to_geo(&self, segments: usize) -> GeometryCollection<Real> {
        let mut geoms: Vec<Geometry<Real>> = Vec::new();
        let mut exterior: Option<LineString<Real>> = None;
        let mut holes: Vec<LineString<Real>> = Vec::new();

        let mut flush =
            |exterior: &mut Option<LineString<Real>>,
             holes: &mut Vec<LineString<Real>>,
             geoms: &mut Vec<Geometry<Real>>| {
                if let Some(ring) = exterior.take() {
                    geoms.push(Geometry::Polygon(GeoPolygon::new(
                        ring,
                        std::mem::take(holes),
                    )));
                }
            };

        for path in &self.paths {
            if !path.is_closed() {
                geoms.push(Geometry::LineString(path.flattened_ring(segments)));
                continue;
            }
            match path.role() {
                PathRole::Outer => {
                    flush(&mut exterior, &mut holes, &mut geoms);
                    exterior = Some(path.flattened_ring(segments));
                },
                PathRole::Inner => holes.push(path.flattened_ring(segments)),
            }
        }
        flush(&mut exterior, &mut holes, &mut geoms);

        GeometryCollection(geoms)
    }
}
