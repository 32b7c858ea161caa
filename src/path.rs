//! Ordered point paths: straight-edged polygons and mixed straight/cubic
//! Bezier paths with explicit, absolute handle pairs.
//!
//! A [`PointPath`] is the handoff format between the glyph builders and a
//! host mesh system: plain immutable data, no host references, no retained
//! state. Hosts that want tessellated input can call [`PointPath::flatten`]
//! or [`PointPath::to_geo`].

use crate::float_types::Real;
use geo::{Geometry, LineString, Polygon as GeoPolygon};
use nalgebra::{Point2, Vector2};
use std::fmt::Debug;

/// Whether a path bounds a glyph from the outside or carves material out of
/// it. The host uses the pairing to perform boolean subtraction, or renders
/// an outer/inner pair directly as a ring profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRole {
    Outer,
    Inner,
}

/// One anchor of a path.
///
/// Handles are **absolute** coordinates, not offsets from the anchor.
/// `None` on the side facing a neighbour makes that segment straight; a
/// corner anchor carries no handles at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub point: Point2<Real>,
    /// Control point of the incoming curve segment, if any
    pub handle_in: Option<Point2<Real>>,
    /// Control point of the outgoing curve segment, if any
    pub handle_out: Option<Point2<Real>>,
}

impl Anchor {
    /// A sharp corner: no curvature on either side.
    pub fn corner(x: Real, y: Real) -> Self {
        Self {
            point: Point2::new(x, y),
            handle_in: None,
            handle_out: None,
        }
    }

    /// An anchor with explicit incoming/outgoing handles.
    pub fn smooth(
        point: Point2<Real>,
        handle_in: Option<Point2<Real>>,
        handle_out: Option<Point2<Real>>,
    ) -> Self {
        Self {
            point,
            handle_in,
            handle_out,
        }
    }

    fn translated(&self, delta: Vector2<Real>) -> Self {
        Self {
            point: self.point + delta,
            handle_in: self.handle_in.map(|h| h + delta),
            handle_out: self.handle_out.map(|h| h + delta),
        }
    }
}

/// An ordered sequence of anchors, either a closed boundary or an open arc.
#[derive(Debug, Clone, PartialEq)]
pub struct PointPath<S: Clone + Debug + Send + Sync> {
    pub anchors: Vec<Anchor>,
    pub closed: bool,
    pub role: PathRole,
    /// Metadata
    pub metadata: Option<S>,
}

impl<S: Clone + Debug + Send + Sync> PointPath<S> {
    /// A closed straight-edged polygon from a list of `[x, y]` points.
    ///
    /// Fewer than 3 points is degenerate and yields an empty path.
    pub fn polygon(points: &[[Real; 2]], role: PathRole, metadata: Option<S>) -> Self {
        let anchors = if points.len() < 3 {
            Vec::new()
        } else {
            points.iter().map(|p| Anchor::corner(p[0], p[1])).collect()
        };
        Self {
            anchors,
            closed: true,
            role,
            metadata,
        }
    }

    /// A closed path from explicit anchors (straight and/or curved segments).
    pub fn closed(anchors: Vec<Anchor>, role: PathRole, metadata: Option<S>) -> Self {
        Self {
            anchors,
            closed: true,
            role,
            metadata,
        }
    }

    /// An open path from explicit anchors.
    pub fn open(anchors: Vec<Anchor>, role: PathRole, metadata: Option<S>) -> Self {
        Self {
            anchors,
            closed: false,
            role,
            metadata,
        }
    }

    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    pub const fn role(&self) -> PathRole {
        self.role
    }

    /// Returns the path traversed in the opposite direction: anchors
    /// reversed, with every incoming/outgoing handle pair swapped.
    pub fn reversed(&self) -> Self {
        let anchors = self
            .anchors
            .iter()
            .rev()
            .map(|a| Anchor {
                point: a.point,
                handle_in: a.handle_out,
                handle_out: a.handle_in,
            })
            .collect();
        Self {
            anchors,
            closed: self.closed,
            role: self.role,
            metadata: self.metadata.clone(),
        }
    }

    /// Returns a new path translated by `(dx, dy)`; handles move with their
    /// anchors.
    pub fn translate(&self, dx: Real, dy: Real) -> Self {
        let delta = Vector2::new(dx, dy);
        Self {
            anchors: self.anchors.iter().map(|a| a.translated(delta)).collect(),
            closed: self.closed,
            role: self.role,
            metadata: self.metadata.clone(),
        }
    }

    /// Tessellates the path into a poly-line.
    ///
    /// Straight segments contribute their endpoint; each cubic segment is
    /// sampled with `segments` de Casteljau subdivisions. Closed paths end
    /// with the first point repeated, so the ring closes explicitly.
    pub fn flatten(&self, segments: usize) -> Vec<Point2<Real>> {
        if self.anchors.is_empty() {
            return Vec::new();
        }
        let segments = segments.max(1);

        let mut pts = Vec::with_capacity(self.anchors.len() * segments);
        pts.push(self.anchors[0].point);

        let pair_count = if self.closed {
            self.anchors.len()
        } else {
            self.anchors.len() - 1
        };
        for i in 0..pair_count {
            let a = &self.anchors[i];
            let b = &self.anchors[(i + 1) % self.anchors.len()];
            if a.handle_out.is_none() && b.handle_in.is_none() {
                pts.push(b.point);
                continue;
            }
            let c1 = a.handle_out.unwrap_or(a.point);
            let c2 = b.handle_in.unwrap_or(b.point);
            for step in 1..=segments {
                let t = step as Real / segments as Real;
                pts.push(cubic_point(a.point, c1, c2, b.point, t));
            }
        }
        pts
    }

    /// Approximate bounding box `[min_x, min_y, max_x, max_y]`, computed on
    /// a flattened copy so curve bellies are included. Returns zeros for an
    /// empty path.
    pub fn bounding_box(&self) -> [Real; 4] {
        let pts = self.flatten(16);
        if pts.is_empty() {
            return [0.0; 4];
        }
        let mut min_x = Real::MAX;
        let mut min_y = Real::MAX;
        let mut max_x = Real::MIN;
        let mut max_y = Real::MIN;
        for p in &pts {
            if p.x < min_x {
                min_x = p.x;
            }
            if p.y < min_y {
                min_y = p.y;
            }
            if p.x > max_x {
                max_x = p.x;
            }
            if p.y > max_y {
                max_y = p.y;
            }
        }
        [min_x, min_y, max_x, max_y]
    }

    /// Flattened conversion into a `geo` geometry: a filled [`geo::Polygon`]
    /// for closed paths, a [`geo::LineString`] for open ones.
    pub fn to_geo(&self, segments: usize) -> Geometry<Real> {
        let ring = self.flattened_ring(segments);
        if self.closed {
            Geometry::Polygon(GeoPolygon::new(ring, vec![]))
        } else {
            Geometry::LineString(ring)
        }
    }

    // flatten() repeats the first point for closed paths, so the ring is
    // already explicitly closed.
    pub(crate) fn flattened_ring(&self, segments: usize) -> LineString<Real> {
        let coords: Vec<(Real, Real)> =
            self.flatten(segments).iter().map(|p| (p.x, p.y)).collect();
        LineString::from(coords)
    }
}

// de Casteljau evaluation of one cubic segment
fn cubic_point(
    p0: Point2<Real>,
    p1: Point2<Real>,
    p2: Point2<Real>,
    p3: Point2<Real>,
    t: Real,
) -> Point2<Real> {
    let lerp = |a: Point2<Real>, b: Point2<Real>| Point2::new(
        (1.0 - t) * a.x + t * b.x,
        (1.0 - t) * a.y + t * b.y,
    );
    let q0 = lerp(p0, p1);
    let q1 = lerp(p1, p2);
    let q2 = lerp(p2, p3);
    let r0 = lerp(q0, q1);
    let r1 = lerp(q1, q2);
    lerp(r0, r1)
}
