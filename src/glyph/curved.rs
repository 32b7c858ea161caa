//! The curved letters D and C, built from cubic Bezier segments with
//! axis-aligned handles at every cardinal anchor.
//!
//! Each curved letter is an outer/inner pair offset by exactly one stroke;
//! the inner path is emitted in reverse traversal order so the pair
//! concatenates into a ring profile.

use crate::float_types::{FRAC_PI_2, PI, Real, TAU};
use crate::path::{Anchor, PathRole, PointPath};
use crate::proportions::ProportionConstants;
use nalgebra::{Point2, Vector2};
use std::fmt::Debug;

/// Handle length per unit of local radius for the curved letters.
///
/// Deliberately below the circular-arc constant (≈0.55228): the shorter
/// handles bias the bowls toward a super-ellipse rather than a circle,
/// which is what gives the letterforms their squarish smoothness. Tunable
/// to taste; 0.55 is the documented choice.
pub const K_SMOOTH: Real = 0.55;

/// D: a straight left edge with a right-side bowl tangent to a
/// φ-proportioned bounding rectangle (vertical extent `height`, horizontal
/// extent `height/φ`). The inner path is the outer offset inward by
/// exactly `stroke`.
pub(crate) fn letter_d<S: Clone + Debug + Send + Sync>(
    constants: &ProportionConstants,
    metadata: Option<S>,
) -> Vec<PointPath<S>> {
    let w = constants.width_std;
    let h = constants.height;
    let s = constants.stroke;
    let rx = constants.d_bowl_width();
    let flat = w - rx;

    let outer = d_path(0.0, flat, 0.0, h, rx, PathRole::Outer, metadata.clone());
    let inner = d_path(s, flat, s, h - s, rx - s, PathRole::Inner, metadata).reversed();
    vec![outer, inner]
}

/// One D boundary: sharp left corners, then a four-anchor bowl whose curve
/// anchors sit at the cardinal directions of the inscribed ellipse. Curve
/// start/end handles are horizontal with length `k·rx`; the apex handles
/// are vertical with length `k·ry`.
fn d_path<S: Clone + Debug + Send + Sync>(
    left: Real,
    flat: Real,
    bottom: Real,
    top: Real,
    rx: Real,
    role: PathRole,
    metadata: Option<S>,
) -> PointPath<S> {
    let mid = (bottom + top) / 2.0;
    let ry = (top - bottom) / 2.0;
    let apex_x = flat + rx;

    let anchors = vec![
        Anchor::corner(left, bottom),
        Anchor::smooth(
            Point2::new(flat, bottom),
            None,
            Some(Point2::new(flat + K_SMOOTH * rx, bottom)),
        ),
        Anchor::smooth(
            Point2::new(apex_x, mid),
            Some(Point2::new(apex_x, mid - K_SMOOTH * ry)),
            Some(Point2::new(apex_x, mid + K_SMOOTH * ry)),
        ),
        Anchor::smooth(
            Point2::new(flat, top),
            Some(Point2::new(flat + K_SMOOTH * rx, top)),
            None,
        ),
        Anchor::corner(left, top),
    ];
    PointPath::closed(anchors, role, metadata)
}

/// C: two open concentric arcs (outer radius `height/2`, inner radius
/// `height/2 − stroke`) with a mouth centered on the +x side.
///
/// The mouth is measured as **arc length along the nominal circle** — the
/// stroke centerline of radius `height/2 − stroke/2` — so it stays
/// proportional to the height rather than being a fixed angle.
pub(crate) fn letter_c<S: Clone + Debug + Send + Sync>(
    constants: &ProportionConstants,
    metadata: Option<S>,
) -> Vec<PointPath<S>> {
    let w = constants.width_std;
    let h = constants.height;
    let s = constants.stroke;

    let cx = w / 2.0;
    let cy = h / 2.0;
    let r_outer = h / 2.0;
    let r_inner = h / 2.0 - s;
    let r_nominal = h / 2.0 - s / 2.0;
    // stroke < height/2 keeps the half-gap below π/2, so the quadrant
    // anchors stay strictly inside the arc
    let gap_half = constants.c_gap_length() / r_nominal / 2.0;

    let outer = arc_path(cx, cy, r_outer, gap_half, PathRole::Outer, metadata.clone());
    let inner = arc_path(cx, cy, r_inner, gap_half, PathRole::Inner, metadata).reversed();
    vec![outer, inner]
}

/// Open counter-clockwise arc from `gap_half` to `τ − gap_half`, anchored
/// at the gap edges and the three interior quadrants. Quadrant anchors get
/// strictly horizontal/vertical handles; every handle points along the
/// local tangent with length scaled by the adjacent segment's sweep.
fn arc_path<S: Clone + Debug + Send + Sync>(
    cx: Real,
    cy: Real,
    r: Real,
    gap_half: Real,
    role: PathRole,
    metadata: Option<S>,
) -> PointPath<S> {
    let angles = [
        gap_half,
        FRAC_PI_2,
        PI,
        PI + FRAC_PI_2,
        TAU - gap_half,
    ];

    let mut anchors = Vec::with_capacity(angles.len());
    for (i, &theta) in angles.iter().enumerate() {
        let point = Point2::new(cx + r * theta.cos(), cy + r * theta.sin());
        let tangent = Vector2::new(-theta.sin(), theta.cos());
        let handle_in = (i > 0).then(|| point - tangent * handle_length(r, theta - angles[i - 1]));
        let handle_out = (i + 1 < angles.len())
            .then(|| point + tangent * handle_length(r, angles[i + 1] - theta));
        anchors.push(Anchor::smooth(point, handle_in, handle_out));
    }
    PointPath::open(anchors, role, metadata)
}

/// Handle length for a segment of angular sweep `sweep` on a circle of
/// radius `r`: `k·r` for a full quadrant, scaled linearly for the partial
/// segments beside the mouth.
fn handle_length(r: Real, sweep: Real) -> Real {
    K_SMOOTH * r * (sweep / FRAC_PI_2)
}
