//! The straight-edged letters T, M and Y, each a closed polygon (or two)
//! on the Fibonacci grid.

use crate::float_types::Real;
use crate::path::{PathRole, PointPath};
use crate::proportions::ProportionConstants;
use std::fmt::Debug;

/// How far below the cap line the M's pillar crooks sit, in strokes.
const M_CROOK_DROP: Real = 2.0 / 3.0;

/// Vertical thickness of the M's V-notch, in strokes.
const M_APEX_RISE: Real = 1.2;

/// Horizontal inset of the Y's arm tips from each side, in strokes.
const Y_ARM_INSET: Real = 1.2;

/// Height of the Y's crotch above the split point, in strokes.
const Y_CROTCH_RISE: Real = 0.8;

/// T: a horizontal bar of height `stroke` spanning the full wide width,
/// plus a centered vertical stem of width `stroke` reaching down to y = 0.
/// Exactly 8 anchors, counter-clockwise from the stem's bottom-left.
pub(crate) fn letter_t<S: Clone + Debug + Send + Sync>(
    constants: &ProportionConstants,
    metadata: Option<S>,
) -> Vec<PointPath<S>> {
    let w = constants.width_wide;
    let h = constants.height;
    let s = constants.stroke;

    // stem_x + stroke/2 == width/2 for every width/stroke pair
    let stem_left = (w - s) / 2.0;
    let stem_right = stem_left + s;

    let points = [
        [stem_left, 0.0],
        [stem_right, 0.0],
        [stem_right, h - s],
        [w, h - s],
        [w, h],
        [0.0, h],
        [0.0, h - s],
        [stem_left, h - s],
    ];
    vec![PointPath::polygon(&points, PathRole::Outer, metadata)]
}

/// M: two outer pillars of width `stroke` joined across the top, with an
/// inner V-notch whose lowest point sits at `y = stroke` exactly. The notch
/// depth is fixed to the stroke, not derived from φ.
pub(crate) fn letter_m<S: Clone + Debug + Send + Sync>(
    constants: &ProportionConstants,
    metadata: Option<S>,
) -> Vec<PointPath<S>> {
    let w = constants.width_wide;
    let h = constants.height;
    let s = constants.stroke;
    let mid = w / 2.0;

    let notch_bottom = s;
    let notch_top = s + M_APEX_RISE * s;
    let crook = h - M_CROOK_DROP * s;

    let points = [
        [0.0, 0.0],
        [s, 0.0],
        [s, crook],
        [mid, notch_bottom],
        [w - s, crook],
        [w - s, 0.0],
        [w, 0.0],
        [w, h],
        [mid, notch_top],
        [0.0, h],
    ];
    vec![PointPath::polygon(&points, PathRole::Outer, metadata)]
}

/// Y: two closed polygons — a lower stem rectangle and the upper V arms —
/// meeting at the Golden Section of the vertical axis,
/// `split = height × (1 − 1/φ)`.
pub(crate) fn letter_y<S: Clone + Debug + Send + Sync>(
    constants: &ProportionConstants,
    metadata: Option<S>,
) -> Vec<PointPath<S>> {
    let w = constants.width_std;
    let h = constants.height;
    let s = constants.stroke;
    let mid = w / 2.0;
    let split = constants.y_split_height();

    let stem = [
        [mid - s / 2.0, 0.0],
        [mid + s / 2.0, 0.0],
        [mid + s / 2.0, split],
        [mid - s / 2.0, split],
    ];

    let arms = [
        [mid - s / 2.0, split],
        [mid + s / 2.0, split],
        [w, h],
        [w - Y_ARM_INSET * s, h],
        [mid, split + Y_CROTCH_RISE * s],
        [Y_ARM_INSET * s, h],
        [0.0, h],
    ];

    vec![
        PointPath::polygon(&stem, PathRole::Outer, metadata.clone()),
        PointPath::polygon(&arms, PathRole::Outer, metadata),
    ]
}
