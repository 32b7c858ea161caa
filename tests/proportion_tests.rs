mod support;

use goldglyph::float_types::Real;
use goldglyph::{GlyphError, ProportionConstants};
use support::approx_eq;

#[test]
fn defaults_are_the_fibonacci_set() {
    let c = ProportionConstants::default();
    assert_eq!(c.height, 8.0);
    assert_eq!(c.width_wide, 13.0);
    assert_eq!(c.width_std, 8.0);
    assert_eq!(c.stroke, 3.0);
    assert!(approx_eq(c.phi, 1.61803398875, 1e-12));
    assert!(c.validate().is_ok());
}

#[test]
fn kerning_is_the_golden_fraction_of_the_stroke() {
    let c = ProportionConstants::default();
    assert_eq!(c.kerning(), c.stroke / c.phi);
    assert!(c.kerning() < c.stroke);

    // kerning < stroke holds for every phi > 1
    for phi in [1.1, 1.61803398875, 2.0, 3.0] {
        let c = ProportionConstants { phi, ..Default::default() };
        assert_eq!(c.kerning(), c.stroke / phi);
        assert!(c.kerning() < c.stroke);
    }
}

#[test]
fn y_split_sits_at_the_golden_section() {
    let c = ProportionConstants::default();
    assert!(approx_eq(
        c.y_split_height(),
        c.height * (1.0 - 1.0 / c.phi),
        1e-9
    ));
    // for height = 8 and the default phi
    assert!(approx_eq(c.y_split_height(), 3.05572809, 1e-8));
}

#[test]
fn c_gap_is_three_tenths_of_the_height() {
    let c = ProportionConstants::default();
    assert_eq!(c.c_gap_length(), 0.3 * c.height);

    let tall = ProportionConstants { height: 21.0, width_std: 21.0, ..Default::default() };
    assert_eq!(tall.c_gap_length(), 0.3 * 21.0);
}

#[test]
fn d_bowl_rectangle_has_phi_aspect() {
    let c = ProportionConstants::default();
    assert_eq!(c.d_bowl_width(), c.height / c.phi);
}

#[test]
fn zero_height_is_rejected() {
    let c = ProportionConstants { height: 0.0, ..Default::default() };
    assert!(matches!(
        c.validate(),
        Err(GlyphError::InvalidProportion { name: "height", .. })
    ));
}

#[test]
fn nan_height_is_rejected() {
    let c = ProportionConstants { height: Real::NAN, ..Default::default() };
    assert!(c.validate().is_err());
}

#[test]
fn negative_width_is_rejected() {
    let c = ProportionConstants { width_std: -1.0, ..Default::default() };
    assert!(matches!(
        c.validate(),
        Err(GlyphError::InvalidProportion { name: "width_std", .. })
    ));
}

#[test]
fn phi_must_exceed_one() {
    let c = ProportionConstants { phi: 1.0, ..Default::default() };
    assert!(matches!(
        c.validate(),
        Err(GlyphError::InvalidProportion { name: "phi", .. })
    ));
}

#[test]
fn stroke_at_half_the_minimum_dimension_is_rejected() {
    // min(width, height) / 2 = 4 for the defaults; the boundary itself fails
    let c = ProportionConstants { stroke: 4.0, ..Default::default() };
    assert!(matches!(
        c.validate(),
        Err(GlyphError::InvalidProportion { name: "stroke", .. })
    ));

    let c = ProportionConstants { stroke: 3.999, ..Default::default() };
    assert!(c.validate().is_ok());
}

#[test]
fn non_positive_stroke_is_rejected() {
    let c = ProportionConstants { stroke: 0.0, ..Default::default() };
    assert!(matches!(
        c.validate(),
        Err(GlyphError::InvalidProportion { name: "stroke", .. })
    ));
}
