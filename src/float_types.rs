// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Tolerance used across the crate for floating-point comparisons.
#[cfg(feature = "f32")]
pub const EPSILON: Real = 1e-4;
/// Tolerance used across the crate for floating-point comparisons.
#[cfg(feature = "f64")]
pub const EPSILON: Real = 1e-9;

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

// Frac Pi 2
/// π/2
#[cfg(feature = "f32")]
pub const FRAC_PI_2: Real = core::f32::consts::FRAC_PI_2;
/// π/2
#[cfg(feature = "f64")]
pub const FRAC_PI_2: Real = core::f64::consts::FRAC_PI_2;

// Tau
/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;

/// The golden ratio (φ), the positive root of x² = x + 1, written with the
/// precision the letterform grid was designed against. Used as the default φ
/// by [`ProportionConstants`](crate::proportions::ProportionConstants).
pub const GOLDEN_RATIO: Real = 1.618_033_988_75;
