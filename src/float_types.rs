// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// A small epsilon for geometric comparisons, adjusted per precision.
#[cfg(feature = "f32")]
pub const EPSILON: Real = 1e-5;
#[cfg(feature = "f64")]
pub const EPSILON: Real = 1e-10;

// Pi
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

// Tau
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;

/// Below this magnitude a plane slope is treated as level and the
/// constant-cross-section volume shortcut applies.
pub const SLOPE_EPSILON: Real = 1e-12;
