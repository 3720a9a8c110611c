use crate::float_types::{Real, PI};
use thiserror::Error;

/// Errors raised for configurations the geometry has no sensible answer for.
///
/// Degenerate-but-valid inputs (an empty or over-full target volume, a plane
/// entirely above or below the barrel) never error; they resolve to flag or
/// zero values at the call site.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("cylinder radius must be positive, got {0}")]
    NonPositiveRadius(Real),
    #[error("cylinder height must be positive, got {0}")]
    NonPositiveHeight(Real),
    #[error("sample count must be nonzero")]
    EmptySampleSet,
    #[error("sample set was generated for a different cylinder ({expected:?}, got {got:?})")]
    SampleSetMismatch { expected: (Real, Real), got: (Real, Real) },
}

/// A right-circular cylinder ("barrel") with axis along `x ∈ [0, height]`.
///
/// Lengths are plain scalars; the reference scenario works in centimeters
/// and cubic centimeters but nothing in the crate depends on the unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    pub radius: Real,
    pub height: Real,
}

impl Cylinder {
    /// Create a cylinder, validating that both dimensions are positive.
    pub fn new(radius: Real, height: Real) -> Result<Self, GeometryError> {
        if !(radius > 0.0) {
            return Err(GeometryError::NonPositiveRadius(radius));
        }
        if !(height > 0.0) {
            return Err(GeometryError::NonPositiveHeight(height));
        }
        Ok(Cylinder { radius, height })
    }

    /// Cylinder sized to hold `volume` at the given radius:
    /// `height = volume / (π · radius²)`.
    pub fn with_volume(radius: Real, volume: Real) -> Result<Self, GeometryError> {
        if !(radius > 0.0) {
            return Err(GeometryError::NonPositiveRadius(radius));
        }
        Cylinder::new(radius, volume / (PI * radius * radius))
    }

    /// Total volume `π R² H`.
    #[inline]
    pub fn full_volume(&self) -> Real {
        PI * self.radius * self.radius * self.height
    }
}

/// The planar liquid surface inside the barrel: `z(x) = b − m·x`, with `z`
/// measured from the cross-section centerline and `x` along the axis.
///
/// `slope` is `tan(alpha)` for inclination angle `alpha`; `offset` is the
/// chord height at `x = 0` and is the unknown the solver recovers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CuttingPlane {
    pub slope: Real,
    pub offset: Real,
}

impl CuttingPlane {
    pub fn new(slope: Real, offset: Real) -> Self {
        CuttingPlane { slope, offset }
    }

    /// Plane with slope derived from an inclination angle in degrees.
    /// `alpha = 90°` is singular (vertical surface) and not representable.
    pub fn from_angle_deg(alpha_deg: Real, offset: Real) -> Self {
        CuttingPlane {
            slope: alpha_deg.to_radians().tan(),
            offset,
        }
    }

    /// Liquid surface height at axial station `x`, measured from the
    /// centerline. Unclamped; may exceed `±R` where the surface misses
    /// the cross section entirely.
    #[inline]
    pub fn surface_height(&self, x: Real) -> Real {
        self.offset - self.slope * x
    }

    /// Liquid depth at axial station `x`, measured from the lowest point of
    /// the cross section. Clamped to `[0, 2R]`.
    pub fn submerged_depth(&self, x: Real, cylinder: &Cylinder) -> Real {
        let r = cylinder.radius;
        self.surface_height(x).clamp(-r, r) + r
    }

    /// Feasible offset bracket `[b_min, b_max] = [−R, R + m·H]` for a
    /// nonnegative slope: at `b_min` the barrel is empty, at `b_max` full.
    pub fn offset_bracket(slope: Real, cylinder: &Cylinder) -> (Real, Real) {
        (-cylinder.radius, cylinder.radius + slope * cylinder.height)
    }
}

/// Area of the circular segment of a disk of radius `r` below the horizontal
/// chord at height `h` (measured from the center).
///
/// `h` is clamped to `[-r, r]` first, so values outside the disk resolve to
/// the full circle (`π r²`) and the empty segment (`0`) rather than reaching
/// the transcendental formula. Caller must guarantee `r > 0`.
pub fn segment_area(h: Real, r: Real) -> Real {
    let h = h.clamp(-r, r);
    if h >= r {
        PI * r * r
    } else if h <= -r {
        0.0
    } else {
        r * r * (-h / r).acos() - h * (r * r - h * h).sqrt()
    }
}
