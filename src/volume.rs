use crate::float_types::{Real, PI, SLOPE_EPSILON};
use crate::geometry::{segment_area, Cylinder};
use crate::quadrature;

/// Liquid volume as a function of the cutting-plane offset `b`, with the
/// cylinder and slope fixed. The offset solver inverts this relationship,
/// so both the closed-form and the Monte Carlo evaluation implement it.
pub trait VolumeModel {
    /// Liquid volume below the plane `z = b − m·x`.
    fn volume(&self, offset: Real) -> Real;
}

/// Closed-form volume by integrating the circular-segment area along the
/// axis. Exact up to quadrature tolerance.
#[derive(Debug, Clone, Copy)]
pub struct ExactVolume {
    pub cylinder: Cylinder,
    pub slope: Real,
}

impl ExactVolume {
    pub fn new(cylinder: Cylinder, slope: Real) -> Self {
        ExactVolume { cylinder, slope }
    }
}

impl VolumeModel for ExactVolume {
    fn volume(&self, offset: Real) -> Real {
        exact_volume(offset, &self.cylinder, self.slope)
    }
}

/// Liquid volume inside `cylinder` below the plane `z = offset − slope·x`.
///
/// The cross-sectional liquid area at axial station `x` is
/// `segment_area(offset − slope·x, R)`; substituting `h = offset − slope·x`
/// turns the axial integral into a 1-D integral of `segment_area` over the
/// chord heights swept between the two ends, divided by `|slope|`. The
/// absolute value keeps a downhill slope from flipping the volume sign.
pub fn exact_volume(offset: Real, cylinder: &Cylinder, slope: Real) -> Real {
    let r = cylinder.radius;
    if slope.abs() < SLOPE_EPSILON {
        // Level surface: constant cross section, no integration needed.
        return cylinder.height * segment_area(offset, r);
    }
    let h_end = offset - slope * cylinder.height;
    let lo = h_end.min(offset);
    let hi = h_end.max(offset);

    // segment_area is flat outside [-R, R] (0 below, πR² above). At steep
    // slopes the swept interval is orders of magnitude wider than the disk,
    // so integrate the tails analytically and keep the quadrature on the
    // non-flat part only.
    let mut integral = 0.0;
    if hi > r {
        integral += (hi - lo.max(r)) * PI * r * r;
    }
    let qa = lo.max(-r);
    let qb = hi.min(r);
    if qb > qa {
        integral += quadrature::integrate(|h| segment_area(h, r), qa, qb);
    }
    integral / slope.abs()
}
