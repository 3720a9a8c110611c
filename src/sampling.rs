//! Seeded Monte Carlo sampling of the cylinder interior, and the volume and
//! wetted-surface estimators built on it.

use crate::float_types::{Real, TAU};
use crate::geometry::{segment_area, Cylinder, CuttingPlane, GeometryError};
use crate::volume::VolumeModel;
use nalgebra::Point2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A fixed set of sample points inside the cylinder, generated once per run
/// and shared read-only across every estimator evaluation.
///
/// Each point stores `x` (axial station, uniform on `[0, H]`) and `y` (one
/// transverse coordinate of a point uniform over the disk). Reusing one set
/// across all bisection iterations and sweep angles keeps the sampling noise
/// correlated, so the solver's target function stays effectively monotonic;
/// re-drawing per evaluation would not.
#[derive(Debug, Clone)]
pub struct SampleSet {
    points: Vec<Point2<Real>>,
    cylinder: Cylinder,
}

impl SampleSet {
    /// Draw `count` samples for `cylinder` from a ChaCha generator seeded
    /// with `seed`. Deterministic for a given `(count, seed)` pair.
    ///
    /// The transverse coordinate comes from a uniform disk point:
    /// `r = R·√U`, `θ ~ U(0, 2π)`, `y = r·cos θ`. The `√U` correction is
    /// what makes the disk distribution uniform rather than center-biased.
    pub fn generate(cylinder: Cylinder, count: usize, seed: u64) -> Result<Self, GeometryError> {
        if count == 0 {
            return Err(GeometryError::EmptySampleSet);
        }
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut points = Vec::with_capacity(count);
        for _ in 0..count {
            let x = rng.gen_range(0.0..cylinder.height);
            let r = cylinder.radius * rng.gen::<Real>().sqrt();
            let theta = rng.gen_range(0.0..TAU);
            points.push(Point2::new(x, r * theta.cos()));
        }
        Ok(SampleSet { points, cylinder })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn cylinder(&self) -> &Cylinder {
        &self.cylinder
    }

    /// Number of samples below the liquid surface `y ≤ b − m·x`.
    pub fn inside_count(&self, plane: &CuttingPlane) -> usize {
        #[cfg(feature = "parallel")]
        {
            self.points
                .par_iter()
                .filter(|p| p.y <= plane.surface_height(p.x))
                .count()
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.points
                .iter()
                .filter(|p| p.y <= plane.surface_height(p.x))
                .count()
        }
    }
}

/// Monte Carlo volume model: the inside fraction of a shared, read-only
/// `SampleSet`, scaled by the full cylinder volume.
#[derive(Debug, Clone, Copy)]
pub struct McVolume<'a> {
    samples: &'a SampleSet,
    slope: Real,
}

impl<'a> McVolume<'a> {
    pub fn new(samples: &'a SampleSet, slope: Real) -> Self {
        McVolume { samples, slope }
    }
}

impl VolumeModel for McVolume<'_> {
    fn volume(&self, offset: Real) -> Real {
        let plane = CuttingPlane::new(self.slope, offset);
        let inside = self.samples.inside_count(&plane);
        let fraction = inside as Real / self.samples.len() as Real;
        fraction * self.samples.cylinder().full_volume()
    }
}

/// Monte Carlo estimate of the wetted surface: lateral barrel wall in contact
/// with liquid plus the planar liquid top, averaged over the samples inside
/// the liquid region.
///
/// The lateral term is `2πR · mean(clamp(b − m·x, 0, R))`, a wetted-height
/// strip around the circumference. The top term is the mean per-sample
/// segment area at the clamped plane height, with no further scaling. Both
/// are documented approximations, not exact surface integrals; accuracy is
/// whatever `O(1/√N)` sampling gives.
///
/// Returns `0.0` when no sample lies inside the liquid region.
pub fn wetted_surface_area(samples: &SampleSet, plane: &CuttingPlane) -> Real {
    let r = samples.cylinder().radius;

    #[cfg(feature = "parallel")]
    let (inside, lateral_sum, top_sum) = samples
        .points
        .par_iter()
        .filter(|p| p.y <= plane.surface_height(p.x))
        .map(|p| {
            let h = plane.surface_height(p.x);
            (1usize, h.clamp(0.0, r), segment_area(h, r))
        })
        .reduce(|| (0, 0.0, 0.0), |a, b| (a.0 + b.0, a.1 + b.1, a.2 + b.2));

    #[cfg(not(feature = "parallel"))]
    let (inside, lateral_sum, top_sum) = {
        let mut acc = (0usize, 0.0, 0.0);
        for p in &samples.points {
            let h = plane.surface_height(p.x);
            if p.y <= h {
                acc.0 += 1;
                acc.1 += h.clamp(0.0, r);
                acc.2 += segment_area(h, r);
            }
        }
        acc
    };

    if inside == 0 {
        return 0.0;
    }
    let n = inside as Real;
    TAU * r * (lateral_sum / n) + top_sum / n
}
