//! Sweep driver: runs the offset solver across an ordered list of sweep
//! values (inclination angles, barrel radii, or target volumes) and collects
//! one record per step, in input order.

use crate::float_types::Real;
use crate::geometry::{Cylinder, CuttingPlane, GeometryError};
use crate::sampling::{wetted_surface_area, McVolume, SampleSet};
use crate::solver::{solve_offset, SolveStrategy, SolverOptions};
use crate::volume::ExactVolume;

/// Which quantity varies across the sweep; everything else is held fixed.
#[derive(Debug, Clone)]
pub enum SweepAxis {
    /// Vary the inclination angle at fixed geometry and target volume.
    Angle {
        cylinder: Cylinder,
        target_volume: Real,
        angles_deg: Vec<Real>,
    },
    /// Vary the barrel radius at fixed total barrel volume, inclination and
    /// target volume; each step derives `H = V_barrel / (π R²)`.
    Radius {
        barrel_volume: Real,
        target_volume: Real,
        angle_deg: Real,
        radii: Vec<Real>,
    },
    /// Vary the target volume at fixed geometry and inclination.
    TargetVolume {
        cylinder: Cylinder,
        angle_deg: Real,
        targets: Vec<Real>,
    },
}

/// One solved sweep step.
#[derive(Debug, Clone, Copy)]
pub struct SolveRecord {
    pub angle_deg: Real,
    pub cylinder: Cylinder,
    pub target_volume: Real,
    pub offset: Real,
    pub v_check: Real,
    /// Wetted-surface estimate; present only on the Monte Carlo path.
    pub surface_area: Option<Real>,
    pub converged: bool,
}

impl SolveRecord {
    /// The solved liquid surface as a plane.
    pub fn plane(&self) -> CuttingPlane {
        CuttingPlane::from_angle_deg(self.angle_deg, self.offset)
    }
}

/// Run the solver once per sweep value, in input order.
///
/// With `samples` supplied the Monte Carlo model and bisection strategy are
/// used and each record carries a wetted-surface estimate; without, the
/// closed-form model and Brent's method. The sample set is generated once by
/// the caller and only borrowed here; it must match the sweep's fixed
/// geometry, so the radius axis (whose cylinder changes per step) rejects a
/// sample set rather than silently reusing it for the wrong barrel.
pub fn run_sweep(
    axis: &SweepAxis,
    samples: Option<&SampleSet>,
    options: &SolverOptions,
) -> Result<Vec<SolveRecord>, GeometryError> {
    let mut records = Vec::new();
    for step in sweep_steps(axis)? {
        let (angle_deg, cylinder, target_volume) = step;
        let slope = angle_deg.to_radians().tan();

        let solution = match samples {
            Some(set) => {
                let have = set.cylinder();
                if *have != cylinder {
                    return Err(GeometryError::SampleSetMismatch {
                        expected: (cylinder.radius, cylinder.height),
                        got: (have.radius, have.height),
                    });
                }
                let model = McVolume::new(set, slope);
                solve_offset(
                    &model,
                    target_volume,
                    &cylinder,
                    slope,
                    SolveStrategy::Bisection,
                    options,
                )
            }
            None => {
                let model = ExactVolume::new(cylinder, slope);
                solve_offset(
                    &model,
                    target_volume,
                    &cylinder,
                    slope,
                    SolveStrategy::Bracketed,
                    options,
                )
            }
        };

        let surface_area = samples.map(|set| {
            wetted_surface_area(set, &CuttingPlane::new(slope, solution.offset))
        });

        records.push(SolveRecord {
            angle_deg,
            cylinder,
            target_volume,
            offset: solution.offset,
            v_check: solution.v_check,
            surface_area,
            converged: solution.converged,
        });
    }
    Ok(records)
}

/// Expand the axis into `(angle_deg, cylinder, target_volume)` steps.
fn sweep_steps(axis: &SweepAxis) -> Result<Vec<(Real, Cylinder, Real)>, GeometryError> {
    match axis {
        SweepAxis::Angle {
            cylinder,
            target_volume,
            angles_deg,
        } => Ok(angles_deg
            .iter()
            .map(|&a| (a, *cylinder, *target_volume))
            .collect()),
        SweepAxis::Radius {
            barrel_volume,
            target_volume,
            angle_deg,
            radii,
        } => radii
            .iter()
            .map(|&r| {
                Cylinder::with_volume(r, *barrel_volume).map(|cyl| (*angle_deg, cyl, *target_volume))
            })
            .collect(),
        SweepAxis::TargetVolume {
            cylinder,
            angle_deg,
            targets,
        } => Ok(targets
            .iter()
            .map(|&v| (*angle_deg, *cylinder, v))
            .collect()),
    }
}
