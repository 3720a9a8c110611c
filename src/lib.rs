#![forbid(unsafe_code)]

//! Fill-level solver for a partially filled, inclined cylindrical barrel.
//!
//! The liquid surface inside a tilted barrel is a plane `z = b − m·x`
//! (slope `m = tan(alpha)`, offset `b` at the bottom end). This crate
//! computes the liquid volume for a given plane, either exactly by
//! integrating circular-segment areas along the axis or stochastically
//! from a seeded Monte Carlo sample of the interior, and inverts that
//! relationship with a bracketed root finder to recover the offset that
//! holds a prescribed volume. A sweep driver repeats the solve across lists
//! of inclination angles, barrel radii, or target volumes, and the Monte
//! Carlo path additionally estimates the wetted surface area.
//!
//! ```
//! use barrelfill::{exact_volume, solve_offset, Cylinder, ExactVolume,
//!                  SolveStrategy, SolverOptions};
//!
//! let barrel = Cylinder::new(37.5, 100.0).unwrap();
//! let slope = (50.0f64).to_radians().tan();
//! let model = ExactVolume::new(barrel, slope);
//! let sol = solve_offset(&model, 58315.81, &barrel, slope,
//!                        SolveStrategy::Bracketed, &SolverOptions::default());
//! let check = exact_volume(sol.offset, &barrel, slope);
//! assert!((check - 58315.81).abs() < 1e-3);
//! ```

pub mod float_types;
pub mod geometry;
pub mod quadrature;
pub mod sampling;
pub mod solver;
pub mod sweep;
pub mod volume;

pub use float_types::{Real, EPSILON, PI, TAU};
pub use geometry::{segment_area, Cylinder, CuttingPlane, GeometryError};
pub use sampling::{wetted_surface_area, McVolume, SampleSet};
pub use solver::{
    bisect_volume, brent, solve_offset, BrentResult, OffsetSolution, SolveStrategy, SolverOptions,
};
pub use sweep::{run_sweep, SolveRecord, SweepAxis};
pub use volume::{exact_volume, ExactVolume, VolumeModel};
