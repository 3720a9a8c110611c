//! Root finding for the plane offset: a Brent-style bracketed solver for the
//! smooth closed-form volume model, and a tolerance-bounded bisection that
//! stays robust under Monte Carlo sampling noise.

use crate::float_types::{Real, EPSILON};
use crate::geometry::{Cylinder, CuttingPlane};
use crate::volume::VolumeModel;

/// Options shared by both root-finding strategies.
#[derive(Debug, Clone, Copy)]
pub struct SolverOptions {
    /// Iteration cap; always honored, exhaustion yields a best-effort result.
    pub max_iter: usize,
    /// Absolute volume tolerance for the bisection strategy (same units as
    /// the target volume, tens of cm³ in the reference scenario).
    pub volume_tol: Real,
    /// Absolute offset tolerance for the bracketed strategy.
    pub offset_tol: Real,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            max_iter: 80,
            volume_tol: 50.0,
            offset_tol: 1e-9,
        }
    }
}

/// Which root finder inverts the volume model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStrategy {
    /// Brent's method; appropriate for the smooth exact model.
    Bracketed,
    /// Plain bisection with an absolute volume tolerance; appropriate for
    /// the Monte Carlo model, where sampling noise can defeat a bracketed
    /// solver's sign bookkeeping.
    Bisection,
}

/// Outcome of one offset solve.
///
/// `offset` carries the flag values `b_min − 1` / `b_max + 1` when the target
/// was out of range (empty / full barrel); those count as converged
/// degenerate results. `v_check` is the model's own evaluation at `offset`,
/// so `v_check − target` is the residual a caller can judge quality by.
#[derive(Debug, Clone, Copy)]
pub struct OffsetSolution {
    pub offset: Real,
    pub v_check: Real,
    pub converged: bool,
    pub iterations: usize,
}

impl OffsetSolution {
    pub fn residual(&self, target: Real) -> Real {
        self.v_check - target
    }
}

/// Solve for the plane offset `b` reproducing `target` liquid volume.
///
/// Targets at or below zero return `b_min − 1` (barrel empty); targets at or
/// above the full volume return `b_max + 1` (barrel full). Both are flag
/// values just outside the feasible bracket `[−R, R + m·H]` and short-circuit
/// without invoking the root finder. Within range the chosen strategy runs
/// under the iteration cap and reports its best estimate either way.
pub fn solve_offset<M: VolumeModel>(
    model: &M,
    target: Real,
    cylinder: &Cylinder,
    slope: Real,
    strategy: SolveStrategy,
    options: &SolverOptions,
) -> OffsetSolution {
    let (b_min, b_max) = CuttingPlane::offset_bracket(slope, cylinder);
    let v_full = cylinder.full_volume();

    if target <= 0.0 {
        return OffsetSolution {
            offset: b_min - 1.0,
            v_check: 0.0,
            converged: true,
            iterations: 0,
        };
    }
    if target >= v_full {
        return OffsetSolution {
            offset: b_max + 1.0,
            v_check: v_full,
            converged: true,
            iterations: 0,
        };
    }

    match strategy {
        SolveStrategy::Bracketed => {
            let root = brent(|b| model.volume(b) - target, b_min, b_max, options);
            OffsetSolution {
                offset: root.x,
                v_check: model.volume(root.x),
                converged: root.converged,
                iterations: root.iterations,
            }
        }
        SolveStrategy::Bisection => bisect_volume(model, target, b_min, b_max, options),
    }
}

/// Bisection on the volume residual with an absolute volume tolerance.
///
/// Convergence means `|V(mid) − target| < volume_tol`; if the cap runs out
/// first, the last midpoint is returned with `converged = false`. The volume
/// model is assumed nondecreasing in the offset up to sampling noise.
pub fn bisect_volume<M: VolumeModel>(
    model: &M,
    target: Real,
    mut lo: Real,
    mut hi: Real,
    options: &SolverOptions,
) -> OffsetSolution {
    let mut iter = 0;
    loop {
        let mid = 0.5 * (lo + hi);
        let v_mid = model.volume(mid);
        iter += 1;
        if (v_mid - target).abs() < options.volume_tol {
            return OffsetSolution {
                offset: mid,
                v_check: v_mid,
                converged: true,
                iterations: iter,
            };
        }
        if iter >= options.max_iter {
            return OffsetSolution {
                offset: mid,
                v_check: v_mid,
                converged: false,
                iterations: iter,
            };
        }
        if v_mid < target {
            lo = mid;
        } else {
            hi = mid;
        }
    }
}

/// Result of a raw Brent solve.
#[derive(Debug, Clone, Copy)]
pub struct BrentResult {
    pub x: Real,
    pub f_x: Real,
    pub iterations: usize,
    pub converged: bool,
}

/// Brent's method: bracketed, derivative-free root finding combining
/// bisection with secant and inverse-quadratic steps.
///
/// Expects `f(a)` and `f(b)` to differ in sign. If they do not, the endpoint
/// with the smaller residual is returned unconverged rather than panicking,
/// since a noisy model can momentarily break an otherwise valid bracket.
/// Exhausting the iteration cap likewise returns the current best estimate
/// with `converged = false`.
pub fn brent<F: Fn(Real) -> Real>(f: F, a: Real, b: Real, options: &SolverOptions) -> BrentResult {
    let mut a = a;
    let mut b = b;
    let mut fa = f(a);
    let mut fb = f(b);

    if fa == 0.0 {
        return BrentResult { x: a, f_x: 0.0, iterations: 0, converged: true };
    }
    if fb == 0.0 {
        return BrentResult { x: b, f_x: 0.0, iterations: 0, converged: true };
    }
    if fa.signum() == fb.signum() {
        let (x, f_x) = if fa.abs() <= fb.abs() { (a, fa) } else { (b, fb) };
        return BrentResult { x, f_x, iterations: 0, converged: false };
    }

    let mut c = a;
    let mut fc = fa;
    let mut d = b - a;
    let mut e = d;

    for iter in 1..=options.max_iter {
        if fb.signum() == fc.signum() {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol1 = 2.0 * EPSILON * b.abs() + 0.5 * options.offset_tol;
        let xm = 0.5 * (c - b);
        if xm.abs() <= tol1 || fb == 0.0 {
            return BrentResult { x: b, f_x: fb, iterations: iter, converged: true };
        }

        if e.abs() >= tol1 && fa.abs() > fb.abs() {
            // Secant step when a == c, inverse quadratic otherwise.
            let s = fb / fa;
            let mut p: Real;
            let mut q: Real;
            if a == c {
                p = 2.0 * xm * s;
                q = 1.0 - s;
            } else {
                let qq = fa / fc;
                let rr = fb / fc;
                p = s * (2.0 * xm * qq * (qq - rr) - (b - a) * (rr - 1.0));
                q = (qq - 1.0) * (rr - 1.0) * (s - 1.0);
            }
            if p > 0.0 {
                q = -q;
            }
            p = p.abs();
            let min1 = 3.0 * xm * q - (tol1 * q).abs();
            let min2 = (e * q).abs();
            if 2.0 * p < min1.min(min2) {
                // Interpolation accepted.
                e = d;
                d = p / q;
            } else {
                d = xm;
                e = d;
            }
        } else {
            d = xm;
            e = d;
        }

        a = b;
        fa = fb;
        if d.abs() > tol1 {
            b += d;
        } else {
            b += tol1.copysign(xm);
        }
        fb = f(b);
    }

    BrentResult {
        x: b,
        f_x: fb,
        iterations: options.max_iter,
        converged: false,
    }
}
