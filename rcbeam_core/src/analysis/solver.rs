//! Bounded adaptive equilibrium search shared by every flexural analysis.
//!
//! All three analysis procedures reduce to the same problem: a residual
//! that is negative while the trial depth is too shallow and positive once
//! it overshoots, to be driven inside a tolerance band. The search marches
//! forward with a growing step until it first overshoots, then halves the
//! step and backs off, bisection-style, until the residual is within
//! tolerance. Exceeding the iteration bound is a `NonConvergence` error,
//! never a silently returned partial result.

use crate::errors::{RcError, RcResult};

/// Step growth factor while marching toward the first overshoot
const GROWTH: f64 = 2.0;

/// Parameters for one equilibrium search.
pub(crate) struct SearchOptions {
    /// Solver name reported on non-convergence
    pub solver: &'static str,
    /// Starting trial value (must be positive)
    pub initial: f64,
    /// Initial step size
    pub initial_step: f64,
    /// Absolute residual tolerance
    pub tolerance: f64,
    /// Upper bound on the trial value (e.g. the section height)
    pub upper_bound: f64,
    /// Iteration bound
    pub max_iterations: usize,
}

/// Drive a monotone residual to within tolerance of zero.
///
/// `residual(x)` must be increasing in `x`: negative for undershoot,
/// positive for overshoot. Geometry failures from the residual propagate
/// unchanged.
pub(crate) fn solve_monotone<F>(mut residual: F, opts: &SearchOptions) -> RcResult<f64>
where
    F: FnMut(f64) -> RcResult<f64>,
{
    let mut x = opts.initial;
    let mut step = opts.initial_step;
    let mut bracketed = false;
    let mut last_residual = f64::NAN;

    for _ in 0..opts.max_iterations {
        let r = residual(x)?;
        last_residual = r;

        if r.abs() <= opts.tolerance {
            return Ok(x);
        }

        if r < 0.0 {
            x = (x + step).min(opts.upper_bound);
            if !bracketed {
                step *= GROWTH;
            }
        } else {
            bracketed = true;
            step *= 0.5;
            x -= step;
        }
    }

    Err(RcError::non_convergence(
        opts.solver,
        opts.max_iterations,
        last_residual,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(max_iterations: usize) -> SearchOptions {
        SearchOptions {
            solver: "test",
            initial: 0.5,
            initial_step: 0.5,
            tolerance: 1e-9,
            upper_bound: 100.0,
            max_iterations,
        }
    }

    #[test]
    fn test_finds_root_of_quadratic() {
        // x² - 4 crosses zero at x = 2
        let x = solve_monotone(|x| Ok(x * x - 4.0), &options(200)).unwrap();
        assert!((x - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_finds_root_far_from_seed() {
        let x = solve_monotone(|x| Ok(x - 73.25), &options(200)).unwrap();
        assert!((x - 73.25).abs() < 1e-6);
    }

    #[test]
    fn test_iteration_bound_raises_non_convergence() {
        let err = solve_monotone(|x| Ok(x - 73.25), &options(3)).unwrap_err();
        assert_eq!(err.error_code(), "NON_CONVERGENCE");
    }

    #[test]
    fn test_residual_error_propagates() {
        let err = solve_monotone(
            |_| Err(RcError::invalid_geometry("bad polygon")),
            &options(10),
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_respects_upper_bound() {
        // Root above the upper bound can never satisfy the tolerance
        let mut opts = options(50);
        opts.upper_bound = 10.0;
        let err = solve_monotone(|x| Ok(x - 73.25), &opts).unwrap_err();
        assert_eq!(err.error_code(), "NON_CONVERGENCE");
    }
}
