//! Scalar Newton solver safeguarded by a bracket.

use crate::error::{SolverError, SolverResult};

/// Newton solver configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonConfig {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Absolute tolerance on the residual
    pub abs_tol: f64,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            abs_tol: 1e-8,
        }
    }
}

/// Newton iteration result.
#[derive(Debug, Clone, Copy)]
pub struct NewtonResult {
    /// Root estimate
    pub x: f64,
    /// Residual at `x`
    pub residual: f64,
    /// Number of function evaluations inside the loop
    pub iterations: usize,
}

/// Find a root of `f` inside `[lo, hi]`, starting from `x0`.
///
/// `f` returns the residual and its derivative. The bracket must contain a sign change
/// (or a root at an endpoint). Any Newton step that leaves the current bracket, or a
/// zero/non-finite derivative, falls back to bisection, and the bracket shrinks on every
/// iteration.
pub fn newton_solve_bracketed<F>(
    x0: f64,
    bracket: (f64, f64),
    f: F,
    config: &NewtonConfig,
) -> SolverResult<NewtonResult>
where
    F: Fn(f64) -> SolverResult<(f64, f64)>,
{
    let (mut lo, mut hi) = if bracket.0 <= bracket.1 {
        bracket
    } else {
        (bracket.1, bracket.0)
    };
    if !lo.is_finite() || !hi.is_finite() {
        return Err(SolverError::InvalidInput {
            what: format!("bracket must be finite, got [{lo}, {hi}]"),
        });
    }

    let (f_lo, _) = f(lo)?;
    if f_lo.abs() <= config.abs_tol {
        return Ok(NewtonResult {
            x: lo,
            residual: f_lo,
            iterations: 0,
        });
    }
    let (f_hi, _) = f(hi)?;
    if f_hi.abs() <= config.abs_tol {
        return Ok(NewtonResult {
            x: hi,
            residual: f_hi,
            iterations: 0,
        });
    }
    if f_lo.signum() == f_hi.signum() {
        return Err(SolverError::NonConvergence {
            what: format!("no sign change in [{lo}, {hi}]"),
            iterations: 0,
            temperature_c: lo,
            residual: f_lo,
        });
    }
    let lo_sign = f_lo.signum();

    let mut x = if x0.is_finite() {
        x0.clamp(lo, hi)
    } else {
        0.5 * (lo + hi)
    };
    let mut last_residual = f_lo;

    for iter in 1..=config.max_iterations {
        let (fx, dfx) = f(x)?;
        last_residual = fx;
        tracing::debug!(iter, x, residual = fx, "newton iteration");

        if fx.abs() <= config.abs_tol {
            return Ok(NewtonResult {
                x,
                residual: fx,
                iterations: iter,
            });
        }

        // Shrink the bracket around the sign change
        if fx.signum() == lo_sign {
            lo = x;
        } else {
            hi = x;
        }

        let newton_step = if dfx.is_finite() && dfx != 0.0 {
            Some(x - fx / dfx)
        } else {
            None
        };
        x = match newton_step {
            Some(x_new) if x_new > lo && x_new < hi => x_new,
            _ => 0.5 * (lo + hi),
        };
    }

    Err(SolverError::NonConvergence {
        what: format!("maximum iterations {} reached", config.max_iterations),
        iterations: config.max_iterations,
        temperature_c: x,
        residual: last_residual,
    })
}
