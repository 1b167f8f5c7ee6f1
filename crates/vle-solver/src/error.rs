//! Error types for solver operations.

use thiserror::Error;
use vle_core::CoreError;
use vle_fluids::FluidError;

/// Errors that can occur while solving a single bubble point.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Rejected before solving: bad composition, pressure or constants.
    #[error("Invalid input: {what}")]
    InvalidInput { what: String },

    /// Iteration budget exhausted without meeting the tolerance.
    #[error(
        "Convergence failed after {iterations} iterations: {what} \
         (last T = {temperature_c} C, residual = {residual:e} mmHg)"
    )]
    NonConvergence {
        what: String,
        iterations: usize,
        temperature_c: f64,
        residual: f64,
    },

    /// The correlation was evaluated outside its domain (`C + T = 0`).
    #[error("Numeric domain error: {what} at {value}")]
    NumericDomain { what: &'static str, value: f64 },

    #[error("Fluid error: {0}")]
    Fluid(FluidError),
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<FluidError> for SolverError {
    fn from(err: FluidError) -> Self {
        match err {
            FluidError::InvalidInput { what } => SolverError::InvalidInput { what },
            FluidError::NumericDomain { what, value } => SolverError::NumericDomain { what, value },
            other => SolverError::Fluid(other),
        }
    }
}

impl From<CoreError> for SolverError {
    fn from(err: CoreError) -> Self {
        SolverError::InvalidInput {
            what: err.to_string(),
        }
    }
}
