//! Fluid property errors.

use thiserror::Error;
use vle_core::CoreError;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur during vapor-pressure evaluation and system setup.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Rejected input (composition outside [0,1], non-positive pressure, bad constants).
    #[error("Invalid input: {what}")]
    InvalidInput { what: String },

    /// The correlation is undefined at this point (`C + T = 0` and its neighbours).
    #[error("Numeric domain error for {what} at {value}")]
    NumericDomain { what: &'static str, value: f64 },

    /// Non-physical result (non-positive or non-finite pressure).
    #[error("Non-physical value for {what}: {value}")]
    NonPhysical { what: &'static str, value: f64 },

    /// Component lookup failed.
    #[error("Unknown component: {name}")]
    UnknownComponent { name: String },
}

impl FluidError {
    pub(crate) fn invalid(what: impl Into<String>) -> Self {
        Self::InvalidInput { what: what.into() }
    }
}

impl From<CoreError> for FluidError {
    fn from(err: CoreError) -> Self {
        FluidError::InvalidInput {
            what: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FluidError::NumericDomain {
            what: "C + T",
            value: -224.0,
        };
        assert!(err.to_string().contains("C + T"));

        let err = FluidError::UnknownComponent {
            name: "toluene".into(),
        };
        assert!(err.to_string().contains("toluene"));
    }

    #[test]
    fn core_error_becomes_invalid_input() {
        let core = CoreError::InvalidArg { what: "pressure" };
        let fluid: FluidError = core.into();
        assert!(matches!(fluid, FluidError::InvalidInput { what } if what.contains("pressure")));
    }
}
