//! Error types for the vle-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and gives the CLI one error to report.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Project(String),

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Fluid error: {0}")]
    Fluid(String),

    #[error("Solver error: {0}")]
    Solver(String),

    #[error("Sweep error: {0}")]
    Sweep(String),

    #[error("Export error: {0}")]
    Export(String),
}

/// Result type for vle-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<vle_project::ProjectError> for AppError {
    fn from(err: vle_project::ProjectError) -> Self {
        AppError::Project(err.to_string())
    }
}

impl From<vle_project::ValidationError> for AppError {
    fn from(err: vle_project::ValidationError) -> Self {
        AppError::Project(err.to_string())
    }
}

impl From<vle_fluids::FluidError> for AppError {
    fn from(err: vle_fluids::FluidError) -> Self {
        AppError::Fluid(err.to_string())
    }
}

impl From<vle_fluids::UnitError> for AppError {
    fn from(err: vle_fluids::UnitError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<vle_solver::SolverError> for AppError {
    fn from(err: vle_solver::SolverError) -> Self {
        AppError::Solver(err.to_string())
    }
}

impl From<vle_solver::SweepError> for AppError {
    fn from(err: vle_solver::SweepError) -> Self {
        AppError::Sweep(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Export(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Export(err.to_string())
    }
}
