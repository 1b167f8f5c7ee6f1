//! Shared application service layer for vleflow.
//!
//! Turns a configuration into a solver, runs the composition sweep and shapes the results
//! for the diagram renderer and the CSV/JSON exporters. The CLI only parses arguments and
//! prints.

pub mod diagram;
pub mod error;
pub mod export;
pub mod project_service;
pub mod run_service;
pub mod system_compile;

// Re-export key types for convenience
pub use diagram::{TxyDiagram, XyDiagram};
pub use error::{AppError, AppResult};
pub use export::{ExportFormat, FailureRecord, PointRecord, SweepExport, to_csv, to_json};
pub use project_service::{
    ComponentSummary, config_to_yaml, explicit_default_config, list_components, load_config,
    save_config,
};
pub use run_service::{RunOverrides, RunResponse, RunTimingSummary, run_sweep, solve_point};
pub use system_compile::{
    build_component, build_grid, build_solver, build_system, bubble_options, sweep_options,
};
