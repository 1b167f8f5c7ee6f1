//! vle-fluids: pure-component vapor pressure and binary-system definitions for vleflow.
//!
//! Provides:
//! - Component definitions carrying Antoine constants
//! - The `VaporPressureModel` trait and its Antoine implementation
//! - A catalog of built-in components (n-hexane, n-heptane)
//! - `BinarySystem`, the immutable configuration a solver runs against
//! - Binary composition handling and the liquid-composition grid
//! - Unit-aware parsing of pressure and temperature text
//!
//! # Architecture
//!
//! The rest of vleflow only sees the `VaporPressureModel` trait, so the correlation can be
//! swapped without touching the solver. Antoine constants are in the units they were
//! fitted in (mmHg and °C); uom-typed wrappers exist at the API edge.
//!
//! # Example
//!
//! ```
//! use vle_fluids::{AntoineModel, BinarySystem, VaporPressureModel};
//!
//! let system = BinarySystem::hexane_heptane();
//! let p = AntoineModel
//!     .saturation_pressure(system.light(), 69.2)
//!     .unwrap();
//! assert!(p > 750.0 && p < 770.0);
//! ```

pub mod antoine;
pub mod catalog;
pub mod component;
pub mod composition;
pub mod error;
pub mod grid;
pub mod system;
pub mod units;

// Re-exports for ergonomics
pub use antoine::{AntoineModel, VaporPressureModel};
pub use catalog::{CatalogEntry, builtin_catalog, find_component, n_heptane, n_hexane};
pub use component::{AntoineCoefficients, Component};
pub use composition::BinaryComposition;
pub use error::{FluidError, FluidResult};
pub use grid::{CompositionGrid, DEFAULT_GRID_POINTS};
pub use system::BinarySystem;
pub use units::{Quantity, UnitError, parse_pressure_mmhg, parse_quantity, parse_temperature_c};
