//! Bubble-point solver for ideal binary mixtures.
//!
//! For each liquid composition `x` this crate finds the temperature at which Raoult's-law
//! partial pressures add up to the system pressure, then derives the vapor composition.
//! A composition sweep repeats that solve over an ascending grid of `x` values.

pub mod bubble;
pub mod error;
pub mod newton;
pub mod sweep;

pub use bubble::{
    BubbleOptions, BubblePointSolution, BubbleTemperatureSolver, DEFAULT_INITIAL_GUESS_C,
    EquilibriumPoint, InitialGuess,
};
pub use error::{SolverError, SolverResult};
pub use newton::{NewtonConfig, NewtonResult};
pub use sweep::{
    CompositionSweepDriver, FailurePolicy, SweepError, SweepFailure, SweepOptions, SweepResult,
};
