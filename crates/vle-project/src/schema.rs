//! Configuration file schema.
//!
//! Every section has a default, so an empty document describes the n-hexane/n-heptane
//! system at one atmosphere with a 21-point sweep.

use serde::{Deserialize, Serialize};
use vle_core::constants::ATM_MMHG;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VleConfig {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub system: SystemDef,
    #[serde(default)]
    pub sweep: SweepDef,
    #[serde(default)]
    pub solver: SolverDef,
}

impl Default for VleConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            name: default_name(),
            system: SystemDef::default(),
            sweep: SweepDef::default(),
            solver: SolverDef::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemDef {
    #[serde(default = "default_light")]
    pub light: ComponentDef,
    #[serde(default = "default_heavy")]
    pub heavy: ComponentDef,
    #[serde(default = "default_pressure_mmhg")]
    pub pressure_mmhg: f64,
}

impl Default for SystemDef {
    fn default() -> Self {
        Self {
            light: default_light(),
            heavy: default_heavy(),
            pressure_mmhg: default_pressure_mmhg(),
        }
    }
}

/// A component by name. Without `antoine`, the name is looked up in the built-in catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComponentDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub antoine: Option<AntoineDef>,
}

impl ComponentDef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            antoine: None,
        }
    }
}

/// Antoine constants for `log10(P[mmHg]) = A - B / (C + T[°C])`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AntoineDef {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SweepDef {
    #[serde(default = "default_points")]
    pub points: usize,
    #[serde(default)]
    pub failure_policy: FailurePolicyDef,
    #[serde(default)]
    pub warm_start: bool,
    #[serde(default)]
    pub parallel: bool,
}

impl Default for SweepDef {
    fn default() -> Self {
        Self {
            points: default_points(),
            failure_policy: FailurePolicyDef::default(),
            warm_start: false,
            parallel: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum FailurePolicyDef {
    #[default]
    FailFast,
    SkipAndReport,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolverDef {
    #[serde(default)]
    pub initial_guess: InitialGuessDef,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Absolute tolerance on the bubble-point residual [mmHg].
    #[serde(default = "default_tolerance_mmhg")]
    pub tolerance_mmhg: f64,
}

impl Default for SolverDef {
    fn default() -> Self {
        Self {
            initial_guess: InitialGuessDef::default(),
            max_iterations: default_max_iterations(),
            tolerance_mmhg: default_tolerance_mmhg(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum InitialGuessDef {
    Fixed { temperature_c: f64 },
    PureBoilingPoints,
}

impl Default for InitialGuessDef {
    fn default() -> Self {
        Self::Fixed {
            temperature_c: 60.0,
        }
    }
}

fn default_version() -> u32 {
    crate::LATEST_VERSION
}

fn default_name() -> String {
    "n-hexane / n-heptane".to_string()
}

fn default_light() -> ComponentDef {
    ComponentDef::named("n-hexane")
}

fn default_heavy() -> ComponentDef {
    ComponentDef::named("n-heptane")
}

fn default_pressure_mmhg() -> f64 {
    ATM_MMHG
}

fn default_points() -> usize {
    21
}

fn default_max_iterations() -> usize {
    50
}

fn default_tolerance_mmhg() -> f64 {
    1e-8
}
