//! Build runtime objects from a configuration.

use vle_fluids::{AntoineModel, BinarySystem, Component, CompositionGrid, find_component};
use vle_project::schema::{
    ComponentDef, FailurePolicyDef, InitialGuessDef, SolverDef, SweepDef, SystemDef, VleConfig,
};
use vle_solver::{
    BubbleOptions, BubbleTemperatureSolver, FailurePolicy, InitialGuess, NewtonConfig,
    SweepOptions,
};

use crate::error::AppResult;

/// Explicit constants win; otherwise the name must be in the built-in catalog.
pub fn build_component(def: &ComponentDef) -> AppResult<Component> {
    let component = match def.antoine {
        Some(antoine) => Component::with_antoine(&def.name, antoine.a, antoine.b, antoine.c)?,
        None => find_component(&def.name)?,
    };
    Ok(component)
}

pub fn build_system(def: &SystemDef) -> AppResult<BinarySystem> {
    let light = build_component(&def.light)?;
    let heavy = build_component(&def.heavy)?;
    Ok(BinarySystem::new(light, heavy, def.pressure_mmhg)?)
}

pub fn bubble_options(def: &SolverDef) -> BubbleOptions {
    let initial_guess = match def.initial_guess {
        InitialGuessDef::Fixed { temperature_c } => InitialGuess::Fixed(temperature_c),
        InitialGuessDef::PureBoilingPoints => InitialGuess::PureBoilingPoints,
    };
    BubbleOptions {
        newton: NewtonConfig {
            max_iterations: def.max_iterations,
            abs_tol: def.tolerance_mmhg,
        },
        initial_guess,
    }
}

pub fn sweep_options(def: &SweepDef) -> SweepOptions {
    SweepOptions {
        policy: match def.failure_policy {
            FailurePolicyDef::FailFast => FailurePolicy::FailFast,
            FailurePolicyDef::SkipAndReport => FailurePolicy::SkipAndReport,
        },
        warm_start: def.warm_start,
        parallel: def.parallel,
    }
}

pub fn build_grid(def: &SweepDef) -> AppResult<CompositionGrid> {
    Ok(CompositionGrid::new(def.points)?)
}

pub fn build_solver(config: &VleConfig) -> AppResult<BubbleTemperatureSolver> {
    let system = build_system(&config.system)?;
    let solver =
        BubbleTemperatureSolver::new(system, AntoineModel, bubble_options(&config.solver))?;
    tracing::debug!(
        light = solver.system().light().name(),
        heavy = solver.system().heavy().name(),
        pressure_mmhg = solver.system().pressure_mmhg(),
        "built bubble-point solver"
    );
    Ok(solver)
}
