//! Sweep and single-point execution.

use std::time::Instant;
use vle_project::schema::{FailurePolicyDef, InitialGuessDef, VleConfig};
use vle_solver::{BubblePointSolution, CompositionSweepDriver, SweepResult};

use crate::error::AppResult;
use crate::system_compile;

/// Command-line values that replace fields of a loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct RunOverrides {
    pub pressure_mmhg: Option<f64>,
    pub points: Option<usize>,
    pub initial_guess_c: Option<f64>,
    pub policy: Option<FailurePolicyDef>,
    pub warm_start: Option<bool>,
    pub parallel: Option<bool>,
}

impl RunOverrides {
    /// Apply to `config` and re-validate the result.
    pub fn apply(&self, mut config: VleConfig) -> AppResult<VleConfig> {
        if let Some(p) = self.pressure_mmhg {
            config.system.pressure_mmhg = p;
        }
        if let Some(n) = self.points {
            config.sweep.points = n;
        }
        if let Some(t) = self.initial_guess_c {
            config.solver.initial_guess = InitialGuessDef::Fixed { temperature_c: t };
        }
        if let Some(policy) = self.policy {
            config.sweep.failure_policy = policy;
        }
        if let Some(warm_start) = self.warm_start {
            config.sweep.warm_start = warm_start;
        }
        if let Some(parallel) = self.parallel {
            config.sweep.parallel = parallel;
        }
        vle_project::validate_config(&config)?;
        Ok(config)
    }
}

/// Concise timing summary for a sweep.
#[derive(Debug, Clone, Default)]
pub struct RunTimingSummary {
    pub build_time_s: f64,
    pub solve_time_s: f64,
    pub total_time_s: f64,
    pub total_iterations: usize,
}

pub struct RunResponse {
    pub config: VleConfig,
    pub result: SweepResult,
    pub timing: RunTimingSummary,
}

pub fn run_sweep(config: &VleConfig) -> AppResult<RunResponse> {
    let total_start = Instant::now();

    let build_start = Instant::now();
    let solver = system_compile::build_solver(config)?;
    let grid = system_compile::build_grid(&config.sweep)?;
    let options = system_compile::sweep_options(&config.sweep);
    let build_time_s = build_start.elapsed().as_secs_f64();

    let solve_start = Instant::now();
    let result = CompositionSweepDriver::new(&solver, grid)
        .with_options(options)
        .run()?;
    let solve_time_s = solve_start.elapsed().as_secs_f64();

    let timing = RunTimingSummary {
        build_time_s,
        solve_time_s,
        total_time_s: total_start.elapsed().as_secs_f64(),
        total_iterations: result.iterations().iter().sum(),
    };
    tracing::info!(
        points = result.num_successful(),
        failed = result.num_failed(),
        iterations = timing.total_iterations,
        total_time_s = timing.total_time_s,
        "sweep complete"
    );

    Ok(RunResponse {
        config: config.clone(),
        result,
        timing,
    })
}

/// Solve the bubble point for a single liquid composition.
pub fn solve_point(config: &VleConfig, x: f64) -> AppResult<BubblePointSolution> {
    let solver = system_compile::build_solver(config)?;
    Ok(solver.solve(x)?)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn bubble_point_tracks_pressure(p in 200.0f64..1500.0, x in 0.0f64..=1.0) {
            let overrides = RunOverrides {
                pressure_mmhg: Some(p),
                ..RunOverrides::default()
            };
            let config = overrides.apply(VleConfig::default()).unwrap();
            let sol = solve_point(&config, x).unwrap();
            let solver = system_compile::build_solver(&config).unwrap();
            let (lo, hi) = solver.pure_boiling_points();
            prop_assert!(sol.point.t_c >= lo.min(hi) - 1e-9);
            prop_assert!(sol.point.t_c <= lo.max(hi) + 1e-9);
            prop_assert!(sol.point.y >= x - 1e-12);
        }
    }
}
