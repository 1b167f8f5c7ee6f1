//! Composition sweep: solve the bubble point at every grid composition.
//!
//! Results come back in grid order (ascending `x`). Plotting code draws lines through
//! them in that order.

use crate::bubble::{BubblePointSolution, BubbleTemperatureSolver, EquilibriumPoint};
use crate::error::SolverError;
use rayon::prelude::*;
use thiserror::Error;
use vle_fluids::{CompositionGrid, VaporPressureModel};

/// What to do when a single grid point fails to solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the sweep at the first failing point.
    #[default]
    FailFast,
    /// Leave the point out of the results and record it in [`SweepResult::failures`].
    SkipAndReport,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepOptions {
    pub policy: FailurePolicy,
    /// Seed each solve with the previous converged temperature.
    pub warm_start: bool,
    /// Solve points on the rayon pool. Ignores `warm_start`.
    pub parallel: bool,
}

/// A grid point that did not produce an equilibrium point.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepFailure {
    pub index: usize,
    pub x: f64,
    pub error: SolverError,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SweepError {
    #[error("Bubble point failed at grid index {index} (x = {x}): {source}")]
    PointFailed {
        index: usize,
        x: f64,
        #[source]
        source: SolverError,
    },
}

/// Ordered output of a composition sweep.
#[derive(Debug, Clone)]
pub struct SweepResult {
    grid: CompositionGrid,
    points: Vec<EquilibriumPoint>,
    iterations: Vec<usize>,
    failures: Vec<SweepFailure>,
}

impl SweepResult {
    pub fn grid(&self) -> &CompositionGrid {
        &self.grid
    }

    /// Converged points, ascending in `x`.
    pub fn points(&self) -> &[EquilibriumPoint] {
        &self.points
    }

    /// Newton iterations per converged point, parallel to [`points`](Self::points).
    pub fn iterations(&self) -> &[usize] {
        &self.iterations
    }

    pub fn failures(&self) -> &[SweepFailure] {
        &self.failures
    }

    pub fn num_successful(&self) -> usize {
        self.points.len()
    }

    pub fn num_failed(&self) -> usize {
        self.failures.len()
    }

    /// `(x, T)` pairs: the bubble-point (liquid) line of the T-x-y diagram.
    pub fn liquid_line(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.x, p.t_c)).collect()
    }

    /// `(y, T)` pairs: the dew-point (vapor) line of the T-x-y diagram.
    pub fn vapor_line(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.y, p.t_c)).collect()
    }

    /// `(x, y)` pairs for the x-y diagram.
    pub fn xy_curve(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.x, p.y)).collect()
    }

    pub fn temperatures(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.t_c).collect()
    }
}

/// Drives a [`BubbleTemperatureSolver`] across a [`CompositionGrid`].
pub struct CompositionSweepDriver<'a, M: VaporPressureModel> {
    solver: &'a BubbleTemperatureSolver<M>,
    grid: CompositionGrid,
    options: SweepOptions,
}

impl<'a, M: VaporPressureModel> CompositionSweepDriver<'a, M> {
    pub fn new(solver: &'a BubbleTemperatureSolver<M>, grid: CompositionGrid) -> Self {
        Self {
            solver,
            grid,
            options: SweepOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SweepOptions) -> Self {
        self.options = options;
        self
    }

    pub fn run(&self) -> Result<SweepResult, SweepError> {
        let xs = self.grid.points();
        tracing::info!(
            light = self.solver.system().light().name(),
            heavy = self.solver.system().heavy().name(),
            pressure_mmhg = self.solver.system().pressure_mmhg(),
            points = xs.len(),
            policy = ?self.options.policy,
            parallel = self.options.parallel,
            "starting composition sweep"
        );

        let mut result = SweepResult {
            grid: self.grid,
            points: Vec::with_capacity(xs.len()),
            iterations: Vec::with_capacity(xs.len()),
            failures: Vec::new(),
        };

        if self.options.parallel {
            let solved: Vec<_> = xs.par_iter().map(|&x| self.solver.solve(x)).collect();
            for (index, (x, outcome)) in xs.iter().copied().zip(solved).enumerate() {
                self.record(&mut result, index, x, outcome)?;
            }
        } else {
            let mut previous_t: Option<f64> = None;
            for (index, x) in xs.iter().copied().enumerate() {
                let guess = if self.options.warm_start { previous_t } else { None };
                let outcome = self.solver.solve_from(x, guess);
                if let Ok(sol) = &outcome {
                    previous_t = Some(sol.point.t_c);
                }
                self.record(&mut result, index, x, outcome)?;
            }
        }

        tracing::info!(
            successful = result.num_successful(),
            failed = result.num_failed(),
            "composition sweep finished"
        );
        Ok(result)
    }

    fn record(
        &self,
        result: &mut SweepResult,
        index: usize,
        x: f64,
        outcome: Result<BubblePointSolution, SolverError>,
    ) -> Result<(), SweepError> {
        match outcome {
            Ok(sol) => {
                result.points.push(sol.point);
                result.iterations.push(sol.iterations);
                Ok(())
            }
            Err(source) => match self.options.policy {
                FailurePolicy::FailFast => Err(SweepError::PointFailed { index, x, source }),
                FailurePolicy::SkipAndReport => {
                    tracing::warn!(index, x, error = %source, "skipping grid point");
                    result.failures.push(SweepFailure {
                        index,
                        x,
                        error: source,
                    });
                    Ok(())
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bubble::BubbleOptions;
    use vle_fluids::{AntoineModel, BinarySystem, Component, FluidError, FluidResult};

    fn solver() -> BubbleTemperatureSolver {
        BubbleTemperatureSolver::antoine(BinarySystem::hexane_heptane()).unwrap()
    }

    #[test]
    fn default_sweep_has_21_ascending_points() {
        let s = solver();
        let result = CompositionSweepDriver::new(&s, CompositionGrid::default())
            .run()
            .unwrap();
        assert_eq!(result.num_successful(), 21);
        assert_eq!(result.num_failed(), 0);
        assert!(result.points().windows(2).all(|w| w[0].x < w[1].x));
        // Bubble temperature falls as the liquid gets richer in hexane
        assert!(result.points().windows(2).all(|w| w[0].t_c > w[1].t_c));
        assert_eq!(result.iterations().len(), 21);
    }

    #[test]
    fn diagram_series_share_temperatures() {
        let s = solver();
        let result = CompositionSweepDriver::new(&s, CompositionGrid::new(5).unwrap())
            .run()
            .unwrap();
        let liquid = result.liquid_line();
        let vapor = result.vapor_line();
        let xy = result.xy_curve();
        assert_eq!(liquid.len(), 5);
        for i in 0..5 {
            assert_eq!(liquid[i].1, vapor[i].1);
            assert_eq!(liquid[i].0, xy[i].0);
            assert_eq!(vapor[i].0, xy[i].1);
        }
        assert_eq!(result.temperatures().len(), 5);
    }

    #[test]
    fn warm_start_and_parallel_match_plain_sweep() {
        let s = solver();
        let grid = CompositionGrid::default();
        let plain = CompositionSweepDriver::new(&s, grid).run().unwrap();
        for options in [
            SweepOptions {
                warm_start: true,
                ..SweepOptions::default()
            },
            SweepOptions {
                parallel: true,
                ..SweepOptions::default()
            },
        ] {
            let other = CompositionSweepDriver::new(&s, grid)
                .with_options(options)
                .run()
                .unwrap();
            assert_eq!(other.num_successful(), plain.num_successful());
            for (a, b) in plain.points().iter().zip(other.points()) {
                assert_eq!(a.x, b.x);
                assert!((a.t_c - b.t_c).abs() < 1e-8);
            }
        }
    }

    /// Rejects any temperature inside (80, 90) C, so mid-range compositions fail.
    struct Gapped;

    impl VaporPressureModel for Gapped {
        fn name(&self) -> &str {
            "gapped"
        }
        fn saturation_pressure(&self, c: &Component, t: f64) -> FluidResult<f64> {
            if t > 80.0 && t < 90.0 {
                return Err(FluidError::NumericDomain {
                    what: "C + T",
                    value: t,
                });
            }
            AntoineModel.saturation_pressure(c, t)
        }
        fn boiling_temperature(&self, c: &Component, p: f64) -> FluidResult<f64> {
            AntoineModel.boiling_temperature(c, p)
        }
    }

    fn gapped_solver() -> BubbleTemperatureSolver<Gapped> {
        BubbleTemperatureSolver::new(
            BinarySystem::hexane_heptane(),
            Gapped,
            BubbleOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn fail_fast_stops_at_first_failure() {
        let s = gapped_solver();
        let err = CompositionSweepDriver::new(&s, CompositionGrid::default())
            .run()
            .unwrap_err();
        // x = 0 sits on the heavy boiling point and never enters the gap; x = 0.25 boils
        // near 88.4 C and cannot converge
        let SweepError::PointFailed { index, source, .. } = err;
        assert!((1..=5).contains(&index), "index {index}");
        assert!(matches!(source, SolverError::NumericDomain { .. }));
    }

    #[test]
    fn skip_and_report_keeps_going() {
        let s = gapped_solver();
        let result = CompositionSweepDriver::new(&s, CompositionGrid::default())
            .with_options(SweepOptions {
                policy: FailurePolicy::SkipAndReport,
                ..SweepOptions::default()
            })
            .run()
            .unwrap();
        assert_eq!(result.num_successful() + result.num_failed(), 21);
        assert!(result.num_failed() > 0);
        assert!(result.points().iter().all(|p| p.t_c.is_finite() && p.y.is_finite()));
        assert!(result.points().windows(2).all(|w| w[0].x < w[1].x));
        let indices: Vec<usize> = result.failures().iter().map(|f| f.index).collect();
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
        // Bubble points at 88.4 C and 80.7 C
        assert!(indices.contains(&5) && indices.contains(&10));
        // Pure ends resolve on the bracket endpoints
        assert_eq!(result.points()[0].x, 0.0);
        assert_eq!(result.points().last().map(|p| p.x), Some(1.0));
    }
}
