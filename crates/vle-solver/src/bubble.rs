//! Bubble-point temperature solver.
//!
//! Solves `x P_light(T) + (1 - x) P_heavy(T) - P = 0` for `T` at fixed `x` and `P`.
//! The residual is strictly increasing in `T` and for an ideal mixture its root always
//! lies between the two pure-component boiling points, so those bound every Newton step.

use crate::error::{SolverError, SolverResult};
use crate::newton::{NewtonConfig, newton_solve_bracketed};
use vle_core::units::{Temperature, celsius};
use vle_fluids::{AntoineModel, BinaryComposition, BinarySystem, VaporPressureModel};

/// Starting temperature used by the n-hexane/n-heptane reference calculation [°C].
pub const DEFAULT_INITIAL_GUESS_C: f64 = 60.0;

/// Where the Newton iteration starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InitialGuess {
    /// A fixed temperature [°C], clamped into the boiling-point bracket.
    Fixed(f64),
    /// Linear interpolation between the pure boiling points in `x`.
    PureBoilingPoints,
}

impl Default for InitialGuess {
    fn default() -> Self {
        Self::Fixed(DEFAULT_INITIAL_GUESS_C)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BubbleOptions {
    pub newton: NewtonConfig,
    pub initial_guess: InitialGuess,
}

/// One converged point on the T-x-y diagram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquilibriumPoint {
    /// Liquid mole fraction of the light component.
    pub x: f64,
    /// Bubble-point temperature [°C].
    pub t_c: f64,
    /// Vapor mole fraction of the light component.
    pub y: f64,
    /// Light-component saturation pressure at `t_c` [mmHg].
    pub p_light_sat: f64,
    /// Heavy-component saturation pressure at `t_c` [mmHg].
    pub p_heavy_sat: f64,
    /// System pressure [mmHg].
    pub pressure_mmhg: f64,
}

impl EquilibriumPoint {
    pub fn x_heavy(&self) -> f64 {
        1.0 - self.x
    }

    pub fn y_heavy(&self) -> f64 {
        1.0 - self.y
    }

    pub fn temperature(&self) -> Temperature {
        celsius(self.t_c)
    }

    /// `K = y/x = Psat/P` for the light component.
    pub fn k_light(&self) -> f64 {
        self.p_light_sat / self.pressure_mmhg
    }

    pub fn k_heavy(&self) -> f64 {
        self.p_heavy_sat / self.pressure_mmhg
    }

    /// Ideal relative volatility of light to heavy. Infinite when the heavy component is
    /// below its singular temperature.
    pub fn relative_volatility(&self) -> f64 {
        self.p_light_sat / self.p_heavy_sat
    }
}

/// Converged point plus solver diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct BubblePointSolution {
    pub point: EquilibriumPoint,
    pub iterations: usize,
    /// Residual [mmHg] at the returned temperature.
    pub residual: f64,
}

/// Stateless bubble-point solver for one binary system.
///
/// Construction computes the pure-component boiling points once; every solve after that
/// is a pure function of `x`.
#[derive(Debug, Clone)]
pub struct BubbleTemperatureSolver<M: VaporPressureModel = AntoineModel> {
    system: BinarySystem,
    model: M,
    options: BubbleOptions,
    t_light_boil: f64,
    t_heavy_boil: f64,
}

impl BubbleTemperatureSolver<AntoineModel> {
    /// Antoine correlation with default options.
    pub fn antoine(system: BinarySystem) -> SolverResult<Self> {
        Self::new(system, AntoineModel, BubbleOptions::default())
    }
}

impl<M: VaporPressureModel> BubbleTemperatureSolver<M> {
    pub fn new(system: BinarySystem, model: M, options: BubbleOptions) -> SolverResult<Self> {
        if options.newton.max_iterations == 0 {
            return Err(SolverError::InvalidInput {
                what: "max_iterations must be at least 1".to_string(),
            });
        }
        if !(options.newton.abs_tol.is_finite() && options.newton.abs_tol > 0.0) {
            return Err(SolverError::InvalidInput {
                what: format!("tolerance must be positive, got {}", options.newton.abs_tol),
            });
        }
        if let InitialGuess::Fixed(t0) = options.initial_guess
            && !t0.is_finite()
        {
            return Err(SolverError::InvalidInput {
                what: format!("initial guess must be finite, got {t0}"),
            });
        }

        let (t_light_boil, t_heavy_boil) = system.pure_boiling_points(&model)?;
        tracing::debug!(
            light = system.light().name(),
            heavy = system.heavy().name(),
            pressure_mmhg = system.pressure_mmhg(),
            t_light_boil,
            t_heavy_boil,
            "pure-component boiling points"
        );

        Ok(Self {
            system,
            model,
            options,
            t_light_boil,
            t_heavy_boil,
        })
    }

    pub fn system(&self) -> &BinarySystem {
        &self.system
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn options(&self) -> &BubbleOptions {
        &self.options
    }

    /// Pure-component boiling points `(light, heavy)` [°C] at the system pressure.
    pub fn pure_boiling_points(&self) -> (f64, f64) {
        (self.t_light_boil, self.t_heavy_boil)
    }

    /// Raoult's-law residual [mmHg] at `(x, t_c)`.
    pub fn residual(&self, x: f64, t_c: f64) -> SolverResult<f64> {
        Ok(self.system.bubble_residual(&self.model, x, t_c)?)
    }

    /// Bubble-point temperature and vapor composition for liquid mole fraction `x`.
    pub fn solve(&self, x: f64) -> SolverResult<BubblePointSolution> {
        self.solve_from(x, None)
    }

    /// As [`solve`](Self::solve), overriding the configured initial guess with `t0_c`.
    pub fn solve_from(&self, x: f64, t0_c: Option<f64>) -> SolverResult<BubblePointSolution> {
        let x = BinaryComposition::new(x)?.light();
        let bracket = (
            self.t_light_boil.min(self.t_heavy_boil),
            self.t_light_boil.max(self.t_heavy_boil),
        );
        let t0 = t0_c.unwrap_or_else(|| self.initial_guess(x));
        if t0 < bracket.0 || t0 > bracket.1 {
            tracing::debug!(
                t0,
                lo = bracket.0,
                hi = bracket.1,
                "initial guess clamped into bracket"
            );
        }

        let result = newton_solve_bracketed(
            t0,
            bracket,
            |t| Ok(self.system.bubble_residual_and_slope(&self.model, x, t)?),
            &self.options.newton,
        )?;

        let point = self.point_at(x, result.x)?;
        tracing::debug!(
            x,
            t_c = point.t_c,
            y = point.y,
            iterations = result.iterations,
            "bubble point solved"
        );
        Ok(BubblePointSolution {
            point,
            iterations: result.iterations,
            residual: result.residual,
        })
    }

    fn initial_guess(&self, x: f64) -> f64 {
        match self.options.initial_guess {
            InitialGuess::Fixed(t0) => t0,
            InitialGuess::PureBoilingPoints => {
                x * self.t_light_boil + (1.0 - x) * self.t_heavy_boil
            }
        }
    }

    fn point_at(&self, x: f64, t_c: f64) -> SolverResult<EquilibriumPoint> {
        let p = self.system.pressure_mmhg();
        let (p_light_sat, p_heavy_sat) = self.system.saturation_pressures(&self.model, t_c)?;
        // Residual noise can push y a hair past 1 at the pure-light end
        let y = (x * p_light_sat / p).clamp(0.0, 1.0);
        Ok(EquilibriumPoint {
            x,
            t_c,
            y,
            p_light_sat,
            p_heavy_sat,
            pressure_mmhg: p,
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn vapor_richer_in_light_component(x in 0.0_f64..=1.0) {
            let s = BubbleTemperatureSolver::antoine(BinarySystem::hexane_heptane()).unwrap();
            let p = s.solve(x).unwrap().point;
            prop_assert!((0.0..=1.0).contains(&p.y));
            prop_assert!(p.p_light_sat > p.p_heavy_sat);
            prop_assert!(p.y >= p.x);
            let (t_light, t_heavy) = s.pure_boiling_points();
            prop_assert!(p.t_c >= t_light - 1e-9 && p.t_c <= t_heavy + 1e-9);
        }
    }
}
