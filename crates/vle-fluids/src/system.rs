//! The immutable binary system a solver runs against.

use crate::antoine::VaporPressureModel;
use crate::catalog::{n_heptane, n_hexane};
use crate::component::Component;
use crate::error::{FluidError, FluidResult};
use vle_core::ensure_positive;
use vle_core::units::{Pressure, constants::ATM_MMHG, mmhg};

/// Two components at one fixed total pressure.
///
/// "Light" is the component whose mole fraction `x`/`y` every result refers to. It is
/// normally the more volatile one, but nothing here enforces that.
#[derive(Debug, Clone, PartialEq)]
pub struct BinarySystem {
    light: Component,
    heavy: Component,
    pressure_mmhg: f64,
}

impl BinarySystem {
    pub fn new(light: Component, heavy: Component, pressure_mmhg: f64) -> FluidResult<Self> {
        let pressure_mmhg = ensure_positive(pressure_mmhg, "total pressure").map_err(|_| {
            FluidError::invalid(format!("total pressure must be > 0, got {pressure_mmhg}"))
        })?;
        if light.name() == heavy.name() {
            return Err(FluidError::invalid(format!(
                "binary system needs two distinct components, got '{}' twice",
                light.name()
            )));
        }
        Ok(Self {
            light,
            heavy,
            pressure_mmhg,
        })
    }

    /// n-hexane + n-heptane at 760 mmHg.
    pub fn hexane_heptane() -> Self {
        Self {
            light: n_hexane(),
            heavy: n_heptane(),
            pressure_mmhg: ATM_MMHG,
        }
    }

    pub fn light(&self) -> &Component {
        &self.light
    }

    pub fn heavy(&self) -> &Component {
        &self.heavy
    }

    pub fn pressure_mmhg(&self) -> f64 {
        self.pressure_mmhg
    }

    pub fn pressure(&self) -> Pressure {
        mmhg(self.pressure_mmhg)
    }

    /// Same components, different pressure.
    pub fn with_pressure(&self, pressure_mmhg: f64) -> FluidResult<Self> {
        Self::new(self.light.clone(), self.heavy.clone(), pressure_mmhg)
    }

    /// Pure-component boiling points `(light, heavy)` [°C] at the system pressure.
    pub fn pure_boiling_points<M: VaporPressureModel + ?Sized>(
        &self,
        model: &M,
    ) -> FluidResult<(f64, f64)> {
        let t_light = model.boiling_temperature(&self.light, self.pressure_mmhg)?;
        let t_heavy = model.boiling_temperature(&self.heavy, self.pressure_mmhg)?;
        Ok((t_light, t_heavy))
    }

    /// Raoult's-law residual `x P_light(T) + (1-x) P_heavy(T) - P` [mmHg].
    ///
    /// A component with zero mole fraction is not evaluated. At or below a component's
    /// singular temperature `-C` its vapor pressure counts as zero, so the residual is
    /// defined across the whole pure-boiling-point bracket.
    pub fn bubble_residual<M: VaporPressureModel + ?Sized>(
        &self,
        model: &M,
        x_light: f64,
        t_c: f64,
    ) -> FluidResult<f64> {
        Ok(self.bubble_residual_and_slope(model, x_light, t_c)?.0)
    }

    /// [`bubble_residual`](Self::bubble_residual) and its temperature derivative [mmHg/K].
    pub fn bubble_residual_and_slope<M: VaporPressureModel + ?Sized>(
        &self,
        model: &M,
        x_light: f64,
        t_c: f64,
    ) -> FluidResult<(f64, f64)> {
        let (p_light, dp_light) = weighted_vapor_pressure(model, &self.light, x_light, t_c)?;
        let (p_heavy, dp_heavy) =
            weighted_vapor_pressure(model, &self.heavy, 1.0 - x_light, t_c)?;
        Ok((p_light + p_heavy - self.pressure_mmhg, dp_light + dp_heavy))
    }

    /// Saturation pressures `(light, heavy)` [mmHg] at `t_c`, zero below `-C`.
    pub fn saturation_pressures<M: VaporPressureModel + ?Sized>(
        &self,
        model: &M,
        t_c: f64,
    ) -> FluidResult<(f64, f64)> {
        Ok((
            vapor_pressure(model, &self.light, t_c)?,
            vapor_pressure(model, &self.heavy, t_c)?,
        ))
    }
}

fn vapor_pressure<M: VaporPressureModel + ?Sized>(
    model: &M,
    component: &Component,
    t_c: f64,
) -> FluidResult<f64> {
    if t_c <= component.antoine().singular_temperature() {
        return Ok(0.0);
    }
    match model.saturation_pressure(component, t_c) {
        // Underflow just above -C
        Err(FluidError::NonPhysical { value, .. }) if value == 0.0 => Ok(0.0),
        other => other,
    }
}

fn weighted_vapor_pressure<M: VaporPressureModel + ?Sized>(
    model: &M,
    component: &Component,
    weight: f64,
    t_c: f64,
) -> FluidResult<(f64, f64)> {
    if weight == 0.0 {
        return Ok((0.0, 0.0));
    }
    let p = vapor_pressure(model, component, t_c)?;
    if p == 0.0 {
        return Ok((0.0, 0.0));
    }
    let dp = model.d_saturation_pressure_dt(component, t_c)?;
    Ok((weight * p, weight * dp))
}

impl Default for BinarySystem {
    fn default() -> Self {
        Self::hexane_heptane()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::antoine::AntoineModel;

    #[test]
    fn default_is_hexane_heptane_at_one_atm() {
        let system = BinarySystem::default();
        assert_eq!(system.light().name(), "n-hexane");
        assert_eq!(system.heavy().name(), "n-heptane");
        assert_eq!(system.pressure_mmhg(), 760.0);
    }

    #[test]
    fn reject_non_positive_pressure() {
        assert!(BinarySystem::new(n_hexane(), n_heptane(), 0.0).is_err());
        assert!(BinarySystem::new(n_hexane(), n_heptane(), -760.0).is_err());
        assert!(BinarySystem::new(n_hexane(), n_heptane(), f64::NAN).is_err());
    }

    #[test]
    fn reject_identical_components() {
        let err = BinarySystem::new(n_hexane(), n_hexane(), 760.0).unwrap_err();
        assert!(matches!(err, FluidError::InvalidInput { .. }));
    }

    #[test]
    fn pure_boiling_points_bracket_the_pair() {
        let system = BinarySystem::default();
        let (t_light, t_heavy) = system.pure_boiling_points(&AntoineModel).unwrap();
        assert!(t_light < t_heavy);
        assert!(t_light > 68.0 && t_light < 70.0);
        assert!(t_heavy > 97.0 && t_heavy < 99.0);
    }

    #[test]
    fn residual_vanishes_at_pure_boiling_point() {
        let system = BinarySystem::default();
        let (t_light, t_heavy) = system.pure_boiling_points(&AntoineModel).unwrap();
        let r1 = system.bubble_residual(&AntoineModel, 1.0, t_light).unwrap();
        let r0 = system.bubble_residual(&AntoineModel, 0.0, t_heavy).unwrap();
        assert!(r1.abs() < 1e-8);
        assert!(r0.abs() < 1e-8);
    }

    #[test]
    fn residual_is_defined_below_a_singular_temperature() {
        let hydrogen = Component::with_antoine("hydrogen", 5.824, 67.51, 275.7).unwrap();
        let system = BinarySystem::new(hydrogen, n_heptane(), 760.0).unwrap();
        // Below heptane's -216 C
        let t = -250.0;
        let (p_h2, p_heptane) = system.saturation_pressures(&AntoineModel, t).unwrap();
        assert!(p_h2 > 0.0);
        assert_eq!(p_heptane, 0.0);

        let (r, slope) = system
            .bubble_residual_and_slope(&AntoineModel, 0.0, t)
            .unwrap();
        assert_eq!(r, -760.0);
        assert_eq!(slope, 0.0);

        let (_, p_near_singular) = system
            .saturation_pressures(&AntoineModel, -215.999)
            .unwrap();
        assert_eq!(p_near_singular, 0.0);
    }

    #[test]
    fn zero_weight_component_is_not_evaluated() {
        let system = BinarySystem::default();
        let t_below_heptane_range = -220.0;
        let hexane_only = system
            .bubble_residual(&AntoineModel, 1.0, t_below_heptane_range)
            .unwrap();
        assert!(hexane_only < 0.0);
    }

    #[test]
    fn with_pressure_keeps_components() {
        let low = BinarySystem::default().with_pressure(400.0).unwrap();
        assert_eq!(low.light().name(), "n-hexane");
        assert_eq!(low.pressure_mmhg(), 400.0);
    }
}
