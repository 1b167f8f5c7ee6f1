//! Vapor pressure model trait and the Antoine correlation.

use crate::component::Component;
use crate::error::{FluidError, FluidResult};
use vle_core::units::{Pressure, Temperature, celsius, mmhg, to_celsius, to_mmhg};
use vle_core::{ensure_finite, ensure_positive};

/// Trait for pure-component saturation pressure models.
///
/// Temperatures are in °C and pressures in mmHg, the units Antoine tables are fitted in.
/// Implementations must be pure: same inputs, same output, no internal state.
pub trait VaporPressureModel: Send + Sync {
    /// Get the model name (for debugging/logging).
    fn name(&self) -> &str;

    /// Saturation pressure [mmHg] of `component` at `t_c` [°C].
    fn saturation_pressure(&self, component: &Component, t_c: f64) -> FluidResult<f64>;

    /// Temperature [°C] at which `component` boils under `p_mmhg`.
    fn boiling_temperature(&self, component: &Component, p_mmhg: f64) -> FluidResult<f64>;

    /// `dPsat/dT` [mmHg/K]. Defaults to a central difference.
    fn d_saturation_pressure_dt(&self, component: &Component, t_c: f64) -> FluidResult<f64> {
        let h = 1e-4 * t_c.abs().max(1.0);
        let p_hi = self.saturation_pressure(component, t_c + h)?;
        let p_lo = self.saturation_pressure(component, t_c - h)?;
        Ok((p_hi - p_lo) / (2.0 * h))
    }

    /// uom-typed wrapper around [`VaporPressureModel::saturation_pressure`].
    fn saturation_pressure_at(
        &self,
        component: &Component,
        t: Temperature,
    ) -> FluidResult<Pressure> {
        let p = self.saturation_pressure(component, to_celsius(t))?;
        Ok(mmhg(p))
    }

    /// uom-typed wrapper around [`VaporPressureModel::boiling_temperature`].
    fn boiling_temperature_at(
        &self,
        component: &Component,
        p: Pressure,
    ) -> FluidResult<Temperature> {
        let t = self.boiling_temperature(component, to_mmhg(p))?;
        Ok(celsius(t))
    }
}

/// `P = 10^(A - B / (C + T))`.
///
/// Valid only above the singular temperature `T = -C`. At or below it the correlation
/// reports [`FluidError::NumericDomain`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AntoineModel;

impl VaporPressureModel for AntoineModel {
    fn name(&self) -> &str {
        "Antoine"
    }

    fn saturation_pressure(&self, component: &Component, t_c: f64) -> FluidResult<f64> {
        let t_c = ensure_finite(t_c, "temperature")?;
        let k = component.antoine();
        let denom = k.c + t_c;
        if denom <= 0.0 {
            return Err(FluidError::NumericDomain {
                what: "C + T",
                value: t_c,
            });
        }

        let p = 10f64.powf(k.a - k.b / denom);
        if !p.is_finite() || p <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "saturation pressure",
                value: p,
            });
        }
        Ok(p)
    }

    fn boiling_temperature(&self, component: &Component, p_mmhg: f64) -> FluidResult<f64> {
        let p_mmhg = ensure_positive(p_mmhg, "pressure")?;
        let k = component.antoine();
        let gap = k.a - p_mmhg.log10();
        if gap <= 0.0 {
            return Err(FluidError::NumericDomain {
                what: "A - log10(P)",
                value: p_mmhg,
            });
        }
        Ok(k.b / gap - k.c)
    }

    fn d_saturation_pressure_dt(&self, component: &Component, t_c: f64) -> FluidResult<f64> {
        let p = self.saturation_pressure(component, t_c)?;
        let k = component.antoine();
        let denom = k.c + t_c;
        Ok(p * std::f64::consts::LN_10 * k.b / (denom * denom))
    }
}
