//! Pure-component definitions.

use crate::error::{FluidError, FluidResult};
use std::fmt;
use std::sync::Arc;

/// Antoine constants for `log10(P) = A - B / (C + T)`, fitted in mmHg and °C.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AntoineCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl AntoineCoefficients {
    /// Validate and build a coefficient set.
    ///
    /// All three constants must be finite and `B` must be positive, otherwise the
    /// correlation is not increasing in temperature.
    pub fn new(a: f64, b: f64, c: f64) -> FluidResult<Self> {
        if !(a.is_finite() && b.is_finite() && c.is_finite()) {
            return Err(FluidError::invalid(format!(
                "Antoine constants must be finite (A={a}, B={b}, C={c})"
            )));
        }
        if b <= 0.0 {
            return Err(FluidError::invalid(format!(
                "Antoine constant B must be positive, got {b}"
            )));
        }
        Ok(Self { a, b, c })
    }

    /// Temperature [°C] at which the correlation's denominator `C + T` vanishes.
    pub fn singular_temperature(&self) -> f64 {
        -self.c
    }
}

/// A named pure component. Cheap to clone; the name is shared.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    name: Arc<str>,
    antoine: AntoineCoefficients,
}

impl Component {
    pub fn new(name: impl AsRef<str>, antoine: AntoineCoefficients) -> FluidResult<Self> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(FluidError::invalid("component name must not be empty"));
        }
        Ok(Self {
            name: Arc::from(name),
            antoine,
        })
    }

    /// Shorthand for `Component::new(name, AntoineCoefficients::new(a, b, c)?)`.
    pub fn with_antoine(name: impl AsRef<str>, a: f64, b: f64, c: f64) -> FluidResult<Self> {
        Self::new(name, AntoineCoefficients::new(a, b, c)?)
    }

    pub(crate) fn from_catalog(name: &'static str, antoine: AntoineCoefficients) -> Self {
        Self {
            name: Arc::from(name),
            antoine,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn antoine(&self) -> &AntoineCoefficients {
        &self.antoine
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (A={}, B={}, C={})",
            self.name, self.antoine.a, self.antoine.b, self.antoine.c
        )
    }
}
