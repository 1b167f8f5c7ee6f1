//! Binary composition (mole fraction of the light component).

use crate::error::FluidResult;
use vle_core::ensure_mole_fraction;

/// Composition of a two-component phase, stored as the light-component mole fraction.
///
/// The heavy fraction is always `1 - light`, so the pair sums to 1 by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryComposition {
    light: f64,
}

impl BinaryComposition {
    /// Validates `0 <= light <= 1`.
    pub fn new(light: f64) -> FluidResult<Self> {
        let light = ensure_mole_fraction(light, "light-component mole fraction")?;
        Ok(Self { light })
    }

    pub fn light(&self) -> f64 {
        self.light
    }

    pub fn heavy(&self) -> f64 {
        1.0 - self.light
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FluidError;

    #[test]
    fn fractions_sum_to_one() {
        let comp = BinaryComposition::new(0.35).unwrap();
        assert!((comp.light() + comp.heavy() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn pure_endpoints() {
        assert_eq!(BinaryComposition::new(0.0).unwrap().heavy(), 1.0);
        assert_eq!(BinaryComposition::new(1.0).unwrap().heavy(), 0.0);
    }

    #[test]
    fn reject_out_of_range() {
        assert!(matches!(
            BinaryComposition::new(1.2),
            Err(FluidError::InvalidInput { .. })
        ));
        assert!(BinaryComposition::new(-0.01).is_err());
        assert!(BinaryComposition::new(f64::NAN).is_err());
    }
}
