use crate::CoreError;

/// Floating point type used throughout system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Check that `v` is a finite mole fraction in the closed interval [0, 1].
pub fn ensure_mole_fraction(v: Real, what: &'static str) -> Result<Real, CoreError> {
    let v = ensure_finite(v, what)?;
    if (0.0..=1.0).contains(&v) {
        Ok(v)
    } else {
        Err(CoreError::OutOfRange {
            what,
            value: v,
            min: 0.0,
            max: 1.0,
        })
    }
}

/// Check that `v` is finite and strictly positive.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, CoreError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(CoreError::InvalidArg { what })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn mole_fraction_bounds_are_inclusive() {
        assert_eq!(ensure_mole_fraction(0.0, "x").unwrap(), 0.0);
        assert_eq!(ensure_mole_fraction(1.0, "x").unwrap(), 1.0);
        assert!(matches!(
            ensure_mole_fraction(1.0 + 1e-9, "x"),
            Err(CoreError::OutOfRange { .. })
        ));
        assert!(matches!(
            ensure_mole_fraction(-0.1, "x"),
            Err(CoreError::OutOfRange { .. })
        ));
        assert!(matches!(
            ensure_mole_fraction(Real::INFINITY, "x"),
            Err(CoreError::NonFinite { .. })
        ));
    }

    #[test]
    fn positive_rejects_zero() {
        assert!(ensure_positive(760.0, "p").is_ok());
        assert!(ensure_positive(0.0, "p").is_err());
        assert!(ensure_positive(-1.0, "p").is_err());
        assert!(matches!(
            ensure_positive(Real::NAN, "p"),
            Err(CoreError::NonFinite { .. })
        ));
    }
}
