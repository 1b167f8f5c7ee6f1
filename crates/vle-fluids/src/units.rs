//! Unit-aware parsing of pressure and temperature text.
//!
//! Values typed on the command line or in configuration files may carry a unit tag
//! (`"1 atm"`, `"101.325 kPa"`, `"140F"`). They are converted to SI first and then to
//! the correlation units (mmHg, °C) the rest of the crate works in.

use std::fmt;
use vle_core::units::{constants::ATM_PA, k, pa, to_celsius, to_mmhg};

/// Dimension/quantity family for a numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Temperature (canonical: Kelvin, bare numbers are °C)
    Temperature,
    /// Absolute pressure (canonical: Pa, bare numbers are mmHg)
    Pressure,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "Temperature"),
            Self::Pressure => write!(f, "Absolute Pressure"),
        }
    }
}

/// Error in unit parsing or conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum UnitError {
    /// Input text did not parse to a number + optional unit
    ParseError(String),
    /// Unit not recognized for this quantity
    UnknownUnit { unit: String, quantity: String },
    /// Unit not allowed for this quantity (plain "psi" requires "psia")
    AmbiguousUnit { unit: String, reason: String },
    /// Value out of physical range (e.g., negative absolute temperature)
    OutOfRange { value: f64, reason: String },
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParseError(msg) => write!(f, "Parse error: {}", msg),
            Self::UnknownUnit { unit, quantity } => {
                write!(f, "Unknown unit '{}' for {}", unit, quantity)
            }
            Self::AmbiguousUnit { unit, reason } => {
                write!(f, "Ambiguous unit '{}': {}", unit, reason)
            }
            Self::OutOfRange { value, reason } => {
                write!(f, "Value {} out of range: {}", value, reason)
            }
        }
    }
}

impl std::error::Error for UnitError {}

/// Parse a quantity value from user input text into canonical SI (K or Pa).
///
/// - `raw_text`: User input (e.g., "60 C", "1 atm", "760")
/// - `quantity`: Dimension/quantity family for validation
pub fn parse_quantity(raw_text: &str, quantity: Quantity) -> Result<f64, UnitError> {
    let trimmed = raw_text.trim();

    match quantity {
        Quantity::Temperature => parse_temperature(trimmed),
        Quantity::Pressure => parse_pressure(trimmed),
    }
}

/// Parse a pressure and return it in mmHg.
pub fn parse_pressure_mmhg(raw_text: &str) -> Result<f64, UnitError> {
    let pa_value = parse_quantity(raw_text, Quantity::Pressure)?;
    Ok(to_mmhg(pa(pa_value)))
}

/// Parse a temperature and return it in °C.
pub fn parse_temperature_c(raw_text: &str) -> Result<f64, UnitError> {
    let kelvin = parse_quantity(raw_text, Quantity::Temperature)?;
    Ok(to_celsius(k(kelvin)))
}

/// Parse temperature in various units, return Kelvin.
fn parse_temperature(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let kelvin = match unit.to_lowercase().as_str() {
        "k" | "kelvin" => value,
        // Default to Celsius, the Antoine table unit
        "" | "c" | "°c" | "degc" | "celsius" => value + 273.15,
        "f" | "°f" | "degf" | "fahrenheit" => (value + 459.67) * 5.0 / 9.0,
        "r" | "°r" | "rankine" => value * 5.0 / 9.0,
        _ => {
            return Err(UnitError::UnknownUnit {
                unit: unit.to_string(),
                quantity: Quantity::Temperature.to_string(),
            });
        }
    };

    if kelvin <= 0.0 {
        return Err(UnitError::OutOfRange {
            value: kelvin,
            reason: "Absolute temperature must be > 0 K".to_string(),
        });
    }

    Ok(kelvin)
}

/// Parse pressure in various units, return Pa (absolute).
fn parse_pressure(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let pa_value = match unit.to_lowercase().as_str() {
        "pa" | "pascal" => value,
        "kpa" => value * 1e3,
        "mpa" => value * 1e6,
        "bar" => value * 1e5,
        "mbar" | "millibar" => value * 100.0,
        "atm" => value * ATM_PA,
        // Default to mmHg, the Antoine table unit
        "" | "mmhg" | "mm hg" | "torr" => value * ATM_PA / 760.0,
        "psia" => value * 6_894.757,
        "psi" => {
            return Err(UnitError::AmbiguousUnit {
                unit: "psi".to_string(),
                reason: "Use 'psia'; gauge pressures are not accepted".to_string(),
            });
        }
        _ => {
            return Err(UnitError::UnknownUnit {
                unit: unit.to_string(),
                quantity: Quantity::Pressure.to_string(),
            });
        }
    };

    if pa_value <= 0.0 {
        return Err(UnitError::OutOfRange {
            value: pa_value,
            reason: "Absolute pressure must be positive".to_string(),
        });
    }

    Ok(pa_value)
}

/// Split a value+unit string into (numeric_value, unit_string).
///
/// Examples:
/// - "140F" -> (140.0, "F")
/// - "760 mmHg" -> (760.0, "mmHg")
/// - "60" -> (60.0, "")
fn split_value_and_unit(input: &str) -> Result<(f64, String), UnitError> {
    let trimmed = input.trim();

    // Find where the numeric part ends
    let split_idx = trimmed
        .find(|c: char| !c.is_ascii_digit() && !matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        .unwrap_or(trimmed.len());

    let (num_part, unit_part) = trimmed.split_at(split_idx);
    let num_part = num_part.trim();
    let unit_part = unit_part.trim();

    let value: f64 = num_part.parse().map_err(|_| {
        UnitError::ParseError(format!("Could not parse numeric value from '{}'", input))
    })?;

    if !value.is_finite() {
        return Err(UnitError::ParseError(format!(
            "Non-finite value in '{}'",
            input
        )));
    }

    Ok((value, unit_part.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_pressure_is_mmhg() {
        let p = parse_pressure_mmhg("760").unwrap();
        assert!((p - 760.0).abs() < 1e-2);
    }

    #[test]
    fn pressure_units_agree_on_one_atmosphere() {
        for text in [
            "760 mmHg",
            "760 torr",
            "1 atm",
            "101.325 kPa",
            "1.01325 bar",
            "101325 Pa",
            "14.696 psia",
        ] {
            let p = parse_pressure_mmhg(text).unwrap();
            assert!((p - 760.0).abs() < 0.1, "{text} -> {p}");
        }
    }

    #[test]
    fn reject_plain_psi() {
        assert!(matches!(
            parse_quantity("14.7 psi", Quantity::Pressure),
            Err(UnitError::AmbiguousUnit { unit, .. }) if unit == "psi"
        ));
    }

    #[test]
    fn reject_non_positive_pressure() {
        assert!(matches!(
            parse_pressure_mmhg("0 atm"),
            Err(UnitError::OutOfRange { .. })
        ));
        assert!(parse_pressure_mmhg("-5").is_err());
    }

    #[test]
    fn bare_temperature_is_celsius() {
        let t = parse_temperature_c("60").unwrap();
        assert!((t - 60.0).abs() < 1e-9);
    }

    #[test]
    fn temperature_units() {
        assert!((parse_temperature_c("333.15 K").unwrap() - 60.0).abs() < 1e-9);
        assert!((parse_temperature_c("140F").unwrap() - 60.0).abs() < 1e-9);
        assert!((parse_temperature_c("60 °C").unwrap() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn reject_below_absolute_zero() {
        assert!(parse_temperature_c("-300 C").is_err());
        assert!(parse_temperature_c("-1 K").is_err());
    }

    #[test]
    fn reject_garbage() {
        assert!(matches!(
            parse_quantity("abc", Quantity::Pressure),
            Err(UnitError::ParseError(_))
        ));
        assert!(matches!(
            parse_quantity("5 furlongs", Quantity::Pressure),
            Err(UnitError::UnknownUnit { .. })
        ));
    }
}
