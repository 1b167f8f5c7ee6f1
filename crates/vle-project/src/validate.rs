//! Configuration validation.

use crate::schema::{AntoineDef, ComponentDef, InitialGuessDef, VleConfig};
use vle_core::ensure_positive;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Duplicate component: {name} is both light and heavy")]
    DuplicateComponent { name: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_config(config: &VleConfig) -> Result<(), ValidationError> {
    if config.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: config.version,
        });
    }

    let system = &config.system;
    validate_component(&system.light, "system.light")?;
    validate_component(&system.heavy, "system.heavy")?;
    if system.light.name.trim() == system.heavy.name.trim() {
        return Err(ValidationError::DuplicateComponent {
            name: system.light.name.clone(),
        });
    }
    positive(system.pressure_mmhg, "system.pressure_mmhg")?;

    if config.sweep.points < 2 {
        return Err(ValidationError::InvalidValue {
            field: "sweep.points".to_string(),
            value: config.sweep.points.to_string(),
            reason: "a sweep needs at least the two pure ends".to_string(),
        });
    }

    let solver = &config.solver;
    if solver.max_iterations == 0 {
        return Err(ValidationError::InvalidValue {
            field: "solver.max_iterations".to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    positive(solver.tolerance_mmhg, "solver.tolerance_mmhg")?;
    if let InitialGuessDef::Fixed { temperature_c } = solver.initial_guess
        && !temperature_c.is_finite()
    {
        return Err(ValidationError::InvalidValue {
            field: "solver.initial_guess.temperature_c".to_string(),
            value: temperature_c.to_string(),
            reason: "must be finite".to_string(),
        });
    }

    Ok(())
}

fn validate_component(component: &ComponentDef, field: &str) -> Result<(), ValidationError> {
    if component.name.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: format!("{field}.name"),
            value: String::new(),
            reason: "component name must not be empty".to_string(),
        });
    }
    if let Some(AntoineDef { a, b, c }) = component.antoine {
        for (name, v) in [("a", a), ("c", c)] {
            if !v.is_finite() {
                return Err(ValidationError::InvalidValue {
                    field: format!("{field}.antoine.{name}"),
                    value: v.to_string(),
                    reason: "must be finite".to_string(),
                });
            }
        }
        positive(b, &format!("{field}.antoine.b"))?;
    }
    Ok(())
}

fn positive(value: f64, field: &str) -> Result<(), ValidationError> {
    ensure_positive(value, "value")
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be finite and positive".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        validate_config(&VleConfig::default()).unwrap();
    }

    #[test]
    fn rejects_non_positive_pressure() {
        let mut config = VleConfig::default();
        config.system.pressure_mmhg = 0.0;
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidValue { field, .. } if field == "system.pressure_mmhg"
        ));
    }

    #[test]
    fn rejects_single_point_sweep() {
        let mut config = VleConfig::default();
        config.sweep.points = 1;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn rejects_same_component_twice() {
        let mut config = VleConfig::default();
        config.system.heavy = ComponentDef::named("n-hexane");
        assert!(matches!(
            validate_config(&config),
            Err(ValidationError::DuplicateComponent { .. })
        ));
    }

    #[test]
    fn rejects_bad_antoine_constants() {
        let mut config = VleConfig::default();
        config.system.light.antoine = Some(AntoineDef {
            a: f64::NAN,
            b: 1171.53,
            c: 224.0,
        });
        assert!(validate_config(&config).is_err());

        config.system.light.antoine = Some(AntoineDef {
            a: 6.8763,
            b: -1.0,
            c: 224.0,
        });
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn rejects_future_version() {
        let config = VleConfig {
            version: crate::LATEST_VERSION + 1,
            ..VleConfig::default()
        };
        assert!(matches!(
            validate_config(&config),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn rejects_zero_iteration_budget_and_bad_guess() {
        let mut config = VleConfig::default();
        config.solver.max_iterations = 0;
        assert!(validate_config(&config).is_err());

        let mut config = VleConfig::default();
        config.solver.initial_guess = InitialGuessDef::Fixed {
            temperature_c: f64::INFINITY,
        };
        assert!(validate_config(&config).is_err());
    }
}
