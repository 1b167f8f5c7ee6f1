//! Configuration loading, saving and catalog introspection.

use std::path::Path;
use vle_fluids::builtin_catalog;
use vle_project::schema::{AntoineDef, VleConfig};

use crate::error::{AppError, AppResult};

/// Summary of a catalog component for listing.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ComponentSummary {
    pub id: String,
    pub name: String,
    pub aliases: Vec<String>,
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Load a configuration file, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> AppResult<VleConfig> {
    match path {
        Some(path) => {
            let config = vle_project::load_config(path)?;
            tracing::info!(path = %path.display(), name = %config.name, "loaded configuration");
            Ok(config)
        }
        None => Ok(VleConfig::default()),
    }
}

/// Save a configuration as YAML, or JSON for a `.json` path.
pub fn save_config(path: &Path, config: &VleConfig) -> AppResult<()> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if is_json {
        vle_project::save_json(path, config)?;
    } else {
        vle_project::save_yaml(path, config)?;
    }
    Ok(())
}

pub fn config_to_yaml(config: &VleConfig) -> AppResult<String> {
    vle_project::validate_config(config)?;
    Ok(serde_yaml::to_string(config)?)
}

/// Defaults with the catalog constants written out, for a starter file users can edit.
pub fn explicit_default_config() -> AppResult<VleConfig> {
    let mut config = VleConfig::default();
    for def in [&mut config.system.light, &mut config.system.heavy] {
        let entry = builtin_catalog()
            .iter()
            .find(|entry| entry.matches_query(&def.name))
            .ok_or_else(|| AppError::InvalidInput(format!("{} is not in the catalog", def.name)))?;
        def.antoine = Some(AntoineDef {
            a: entry.antoine.a,
            b: entry.antoine.b,
            c: entry.antoine.c,
        });
    }
    Ok(config)
}

pub fn list_components() -> Vec<ComponentSummary> {
    builtin_catalog()
        .iter()
        .map(|entry| ComponentSummary {
            id: entry.canonical_id.to_string(),
            name: entry.display_name.to_string(),
            aliases: entry.aliases.iter().map(|a| a.to_string()).collect(),
            a: entry.antoine.a,
            b: entry.antoine.b,
            c: entry.antoine.c,
        })
        .collect()
}
