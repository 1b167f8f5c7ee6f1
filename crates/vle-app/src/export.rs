//! CSV and JSON export of sweep results.

use serde::Serialize;
use vle_fluids::BinarySystem;
use vle_solver::{EquilibriumPoint, SweepResult};

use crate::error::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// One row of exported sweep data.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PointRecord {
    pub x: f64,
    pub t_c: f64,
    pub y: f64,
    pub x_heavy: f64,
    pub y_heavy: f64,
    pub p_light_sat_mmhg: f64,
    pub p_heavy_sat_mmhg: f64,
    pub k_light: f64,
    pub k_heavy: f64,
    pub relative_volatility: f64,
}

impl From<&EquilibriumPoint> for PointRecord {
    fn from(p: &EquilibriumPoint) -> Self {
        Self {
            x: p.x,
            t_c: p.t_c,
            y: p.y,
            x_heavy: p.x_heavy(),
            y_heavy: p.y_heavy(),
            p_light_sat_mmhg: p.p_light_sat,
            p_heavy_sat_mmhg: p.p_heavy_sat,
            k_light: p.k_light(),
            k_heavy: p.k_heavy(),
            relative_volatility: p.relative_volatility(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FailureRecord {
    pub index: usize,
    pub x: f64,
    pub error: String,
}

/// Everything needed to reproduce a diagram from the exported file alone.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SweepExport {
    pub light: String,
    pub heavy: String,
    pub pressure_mmhg: f64,
    pub points: Vec<PointRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<FailureRecord>,
}

impl SweepExport {
    pub fn new(system: &BinarySystem, result: &SweepResult) -> Self {
        Self {
            light: system.light().name().to_string(),
            heavy: system.heavy().name().to_string(),
            pressure_mmhg: system.pressure_mmhg(),
            points: result.points().iter().map(PointRecord::from).collect(),
            failures: result
                .failures()
                .iter()
                .map(|f| FailureRecord {
                    index: f.index,
                    x: f.x,
                    error: f.error.to_string(),
                })
                .collect(),
        }
    }

    pub fn render(&self, format: ExportFormat) -> AppResult<String> {
        match format {
            ExportFormat::Csv => Ok(to_csv(self)),
            ExportFormat::Json => to_json(self),
        }
    }
}

const CSV_HEADER: &str = "x,t_c,y,x_heavy,y_heavy,p_light_sat_mmhg,p_heavy_sat_mmhg,\
                          k_light,k_heavy,relative_volatility\n";

/// Header line, one line per point, then a `# skipped` comment line per failed point.
pub fn to_csv(export: &SweepExport) -> String {
    let mut csv = String::from(CSV_HEADER);
    for p in &export.points {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{}\n",
            p.x,
            p.t_c,
            p.y,
            p.x_heavy,
            p.y_heavy,
            p.p_light_sat_mmhg,
            p.p_heavy_sat_mmhg,
            p.k_light,
            p.k_heavy,
            p.relative_volatility
        ));
    }
    for f in &export.failures {
        csv.push_str(&format!(
            "# skipped index={} x={}: {}\n",
            f.index,
            f.x,
            f.error.replace('\n', " ")
        ));
    }
    csv
}

pub fn to_json(export: &SweepExport) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(export)?)
}
