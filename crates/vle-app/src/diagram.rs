//! Plot series for the T-x-y and x-y diagrams.
//!
//! Nothing here draws. The series are plain `(f64, f64)` pairs in sweep order, ready to
//! hand to whatever renders them.

use serde::Serialize;
use vle_fluids::BinarySystem;
use vle_solver::SweepResult;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TxyDiagram {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Bubble-point curve, `(x, T)`.
    pub liquid_line: Vec<(f64, f64)>,
    /// Dew-point curve, `(y, T)`.
    pub vapor_line: Vec<(f64, f64)>,
}

impl TxyDiagram {
    pub fn from_sweep(system: &BinarySystem, result: &SweepResult) -> Self {
        Self {
            title: format!("T-x-y Diagram at {} mmHg", system.pressure_mmhg()),
            x_label: format!("Mole fraction of {}", system.light().name()),
            y_label: "Temperature (°C)".to_string(),
            liquid_line: result.liquid_line(),
            vapor_line: result.vapor_line(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct XyDiagram {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub curve: Vec<(f64, f64)>,
    /// The `y = x` reference line.
    pub diagonal: [(f64, f64); 2],
}

impl XyDiagram {
    pub fn from_sweep(system: &BinarySystem, result: &SweepResult) -> Self {
        let light = system.light().name();
        Self {
            title: format!("x-y Diagram at {} mmHg", system.pressure_mmhg()),
            x_label: format!("Liquid mole fraction of {light}"),
            y_label: format!("Vapor mole fraction of {light}"),
            curve: result.xy_curve(),
            diagonal: [(0.0, 0.0), (1.0, 1.0)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vle_fluids::CompositionGrid;
    use vle_solver::{BubbleTemperatureSolver, CompositionSweepDriver};

    fn sweep() -> (BinarySystem, SweepResult) {
        let system = BinarySystem::hexane_heptane();
        let solver = BubbleTemperatureSolver::antoine(system.clone()).unwrap();
        let result = CompositionSweepDriver::new(&solver, CompositionGrid::default())
            .run()
            .unwrap();
        (system, result)
    }

    #[test]
    fn txy_lines_share_temperatures() {
        let (system, result) = sweep();
        let d = TxyDiagram::from_sweep(&system, &result);
        assert_eq!(d.title, "T-x-y Diagram at 760 mmHg");
        assert_eq!(d.liquid_line.len(), 21);
        assert_eq!(d.vapor_line.len(), 21);
        for (l, v) in d.liquid_line.iter().zip(&d.vapor_line) {
            assert_eq!(l.1, v.1);
            assert!(v.0 >= l.0);
        }
    }

    #[test]
    fn xy_curve_sits_above_diagonal() {
        let (system, result) = sweep();
        let d = XyDiagram::from_sweep(&system, &result);
        assert_eq!(d.diagonal, [(0.0, 0.0), (1.0, 1.0)]);
        assert!(d.curve.iter().all(|(x, y)| y >= x));
        assert_eq!(d.curve.first().copied(), Some((0.0, 0.0)));
    }

    #[test]
    fn serializes_for_renderer() {
        let (system, result) = sweep();
        let json = serde_json::to_value(XyDiagram::from_sweep(&system, &result)).unwrap();
        assert_eq!(json["diagonal"][1][0], 1.0);
        assert_eq!(json["curve"].as_array().map(Vec::len), Some(21));
    }
}
