//! Liquid-composition grid generation.
//!
//! The sweep always spans the full composition range [0, 1] in evenly spaced, ascending
//! steps. Plotting code draws lines through the points in order, so ordering matters.

use crate::error::{FluidError, FluidResult};
use std::fmt;

/// 21 points, i.e. steps of 0.05.
pub const DEFAULT_GRID_POINTS: usize = 21;

/// Evenly spaced mole fractions from 0 to 1 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositionGrid {
    num_points: usize,
}

impl CompositionGrid {
    pub fn new(num_points: usize) -> FluidResult<Self> {
        if num_points < 2 {
            return Err(FluidError::invalid(format!(
                "composition grid must have at least 2 points, got {num_points}"
            )));
        }
        Ok(Self { num_points })
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    pub fn step(&self) -> f64 {
        1.0 / (self.num_points - 1) as f64
    }

    /// Generate all points in ascending order.
    pub fn points(&self) -> Vec<f64> {
        let n = self.num_points;
        let mut points: Vec<f64> = (0..n).map(|i| i as f64 / (n - 1) as f64).collect();

        // Ensure exact endpoints
        points[0] = 0.0;
        points[n - 1] = 1.0;
        points
    }
}

impl Default for CompositionGrid {
    fn default() -> Self {
        Self {
            num_points: DEFAULT_GRID_POINTS,
        }
    }
}

impl fmt::Display for CompositionGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x from 0 to 1 ({} points, step {:.4})",
            self.num_points,
            self.step()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_matches_reference() {
        let points = CompositionGrid::default().points();
        assert_eq!(points.len(), 21);
        assert_eq!(points[0], 0.0);
        assert!((points[1] - 0.05).abs() < 1e-12);
        assert!((points[10] - 0.5).abs() < 1e-12);
        assert_eq!(points[20], 1.0);
    }

    #[test]
    fn points_are_ascending() {
        let points = CompositionGrid::new(37).unwrap().points();
        assert!(points.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn step_follows_point_count() {
        assert!((CompositionGrid::default().step() - 0.05).abs() < 1e-15);
        assert_eq!(CompositionGrid::new(5).unwrap().step(), 0.25);
        assert_eq!(CompositionGrid::new(2).unwrap().step(), 1.0);
    }

    #[test]
    fn reject_invalid_point_count() {
        assert!(CompositionGrid::new(0).is_err());
        assert!(CompositionGrid::new(1).is_err());
    }

    #[test]
    fn display() {
        let text = CompositionGrid::default().to_string();
        assert!(text.contains("21 points"));
    }
}
