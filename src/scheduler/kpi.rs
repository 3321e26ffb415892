//! Seek performance metrics (KPIs).
//!
//! Summarizes a simulation result into the figures shown next to the
//! service-order chart.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Movement | Sum of all step movements |
//! | Avg Seek / Request | Total movement / requests serviced |
//! | Max Seek | Largest single step |
//! | Boundary Visits | Waypoints at track 0 or `disk_size - 1` |
//! | Reversals | Direction changes between non-zero moves |
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11.2

use crate::models::{AlgorithmKind, ComparisonResult, Direction, SimulationResult};

/// Seek performance indicators for one simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct SeekKpi {
    /// Algorithm measured.
    pub algorithm: AlgorithmKind,
    /// Total head movement (tracks).
    pub total_movement: u64,
    /// Mean movement per serviced request (tracks).
    pub avg_seek_per_request: f64,
    /// Largest single movement (tracks).
    pub max_seek: u64,
    /// Number of serviced requests.
    pub requests_serviced: usize,
    /// Number of boundary waypoints.
    pub boundary_visits: usize,
    /// Number of times the arm changed direction.
    pub reversals: usize,
}

impl SeekKpi {
    /// Computes KPIs from a simulation result.
    pub fn calculate(result: &SimulationResult) -> Self {
        let max_seek = result.steps.iter().map(|s| s.movement).max().unwrap_or(0);

        let mut reversals = 0;
        let mut heading: Option<Direction> = None;
        for dir in result.steps.iter().filter_map(|s| s.direction()) {
            if heading.is_some_and(|h| h != dir) {
                reversals += 1;
            }
            heading = Some(dir);
        }

        let avg_seek_per_request = if result.requests_serviced == 0 {
            0.0
        } else {
            result.total_movement as f64 / result.requests_serviced as f64
        };

        Self {
            algorithm: result.algorithm,
            total_movement: result.total_movement,
            avg_seek_per_request,
            max_seek,
            requests_serviced: result.requests_serviced,
            boundary_visits: result.boundary_visits(),
            reversals,
        }
    }

    /// KPIs for every result of a comparison, in ranking order.
    pub fn for_comparison(comparison: &ComparisonResult) -> Vec<Self> {
        comparison.ranked().map(Self::calculate).collect()
    }

    /// Fraction of movement saved relative to a baseline (e.g. FCFS).
    ///
    /// Positive when this result moves less. `0.0` for a zero baseline.
    pub fn improvement_over(&self, baseline: &SeekKpi) -> f64 {
        if baseline.total_movement == 0 {
            return 0.0;
        }
        (baseline.total_movement as f64 - self.total_movement as f64)
            / baseline.total_movement as f64
    }
}
