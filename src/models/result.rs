//! Simulation output models.
//!
//! A `SimulationResult` is produced fresh by every call and never shared
//! between calls. A `ComparisonResult` groups one result per algorithm for
//! the same input and ranks them by total head movement.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{AlgorithmKind, Direction, Track};

/// What the arm did at a visited track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepKind {
    /// Serviced a queued request.
    Request,
    /// Touched a disk boundary (SCAN family sweep end or circular jump).
    Boundary,
}

/// One head movement in service order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStep {
    /// Head position before the move.
    pub from: Track,
    /// Track visited.
    pub track: Track,
    /// Absolute distance `|track - from|`.
    pub movement: u64,
    /// Request or boundary waypoint.
    pub kind: StepKind,
}

impl ServiceStep {
    /// Whether this step serviced a request.
    #[inline]
    pub fn is_request(&self) -> bool {
        self.kind == StepKind::Request
    }

    /// Whether the arm moved toward higher tracks. `None` for zero-length moves.
    pub fn direction(&self) -> Option<Direction> {
        match self.track.cmp(&self.from) {
            std::cmp::Ordering::Greater => Some(Direction::Up),
            std::cmp::Ordering::Less => Some(Direction::Down),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Outcome of running one algorithm over one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Algorithm that produced this result.
    pub algorithm: AlgorithmKind,
    /// Initial sweep direction used.
    pub direction: Direction,
    /// Head position before servicing began.
    pub initial_position: Track,
    /// Visited tracks in service order, waypoints included.
    pub steps: Vec<ServiceStep>,
    /// Sum of all step movements.
    pub total_movement: u64,
    /// Number of queued requests serviced (waypoints excluded).
    pub requests_serviced: usize,
}

impl SimulationResult {
    /// All visited tracks, waypoints included.
    pub fn sequence(&self) -> Vec<Track> {
        self.steps.iter().map(|s| s.track).collect()
    }

    /// Serviced request tracks only, in service order.
    pub fn service_order(&self) -> Vec<Track> {
        self.steps
            .iter()
            .filter(|s| s.is_request())
            .map(|s| s.track)
            .collect()
    }

    /// `(from, to)` pairs for every head movement.
    pub fn seek_operations(&self) -> Vec<(Track, Track)> {
        self.steps.iter().map(|s| (s.from, s.track)).collect()
    }

    /// Mean movement per visited track (waypoints included).
    pub fn average_seek(&self) -> f64 {
        if self.steps.is_empty() {
            0.0
        } else {
            self.total_movement as f64 / self.steps.len() as f64
        }
    }

    /// `average_seek` rounded to two decimals, as shown in reports.
    pub fn average_seek_rounded(&self) -> f64 {
        (self.average_seek() * 100.0).round() / 100.0
    }

    /// Number of boundary waypoints.
    pub fn boundary_visits(&self) -> usize {
        self.steps.iter().filter(|s| !s.is_request()).count()
    }

    /// Head position after the last step.
    pub fn final_position(&self) -> Track {
        self.steps
            .last()
            .map(|s| s.track)
            .unwrap_or(self.initial_position)
    }
}

/// Results of every compared algorithm over the same input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// One result per algorithm.
    pub results: BTreeMap<AlgorithmKind, SimulationResult>,
    /// Algorithms by total movement ascending; ties in canonical order.
    pub ranking: Vec<AlgorithmKind>,
}

impl ComparisonResult {
    /// Builds a comparison and derives the ranking.
    pub fn from_results(results: BTreeMap<AlgorithmKind, SimulationResult>) -> Self {
        let mut ranking: Vec<AlgorithmKind> = results.keys().copied().collect();
        // Keys are already in canonical order and the sort is stable.
        ranking.sort_by_key(|kind| results[kind].total_movement);
        Self { results, ranking }
    }

    /// Result for one algorithm.
    pub fn get(&self, kind: AlgorithmKind) -> Option<&SimulationResult> {
        self.results.get(&kind)
    }

    /// The algorithm with the least total movement.
    pub fn best(&self) -> Option<&SimulationResult> {
        self.ranking.first().and_then(|k| self.results.get(k))
    }

    /// The algorithm with the most total movement.
    pub fn worst(&self) -> Option<&SimulationResult> {
        self.ranking.last().and_then(|k| self.results.get(k))
    }

    /// 1-based rank of an algorithm.
    pub fn rank_of(&self, kind: AlgorithmKind) -> Option<usize> {
        self.ranking.iter().position(|k| *k == kind).map(|i| i + 1)
    }

    /// Results in ranking order.
    pub fn ranked(&self) -> impl Iterator<Item = &SimulationResult> {
        self.ranking.iter().filter_map(|k| self.results.get(k))
    }

    /// Number of compared algorithms.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether no algorithm was compared.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(from: Track, track: Track, kind: StepKind) -> ServiceStep {
        ServiceStep {
            from,
            track,
            movement: from.abs_diff(track),
            kind,
        }
    }

    fn result(algorithm: AlgorithmKind, total: u64) -> SimulationResult {
        SimulationResult {
            algorithm,
            direction: Direction::Up,
            initial_position: 0,
            steps: vec![step(0, total, StepKind::Request)],
            total_movement: total,
            requests_serviced: 1,
        }
    }

    #[test]
    fn test_sequence_and_service_order() {
        let res = SimulationResult {
            algorithm: AlgorithmKind::Scan,
            direction: Direction::Up,
            initial_position: 5,
            steps: vec![
                step(5, 8, StepKind::Request),
                step(8, 9, StepKind::Boundary),
                step(9, 2, StepKind::Request),
            ],
            total_movement: 11,
            requests_serviced: 2,
        };
        assert_eq!(res.sequence(), vec![8, 9, 2]);
        assert_eq!(res.service_order(), vec![8, 2]);
        assert_eq!(res.seek_operations(), vec![(5, 8), (8, 9), (9, 2)]);
        assert_eq!(res.boundary_visits(), 1);
        assert_eq!(res.final_position(), 2);
        assert!((res.average_seek() - 11.0 / 3.0).abs() < 1e-10);
        assert!((res.average_seek_rounded() - 3.67).abs() < 1e-10);
    }

    #[test]
    fn test_boundary_visits_with_mismatched_count() {
        let json = r#"{
            "algorithm": "SCAN",
            "direction": "up",
            "initial_position": 5,
            "steps": [
                {"from": 5, "track": 9, "movement": 4, "kind": "Boundary"}
            ],
            "total_movement": 4,
            "requests_serviced": 3
        }"#;
        let res: SimulationResult = serde_json::from_str(json).unwrap();
        assert_eq!(res.boundary_visits(), 1);
    }

    #[test]
    fn test_step_direction() {
        assert_eq!(step(3, 7, StepKind::Request).direction(), Some(Direction::Up));
        assert_eq!(step(7, 3, StepKind::Request).direction(), Some(Direction::Down));
        assert_eq!(step(3, 3, StepKind::Request).direction(), None);
    }

    #[test]
    fn test_ranking_ties_use_canonical_order() {
        let mut results = BTreeMap::new();
        results.insert(AlgorithmKind::Look, result(AlgorithmKind::Look, 10));
        results.insert(AlgorithmKind::Fcfs, result(AlgorithmKind::Fcfs, 30));
        results.insert(AlgorithmKind::Sstf, result(AlgorithmKind::Sstf, 10));
        results.insert(AlgorithmKind::CScan, result(AlgorithmKind::CScan, 20));

        let cmp = ComparisonResult::from_results(results);
        assert_eq!(
            cmp.ranking,
            vec![
                AlgorithmKind::Sstf,
                AlgorithmKind::Look,
                AlgorithmKind::CScan,
                AlgorithmKind::Fcfs
            ]
        );
        assert_eq!(cmp.best().unwrap().algorithm, AlgorithmKind::Sstf);
        assert_eq!(cmp.worst().unwrap().algorithm, AlgorithmKind::Fcfs);
        assert_eq!(cmp.rank_of(AlgorithmKind::CScan), Some(3));
        assert_eq!(cmp.rank_of(AlgorithmKind::Scan), None);
        assert_eq!(cmp.ranked().count(), 4);
    }

    #[test]
    fn test_empty_comparison() {
        let cmp = ComparisonResult::from_results(BTreeMap::new());
        assert!(cmp.is_empty());
        assert!(cmp.best().is_none());
    }
}
