//! Disk scheduling engine.
//!
//! # Algorithm
//!
//! 1. Validate and normalize the raw input (all-or-nothing).
//! 2. Ask the algorithm's strategy for a visit plan.
//! 3. Trace head movement over the plan from the initial head position.
//!
//! `compare` repeats steps 2-3 for every configured algorithm over the
//! same immutable input and ranks the results by total movement.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use super::movement::trace_movement;
use crate::config::SchedulerConfig;
use crate::error::Result;
use crate::models::{
    AlgorithmKind, ComparisonResult, Direction, SimulationInput, SimulationRequest,
    SimulationResult,
};
use crate::validation::validate_input;

/// Stateless disk-arm scheduling engine.
///
/// Holds only configuration. Every call allocates and returns its own
/// result; nothing is shared between calls.
///
/// # Example
///
/// ```
/// use u_disk_schedule::models::{AlgorithmKind, Direction};
/// use u_disk_schedule::scheduler::DiskScheduler;
///
/// let scheduler = DiskScheduler::new();
/// let result = scheduler
///     .simulate(&[98, 183, 37, 122, 14, 124, 65, 67], 53, 200, AlgorithmKind::Sstf, None)
///     .unwrap();
/// assert_eq!(result.total_movement, 236);
///
/// let comparison = scheduler
///     .compare(&[98, 183, 37, 122, 14, 124, 65, 67], 53, 200, Some(Direction::Up))
///     .unwrap();
/// assert_eq!(comparison.best().unwrap().algorithm, AlgorithmKind::Sstf);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DiskScheduler {
    config: SchedulerConfig,
}

impl DiskScheduler {
    /// Creates a scheduler with the default configuration.
    pub fn new() -> Self {
        Self {
            config: SchedulerConfig::default(),
        }
    }

    /// Creates a scheduler with the given configuration.
    pub fn with_config(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Simulates one algorithm.
    ///
    /// `direction` defaults to the configured direction and only affects
    /// SCAN, C-SCAN, LOOK and C-LOOK.
    pub fn simulate(
        &self,
        requests: &[i64],
        head: i64,
        disk_size: i64,
        algorithm: AlgorithmKind,
        direction: Option<Direction>,
    ) -> Result<SimulationResult> {
        let input = self.validate(requests, head, disk_size, direction)?;
        Ok(self.run(&input, algorithm))
    }

    /// Simulates every configured algorithm and ranks the results.
    ///
    /// Fails atomically: on invalid input no algorithm is run. Input checks
    /// run before the configured algorithm set is checked.
    pub fn compare(
        &self,
        requests: &[i64],
        head: i64,
        disk_size: i64,
        direction: Option<Direction>,
    ) -> Result<ComparisonResult> {
        let input = self.validate(requests, head, disk_size, direction)?;
        let algorithms = self.config.comparison_set()?;
        Ok(self.run_all(&input, &algorithms))
    }

    /// Simulates a raw request payload.
    ///
    /// The algorithm and direction names are parsed here, so an unknown
    /// name is reported as invalid input before anything runs.
    pub fn simulate_request(&self, request: &SimulationRequest) -> Result<SimulationResult> {
        let algorithm: AlgorithmKind = request.algorithm.parse()?;
        let direction = self.parse_direction(request)?;
        self.simulate(
            &request.requests,
            request.initial_position,
            request.disk_size.unwrap_or(self.config.default_disk_size),
            algorithm,
            direction,
        )
    }

    /// Compares every configured algorithm over a raw request payload.
    ///
    /// The payload's `algorithm` field is ignored.
    pub fn compare_request(&self, request: &SimulationRequest) -> Result<ComparisonResult> {
        let direction = self.parse_direction(request)?;
        self.compare(
            &request.requests,
            request.initial_position,
            request.disk_size.unwrap_or(self.config.default_disk_size),
            direction,
        )
    }

    /// Runs one algorithm over validated input. Never fails.
    pub fn run(&self, input: &SimulationInput, algorithm: AlgorithmKind) -> SimulationResult {
        let strategy = algorithm.strategy();
        let plan = strategy.plan(input);
        trace!(
            algorithm = %algorithm,
            visits = plan.len(),
            "planned service order"
        );

        let movement = trace_movement(input.head(), &plan);
        debug!(
            algorithm = %algorithm,
            direction = %input.direction(),
            requests = movement.requests_serviced,
            total_movement = movement.total_movement,
            "simulation complete"
        );

        SimulationResult {
            algorithm,
            direction: input.direction(),
            initial_position: input.head(),
            steps: movement.steps,
            total_movement: movement.total_movement,
            requests_serviced: movement.requests_serviced,
        }
    }

    /// Runs the given algorithms over the same validated input.
    pub fn run_all(&self, input: &SimulationInput, algorithms: &[AlgorithmKind]) -> ComparisonResult {
        let results: BTreeMap<AlgorithmKind, SimulationResult> = algorithms
            .iter()
            .map(|&kind| (kind, self.run(input, kind)))
            .collect();

        let comparison = ComparisonResult::from_results(results);
        debug!(
            algorithms = comparison.len(),
            best = ?comparison.ranking.first(),
            "comparison complete"
        );
        comparison
    }

    fn validate(
        &self,
        requests: &[i64],
        head: i64,
        disk_size: i64,
        direction: Option<Direction>,
    ) -> Result<SimulationInput> {
        let direction = direction.unwrap_or(self.config.default_direction);
        validate_input(requests, head, disk_size, direction).inspect_err(|err| {
            debug!(error = %err, "rejected simulation input");
        })
    }

    fn parse_direction(&self, request: &SimulationRequest) -> Result<Option<Direction>> {
        request
            .direction
            .as_deref()
            .map(str::parse::<Direction>)
            .transpose()
    }
}

/// Simulates one algorithm with the default configuration.
pub fn simulate(
    requests: &[i64],
    head: i64,
    disk_size: i64,
    algorithm: AlgorithmKind,
    direction: Option<Direction>,
) -> Result<SimulationResult> {
    DiskScheduler::new().simulate(requests, head, disk_size, algorithm, direction)
}

/// Compares all algorithms with the default configuration.
pub fn compare(
    requests: &[i64],
    head: i64,
    disk_size: i64,
    direction: Option<Direction>,
) -> Result<ComparisonResult> {
    DiskScheduler::new().compare(requests, head, disk_size, direction)
}
