//! Scheduler configuration.
//!
//! Supplies the defaults a raw `SimulationRequest` may omit and the set of
//! algorithms a comparison runs. Deserializable so an API layer can load
//! it from its own settings file.

use serde::{Deserialize, Serialize};

use crate::error::{InvalidInputKind, Result, ScheduleError};
use crate::models::{AlgorithmKind, Direction};

/// Disk size used by the classic textbook exercises.
pub const DEFAULT_DISK_SIZE: i64 = 200;

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Direction used when a request does not name one.
    pub default_direction: Direction,
    /// Disk size used when a request does not give one.
    pub default_disk_size: i64,
    /// Algorithms run by `compare`, in any order.
    pub algorithms: Vec<AlgorithmKind>,
}

impl SchedulerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            default_direction: Direction::Up,
            default_disk_size: DEFAULT_DISK_SIZE,
            algorithms: AlgorithmKind::ALL.to_vec(),
        }
    }

    /// Sets the default direction.
    pub fn with_default_direction(mut self, direction: Direction) -> Self {
        self.default_direction = direction;
        self
    }

    /// Sets the default disk size.
    pub fn with_default_disk_size(mut self, disk_size: i64) -> Self {
        self.default_disk_size = disk_size;
        self
    }

    /// Restricts the algorithms run by `compare`.
    pub fn with_algorithms(mut self, algorithms: impl IntoIterator<Item = AlgorithmKind>) -> Self {
        self.algorithms = algorithms.into_iter().collect();
        self
    }

    /// Compared algorithms in canonical order, without duplicates.
    pub(crate) fn comparison_set(&self) -> Result<Vec<AlgorithmKind>> {
        let mut kinds = self.algorithms.clone();
        kinds.sort();
        kinds.dedup();
        if kinds.is_empty() {
            return Err(ScheduleError::invalid(
                InvalidInputKind::NoAlgorithms,
                "No algorithms configured for comparison",
            ));
        }
        Ok(kinds)
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self::new()
    }
}
