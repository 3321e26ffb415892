//! Simulation input models.
//!
//! `SimulationRequest` is the raw payload an API layer deserializes.
//! `SimulationInput` is the validated, immutable record every strategy
//! consumes. The only way to obtain a `SimulationInput` is through
//! [`crate::validation::validate_input`].

use serde::{Deserialize, Serialize};

use super::{Direction, Track};

/// Raw simulation payload.
///
/// Field names follow the wire format of the simulator API. Values are
/// signed so that out-of-range input can be reported instead of being
/// rejected by the deserializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Track requests in arrival order.
    pub requests: Vec<i64>,
    /// Initial head position.
    pub initial_position: i64,
    /// Algorithm name (e.g., "SSTF", "c-scan").
    pub algorithm: String,
    /// Number of tracks. `None` = configured default.
    #[serde(default)]
    pub disk_size: Option<i64>,
    /// Initial sweep direction ("up"/"right" or "down"/"left"). `None` = configured default.
    #[serde(default)]
    pub direction: Option<String>,
}

impl SimulationRequest {
    /// Creates a request for the given queue, head and algorithm name.
    pub fn new(requests: Vec<i64>, initial_position: i64, algorithm: impl Into<String>) -> Self {
        Self {
            requests,
            initial_position,
            algorithm: algorithm.into(),
            disk_size: None,
            direction: None,
        }
    }

    /// Sets the disk size.
    pub fn with_disk_size(mut self, disk_size: i64) -> Self {
        self.disk_size = Some(disk_size);
        self
    }

    /// Sets the initial sweep direction.
    pub fn with_direction(mut self, direction: impl Into<String>) -> Self {
        self.direction = Some(direction.into());
        self
    }
}

/// Validated simulation input.
///
/// All tracks and the head lie in `[0, disk_size - 1]` and the queue is
/// non-empty. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationInput {
    requests: Vec<Track>,
    head: Track,
    disk_size: Track,
    direction: Direction,
}

impl SimulationInput {
    pub(crate) fn new(
        requests: Vec<Track>,
        head: Track,
        disk_size: Track,
        direction: Direction,
    ) -> Self {
        Self {
            requests,
            head,
            disk_size,
            direction,
        }
    }

    /// Requests in arrival order.
    #[inline]
    pub fn requests(&self) -> &[Track] {
        &self.requests
    }

    /// Initial head position.
    #[inline]
    pub fn head(&self) -> Track {
        self.head
    }

    /// Number of tracks on the disk.
    #[inline]
    pub fn disk_size(&self) -> Track {
        self.disk_size
    }

    /// Initial sweep direction.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Highest addressable track.
    #[inline]
    pub fn last_track(&self) -> Track {
        self.disk_size - 1
    }

    /// Number of requests.
    #[inline]
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Always `false` for validated input.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Returns a copy with a different sweep direction.
    pub fn with_direction(&self, direction: Direction) -> Self {
        Self {
            direction,
            ..self.clone()
        }
    }
}
