//! Request workloads for simulations.
//!
//! Generates request queues for demonstrations and experiments: the
//! classic textbook queue, and uniformly random queues over a disk.

use rand::Rng;

use crate::models::{AlgorithmKind, Direction, SimulationRequest};

/// A request queue with its starting head position and disk size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    /// Tracks in arrival order.
    pub requests: Vec<i64>,
    /// Initial head position.
    pub head: i64,
    /// Number of tracks.
    pub disk_size: i64,
}

impl Workload {
    /// Creates a workload.
    pub fn new(requests: Vec<i64>, head: i64, disk_size: i64) -> Self {
        Self {
            requests,
            head,
            disk_size,
        }
    }

    /// The classic queue `98, 183, 37, 122, 14, 124, 65, 67` with the head
    /// at 53 on a 200-track disk.
    pub fn classic() -> Self {
        Self::new(vec![98, 183, 37, 122, 14, 124, 65, 67], 53, 200)
    }

    /// A uniformly random workload of `count` requests.
    ///
    /// Tracks and head are drawn from `[0, disk_size - 1]`; duplicates may
    /// occur. A non-positive `disk_size` yields an empty queue at head 0,
    /// which validation rejects.
    pub fn random<R: Rng>(count: usize, disk_size: i64, rng: &mut R) -> Self {
        if disk_size <= 0 {
            return Self::new(Vec::new(), 0, disk_size);
        }
        let requests = (0..count)
            .map(|_| rng.random_range(0..disk_size))
            .collect();
        let head = rng.random_range(0..disk_size);
        Self::new(requests, head, disk_size)
    }

    /// Converts to a raw request payload for the given algorithm.
    pub fn to_request(&self, algorithm: AlgorithmKind, direction: Direction) -> SimulationRequest {
        SimulationRequest::new(self.requests.clone(), self.head, algorithm.name())
            .with_disk_size(self.disk_size)
            .with_direction(direction.to_string())
    }
}
