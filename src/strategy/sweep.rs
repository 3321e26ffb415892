//! Shared sweep helpers for the SCAN family.

use super::Visit;
use crate::models::{Direction, SimulationInput, Track};

/// Requests split around the head for a sweep in the input's direction.
///
/// Both halves are ordered nearest-to-head first. A request on the head
/// track belongs to `ahead`.
#[derive(Debug)]
pub(crate) struct Partition {
    pub(crate) ahead: Vec<Track>,
    pub(crate) behind: Vec<Track>,
}

impl Partition {
    pub(crate) fn of(input: &SimulationInput) -> Self {
        let head = input.head();
        let mut sorted = input.requests().to_vec();
        sorted.sort_unstable();

        match input.direction() {
            Direction::Up => {
                let split = sorted.partition_point(|&t| t < head);
                let ahead = sorted.split_off(split);
                sorted.reverse();
                Self {
                    ahead,
                    behind: sorted,
                }
            }
            Direction::Down => {
                let split = sorted.partition_point(|&t| t <= head);
                let behind = sorted.split_off(split);
                sorted.reverse();
                Self {
                    ahead: sorted,
                    behind,
                }
            }
        }
    }
}

/// Accumulates a visit plan while tracking the arm position.
#[derive(Debug)]
pub(crate) struct SweepPlan {
    position: Track,
    visits: Vec<Visit>,
}

impl SweepPlan {
    pub(crate) fn starting_at(head: Track, capacity: usize) -> Self {
        Self {
            position: head,
            visits: Vec::with_capacity(capacity + 2),
        }
    }

    pub(crate) fn service<I: IntoIterator<Item = Track>>(&mut self, tracks: I) {
        for track in tracks {
            self.visits.push(Visit::request(track));
            self.position = track;
        }
    }

    /// Records a boundary waypoint unless the arm already sits on it.
    pub(crate) fn touch(&mut self, boundary: Track) {
        if self.position != boundary {
            self.visits.push(Visit::boundary(boundary));
            self.position = boundary;
        }
    }

    pub(crate) fn finish(self) -> Vec<Visit> {
        self.visits
    }
}
