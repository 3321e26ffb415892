//! Head movement accounting.
//!
//! The single place where movement cost is computed. Every strategy's
//! plan goes through `trace_movement`, so totals are comparable across
//! algorithms.

use crate::models::{ServiceStep, StepKind, Track};
use crate::strategy::Visit;

/// Head movement derived from a visit plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementTrace {
    /// One step per visit, in order.
    pub steps: Vec<ServiceStep>,
    /// Sum of step movements.
    pub total_movement: u64,
    /// Number of `Request` steps.
    pub requests_serviced: usize,
}

/// Converts a visit plan into service steps starting from `head`.
///
/// Movement of each step is `|track - previous|`, where `previous` is the
/// head position for the first step.
pub fn trace_movement(head: Track, plan: &[Visit]) -> MovementTrace {
    let mut steps = Vec::with_capacity(plan.len());
    let mut total_movement = 0u64;
    let mut requests_serviced = 0usize;
    let mut current = head;

    for visit in plan {
        let movement = current.abs_diff(visit.track);
        steps.push(ServiceStep {
            from: current,
            track: visit.track,
            movement,
            kind: visit.kind,
        });
        total_movement += movement;
        if visit.kind == StepKind::Request {
            requests_serviced += 1;
        }
        current = visit.track;
    }

    MovementTrace {
        steps,
        total_movement,
        requests_serviced,
    }
}
