//! Built-in seek strategies.
//!
//! # Categories
//!
//! - **Arrival order**: FCFS
//! - **Greedy**: SSTF
//! - **Elevator**: SCAN, LOOK
//! - **Circular**: C-SCAN, C-LOOK
//!
//! # Tie-breaking
//! Sort-based steps order equal tracks together. SSTF prefers the lower
//! track when two requests are equally close.
//!
//! # Boundary policy
//! SCAN and C-SCAN travel to the physical boundary only when requests
//! remain on the far side of the head. LOOK and C-LOOK never touch a
//! boundary.

use super::sweep::{Partition, SweepPlan};
use super::{SeekStrategy, Visit};
use crate::models::{AlgorithmKind, SimulationInput};

// ======================== Arrival order ========================

/// First Come First Served.
///
/// Services requests in arrival order. No reordering.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl SeekStrategy for Fcfs {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Fcfs
    }

    fn plan(&self, input: &SimulationInput) -> Vec<Visit> {
        input.requests().iter().copied().map(Visit::request).collect()
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}

// ======================== Greedy ========================

/// Shortest Seek Time First.
///
/// Repeatedly services the pending request closest to the current head
/// position. Equal distances go to the lower track.
///
/// # Complexity
/// O(n²) for n requests.
#[derive(Debug, Clone, Copy)]
pub struct Sstf;

impl SeekStrategy for Sstf {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Sstf
    }

    fn plan(&self, input: &SimulationInput) -> Vec<Visit> {
        let mut pending = input.requests().to_vec();
        let mut position = input.head();
        let mut visits = Vec::with_capacity(pending.len());

        while let Some((idx, &next)) = pending
            .iter()
            .enumerate()
            .min_by_key(|&(_, &track)| (track.abs_diff(position), track))
        {
            pending.swap_remove(idx);
            visits.push(Visit::request(next));
            position = next;
        }

        visits
    }

    fn description(&self) -> &'static str {
        "Shortest Seek Time First"
    }
}

// ======================== Elevator ========================

/// SCAN (elevator).
///
/// Sweeps in the initial direction servicing every request on the way.
/// If requests remain behind the head, continues to the disk boundary,
/// reverses, and services them on the return sweep.
#[derive(Debug, Clone, Copy)]
pub struct Scan;

impl SeekStrategy for Scan {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Scan
    }

    fn plan(&self, input: &SimulationInput) -> Vec<Visit> {
        let Partition { ahead, behind } = Partition::of(input);
        let mut plan = SweepPlan::starting_at(input.head(), input.len());

        plan.service(ahead);
        if !behind.is_empty() {
            plan.touch(input.direction().boundary(input.disk_size()));
            plan.service(behind);
        }

        plan.finish()
    }

    fn description(&self) -> &'static str {
        "Elevator sweep to the disk boundary"
    }
}

/// LOOK.
///
/// Like SCAN, but reverses right after the last request in the current
/// direction instead of travelling to the boundary.
#[derive(Debug, Clone, Copy)]
pub struct Look;

impl SeekStrategy for Look {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Look
    }

    fn plan(&self, input: &SimulationInput) -> Vec<Visit> {
        let Partition { ahead, behind } = Partition::of(input);
        let mut plan = SweepPlan::starting_at(input.head(), input.len());

        plan.service(ahead);
        plan.service(behind);

        plan.finish()
    }

    fn description(&self) -> &'static str {
        "Elevator sweep reversing at the last request"
    }
}

// ======================== Circular ========================

/// Circular SCAN.
///
/// Sweeps to the boundary in the initial direction, jumps to the opposite
/// boundary without servicing, then keeps sweeping in the same direction.
/// The jump costs the full disk span.
#[derive(Debug, Clone, Copy)]
pub struct CScan;

impl SeekStrategy for CScan {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::CScan
    }

    fn plan(&self, input: &SimulationInput) -> Vec<Visit> {
        let Partition { ahead, mut behind } = Partition::of(input);
        let direction = input.direction();
        let mut plan = SweepPlan::starting_at(input.head(), input.len());

        plan.service(ahead);
        if !behind.is_empty() {
            let far = direction.boundary(input.disk_size());
            let near = direction.reversed().boundary(input.disk_size());
            behind.reverse();

            plan.touch(far);
            if behind.first() != Some(&near) {
                plan.touch(near);
            }
            plan.service(behind);
        }

        plan.finish()
    }

    fn description(&self) -> &'static str {
        "Circular sweep with a boundary-to-boundary jump"
    }
}

/// Circular LOOK.
///
/// Like C-SCAN, but jumps from the last request in the sweep straight to
/// the farthest pending request instead of the boundary.
#[derive(Debug, Clone, Copy)]
pub struct CLook;

impl SeekStrategy for CLook {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::CLook
    }

    fn plan(&self, input: &SimulationInput) -> Vec<Visit> {
        let Partition { ahead, behind } = Partition::of(input);
        let mut plan = SweepPlan::starting_at(input.head(), input.len());

        plan.service(ahead);
        plan.service(behind.into_iter().rev());

        plan.finish()
    }

    fn description(&self) -> &'static str {
        "Circular sweep jumping to the farthest request"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Direction, StepKind, Track};
    use crate::validation::validate_input;

    const QUEUE: [i64; 8] = [98, 183, 37, 122, 14, 124, 65, 67];

    fn classic(direction: Direction) -> SimulationInput {
        validate_input(&QUEUE, 53, 200, direction).unwrap()
    }

    fn tracks(visits: &[Visit]) -> Vec<Track> {
        visits.iter().map(|v| v.track).collect()
    }

    fn boundaries(visits: &[Visit]) -> Vec<Track> {
        visits
            .iter()
            .filter(|v| v.kind == StepKind::Boundary)
            .map(|v| v.track)
            .collect()
    }

    #[test]
    fn test_fcfs_keeps_arrival_order() {
        let plan = Fcfs.plan(&classic(Direction::Up));
        assert_eq!(tracks(&plan), vec![98, 183, 37, 122, 14, 124, 65, 67]);
    }

    #[test]
    fn test_sstf_order() {
        let plan = Sstf.plan(&classic(Direction::Up));
        assert_eq!(tracks(&plan), vec![65, 67, 37, 14, 98, 122, 124, 183]);
    }

    #[test]
    fn test_sstf_tie_prefers_lower_track() {
        let input = validate_input(&[60, 40], 50, 100, Direction::Up).unwrap();
        assert_eq!(tracks(&Sstf.plan(&input)), vec![40, 60]);
    }

    #[test]
    fn test_sstf_ignores_direction() {
        let up = Sstf.plan(&classic(Direction::Up));
        let down = Sstf.plan(&classic(Direction::Down));
        assert_eq!(up, down);
    }

    #[test]
    fn test_scan_up() {
        let plan = Scan.plan(&classic(Direction::Up));
        assert_eq!(
            tracks(&plan),
            vec![65, 67, 98, 122, 124, 183, 199, 37, 14]
        );
        assert_eq!(boundaries(&plan), vec![199]);
    }

    #[test]
    fn test_scan_down() {
        let plan = Scan.plan(&classic(Direction::Down));
        assert_eq!(tracks(&plan), vec![37, 14, 0, 65, 67, 98, 122, 124, 183]);
        assert_eq!(boundaries(&plan), vec![0]);
    }

    #[test]
    fn test_scan_skips_boundary_when_nothing_behind() {
        let input = validate_input(&[60, 80], 50, 100, Direction::Up).unwrap();
        let plan = Scan.plan(&input);
        assert_eq!(tracks(&plan), vec![60, 80]);
        assert!(boundaries(&plan).is_empty());
    }

    #[test]
    fn test_scan_boundary_already_requested() {
        let input = validate_input(&[99, 10], 50, 100, Direction::Up).unwrap();
        let plan = Scan.plan(&input);
        assert_eq!(tracks(&plan), vec![99, 10]);
        assert!(boundaries(&plan).is_empty());
    }

    #[test]
    fn test_look_up_and_down() {
        let up = Look.plan(&classic(Direction::Up));
        assert_eq!(tracks(&up), vec![65, 67, 98, 122, 124, 183, 37, 14]);

        let down = Look.plan(&classic(Direction::Down));
        assert_eq!(tracks(&down), vec![37, 14, 65, 67, 98, 122, 124, 183]);
        assert!(boundaries(&down).is_empty());
    }

    #[test]
    fn test_request_on_head_track() {
        // Up: head track is swept first. Down: also first.
        let input = validate_input(&[70, 50, 30], 50, 100, Direction::Up).unwrap();
        assert_eq!(tracks(&Look.plan(&input)), vec![50, 70, 30]);

        let input = input.with_direction(Direction::Down);
        assert_eq!(tracks(&Look.plan(&input)), vec![50, 30, 70]);
    }

    #[test]
    fn test_cscan_up() {
        let plan = CScan.plan(&classic(Direction::Up));
        assert_eq!(
            tracks(&plan),
            vec![65, 67, 98, 122, 124, 183, 199, 0, 14, 37]
        );
        assert_eq!(boundaries(&plan), vec![199, 0]);
    }

    #[test]
    fn test_cscan_down() {
        let plan = CScan.plan(&classic(Direction::Down));
        assert_eq!(
            tracks(&plan),
            vec![37, 14, 0, 199, 183, 124, 122, 98, 67, 65]
        );
        assert_eq!(boundaries(&plan), vec![0, 199]);
    }

    #[test]
    fn test_cscan_jump_lands_on_request() {
        let input = validate_input(&[80, 0, 20], 50, 100, Direction::Up).unwrap();
        let plan = CScan.plan(&input);
        assert_eq!(tracks(&plan), vec![80, 99, 0, 20]);
        assert_eq!(boundaries(&plan), vec![99]);
    }

    #[test]
    fn test_clook_up_and_down() {
        let up = CLook.plan(&classic(Direction::Up));
        assert_eq!(tracks(&up), vec![65, 67, 98, 122, 124, 183, 14, 37]);

        let down = CLook.plan(&classic(Direction::Down));
        assert_eq!(tracks(&down), vec![37, 14, 183, 124, 122, 98, 67, 65]);
        assert!(boundaries(&down).is_empty());
    }

    #[test]
    fn test_all_behind_head() {
        let input = validate_input(&[10, 30, 20], 50, 100, Direction::Up).unwrap();
        assert_eq!(tracks(&Scan.plan(&input)), vec![99, 30, 20, 10]);
        assert_eq!(tracks(&CScan.plan(&input)), vec![99, 0, 10, 20, 30]);
        assert_eq!(tracks(&Look.plan(&input)), vec![30, 20, 10]);
        assert_eq!(tracks(&CLook.plan(&input)), vec![10, 20, 30]);
    }

    #[test]
    fn test_duplicates_preserved() {
        let input = validate_input(&[5, 5, 2, 2], 3, 10, Direction::Up).unwrap();
        for kind in AlgorithmKind::ALL {
            let plan = kind.strategy().plan(&input);
            let mut served: Vec<Track> = plan
                .iter()
                .filter(|v| v.kind == StepKind::Request)
                .map(|v| v.track)
                .collect();
            served.sort_unstable();
            assert_eq!(served, vec![2, 2, 5, 5], "{kind}");
        }
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(Fcfs.description(), "First Come First Served");
        assert_eq!(Sstf.description(), "Shortest Seek Time First");
    }
}
