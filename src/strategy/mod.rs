//! Seek strategies for disk-arm scheduling.
//!
//! Each algorithm is a stateless strategy that turns a validated input
//! into a visit plan: the tracks the arm passes through, in order. Head
//! movement is not computed here; see [`crate::scheduler::trace_movement`].
//!
//! # Usage
//!
//! ```
//! use u_disk_schedule::models::{AlgorithmKind, Direction};
//! use u_disk_schedule::validation::validate_input;
//!
//! let input = validate_input(&[98, 183, 37], 53, 200, Direction::Up).unwrap();
//! let plan = AlgorithmKind::Sstf.strategy().plan(&input);
//! let tracks: Vec<u64> = plan.iter().map(|v| v.track).collect();
//! assert_eq!(tracks, vec![37, 98, 183]);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11.2
//! - Denning (1967), "Effects of Scheduling on File Memory Operations"

pub mod rules;
mod sweep;

use std::fmt::Debug;

use crate::models::{AlgorithmKind, SimulationInput, StepKind, Track};

/// One planned arm position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    /// Track the arm moves to.
    pub track: Track,
    /// Request or boundary waypoint.
    pub kind: StepKind,
}

impl Visit {
    /// A serviced request.
    #[inline]
    pub fn request(track: Track) -> Self {
        Self {
            track,
            kind: StepKind::Request,
        }
    }

    /// A boundary waypoint.
    #[inline]
    pub fn boundary(track: Track) -> Self {
        Self {
            track,
            kind: StepKind::Boundary,
        }
    }
}

/// A disk-arm scheduling strategy.
///
/// # Contract
/// The plan contains every request of the input exactly once as a
/// `Request` visit, in service order. `Boundary` visits may be
/// interleaved. Implementations never fail on validated input.
pub trait SeekStrategy: Send + Sync + Debug {
    /// Algorithm implemented by this strategy.
    fn kind(&self) -> AlgorithmKind;

    /// Computes the visit plan for the given input.
    fn plan(&self, input: &SimulationInput) -> Vec<Visit>;

    /// Strategy description.
    fn description(&self) -> &'static str {
        self.kind().name()
    }
}

impl AlgorithmKind {
    /// The strategy implementing this algorithm.
    pub fn strategy(&self) -> &'static dyn SeekStrategy {
        match self {
            AlgorithmKind::Fcfs => &rules::Fcfs,
            AlgorithmKind::Sstf => &rules::Sstf,
            AlgorithmKind::Scan => &rules::Scan,
            AlgorithmKind::CScan => &rules::CScan,
            AlgorithmKind::Look => &rules::Look,
            AlgorithmKind::CLook => &rules::CLook,
        }
    }
}
