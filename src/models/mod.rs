//! Disk scheduling domain models.
//!
//! Provides the data types shared by every strategy: track identifiers,
//! algorithm and direction selectors, the raw and validated inputs, and
//! the per-step and aggregated outputs.
//!
//! # Domain Mappings
//!
//! | u-disk-schedule | Textbook term | Hardware |
//! |-----------------|---------------|----------|
//! | Track | Cylinder | Platter track |
//! | head | Current cylinder | Actuator arm |
//! | ServiceStep | Seek | Arm movement |
//! | total_movement | Total head movement | Seek distance |

mod algorithm;
mod request;
mod result;

pub use algorithm::{AlgorithmKind, Direction};
pub use request::{SimulationInput, SimulationRequest};
pub use result::{ComparisonResult, ServiceStep, SimulationResult, StepKind};

/// A track (cylinder) index in `[0, disk_size - 1]`.
pub type Track = u64;
