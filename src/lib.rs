//! Disk-arm scheduling simulator.
//!
//! Computes the order in which a disk arm services a queue of track
//! requests under the classical algorithms, the head movement of each
//! step, and how the algorithms compare on the same workload. The engine
//! is a stateless, deterministic function of its inputs.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `AlgorithmKind`, `Direction`,
//!   `SimulationRequest`, `SimulationInput`, `ServiceStep`,
//!   `SimulationResult`, `ComparisonResult`
//! - **`validation`**: Input checks (disk size, empty queue, track bounds)
//! - **`strategy`**: One seek strategy per algorithm (FCFS, SSTF, SCAN,
//!   C-SCAN, LOOK, C-LOOK)
//! - **`scheduler`**: `DiskScheduler`, shared movement accounting, `SeekKpi`
//! - **`config`**: `SchedulerConfig` defaults for direction, disk size and
//!   compared algorithms
//! - **`workload`**: Classic and random request queues
//!
//! # Example
//!
//! ```
//! use u_disk_schedule::{compare, simulate, AlgorithmKind, Direction};
//!
//! let queue = [98, 183, 37, 122, 14, 124, 65, 67];
//!
//! let fcfs = simulate(&queue, 53, 200, AlgorithmKind::Fcfs, None).unwrap();
//! assert_eq!(fcfs.total_movement, 640);
//!
//! let cmp = compare(&queue, 53, 200, Some(Direction::Up)).unwrap();
//! assert_eq!(cmp.ranking[0], AlgorithmKind::Sstf);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11.2
//! - Teorey & Pinkerton (1972), "A Comparative Analysis of Disk Scheduling Policies"

pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod strategy;
pub mod validation;
pub mod workload;

pub use config::SchedulerConfig;
pub use error::{InvalidInputKind, Result, ScheduleError};
pub use models::{
    AlgorithmKind, ComparisonResult, Direction, ServiceStep, SimulationRequest, SimulationResult,
    StepKind, Track,
};
pub use scheduler::{compare, simulate, DiskScheduler, SeekKpi};
