//! Disk scheduling engine and seek metrics.
//!
//! Runs seek strategies over validated input, accounts head movement in
//! one shared place, and compares algorithms on the same workload.
//!
//! # Engine
//!
//! `DiskScheduler` is stateless apart from its configuration: `simulate`
//! and `compare` are deterministic functions of their arguments.
//!
//! # KPI
//!
//! `SeekKpi` computes total movement, average seek per request, maximum
//! seek, boundary visits and direction reversals.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11.2
//! - Teorey & Pinkerton (1972), "A Comparative Analysis of Disk Scheduling Policies"

mod engine;
mod kpi;
mod movement;

pub use engine::{compare, simulate, DiskScheduler};
pub use kpi::SeekKpi;
pub use movement::{trace_movement, MovementTrace};
