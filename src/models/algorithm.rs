//! Algorithm and sweep direction identifiers.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11.2

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Track;
use crate::error::{InvalidInputKind, ScheduleError};

/// Disk-arm scheduling algorithm.
///
/// Variants are declared in canonical order. The derived `Ord` follows
/// declaration order and is used to break ties when ranking results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AlgorithmKind {
    /// First Come First Served.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest Seek Time First.
    #[serde(rename = "SSTF")]
    Sstf,
    /// Elevator: sweep to the boundary, then reverse.
    #[serde(rename = "SCAN")]
    Scan,
    /// Circular SCAN: sweep to the boundary, jump to the opposite boundary.
    #[serde(rename = "C-SCAN", alias = "CSCAN")]
    CScan,
    /// SCAN that reverses at the last request instead of the boundary.
    #[serde(rename = "LOOK")]
    Look,
    /// Circular LOOK: jump to the farthest remaining request.
    #[serde(rename = "C-LOOK", alias = "CLOOK")]
    CLook,
}

impl AlgorithmKind {
    /// All algorithms in canonical order.
    pub const ALL: [AlgorithmKind; 6] = [
        AlgorithmKind::Fcfs,
        AlgorithmKind::Sstf,
        AlgorithmKind::Scan,
        AlgorithmKind::CScan,
        AlgorithmKind::Look,
        AlgorithmKind::CLook,
    ];

    /// Canonical display name (e.g., "C-SCAN").
    pub fn name(&self) -> &'static str {
        match self {
            AlgorithmKind::Fcfs => "FCFS",
            AlgorithmKind::Sstf => "SSTF",
            AlgorithmKind::Scan => "SCAN",
            AlgorithmKind::CScan => "C-SCAN",
            AlgorithmKind::Look => "LOOK",
            AlgorithmKind::CLook => "C-LOOK",
        }
    }

    /// Whether the initial sweep direction affects the service order.
    pub fn is_directional(&self) -> bool {
        !matches!(self, AlgorithmKind::Fcfs | AlgorithmKind::Sstf)
    }

    /// Whether the algorithm wraps around instead of reversing.
    pub fn is_circular(&self) -> bool {
        matches!(self, AlgorithmKind::CScan | AlgorithmKind::CLook)
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = ScheduleError;

    /// Parses a case-insensitive name. `CSCAN` and `CLOOK` are accepted
    /// as aliases of the hyphenated forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FCFS" => Ok(AlgorithmKind::Fcfs),
            "SSTF" => Ok(AlgorithmKind::Sstf),
            "SCAN" => Ok(AlgorithmKind::Scan),
            "C-SCAN" | "CSCAN" => Ok(AlgorithmKind::CScan),
            "LOOK" => Ok(AlgorithmKind::Look),
            "C-LOOK" | "CLOOK" => Ok(AlgorithmKind::CLook),
            _ => Err(ScheduleError::invalid(
                InvalidInputKind::UnknownAlgorithm,
                format!("Unknown algorithm: {s}"),
            )),
        }
    }
}

/// Initial sweep direction of the disk arm.
///
/// `Up` moves toward higher track numbers, `Down` toward track 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward `disk_size - 1`.
    #[default]
    #[serde(alias = "right")]
    Up,
    /// Toward track 0.
    #[serde(alias = "left")]
    Down,
}

impl Direction {
    /// The opposite direction.
    pub fn reversed(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// The boundary track this direction sweeps toward.
    pub fn boundary(&self, disk_size: Track) -> Track {
        match self {
            Direction::Up => disk_size.saturating_sub(1),
            Direction::Down => 0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => f.write_str("up"),
            Direction::Down => f.write_str("down"),
        }
    }
}

impl FromStr for Direction {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "right" => Ok(Direction::Up),
            "down" | "left" => Ok(Direction::Down),
            _ => Err(ScheduleError::invalid(
                InvalidInputKind::UnknownDirection,
                format!("Unknown direction: {s}"),
            )),
        }
    }
}
