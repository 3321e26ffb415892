//! Input validation for disk scheduling simulations.
//!
//! Checks a raw request queue before any strategy runs. Detects:
//! - Non-positive disk size
//! - Empty request queue
//! - Head position outside the disk
//! - Requested tracks outside the disk
//!
//! Validation is all-or-nothing: the first failing check is reported and
//! no normalized input is produced.
//!
//! # Limits
//! A plan has at most `MAX_REQUESTS + 2` steps of at most
//! `MAX_DISK_SIZE - 1` tracks each, so total movement always fits in `u64`.

use crate::error::{InvalidInputKind, Result, ScheduleError};
use crate::models::{Direction, SimulationInput, Track};

/// Largest accepted disk size (2^32 tracks).
pub const MAX_DISK_SIZE: i64 = 1 << 32;

/// Largest accepted request queue (2^24 requests).
pub const MAX_REQUESTS: usize = 1 << 24;

/// Validates raw simulation input and normalizes it.
///
/// Checks, in order:
/// 1. `0 < disk_size <= MAX_DISK_SIZE`
/// 2. `requests` is non-empty and holds at most `MAX_REQUESTS` entries
/// 3. `head` lies in `[0, disk_size - 1]`
/// 4. every request lies in `[0, disk_size - 1]`
///
/// # Returns
/// The immutable `SimulationInput` on success, `InvalidInput` otherwise.
pub fn validate_input(
    requests: &[i64],
    head: i64,
    disk_size: i64,
    direction: Direction,
) -> Result<SimulationInput> {
    if disk_size <= 0 {
        return Err(ScheduleError::invalid(
            InvalidInputKind::NonPositiveDiskSize,
            format!("Disk size must be positive, got {disk_size}"),
        ));
    }

    if disk_size > MAX_DISK_SIZE {
        return Err(ScheduleError::invalid(
            InvalidInputKind::DiskTooLarge,
            format!("Disk size {disk_size} exceeds the limit of {MAX_DISK_SIZE} tracks"),
        ));
    }

    if requests.is_empty() {
        return Err(ScheduleError::invalid(
            InvalidInputKind::EmptyQueue,
            "Request queue is empty",
        ));
    }

    if requests.len() > MAX_REQUESTS {
        return Err(ScheduleError::invalid(
            InvalidInputKind::QueueTooLong,
            format!(
                "Request queue holds {} entries, limit is {MAX_REQUESTS}",
                requests.len()
            ),
        ));
    }

    let head = to_track(head, disk_size).ok_or_else(|| {
        ScheduleError::invalid(
            InvalidInputKind::HeadOutOfRange,
            format!(
                "Head position {head} is out of bounds (0-{})",
                disk_size - 1
            ),
        )
    })?;

    let tracks = requests
        .iter()
        .map(|&req| {
            to_track(req, disk_size).ok_or_else(|| {
                ScheduleError::invalid(
                    InvalidInputKind::TrackOutOfRange,
                    format!("Request {req} is out of bounds (0-{})", disk_size - 1),
                )
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SimulationInput::new(
        tracks,
        head,
        disk_size as Track,
        direction,
    ))
}

fn to_track(value: i64, disk_size: i64) -> Option<Track> {
    (0..disk_size).contains(&value).then_some(value as Track)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let input = validate_input(&[98, 183, 37], 53, 200, Direction::Up).unwrap();
        assert_eq!(input.requests(), &[98, 183, 37]);
        assert_eq!(input.head(), 53);
        assert_eq!(input.disk_size(), 200);
        assert_eq!(input.direction(), Direction::Up);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let input = validate_input(&[5, 5, 5], 0, 10, Direction::Up).unwrap();
        assert_eq!(input.requests(), &[5, 5, 5]);
    }

    #[test]
    fn test_non_positive_disk_size() {
        for size in [0, -1] {
            let err = validate_input(&[0], 0, size, Direction::Up).unwrap_err();
            assert_eq!(err.kind(), InvalidInputKind::NonPositiveDiskSize);
        }
    }

    #[test]
    fn test_disk_too_large() {
        let err = validate_input(&[i64::MAX - 1, 0], 0, i64::MAX, Direction::Up).unwrap_err();
        assert_eq!(err.kind(), InvalidInputKind::DiskTooLarge);

        let err = validate_input(&[0], 0, MAX_DISK_SIZE + 1, Direction::Up).unwrap_err();
        assert_eq!(err.kind(), InvalidInputKind::DiskTooLarge);
    }

    #[test]
    fn test_largest_disk_accepted() {
        let last = MAX_DISK_SIZE - 1;
        let input = validate_input(&[last, 0], last, MAX_DISK_SIZE, Direction::Down).unwrap();
        assert_eq!(input.last_track(), last as Track);
    }

    #[test]
    fn test_empty_queue() {
        let err = validate_input(&[], 0, 200, Direction::Up).unwrap_err();
        assert_eq!(err.kind(), InvalidInputKind::EmptyQueue);
    }

    #[test]
    fn test_head_out_of_range() {
        let err = validate_input(&[1], 200, 200, Direction::Up).unwrap_err();
        assert_eq!(err.kind(), InvalidInputKind::HeadOutOfRange);

        let err = validate_input(&[1], -1, 200, Direction::Up).unwrap_err();
        assert_eq!(err.kind(), InvalidInputKind::HeadOutOfRange);
    }

    #[test]
    fn test_track_out_of_range() {
        let err = validate_input(&[10, 250], 0, 200, Direction::Up).unwrap_err();
        assert_eq!(err.kind(), InvalidInputKind::TrackOutOfRange);
        assert!(err.message().contains("250"));

        let err = validate_input(&[-3], 0, 200, Direction::Up).unwrap_err();
        assert_eq!(err.kind(), InvalidInputKind::TrackOutOfRange);
    }

    #[test]
    fn test_check_order() {
        // Disk size is reported before the empty queue.
        let err = validate_input(&[], 0, 0, Direction::Up).unwrap_err();
        assert_eq!(err.kind(), InvalidInputKind::NonPositiveDiskSize);

        // Head is reported before tracks.
        let err = validate_input(&[500], 500, 200, Direction::Up).unwrap_err();
        assert_eq!(err.kind(), InvalidInputKind::HeadOutOfRange);
    }

    #[test]
    fn test_single_track_disk() {
        let input = validate_input(&[0], 0, 1, Direction::Down).unwrap();
        assert_eq!(input.last_track(), 0);
    }
}
