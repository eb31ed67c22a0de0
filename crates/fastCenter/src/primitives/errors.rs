//! Error types for center search.
//!
//! ## Purpose
//!
//! This module defines [`CenterError`], the single error type returned by every
//! fallible operation in the crate, from input validation through the worker
//! pool to the on-disk cloud cache.
//!
//! ## Key concepts
//!
//! * **InvalidInput / EmptyCloud**: Rejected before any distance is evaluated.
//! * **CorruptData**: A persisted cloud failed its sanity check. Never retried.
//! * **ThreadPool**: The worker pool could not be started.
//!
//! A hardware parallelism of zero is not an error; the engine clamps to one worker.

use std::io;
use thiserror::Error;

/// Errors produced while preparing or running a center search.
#[derive(Debug, Error)]
pub enum CenterError {
    /// The caller supplied data or configuration the search cannot use.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The point cloud contains no points.
    #[error("point cloud is empty")]
    EmptyCloud,

    /// A coordinate in a persisted cloud is NaN or outside the unit cube.
    #[error("corrupt cloud data: point {index} axis {axis} has value {value}")]
    CorruptData {
        /// Index of the offending point.
        index: usize,
        /// Axis of the offending coordinate (0 = x, 1 = y, 2 = z).
        axis: usize,
        /// The rejected value.
        value: f64,
    },

    /// A persisted cloud is empty or does not hold a whole number of points.
    #[error("corrupt cloud file: {len} bytes is not a positive whole number of {point_size}-byte points")]
    TruncatedCloud {
        /// Length of the file in bytes.
        len: usize,
        /// Size of one serialized point in bytes.
        point_size: usize,
    },

    /// Reading or writing the cloud cache failed.
    #[error("cloud I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The worker pool could not be built.
    #[error("failed to start worker pool: {0}")]
    ThreadPool(String),
}

impl CenterError {
    /// Whether this error came from a persisted cloud failing validation.
    pub fn is_corrupt(&self) -> bool {
        matches!(
            self,
            CenterError::CorruptData { .. } | CenterError::TruncatedCloud { .. }
        )
    }
}
