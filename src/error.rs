//! Simulation error types

use thiserror::Error;

/// Errors raised by the geometry, workload and scheduling layers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// A head position or request lies outside `[0, size - 1]`
    #[error("cylinder {value} is out of range: must be between 0 and {max}", max = .size.saturating_sub(1))]
    OutOfRange { value: i64, size: u64 },

    /// A workload of zero requests was requested
    #[error("workload size must be at least 1, got {0}")]
    InvalidWorkloadSize(usize),

    /// A disk with no cylinders was requested
    #[error("disk must have at least one cylinder, got {0}")]
    InvalidGeometry(u64),

    /// A policy's running total no longer fits in a `u64`
    #[error("{0} head movement exceeds {max} cylinders", max = u64::MAX)]
    MovementOverflow(&'static str),
}
