//! Disk geometry
//!
//! A simulated disk is nothing more than a range of cylinders `[0, size)`.
//! Every other component validates positions against a `DiskGeometry`
//! instead of carrying its own bounds.

use crate::error::SimError;

/// Immutable description of the valid cylinder range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskGeometry {
    size: u64,
}

impl DiskGeometry {
    /// Create a geometry with `size` cylinders (`0..size`)
    pub fn new(size: u64) -> Result<Self, SimError> {
        if size == 0 {
            return Err(SimError::InvalidGeometry(size));
        }
        Ok(Self { size })
    }

    /// Number of cylinders
    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Highest valid cylinder (the upper boundary stop)
    #[inline]
    pub fn last_cylinder(&self) -> u64 {
        self.size - 1
    }

    #[inline]
    pub fn contains(&self, cylinder: u64) -> bool {
        cylinder < self.size
    }

    /// Fail with `OutOfRange` unless `cylinder` lies on the disk
    pub fn check(&self, cylinder: u64) -> Result<u64, SimError> {
        if self.contains(cylinder) {
            Ok(cylinder)
        } else {
            Err(SimError::OutOfRange {
                value: i64::try_from(cylinder).unwrap_or(i64::MAX),
                size: self.size,
            })
        }
    }

    /// Validate a signed position, as parsed from user input
    pub fn check_signed(&self, position: i64) -> Result<u64, SimError> {
        match u64::try_from(position) {
            Ok(cylinder) if self.contains(cylinder) => Ok(cylinder),
            _ => Err(SimError::OutOfRange {
                value: position,
                size: self.size,
            }),
        }
    }
}
