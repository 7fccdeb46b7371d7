//! C-SCAN (circular SCAN) scheduling
//!
//! The arm sweeps upward from the head to the top boundary, returns to the
//! bottom of the disk without serving anything, then sweeps upward again
//! through the stops that lie below the original head position.
//!
//! The return sweep is not service movement and is excluded from the total.
//! The second sweep is measured from the lowest stop above the cylinder-0
//! sentinel, so for stops `[0, 2, 3, 5, 7, 9]` with the head on 5 the wrapped
//! leg is `3 - 2 = 1`.

use super::scan::ascending_leg;
use super::stops::{build_sorted_stops, SortedStops};
use crate::error::SimError;
use crate::geometry::DiskGeometry;
use crate::workload::Workload;
use serde::Serialize;

/// Movement of each C-SCAN leg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CScanTrace {
    /// Head up to the top boundary
    pub ascending: u64,
    /// Second upward sweep below the head
    pub wrapped: u64,
    /// Return sweep from the top boundary to cylinder 0; never counted
    pub jump: u64,
}

impl CScanTrace {
    /// Counted movement; at most `size - 1` for a trace built by [`trace`]
    #[inline]
    pub fn total(&self) -> u64 {
        self.ascending + self.wrapped
    }
}

/// Second sweep from `stops[1]` up to the stop just below the head index.
///
/// Relies on `head_index` being the first stop equal to the head, so requests
/// on the head cylinder are served before the arm leaves it.
fn wrapped_leg(stops: &SortedStops) -> u64 {
    if stops.head_index < 2 {
        return 0;
    }
    let mut current = stops.stops[1];
    let mut moved = 0u64;
    for &next in &stops.stops[2..stops.head_index] {
        moved += next - current;
        current = next;
    }
    moved
}

/// Run C-SCAN and report each leg
pub fn trace(workload: &Workload, head: u64, geometry: &DiskGeometry) -> Result<CScanTrace, SimError> {
    let stops = build_sorted_stops(workload, head, geometry)?;
    let top = stops.stops[stops.stops.len() - 1];

    Ok(CScanTrace {
        ascending: ascending_leg(&stops),
        wrapped: wrapped_leg(&stops),
        jump: top - stops.stops[0],
    })
}

/// Total head movement under C-SCAN
pub fn total_movement(workload: &Workload, head: u64, geometry: &DiskGeometry) -> Result<u64, SimError> {
    trace(workload, head, geometry).map(|t| t.total())
}
