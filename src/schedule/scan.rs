//! SCAN (elevator) scheduling
//!
//! The arm sweeps from the head toward the top boundary, serving every stop on
//! the way, then reverses and sweeps down to cylinder 0.

use super::stops::{build_sorted_stops, SortedStops};
use crate::error::SimError;
use crate::geometry::DiskGeometry;
use crate::workload::Workload;
use serde::Serialize;

/// Movement of each SCAN leg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScanTrace {
    /// Head up to the top boundary
    pub ascending: u64,
    /// Head back down to cylinder 0
    pub descending: u64,
}

impl ScanTrace {
    /// Sum of both legs; at most `size - 1` for a trace built by [`trace`]
    #[inline]
    pub fn total(&self) -> u64 {
        self.ascending + self.descending
    }
}

/// Walk the sorted stops upward from the head index to the last stop
pub(crate) fn ascending_leg(stops: &SortedStops) -> u64 {
    let mut current = stops.head();
    let mut moved = 0u64;
    for &next in &stops.stops[stops.head_index + 1..] {
        moved += next - current;
        current = next;
    }
    moved
}

fn descending_leg(stops: &SortedStops) -> u64 {
    let mut current = stops.head();
    let mut moved = 0u64;
    for &next in stops.stops[..stops.head_index].iter().rev() {
        moved += current - next;
        current = next;
    }
    moved
}

/// Run SCAN and report both legs
pub fn trace(workload: &Workload, head: u64, geometry: &DiskGeometry) -> Result<ScanTrace, SimError> {
    let stops = build_sorted_stops(workload, head, geometry)?;
    Ok(ScanTrace {
        ascending: ascending_leg(&stops),
        descending: descending_leg(&stops),
    })
}

/// Total head movement under SCAN
pub fn total_movement(workload: &Workload, head: u64, geometry: &DiskGeometry) -> Result<u64, SimError> {
    trace(workload, head, geometry).map(|t| t.total())
}
