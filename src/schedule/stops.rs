//! Sorted stop list shared by SCAN and C-SCAN
//!
//! Both sweeping policies fold the head position and the two boundary
//! cylinders into the request set, sort it, and walk outward from the head.
//! Building that list lives here so the two policies cannot drift apart.

use crate::error::SimError;
use crate::geometry::DiskGeometry;
use crate::workload::Workload;

/// Every cylinder a sweep passes through, ascending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedStops {
    /// Requests, head position and both boundaries, sorted ascending.
    /// Duplicates are kept.
    pub stops: Vec<u64>,
    /// Index of the head position in `stops`.
    ///
    /// When the head cylinder appears more than once (a request or boundary
    /// equal to the head), this is the lowest matching index. SCAN totals are
    /// the same for any match. C-SCAN's wrapped leg is not: it ends at
    /// `stops[head_index - 1]`, so a later match would count a detour back up
    /// to the head cylinder.
    pub head_index: usize,
}

impl SortedStops {
    #[inline]
    pub fn head(&self) -> u64 {
        self.stops[self.head_index]
    }
}

/// Combine `workload`, `head` and the disk boundaries into a sorted stop list
///
/// The workload itself is left untouched; the stops are a private copy.
pub fn build_sorted_stops(
    workload: &Workload,
    head: u64,
    geometry: &DiskGeometry,
) -> Result<SortedStops, SimError> {
    geometry.check(head)?;

    let mut stops = Vec::with_capacity(workload.len() + 3);
    for &request in workload.requests() {
        stops.push(geometry.check(request)?);
    }
    stops.push(head);
    stops.push(0);
    stops.push(geometry.last_cylinder());
    stops.sort_unstable();

    let head_index = stops.partition_point(|&cylinder| cylinder < head);

    Ok(SortedStops { stops, head_index })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(size: u64, requests: Vec<u64>) -> (DiskGeometry, Workload) {
        let geometry = DiskGeometry::new(size).unwrap();
        let workload = Workload::from_requests(requests, &geometry).unwrap();
        (geometry, workload)
    }

    #[test]
    fn test_stops_include_head_and_boundaries() {
        let (geometry, workload) = setup(10, vec![2, 3, 7]);
        let stops = build_sorted_stops(&workload, 5, &geometry).unwrap();

        assert_eq!(stops.stops, vec![0, 2, 3, 5, 7, 9]);
        assert_eq!(stops.head_index, 3);
        assert_eq!(stops.head(), 5);
    }

    #[test]
    fn test_stops_keep_duplicates() {
        let (geometry, workload) = setup(10, vec![4, 4, 0, 9]);
        let stops = build_sorted_stops(&workload, 4, &geometry).unwrap();

        assert_eq!(stops.stops, vec![0, 0, 4, 4, 4, 9, 9]);
        // First of the three 4s
        assert_eq!(stops.head_index, 2);
    }

    #[test]
    fn test_stops_head_at_boundaries() {
        let (geometry, workload) = setup(10, vec![5]);

        let low = build_sorted_stops(&workload, 0, &geometry).unwrap();
        assert_eq!(low.stops, vec![0, 0, 5, 9]);
        assert_eq!(low.head_index, 0);

        let high = build_sorted_stops(&workload, 9, &geometry).unwrap();
        assert_eq!(high.stops, vec![0, 5, 9, 9]);
        assert_eq!(high.head_index, 2);
    }

    #[test]
    fn test_stops_do_not_touch_workload() {
        let (geometry, workload) = setup(10, vec![8, 1, 6]);
        build_sorted_stops(&workload, 5, &geometry).unwrap();
        assert_eq!(workload.requests(), &[8, 1, 6]);
    }

    #[test]
    fn test_stops_reject_out_of_range_head() {
        let (geometry, workload) = setup(10, vec![1]);
        assert_eq!(
            build_sorted_stops(&workload, 10, &geometry),
            Err(SimError::OutOfRange { value: 10, size: 10 })
        );
    }

    #[test]
    fn test_stops_reject_request_from_larger_disk() {
        let (_, workload) = setup(100, vec![50]);
        let small = DiskGeometry::new(10).unwrap();
        assert_eq!(
            build_sorted_stops(&workload, 5, &small),
            Err(SimError::OutOfRange { value: 50, size: 10 })
        );
    }
}
