//! First-Come-First-Served scheduling

use crate::error::SimError;
use crate::geometry::DiskGeometry;
use crate::workload::Workload;

/// Total head movement serving requests strictly in arrival order
pub fn total_movement(workload: &Workload, head: u64, geometry: &DiskGeometry) -> Result<u64, SimError> {
    let mut current = geometry.check(head)?;
    let mut total = 0u64;

    for &request in workload.requests() {
        geometry.check(request)?;
        total = total
            .checked_add(current.abs_diff(request))
            .ok_or(SimError::MovementOverflow("FCFS"))?;
        current = request;
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fcfs_reference_scenario() {
        let geometry = DiskGeometry::new(10).unwrap();
        let workload = Workload::from_requests(vec![2, 3, 7], &geometry).unwrap();
        // |5-2| + |2-3| + |3-7|
        assert_eq!(total_movement(&workload, 5, &geometry).unwrap(), 8);
    }

    #[test]
    fn test_fcfs_is_order_sensitive() {
        let geometry = DiskGeometry::new(100).unwrap();
        let forward = Workload::from_requests(vec![10, 90, 20], &geometry).unwrap();
        let sorted = Workload::from_requests(vec![10, 20, 90], &geometry).unwrap();

        assert_eq!(total_movement(&forward, 0, &geometry).unwrap(), 10 + 80 + 70);
        assert_eq!(total_movement(&sorted, 0, &geometry).unwrap(), 90);
    }

    #[test]
    fn test_fcfs_repeated_requests_cost_nothing() {
        let geometry = DiskGeometry::new(100).unwrap();
        let workload = Workload::from_requests(vec![40, 40, 40], &geometry).unwrap();
        assert_eq!(total_movement(&workload, 40, &geometry).unwrap(), 0);
    }

    #[test]
    fn test_fcfs_overflow_is_an_error() {
        let geometry = DiskGeometry::new(u64::MAX).unwrap();
        let workload = Workload::from_requests(vec![u64::MAX - 1, 0, u64::MAX - 1], &geometry).unwrap();
        assert_eq!(
            total_movement(&workload, 0, &geometry),
            Err(SimError::MovementOverflow("FCFS"))
        );
    }

    #[test]
    fn test_fcfs_overflow_on_generated_workload() {
        let geometry = DiskGeometry::new(u64::MAX).unwrap();
        let workload = crate::workload::WorkloadGenerator::with_seed(1)
            .generate(1000, &geometry)
            .unwrap();
        assert_eq!(
            total_movement(&workload, 0, &geometry),
            Err(SimError::MovementOverflow("FCFS"))
        );
    }

    #[test]
    fn test_fcfs_rejects_out_of_range_head() {
        let geometry = DiskGeometry::new(10).unwrap();
        let workload = Workload::from_requests(vec![1], &geometry).unwrap();
        assert!(matches!(
            total_movement(&workload, 10, &geometry),
            Err(SimError::OutOfRange { value: 10, .. })
        ));
    }
}
