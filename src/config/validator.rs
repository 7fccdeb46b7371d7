//! Configuration validation

use super::*;
use crate::error::SimError;
use crate::geometry::DiskGeometry;
use anyhow::{Context, Result};

/// Validate complete configuration
pub fn validate_config(config: &SimConfig) -> Result<()> {
    let geometry = validate_disk(&config.disk)?;
    validate_workload(&config.workload)?;
    validate_schedule(&config.schedule, &geometry)?;

    Ok(())
}

/// Validate disk configuration and build its geometry
pub fn validate_disk(disk: &DiskConfig) -> Result<DiskGeometry> {
    DiskGeometry::new(disk.cylinders).context("Invalid disk configuration")
}

/// Validate workload configuration
pub fn validate_workload(workload: &WorkloadConfig) -> Result<()> {
    if workload.requests == 0 {
        return Err(SimError::InvalidWorkloadSize(workload.requests))
            .context("Invalid workload configuration");
    }

    if workload.trials == 0 {
        anyhow::bail!("trials must be at least 1, got {}", workload.trials);
    }

    Ok(())
}

/// User-facing message for a head position that lies off the disk
pub fn head_range_message(geometry: &DiskGeometry) -> String {
    format!(
        "Initial head position must be between 0 and {}",
        geometry.last_cylinder()
    )
}

/// The message to print if the configured head is off the disk
///
/// Returns `None` when the head is on the disk, and also when the disk itself
/// is invalid, which [`validate_config`] reports instead.
pub fn rejected_head(config: &SimConfig) -> Option<String> {
    let geometry = DiskGeometry::new(config.disk.cylinders).ok()?;
    match geometry.check_signed(config.schedule.head) {
        Ok(_) => None,
        Err(_) => Some(head_range_message(&geometry)),
    }
}

/// Validate the head position against the disk and the policy list
pub fn validate_schedule(schedule: &ScheduleConfig, geometry: &DiskGeometry) -> Result<u64> {
    let head = geometry
        .check_signed(schedule.head)
        .with_context(|| head_range_message(geometry))?;

    if schedule.policies.is_empty() {
        anyhow::bail!("at least one scheduling policy must be selected");
    }

    for (i, policy) in schedule.policies.iter().enumerate() {
        if schedule.policies[..i].contains(policy) {
            tracing::warn!("policy {} listed more than once", policy);
        }
    }

    Ok(head)
}
