//! Disk-head scheduling policies
//!
//! Each policy is a pure function of `(workload, head, geometry)` returning the
//! total number of cylinders the arm travels. Policies never mutate the shared
//! workload, so the same [`Workload`] can be scheduled by every policy at once
//! from different threads.
//!
//! # Policies
//!
//! - **FCFS**: serve requests in arrival order (baseline)
//! - **SCAN**: sweep up to the top boundary, then down to cylinder 0
//! - **C-SCAN**: sweep up, return to cylinder 0 without serving, sweep up again
//!
//! # Example
//!
//! ```
//! use seekpulse::geometry::DiskGeometry;
//! use seekpulse::schedule::Policy;
//! use seekpulse::workload::Workload;
//!
//! let geometry = DiskGeometry::new(10).unwrap();
//! let workload = Workload::from_requests(vec![2, 3, 7], &geometry).unwrap();
//!
//! assert_eq!(Policy::Fcfs.total_movement(&workload, 5, &geometry).unwrap(), 8);
//! assert_eq!(Policy::Scan.total_movement(&workload, 5, &geometry).unwrap(), 9);
//! assert_eq!(Policy::CScan.total_movement(&workload, 5, &geometry).unwrap(), 5);
//! ```

pub mod cscan;
pub mod fcfs;
pub mod scan;
pub mod stops;

use crate::error::SimError;
use crate::geometry::DiskGeometry;
use crate::workload::Workload;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use cscan::CScanTrace;
pub use scan::ScanTrace;
pub use stops::{build_sorted_stops, SortedStops};

/// Scheduling policy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Policy {
    Fcfs,
    Scan,
    CScan,
}

impl Policy {
    /// Every policy, in reporting order
    pub const ALL: [Policy; 3] = [Policy::Fcfs, Policy::Scan, Policy::CScan];

    /// Display name used in reports
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Scan => "SCAN",
            Policy::CScan => "C-SCAN",
        }
    }

    /// Total head movement for this policy
    pub fn total_movement(
        &self,
        workload: &Workload,
        head: u64,
        geometry: &DiskGeometry,
    ) -> Result<u64, SimError> {
        match self {
            Policy::Fcfs => fcfs::total_movement(workload, head, geometry),
            Policy::Scan => scan::total_movement(workload, head, geometry),
            Policy::CScan => cscan::total_movement(workload, head, geometry),
        }
    }

    /// Run the policy and keep its per-leg breakdown
    pub fn evaluate(
        &self,
        workload: &Workload,
        head: u64,
        geometry: &DiskGeometry,
    ) -> Result<PolicyOutcome, SimError> {
        let (total_movement, legs) = match self {
            Policy::Fcfs => (fcfs::total_movement(workload, head, geometry)?, Legs::Sequential),
            Policy::Scan => {
                let trace = scan::trace(workload, head, geometry)?;
                (trace.total(), Legs::Scan(trace))
            }
            Policy::CScan => {
                let trace = cscan::trace(workload, head, geometry)?;
                (trace.total(), Legs::CScan(trace))
            }
        };

        Ok(PolicyOutcome {
            policy: *self,
            total_movement,
            legs,
        })
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Leg breakdown of one policy run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Legs {
    /// FCFS has no sweeps
    Sequential,
    Scan(ScanTrace),
    CScan(CScanTrace),
}

/// Result of running one policy against one workload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PolicyOutcome {
    #[serde(serialize_with = "serialize_policy_name")]
    pub policy: Policy,
    pub total_movement: u64,
    #[serde(skip_serializing_if = "Legs::is_sequential")]
    pub legs: Legs,
}

impl Legs {
    fn is_sequential(&self) -> bool {
        matches!(self, Legs::Sequential)
    }
}

pub(crate) fn serialize_policy_name<S: serde::Serializer>(policy: &Policy, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(policy.name())
}
