//! SeekPulse - disk-head scheduling simulator
//!
//! SeekPulse compares classical disk-head scheduling policies by replaying a
//! synthetic workload of cylinder requests and measuring how far the simulated
//! arm travels under each one.
//!
//! # Architecture
//!
//! - **Geometry**: the valid cylinder range of the simulated disk
//! - **Workloads**: immutable request lists sampled from a random distribution
//! - **Policies**: FCFS, SCAN and C-SCAN as pure functions over a workload
//! - **Simulator**: runs policies over one or more generated workloads
//! - **Output**: console and JSON reports

pub mod config;
pub mod distribution;
pub mod error;
pub mod geometry;
pub mod output;
pub mod schedule;
pub mod simulator;
pub mod workload;

// Re-export commonly used types
pub use config::SimConfig;
pub use error::SimError;
pub use geometry::DiskGeometry;
pub use schedule::Policy;
pub use simulator::{Simulation, SimulationReport};
pub use workload::{Workload, WorkloadGenerator};

/// Result type used throughout SeekPulse
pub type Result<T> = anyhow::Result<T>;
