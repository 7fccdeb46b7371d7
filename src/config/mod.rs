//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.

pub mod cli;
pub mod cli_convert;
pub mod toml;
pub mod validator;

use crate::schedule::Policy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Cylinders on the simulated disk (valid range 0..=4999)
pub const DEFAULT_CYLINDERS: u64 = 5000;
/// Requests per generated workload
pub const DEFAULT_REQUESTS: usize = 1000;
/// Initial head position (middle of the default disk)
pub const DEFAULT_HEAD: i64 = 2500;
/// Requests shown at each end of the preview
pub const DEFAULT_PREVIEW: usize = 10;

/// Complete simulation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimConfig {
    #[serde(default)]
    pub disk: DiskConfig,
    #[serde(default)]
    pub workload: WorkloadConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

/// Disk configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiskConfig {
    /// Number of cylinders
    #[serde(default = "default_cylinders")]
    pub cylinders: u64,
}

fn default_cylinders() -> u64 {
    DEFAULT_CYLINDERS
}

impl Default for DiskConfig {
    fn default() -> Self {
        Self {
            cylinders: default_cylinders(),
        }
    }
}

/// Workload generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Requests per workload
    #[serde(default = "default_requests")]
    pub requests: usize,
    /// Generator seed; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Number of independent workloads
    #[serde(default = "default_trials")]
    pub trials: usize,
}

fn default_requests() -> usize {
    DEFAULT_REQUESTS
}

fn default_trials() -> usize {
    1
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            requests: default_requests(),
            seed: None,
            trials: default_trials(),
        }
    }
}

/// Scheduling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Initial head position; signed so out-of-range input can be reported as-is
    #[serde(default = "default_head")]
    pub head: i64,
    /// Policies to evaluate, in reporting order
    #[serde(default = "default_policies")]
    pub policies: Vec<Policy>,
}

fn default_head() -> i64 {
    DEFAULT_HEAD
}

fn default_policies() -> Vec<Policy> {
    Policy::ALL.to_vec()
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            head: default_head(),
            policies: default_policies(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// JSON report path
    #[serde(default)]
    pub json_output: Option<PathBuf>,
    /// Requests shown at each end of the preview
    #[serde(default = "default_preview")]
    pub preview: usize,
}

fn default_preview() -> usize {
    DEFAULT_PREVIEW
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json_output: None,
            preview: default_preview(),
        }
    }
}

/// Runtime configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Dry run mode
    #[serde(default)]
    pub dry_run: bool,
    /// Enable debug logging
    #[serde(default)]
    pub debug: bool,
}

impl fmt::Display for SimConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let policies: Vec<&str> = self.schedule.policies.iter().map(|p| p.name()).collect();

        writeln!(f, "Configuration:")?;
        writeln!(
            f,
            "  Disk:      {} cylinders (0-{})",
            self.disk.cylinders,
            self.disk.cylinders.saturating_sub(1)
        )?;
        writeln!(f, "  Head:      {}", self.schedule.head)?;
        writeln!(f, "  Requests:  {}", self.workload.requests)?;
        writeln!(f, "  Trials:    {}", self.workload.trials)?;
        match self.workload.seed {
            Some(seed) => writeln!(f, "  Seed:      {}", seed)?,
            None => writeln!(f, "  Seed:      random")?,
        }
        write!(f, "  Policies:  {}", policies.join(", "))?;
        if let Some(ref path) = self.output.json_output {
            write!(f, "\n  JSON:      {}", path.display())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_run() {
        let config = SimConfig::default();
        assert_eq!(config.disk.cylinders, 5000);
        assert_eq!(config.workload.requests, 1000);
        assert_eq!(config.workload.trials, 1);
        assert_eq!(config.schedule.head, 2500);
        assert_eq!(config.schedule.policies, Policy::ALL.to_vec());
        assert_eq!(config.output.preview, 10);
    }

    #[test]
    fn test_display_lists_policies() {
        let text = SimConfig::default().to_string();
        assert!(text.contains("5000 cylinders (0-4999)"));
        assert!(text.contains("FCFS, SCAN, C-SCAN"));
        assert!(text.contains("Seed:      random"));
    }
}
