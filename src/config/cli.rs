//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// SeekPulse - disk-head scheduling simulator
#[derive(Parser, Debug)]
#[command(name = "seekpulse")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Initial head position (cylinder). Non-integer values fall back to the default
    #[arg(value_name = "HEAD", allow_negative_numbers = true)]
    pub head: Option<String>,

    // === Disk Options ===
    /// Number of cylinders on the simulated disk
    #[arg(long)]
    pub cylinders: Option<u64>,

    // === Workload Options ===
    /// Number of cylinder requests to generate
    #[arg(short = 'r', long)]
    pub requests: Option<usize>,

    /// Seed for the request generator (reproducible workloads)
    #[arg(short = 's', long)]
    pub seed: Option<u64>,

    /// Number of independent workloads to simulate
    #[arg(short = 't', long)]
    pub trials: Option<usize>,

    // === Scheduling Options ===
    /// Scheduling policy to evaluate (repeatable; default: all)
    #[arg(short = 'p', long = "policy", value_enum)]
    pub policies: Vec<PolicyArg>,

    // === Output Options ===
    /// Requests shown at each end of the generated-request preview
    #[arg(long)]
    pub preview: Option<usize>,

    /// JSON report output file path
    #[arg(long)]
    pub json_output: Option<PathBuf>,

    // === Configuration File ===
    /// TOML configuration file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Dry run - validate configuration without simulating
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub debug: bool,
}

/// Scheduling policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// First-come, first-served
    Fcfs,
    /// Elevator algorithm
    Scan,
    /// Circular SCAN
    #[value(name = "c-scan", alias = "cscan")]
    CScan,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    ///
    /// Only checks values that are wrong regardless of the config file. The
    /// head position is checked later against the merged disk size.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.cylinders == Some(0) {
            anyhow::bail!("cylinders must be at least 1");
        }

        if self.requests == Some(0) {
            anyhow::bail!("requests must be at least 1");
        }

        if self.trials == Some(0) {
            anyhow::bail!("trials must be at least 1");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["seekpulse"]).unwrap();
        assert!(cli.head.is_none());
        assert!(cli.policies.is_empty());
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_parse_head_and_options() {
        let cli = Cli::try_parse_from([
            "seekpulse", "1200", "--seed", "7", "-p", "scan", "-p", "c-scan", "--trials", "3",
        ])
        .unwrap();
        assert_eq!(cli.head.as_deref(), Some("1200"));
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.trials, Some(3));
        assert_eq!(cli.policies, vec![PolicyArg::Scan, PolicyArg::CScan]);
    }

    #[test]
    fn test_parse_negative_head() {
        let cli = Cli::try_parse_from(["seekpulse", "-5"]).unwrap();
        assert_eq!(cli.head.as_deref(), Some("-5"));
    }

    #[test]
    fn test_parse_non_integer_head() {
        let cli = Cli::try_parse_from(["seekpulse", "middle"]).unwrap();
        assert_eq!(cli.head.as_deref(), Some("middle"));
    }

    #[test]
    fn test_validate_rejects_zero_requests() {
        let cli = Cli::try_parse_from(["seekpulse", "--requests", "0"]).unwrap();
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_cylinders() {
        let cli = Cli::try_parse_from(["seekpulse", "--cylinders", "0"]).unwrap();
        assert!(cli.validate().is_err());
    }
}
