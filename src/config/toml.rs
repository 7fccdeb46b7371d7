//! TOML configuration file parsing

use super::cli::Cli;
use super::cli_convert::{self, HeadArgument};
use super::*;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<SimConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<SimConfig> {
    let config: SimConfig = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
///
/// A non-integer head argument leaves the configured head in place.
pub fn merge_cli_with_config(cli: &Cli, mut config: SimConfig) -> SimConfig {
    if let Some(cylinders) = cli.cylinders {
        config.disk.cylinders = cylinders;
    }

    if let Some(requests) = cli.requests {
        config.workload.requests = requests;
    }
    if let Some(seed) = cli.seed {
        config.workload.seed = Some(seed);
    }
    if let Some(trials) = cli.trials {
        config.workload.trials = trials;
    }

    if let HeadArgument::Value(head) = cli_convert::parse_head(cli.head.as_deref()) {
        config.schedule.head = head;
    }
    if !cli.policies.is_empty() {
        config.schedule.policies = cli_convert::convert_policies(&cli.policies);
    }

    if let Some(preview) = cli.preview {
        config.output.preview = preview;
    }
    if let Some(ref path) = cli.json_output {
        config.output.json_output = Some(path.clone());
    }

    if cli.dry_run {
        config.runtime.dry_run = true;
    }
    if cli.debug {
        config.runtime.debug = true;
    }

    config
}

/// Build the effective configuration: config file (if any) overlaid with CLI
pub fn load_config(cli: &Cli) -> Result<SimConfig> {
    let base = match cli.config {
        Some(ref path) => parse_toml_file(path)?,
        None => SimConfig::default(),
    };
    Ok(merge_cli_with_config(cli, base))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::Policy;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_parse_full_toml() {
        let toml = r#"
            [disk]
            cylinders = 200

            [workload]
            requests = 50
            seed = 42
            trials = 4

            [schedule]
            head = 53
            policies = ["scan", "c-scan"]

            [output]
            json_output = "report.json"
            preview = 5
        "#;

        let config = parse_toml_string(toml).unwrap();
        assert_eq!(config.disk.cylinders, 200);
        assert_eq!(config.workload.requests, 50);
        assert_eq!(config.workload.seed, Some(42));
        assert_eq!(config.workload.trials, 4);
        assert_eq!(config.schedule.head, 53);
        assert_eq!(config.schedule.policies, vec![Policy::Scan, Policy::CScan]);
        assert_eq!(config.output.preview, 5);
        assert_eq!(config.output.json_output.unwrap().to_str(), Some("report.json"));
    }

    #[test]
    fn test_parse_empty_toml_uses_defaults() {
        let config = parse_toml_string("").unwrap();
        assert_eq!(config.disk.cylinders, DEFAULT_CYLINDERS);
        assert_eq!(config.schedule.head, DEFAULT_HEAD);
        assert_eq!(config.schedule.policies, Policy::ALL.to_vec());
    }

    #[test]
    fn test_parse_unknown_policy_fails() {
        let err = parse_toml_string("[schedule]\npolicies = [\"sstf\"]\n");
        assert!(err.is_err());
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[schedule]\nhead = 10\n[workload]\nrequests = 20\nseed = 1").unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let cli = Cli::try_parse_from(["seekpulse", "30", "-c", path.as_str(), "--seed", "9"]).unwrap();
        let config = load_config(&cli).unwrap();

        assert_eq!(config.schedule.head, 30);
        assert_eq!(config.workload.requests, 20);
        assert_eq!(config.workload.seed, Some(9));
    }

    #[test]
    fn test_invalid_head_keeps_configured_value() {
        let cli = Cli::try_parse_from(["seekpulse", "abc"]).unwrap();
        let config = merge_cli_with_config(&cli, SimConfig::default());
        assert_eq!(config.schedule.head, DEFAULT_HEAD);
    }

    #[test]
    fn test_missing_config_file_reports_path() {
        let err = parse_toml_file(Path::new("/nonexistent/seekpulse.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/seekpulse.toml"));
    }
}
