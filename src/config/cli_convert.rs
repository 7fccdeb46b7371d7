//! CLI to Config conversion utilities

use crate::config::cli;
use crate::schedule::Policy;

/// Outcome of reading the positional head argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadArgument {
    /// No argument was given
    Missing,
    /// Argument was not an integer; the configured default applies
    Invalid(String),
    /// Integer argument, not yet range-checked
    Value(i64),
}

/// Interpret the positional head argument
///
/// Range is not checked here since the disk size may come from a config file.
pub fn parse_head(arg: Option<&str>) -> HeadArgument {
    match arg {
        None => HeadArgument::Missing,
        Some(raw) => match raw.trim().parse::<i64>() {
            Ok(value) => HeadArgument::Value(value),
            Err(_) => HeadArgument::Invalid(raw.to_string()),
        },
    }
}

/// Convert CLI PolicyArg to schedule Policy
pub fn convert_policy(cli_policy: cli::PolicyArg) -> Policy {
    match cli_policy {
        cli::PolicyArg::Fcfs => Policy::Fcfs,
        cli::PolicyArg::Scan => Policy::Scan,
        cli::PolicyArg::CScan => Policy::CScan,
    }
}

/// Convert a list of CLI policies, keeping first occurrence order
pub fn convert_policies(cli_policies: &[cli::PolicyArg]) -> Vec<Policy> {
    let mut policies = Vec::with_capacity(cli_policies.len());
    for &arg in cli_policies {
        let policy = convert_policy(arg);
        if !policies.contains(&policy) {
            policies.push(policy);
        }
    }
    policies
}
