//! Human-readable text output

use crate::simulator::{SimulationReport, TrialReport};
use crate::workload::Workload;
use std::fmt::Write;

/// Print simulation results to console
///
/// For a single trial this is the classic report: the request preview, the
/// initial head position and one movement total per policy. Multiple trials
/// add a per-trial table and a summary with mean, min and max per policy.
pub fn print_results(report: &SimulationReport, preview: usize) {
    print!("{}", format_results(report, preview));
}

/// Render the full text report
pub fn format_results(report: &SimulationReport, preview: usize) -> String {
    let mut out = String::new();

    if let Some(first) = report.trials.first() {
        out.push_str("Generated cylinder requests:\n");
        out.push_str(&format_preview(&first.workload, preview));
        out.push('\n');
    }

    let _ = writeln!(out, "Initial head position: {}", report.config.head);

    if report.trials.len() == 1 {
        out.push_str(&format_totals(&report.trials[0]));
        return out;
    }

    out.push('\n');
    out.push_str(&format_trial_table(report));
    out.push('\n');
    out.push_str(&format_summary(report));
    out
}

/// First and last `edge` requests separated by `...`
///
/// Workloads of at most `2 * edge` requests are printed in full.
pub fn format_preview(workload: &Workload, edge: usize) -> String {
    let (head, tail) = workload.preview(edge);
    let mut parts: Vec<String> = head.iter().map(|r| r.to_string()).collect();
    if let Some(tail) = tail {
        parts.push("...".to_string());
        parts.extend(tail.iter().map(|r| r.to_string()));
    }
    parts.join(" ")
}

/// One line per policy for a single trial
pub fn format_totals(trial: &TrialReport) -> String {
    let mut out = String::new();
    for outcome in &trial.results {
        let _ = writeln!(
            out,
            "Total head movement using {}: {} cylinders",
            outcome.policy, outcome.total_movement
        );
    }
    out
}

fn format_trial_table(report: &SimulationReport) -> String {
    let mut out = String::new();

    let _ = write!(out, "{:>6}", "Trial");
    if let Some(first) = report.trials.first() {
        for outcome in &first.results {
            let _ = write!(out, " {:>12}", outcome.policy.name());
        }
    }
    out.push('\n');

    for trial in &report.trials {
        let _ = write!(out, "{:>6}", trial.trial);
        for outcome in &trial.results {
            let _ = write!(out, " {:>12}", format_number(outcome.total_movement));
        }
        out.push('\n');
    }

    out
}

fn format_summary(report: &SimulationReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Summary over {} trials:", report.trials.len());
    for summary in &report.summary {
        let _ = writeln!(
            out,
            "  {:<7} mean {:>12.1}  min {:>10}  max {:>10}",
            summary.policy.name(),
            summary.mean_movement,
            format_number(summary.min_movement),
            format_number(summary.max_movement)
        );
    }
    out
}

/// Format a number with thousands separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();

    for (count, c) in s.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.chars().rev().collect()
}
