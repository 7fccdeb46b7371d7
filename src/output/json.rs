//! JSON output formatting
//!
//! Serializes a [`SimulationReport`]: the effective parameters, per-trial
//! outcomes (with SCAN and C-SCAN leg breakdowns) and the per-policy summary.
//! Generated requests are not included.

use crate::simulator::SimulationReport;
use crate::Result;
use anyhow::Context;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serialize a report to a JSON string
pub fn report_to_json(report: &SimulationReport, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(json)
}

/// Write JSON output to file
pub fn write_json_output(output_path: &Path, report: &SimulationReport, pretty: bool) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create JSON output: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    if pretty {
        serde_json::to_writer_pretty(&mut writer, report)?;
    } else {
        serde_json::to_writer(&mut writer, report)?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write JSON output: {}", output_path.display()))?;

    Ok(())
}
