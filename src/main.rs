//! SeekPulse CLI entry point

use anyhow::Result;
use seekpulse::config::cli::Cli;
use seekpulse::config::cli_convert::{self, HeadArgument};
use seekpulse::config::{toml, validator, SimConfig};
use seekpulse::output::{json, text};
use seekpulse::Simulation;
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    cli.validate()?;

    let config = toml::load_config(&cli)?;
    init_logging(config.runtime.debug);
    debug!(?config, "effective configuration");

    // Head argument problems are reported but never fatal on their own
    match cli_convert::parse_head(cli.head.as_deref()) {
        HeadArgument::Missing => println!(
            "No initial head position provided. Using default value of {}",
            config.schedule.head
        ),
        HeadArgument::Invalid(raw) => {
            debug!(argument = %raw, "head position is not an integer");
            println!(
                "Invalid initial head position. Using default value of {}",
                config.schedule.head
            );
        }
        HeadArgument::Value(_) => {}
    }

    if let Some(message) = validator::rejected_head(&config) {
        debug!(head = config.schedule.head, cylinders = config.disk.cylinders, "head off the disk");
        println!("{}", message);
        std::process::exit(1);
    }

    validator::validate_config(&config)?;

    if config.runtime.dry_run {
        print_configuration(&config);
        println!();
        println!("Dry run mode - configuration validated successfully");
        return Ok(());
    }

    let simulation = Simulation::from_config(&config)?;
    let report = simulation.run()?;

    text::print_results(&report, config.output.preview);

    if let Some(ref path) = config.output.json_output {
        json::write_json_output(path, &report, true)?;
        info!(path = %path.display(), "wrote JSON report");
    }

    Ok(())
}

/// Install the stderr log subscriber; `--debug` lowers the level to DEBUG
fn init_logging(debug: bool) {
    let level = if debug { LevelFilter::DEBUG } else { LevelFilter::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_configuration(config: &SimConfig) {
    println!("SeekPulse v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("{}", config);
}
