//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `wp_scout` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All detection logic is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use wp_scout::initialization::init_logger_with;
use wp_scout::{report, run_probe, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let as_json = config.json;

    match run_probe(config).await {
        Ok(probe) => {
            if as_json {
                let json = serde_json::to_string_pretty(&probe.info)
                    .context("Failed to serialize detection result")?;
                println!("{json}");
            } else {
                print!("{}", report::render(&probe.info));
                println!("\nInspected {} in {:.1}s", probe.url, probe.elapsed_seconds);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("wp_scout error: could not analyze this page ({e:#})");
            process::exit(1);
        }
    }
}
