// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use std::path::PathBuf;
use time::Weekday;
use tracing::info;

use branchline_domain::weekday_from_name;
use branchline_report::{RunConfig, RunSummary, process_order_export};

/// Branchline - daily order export to per-branch operational reports
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the order export CSV file
    order_file: PathBuf,

    /// Weekday whose delivery schedule applies (e.g. "saturday")
    #[arg(short, long, value_parser = parse_weekday)]
    weekday: Weekday,

    /// Path to the weekly schedule table (tab-separated)
    #[arg(long, default_value = "config/weekly_schedule.tsv")]
    schedule: PathBuf,

    /// Path to the pickup-location table
    #[arg(long, default_value = "config/pickup_locations.csv")]
    pickups: PathBuf,

    /// Directory under which per-run output directories are created
    #[arg(short, long, default_value = "output")]
    output: PathBuf,
}

fn parse_weekday(value: &str) -> Result<Weekday, String> {
    weekday_from_name(value).map_err(|error| error.to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Branchline");

    let config: RunConfig = RunConfig {
        order_file: args.order_file,
        weekday: args.weekday,
        schedule_file: args.schedule,
        pickup_file: args.pickups,
        output_root: args.output,
    };

    let summary: RunSummary = process_order_export(&config)?;

    info!(
        output_dir = %summary.output_dir.display(),
        orders = summary.order_count,
        "Done"
    );

    Ok(())
}
