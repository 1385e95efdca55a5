// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One full processing run: reference tables in, reports out.

use std::fs;
use std::path::PathBuf;
use time::Weekday;
use tracing::info;

use branchline_core::{
    Aggregation, aggregate_orders, delivery_locations, parse_export, post_process_orders,
    summarize_items,
};
use branchline_domain::{DaySchedule, DeliveryLocation, PickupTable};

use crate::config::{load_day_schedule, load_pickup_table};
use crate::documents::write_documents;
use crate::error::ReportError;
use crate::output::{RunPaths, prepare_output_dir, write_reports};

/// Inputs of one processing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// The order export to process.
    pub order_file: PathBuf,
    /// The weekday whose delivery schedule applies.
    pub weekday: Weekday,
    /// The weekly schedule table (tab-separated).
    pub schedule_file: PathBuf,
    /// The pickup-location table (comma-separated).
    pub pickup_file: PathBuf,
    /// Directory under which the per-run output directory is created.
    pub output_root: PathBuf,
}

/// Headline numbers of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Where the run's files were written.
    pub output_dir: PathBuf,
    /// Ingested line-item rows.
    pub row_count: usize,
    /// Distinct orders.
    pub order_count: usize,
    /// Delivery locations after clustering.
    pub location_count: usize,
}

/// Processes one order export end to end.
///
/// Loads the weekday schedule and the pickup table, runs the aggregation
/// engine, and writes every delimited view and rendered document under the
/// output root. Each run's state is isolated; nothing carries over between
/// invocations.
///
/// # Errors
///
/// Returns the first fatal error: unreadable inputs, malformed reference
/// tables, or an export rejected by the engine. No partial output directory
/// cleanup is attempted on failure.
pub fn process_order_export(config: &RunConfig) -> Result<RunSummary, ReportError> {
    let mut schedule: DaySchedule = load_day_schedule(&config.schedule_file, config.weekday)?;
    let pickups: PickupTable = load_pickup_table(&config.pickup_file)?;
    for location in pickups.locations() {
        schedule.register_branch(&location.branch);
    }

    info!(path = %config.order_file.display(), "Processing order file");
    let content: String =
        fs::read_to_string(&config.order_file).map_err(|source| ReportError::ReadInput {
            path: config.order_file.clone(),
            source,
        })?;

    let export = parse_export(content.as_bytes())?;
    let mut aggregation: Aggregation = aggregate_orders(export, &schedule, &pickups)?;
    post_process_orders(&mut aggregation.orders);

    let summaries = summarize_items(&aggregation);
    let locations: Vec<DeliveryLocation> = delivery_locations(&aggregation.orders);

    let paths: RunPaths = prepare_output_dir(&config.output_root, &config.order_file)?;
    write_reports(&paths, &aggregation, &summaries, &locations, config.weekday)?;
    write_documents(&paths, &aggregation, &summaries)?;

    let summary: RunSummary = RunSummary {
        output_dir: paths.output_dir().to_path_buf(),
        row_count: aggregation.row_count,
        order_count: aggregation.orders.len(),
        location_count: locations.len(),
    };
    info!(
        output_dir = %summary.output_dir.display(),
        rows = summary.row_count,
        orders = summary.order_count,
        locations = summary.location_count,
        "Output files saved"
    );
    Ok(summary)
}
