// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Delimited output views.
//!
//! Each view writes with a view-specific sort key so repeated runs over the
//! same input are byte-identical. A view that would be empty removes its
//! stale file from an earlier run instead of writing an empty table.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use time::Weekday;
use tracing::{info, warn};

use branchline_core::{Aggregation, BranchItemSummaries};
use branchline_domain::{Branch, DeliveryLocation, ItemSummary, Order};

use crate::error::ReportError;

/// Column order of the order-summary view.
const ORDER_SUMMARY_COLUMNS: &[&str] = &[
    "order_number",
    "fulfillment_status",
    "shipping_street",
    "shipping_city",
    "shipping_name",
    "shipping_phone",
    "branch",
    "shipping_method",
    "item_count",
    "food_item_count",
];

/// Column order of the delivery-locations view.
const DELIVERY_LOCATION_COLUMNS: &[&str] = &[
    "location_id",
    "branch",
    "shipping_street",
    "shipping_city",
    "order_count",
    "order_numbers",
];

/// Column order of the item-summary view.
const ITEM_SUMMARY_COLUMNS: &[&str] = &["count", "short_name"];

/// Resolved locations of one run's output files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPaths {
    output_dir: PathBuf,
    reports_dir: PathBuf,
    stem: String,
}

impl RunPaths {
    /// The per-run output directory.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// The rendered-documents directory inside the run directory.
    #[must_use]
    pub fn reports_dir(&self) -> &Path {
        &self.reports_dir
    }

    /// Path of a delimited view file, named after the input file stem.
    #[must_use]
    pub fn view_path(&self, view: &str) -> PathBuf {
        self.output_dir.join(format!("{}_{view}.csv", self.stem))
    }

    /// Path of a rendered document.
    #[must_use]
    pub fn document_path(&self, name: &str) -> PathBuf {
        self.reports_dir.join(format!("{name}.html"))
    }
}

/// Creates the per-run output directory tree and copies the input into it.
///
/// # Errors
///
/// Returns [`ReportError::WriteOutput`] if a directory or the input copy
/// cannot be created.
pub fn prepare_output_dir(output_root: &Path, order_file: &Path) -> Result<RunPaths, ReportError> {
    let stem: String = order_file
        .file_stem()
        .map_or_else(|| String::from("orders"), |stem| stem.to_string_lossy().into_owned());

    let output_dir: PathBuf = output_root.join(&stem);
    let reports_dir: PathBuf = output_dir.join("reports");
    fs::create_dir_all(&reports_dir).map_err(|source| ReportError::WriteOutput {
        path: reports_dir.clone(),
        source,
    })?;

    if let Some(file_name) = order_file.file_name() {
        let copy_path: PathBuf = output_dir.join(file_name);
        fs::copy(order_file, &copy_path).map_err(|source| ReportError::WriteOutput {
            path: copy_path.clone(),
            source,
        })?;
    }

    Ok(RunPaths {
        output_dir,
        reports_dir,
        stem,
    })
}

/// Renders the order-summary view, ascending by order number.
///
/// # Errors
///
/// Returns [`ReportError::Table`] on writer failures.
pub fn render_order_summary<W: Write>(
    writer: W,
    orders: &BTreeMap<String, Order>,
) -> Result<(), ReportError> {
    let mut table = csv::Writer::from_writer(writer);
    table.write_record(ORDER_SUMMARY_COLUMNS)?;
    for order in orders.values() {
        let item_count: usize = order
            .totals
            .as_ref()
            .map_or(order.line_items.len(), |totals| totals.item_count);
        let food_item_count: usize = order
            .totals
            .as_ref()
            .map_or_else(|| order.food_item_count(), |totals| totals.food_item_count);
        let item_count_cell: String = item_count.to_string();
        let food_item_count_cell: String = food_item_count.to_string();
        table.write_record([
            order.order_number.as_str(),
            order.fulfillment_status.as_str(),
            order.shipping_street.as_str(),
            order.shipping_city.as_str(),
            order.shipping_name.as_str(),
            order.shipping_phone.as_str(),
            order.branch.label(),
            order.shipping_method.as_str(),
            item_count_cell.as_str(),
            food_item_count_cell.as_str(),
        ])?;
    }
    table.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Renders the delivery-locations view, ascending by location id.
///
/// # Errors
///
/// Returns [`ReportError::Table`] on writer failures.
pub fn render_delivery_locations<W: Write>(
    writer: W,
    locations: &[DeliveryLocation],
) -> Result<(), ReportError> {
    let mut sorted: Vec<&DeliveryLocation> = locations.iter().collect();
    sorted.sort_by(|left, right| left.location_id.cmp(&right.location_id));

    let mut table = csv::Writer::from_writer(writer);
    table.write_record(DELIVERY_LOCATION_COLUMNS)?;
    for location in sorted {
        let order_count_cell: String = location.order_count.to_string();
        let order_numbers_cell: String = location.order_numbers.join("; ");
        table.write_record([
            location.location_id.as_str(),
            location.branch.label(),
            location.shipping_street.as_str(),
            location.shipping_city.as_str(),
            order_count_cell.as_str(),
            order_numbers_cell.as_str(),
        ])?;
    }
    table.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Renders one branch's line-item manifest: the original export columns with
/// the branch label prepended, rows in input order.
///
/// # Errors
///
/// Returns [`ReportError::Table`] on writer failures.
pub fn render_line_items<W: Write>(
    writer: W,
    aggregation: &Aggregation,
    branch: &Branch,
) -> Result<(), ReportError> {
    let mut table = csv::Writer::from_writer(writer);
    table.write_record(&aggregation.columns)?;
    write_bucket_rows(&mut table, aggregation, branch)?;
    table.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Renders every bucket's manifest rows into one table, branches in emission
/// order.
///
/// # Errors
///
/// Returns [`ReportError::Table`] on writer failures.
pub fn render_all_line_items<W: Write>(
    writer: W,
    aggregation: &Aggregation,
) -> Result<(), ReportError> {
    let mut table = csv::Writer::from_writer(writer);
    table.write_record(&aggregation.columns)?;
    for (branch, _) in aggregation.buckets.iter() {
        write_bucket_rows(&mut table, aggregation, branch)?;
    }
    table.flush().map_err(csv::Error::from)?;
    Ok(())
}

fn write_bucket_rows<W: Write>(
    table: &mut csv::Writer<W>,
    aggregation: &Aggregation,
    branch: &Branch,
) -> Result<(), ReportError> {
    let items = aggregation.buckets.get(branch).unwrap_or(&[]);
    for item_ref in items {
        let Some(item) = aggregation.line_item(item_ref) else {
            continue;
        };
        let mut row: Vec<&str> = Vec::with_capacity(item.row_values.len() + 1);
        row.push(item.branch.label());
        row.extend(item.row_values.iter().map(String::as_str));
        table.write_record(row)?;
    }
    Ok(())
}

/// Renders one branch's item-summary view, count descending.
///
/// # Errors
///
/// Returns [`ReportError::Table`] on writer failures.
pub fn render_item_summaries<W: Write>(
    writer: W,
    summaries: &[ItemSummary],
) -> Result<(), ReportError> {
    let mut table = csv::Writer::from_writer(writer);
    table.write_record(ITEM_SUMMARY_COLUMNS)?;
    for summary in summaries {
        let count_cell: String = summary.count.to_string();
        table.write_record([count_cell.as_str(), summary.short_name.as_str()])?;
    }
    table.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Writes every delimited view for one run.
///
/// Sentinel-branch manifests carry operator warnings; empty views remove any
/// stale file left by an earlier run over the same stem.
///
/// # Errors
///
/// Returns [`ReportError::WriteOutput`] or [`ReportError::Table`] on the
/// first failing view.
pub fn write_reports(
    paths: &RunPaths,
    aggregation: &Aggregation,
    summaries: &BranchItemSummaries,
    locations: &[DeliveryLocation],
    weekday: Weekday,
) -> Result<(), ReportError> {
    let summary_path: PathBuf = paths.view_path("order_summary");
    render_order_summary(create_file(&summary_path)?, &aggregation.orders)?;

    let locations_path: PathBuf = paths.view_path("delivery_locations");
    render_delivery_locations(create_file(&locations_path)?, locations)?;

    for (branch, items) in aggregation.buckets.iter() {
        let path: PathBuf = paths.view_path(&format!("line_items_{branch}"));
        if items.is_empty() {
            remove_stale(&path)?;
            continue;
        }
        match branch {
            Branch::UnknownCity => {
                warn!(path = %path.display(), "Check manifest for unknown shipping cities");
            }
            Branch::NotScheduled => {
                warn!(
                    path = %path.display(),
                    weekday = %weekday,
                    "Check manifest for orders outside the day's delivery areas"
                );
            }
            Branch::Named(_) => {}
        }
        render_line_items(create_file(&path)?, aggregation, branch)?;
    }

    let all_path: PathBuf = paths.view_path("line_items_all_branches");
    render_all_line_items(create_file(&all_path)?, aggregation)?;

    for (branch, branch_summaries) in summaries {
        let path: PathBuf = paths.view_path(&format!("item_summaries_{branch}"));
        if branch_summaries.is_empty() {
            remove_stale(&path)?;
        } else {
            render_item_summaries(create_file(&path)?, branch_summaries)?;
        }
    }

    Ok(())
}

fn create_file(path: &Path) -> Result<fs::File, ReportError> {
    fs::File::create(path).map_err(|source| ReportError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

fn remove_stale(path: &Path) -> Result<(), ReportError> {
    if path.exists() {
        info!(path = %path.display(), "Removing stale output file");
        fs::remove_file(path).map_err(|source| ReportError::WriteOutput {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
