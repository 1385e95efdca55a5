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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod aggregate;
mod cluster;
mod error;
mod ingest;
mod post;
mod summarize;

#[cfg(test)]
mod tests;

pub use aggregate::{
    Aggregation, BRANCH_COLUMN, BranchBuckets, ItemGroup, ItemGroups, aggregate_orders,
};
pub use cluster::delivery_locations;
pub use error::CoreError;
pub use ingest::{ExportHeader, OrderExport, REQUIRED_COLUMNS, RawLineItemRow, parse_export};
pub use post::{compute_order_totals, post_process_orders};
pub use summarize::{BranchItemSummaries, summarize_items};
