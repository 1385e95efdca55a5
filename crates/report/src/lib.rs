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

mod config;
mod documents;
mod error;
mod output;
mod run;

pub use config::{load_day_schedule, load_pickup_table, parse_day_schedule, parse_pickup_table};
pub use documents::{render_items_document, render_orders_document};
pub use error::ReportError;
pub use output::{RunPaths, prepare_output_dir};
pub use run::{RunConfig, RunSummary, process_order_export};
