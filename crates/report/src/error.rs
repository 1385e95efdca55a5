// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the report boundary layer.

use std::path::PathBuf;
use thiserror::Error;

use branchline_core::CoreError;

/// Errors raised while loading reference tables or writing reports.
#[derive(Debug, Error)]
pub enum ReportError {
    /// An input file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    ReadInput {
        /// The offending path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// An output file or directory could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    WriteOutput {
        /// The offending path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The weekly schedule table is missing a required column.
    #[error("Weekly schedule is missing column '{column}'")]
    MissingScheduleColumn {
        /// The absent column name.
        column: String,
    },

    /// The weekly schedule table could not be parsed.
    #[error("Weekly schedule could not be read: {message}")]
    MalformedSchedule {
        /// The underlying reader error.
        message: String,
    },

    /// The pickup-location table is missing a required column.
    #[error("Pickup-location table is missing column '{column}'")]
    MissingPickupColumn {
        /// The absent column name.
        column: String,
    },

    /// The pickup-location table could not be parsed.
    #[error("Pickup-location table could not be read: {message}")]
    MalformedPickups {
        /// The underlying reader error.
        message: String,
    },

    /// Writing a delimited output table failed.
    #[error("Failed to write output table: {0}")]
    Table(#[from] csv::Error),

    /// The aggregation engine rejected the order export.
    #[error(transparent)]
    Engine(#[from] CoreError),
}
