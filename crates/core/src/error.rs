// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while ingesting an order export.
///
/// Every variant is fatal for the whole file: aggregation aborts rather than
/// producing partial output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The export header is missing required columns.
    MissingColumns {
        /// The missing column names.
        columns: Vec<String>,
    },
    /// The export could not be read at all (e.g. an unreadable header).
    MalformedExport {
        /// The underlying reader error.
        message: String,
    },
    /// One data row could not be parsed as CSV.
    MalformedRow {
        /// 1-based data row number.
        row: usize,
        /// The underlying reader error.
        message: String,
    },
    /// A numeric field held a value that does not parse.
    InvalidNumber {
        /// 1-based data row number.
        row: usize,
        /// The offending column name.
        field: String,
        /// The offending raw value.
        value: String,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingColumns { columns } => {
                write!(
                    f,
                    "Order export is missing required columns: {}",
                    columns.join(", ")
                )
            }
            Self::MalformedExport { message } => {
                write!(f, "Order export could not be read: {message}")
            }
            Self::MalformedRow { row, message } => {
                write!(f, "Order export row {row} could not be read: {message}")
            }
            Self::InvalidNumber { row, field, value } => {
                write!(
                    f,
                    "Order export row {row}: field '{field}' holds non-numeric value '{value}'"
                )
            }
        }
    }
}

impl std::error::Error for CoreError {}
