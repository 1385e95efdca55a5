// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Order export ingestion.
//!
//! Validates the export header, trims every cell, and keeps rows aligned to
//! the original column set so manifests can reproduce it. All numeric
//! validation happens here; downstream passes never see raw strings.

use csv::StringRecord;
use std::collections::HashMap;
use std::io::Read;

use crate::error::CoreError;

/// Columns every order export must carry.
///
/// One row per purchased line item; order-level columns repeat on (at least)
/// the first row of each order.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "Name",
    "Fulfillment Status",
    "Shipping Name",
    "Shipping Phone",
    "Notes",
    "Taxes",
    "Shipping",
    "Total",
    "Lineitem name",
    "Lineitem price",
    "Lineitem quantity",
    "Shipping Method",
    "Shipping Street",
    "Shipping City",
];

/// The validated export header: original column order plus a name index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportHeader {
    columns: Vec<String>,
    index: HashMap<String, usize>,
}

impl ExportHeader {
    /// Validates a header record against [`REQUIRED_COLUMNS`].
    ///
    /// Column names are trimmed; the first occurrence of a duplicated name
    /// wins.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingColumns`] naming every absent required
    /// column.
    pub fn from_record(headers: &StringRecord) -> Result<Self, CoreError> {
        let columns: Vec<String> = headers.iter().map(|name| name.trim().to_string()).collect();

        let mut index: HashMap<String, usize> = HashMap::new();
        for (position, name) in columns.iter().enumerate() {
            index.entry(name.clone()).or_insert(position);
        }

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|required| !index.contains_key(**required))
            .map(|required| (*required).to_string())
            .collect();

        if missing.is_empty() {
            Ok(Self { columns, index })
        } else {
            Err(CoreError::MissingColumns { columns: missing })
        }
    }

    /// The trimmed column names in export order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The position of a column, if present.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }
}

/// One export row with every cell whitespace-trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLineItemRow {
    row_number: usize,
    values: Vec<String>,
}

impl RawLineItemRow {
    fn from_record(record: &StringRecord, row_number: usize) -> Self {
        Self {
            row_number,
            values: record.iter().map(|cell| cell.trim().to_string()).collect(),
        }
    }

    /// 1-based data row number (the header is row 0).
    #[must_use]
    pub const fn row_number(&self) -> usize {
        self.row_number
    }

    /// A cell by column name; empty for columns absent from the header.
    #[must_use]
    pub fn field<'a>(&'a self, header: &ExportHeader, name: &str) -> &'a str {
        header
            .position(name)
            .and_then(|position| self.values.get(position))
            .map_or("", String::as_str)
    }

    /// Consumes the row, yielding the trimmed cells in export column order.
    #[must_use]
    pub fn into_values(self) -> Vec<String> {
        self.values
    }
}

/// A fully read export: validated header plus trimmed rows in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderExport {
    /// The validated header.
    pub header: ExportHeader,
    /// Data rows in file order.
    pub rows: Vec<RawLineItemRow>,
}

/// Reads an order export from any reader.
///
/// # Errors
///
/// Returns [`CoreError::MissingColumns`] if required header columns are
/// absent, [`CoreError::MalformedExport`] if the header cannot be read, or
/// [`CoreError::MalformedRow`] naming the first unreadable data row.
pub fn parse_export<R: Read>(reader: R) -> Result<OrderExport, CoreError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let headers: StringRecord = csv_reader
        .headers()
        .map_err(|error| CoreError::MalformedExport {
            message: error.to_string(),
        })?
        .clone();
    let header: ExportHeader = ExportHeader::from_record(&headers)?;

    let mut rows: Vec<RawLineItemRow> = Vec::new();
    for (position, result) in csv_reader.records().enumerate() {
        let row_number: usize = position + 1;
        let record: StringRecord = result.map_err(|error| CoreError::MalformedRow {
            row: row_number,
            message: error.to_string(),
        })?;
        rows.push(RawLineItemRow::from_record(&record, row_number));
    }

    Ok(OrderExport { header, rows })
}

/// Parses a required numeric field. Empty cells are rejected.
pub(crate) fn parse_money(
    row: &RawLineItemRow,
    header: &ExportHeader,
    field: &str,
) -> Result<f64, CoreError> {
    let raw: &str = row.field(header, field);
    raw.parse::<f64>().map_err(|_| CoreError::InvalidNumber {
        row: row.row_number(),
        field: field.to_string(),
        value: raw.to_string(),
    })
}

/// Parses a numeric field where an empty cell means "absent".
pub(crate) fn parse_optional_money(
    row: &RawLineItemRow,
    header: &ExportHeader,
    field: &str,
) -> Result<Option<f64>, CoreError> {
    let raw: &str = row.field(header, field);
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<f64>()
        .map(Some)
        .map_err(|_| CoreError::InvalidNumber {
            row: row.row_number(),
            field: field.to_string(),
            value: raw.to_string(),
        })
}

/// Parses a line-item quantity.
pub(crate) fn parse_quantity(
    row: &RawLineItemRow,
    header: &ExportHeader,
    field: &str,
) -> Result<u32, CoreError> {
    let raw: &str = row.field(header, field);
    raw.parse::<u32>().map_err(|_| CoreError::InvalidNumber {
        row: row.row_number(),
        field: field.to_string(),
        value: raw.to_string(),
    })
}
