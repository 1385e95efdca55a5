// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reference-table loading.
//!
//! The weekly schedule is a tab-separated table with a `City` column and one
//! column per weekday name; the pickup-location table is comma-separated and
//! its row order fixes substring-match priority.

use csv::StringRecord;
use std::fs;
use std::path::Path;
use time::Weekday;
use tracing::info;

use branchline_domain::{DaySchedule, PickupLocation, PickupTable};

use crate::error::ReportError;

/// Columns the pickup-location table must carry.
const PICKUP_COLUMNS: &[&str] = &["pickup_shipping_method", "branch", "street_address", "city"];

fn column_position(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|header| header.trim() == name)
}

/// Parses the weekly schedule for one weekday from TSV content.
///
/// City keys are uppercased by the schedule itself; branch cells are trimmed
/// and may be empty (city known, unserved that day). Rows with an empty city
/// cell are skipped.
///
/// # Errors
///
/// Returns [`ReportError::MissingScheduleColumn`] if `City` or the weekday
/// column is absent, or [`ReportError::MalformedSchedule`] on reader errors.
pub fn parse_day_schedule(content: &str, weekday: Weekday) -> Result<DaySchedule, ReportError> {
    // Hand-maintained schedules often omit trailing tabs; a short row just
    // means the remaining weekdays are unserved.
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: StringRecord = reader
        .headers()
        .map_err(|error| ReportError::MalformedSchedule {
            message: error.to_string(),
        })?
        .clone();

    let city_position: usize =
        column_position(&headers, "City").ok_or_else(|| ReportError::MissingScheduleColumn {
            column: String::from("City"),
        })?;
    let day_column: String = weekday.to_string();
    let day_position: usize = column_position(&headers, &day_column).ok_or_else(|| {
        ReportError::MissingScheduleColumn {
            column: day_column.clone(),
        }
    })?;

    let mut schedule: DaySchedule = DaySchedule::new(weekday);
    for result in reader.records() {
        let record: StringRecord = result.map_err(|error| ReportError::MalformedSchedule {
            message: error.to_string(),
        })?;
        let city: &str = record.get(city_position).unwrap_or("").trim();
        if city.is_empty() {
            continue;
        }
        let cell: &str = record.get(day_position).unwrap_or("").trim();
        schedule.insert(city, cell);
    }

    Ok(schedule)
}

/// Loads the weekly schedule from disk and logs the day's delivery areas.
///
/// # Errors
///
/// Returns [`ReportError::ReadInput`] if the file cannot be read, plus the
/// errors of [`parse_day_schedule`].
pub fn load_day_schedule(path: &Path, weekday: Weekday) -> Result<DaySchedule, ReportError> {
    info!(weekday = %weekday, "Applying weekly schedule");
    let content: String = fs::read_to_string(path).map_err(|source| ReportError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    let schedule: DaySchedule = parse_day_schedule(&content, weekday)?;

    for branch in schedule.branches() {
        let cities: String = schedule.cities_for_branch(branch).join(", ");
        info!(branch = %branch, cities = %cities, "Branch delivery areas");
    }

    Ok(schedule)
}

/// Parses the pickup-location table from CSV content, keeping row order.
///
/// # Errors
///
/// Returns [`ReportError::MissingPickupColumn`] if a required column is
/// absent, or [`ReportError::MalformedPickups`] on reader errors.
pub fn parse_pickup_table(content: &str) -> Result<PickupTable, ReportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let headers: StringRecord = reader
        .headers()
        .map_err(|error| ReportError::MalformedPickups {
            message: error.to_string(),
        })?
        .clone();

    let mut positions: Vec<usize> = Vec::with_capacity(PICKUP_COLUMNS.len());
    for column in PICKUP_COLUMNS {
        let position: usize = column_position(&headers, column).ok_or_else(|| {
            ReportError::MissingPickupColumn {
                column: (*column).to_string(),
            }
        })?;
        positions.push(position);
    }

    let mut pickups: PickupTable = PickupTable::new();
    for result in reader.records() {
        let record: StringRecord = result.map_err(|error| ReportError::MalformedPickups {
            message: error.to_string(),
        })?;
        let field = |slot: usize| -> String {
            record.get(positions[slot]).unwrap_or("").trim().to_string()
        };
        pickups.push(PickupLocation {
            shipping_method: field(0),
            branch: field(1),
            street_address: field(2),
            city: field(3),
        });
    }

    Ok(pickups)
}

/// Loads the pickup-location table from disk.
///
/// # Errors
///
/// Returns [`ReportError::ReadInput`] if the file cannot be read, plus the
/// errors of [`parse_pickup_table`].
pub fn load_pickup_table(path: &Path) -> Result<PickupTable, ReportError> {
    let content: String = fs::read_to_string(path).map_err(|source| ReportError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    let pickups: PickupTable = parse_pickup_table(&content)?;
    info!(locations = pickups.len(), "Loaded pickup locations");
    Ok(pickups)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;

    const SCHEDULE_TSV: &str = "City\tMonday\tTuesday\tWednesday\tThursday\tFriday\tSaturday\tSunday\n\
Seattle\t\t\tEdmonds\t\t\tEdmonds\t\n\
Bellevue\tRedmond\t\t\t\t\tRedmond\t\n\
Kirkland\t\t\t\t\t\t\t\n";

    const PICKUPS_CSV: &str = "pickup_shipping_method,branch,street_address,city\n\
Local Pickup - Edmonds,Edmonds,123 Main St,Edmonds\n\
Local Pickup - Redmond,Redmond,456 Cleveland Ave,Redmond\n";

    #[test]
    fn test_schedule_reads_the_requested_weekday_column() {
        let schedule: DaySchedule =
            parse_day_schedule(SCHEDULE_TSV, Weekday::Saturday).expect("schedule should parse");

        assert_eq!(schedule.branch_cell("Seattle"), Some("Edmonds"));
        assert_eq!(schedule.branch_cell("Bellevue"), Some("Redmond"));
        assert_eq!(schedule.branch_cell("Kirkland"), Some(""));
        assert_eq!(schedule.branch_cell("Tacoma"), None);
        assert_eq!(schedule.branches(), &["Edmonds", "Redmond"]);
    }

    #[test]
    fn test_schedule_differs_per_weekday() {
        let monday: DaySchedule =
            parse_day_schedule(SCHEDULE_TSV, Weekday::Monday).expect("schedule should parse");

        assert_eq!(monday.branch_cell("Seattle"), Some(""));
        assert_eq!(monday.branch_cell("Bellevue"), Some("Redmond"));
    }

    #[test]
    fn test_schedule_tolerates_short_rows() {
        let content: &str = "City\tMonday\tTuesday\nSeattle\tEdmonds\n";

        let schedule: DaySchedule =
            parse_day_schedule(content, Weekday::Tuesday).expect("schedule should parse");

        // The missing Tuesday cell reads as present-but-unserved.
        assert_eq!(schedule.branch_cell("Seattle"), Some(""));
    }

    #[test]
    fn test_schedule_missing_city_column_is_fatal() {
        let content: &str = "Town\tMonday\nSeattle\tEdmonds\n";

        let result = parse_day_schedule(content, Weekday::Monday);
        assert!(matches!(
            result,
            Err(ReportError::MissingScheduleColumn { column }) if column == "City"
        ));
    }

    #[test]
    fn test_schedule_missing_weekday_column_is_fatal() {
        let content: &str = "City\tMonday\nSeattle\tEdmonds\n";

        let result = parse_day_schedule(content, Weekday::Sunday);
        assert!(matches!(
            result,
            Err(ReportError::MissingScheduleColumn { column }) if column == "Sunday"
        ));
    }

    #[test]
    fn test_pickup_rows_keep_file_order() {
        let pickups: PickupTable = parse_pickup_table(PICKUPS_CSV).expect("table should parse");

        assert_eq!(pickups.len(), 2);
        assert_eq!(pickups.locations()[0].branch, "Edmonds");
        assert_eq!(pickups.locations()[1].branch, "Redmond");
        let matched = pickups
            .match_shipping_method("Local Pickup - Redmond 10am")
            .expect("token should match");
        assert_eq!(matched.street_address, "456 Cleveland Ave");
    }

    #[test]
    fn test_pickup_missing_column_is_fatal() {
        let content: &str = "pickup_shipping_method,branch,city\nX,Edmonds,Edmonds\n";

        let result = parse_pickup_table(content);
        assert!(matches!(
            result,
            Err(ReportError::MissingPickupColumn { column }) if column == "street_address"
        ));
    }
}
