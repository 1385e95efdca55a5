// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use branchline_domain::{DaySchedule, PickupLocation, PickupTable};
use time::Weekday;

use crate::{Aggregation, aggregate_orders, parse_export};

/// The column set used by test exports, in the upstream export's order.
pub const EXPORT_HEADER: &str = "Name,Fulfillment Status,Shipping Name,Shipping Phone,Notes,\
Taxes,Shipping,Total,Lineitem name,Lineitem price,Lineitem quantity,\
Shipping Method,Shipping Street,Shipping City";

/// A Saturday schedule: Seattle → Edmonds, Bellevue → Redmond, Kirkland
/// present but unserved.
pub fn create_test_schedule() -> DaySchedule {
    let mut schedule: DaySchedule = DaySchedule::new(Weekday::Saturday);
    schedule.insert("Seattle", "Edmonds");
    schedule.insert("Bellevue", "Redmond");
    schedule.insert("Kirkland", "");
    schedule
}

pub fn create_test_pickups() -> PickupTable {
    let mut pickups: PickupTable = PickupTable::new();
    pickups.push(PickupLocation {
        shipping_method: String::from("Local Pickup - Edmonds"),
        branch: String::from("Edmonds"),
        street_address: String::from("123 Main St"),
        city: String::from("Edmonds"),
    });
    pickups
}

/// Joins data rows under [`EXPORT_HEADER`].
pub fn export_csv(rows: &[&str]) -> String {
    let mut content: String = String::from(EXPORT_HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    content
}

/// Parses and aggregates test rows against the test schedule and pickups.
pub fn aggregate_rows(rows: &[&str]) -> Aggregation {
    let schedule: DaySchedule = create_test_schedule();
    let pickups: PickupTable = create_test_pickups();
    let export = parse_export(export_csv(rows).as_bytes()).expect("export should parse");
    aggregate_orders(export, &schedule, &pickups).expect("aggregation should succeed")
}
