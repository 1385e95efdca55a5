// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DaySchedule, PickupLocation, PickupTable};
use time::Weekday;

/// A Saturday schedule with two branches and one unserved city.
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
    pickups.push(PickupLocation {
        shipping_method: String::from("Local Pickup - Redmond"),
        branch: String::from("Redmond"),
        street_address: String::from("456 Cleveland Ave"),
        city: String::from("Redmond"),
    });
    pickups
}
