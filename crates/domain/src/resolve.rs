// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fulfillment branch resolution for one order.

use crate::schedule::{DaySchedule, PickupTable};
use crate::types::Branch;

/// The branch decision and derived shipping fields for one order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchResolution {
    /// The resolved branch. Always produced; sentinels flag review cases.
    pub branch: Branch,
    /// The order's effective shipping street (the pickup point's street when
    /// a token matched).
    pub shipping_street: String,
    /// The order's effective shipping city (the pickup point's city when a
    /// token matched).
    pub shipping_city: String,
    /// The shipping method, passed through for reporting.
    pub shipping_method: String,
    /// The matched pickup token, when assignment came from the pickup table.
    pub pickup_point: Option<String>,
}

/// Decides the fulfillment branch for one order.
///
/// Pickup tokens take priority: the first table entry whose token is
/// contained in the shipping method supplies the branch and replaces the
/// shipping address with the pickup point's. Otherwise the shipping city is
/// looked up (uppercased) in the weekday schedule. A city absent from the
/// schedule resolves to [`Branch::UnknownCity`]; a city present with an empty
/// branch cell resolves to [`Branch::NotScheduled`]. The two outcomes are
/// deliberately distinct and reach the operator as different review flags.
#[must_use]
pub fn resolve_branch(
    shipping_method: &str,
    shipping_street: &str,
    shipping_city: &str,
    schedule: &DaySchedule,
    pickups: &PickupTable,
) -> BranchResolution {
    if let Some(location) = pickups.match_shipping_method(shipping_method) {
        return BranchResolution {
            branch: Branch::Named(location.branch.clone()),
            shipping_street: location.street_address.clone(),
            shipping_city: location.city.clone(),
            shipping_method: shipping_method.to_string(),
            pickup_point: Some(location.shipping_method.clone()),
        };
    }

    let branch: Branch = match schedule.branch_cell(shipping_city) {
        None => Branch::UnknownCity,
        Some("") => Branch::NotScheduled,
        Some(name) => Branch::Named(name.to_string()),
    };

    BranchResolution {
        branch,
        shipping_street: shipping_street.to_string(),
        shipping_city: shipping_city.to_string(),
        shipping_method: shipping_method.to_string(),
        pickup_point: None,
    }
}
