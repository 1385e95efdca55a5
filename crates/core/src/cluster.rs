// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Delivery-location clustering for route planning.

use std::collections::{BTreeMap, HashMap};

use branchline_domain::{DeliveryLocation, Order};

/// Clusters orders sharing an identical shipping address.
///
/// Orders without a single food item never take part in delivery planning
/// and are skipped before clustering. Orders are visited in ascending order
/// number (the map's key order), so cluster emission follows first-encounter
/// order of distinct addresses under that traversal and the representative
/// order of a cluster is its lowest-numbered member. The location id is the
/// representative's pickup point when set, else its order number.
#[must_use]
pub fn delivery_locations(orders: &BTreeMap<String, Order>) -> Vec<DeliveryLocation> {
    let mut locations: Vec<DeliveryLocation> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for order in orders.values() {
        if order.food_item_count() == 0 {
            continue;
        }

        let key: (String, String) = (order.shipping_street.clone(), order.shipping_city.clone());
        if let Some(&slot) = index.get(&key) {
            let location: &mut DeliveryLocation = &mut locations[slot];
            location.order_count += 1;
            location.order_numbers.push(order.order_number.clone());
        } else {
            index.insert(key, locations.len());
            locations.push(DeliveryLocation {
                location_id: order
                    .pickup_point
                    .clone()
                    .unwrap_or_else(|| order.order_number.clone()),
                branch: order.branch.clone(),
                shipping_street: order.shipping_street.clone(),
                shipping_city: order.shipping_city.clone(),
                order_count: 1,
                order_numbers: vec![order.order_number.clone()],
            });
        }
    }

    locations
}
