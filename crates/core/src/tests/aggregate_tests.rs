// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use branchline_domain::Branch;

use super::helpers::aggregate_rows;
use crate::Aggregation;

fn edmonds() -> Branch {
    Branch::Named(String::from("Edmonds"))
}

fn redmond() -> Branch {
    Branch::Named(String::from("Redmond"))
}

#[test]
fn test_rows_sharing_an_order_number_build_one_order() {
    let aggregation: Aggregation = aggregate_rows(&[
        "#1001,fulfilled,Alice,4251234567,,1.00,2.00,13.00,Dumplings,5.00,2,Standard Delivery,1 Pike Pl,Seattle",
        "#1001,,,,,,,,小费 Tip,3.00,1,Standard Delivery,1 Pike Pl,Seattle",
        "#1002,unfulfilled,Bob,,,0.50,0.00,5.50,Buns 包子,2.50,2,Standard Delivery,9 Main St,Bellevue",
    ]);

    assert_eq!(aggregation.orders.len(), 2);
    assert_eq!(aggregation.row_count, 3);

    let order = aggregation.orders.get("#1001").expect("order should exist");
    assert_eq!(order.line_items.len(), 2);
}

#[test]
fn test_first_seen_order_fields_win() {
    let aggregation: Aggregation = aggregate_rows(&[
        "#1001,fulfilled,Alice,4251234567,Ring bell,1.00,2.00,13.00,Dumplings,5.00,2,Standard Delivery,1 Pike Pl,Seattle",
        "#1001,unfulfilled,Impostor,0000000000,Changed,9.00,9.00,99.00,Buns,2.50,1,Standard Delivery,2 Elsewhere,Bellevue",
    ]);

    let order = aggregation.orders.get("#1001").expect("order should exist");
    assert_eq!(order.fulfillment_status, "fulfilled");
    assert_eq!(order.shipping_name, "Alice");
    assert_eq!(order.notes, "Ring bell");
    assert!((order.shipping - 2.0).abs() < f64::EPSILON);
    // Branch was resolved from the first row's city and does not change.
    assert_eq!(order.branch, edmonds());
    assert_eq!(order.line_items[1].branch, edmonds());
}

#[test]
fn test_item_counts_conserve_input_rows() {
    let aggregation: Aggregation = aggregate_rows(&[
        "#1001,fulfilled,Alice,4251234567,,1.00,2.00,13.00,Dumplings,5.00,2,Standard Delivery,1 Pike Pl,Seattle",
        "#1001,,,,,,,,小费 Tip,3.00,1,Standard Delivery,1 Pike Pl,Seattle",
        "#1002,unfulfilled,Bob,,,0.50,0.00,5.50,Buns 包子,2.50,2,Standard Delivery,9 Main St,Bellevue",
        "#1003,unfulfilled,Carol,,,0.00,0.00,2.50,Buns 包子,2.50,1,Standard Delivery,3 Lake St,Tacoma",
    ]);

    let attached: usize = aggregation
        .orders
        .values()
        .map(|order| order.line_items.len())
        .sum();
    assert_eq!(attached, aggregation.row_count);

    let bucketed: usize = aggregation.buckets.iter().map(|(_, items)| items.len()).sum();
    assert_eq!(bucketed, aggregation.row_count);
}

#[test]
fn test_buckets_are_preseeded_in_roster_then_sentinel_order() {
    let aggregation: Aggregation = aggregate_rows(&[
        "#1001,fulfilled,Alice,4251234567,,1.00,2.00,13.00,Dumplings,5.00,2,Standard Delivery,1 Pike Pl,Seattle",
    ]);

    let branches: Vec<&Branch> = aggregation.buckets.branches().collect();
    assert_eq!(
        branches,
        vec![
            &edmonds(),
            &redmond(),
            &Branch::UnknownCity,
            &Branch::NotScheduled
        ]
    );

    // Redmond got nothing today; its bucket still exists, empty.
    assert_eq!(aggregation.buckets.get(&redmond()), Some(&[][..]));
}

#[test]
fn test_sentinel_branches_collect_review_orders() {
    let aggregation: Aggregation = aggregate_rows(&[
        "#1001,fulfilled,Alice,,,1.00,2.00,13.00,Dumplings,5.00,2,Standard Delivery,3 Pine St,Tacoma",
        "#1002,fulfilled,Bob,,,1.00,2.00,13.00,Dumplings,5.00,1,Standard Delivery,10 Lake St,Kirkland",
    ]);

    let unknown = aggregation
        .buckets
        .get(&Branch::UnknownCity)
        .expect("bucket should exist");
    assert_eq!(unknown.len(), 1);
    assert_eq!(unknown[0].order_number, "#1001");

    let unscheduled = aggregation
        .buckets
        .get(&Branch::NotScheduled)
        .expect("bucket should exist");
    assert_eq!(unscheduled.len(), 1);
    assert_eq!(unscheduled[0].order_number, "#1002");
}

#[test]
fn test_pickup_override_rewrites_order_address() {
    let aggregation: Aggregation = aggregate_rows(&[
        "#1001,fulfilled,Alice,,,1.00,0.00,11.00,Dumplings,5.00,2,Local Pickup - Edmonds 10am,7 Own St,Bellevue",
    ]);

    let order = aggregation.orders.get("#1001").expect("order should exist");
    assert_eq!(order.branch, edmonds());
    assert_eq!(order.pickup_point, Some(String::from("Local Pickup - Edmonds")));
    assert_eq!(order.shipping_street, "123 Main St");
    assert_eq!(order.shipping_city, "Edmonds");
}

#[test]
fn test_manifest_columns_prepend_branch() {
    let aggregation: Aggregation = aggregate_rows(&[]);

    assert_eq!(aggregation.columns[0], "Branch");
    assert_eq!(aggregation.columns[1], "Name");
    assert_eq!(aggregation.columns.len(), 15);
}

#[test]
fn test_item_groups_keep_first_encounter_order() {
    let aggregation: Aggregation = aggregate_rows(&[
        "#1001,fulfilled,Alice,,,1.00,2.00,13.00,Dumplings,5.00,2,Standard Delivery,1 Pike Pl,Seattle",
        "#1002,fulfilled,Bob,,,1.00,2.00,13.00,Noodles,6.00,1,Standard Delivery,2 Pike Pl,Seattle",
        "#1003,fulfilled,Carol,,,1.00,2.00,13.00,Dumplings,5.00,1,Standard Delivery,3 Pike Pl,Seattle",
    ]);

    let branch = edmonds();
    let names: Vec<&str> = aggregation
        .groups
        .for_branch(&branch)
        .map(|group| group.item_name.as_str())
        .collect();
    assert_eq!(names, vec!["Dumplings", "Noodles"]);

    let dumplings = aggregation
        .groups
        .for_branch(&branch)
        .next()
        .expect("group should exist");
    assert_eq!(dumplings.items.len(), 2);
}

#[test]
fn test_line_item_refs_resolve_to_owned_items() {
    let aggregation: Aggregation = aggregate_rows(&[
        "#1001,fulfilled,Alice,,,1.00,2.00,13.00,Dumplings,5.00,2,Standard Delivery,1 Pike Pl,Seattle",
    ]);

    let (_, items) = aggregation
        .buckets
        .iter()
        .next()
        .expect("bucket should exist");
    let item = aggregation
        .line_item(&items[0])
        .expect("ref should resolve");
    assert_eq!(item.name, "Dumplings");
    assert_eq!(item.quantity, 2);
}
