// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use branchline_domain::OrderTotals;

use super::helpers::aggregate_rows;
use crate::post::round_currency;
use crate::{Aggregation, post_process_orders};

fn close(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}

#[test]
fn test_order_with_food_and_tip_lines() {
    // Two lines for one order: a food item (qty 2 at $5.00) and a $3.00 tip,
    // with $2.00 order-level shipping.
    let mut aggregation: Aggregation = aggregate_rows(&[
        "#1001,fulfilled,Alice,4251234567,,1.00,2.00,13.00,Dumplings 猪肉白菜水饺,5.00,2,Standard Delivery,1 Pike Pl,Seattle",
        "#1001,,,,,,,,小费 Tip,3.00,1,Standard Delivery,1 Pike Pl,Seattle",
    ]);
    post_process_orders(&mut aggregation.orders);

    let order = aggregation.orders.get("#1001").expect("order should exist");
    let totals: &OrderTotals = order.totals.as_ref().expect("totals should be set");

    assert_eq!(totals.item_count, 2);
    assert_eq!(totals.food_item_count, 1);
    assert!(close(totals.food_item_subtotal, 10.0));
    assert!(close(totals.tip_total, 3.0));
    assert!(close(totals.shipping_total, 2.0));
}

#[test]
fn test_food_and_reserved_counts_partition_items() {
    let mut aggregation: Aggregation = aggregate_rows(&[
        "#1001,fulfilled,Alice,,,1.00,2.00,13.00,Dumplings,5.00,2,Standard Delivery,1 Pike Pl,Seattle",
        "#1001,,,,,,,,小费 Tip,3.00,1,Standard Delivery,1 Pike Pl,Seattle",
        "#1001,,,,,,,,运费补拍,1.00,1,Standard Delivery,1 Pike Pl,Seattle",
    ]);
    post_process_orders(&mut aggregation.orders);

    let order = aggregation.orders.get("#1001").expect("order should exist");
    let totals: &OrderTotals = order.totals.as_ref().expect("totals should be set");

    let reserved: usize = order
        .line_items
        .iter()
        .filter(|item| !item.is_food)
        .count();
    assert_eq!(totals.food_item_count + reserved, totals.item_count);
}

#[test]
fn test_delivery_fee_lines_add_to_shipping_total() {
    let mut aggregation: Aggregation = aggregate_rows(&[
        "#1001,fulfilled,Alice,,,1.00,2.00,13.00,Dumplings,5.00,2,Standard Delivery,1 Pike Pl,Seattle",
        "#1001,,,,,,,,运费补拍,1.50,2,Standard Delivery,1 Pike Pl,Seattle",
    ]);
    post_process_orders(&mut aggregation.orders);

    let order = aggregation.orders.get("#1001").expect("order should exist");
    let totals: &OrderTotals = order.totals.as_ref().expect("totals should be set");

    // 2.00 order shipping + 1.50 * 2 fee lines.
    assert!(close(totals.shipping_total, 5.0));
    // Fee lines are not food and never join the food subtotal.
    assert!(close(totals.food_item_subtotal, 10.0));
}

#[test]
fn test_passthrough_totals_treat_absent_as_zero() {
    let mut aggregation: Aggregation = aggregate_rows(&[
        "#1001,fulfilled,Alice,,,1.25,2.00,13.00,Dumplings,5.00,2,Standard Delivery,1 Pike Pl,Seattle",
        "#1001,,,,,,,,Noodles,6.00,1,Standard Delivery,1 Pike Pl,Seattle",
    ]);
    post_process_orders(&mut aggregation.orders);

    let order = aggregation.orders.get("#1001").expect("order should exist");
    let totals: &OrderTotals = order.totals.as_ref().expect("totals should be set");

    // Only the first row carries passthrough Taxes/Total cells.
    assert!(close(totals.tax_total, 1.25));
    assert!(close(totals.grand_total, 13.0));
}

#[test]
fn test_round_currency_rounds_half_to_even() {
    assert!(close(round_currency(0.125), 0.12));
    assert!(close(round_currency(0.375), 0.38));
    assert!(close(round_currency(10.0), 10.0));
    assert!(close(round_currency(10.004), 10.0));
    assert!(close(round_currency(10.006), 10.01));
}
