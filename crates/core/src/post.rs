// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-order derived totals.

use std::collections::BTreeMap;

use branchline_domain::{DELIVERY_FEE_ITEM_NAME, Order, OrderTotals, TIP_ITEM_NAME};

/// Rounds a currency amount to 2 decimals, ties to even.
pub(crate) fn round_currency(amount: f64) -> f64 {
    (amount * 100.0).round_ties_even() / 100.0
}

/// Computes the derived aggregates for one order from its line items.
///
/// The food subtotal is rounded to 2 decimals with ties going to even; every
/// other total is a plain sum of already-2-decimal inputs. Absent per-row
/// tax/total passthroughs contribute zero.
#[must_use]
pub fn compute_order_totals(order: &Order) -> OrderTotals {
    let mut food_item_subtotal: f64 = 0.0;
    let mut tip_total: f64 = 0.0;
    let mut delivery_fee_total: f64 = 0.0;
    let mut tax_total: f64 = 0.0;
    let mut grand_total: f64 = 0.0;

    for item in &order.line_items {
        if item.is_food {
            food_item_subtotal += item.line_total;
        }
        if item.name == TIP_ITEM_NAME {
            tip_total += item.line_total;
        }
        if item.name == DELIVERY_FEE_ITEM_NAME {
            delivery_fee_total += item.line_total;
        }
        tax_total += item.taxes.unwrap_or(0.0);
        grand_total += item.total.unwrap_or(0.0);
    }

    OrderTotals {
        item_count: order.line_items.len(),
        food_item_count: order.food_item_count(),
        food_item_subtotal: round_currency(food_item_subtotal),
        tip_total,
        shipping_total: order.shipping + delivery_fee_total,
        tax_total,
        grand_total,
    }
}

/// Attaches derived totals to every order.
///
/// Runs once, after aggregation completes; orders are immutable afterwards.
pub fn post_process_orders(orders: &mut BTreeMap<String, Order>) {
    for order in orders.values_mut() {
        order.totals = Some(compute_order_totals(order));
    }
}
