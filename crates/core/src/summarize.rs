// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-branch item summaries for kitchen tallies.

use branchline_domain::{Branch, ItemNote, ItemSummary, is_food_item_name};

use crate::aggregate::Aggregation;

/// Item summaries per branch, in bucket emission order.
pub type BranchItemSummaries = Vec<(Branch, Vec<ItemSummary>)>;

/// Summarizes food items per (branch, item name).
///
/// Each summary carries the total quantity across contributing line items
/// and one note entry per contributing line whose owning order has a
/// non-empty notes field. Summaries are sorted by quantity descending; the
/// sort is stable, so ties keep their first-encounter order. The two
/// reserved non-food names never appear.
#[must_use]
pub fn summarize_items(aggregation: &Aggregation) -> BranchItemSummaries {
    let mut result: BranchItemSummaries = Vec::with_capacity(aggregation.buckets.len());

    for branch in aggregation.buckets.branches() {
        let mut summaries: Vec<ItemSummary> = Vec::new();

        for group in aggregation.groups.for_branch(branch) {
            if !is_food_item_name(&group.item_name) {
                continue;
            }

            let mut count: u32 = 0;
            let mut short_name: String = String::new();
            let mut notes: Vec<ItemNote> = Vec::new();

            for (position, item_ref) in group.items.iter().enumerate() {
                let Some(item) = aggregation.line_item(item_ref) else {
                    continue;
                };
                if position == 0 {
                    short_name = item.short_name.clone();
                }
                count += item.quantity;
                if let Some(order) = aggregation.orders.get(&item_ref.order_number)
                    && !order.notes.is_empty()
                {
                    notes.push(ItemNote {
                        note: order.notes.clone(),
                        quantity: item.quantity,
                        order_number: order.order_number.clone(),
                    });
                }
            }

            summaries.push(ItemSummary {
                item_name: group.item_name.clone(),
                short_name,
                count,
                notes,
            });
        }

        summaries.sort_by(|left, right| right.count.cmp(&left.count));
        result.push((branch.clone(), summaries));
    }

    result
}
