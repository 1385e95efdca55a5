// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Item name reserved for gratuity lines. Never counted as food.
pub const TIP_ITEM_NAME: &str = "小费 Tip";

/// Item name reserved for delivery-fee make-up lines. Never counted as food.
pub const DELIVERY_FEE_ITEM_NAME: &str = "运费补拍";

/// Returns whether an item name counts as food.
///
/// Every item is food except the two reserved non-food names
/// ([`TIP_ITEM_NAME`] and [`DELIVERY_FEE_ITEM_NAME`]).
#[must_use]
pub fn is_food_item_name(name: &str) -> bool {
    name != TIP_ITEM_NAME && name != DELIVERY_FEE_ITEM_NAME
}

/// A fulfillment branch assignment.
///
/// Resolution always produces a branch: either a configured branch name, or
/// one of two sentinel outcomes that flag an order for operator review.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    /// A branch configured in the weekly schedule or pickup-location table.
    Named(String),
    /// The shipping city does not appear in the weekday's schedule at all.
    UnknownCity,
    /// The shipping city appears in the schedule but has no branch assigned
    /// for the weekday.
    NotScheduled,
}

impl Branch {
    /// Display label for [`Branch::UnknownCity`].
    pub const UNKNOWN_CITY_LABEL: &'static str = "unknown_city";

    /// Display label for [`Branch::NotScheduled`].
    pub const NOT_SCHEDULED_LABEL: &'static str = "not_scheduled";

    /// Returns the label used in output tables and file names.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::UnknownCity => Self::UNKNOWN_CITY_LABEL,
            Self::NotScheduled => Self::NOT_SCHEDULED_LABEL,
        }
    }

    /// Returns whether this is one of the two review sentinels rather than a
    /// configured branch.
    #[must_use]
    pub const fn is_sentinel(&self) -> bool {
        !matches!(self, Self::Named(_))
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One purchased line item within an order.
///
/// Owned by its [`Order`]; per-branch buckets and per-item groups refer to it
/// through [`LineItemRef`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// The owning order's number.
    pub order_number: String,
    /// Full item name as exported.
    pub name: String,
    /// First whitespace-delimited token of the item name.
    pub short_name: String,
    /// Unit price.
    pub price: f64,
    /// Purchased quantity.
    pub quantity: u32,
    /// `price * quantity`.
    pub line_total: f64,
    /// False only for the two reserved non-food names.
    pub is_food: bool,
    /// The owning order's resolved branch.
    pub branch: Branch,
    /// Per-row tax passthrough. Absent when the export cell was empty.
    pub taxes: Option<f64>,
    /// Per-row total passthrough. Absent when the export cell was empty.
    pub total: Option<f64>,
    /// The trimmed original export cells, aligned to the export header.
    /// Retained so manifests can reproduce the full input column set.
    pub row_values: Vec<String>,
}

impl LineItem {
    /// Builds a line item from already-parsed row fields.
    ///
    /// Derives the short name, the line total, and the food flag.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        order_number: String,
        name: String,
        price: f64,
        quantity: u32,
        branch: Branch,
        taxes: Option<f64>,
        total: Option<f64>,
        row_values: Vec<String>,
    ) -> Self {
        let short_name: String = name.split_whitespace().next().unwrap_or_default().to_string();
        let is_food: bool = is_food_item_name(&name);
        Self {
            order_number,
            short_name,
            price,
            quantity,
            line_total: price * f64::from(quantity),
            is_food,
            branch,
            taxes,
            total,
            row_values,
            name,
        }
    }
}

/// A reference to a line item owned by an order.
///
/// Buckets and groups hold these instead of cloned items so every view reads
/// the single owned copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineItemRef {
    /// The owning order's number.
    pub order_number: String,
    /// Index into the owning order's line-item sequence.
    pub item_index: usize,
}

/// Derived per-order aggregates, computed once after the ingestion pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderTotals {
    /// Number of line items, including non-food lines.
    pub item_count: usize,
    /// Number of food line items.
    pub food_item_count: usize,
    /// Sum of food line totals, rounded to 2 decimals (ties to even).
    pub food_item_subtotal: f64,
    /// Sum of line totals for the reserved tip item.
    pub tip_total: f64,
    /// Order-level shipping plus line totals of the reserved delivery-fee item.
    pub shipping_total: f64,
    /// Sum of per-row tax passthroughs.
    pub tax_total: f64,
    /// Sum of per-row total passthroughs.
    pub grand_total: f64,
}

/// One normalized order, assembled from every export row sharing its number.
///
/// Order-level fields are frozen at the first row seen for the order; line
/// items accumulate in input row order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// The order number (unique within an export).
    pub order_number: String,
    /// Fulfillment status as exported.
    pub fulfillment_status: String,
    /// Recipient name.
    pub shipping_name: String,
    /// Recipient phone, normalized to `(AAA) BBB-CCCC` where recognized.
    pub shipping_phone: String,
    /// Delivery street, or the pickup point's street when a pickup token
    /// matched.
    pub shipping_street: String,
    /// Delivery city, or the pickup point's city when a pickup token matched.
    pub shipping_city: String,
    /// Shipping method as exported.
    pub shipping_method: String,
    /// Customer notes.
    pub notes: String,
    /// Order-level tax amount from the first row.
    pub taxes: f64,
    /// Order-level shipping amount from the first row.
    pub shipping: f64,
    /// Order-level total from the first row.
    pub total: f64,
    /// Resolved fulfillment branch.
    pub branch: Branch,
    /// The matched pickup token, when branch assignment came from the
    /// pickup-location table.
    pub pickup_point: Option<String>,
    /// Owned line items in input row order.
    pub line_items: Vec<LineItem>,
    /// Derived aggregates; set by post-processing.
    pub totals: Option<OrderTotals>,
}

impl Order {
    /// Number of food line items currently attached to this order.
    #[must_use]
    pub fn food_item_count(&self) -> usize {
        self.line_items.iter().filter(|item| item.is_food).count()
    }

    /// Looks up an owned line item by a reference.
    #[must_use]
    pub fn line_item(&self, item_ref: &LineItemRef) -> Option<&LineItem> {
        if item_ref.order_number == self.order_number {
            self.line_items.get(item_ref.item_index)
        } else {
            None
        }
    }
}

/// One customer note attached to an item summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemNote {
    /// The owning order's notes field.
    pub note: String,
    /// Quantity of the item on the contributing line.
    pub quantity: u32,
    /// The contributing order's number.
    pub order_number: String,
}

/// Aggregate view of one item name within one branch.
///
/// Food items only; the reserved non-food names never appear in summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSummary {
    /// Full item name.
    pub item_name: String,
    /// Short name from the first line item encountered for this name.
    pub short_name: String,
    /// Total quantity across all contributing line items.
    pub count: u32,
    /// One entry per contributing line item whose order carries a note.
    pub notes: Vec<ItemNote>,
}

/// A cluster of orders sharing an identical shipping address.
///
/// Only orders with at least one food item participate in delivery planning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryLocation {
    /// The first clustered order's pickup point when set, else its order
    /// number.
    pub location_id: String,
    /// Branch of the first clustered order.
    pub branch: Branch,
    /// Shared shipping street.
    pub shipping_street: String,
    /// Shared shipping city.
    pub shipping_city: String,
    /// Number of clustered orders.
    pub order_count: usize,
    /// Order numbers in cluster-encounter order.
    pub order_numbers: Vec<String>,
}
