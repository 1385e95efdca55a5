// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The single-pass order aggregation builder.
//!
//! Consumes export rows in file order. The first row of an order fixes its
//! order-level fields and branch; every row contributes one line item to the
//! order, to its branch bucket, and to its per-branch item group. The result
//! is frozen once the pass completes; nothing mutates it afterwards.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};

use branchline_domain::{
    Branch, BranchResolution, DaySchedule, LineItem, LineItemRef, Order, PickupTable,
    normalize_phone, resolve_branch,
};

use crate::error::CoreError;
use crate::ingest::{
    ExportHeader, OrderExport, RawLineItemRow, parse_money, parse_optional_money, parse_quantity,
};

/// Name of the synthetic column prepended to line-item manifests.
pub const BRANCH_COLUMN: &str = "Branch";

/// Per-branch line-item buckets in a fixed emission order.
///
/// Buckets are pre-seeded from the branch roster plus the two resolution
/// sentinels, so a branch that receives nothing still appears (empty) in
/// every per-branch view. Sequence plus index instead of a bare map keeps the
/// emission order explicit and reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchBuckets {
    buckets: Vec<(Branch, Vec<LineItemRef>)>,
    index: HashMap<Branch, usize>,
}

impl BranchBuckets {
    fn new() -> Self {
        Self::default()
    }

    fn seed(&mut self, branch: Branch) {
        if !self.index.contains_key(&branch) {
            self.index.insert(branch.clone(), self.buckets.len());
            self.buckets.push((branch, Vec::new()));
        }
    }

    fn push(&mut self, branch: &Branch, item_ref: LineItemRef) {
        if let Some(&slot) = self.index.get(branch) {
            self.buckets[slot].1.push(item_ref);
        } else {
            self.index.insert(branch.clone(), self.buckets.len());
            self.buckets.push((branch.clone(), vec![item_ref]));
        }
    }

    /// Buckets in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (&Branch, &[LineItemRef])> {
        self.buckets
            .iter()
            .map(|(branch, items)| (branch, items.as_slice()))
    }

    /// Branches in emission order.
    pub fn branches(&self) -> impl Iterator<Item = &Branch> {
        self.buckets.iter().map(|(branch, _)| branch)
    }

    /// One bucket's items, if the branch is known.
    #[must_use]
    pub fn get(&self, branch: &Branch) -> Option<&[LineItemRef]> {
        self.index
            .get(branch)
            .map(|&slot| self.buckets[slot].1.as_slice())
    }

    /// Number of buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether no buckets exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// All line items sharing one item name within one branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemGroup {
    /// The owning branch.
    pub branch: Branch,
    /// The shared item name.
    pub item_name: String,
    /// Contributing line items in encounter order.
    pub items: Vec<LineItemRef>,
}

/// Per-(branch, item name) groups in first-encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemGroups {
    groups: Vec<ItemGroup>,
    index: HashMap<(Branch, String), usize>,
}

impl ItemGroups {
    fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, branch: Branch, item_name: String, item_ref: LineItemRef) {
        let key: (Branch, String) = (branch, item_name);
        if let Some(&slot) = self.index.get(&key) {
            self.groups[slot].items.push(item_ref);
        } else {
            self.index.insert(key.clone(), self.groups.len());
            let (branch, item_name) = key;
            self.groups.push(ItemGroup {
                branch,
                item_name,
                items: vec![item_ref],
            });
        }
    }

    /// All groups in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemGroup> {
        self.groups.iter()
    }

    /// One branch's groups, keeping first-encounter order.
    pub fn for_branch<'a>(&'a self, branch: &'a Branch) -> impl Iterator<Item = &'a ItemGroup> {
        self.groups.iter().filter(move |group| &group.branch == branch)
    }
}

/// The frozen result of one aggregation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    /// Orders keyed (and iterated) by ascending order number.
    pub orders: BTreeMap<String, Order>,
    /// Per-branch line-item buckets.
    pub buckets: BranchBuckets,
    /// Per-(branch, item name) groups.
    pub groups: ItemGroups,
    /// Manifest column names: [`BRANCH_COLUMN`] followed by the export
    /// header.
    pub columns: Vec<String>,
    /// Number of ingested data rows.
    pub row_count: usize,
}

impl Aggregation {
    /// Resolves a line-item reference against the owning order.
    #[must_use]
    pub fn line_item(&self, item_ref: &LineItemRef) -> Option<&LineItem> {
        self.orders
            .get(&item_ref.order_number)
            .and_then(|order| order.line_items.get(item_ref.item_index))
    }
}

/// Runs the aggregation pass over a parsed export.
///
/// # Errors
///
/// Returns [`CoreError::InvalidNumber`] for the first malformed numeric
/// field, identifying its row and column. No partial result is produced.
pub fn aggregate_orders(
    export: OrderExport,
    schedule: &DaySchedule,
    pickups: &PickupTable,
) -> Result<Aggregation, CoreError> {
    let OrderExport { header, rows } = export;

    let mut orders: BTreeMap<String, Order> = BTreeMap::new();
    let mut buckets: BranchBuckets = BranchBuckets::new();
    for branch_name in schedule.branches() {
        buckets.seed(Branch::Named(branch_name.clone()));
    }
    buckets.seed(Branch::UnknownCity);
    buckets.seed(Branch::NotScheduled);

    let mut groups: ItemGroups = ItemGroups::new();
    let row_count: usize = rows.len();

    for row in rows {
        let order_number: String = row.field(&header, "Name").to_string();

        let order: &mut Order = match orders.entry(order_number.clone()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let order: Order = build_order(&row, &header, schedule, pickups)?;
                entry.insert(order)
            }
        };

        let item_name: String = row.field(&header, "Lineitem name").to_string();
        let price: f64 = parse_money(&row, &header, "Lineitem price")?;
        let quantity: u32 = parse_quantity(&row, &header, "Lineitem quantity")?;
        let taxes: Option<f64> = parse_optional_money(&row, &header, "Taxes")?;
        let total: Option<f64> = parse_optional_money(&row, &header, "Total")?;
        let branch: Branch = order.branch.clone();

        let item_ref: LineItemRef = LineItemRef {
            order_number: order_number.clone(),
            item_index: order.line_items.len(),
        };
        let item: LineItem = LineItem::new(
            order_number,
            item_name.clone(),
            price,
            quantity,
            branch.clone(),
            taxes,
            total,
            row.into_values(),
        );
        order.line_items.push(item);

        buckets.push(&branch, item_ref.clone());
        groups.push(branch, item_name, item_ref);
    }

    let mut columns: Vec<String> = Vec::with_capacity(header.columns().len() + 1);
    columns.push(BRANCH_COLUMN.to_string());
    columns.extend(header.columns().iter().cloned());

    Ok(Aggregation {
        orders,
        buckets,
        groups,
        columns,
        row_count,
    })
}

/// Builds an order from its first row. Order-level fields freeze here.
fn build_order(
    row: &RawLineItemRow,
    header: &ExportHeader,
    schedule: &DaySchedule,
    pickups: &PickupTable,
) -> Result<Order, CoreError> {
    let resolution: BranchResolution = resolve_branch(
        row.field(header, "Shipping Method"),
        row.field(header, "Shipping Street"),
        row.field(header, "Shipping City"),
        schedule,
        pickups,
    );

    Ok(Order {
        order_number: row.field(header, "Name").to_string(),
        fulfillment_status: row.field(header, "Fulfillment Status").to_string(),
        shipping_name: row.field(header, "Shipping Name").to_string(),
        shipping_phone: normalize_phone(row.field(header, "Shipping Phone")),
        shipping_street: resolution.shipping_street,
        shipping_city: resolution.shipping_city,
        shipping_method: resolution.shipping_method,
        notes: row.field(header, "Notes").to_string(),
        taxes: parse_money(row, header, "Taxes")?,
        shipping: parse_money(row, header, "Shipping")?,
        total: parse_money(row, header, "Total")?,
        branch: resolution.branch,
        pickup_point: resolution.pickup_point,
        line_items: Vec::new(),
        totals: None,
    })
}
