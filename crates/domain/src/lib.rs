// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod phone;
mod resolve;
mod schedule;
mod types;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use phone::normalize_phone;
pub use resolve::{BranchResolution, resolve_branch};
pub use schedule::{DaySchedule, PickupLocation, PickupTable, weekday_from_name};
pub use types::{
    Branch, DELIVERY_FEE_ITEM_NAME, DeliveryLocation, ItemNote, ItemSummary, LineItem, LineItemRef,
    Order, OrderTotals, TIP_ITEM_NAME, is_food_item_name,
};
