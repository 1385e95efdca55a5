// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashMap;
use time::Weekday;

use crate::error::DomainError;

/// Parses a weekday from its case-insensitive English name.
///
/// # Errors
///
/// Returns [`DomainError::InvalidWeekday`] if the name is not a weekday.
pub fn weekday_from_name(name: &str) -> Result<Weekday, DomainError> {
    match name.to_lowercase().as_str() {
        "monday" => Ok(Weekday::Monday),
        "tuesday" => Ok(Weekday::Tuesday),
        "wednesday" => Ok(Weekday::Wednesday),
        "thursday" => Ok(Weekday::Thursday),
        "friday" => Ok(Weekday::Friday),
        "saturday" => Ok(Weekday::Saturday),
        "sunday" => Ok(Weekday::Sunday),
        _ => Err(DomainError::InvalidWeekday(name.to_string())),
    }
}

/// The city-to-branch mapping in force for one weekday.
///
/// Cities are keyed uppercased. A city may be present with an empty branch
/// cell: that is a distinct state from the city being absent, and branch
/// resolution reports the two differently.
///
/// The schedule also carries the branch roster: every distinct branch name in
/// table row order, extended by pickup-location branches. The roster fixes the
/// emission order of per-branch views and guarantees a bucket exists for a
/// branch even on a day it receives nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    weekday: Weekday,
    entries: HashMap<String, String>,
    branches: Vec<String>,
}

impl DaySchedule {
    /// Creates an empty schedule for a weekday.
    #[must_use]
    pub fn new(weekday: Weekday) -> Self {
        Self {
            weekday,
            entries: HashMap::new(),
            branches: Vec::new(),
        }
    }

    /// The weekday this schedule applies to.
    #[must_use]
    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Records one schedule row: a city and its branch cell for the weekday.
    ///
    /// The city key is uppercased. An empty cell is kept as-is; it marks the
    /// city as known but not served on this weekday. Non-empty branch names
    /// join the roster on first sight.
    pub fn insert(&mut self, city: &str, branch_cell: &str) {
        if !branch_cell.is_empty() {
            self.register_branch(branch_cell);
        }
        self.entries
            .insert(city.to_uppercase(), branch_cell.to_string());
    }

    /// Adds a branch name to the roster if not already present.
    pub fn register_branch(&mut self, branch: &str) {
        if !self.branches.iter().any(|known| known == branch) {
            self.branches.push(branch.to_string());
        }
    }

    /// The branch cell for a city, looked up case-insensitively.
    ///
    /// `None` means the city is absent from the schedule entirely;
    /// `Some("")` means the city is present but unserved on this weekday.
    #[must_use]
    pub fn branch_cell(&self, city: &str) -> Option<&str> {
        self.entries.get(&city.to_uppercase()).map(String::as_str)
    }

    /// The branch roster in registration order.
    #[must_use]
    pub fn branches(&self) -> &[String] {
        &self.branches
    }

    /// The cities a branch serves on this weekday, sorted for stable logs.
    #[must_use]
    pub fn cities_for_branch(&self, branch: &str) -> Vec<&str> {
        let mut cities: Vec<&str> = self
            .entries
            .iter()
            .filter(|(_, cell)| cell.as_str() == branch)
            .map(|(city, _)| city.as_str())
            .collect();
        cities.sort_unstable();
        cities
    }

    /// Number of scheduled cities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schedule has no cities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One named pickup point, keyed by a shipping-method token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickupLocation {
    /// The token matched by substring against an order's shipping method.
    pub shipping_method: String,
    /// The branch that prepares pickup orders for this location.
    pub branch: String,
    /// The pickup point's street address.
    pub street_address: String,
    /// The pickup point's city.
    pub city: String,
}

/// The ordered pickup-location override table.
///
/// Row order is significant: the first token contained in an order's shipping
/// method wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickupTable {
    locations: Vec<PickupLocation>,
}

impl PickupTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            locations: Vec::new(),
        }
    }

    /// Appends a location; later entries have lower match priority.
    pub fn push(&mut self, location: PickupLocation) {
        self.locations.push(location);
    }

    /// Finds the first location whose token is a substring of the shipping
    /// method.
    #[must_use]
    pub fn match_shipping_method(&self, shipping_method: &str) -> Option<&PickupLocation> {
        self.locations
            .iter()
            .find(|location| shipping_method.contains(&location.shipping_method))
    }

    /// The locations in priority order.
    #[must_use]
    pub fn locations(&self) -> &[PickupLocation] {
        &self.locations
    }

    /// Number of locations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether the table has no locations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
