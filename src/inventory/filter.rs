//! Listing filters and the choices a filter sidebar offers.

use std::collections::BTreeSet;
use std::str::FromStr;

use super::vehicle::{Condition, Vehicle};

/// Result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Inventory order.
    #[default]
    Featured,
    PriceLowToHigh,
    PriceHighToLow,
    Newest,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "featured" => Ok(Self::Featured),
            "price" | "price-asc" => Ok(Self::PriceLowToHigh),
            "price-desc" => Ok(Self::PriceHighToLow),
            "year" | "newest" => Ok(Self::Newest),
            _ => Err(format!("unknown sort order: {}", s)),
        }
    }
}

/// Criteria for narrowing the inventory. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub make: Option<String>,
    pub body_type: Option<String>,
    pub fuel_type: Option<String>,
    pub condition: Option<Condition>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub min_year: Option<u16>,
    pub max_year: Option<u16>,
    /// Case-insensitive substring of make or model.
    pub search: Option<String>,
    pub sort: SortOrder,
}

impl ListingFilter {
    /// Whether a listing satisfies every set criterion.
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        eq_opt(&self.make, Some(&vehicle.make))
            && eq_opt(&self.body_type, vehicle.body_type.as_ref())
            && eq_opt(&self.fuel_type, vehicle.fuel_type.as_ref())
            && self.condition.is_none_or(|c| c == vehicle.condition)
            && self.min_price.is_none_or(|p| vehicle.price >= p)
            && self.max_price.is_none_or(|p| vehicle.price <= p)
            && self.min_year.is_none_or(|y| vehicle.year >= y)
            && self.max_year.is_none_or(|y| vehicle.year <= y)
            && self.matches_search(vehicle)
    }

    fn matches_search(&self, vehicle: &Vehicle) -> bool {
        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                vehicle.make.to_lowercase().contains(&term)
                    || vehicle.model.to_lowercase().contains(&term)
            }
        }
    }

    /// Matching listings in the requested order.
    pub fn apply<'a>(&self, vehicles: &'a [Vehicle]) -> Vec<&'a Vehicle> {
        let mut matched: Vec<&Vehicle> = vehicles.iter().filter(|v| self.matches(v)).collect();
        match self.sort {
            SortOrder::Featured => {}
            SortOrder::PriceLowToHigh => matched.sort_by_key(|v| v.price),
            SortOrder::PriceHighToLow => matched.sort_by_key(|v| std::cmp::Reverse(v.price)),
            SortOrder::Newest => matched.sort_by_key(|v| std::cmp::Reverse(v.year)),
        }
        matched
    }

    /// Whether no criterion is set.
    pub fn is_empty(&self) -> bool {
        let sort = self.sort;
        *self
            == Self {
                sort,
                ..Self::default()
            }
    }
}

fn eq_opt(wanted: &Option<String>, actual: Option<&String>) -> bool {
    match wanted {
        None => true,
        Some(w) => actual.is_some_and(|a| a.eq_ignore_ascii_case(w.trim())),
    }
}

/// Distinct values and bounds present in an inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub makes: Vec<String>,
    pub body_types: Vec<String>,
    pub fuel_types: Vec<String>,
    pub price_range: Option<(u64, u64)>,
    pub year_range: Option<(u16, u16)>,
}

impl FilterOptions {
    /// Collect sorted distinct values and min/max bounds.
    pub fn derive(vehicles: &[Vehicle]) -> Self {
        let makes: BTreeSet<_> = vehicles.iter().map(|v| v.make.clone()).collect();
        let body_types: BTreeSet<_> = vehicles.iter().filter_map(|v| v.body_type.clone()).collect();
        let fuel_types: BTreeSet<_> = vehicles.iter().filter_map(|v| v.fuel_type.clone()).collect();

        let price_range = bounds(vehicles.iter().map(|v| v.price));
        let year_range = bounds(vehicles.iter().map(|v| v.year));

        Self {
            makes: makes.into_iter().collect(),
            body_types: body_types.into_iter().collect(),
            fuel_types: fuel_types.into_iter().collect(),
            price_range,
            year_range,
        }
    }
}

fn bounds<T: Ord + Copy>(values: impl Iterator<Item = T>) -> Option<(T, T)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
