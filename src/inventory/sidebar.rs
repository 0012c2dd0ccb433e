//! Filter sidebar state with debounced change notification.

use std::time::Duration;

use crate::debounce::Debouncer;

use super::filter::{FilterOptions, ListingFilter};
use super::vehicle::Vehicle;

/// Holds the filter being edited and notifies an observer once edits settle.
pub struct FilterSidebar {
    filter: ListingFilter,
    options: FilterOptions,
    debouncer: Debouncer<ListingFilter>,
}

impl FilterSidebar {
    /// Create a sidebar for an inventory.
    ///
    /// `on_change` runs on the debounce worker with the settled filter.
    pub fn new<F>(vehicles: &[Vehicle], delay: Duration, on_change: F) -> Self
    where
        F: FnMut(ListingFilter) + Send + 'static,
    {
        Self {
            filter: ListingFilter::default(),
            options: FilterOptions::derive(vehicles),
            debouncer: Debouncer::new(delay, on_change),
        }
    }

    /// The filter as edited so far.
    pub fn filter(&self) -> &ListingFilter {
        &self.filter
    }

    /// Choices offered for each criterion.
    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Apply an edit and schedule notification.
    pub fn edit(&mut self, change: impl FnOnce(&mut ListingFilter)) {
        change(&mut self.filter);
        self.debouncer.push(self.filter.clone());
    }

    /// Clear every criterion and schedule notification.
    pub fn clear(&mut self) {
        self.edit(|filter| *filter = ListingFilter::default());
    }
}
