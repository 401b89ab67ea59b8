//! The active filter set.
//!
//! `FilterSet` is the insertion-ordered collection of applied filters
//! forming the active query. Duplicates are permitted; removing a
//! filter removes exactly one entry by position, the way a filter
//! chip is dismissed from the filter bar.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardRecord;

use super::applied::AppliedFilter;
use super::engine::apply_all;

/// Insertion-ordered set of applied filters.
///
/// SmallVec optimizes for the typical handful of active filters
/// without heap allocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    filters: SmallVec<[AppliedFilter; 4]>,
}

impl FilterSet {
    /// Create an empty filter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filter to the end of the set.
    pub fn push(&mut self, filter: AppliedFilter) {
        self.filters.push(filter);
    }

    /// Remove and return the filter at `index`.
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> AppliedFilter {
        self.filters.remove(index)
    }

    /// Remove every filter.
    pub fn clear(&mut self) {
        self.filters.clear();
    }

    /// Number of applied filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Check if no filters are applied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Iterate over filters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &AppliedFilter> {
        self.filters.iter()
    }

    /// The filters as a slice, in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[AppliedFilter] {
        &self.filters
    }

    /// Produce the filtered view of `cards` under union semantics.
    ///
    /// An empty set yields an empty view; see `apply_all`.
    #[must_use]
    pub fn apply(&self, cards: &[CardRecord]) -> Vec<CardRecord> {
        apply_all(&self.filters, cards)
    }
}
