//! Sort comparator: single-key natural ordering of card records.
//!
//! Sorting is the finishing step of the view pipeline - it runs over
//! the already-filtered list, and changing the sort key re-sorts
//! without re-filtering.

pub mod comparator;

pub use comparator::{compare, sort_cards, SORT_FIELDS};
