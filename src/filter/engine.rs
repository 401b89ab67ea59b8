//! Union-filter evaluation.
//!
//! The active query combines its applied filters with logical **OR**:
//! a card is included if it matches *any* filter, not all of them.
//! Callers wanting AND semantics pre-intersect filter sets themselves.
//!
//! The empty filter set is a vacuous OR over zero predicates and
//! yields the empty result - not the unfiltered list. The caller is
//! responsible for distinguishing "no filters active, show
//! everything" (skip filtering entirely) from "filters active but
//! none match".

use crate::cards::CardRecord;

use super::applied::AppliedFilter;

/// Check whether a record matches any of the applied filters.
///
/// An empty filter slice matches nothing.
#[must_use]
pub fn matches_any(filters: &[AppliedFilter], card: &CardRecord) -> bool {
    filters.iter().any(|filter| filter.matches(card))
}

/// Produce the filtered view of a card list under union semantics.
///
/// Input order is preserved, which is what the stable sort relies on
/// downstream.
///
/// ## Example
///
/// ```
/// use card_binder::cards::{CardRecord, Field};
/// use card_binder::filter::{apply_all, AppliedFilter, Operator};
///
/// let cards = vec![
///     CardRecord::new("Fire Bird").with_mana_cost(2),
///     CardRecord::new("Gigantic Arm").with_mana_cost(5),
/// ];
///
/// let cheap = AppliedFilter::new(Field::ManaCost, Operator::Le, "2").unwrap();
/// let view = apply_all(&[cheap], &cards);
///
/// assert_eq!(view.len(), 1);
/// assert_eq!(view[0].name, "Fire Bird");
/// ```
#[must_use]
pub fn apply_all(filters: &[AppliedFilter], cards: &[CardRecord]) -> Vec<CardRecord> {
    cards
        .iter()
        .filter(|card| matches_any(filters, card))
        .cloned()
        .collect()
}
