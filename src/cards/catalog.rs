//! Catalog of free-standing card records.
//!
//! The `Catalog` holds the universal card list - every record the
//! user owns outside of any deck. It preserves the order records were
//! supplied in (display order, and the input order the stable sort
//! preserves on ties) and indexes them by name for lookup.
//!
//! The catalog is populated by an explicit initialization call with an
//! already-fetched record list; the core owns no load-on-start
//! behavior. Count updates use the same `Delta` vocabulary as decks,
//! but clamp at zero instead of pruning - a catalog record is never
//! removed by decrementing it.

use rustc_hash::FxHashMap;

use super::record::{CardRecord, Delta};

/// Ordered, name-indexed store of catalog records.
///
/// ## Example
///
/// ```
/// use card_binder::cards::{Catalog, CardRecord, Delta};
///
/// let mut catalog = Catalog::from_records(vec![
///     CardRecord::new("Fire Bird").with_count(1),
/// ]);
///
/// assert_eq!(catalog.apply_delta("Fire Bird", Delta::Increment), Some(2));
/// assert_eq!(catalog.get("Fire Bird").unwrap().count, 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    /// Records in supply order.
    cards: Vec<CardRecord>,

    /// Name index into `cards`.
    index: FxHashMap<String, usize>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from an already-fetched record list.
    ///
    /// Names are primary keys: a later record with a duplicate name
    /// replaces the earlier one in place, keeping its position.
    #[must_use]
    pub fn from_records(records: Vec<CardRecord>) -> Self {
        let mut catalog = Self::new();
        for record in records {
            catalog.insert(record);
        }
        catalog
    }

    /// Insert or replace a record.
    ///
    /// A record whose name is already present replaces the existing
    /// entry in place; a new name appends to the end.
    pub fn insert(&mut self, record: CardRecord) {
        if let Some(position) = self.index.get(&record.name).copied() {
            self.cards[position] = record;
        } else {
            self.index.insert(record.name.clone(), self.cards.len());
            self.cards.push(record);
        }
    }

    /// Look up a record by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardRecord> {
        self.index.get(name).map(|&position| &self.cards[position])
    }

    /// Check if a name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All records, in supply order.
    #[must_use]
    pub fn cards(&self) -> &[CardRecord] {
        &self.cards
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over records in supply order.
    pub fn iter(&self) -> impl Iterator<Item = &CardRecord> {
        self.cards.iter()
    }

    /// Apply a count delta to the named record.
    ///
    /// Counts clamp at zero and the record itself is never removed.
    /// Returns the new count, or `None` if the name is unknown (a
    /// silent no-op, not an error).
    pub fn apply_delta(&mut self, name: &str, delta: Delta) -> Option<i64> {
        let position = self.index.get(name).copied()?;
        let record = &mut self.cards[position];
        record.count = (record.count + delta.amount()).max(0);
        Some(record.count)
    }
}
