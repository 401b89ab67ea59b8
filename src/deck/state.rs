//! Decks: named, identified sub-collections of cards.
//!
//! A `Deck` maps card names to records carrying their in-deck count.
//! The invariant is that every stored count is >= 1: an entry whose
//! count would drop to zero is removed, never stored.
//!
//! The card map is an `im::HashMap`, so cloning a deck (to snapshot
//! it around a save, or to park it as a pending load) is O(1) with
//! structural sharing.

use im::HashMap as ImHashMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cards::{CardRecord, Delta};

/// Opaque unique deck identifier, generated at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeckId(Uuid);

impl DeckId {
    /// Generate a fresh unique identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID.
    #[must_use]
    pub const fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for DeckId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DeckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named sub-collection of cards with independent in-deck counts.
///
/// ## Example
///
/// ```
/// use card_binder::cards::{CardRecord, Delta};
/// use card_binder::deck::Deck;
///
/// let surfer = CardRecord::new("Aqua Surfer").with_count(4);
///
/// let mut deck = Deck::new();
/// deck.apply_delta(&surfer, Delta::Increment);
/// deck.apply_delta(&surfer, Delta::Increment);
///
/// // In-deck count is independent of the catalog count.
/// assert_eq!(deck.get("Aqua Surfer").unwrap().count, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// Unique identifier, stable across renames and saves.
    pub id: DeckId,

    /// User-editable name. Not required to be unique across decks.
    pub name: String,

    /// Entries keyed by card name. Every count is >= 1.
    cards: ImHashMap<String, CardRecord>,
}

impl Deck {
    /// Create an empty deck with a freshly generated id and empty name.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: DeckId::new(),
            name: String::new(),
            cards: ImHashMap::new(),
        }
    }

    /// Look up an entry by card name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardRecord> {
        self.cards.get(name)
    }

    /// Check if a card is in the deck.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.cards.contains_key(name)
    }

    /// Number of distinct entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Total copies across all entries.
    #[must_use]
    pub fn total_count(&self) -> i64 {
        self.cards.values().map(|entry| entry.count).sum()
    }

    /// Iterate over entries. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = &CardRecord> {
        self.cards.values()
    }

    /// Owned snapshot of the entries, for the display boundary.
    ///
    /// Order is unspecified; callers sort by the active key.
    #[must_use]
    pub fn records(&self) -> Vec<CardRecord> {
        self.cards.values().cloned().collect()
    }

    /// Apply a count delta for `card`, returning whether the deck
    /// changed.
    ///
    /// - Increment, card absent: insert an entry with count 1.
    /// - Increment, card present: merge by bumping the entry's count.
    /// - Decrement to a positive count: store the reduced count.
    /// - Decrement to zero: remove the entry entirely.
    /// - Decrement, card absent: no-op (`false`), not an error.
    pub fn apply_delta(&mut self, card: &CardRecord, delta: Delta) -> bool {
        match delta {
            Delta::Increment => {
                self.cards
                    .entry(card.name.clone())
                    .and_modify(|entry| entry.count += 1)
                    .or_insert_with(|| {
                        let mut entry = card.clone();
                        entry.count = 1;
                        entry
                    });
                true
            }
            Delta::Decrement => match self.cards.remove(&card.name) {
                Some(mut entry) => {
                    entry.count -= 1;
                    if entry.count > 0 {
                        self.cards.insert(card.name.clone(), entry);
                    }
                    true
                }
                None => false,
            },
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
