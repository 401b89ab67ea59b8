//! Card records - catalog entries.
//!
//! `CardRecord` is the immutable catalog entry supplied by the external
//! card source. `name` is unique and acts as the primary key everywhere
//! in the crate (catalog index, deck membership).
//!
//! The one field the core mutates is `count`: inside a deck it tracks
//! the in-deck copy count, in the free-standing catalog it tracks how
//! many copies the user owns. Everything else is read-only once a
//! record crosses the boundary.
//!
//! Serde names follow the catalog service's wire format (`manaCost`,
//! `flavorText`, `type`).

use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// All numeric attributes use `i64`.
///
/// ## Example
///
/// ```
/// use card_binder::cards::CardRecord;
///
/// let card = CardRecord::new("Aqua Surfer")
///     .with_civilization("Water")
///     .with_mana_cost(2)
///     .with_power(2000);
///
/// assert_eq!(card.name, "Aqua Surfer");
/// assert_eq!(card.mana_cost, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    /// Card name - unique, the primary key.
    pub name: String,

    /// Civilization (Light, Darkness, Fire, Water, Nature).
    pub civilization: String,

    /// Card type (Creature, Spell, Evolution Creature).
    #[serde(rename = "type")]
    pub card_type: String,

    /// Rules text.
    pub text: String,

    /// Race line.
    pub race: String,

    /// Mana cost to play the card.
    pub mana_cost: i64,

    /// Creature power (0 for spells).
    pub power: i64,

    /// Mana number when used as mana.
    pub mana_number: i64,

    /// Copy count - in-deck count inside a deck, owned count in the
    /// free-standing catalog.
    pub count: i64,

    /// Flavor text. Display-only, excluded from field iteration.
    pub flavor_text: String,

    /// Image URL. Display-only, excluded from field iteration.
    pub image: String,
}

impl CardRecord {
    /// Create a record with the given name and empty/zero attributes.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            civilization: String::new(),
            card_type: String::new(),
            text: String::new(),
            race: String::new(),
            mana_cost: 0,
            power: 0,
            mana_number: 0,
            count: 0,
            flavor_text: String::new(),
            image: String::new(),
        }
    }

    // === Builder methods ===

    /// Set the civilization (builder pattern).
    #[must_use]
    pub fn with_civilization(mut self, civilization: impl Into<String>) -> Self {
        self.civilization = civilization.into();
        self
    }

    /// Set the card type (builder pattern).
    #[must_use]
    pub fn with_card_type(mut self, card_type: impl Into<String>) -> Self {
        self.card_type = card_type.into();
        self
    }

    /// Set the rules text (builder pattern).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the race (builder pattern).
    #[must_use]
    pub fn with_race(mut self, race: impl Into<String>) -> Self {
        self.race = race.into();
        self
    }

    /// Set the mana cost (builder pattern).
    #[must_use]
    pub fn with_mana_cost(mut self, mana_cost: i64) -> Self {
        self.mana_cost = mana_cost;
        self
    }

    /// Set the power (builder pattern).
    #[must_use]
    pub fn with_power(mut self, power: i64) -> Self {
        self.power = power;
        self
    }

    /// Set the mana number (builder pattern).
    #[must_use]
    pub fn with_mana_number(mut self, mana_number: i64) -> Self {
        self.mana_number = mana_number;
        self
    }

    /// Set the copy count (builder pattern).
    #[must_use]
    pub fn with_count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    /// Set the flavor text (builder pattern).
    #[must_use]
    pub fn with_flavor_text(mut self, flavor_text: impl Into<String>) -> Self {
        self.flavor_text = flavor_text.into();
        self
    }

    /// Set the image URL (builder pattern).
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

/// A count-mutation request: the only two supported magnitudes.
///
/// The same vocabulary drives both deck entries (insert / merge /
/// prune semantics) and free-standing catalog counts (clamped at
/// zero, never removed).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Delta {
    /// Add one copy.
    Increment,
    /// Remove one copy.
    Decrement,
}

impl Delta {
    /// The signed magnitude of this delta.
    #[must_use]
    pub const fn amount(self) -> i64 {
        match self {
            Delta::Increment => 1,
            Delta::Decrement => -1,
        }
    }
}
