//! Field metadata for card attributes.
//!
//! The filter and sort engines never index a record dynamically by
//! string key. Instead, `Field` is a closed enumeration of the
//! filterable attributes and `CardRecord::field` is the typed
//! accessor, returning a tagged `FieldValue`. Ill-typed
//! operator/field pairings are rejected when a filter is constructed,
//! not discovered at evaluation time.
//!
//! `flavor_text` and `image` are display-only and deliberately absent
//! from the enumeration.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::record::CardRecord;

/// A filterable card attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// Card name.
    Name,
    /// Copy count.
    Count,
    /// Civilization.
    Civilization,
    /// Card type.
    Type,
    /// Race line.
    Race,
    /// Rules text.
    Text,
    /// Mana cost.
    ManaCost,
    /// Creature power.
    Power,
}

/// The value kind a field carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    /// String-valued field.
    Text,
    /// Integer-valued field.
    Int,
}

impl Field {
    /// Every filterable field, in display order.
    pub const ALL: [Field; 8] = [
        Field::Name,
        Field::Count,
        Field::Civilization,
        Field::Type,
        Field::Race,
        Field::Text,
        Field::ManaCost,
        Field::Power,
    ];

    /// The wire key for this field.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Count => "count",
            Field::Civilization => "civilization",
            Field::Type => "type",
            Field::Race => "race",
            Field::Text => "text",
            Field::ManaCost => "manaCost",
            Field::Power => "power",
        }
    }

    /// The display label for this field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Count => "Count",
            Field::Civilization => "Civilization",
            Field::Type => "Type",
            Field::Race => "Race",
            Field::Text => "Text",
            Field::ManaCost => "Mana Cost",
            Field::Power => "Power",
        }
    }

    /// The kind of value this field carries.
    #[must_use]
    pub const fn kind(self) -> FieldKind {
        match self {
            Field::Name | Field::Civilization | Field::Type | Field::Race | Field::Text => {
                FieldKind::Text
            }
            Field::Count | Field::ManaCost | Field::Power => FieldKind::Int,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A field value extracted from a record.
///
/// Values of the same kind order naturally (numeric for `Int`,
/// lexicographic for `Text`); values of different kinds have no
/// ordering, which `partial_cmp` reports as `None`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldValue<'a> {
    /// Integer value.
    Int(i64),
    /// String value.
    Text(&'a str),
}

impl<'a> FieldValue<'a> {
    /// Get as integer if this is an `Int` value.
    #[must_use]
    pub fn as_int(self) -> Option<i64> {
        match self {
            FieldValue::Int(v) => Some(v),
            _ => None,
        }
    }

    /// Get as string if this is a `Text` value.
    #[must_use]
    pub fn as_text(self) -> Option<&'a str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The kind of this value.
    #[must_use]
    pub fn kind(self) -> FieldKind {
        match self {
            FieldValue::Int(_) => FieldKind::Int,
            FieldValue::Text(_) => FieldKind::Text,
        }
    }
}

impl PartialOrd for FieldValue<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (FieldValue::Int(a), FieldValue::Int(b)) => Some(a.cmp(b)),
            (FieldValue::Text(a), FieldValue::Text(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl CardRecord {
    /// Extract the value of a field from this record.
    ///
    /// ```
    /// use card_binder::cards::{CardRecord, Field, FieldValue};
    ///
    /// let card = CardRecord::new("Fire Bird").with_mana_cost(2);
    /// assert_eq!(card.field(Field::ManaCost), FieldValue::Int(2));
    /// assert_eq!(card.field(Field::Name), FieldValue::Text("Fire Bird"));
    /// ```
    #[must_use]
    pub fn field(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Name => FieldValue::Text(&self.name),
            Field::Count => FieldValue::Int(self.count),
            Field::Civilization => FieldValue::Text(&self.civilization),
            Field::Type => FieldValue::Text(&self.card_type),
            Field::Race => FieldValue::Text(&self.race),
            Field::Text => FieldValue::Text(&self.text),
            Field::ManaCost => FieldValue::Int(self.mana_cost),
            Field::Power => FieldValue::Int(self.power),
        }
    }
}
