//! Natural-order comparison of records by a single field.

use std::cmp::Ordering;

use crate::cards::{CardRecord, Field};

/// The sort-eligible fields, in display order.
///
/// A reduced subset of the filterable fields: the sort dropdown does
/// not offer type, race, or rules text.
pub const SORT_FIELDS: [Field; 5] = [
    Field::Name,
    Field::Count,
    Field::Civilization,
    Field::ManaCost,
    Field::Power,
];

/// Compare two records by a field in natural ascending order.
///
/// Numeric fields compare numerically, string fields
/// lexicographically.
#[must_use]
pub fn compare(field: Field, a: &CardRecord, b: &CardRecord) -> Ordering {
    // Both values come from the same field, so the kinds always agree.
    a.field(field)
        .partial_cmp(&b.field(field))
        .unwrap_or(Ordering::Equal)
}

/// Sort records by a field in natural ascending order.
///
/// The sort is stable: records with equal field values keep their
/// input order.
///
/// ## Example
///
/// ```
/// use card_binder::cards::{CardRecord, Field};
/// use card_binder::sort::sort_cards;
///
/// let mut cards = vec![
///     CardRecord::new("Fire Bird"),
///     CardRecord::new("Aqua Surfer"),
/// ];
///
/// sort_cards(Field::Name, &mut cards);
/// assert_eq!(cards[0].name, "Aqua Surfer");
/// ```
pub fn sort_cards(field: Field, cards: &mut [CardRecord]) {
    cards.sort_by(|a, b| compare(field, a, b));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_numeric() {
        let a = CardRecord::new("A").with_mana_cost(2);
        let b = CardRecord::new("B").with_mana_cost(5);
        assert_eq!(compare(Field::ManaCost, &a, &b), Ordering::Less);
        assert_eq!(compare(Field::ManaCost, &b, &a), Ordering::Greater);
        assert_eq!(compare(Field::ManaCost, &a, &a), Ordering::Equal);
    }

    #[test]
    fn test_compare_lexicographic() {
        let a = CardRecord::new("Aqua Surfer");
        let b = CardRecord::new("Fire Bird");
        assert_eq!(compare(Field::Name, &a, &b), Ordering::Less);
    }

    #[test]
    fn test_sort_ascending_by_name() {
        let mut cards = vec![
            CardRecord::new("Gigantic Arm"),
            CardRecord::new("Aqua Surfer"),
            CardRecord::new("Fire Bird"),
        ];
        sort_cards(Field::Name, &mut cards);
        let names: Vec<_> = cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Aqua Surfer", "Fire Bird", "Gigantic Arm"]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut cards = vec![
            CardRecord::new("A").with_power(3000),
            CardRecord::new("B").with_power(3000),
            CardRecord::new("C").with_power(1000),
        ];
        sort_cards(Field::Power, &mut cards);
        let names: Vec<_> = cards.iter().map(|c| c.name.as_str()).collect();
        // C sorts first; A and B tie and keep their input order.
        assert_eq!(names, ["C", "A", "B"]);
    }

    #[test]
    fn test_changing_key_resorts() {
        let mut cards = vec![
            CardRecord::new("Gigantic Arm").with_mana_cost(5),
            CardRecord::new("Aqua Surfer").with_mana_cost(2),
        ];
        sort_cards(Field::Name, &mut cards);
        assert_eq!(cards[0].name, "Aqua Surfer");

        sort_cards(Field::ManaCost, &mut cards);
        assert_eq!(cards[0].name, "Aqua Surfer");

        sort_cards(Field::Count, &mut cards);
        // Equal counts: previous order preserved.
        assert_eq!(cards[0].name, "Aqua Surfer");
    }

    #[test]
    fn test_sort_fields_are_sort_eligible() {
        assert_eq!(SORT_FIELDS.len(), 5);
        assert!(!SORT_FIELDS.contains(&Field::Text));
        assert!(!SORT_FIELDS.contains(&Field::Race));
        assert!(!SORT_FIELDS.contains(&Field::Type));
    }
}
