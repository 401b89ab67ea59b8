//! Property tests for the filter, sort, and delta laws.

use proptest::prelude::*;

use card_binder::cards::{Catalog, CardRecord, Delta, Field};
use card_binder::deck::Deck;
use card_binder::filter::{apply_all, AppliedFilter, Operator};
use card_binder::sort::sort_cards;

const CIVILIZATIONS: [&str; 5] = ["Light", "Darkness", "Fire", "Water", "Nature"];

fn arb_card() -> impl Strategy<Value = CardRecord> {
    (
        "[A-E][a-z]{2,8}",
        0usize..CIVILIZATIONS.len(),
        0i64..10,
        0i64..10000,
        0i64..6,
    )
        .prop_map(|(name, civ, mana_cost, power, count)| {
            CardRecord::new(name)
                .with_civilization(CIVILIZATIONS[civ])
                .with_mana_cost(mana_cost)
                .with_power(power)
                .with_count(count)
        })
}

fn arb_filter() -> impl Strategy<Value = AppliedFilter> {
    prop_oneof![
        (0i64..10).prop_map(|n| {
            AppliedFilter::new(Field::ManaCost, Operator::Le, &n.to_string()).unwrap()
        }),
        (0i64..10).prop_map(|n| {
            AppliedFilter::new(Field::ManaCost, Operator::Eq, &n.to_string()).unwrap()
        }),
        (0i64..10000).prop_map(|n| {
            AppliedFilter::new(Field::Power, Operator::Ge, &n.to_string()).unwrap()
        }),
        (0usize..CIVILIZATIONS.len()).prop_map(|i| {
            AppliedFilter::new(Field::Civilization, Operator::Eq, CIVILIZATIONS[i]).unwrap()
        }),
    ]
}

proptest! {
    /// The empty filter set yields the empty view for any card list.
    #[test]
    fn empty_filter_set_yields_empty(cards in prop::collection::vec(arb_card(), 0..20)) {
        prop_assert!(apply_all(&[], &cards).is_empty());
    }

    /// A card is in a singleton view exactly when the compiled
    /// predicate accepts it.
    #[test]
    fn singleton_view_matches_predicate(
        filter in arb_filter(),
        cards in prop::collection::vec(arb_card(), 0..20),
    ) {
        let view = apply_all(std::slice::from_ref(&filter), &cards);
        // Matching is a function of the record's value, so equal
        // records always match alike and membership is exact even
        // with generated duplicates.
        for card in &cards {
            prop_assert_eq!(view.contains(card), filter.matches(card));
        }
        for card in &view {
            prop_assert!(filter.matches(card));
        }
    }

    /// The combined view equals the union of the singleton views.
    #[test]
    fn union_semantics(
        filters in prop::collection::vec(arb_filter(), 1..4),
        cards in prop::collection::vec(arb_card(), 0..20),
    ) {
        let combined = apply_all(&filters, &cards);

        let mut union: Vec<CardRecord> = Vec::new();
        for card in &cards {
            if filters.iter().any(|f| f.matches(card)) {
                union.push(card.clone());
            }
        }

        prop_assert_eq!(combined, union);
    }

    /// Sorting preserves the multiset of records and orders the key.
    #[test]
    fn sort_is_a_permutation_in_order(
        mut cards in prop::collection::vec(arb_card(), 0..20),
    ) {
        let original = cards.clone();
        sort_cards(Field::ManaCost, &mut cards);

        prop_assert_eq!(cards.len(), original.len());
        for pair in cards.windows(2) {
            prop_assert!(pair[0].mana_cost <= pair[1].mana_cost);
        }
        for card in &original {
            prop_assert!(cards.contains(card));
        }
    }

    /// After n increments and m decrements of one card, the entry
    /// holds max(n - m, 0) copies - and is absent rather than stored
    /// at zero.
    #[test]
    fn deck_delta_counts(card in arb_card(), ups in 0u8..12, downs in 0u8..12) {
        let mut deck = Deck::new();
        for _ in 0..ups {
            deck.apply_delta(&card, Delta::Increment);
        }
        for _ in 0..downs {
            deck.apply_delta(&card, Delta::Decrement);
        }

        let expected = i64::from(ups) - i64::from(downs);
        if expected > 0 {
            prop_assert_eq!(deck.get(&card.name).map(|e| e.count), Some(expected));
        } else {
            prop_assert!(!deck.contains(&card.name));
            prop_assert!(deck.is_empty());
        }
    }

    /// Deck entries never store a non-positive count, whatever the
    /// delta sequence.
    #[test]
    fn deck_counts_always_positive(
        card in arb_card(),
        deltas in prop::collection::vec(prop::bool::ANY, 0..40),
    ) {
        let mut deck = Deck::new();
        for up in deltas {
            let delta = if up { Delta::Increment } else { Delta::Decrement };
            deck.apply_delta(&card, delta);
            for entry in deck.iter() {
                prop_assert!(entry.count >= 1);
            }
        }
    }

    /// Catalog counts never drop below zero, whatever the delta
    /// sequence, and the record always survives.
    #[test]
    fn catalog_counts_floor_at_zero(
        card in arb_card(),
        deltas in prop::collection::vec(prop::bool::ANY, 0..40),
    ) {
        let name = card.name.clone();
        let mut catalog = Catalog::from_records(vec![card]);

        for up in deltas {
            let delta = if up { Delta::Increment } else { Delta::Decrement };
            let count = catalog.apply_delta(&name, delta);
            prop_assert!(count.unwrap_or(0) >= 0);
        }

        prop_assert!(catalog.contains(&name));
        prop_assert_eq!(catalog.len(), 1);
    }
}
