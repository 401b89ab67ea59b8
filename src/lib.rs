//! # card-binder
//!
//! The filter/sort/collection-state core of a trading-card catalog
//! manager.
//!
//! ## Design Principles
//!
//! 1. **Pure Core**: Every entry point is a synchronous function over
//!    in-memory values. Fetching cards and persisting decks belong to
//!    the surrounding layers; the core is handed resolved data and
//!    hands back views and mutated decks.
//!
//! 2. **Validate at Construction**: Filters are checked against the
//!    static per-field definitions when they are built. Evaluation is
//!    total - a user-composed query can never crash the view.
//!
//! 3. **Union Semantics**: Applied filters combine with logical OR.
//!    A card is in the filtered view if it matches any filter; the
//!    empty filter set matches nothing.
//!
//! ## Architecture
//!
//! - **Typed Field Access**: Records are never indexed by string key.
//!   `Field` + `CardRecord::field` form a closed, typed accessor.
//!
//! - **Persistent Deck Maps**: Decks use `im-rs` maps, so snapshots
//!   around saves and pending loads clone in O(1).
//!
//! - **Caller-Owned Confirmation**: Discarding unsaved work requires
//!   an explicit two-phase handshake; the core never prompts.
//!
//! ## Modules
//!
//! - `cards`: Card records, field metadata, free-standing catalog
//! - `filter`: Predicate engine - operators, definitions, applied
//!   filters, union evaluation
//! - `sort`: Single-key stable comparator
//! - `deck`: Deck state machine - deltas, rename, save/load handshake

pub mod cards;
pub mod deck;
pub mod filter;
pub mod sort;

// Re-export commonly used types
pub use crate::cards::{CardRecord, Catalog, Delta, Field, FieldKind, FieldValue};

pub use crate::filter::{
    apply_all, definition, matches_any, AppliedFilter, FilterDefinition, FilterError, FilterSet,
    FilterValue, Operator, FILTERS,
};

pub use crate::sort::{compare, sort_cards, SORT_FIELDS};

pub use crate::deck::{Deck, DeckId, DeckSession, LoadDecision};
