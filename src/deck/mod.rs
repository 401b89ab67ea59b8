//! Deck collection state machine.
//!
//! ## Key Types
//!
//! - `Deck`: Named, identified sub-collection of (card, count) entries
//! - `DeckId`: Opaque unique token generated at creation
//! - `DeckSession`: The active deck, its unsaved-changes flag, and
//!   the two-phase load confirmation
//! - `LoadDecision`: Whether a load applied or needs confirmation
//!
//! ## Count Invariant
//!
//! A deck never holds an entry with a non-positive count. Deltas that
//! would drop a count to zero remove the entry; decrementing an
//! absent card is a silent no-op.

pub mod session;
pub mod state;

pub use session::{DeckSession, LoadDecision};
pub use state::{Deck, DeckId};
