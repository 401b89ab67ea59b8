//! Deck editing session: mutations, the unsaved-changes flag, and
//! the load-confirmation handshake.
//!
//! `DeckSession` owns the active deck. Every mutation routes through
//! it so the unsaved-changes flag stays honest: set on each real
//! mutation, cleared only by an explicit save acknowledgement or by
//! completing a load.
//!
//! ## Loading
//!
//! Loading a different deck over unsaved work must not happen
//! silently. The session never prompts the user itself - it parks
//! the candidate and reports `ConfirmationRequired`; the caller owns
//! the actual prompt and resolves it with `confirm_load` or
//! `cancel_load`. Without unsaved changes the load applies
//! immediately.

use crate::cards::{CardRecord, Delta};

use super::state::Deck;

/// Outcome of a load request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadDecision {
    /// The candidate replaced the active deck.
    Loaded,
    /// Unsaved changes exist; the candidate is parked until the
    /// caller resolves the confirmation.
    ConfirmationRequired,
}

/// The active deck plus its transient editing state.
#[derive(Clone, Debug, Default)]
pub struct DeckSession {
    deck: Deck,
    unsaved: bool,
    pending_load: Option<Deck>,
}

impl DeckSession {
    /// Start a session on a fresh empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self {
            deck: Deck::new(),
            unsaved: false,
            pending_load: None,
        }
    }

    /// Start a session on an already-fetched deck.
    #[must_use]
    pub fn with_deck(deck: Deck) -> Self {
        Self {
            deck,
            unsaved: false,
            pending_load: None,
        }
    }

    /// The active deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Whether the active deck has mutations the persistence boundary
    /// has not acknowledged. Consumed by navigation guards.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    /// The parked candidate awaiting confirmation, if any.
    #[must_use]
    pub fn pending_load(&self) -> Option<&Deck> {
        self.pending_load.as_ref()
    }

    // === Mutations ===

    /// Apply a count delta to the active deck.
    ///
    /// Returns whether the deck changed. A real mutation sets the
    /// unsaved flag; a no-op decrement of an absent card leaves both
    /// the deck and the flag untouched.
    pub fn apply_delta(&mut self, card: &CardRecord, delta: Delta) -> bool {
        let changed = self.deck.apply_delta(card, delta);
        if changed {
            self.unsaved = true;
        }
        changed
    }

    /// Rename the active deck.
    ///
    /// No uniqueness check against other saved decks - duplicate deck
    /// names are permitted.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.deck.name = name.into();
        self.unsaved = true;
    }

    /// Record that the persistence boundary acknowledged a save of
    /// the active deck.
    pub fn mark_saved(&mut self) {
        self.unsaved = false;
    }

    // === Loading ===

    /// Request that `candidate` replace the active deck.
    ///
    /// With no unsaved changes the load applies immediately. With
    /// unsaved changes the candidate is parked and the caller must
    /// resolve the confirmation; a second request while one is
    /// pending replaces the parked candidate.
    ///
    /// Loading a fresh `Deck::new()` through this path is how "new
    /// deck" works, so starting over is guarded the same way.
    #[must_use]
    pub fn request_load(&mut self, candidate: Deck) -> LoadDecision {
        if self.unsaved {
            self.pending_load = Some(candidate);
            LoadDecision::ConfirmationRequired
        } else {
            self.install(candidate);
            LoadDecision::Loaded
        }
    }

    /// Affirmative confirmation: apply the parked load.
    ///
    /// Returns whether a pending load was applied.
    pub fn confirm_load(&mut self) -> bool {
        match self.pending_load.take() {
            Some(candidate) => {
                self.install(candidate);
                true
            }
            None => false,
        }
    }

    /// Declined confirmation: discard the parked candidate.
    ///
    /// The active deck and the unsaved flag are left unchanged.
    /// Returns whether a pending load was discarded.
    pub fn cancel_load(&mut self) -> bool {
        self.pending_load.take().is_some()
    }

    fn install(&mut self, deck: Deck) {
        self.deck = deck;
        self.unsaved = false;
        self.pending_load = None;
    }
}
