//! Card identity and the generic card value.
//!
//! Every card in a deck has a `CardId` assigned at construction and never
//! reassigned. Shuffling permutes the deck's *order*; identity, content,
//! and flags travel with the card. Renderers diff on `id`, not position.
//!
//! ## Lifecycle
//!
//! A card is created face-down and unmatched. Over its life only the two
//! flags change, and only through `MemoryGame::choose`:
//!
//! - `is_face_up` toggles as the card is selected and deselected
//! - `is_matched` is terminal: once set it never clears, and a matched
//!   card is always face-up

use serde::{Deserialize, Serialize};

/// Unique identifier for a card within a deck.
///
/// Stable across shuffles and mutations. Two cards of the same pair have
/// identical content but distinct ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card in a memory game.
///
/// Generic over the pair content `C`. The engine only ever compares
/// content for equality; no other capability is required of `C`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card<C> {
    /// Stable identity, assigned at deck construction.
    pub id: CardId,

    /// The pair payload. Exactly one other card in the deck carries
    /// equal content.
    pub content: C,

    /// Face-up or face-down. Mutually exclusive render states.
    pub is_face_up: bool,

    /// Terminal state reached only via a successful pair match.
    pub is_matched: bool,
}

impl<C> Card<C> {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(id: CardId, content: C) -> Self {
        Self {
            id,
            content,
            is_face_up: false,
            is_matched: false,
        }
    }

    /// Check if this card is still selectable: not yet matched.
    #[must_use]
    pub fn in_play(&self) -> bool {
        !self.is_matched
    }
}
