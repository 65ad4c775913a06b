//! The engine's error taxonomy.
//!
//! Deliberately small: every operation is a synchronous, pure state
//! transition with no transient failure modes, so the only errors are
//! caller bugs caught at the boundary.

use serde::{Deserialize, Serialize};

use super::card::CardId;

/// Errors reported by the memory game engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameError {
    /// A deck needs at least one pair; an empty deck would make the
    /// pair invariant vacuous and every intent meaningless.
    InvalidPairCount,

    /// `choose` was given a card identity not present in the deck.
    /// The intended front end can never produce this, so it indicates
    /// a caller bug and fails fast rather than being ignored.
    UnknownCard(CardId),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidPairCount => {
                write!(f, "a memory game needs at least one pair of cards")
            }
            GameError::UnknownCard(id) => {
                write!(f, "{id} is not in this deck")
            }
        }
    }
}

impl std::error::Error for GameError {}
