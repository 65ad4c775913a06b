//! Core engine types: card identity, the generic card, RNG, errors.
//!
//! ## Key Types
//!
//! - `CardId`: Stable identity of a card across shuffles
//! - `Card`: Generic card value (content + face/match flags)
//! - `DeckRng`: Deterministic, serializable shuffle RNG
//! - `GameError`: The engine's narrow error taxonomy

pub mod card;
pub mod error;
pub mod rng;

pub use card::{Card, CardId};
pub use error::GameError;
pub use rng::{DeckRng, DeckRngState};
