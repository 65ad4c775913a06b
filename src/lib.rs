//! # memory-match
//!
//! A generic concentration ("memory") card-matching game engine.
//!
//! ## Design Principles
//!
//! 1. **Content-Agnostic**: The engine is generic over the card payload.
//!    Anything with equality comparison can back a deck - emoji, strings,
//!    image handles, your own types.
//!
//! 2. **One Owner, One Writer**: The engine exclusively owns its deck.
//!    All mutation flows through `choose` and `shuffle`; callers read
//!    snapshots, never card references they could mutate through.
//!
//! 3. **Deterministic When Asked**: Shuffles run on a seedable ChaCha8
//!    RNG, so a seeded game replays the same deck order every time.
//!
//! ## Architecture
//!
//! - **Persistent Deck**: The card sequence is an `im` vector, so the
//!   session adapter can hand out fully-consistent snapshots in O(1)
//!   after every intent.
//!
//! - **Single-Selection Invariant**: At most one unmatched card is face
//!   up between turns. `choose` enforces this on every exit path.
//!
//! ## Modules
//!
//! - `core`: Card identity, the generic card type, RNG, errors
//! - `game`: The `MemoryGame` state machine
//! - `session`: Observable wrapper exposing intents to a presentation layer
//! - `games`: Bundled themes (emoji concentration)

pub mod core;
pub mod game;
pub mod games;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Card, CardId, DeckRng, DeckRngState, GameError};
pub use crate::game::MemoryGame;
pub use crate::games::EmojiTheme;
pub use crate::session::GameSession;
