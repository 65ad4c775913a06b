//! Bundled game flavors built on the engine.
//!
//! These are reference callers of the engine's contract: they own the
//! content tables and the deck-size policy, exactly the concerns a
//! presentation layer would.

mod emoji;

pub use emoji::EmojiTheme;
