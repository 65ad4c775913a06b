//! Observable wrapper around the engine.
//!
//! The session is the seam between the engine and a presentation layer:
//! intents in, one state notification out per intent.

mod adapter;

pub use adapter::GameSession;
