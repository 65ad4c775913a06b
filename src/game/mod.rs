//! The memory game state machine.

mod engine;

pub use engine::MemoryGame;
