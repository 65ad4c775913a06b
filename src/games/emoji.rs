//! Emoji concentration themes.
//!
//! A theme is a named emoji table plus a placeholder glyph. Building a
//! session from a theme wires the table up as the engine's content
//! factory: pair indices beyond the table get the placeholder, so a
//! caller asking for more pairs than the theme covers still gets a
//! deck with a defined visual state.

use crate::core::GameError;
use crate::game::MemoryGame;
use crate::session::GameSession;

/// A named emoji table backing a concentration game.
#[derive(Clone, Debug)]
pub struct EmojiTheme {
    name: String,
    emojis: Vec<String>,
    placeholder: String,
}

impl EmojiTheme {
    /// Create a theme from a name and an emoji table.
    ///
    /// The placeholder defaults to "⁉️"; override with `placeholder`.
    #[must_use]
    pub fn new(name: impl Into<String>, emojis: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            emojis: emojis.into_iter().map(Into::into).collect(),
            placeholder: "⁉️".to_string(),
        }
    }

    /// Override the glyph shown for pairs beyond the emoji table.
    #[must_use]
    pub fn placeholder(mut self, glyph: impl Into<String>) -> Self {
        self.placeholder = glyph.into();
        self
    }

    /// The nature theme: mountains, leaves, butterflies.
    #[must_use]
    pub fn nature() -> Self {
        Self::new(
            "Nature",
            [
                "⛰️", "🍃", "🦋", "🌊", "🌸", "🦔", "🏕️", "🐌", "🏝️", "🍄", "🐚", "🪺", "🪷",
                "🐝", "🌳", "🐬", "🪸", "🦚",
            ],
        )
    }

    /// The vehicles theme.
    #[must_use]
    pub fn vehicles() -> Self {
        Self::new(
            "Vehicles",
            ["✈️", "🚗", "🚝", "🚁", "🚇", "🚊", "🛵", "🚐", "🚜", "🛺"],
        )
    }

    /// Theme name, for a theme picker.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How many pairs this theme can supply distinct content for.
    #[must_use]
    pub fn max_pairs(&self) -> usize {
        self.emojis.len()
    }

    /// Build an observable session with `pairs` pairs, entropy-shuffled.
    pub fn session(&self, pairs: usize) -> Result<GameSession<String>, GameError> {
        Ok(GameSession::new(MemoryGame::new(pairs, self.content_factory())?))
    }

    /// Build a session with a fixed shuffle seed, for replays and tests.
    pub fn session_with_seed(
        &self,
        pairs: usize,
        seed: u64,
    ) -> Result<GameSession<String>, GameError> {
        Ok(GameSession::new(MemoryGame::with_seed(
            pairs,
            seed,
            self.content_factory(),
        )?))
    }

    fn content_factory(&self) -> impl FnMut(usize) -> String + '_ {
        move |pair_index| {
            self.emojis
                .get(pair_index)
                .unwrap_or(&self.placeholder)
                .clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_deals_pairs_from_table() {
        let session = EmojiTheme::nature().session_with_seed(3, 42).unwrap();
        assert_eq!(session.cards().len(), 6);

        for emoji in ["⛰️", "🍃", "🦋"] {
            let count = session
                .cards()
                .iter()
                .filter(|card| card.content == emoji)
                .count();
            assert_eq!(count, 2);
        }
    }

    #[test]
    fn test_out_of_range_pairs_get_placeholder() {
        let theme = EmojiTheme::vehicles();
        let pairs = theme.max_pairs() + 2;
        let session = theme.session_with_seed(pairs, 42).unwrap();

        let placeholders = session
            .cards()
            .iter()
            .filter(|card| card.content == "⁉️")
            .count();
        assert_eq!(placeholders, 4);
    }

    #[test]
    fn test_custom_placeholder() {
        let theme = EmojiTheme::new("Tiny", ["🦋"]).placeholder("❓");
        let session = theme.session_with_seed(2, 42).unwrap();

        let placeholders = session
            .cards()
            .iter()
            .filter(|card| card.content == "❓")
            .count();
        assert_eq!(placeholders, 2);
    }

    #[test]
    fn test_zero_pairs_rejected() {
        assert!(EmojiTheme::nature().session(0).is_err());
    }

    #[test]
    fn test_theme_names() {
        assert_eq!(EmojiTheme::nature().name(), "Nature");
        assert_eq!(EmojiTheme::vehicles().name(), "Vehicles");
    }
}
