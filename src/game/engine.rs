//! The concentration game engine.
//!
//! `MemoryGame` owns the deck and all state-transition logic: selection,
//! flipping, match detection, shuffling, deck construction. It knows
//! nothing about rendering.
//!
//! ## The matching algorithm
//!
//! Between turns, at most one unmatched card is face up. Choosing a card
//! either starts a turn (flip it up, everything else down), completes a
//! match (both cards become matched, stay face up), or misses (the
//! previous card flips back down, the chosen one flips up).
//!
//! ```
//! use memory_match::game::MemoryGame;
//!
//! let mut game = MemoryGame::with_seed(2, 7, |pair| ["🦋", "🌊"][pair]).unwrap();
//! let ids: Vec<_> = game.cards().iter().map(|c| c.id).collect();
//!
//! // Cards 0 and 1 are the 🦋 pair
//! game.choose(ids[0]).unwrap();
//! game.choose(ids[1]).unwrap();
//!
//! assert!(game.cards()[0].is_matched);
//! assert!(game.cards()[1].is_matched);
//! assert!(!game.is_over()); // the 🌊 pair is still in play
//! ```

use im::Vector;

use crate::core::{Card, CardId, DeckRng, GameError};

/// A concentration game: a deck of paired cards and the rules for
/// flipping and matching them.
///
/// Generic over the pair content `C`, which only needs equality
/// comparison. The deck is an `im` persistent vector, so snapshots for
/// observers clone in O(1).
#[derive(Clone, Debug)]
pub struct MemoryGame<C: Clone> {
    cards: Vector<Card<C>>,
    rng: DeckRng,
}

impl<C: Clone + PartialEq> MemoryGame<C> {
    /// Create a game with `pairs` pairs of cards, shuffled by an
    /// entropy-seeded RNG.
    ///
    /// `content` is called once per pair index in `0..pairs`; the two
    /// cards of that pair share the returned content. The engine does
    /// not validate content: a factory that cannot cover an index
    /// should return a designated placeholder rather than panic.
    ///
    /// Returns `GameError::InvalidPairCount` if `pairs` is zero.
    pub fn new(pairs: usize, content: impl FnMut(usize) -> C) -> Result<Self, GameError> {
        Self::with_rng(pairs, DeckRng::from_entropy(), content)
    }

    /// Create a game with a fixed shuffle seed.
    ///
    /// Seeded games are fully reproducible: the same seed and the same
    /// intent sequence produce the same deck at every step.
    pub fn with_seed(
        pairs: usize,
        seed: u64,
        content: impl FnMut(usize) -> C,
    ) -> Result<Self, GameError> {
        Self::with_rng(pairs, DeckRng::new(seed), content)
    }

    fn with_rng(
        pairs: usize,
        rng: DeckRng,
        mut content: impl FnMut(usize) -> C,
    ) -> Result<Self, GameError> {
        if pairs == 0 {
            return Err(GameError::InvalidPairCount);
        }

        let mut cards = Vector::new();
        for pair_index in 0..pairs {
            let pair_content = content(pair_index);
            let first = CardId::new((pair_index * 2) as u32);
            let second = CardId::new((pair_index * 2 + 1) as u32);
            cards.push_back(Card::new(first, pair_content.clone()));
            cards.push_back(Card::new(second, pair_content));
        }

        Ok(Self { cards, rng })
    }

    /// The deck in render order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card<C>> {
        &self.cards
    }

    /// An owned snapshot of the deck. O(1) via structural sharing.
    #[must_use]
    pub fn snapshot(&self) -> Vector<Card<C>> {
        self.cards.clone()
    }

    /// Check whether every pair has been matched.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.cards.iter().all(|card| card.is_matched)
    }

    /// Choose a card by identity.
    ///
    /// - A matched or already-face-up card is a no-op.
    /// - With exactly one other unmatched card face up: equal content
    ///   matches both (they stay face up, permanently); unequal content
    ///   flips the previous card back down and the chosen card up.
    /// - Otherwise the chosen card flips up and every other unmatched
    ///   card is forced face down, re-establishing single selection
    ///   even if prior state drifted.
    ///
    /// Returns `GameError::UnknownCard` if `id` is not in the deck.
    pub fn choose(&mut self, id: CardId) -> Result<(), GameError> {
        let chosen = self.index_of(id).ok_or(GameError::UnknownCard(id))?;

        if self.cards[chosen].is_matched || self.cards[chosen].is_face_up {
            return Ok(());
        }

        match self.lone_face_up_index() {
            Some(previous) => {
                if self.cards[previous].content == self.cards[chosen].content {
                    self.cards[previous].is_matched = true;
                    self.cards[chosen].is_matched = true;
                } else {
                    self.cards[previous].is_face_up = false;
                }
                self.cards[chosen].is_face_up = true;
            }
            None => {
                for card in self.cards.iter_mut() {
                    if card.in_play() {
                        card.is_face_up = false;
                    }
                }
                self.cards[chosen].is_face_up = true;
            }
        }

        Ok(())
    }

    /// Randomly permute the deck's render order.
    ///
    /// A pure reordering: no card's id, content, or flags change.
    pub fn shuffle(&mut self) {
        let mut deck: Vec<Card<C>> = self.cards.iter().cloned().collect();
        self.rng.shuffle(&mut deck);
        self.cards = deck.into_iter().collect();
    }

    fn index_of(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id == id)
    }

    /// The index of the one and only unmatched face-up card, if the
    /// deck holds exactly one.
    fn lone_face_up_index(&self) -> Option<usize> {
        let mut face_up = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.is_face_up && card.in_play())
            .map(|(index, _)| index);

        match (face_up.next(), face_up.next()) {
            (Some(index), None) => Some(index),
            _ => None,
        }
    }
}
