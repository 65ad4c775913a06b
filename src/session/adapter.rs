//! The view-model adapter.
//!
//! `GameSession` forwards intents to its `MemoryGame` and republishes
//! the resulting deck to registered listeners. It holds no game logic;
//! any behavior difference from the engine is a defect here.
//!
//! Notification is synchronous and happens exactly once per successful
//! intent, after the mutation completes, so listeners always observe a
//! fully-consistent deck. A failed `choose` mutates nothing and
//! notifies nobody.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use memory_match::game::MemoryGame;
//! use memory_match::session::GameSession;
//!
//! let game = MemoryGame::with_seed(2, 7, |pair| pair).unwrap();
//! let mut session = GameSession::new(game);
//!
//! let seen = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&seen);
//! session.subscribe(move |_cards| counter.set(counter.get() + 1));
//!
//! session.shuffle();
//! assert_eq!(seen.get(), 1);
//! ```

use im::Vector;

use crate::core::{Card, CardId, GameError};
use crate::game::MemoryGame;

/// A listener receiving the post-mutation deck after each intent.
type Listener<C> = Box<dyn FnMut(&Vector<Card<C>>)>;

/// Observable session: one engine, any number of listeners.
pub struct GameSession<C: Clone> {
    game: MemoryGame<C>,
    listeners: Vec<Listener<C>>,
}

impl<C: Clone + PartialEq> GameSession<C> {
    /// Wrap an engine in a session with no listeners.
    #[must_use]
    pub fn new(game: MemoryGame<C>) -> Self {
        Self {
            game,
            listeners: Vec::new(),
        }
    }

    /// The current deck, for rendering.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card<C>> {
        self.game.cards()
    }

    /// Check whether every pair has been matched.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game.is_over()
    }

    /// Register a listener for deck updates.
    ///
    /// Listeners are called in registration order, synchronously,
    /// once per successful intent.
    pub fn subscribe(&mut self, listener: impl FnMut(&Vector<Card<C>>) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Intent: reshuffle the deck.
    pub fn shuffle(&mut self) {
        self.game.shuffle();
        self.notify();
    }

    /// Intent: choose a card.
    ///
    /// Forwards to the engine; errors propagate unchanged and suppress
    /// notification, since no mutation happened.
    pub fn choose(&mut self, id: CardId) -> Result<(), GameError> {
        self.game.choose(id)?;
        self.notify();
        Ok(())
    }

    fn notify(&mut self) {
        let snapshot = self.game.snapshot();
        for listener in &mut self.listeners {
            listener(&snapshot);
        }
    }
}
