//! Full game flow tests.
//!
//! These drive complete games through the public surface the way a
//! front end would: build a session from a theme, fire intents, and
//! render from the notified snapshots.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use memory_match::{CardId, EmojiTheme, GameError, GameSession, MemoryGame};

#[test]
fn test_play_emoji_game_to_completion() {
    let pairs = 4;
    let mut session = EmojiTheme::nature().session_with_seed(pairs, 42).unwrap();

    let notifications = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&notifications);
    session.subscribe(move |_| *counter.borrow_mut() += 1);

    session.shuffle();
    assert!(!session.is_over());

    // A player with perfect memory: group ids by content, then flip
    // each pair in sequence. Every second choose completes a match.
    let mut by_content: HashMap<String, Vec<CardId>> = HashMap::new();
    for card in session.cards() {
        by_content.entry(card.content.clone()).or_default().push(card.id);
    }
    assert_eq!(by_content.len(), pairs);

    for pair in by_content.values() {
        let [first, second] = pair[..] else {
            panic!("every content value should appear on exactly two cards");
        };
        session.choose(first).unwrap();
        session.choose(second).unwrap();

        let matched = session.cards().iter().filter(|card| card.is_matched).count();
        assert!(matched % 2 == 0 && matched >= 2);
    }

    assert!(session.is_over());
    assert!(session.cards().iter().all(|card| card.is_face_up));

    // One notification per intent: the shuffle plus two chooses per pair
    assert_eq!(*notifications.borrow(), 1 + pairs * 2);
}

#[test]
fn test_mismatch_then_recovery() {
    let game = MemoryGame::with_seed(2, 9, |pair| ["🦋", "🌊"][pair]).unwrap();
    let mut session = GameSession::new(game);

    let a1 = session.cards()[0].id;
    let b1 = session.cards()[2].id;
    let b2 = session.cards()[3].id;

    session.choose(a1).unwrap();
    session.choose(b1).unwrap(); // miss

    assert!(!session.cards()[0].is_face_up, "first pick flipped back down");
    assert!(
        session.cards()[2].is_face_up,
        "second pick carries into the next turn"
    );

    session.choose(b2).unwrap(); // completes 🌊

    assert!(session.cards()[2].is_matched && session.cards()[3].is_matched);
    assert!(!session.is_over());
}

#[test]
fn test_shuffle_mid_game_keeps_progress() {
    let mut session = EmojiTheme::vehicles().session_with_seed(5, 3).unwrap();

    let first_pair: Vec<CardId> = session
        .cards()
        .iter()
        .filter(|card| card.content == "✈️")
        .map(|card| card.id)
        .collect();
    session.choose(first_pair[0]).unwrap();
    session.choose(first_pair[1]).unwrap();

    session.shuffle();

    for id in first_pair {
        let card = session.cards().iter().find(|card| card.id == id).unwrap();
        assert!(card.is_matched && card.is_face_up);
    }
}

#[test]
fn test_unknown_card_surfaces_caller_bug() {
    let mut session = EmojiTheme::nature().session_with_seed(2, 1).unwrap();
    let bogus = CardId::new(10_000);
    assert_eq!(session.choose(bogus), Err(GameError::UnknownCard(bogus)));
}
