//! Hand integration tests.

extern crate alloc;

use alloc::rc::Rc;
use core::cell::RefCell;

use pcards::{
    Card, DECK_SIZE, Deck, DeckError, Hand, HandError, NameStyle, SharedDeck, Suit, combine,
    repeat,
};

fn shared_deck() -> SharedDeck {
    Rc::new(RefCell::new(Deck::standard(1)))
}

fn hand_of(names: &[&str]) -> Hand {
    Hand::from_names(names.iter().copied()).unwrap()
}

fn names(hand: &Hand) -> Vec<String> {
    hand.iter()
        .map(|card| card.name_string(NameStyle::Short))
        .collect()
}

#[test]
fn display_right_aligns_short_names() {
    let hand = hand_of(&["AD", "10C", "JS", "2H", "10D"]);
    assert_eq!(hand.to_string(), "  AD 10C  JS  2H 10D");
    assert_eq!(Hand::new().to_string(), "");
}

#[test]
fn reads_return_copies() {
    let mut hand = hand_of(&["AD", "KC"]);
    let mut cards = hand.to_vec();
    cards[0] = Card::new(2, Suit::Spades).unwrap();
    assert_eq!(names(&hand), ["AD", "KC"]);

    let first = hand.get(0).unwrap();
    hand.set(0, Card::new(3, Suit::Hearts).unwrap()).unwrap();
    assert_eq!(first.name_string(NameStyle::Short), "AD");
    assert_eq!(names(&hand), ["3H", "KC"]);
}

#[test]
fn clones_are_independent() {
    let original = hand_of(&["AD", "KC", "5S"]);
    let mut copy = original.clone();
    copy.pop();
    copy.push(Card::new(9, Suit::Clubs).unwrap());

    assert_eq!(names(&original), ["AD", "KC", "5S"]);
    assert_eq!(names(&copy), ["AD", "KC", "9C"]);
}

#[test]
fn slicing_combining_and_repeating() {
    let hand = hand_of(&["AD", "KC", "5S", "7H"]);

    assert_eq!(names(&hand.slice(1..3).unwrap()), ["KC", "5S"]);
    assert_eq!(names(&hand.slice(..=1).unwrap()), ["AD", "KC"]);
    assert_eq!(
        hand.slice(2..9).unwrap_err(),
        HandError::IndexOutOfRange { index: 9, len: 4 }
    );
    assert_eq!(
        hand.slice(..=usize::MAX).unwrap_err(),
        HandError::IndexOutOfRange {
            index: usize::MAX,
            len: 4
        }
    );

    let joined = combine(&hand.slice(..1).unwrap(), &hand.slice(3..).unwrap());
    assert_eq!(names(&joined), ["AD", "7H"]);

    let twice = repeat(&joined, 2).unwrap();
    assert_eq!(names(&twice), ["AD", "7H", "AD", "7H"]);
    assert_eq!(repeat(&joined, 0).unwrap_err(), HandError::InvalidRepeat);

    let mut in_place = joined.clone();
    in_place.repeat_in_place(3).unwrap();
    assert_eq!(in_place.len(), 6);
}

#[test]
fn counts_and_positions() {
    let hand = hand_of(&["AD", "KC", "AS", "AD", "7H"]);
    let ace_of_diamonds = Card::from_name("AD").unwrap();

    assert_eq!(hand.count(&ace_of_diamonds), 2);
    assert_eq!(hand.count_rank(1u8).unwrap(), 3);
    assert_eq!(hand.count_rank("ace").unwrap(), 3);
    assert_eq!(hand.count_rank("k").unwrap(), 1);
    assert!(hand.count_rank(20u8).is_err());

    assert_eq!(hand.position(&Card::from_name("AS").unwrap()), Some(2));
    assert_eq!(hand.position(&Card::from_name("AC").unwrap()), None);
    assert_eq!(hand.position_rank("seven").unwrap(), Some(4));
    assert_eq!(hand.position_rank(2u8).unwrap(), None);

    assert!(hand.contains(&ace_of_diamonds));
    assert!(!hand.contains(&Card::from_name("AC").unwrap()));
    assert_eq!(hand.index_list(), [39, 12, 26, 39, 19]);
}

#[test]
fn editing_in_place() {
    let mut hand = hand_of(&["AD", "KC", "5S"]);

    hand.insert(1, Card::from_name("2C").unwrap());
    hand.insert(99, Card::from_name("3C").unwrap());
    assert_eq!(names(&hand), ["AD", "2C", "KC", "5S", "3C"]);

    hand.remove(&Card::from_name("KC").unwrap()).unwrap();
    assert_eq!(
        hand.remove(&Card::from_name("KH").unwrap()).unwrap_err(),
        HandError::NotFound
    );
    let first = hand.remove_at(0).unwrap();
    assert_eq!(first.name_string(NameStyle::Short), "AD");
    assert_eq!(names(&hand), ["2C", "5S", "3C"]);

    hand.set_range(1..2, &hand_of(&["9H", "9D"])).unwrap();
    assert_eq!(names(&hand), ["2C", "9H", "9D", "3C"]);

    hand.extend(&hand_of(&["JS"]));
    hand.extend_cards([Card::from_name("QS").unwrap()]);
    assert_eq!(hand.len(), 6);

    assert_eq!(
        hand.set(6, Card::from_name("2D").unwrap()).unwrap_err(),
        HandError::IndexOutOfRange { index: 6, len: 6 }
    );
}

#[test]
fn sorting_puts_aces_low() {
    let mut hand = hand_of(&["KS", "AD", "2C", "AC"]);

    hand.sort(false);
    assert_eq!(names(&hand), ["AC", "AD", "2C", "KS"]);

    hand.sort(true);
    assert_eq!(names(&hand), ["KS", "2C", "AD", "AC"]);

    hand.reverse();
    assert_eq!(names(&hand), ["AC", "AD", "2C", "KS"]);
}

#[test]
fn deck_operations_need_a_deck() {
    let mut hand = hand_of(&["AD"]);

    assert_eq!(hand.draw(1).unwrap_err(), HandError::NoDeck);
    assert_eq!(hand.discard().unwrap_err(), HandError::NoDeck);
    assert_eq!(hand.exchange(&[1]).unwrap_err(), HandError::NoDeck);
}

#[test]
fn draws_and_discards_through_the_deck() {
    let deck = shared_deck();
    let mut hand = Hand::from_deck(Rc::clone(&deck), 3).unwrap();
    assert_eq!(names(&hand), ["AC", "2C", "3C"]);

    hand.draw(2).unwrap();
    assert_eq!(deck.borrow().len(), DECK_SIZE - 5);

    hand.discard().unwrap();
    assert!(hand.is_empty());
    assert_eq!(deck.borrow().discard_len(), 5);

    let remaining = deck.borrow().len();
    deck.borrow_mut().draw(remaining - 1).unwrap();
    assert_eq!(
        hand.draw(2).unwrap_err(),
        HandError::Deck(DeckError::Empty {
            requested: 2,
            remaining: 1
        })
    );
    assert!(hand.is_empty());
}

#[test]
fn exchange_replaces_positions_and_discards() {
    let deck = shared_deck();
    let mut hand = Hand::from_deck(Rc::clone(&deck), 5).unwrap();

    hand.exchange(&[1, 5]).unwrap();
    assert_eq!(names(&hand), ["6C", "2C", "3C", "4C", "7C"]);

    let deck = deck.borrow();
    assert_eq!(deck.len(), DECK_SIZE - 7);
    let discarded: Vec<String> = deck
        .discards()
        .iter()
        .map(|card| card.name_string(NameStyle::Short))
        .collect();
    assert_eq!(discarded, ["AC", "5C"]);
}

#[test]
fn exchange_rejects_bad_positions_up_front() {
    let deck = shared_deck();
    let mut hand = Hand::from_deck(Rc::clone(&deck), 5).unwrap();

    assert_eq!(
        hand.exchange(&[2, 6]).unwrap_err(),
        HandError::PositionOutOfRange {
            position: 6,
            len: 5
        }
    );
    assert_eq!(
        hand.exchange(&[0]).unwrap_err(),
        HandError::PositionOutOfRange {
            position: 0,
            len: 5
        }
    );
    assert_eq!(
        hand.exchange(&[3, 1, 3]).unwrap_err(),
        HandError::DuplicatePosition(3)
    );
    assert_eq!(names(&hand), ["AC", "2C", "3C", "4C", "5C"]);
    assert_eq!(deck.borrow().len(), DECK_SIZE - 5);
    assert_eq!(deck.borrow().discard_len(), 0);
}

#[test]
fn observers_see_every_change() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut hand = Hand::with_deck(shared_deck());

    let log = Rc::clone(&seen);
    let id = hand.subscribe(move |cards| log.borrow_mut().push(cards.len()));

    hand.draw(5).unwrap();
    hand.exchange(&[1, 2]).unwrap();
    hand.pop();
    hand.sort(false);
    assert_eq!(*seen.borrow(), [5, 5, 4, 4]);

    assert!(hand.unsubscribe(id));
    assert!(!hand.unsubscribe(id));
    hand.discard().unwrap();
    assert_eq!(seen.borrow().len(), 4);
}

#[test]
fn observers_run_in_registration_order() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut hand = hand_of(&["AD", "KC"]);

    let first_log = Rc::clone(&seen);
    let first = hand.subscribe(move |_| first_log.borrow_mut().push("first"));
    let second_log = Rc::clone(&seen);
    hand.subscribe(move |_| second_log.borrow_mut().push("second"));

    hand.pop();
    hand.reverse();
    assert_eq!(*seen.borrow(), ["first", "second", "first", "second"]);

    seen.borrow_mut().clear();
    assert!(hand.unsubscribe(first));
    hand.push(Card::from_name("9S").unwrap());
    assert_eq!(*seen.borrow(), ["second"]);
}

#[test]
fn clones_do_not_carry_observers() {
    let calls = Rc::new(RefCell::new(0));
    let mut hand = hand_of(&["AD"]);

    let counter = Rc::clone(&calls);
    hand.subscribe(move |_| *counter.borrow_mut() += 1);

    let mut copy = hand.clone();
    copy.push(Card::from_name("2D").unwrap());
    assert_eq!(*calls.borrow(), 0);

    hand.push(Card::from_name("3D").unwrap());
    assert_eq!(*calls.borrow(), 1);
}
