//! Card integration tests.

use std::collections::HashSet;

use pcards::{
    ACE, Card, CardArgs, CardError, CardKey, DECK_SIZE, JACK, KING, NameStyle, QUEEN, RankValue,
    Suit, parse_rank, parse_suit, rank_string, suit_string,
};

fn card(name: &str) -> Card {
    Card::from_name(name).unwrap()
}

#[test]
fn index_is_a_bijection() {
    let mut seen = HashSet::new();

    for index in 0..DECK_SIZE as u8 {
        let card = Card::from_index(index).unwrap();
        assert_eq!(card.index(), index);
        assert!(seen.insert((card.rank(), card.suit())));
    }

    assert_eq!(seen.len(), DECK_SIZE);
    assert_eq!(
        Card::from_index(52).unwrap_err(),
        CardError::InvalidIndex(52)
    );
}

#[test]
fn index_layout_puts_aces_first_in_each_suit() {
    assert_eq!(Card::from_index(0).unwrap().name_string(NameStyle::Short), "AC");
    assert_eq!(Card::from_index(12).unwrap().name_string(NameStyle::Short), "KC");
    assert_eq!(Card::from_index(13).unwrap().name_string(NameStyle::Short), "AH");
    assert_eq!(Card::from_index(26).unwrap().name_string(NameStyle::Short), "AS");
    assert_eq!(Card::from_index(51).unwrap().name_string(NameStyle::Short), "KD");
}

#[test]
fn ace_is_high_but_constructible_as_one() {
    let low = Card::new(1, Suit::Spades).unwrap();
    let high = Card::new(ACE, Suit::Spades).unwrap();

    assert_eq!(low.rank(), ACE);
    assert_eq!(low.rank_value(), 1);
    assert!(low.is_same(&high));
    assert!(low > Card::new(KING, Suit::Spades).unwrap());

    assert_eq!(
        Card::new(0, Suit::Clubs).unwrap_err(),
        CardError::InvalidRank("0".into())
    );
    assert_eq!(
        Card::new(15, Suit::Clubs).unwrap_err(),
        CardError::InvalidRank("15".into())
    );
}

#[test]
fn cards_compare_by_rank_only() {
    assert_eq!(card("QS"), card("QD"));
    assert!(!card("QS").is_same(&card("QD")));
    assert!(card("2C") < card("3D"));
    assert!(card("10H") < card("JH"));

    let ranks: HashSet<Card> = ["QS", "QD", "QC"].into_iter().map(card).collect();
    assert_eq!(ranks.len(), 1);
}

#[test]
fn rank_parsing_accepts_prefixes() {
    assert_eq!(parse_rank("ace").unwrap(), ACE);
    assert_eq!(parse_rank("A").unwrap(), ACE);
    assert_eq!(parse_rank("Qu").unwrap(), QUEEN);
    assert_eq!(parse_rank("j").unwrap(), JACK);
    assert_eq!(parse_rank("10").unwrap(), 10);
    assert_eq!(parse_rank("seven").unwrap(), 7);
    assert_eq!(parse_rank("SEV").unwrap(), 7);

    // Ambiguous prefixes take the first key.
    assert_eq!(parse_rank("t").unwrap(), 2);
    assert_eq!(parse_rank("th").unwrap(), 3);
    assert_eq!(parse_rank("te").unwrap(), 10);
    assert_eq!(parse_rank("f").unwrap(), 4);
    assert_eq!(parse_rank("s").unwrap(), 6);
    assert_eq!(parse_rank("1").unwrap(), 10);

    assert_eq!(parse_rank("").unwrap_err(), CardError::MissingRank);
    assert_eq!(
        parse_rank("eleven").unwrap_err(),
        CardError::InvalidRank("eleven".into())
    );
    assert_eq!(
        parse_rank("11").unwrap_err(),
        CardError::InvalidRank("11".into())
    );
}

#[test]
fn suit_parsing_accepts_prefixes() {
    assert_eq!(parse_suit("c").unwrap(), Suit::Clubs);
    assert_eq!(parse_suit("Hearts").unwrap(), Suit::Hearts);
    assert_eq!(parse_suit("SP").unwrap(), Suit::Spades);
    assert_eq!(parse_suit("diam").unwrap(), Suit::Diamonds);

    assert_eq!(parse_suit("").unwrap_err(), CardError::MissingSuit);
    assert_eq!(
        parse_suit("x").unwrap_err(),
        CardError::InvalidSuit("x".into())
    );
}

#[test]
fn names_in_every_style() {
    let card = card("AS");
    assert_eq!(card.name_string(NameStyle::Short), "AS");
    assert_eq!(card.name_string(NameStyle::Long), "ace of spades");
    assert_eq!(card.name_string(NameStyle::Capitalized), "Ace of Spades");
    assert_eq!(card.to_string(), "Ace of Spades");

    let ten = Card::new(10, Suit::Diamonds).unwrap();
    assert_eq!(ten.name_string(NameStyle::Short), "10D");
    assert_eq!(ten.rank_string(NameStyle::Long), "ten");
    assert_eq!(ten.suit_string(NameStyle::Capitalized), "Diamonds");

    assert_eq!(rank_string(1, NameStyle::Short).unwrap(), "A");
    assert_eq!(rank_string(14, NameStyle::Long).unwrap(), "ace");
    assert_eq!(rank_string(12, NameStyle::Capitalized).unwrap(), "Queen");
    assert!(rank_string(15, NameStyle::Short).is_err());
    assert_eq!(suit_string(1, NameStyle::Long).unwrap(), "hearts");
    assert_eq!(
        suit_string(4, NameStyle::Short).unwrap_err(),
        CardError::InvalidSuit("4".into())
    );
}

#[test]
fn short_names_parse() {
    assert!(card("10d").is_same(&Card::new(10, Suit::Diamonds).unwrap()));
    assert!(card("qh").is_same(&Card::new(QUEEN, Suit::Hearts).unwrap()));
    assert!("2C".parse::<Card>().unwrap().is_same(&Card::new(2, Suit::Clubs).unwrap()));

    assert_eq!(
        Card::from_name("S").unwrap_err(),
        CardError::InvalidName("S".into())
    );
    assert_eq!(
        Card::from_name("").unwrap_err(),
        CardError::InvalidName(String::new())
    );
    assert_eq!(
        Card::from_name("ZS").unwrap_err(),
        CardError::InvalidRank("Z".into())
    );
}

#[test]
fn card_args_check_their_shape() {
    let by_parts = CardArgs::new().rank(RankValue::Number(1)).suit(2u8).build().unwrap();
    let by_index = CardArgs::new().index(26).build().unwrap();
    let by_name = CardArgs::new().name("AS").build().unwrap();
    assert!(by_parts.is_same(&by_index));
    assert!(by_index.is_same(&by_name));

    assert_eq!(
        CardArgs::new().build().unwrap_err(),
        CardError::MismatchedArguments
    );
    assert_eq!(
        CardArgs::new().rank(5u8).build().unwrap_err(),
        CardError::MismatchedArguments
    );
    assert_eq!(
        CardArgs::new().name("AS").index(26).build().unwrap_err(),
        CardError::MismatchedArguments
    );
    assert_eq!(
        CardArgs::new().name("5H").into_key().unwrap(),
        CardKey::Name("5H")
    );

    assert_eq!(
        CardArgs::new().rank(5u8).suit(7u8).build().unwrap_err(),
        CardError::InvalidSuit("7".into())
    );
}

#[test]
fn sort_key_puts_aces_low() {
    let mut cards = vec![card("KS"), card("AD"), card("2C"), card("AC")];
    cards.sort_by_key(Card::sort_key);

    let names: Vec<String> = cards
        .iter()
        .map(|card| card.name_string(NameStyle::Short))
        .collect();
    assert_eq!(names, ["AC", "AD", "2C", "KS"]);
}

#[test]
fn conversions_go_through_the_index() {
    let card = Card::try_from(40u8).unwrap();
    assert_eq!(u8::from(card), 40);
    assert!(Card::try_from(60u8).is_err());
}

#[cfg(feature = "serde")]
#[test]
fn serde_uses_the_index() {
    let card = card("QH");
    let json = serde_json::to_string(&card).unwrap();
    assert_eq!(json, card.index().to_string());

    let back: Card = serde_json::from_str(&json).unwrap();
    assert!(back.is_same(&card));
    assert!(serde_json::from_str::<Card>("52").is_err());
}
