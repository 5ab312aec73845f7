//! Formatting, naming, symbol, and parsing integration tests.

use toydeck::{Card, ParseCardError, UNREPRESENTABLE};

const SUITS: [Card; 4] = [Card::SPADES, Card::HEARTS, Card::DIAMONDS, Card::CLUBS];

fn all_codes() -> impl Iterator<Item = Card> {
    (0..=u8::MAX).map(Card::from)
}

#[test]
fn debug_abbreviations() {
    assert_eq!(format!("{:?}", Card::KNIGHT + Card::SPADES), "Cs");
    assert_eq!(format!("{:?}", Card::QUEEN + Card::HEARTS), "Qh");
    assert_eq!(format!("{:?}", Card::TEN + Card::DIAMONDS), "Td");
    assert_eq!(format!("{:?}", Card::JOKER), "*?");
    assert_eq!(format!("{:?}", Card::BLACK), "?b");
    assert_eq!(format!("{:?}", Card::WHITE + Card::JACK), "Jw");
}

#[test]
fn display_uses_outline_glyphs_for_red_suits() {
    assert_eq!((Card::ACE + Card::SPADES).to_string(), "A♠");
    assert_eq!((Card::ACE + Card::HEARTS).to_string(), "A♡");
    assert_eq!((Card::ACE + Card::DIAMONDS).to_string(), "A♢");
    assert_eq!((Card::ACE + Card::CLUBS).to_string(), "A♣");
    assert_eq!((Card::NINE + Card::WHITE).to_string(), "9w");
    assert_eq!(Card::BLACK.to_string(), "?b");
}

#[test]
fn display_matches_debug_outside_real_suits() {
    for card in all_codes() {
        let suit = card.suit();
        if !card.is_valid() || suit == Card::UNKNOWN {
            assert_eq!(card.to_string(), format!("{card:?}"));
        } else {
            assert_ne!(card.to_string(), format!("{card:?}"));
        }
    }
}

#[test]
fn names() {
    assert_eq!((Card::TEN + Card::CLUBS).name().to_string(), "Ten of Clubs");
    assert_eq!((Card::JOKER + Card::SPADES).name().to_string(), "Joker of Spades");
    assert_eq!((Card::JOKER + Card::BLACK).name().to_string(), "Black Joker");
    assert_eq!(Card::WHITE.name().to_string(), "White Unranked Card");
    assert_eq!(Card::DIAMONDS.name().to_string(), "Unranked Card of Diamonds");
    assert_eq!(Card::ACE.name().to_string(), "Ace of Nothing");
}

#[test]
fn name_table_swaps_queen_and_knight() {
    assert_eq!((Card::KNIGHT + Card::HEARTS).name().to_string(), "Queen of Hearts");
    assert_eq!((Card::QUEEN + Card::HEARTS).name().to_string(), "Knight of Hearts");
    assert_eq!(format!("{:?}", Card::KNIGHT + Card::HEARTS), "Ch");
    assert_eq!(format!("{:?}", Card::QUEEN + Card::HEARTS), "Qh");
}

#[test]
fn unknown_and_invalid_names_are_distinct() {
    assert_eq!(Card::UNKNOWN.name().to_string(), "Unknown Card");
    assert_eq!(Card::INVALID.name().to_string(), "Invalid Card");
    assert_eq!(Card::from(u8::MAX).name().to_string(), "Invalid Card");
}

#[test]
fn symbols_follow_the_playing_card_block() {
    assert_eq!(Card::UNKNOWN.symbol(), '\u{1F0A0}');
    for suit in SUITS {
        for rank in 1..16 {
            let card = Card::from(rank) + suit;
            let expected = char::from_u32(0x1F0A0 + u32::from(u8::from(card)) - 16).unwrap();
            assert_eq!(card.symbol(), expected, "{card:?}");
        }
    }
    assert_eq!((Card::QUEEN + Card::SPADES).symbol(), '🂭');
    assert_eq!((Card::KNIGHT + Card::SPADES).symbol(), '🂬');
    assert_eq!((Card::JOKER + Card::SPADES).symbol(), '\u{1F0AF}');
}

#[test]
fn symbols_of_partial_cards() {
    assert_eq!(Card::SPADES.symbol(), '♠');
    assert_eq!(Card::HEARTS.symbol(), '♡');
    assert_eq!(Card::DIAMONDS.symbol(), '♢');
    assert_eq!(Card::CLUBS.symbol(), '♣');
    assert_eq!(Card::ACE.symbol(), 'A');
    assert_eq!(Card::KNIGHT.symbol(), 'C');
    assert_eq!(Card::JOKER.symbol(), '*');
    assert_eq!((Card::JOKER + Card::BLACK).symbol(), '🃏');
    assert_eq!((Card::JOKER + Card::WHITE).symbol(), '🃟');
    assert_eq!(Card::BLACK.symbol(), UNREPRESENTABLE);
    assert_eq!((Card::KING + Card::WHITE).symbol(), UNREPRESENTABLE);
}

#[test]
fn parse_accepts_both_short_forms() {
    for card in all_codes().filter(|card| card.is_valid()) {
        assert_eq!(format!("{card:?}").parse::<Card>(), Ok(card));
        assert_eq!(card.to_string().parse::<Card>(), Ok(card));
    }
}

#[test]
fn parse_errors() {
    assert_eq!("".parse::<Card>(), Err(ParseCardError::Length(0)));
    assert_eq!("A".parse::<Card>(), Err(ParseCardError::Length(1)));
    assert_eq!("Ash".parse::<Card>(), Err(ParseCardError::Length(3)));
    assert_eq!("XX".parse::<Card>(), Err(ParseCardError::Rank('X')));
    assert_eq!("1s".parse::<Card>(), Err(ParseCardError::Rank('1')));
    assert_eq!("AS".parse::<Card>(), Err(ParseCardError::Group('S')));
    assert_eq!("A♥".parse::<Card>(), Err(ParseCardError::Group('♥')));
    assert_eq!(
        ParseCardError::Group('x').to_string(),
        "unknown suit or color 'x'"
    );
    assert_eq!(
        ParseCardError::Length(3).to_string(),
        "expected 2 characters, found 3"
    );
}
