//! Text and symbol forms of a card.
//!
//! Four presentations, each with its own handling of invalid codes:
//!
//! - [`Debug`](core::fmt::Debug): two ASCII characters, e.g. `As` or `?c`.
//! - [`Display`](core::fmt::Display): like `Debug`, with suit glyphs, e.g. `A♠`.
//! - [`Card::name`]: English words, e.g. `Ace of Spades`.
//! - [`Card::symbol`]: one character from the playing-card Unicode block.

use core::fmt::{self, Write};

use crate::card::{BLACK, Card, CLUBS, DIAMONDS, JOKER, MAX_SUIT, STRIDE, WHITE};

/// Returned by [`Card::symbol`] when no codepoint describes the card.
pub const UNREPRESENTABLE: char = '\u{FFFD}';

/// Text of every invalid code in the short forms.
const INVALID_TOKEN: &str = "XX";

/// The card back, first codepoint of the playing-card block.
const UCS_CARD: u32 = 0x1F0A0;
/// Black spade suit; the other suits follow it.
const UCS_SUIT: u32 = 0x2660;

const BLACK_JOKER: u8 = Card::of(Card::JOKER, Card::BLACK).to_u8();
const WHITE_JOKER: u8 = Card::of(Card::JOKER, Card::WHITE).to_u8();
const DIAMONDS_JOKER: u8 = DIAMONDS * STRIDE + JOKER;
const CLUBS_JOKER: u8 = CLUBS * STRIDE + JOKER;

/// Rank abbreviations, indexed by rank. Knight is `C`.
pub(crate) const RANK_ABBR: &[u8; 16] = b"?A23456789TJCQK*";

/// Group abbreviations, indexed by group.
pub(crate) const GROUP_ABBR: &[u8; 7] = b"?shdcbw";

/// Rank names, indexed by rank.
///
/// Queen and Knight sit in the opposite order from [`RANK_ABBR`], so the
/// name of [`Card::KNIGHT`] is "Queen" and the name of [`Card::QUEEN`] is
/// "Knight". Existing fixtures depend on this table as it stands.
const RANK_NAME: [&str; 16] = [
    "Unranked Card",
    "Ace",
    "Two",
    "Three",
    "Four",
    "Five",
    "Six",
    "Seven",
    "Eight",
    "Nine",
    "Ten",
    "Jack",
    "Queen",
    "Knight",
    "King",
    "Joker",
];

/// Group names, indexed by group.
const GROUP_NAME: [&str; 7] = [
    "Nothing", "Spades", "Hearts", "Diamonds", "Clubs", "Black", "White",
];

/// `base + by` as a character.
const fn shifted(base: u32, by: u8) -> char {
    match char::from_u32(base + by as u32) {
        Some(ch) => ch,
        None => UNREPRESENTABLE,
    }
}

/// Glyph of a real suit group, `1..=4`.
pub(crate) const fn suit_glyph(group: u8) -> char {
    shifted(UCS_SUIT, group.saturating_sub(1))
}

impl Card {
    /// Returns the English name of the card.
    ///
    /// ```
    /// use toydeck::Card;
    ///
    /// assert_eq!((Card::THREE + Card::HEARTS).name().to_string(), "Three of Hearts");
    /// assert_eq!((Card::ACE + Card::BLACK).name().to_string(), "Black Ace");
    /// assert_eq!(Card::UNKNOWN.name().to_string(), "Unknown Card");
    /// assert_eq!(Card::INVALID.name().to_string(), "Invalid Card");
    /// ```
    #[must_use]
    pub const fn name(self) -> Name {
        Name(self)
    }

    /// Returns a single character depicting the card.
    ///
    /// Full cards map into the playing-card block, bare suits to their suit
    /// glyph and bare ranks to their abbreviation. The color jokers borrow
    /// the glyphs of the Diamonds and Clubs jokers. Anything else yields
    /// [`UNREPRESENTABLE`].
    ///
    /// ```
    /// use toydeck::{Card, UNREPRESENTABLE};
    ///
    /// assert_eq!((Card::ACE + Card::SPADES).symbol(), '🂡');
    /// assert_eq!(Card::CLUBS.symbol(), '♣');
    /// assert_eq!(Card::SEVEN.symbol(), '7');
    /// assert_eq!((Card::JOKER + Card::WHITE).symbol(), '🃟');
    /// assert_eq!((Card::ACE + Card::BLACK).symbol(), UNREPRESENTABLE);
    /// ```
    #[must_use]
    pub const fn symbol(self) -> char {
        let code = match self.to_u8() {
            0 => return shifted(UCS_CARD, 0),
            c if c < STRIDE => return RANK_ABBR[c as usize] as char,
            BLACK_JOKER => DIAMONDS_JOKER,
            WHITE_JOKER => CLUBS_JOKER,
            c if c >= MAX_SUIT => return UNREPRESENTABLE,
            c if c % STRIDE == 0 => return suit_glyph(c / STRIDE),
            c => c,
        };
        shifted(UCS_CARD, code - STRIDE)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return f.write_str(INVALID_TOKEN);
        }
        f.write_char(char::from(RANK_ABBR[usize::from(self.rank_field())]))?;
        f.write_char(char::from(GROUP_ABBR[usize::from(self.group())]))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return f.write_str(INVALID_TOKEN);
        }
        f.write_char(char::from(RANK_ABBR[usize::from(self.rank_field())]))?;
        f.write_char(match self.group() {
            0 => '?',
            BLACK => 'b',
            WHITE => 'w',
            group => suit_glyph(group),
        })
    }
}

/// The English name of a card, returned by [`Card::name`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Name(Card);

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let card = self.0;
        if !card.is_valid() {
            return f.write_str("Invalid Card");
        }
        if card == Card::UNKNOWN {
            return f.write_str("Unknown Card");
        }
        let group = card.group();
        let group_name = GROUP_NAME[usize::from(group)];
        let rank_name = RANK_NAME[usize::from(card.rank_field())];
        if group >= BLACK {
            write!(f, "{group_name} {rank_name}")
        } else {
            write!(f, "{rank_name} of {group_name}")
        }
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Name").field(&self.0).finish()
    }
}
