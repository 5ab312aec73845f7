//! The packed card value, its classification, and the 52-card ordinal.
//!
//! A [`Card`] is a single byte laid out as `group * 16 + rank`. The rank
//! lives in the low nibble and the group (unknown, one of the four real
//! suits, or one of the two colors) in the bits above it.

use core::iter::FusedIterator;
use core::ops::Add;

/// Distance between two adjacent groups.
pub(crate) const STRIDE: u8 = 16;
/// Exclusive upper bound of the rank field.
pub(crate) const MAX_RANK: u8 = 16;
/// Number of real suits.
pub(crate) const N_SUITS: u8 = 4;
/// Exclusive upper bound of the group field.
pub(crate) const N_GROUPS: u8 = 7;
/// First code of the real-suit region.
pub(crate) const MIN_SUIT: u8 = STRIDE;
/// Exclusive upper bound of the real-suit region.
pub(crate) const MAX_SUIT: u8 = MIN_SUIT + MAX_RANK * N_SUITS;
/// Exclusive upper bound of every valid code.
pub(crate) const MAX_CARD: u8 = MAX_RANK * N_GROUPS;
/// Ranks per suit in the 52-card ordinal.
const STRIDE52: u8 = 13;

// Group indices.
pub(crate) const SPADES: u8 = 1;
pub(crate) const HEARTS: u8 = 2;
pub(crate) const DIAMONDS: u8 = 3;
pub(crate) const CLUBS: u8 = 4;
pub(crate) const BLACK: u8 = 5;
pub(crate) const WHITE: u8 = 6;

// Rank values.
const KNIGHT: u8 = 12;
const QUEEN: u8 = 13;
const KING: u8 = 14;
pub(crate) const JOKER: u8 = 15;

/// Number of cards reachable through the ordinal.
pub const DECK_SIZE: usize = 52;

/// A playing card, a rank, a suit, a color, or any combination of them,
/// packed into one byte.
///
/// Ranks and groups are themselves cards, so a full card is built by
/// adding the two:
///
/// ```
/// use toydeck::Card;
///
/// let card = Card::THREE + Card::HEARTS;
/// assert_eq!(card.rank(), Card::THREE);
/// assert_eq!(card.suit(), Card::HEARTS);
/// assert_eq!(card.color(), Card::WHITE);
/// assert_eq!(card.ord52(), 15);
/// ```
///
/// Every byte is a `Card`. Codes at or above [`Card::INVALID`] are not
/// valid, but every accessor and formatter still returns a defined value
/// for them.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Card(u8);

impl Card {
    /// No rank, no suit, no color.
    pub const UNKNOWN: Self = Self(0);

    /// Ace.
    pub const ACE: Self = Self(1);
    /// Two.
    pub const TWO: Self = Self(2);
    /// Three.
    pub const THREE: Self = Self(3);
    /// Four.
    pub const FOUR: Self = Self(4);
    /// Five.
    pub const FIVE: Self = Self(5);
    /// Six.
    pub const SIX: Self = Self(6);
    /// Seven.
    pub const SEVEN: Self = Self(7);
    /// Eight.
    pub const EIGHT: Self = Self(8);
    /// Nine.
    pub const NINE: Self = Self(9);
    /// Ten.
    pub const TEN: Self = Self(10);
    /// Jack.
    pub const JACK: Self = Self(11);
    /// Knight, ranked between Jack and Queen. Not part of the 52-card ordinal.
    pub const KNIGHT: Self = Self(KNIGHT);
    /// Queen.
    pub const QUEEN: Self = Self(QUEEN);
    /// King.
    pub const KING: Self = Self(KING);
    /// Joker.
    pub const JOKER: Self = Self(JOKER);

    /// Spades.
    pub const SPADES: Self = Self(STRIDE * SPADES);
    /// Hearts.
    pub const HEARTS: Self = Self(STRIDE * HEARTS);
    /// Diamonds.
    pub const DIAMONDS: Self = Self(STRIDE * DIAMONDS);
    /// Clubs.
    pub const CLUBS: Self = Self(STRIDE * CLUBS);
    /// Black, for cards whose color is known but not their suit.
    pub const BLACK: Self = Self(STRIDE * BLACK);
    /// White, for cards whose color is known but not their suit.
    pub const WHITE: Self = Self(STRIDE * WHITE);

    /// The first invalid code.
    pub const INVALID: Self = Self(MAX_CARD);

    /// Combines a rank and a group, the const counterpart of `rank + group`.
    ///
    /// ```
    /// use toydeck::Card;
    ///
    /// const ACE_OF_SPADES: Card = Card::of(Card::ACE, Card::SPADES);
    /// assert_eq!(ACE_OF_SPADES, Card::ACE + Card::SPADES);
    /// ```
    #[must_use]
    pub const fn of(rank: Self, group: Self) -> Self {
        Self(rank.0.wrapping_add(group.0))
    }

    /// Wraps a raw code.
    #[must_use]
    pub const fn from_u8(code: u8) -> Self {
        Self(code)
    }

    /// Returns the raw code.
    #[must_use]
    pub const fn to_u8(self) -> u8 {
        self.0
    }

    /// Returns the card at position `ord` of the 52-card ordinal, or
    /// [`Card::UNKNOWN`] when `ord` is outside `0..52`.
    ///
    /// The ordinal runs through Spades, Hearts, Diamonds, then Clubs, and
    /// within each suit through Ace, Two .. Ten, Jack, Queen, King.
    ///
    /// ```
    /// use toydeck::Card;
    ///
    /// assert_eq!(Card::from_ord52(0), Card::ACE + Card::SPADES);
    /// assert_eq!(Card::from_ord52(51), Card::KING + Card::CLUBS);
    /// assert_eq!(Card::from_ord52(52), Card::UNKNOWN);
    /// ```
    #[must_use]
    pub const fn from_ord52(ord: i32) -> Self {
        if ord < 0 || ord >= (STRIDE52 * N_SUITS) as i32 {
            return Self::UNKNOWN;
        }
        let ord = ord as u8;
        let mut rank = ord % STRIDE52 + 1;
        if rank >= KNIGHT {
            rank += 1;
        }
        Self(MIN_SUIT + ord / STRIDE52 * STRIDE + rank)
    }

    /// Iterates over the 52 ordinal cards in ordinal order.
    ///
    /// ```
    /// use toydeck::{Card, DECK_SIZE};
    ///
    /// assert_eq!(Card::ord52_deck().count(), DECK_SIZE);
    /// assert!(Card::ord52_deck().all(Card::is_real));
    /// ```
    #[must_use]
    pub const fn ord52_deck() -> Ord52Deck {
        Ord52Deck { next: 0 }
    }

    /// Reports whether the code is below [`Card::INVALID`].
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 < MAX_CARD
    }

    /// Reports whether the card has a concrete rank and a concrete suit.
    ///
    /// Jokers of the two color groups count as real too.
    #[must_use]
    pub const fn is_real(self) -> bool {
        let c = self.0;
        c > MIN_SUIT
            && ((c < MAX_SUIT && c % STRIDE > 0) || (c % STRIDE == JOKER && c < MAX_CARD))
    }

    /// Reports whether the card is missing its rank or its suit, or only
    /// carries a color.
    ///
    /// This is not the complement of [`Card::is_real`]: invalid codes are
    /// neither, and the color jokers are only real.
    #[must_use]
    pub const fn is_part(self) -> bool {
        let c = self.0;
        c <= MIN_SUIT
            || (c < MAX_CARD && (c % STRIDE == 0 || (c > MAX_SUIT && c % STRIDE < JOKER)))
    }

    /// Returns the rank alone, or [`Card::UNKNOWN`] for invalid codes.
    #[must_use]
    pub const fn rank(self) -> Self {
        if self.0 >= MAX_CARD {
            return Self::UNKNOWN;
        }
        Self(self.0 % STRIDE)
    }

    /// Returns the real suit alone.
    ///
    /// Color groups and invalid codes have no suit and yield
    /// [`Card::UNKNOWN`], so this never returns [`Card::BLACK`] or
    /// [`Card::WHITE`].
    #[must_use]
    pub const fn suit(self) -> Self {
        let group = self.group();
        if group <= N_SUITS {
            return Self(group * STRIDE);
        }
        Self::UNKNOWN
    }

    /// Returns [`Card::BLACK`] or [`Card::WHITE`], or [`Card::UNKNOWN`]
    /// when the group carries no color.
    ///
    /// ```
    /// use toydeck::Card;
    ///
    /// assert_eq!(Card::CLUBS.color(), Card::BLACK);
    /// assert_eq!((Card::JOKER + Card::WHITE).color(), Card::WHITE);
    /// assert_eq!(Card::SEVEN.color(), Card::UNKNOWN);
    /// ```
    #[must_use]
    pub const fn color(self) -> Self {
        match self.group() {
            SPADES | CLUBS | BLACK => Self::BLACK,
            HEARTS | DIAMONDS | WHITE => Self::WHITE,
            _ => Self::UNKNOWN,
        }
    }

    /// Returns the position of the card in the 52-card ordinal, or `-1`
    /// when the card has none.
    ///
    /// Only real suits with ranks Ace through King, Knight excluded, have
    /// an ordinal.
    #[must_use]
    pub const fn ord52(self) -> i32 {
        if self.0 < MIN_SUIT || self.0 >= MAX_SUIT {
            return -1;
        }
        let offset = match self.0 % STRIDE {
            0 | KNIGHT | JOKER => return -1,
            // Skip over the Knight.
            r @ (QUEEN | KING) => r - 2,
            r => r - 1,
        };
        ((self.0 - MIN_SUIT) / STRIDE * STRIDE52 + offset) as i32
    }

    /// The raw group index, `0..=15`.
    pub(crate) const fn group(self) -> u8 {
        self.0 / STRIDE
    }

    /// The raw rank field, `0..16`, without the validity check of
    /// [`Card::rank`].
    pub(crate) const fn rank_field(self) -> u8 {
        self.0 % STRIDE
    }
}

impl Add for Card {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::of(self, rhs)
    }
}

impl From<u8> for Card {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.0
    }
}

/// Iterator over the 52 ordinal cards, returned by [`Card::ord52_deck`].
#[derive(Debug, Clone)]
pub struct Ord52Deck {
    next: u8,
}

impl Iterator for Ord52Deck {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        if usize::from(self.next) >= DECK_SIZE {
            return None;
        }
        let card = Card::from_ord52(i32::from(self.next));
        self.next += 1;
        Some(card)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = DECK_SIZE.saturating_sub(usize::from(self.next));
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Ord52Deck {}

impl FusedIterator for Ord52Deck {}
