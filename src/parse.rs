//! Parsing cards back from their short text forms.

use core::str::FromStr;

use crate::card::{Card, N_SUITS, STRIDE};
use crate::error::ParseCardError;
use crate::format::{GROUP_ABBR, RANK_ABBR, suit_glyph};

fn position(table: &[u8], ch: char) -> Option<u8> {
    let byte = u8::try_from(ch).ok()?;
    table
        .iter()
        .position(|&abbr| abbr == byte)
        .map(|index| index as u8)
}

fn parse_group(ch: char) -> Option<u8> {
    position(GROUP_ABBR, ch).or_else(|| (1..=N_SUITS).find(|&group| suit_glyph(group) == ch))
}

/// Accepts both the [`Debug`](core::fmt::Debug) form (`As`, `?c`, `*w`) and
/// the [`Display`](core::fmt::Display) form (`A♠`, `?♣`).
///
/// ```
/// use toydeck::Card;
///
/// assert_eq!("3h".parse(), Ok(Card::THREE + Card::HEARTS));
/// assert_eq!("K♣".parse(), Ok(Card::KING + Card::CLUBS));
/// assert_eq!("??".parse(), Ok(Card::UNKNOWN));
/// assert!("XX".parse::<Card>().is_err());
/// ```
impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank), Some(group), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCardError::Length(s.chars().count()));
        };
        let rank = position(RANK_ABBR, rank).ok_or(ParseCardError::Rank(rank))?;
        let group = parse_group(group).ok_or(ParseCardError::Group(group))?;
        Ok(Self::from_u8(group * STRIDE + rank))
    }
}
