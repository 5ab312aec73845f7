//! Error types for parsing cards from text.

use thiserror::Error;

/// Errors that can occur when parsing a [`Card`](crate::Card) from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The text is not exactly two characters long.
    #[error("expected 2 characters, found {0}")]
    Length(usize),
    /// The first character is not a rank abbreviation.
    #[error("unknown rank abbreviation {0:?}")]
    Rank(char),
    /// The second character is neither a group abbreviation nor a suit glyph.
    #[error("unknown suit or color {0:?}")]
    Group(char),
}
