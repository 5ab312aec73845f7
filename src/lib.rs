//! A compact one-byte playing-card encoding with optional `no_std` support.
//!
//! A [`Card`] packs a rank and a group (suit or color) into a single byte.
//! Besides full cards it can describe a bare rank, a bare suit, a color with
//! a rank, or nothing at all, and it maps the standard 52 cards to and from
//! their ordinal positions.
//!
//! Every operation is total: codes that describe nothing produce sentinel
//! values such as [`Card::UNKNOWN`], `-1`, `"XX"`, or [`UNREPRESENTABLE`]
//! instead of failing.
//!
//! # Example
//!
//! ```
//! use toydeck::Card;
//!
//! let card = Card::KING + Card::DIAMONDS;
//! assert_eq!(format!("{card:?}"), "Kd");
//! assert_eq!(card.to_string(), "K♢");
//! assert_eq!(card.name().to_string(), "King of Diamonds");
//! assert_eq!(card.symbol(), '🃎');
//! assert_eq!(Card::from_ord52(card.ord52()), card);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod error;
pub mod format;
mod parse;

// Re-export main types
pub use card::{Card, DECK_SIZE, Ord52Deck};
pub use error::ParseCardError;
pub use format::{Name, UNREPRESENTABLE};
