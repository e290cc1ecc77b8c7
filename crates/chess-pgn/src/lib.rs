//! PGN (Portable Game Notation) reading and writing.
//!
//! This crate turns the text of a chess game into structured data and back:
//! - [`TagList`] for the `[Name "Value"]` header pairs
//! - [`tokenize`] for splitting movetext into [`Token`]s
//! - [`build_main_line`] and [`build_variations`] for the move lists
//! - [`stringify`] for writing a game back out
//! - [`PgnGame`] tying the steps together
//!
//! Moves are treated as opaque SAN strings; no legality checking is done.

mod error;
mod game;
mod movetext;
mod side;
mod stringify;
mod tag;
mod token;

pub use error::PgnError;
pub use game::PgnGame;
pub use movetext::{
    build_main_line, build_variations, check_balance, variation_to_string, MainLine, Move,
    Variation,
};
pub use side::Side;
pub use stringify::{stringify, StringifyOptions};
pub use tag::{header_len, is_known_tag, Tag, TagList, KNOWN_TAGS};
pub use token::{tokenize, Token};
