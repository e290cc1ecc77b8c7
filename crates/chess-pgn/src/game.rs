//! A parsed PGN game.

use std::fmt;

use serde::Serialize;

use crate::movetext::{build_main_line, build_variations, variation_to_string, Move, Variation};
use crate::stringify::{write_pgn, StringifyOptions};
use crate::tag::{header_len, TagList};
use crate::token::tokenize;
use crate::PgnError;

/// Tags, main-line moves and variation lines of one game.
///
/// Every call to [`PgnGame::parse`] builds a fresh value; nothing is shared
/// between games.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PgnGame {
    tags: TagList,
    moves: Vec<Move>,
    variations: Vec<Variation>,
    leading_comment: String,
}

impl PgnGame {
    /// Parses a single game.
    ///
    /// # Errors
    ///
    /// Returns [`PgnError::UnterminatedAnnotation`] or
    /// [`PgnError::UnbalancedVariation`] when the movetext cannot be split into
    /// tokens consistently. Malformed tags are skipped, not reported.
    pub fn parse(text: &str) -> Result<Self, PgnError> {
        let tags = TagList::parse(&text[..header_len(text)]);
        let tokens = tokenize(text, tags.get("Result"))?;
        let main_line = build_main_line(&tokens)?;
        let variations = build_variations(&tokens)?;

        tracing::debug!(
            tags = tags.len(),
            tokens = tokens.len(),
            moves = main_line.moves.len(),
            variations = variations.len() - 1,
            "parsed game"
        );

        Ok(Self {
            tags,
            moves: main_line.moves,
            variations,
            leading_comment: main_line.leading_comment,
        })
    }

    /// Returns the value of a tag, or `""` if it is absent.
    pub fn tag(&self, name: &str) -> &str {
        self.tags.get(name)
    }

    /// Sets a tag; names outside [`crate::KNOWN_TAGS`] are ignored.
    pub fn set_tag(&mut self, name: &str, value: impl Into<String>) -> bool {
        self.tags.set(name, value)
    }

    pub fn tags(&self) -> &TagList {
        &self.tags
    }

    /// The game termination marker from the `Result` tag.
    pub fn result(&self) -> &str {
        self.tags.get("Result")
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Main-line moves in SAN.
    pub fn sans(&self) -> Vec<&str> {
        self.moves.iter().map(|m| m.notation.as_str()).collect()
    }

    /// All lines of play; index 0 is the main line.
    pub fn variations(&self) -> &[Variation] {
        &self.variations
    }

    /// Every line of play rendered as numbered movetext.
    pub fn variation_lines(&self) -> Vec<String> {
        self.variations
            .iter()
            .map(|line| variation_to_string(line))
            .collect()
    }

    /// Comment placed before the first move, if any.
    pub fn leading_comment(&self) -> &str {
        &self.leading_comment
    }

    /// Renders the game as PGN text.
    pub fn to_pgn(&self, options: &StringifyOptions) -> String {
        write_pgn(
            &self.tags,
            &self.leading_comment,
            &self.moves,
            self.result(),
            options,
        )
    }
}

impl fmt::Display for PgnGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pgn(&StringifyOptions::default()))
    }
}

impl std::str::FromStr for PgnGame {
    type Err = PgnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
