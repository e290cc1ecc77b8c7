//! Builds the main line and the variation lines from a token stream.
//!
//! Two independent passes run over the same tokens:
//!
//! - [`build_main_line`] produces one [`Move`] per main-line move. Comments are
//!   attached to the move they follow, and every variation that branches off a
//!   move is re-serialized into that move's `variation_text`.
//! - [`build_variations`] produces every line of play as a complete move list:
//!   index 0 is the main line, each further entry is an alternative line that
//!   repeats the moves leading up to it.

use serde::{Deserialize, Serialize};

use crate::side::{Side, Turn};
use crate::token::Token;
use crate::PgnError;

/// A main-line move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// Full-move number, starting at 1.
    pub ordinal: u32,
    pub side: Side,
    /// The move in SAN, kept exactly as written.
    pub notation: String,
    /// Numeric annotation glyphs. Never filled by the tokenizer.
    pub glyph_codes: Vec<String>,
    /// Comments following the move, joined by single spaces.
    pub annotation: String,
    /// Raw PGN of the variations branching off this move, e.g. `"(4... Bc5 5. d3)"`.
    pub variation_text: String,
}

impl Move {
    pub fn new(ordinal: u32, side: Side, notation: impl Into<String>) -> Self {
        Self {
            ordinal,
            side,
            notation: notation.into(),
            glyph_codes: Vec::new(),
            annotation: String::new(),
            variation_text: String::new(),
        }
    }
}

/// A complete line of play, as SAN strings from the first move.
pub type Variation = Vec<String>;

/// Output of [`build_main_line`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MainLine {
    pub moves: Vec<Move>,
    /// Comment appearing before the first move.
    pub leading_comment: String,
}

/// Verifies that every `(` has a matching `)`.
///
/// # Errors
///
/// Returns [`PgnError::UnbalancedVariation`] with the index of the first
/// unmatched `)`, or of the innermost `(` left open at the end.
pub fn check_balance(tokens: &[Token<'_>]) -> Result<(), PgnError> {
    let mut open = Vec::new();

    for (index, token) in tokens.iter().enumerate() {
        match token {
            Token::VariationOpen(_) => open.push(index),
            Token::VariationClose(_) => {
                if open.pop().is_none() {
                    return Err(PgnError::UnbalancedVariation { token_index: index });
                }
            }
            _ => {}
        }
    }

    match open.last() {
        Some(&index) => Err(PgnError::UnbalancedVariation { token_index: index }),
        None => Ok(()),
    }
}

/// Move counters for one nesting level of the main-line pass.
#[derive(Debug, Clone, Copy)]
struct Level {
    /// Turn of the next move at this level.
    next: Turn,
    /// Turn of the last move played at this level.
    last: Option<Turn>,
}

impl Level {
    fn starting_at(turn: Turn) -> Self {
        Self {
            next: turn,
            last: None,
        }
    }

    fn play(&mut self) -> Turn {
        let turn = self.next;
        self.last = Some(turn);
        self.next.advance();
        turn
    }
}

/// Runs the main-line pass.
///
/// # Errors
///
/// Returns [`PgnError::UnbalancedVariation`] if the parentheses do not match.
pub fn build_main_line(tokens: &[Token<'_>]) -> Result<MainLine, PgnError> {
    check_balance(tokens)?;

    let mut line = MainLine::default();
    let mut levels = vec![Level::starting_at(Turn::START)];
    let mut buffer = String::new();
    // Set whenever a Black move needs an explicit "N..." number in the buffer.
    let mut resume = false;

    for token in tokens {
        let depth = levels.len() - 1;
        match *token {
            Token::Move(notation) if depth == 0 => {
                let turn = levels[0].play();
                line.moves.push(Move::new(turn.ordinal, turn.side, notation));
            }
            Token::Move(notation) => {
                let level = &mut levels[depth];
                let turn = level.play();
                match turn.side {
                    Side::White => buffer.push_str(&format!("{}. ", turn.ordinal)),
                    Side::Black if resume => buffer.push_str(&format!("{}... ", turn.ordinal)),
                    Side::Black => {}
                }
                buffer.push_str(notation);
                buffer.push(' ');
                resume = false;
            }
            Token::Annotation(text) if depth == 0 => match line.moves.last_mut() {
                Some(last) => append_spaced(&mut last.annotation, text),
                None => append_spaced(&mut line.leading_comment, text),
            },
            Token::Annotation(text) => {
                buffer.push('{');
                buffer.push_str(text);
                buffer.push_str("} ");
                resume = true;
            }
            Token::VariationOpen(open) => {
                if depth == 0 {
                    buffer.clear();
                }
                let parent = levels[depth];
                // The variation replaces the parent's last move.
                levels.push(Level::starting_at(parent.last.unwrap_or(parent.next)));
                buffer.push_str(open);
                resume = true;
            }
            Token::VariationClose(close) => {
                levels.pop();
                if buffer.ends_with(' ') {
                    buffer.pop();
                }
                buffer.push_str(close);
                resume = true;

                if levels.len() == 1 {
                    match line.moves.last_mut() {
                        Some(last) => append_spaced(&mut last.variation_text, &buffer),
                        None => tracing::warn!("dropping variation before first move: {}", buffer),
                    }
                    buffer.clear();
                } else {
                    buffer.push(' ');
                }
            }
            Token::Number(_) => {}
        }
    }

    Ok(line)
}

fn append_spaced(target: &mut String, text: &str) {
    if !target.is_empty() {
        target.push(' ');
    }
    target.push_str(text);
}

/// Runs the variation pass.
///
/// Opening a variation copies the current line minus its last move into a new
/// line and makes that line current; closing one returns to the enclosing line.
///
/// # Errors
///
/// Returns [`PgnError::UnbalancedVariation`] if the parentheses do not match.
pub fn build_variations(tokens: &[Token<'_>]) -> Result<Vec<Variation>, PgnError> {
    check_balance(tokens)?;

    let mut lines: Vec<Variation> = vec![Vec::new()];
    let mut stack: Vec<usize> = vec![0];

    for token in tokens {
        let current = stack.last().copied().unwrap_or(0);
        match token {
            Token::Move(notation) => lines[current].push((*notation).to_string()),
            Token::VariationOpen(_) => {
                let mut seed = lines[current].clone();
                seed.pop();
                lines.push(seed);
                stack.push(lines.len() - 1);
            }
            Token::VariationClose(_) => {
                if stack.len() > 1 {
                    stack.pop();
                }
            }
            Token::Number(_) | Token::Annotation(_) => {}
        }
    }

    Ok(lines)
}

/// Renders a line as numbered movetext, e.g. `"1. e4 e5 2. Nf3"`.
pub fn variation_to_string(line: &[String]) -> String {
    let mut out = String::new();
    for (index, notation) in line.iter().enumerate() {
        if index > 0 {
            out.push(' ');
        }
        if index % 2 == 0 {
            out.push_str(&format!("{}. ", index / 2 + 1));
        }
        out.push_str(notation);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tokenize;

    const TWO_KNIGHTS: &str = "1. e4 e5 2. Nf3 Nc6 3. Bc4 Nf6 4. Ng5 d5 (4... Bc5 5. Bxf7+ Ke7 6. Bb3) 5. exd5 Nxd5";

    fn sans(moves: &[Move]) -> Vec<&str> {
        moves.iter().map(|m| m.notation.as_str()).collect()
    }

    #[test]
    fn main_line_ordinals_and_sides() {
        let tokens = tokenize("1.e4 e5 2.Nf3 Nc6 3.Bb5", "").unwrap();
        let line = build_main_line(&tokens).unwrap();

        let triples: Vec<_> = line
            .moves
            .iter()
            .map(|m| (m.ordinal, m.side, m.notation.as_str()))
            .collect();
        assert_eq!(
            triples,
            vec![
                (1, Side::White, "e4"),
                (1, Side::Black, "e5"),
                (2, Side::White, "Nf3"),
                (2, Side::Black, "Nc6"),
                (3, Side::White, "Bb5"),
            ]
        );
    }

    #[test]
    fn main_line_skips_variation_moves() {
        let tokens = tokenize(TWO_KNIGHTS, "").unwrap();
        let line = build_main_line(&tokens).unwrap();
        assert_eq!(
            sans(&line.moves),
            vec!["e4", "e5", "Nf3", "Nc6", "Bc4", "Nf6", "Ng5", "d5", "exd5", "Nxd5"]
        );
    }

    #[test]
    fn variation_text_attached_to_replaced_move() {
        let tokens = tokenize(TWO_KNIGHTS, "").unwrap();
        let line = build_main_line(&tokens).unwrap();

        let d5 = &line.moves[7];
        assert_eq!(d5.notation, "d5");
        assert_eq!(d5.variation_text, "(4... Bc5 5. Bxf7+ Ke7 6. Bb3)");
        assert!(line.moves.iter().filter(|m| !m.variation_text.is_empty()).count() == 1);
    }

    #[test]
    fn nested_and_sibling_variation_text() {
        let text = "1. e4 e5 (1... c5 2. Nf3 (2. c3 d5) 2... d6) (1... e6) 2. Nf3";
        let tokens = tokenize(text, "").unwrap();
        let line = build_main_line(&tokens).unwrap();

        assert_eq!(
            line.moves[1].variation_text,
            "(1... c5 2. Nf3 (2. c3 d5) 2... d6) (1... e6)"
        );
        assert_eq!(sans(&line.moves), vec!["e4", "e5", "Nf3"]);
    }

    #[test]
    fn white_variation_numbering() {
        let tokens = tokenize("1. e4 (1. d4 d5 2. c4) 1... e5", "").unwrap();
        let line = build_main_line(&tokens).unwrap();
        assert_eq!(line.moves[0].variation_text, "(1. d4 d5 2. c4)");
    }

    #[test]
    fn comments_attach_to_preceding_move() {
        let text = "{Opening remarks} 1. e4 {King's pawn} {Popular} e5 2. Nf3 (2. f4 {Gambit}) Nc6";
        let tokens = tokenize(text, "").unwrap();
        let line = build_main_line(&tokens).unwrap();

        assert_eq!(line.leading_comment, "");
        assert_eq!(line.moves[0].annotation, "King's pawn Popular");
        assert_eq!(line.moves[1].annotation, "");
        assert_eq!(line.moves[2].variation_text, "(2. f4 {Gambit})");
    }

    #[test]
    fn comment_before_first_move() {
        let tokens = tokenize("1. {Game starts} e4 e5", "").unwrap();
        let line = build_main_line(&tokens).unwrap();
        assert_eq!(line.leading_comment, "Game starts");
        assert_eq!(line.moves[0].annotation, "");
    }

    #[test]
    fn variations_flatten_into_complete_lines() {
        let tokens = tokenize(TWO_KNIGHTS, "").unwrap();
        let lines = build_variations(&tokens).unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            vec!["e4", "e5", "Nf3", "Nc6", "Bc4", "Nf6", "Ng5", "d5", "exd5", "Nxd5"]
        );
        assert_eq!(
            lines[1],
            vec!["e4", "e5", "Nf3", "Nc6", "Bc4", "Nf6", "Ng5", "Bc5", "Bxf7+", "Ke7", "Bb3"]
        );
    }

    #[test]
    fn nested_variation_copies_from_innermost_line() {
        let text = "1. e4 e5 2. Nf3 (2. Bc4 Nf6 (2... Bc5 3. Qh5)) 2... Nc6";
        let tokens = tokenize(text, "").unwrap();
        let lines = build_variations(&tokens).unwrap();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], vec!["e4", "e5", "Nf3", "Nc6"]);
        assert_eq!(lines[1], vec!["e4", "e5", "Bc4", "Nf6"]);
        assert_eq!(lines[2], vec!["e4", "e5", "Bc4", "Bc5", "Qh5"]);
    }

    #[test]
    fn unbalanced_open_reports_token_index() {
        let tokens = tokenize("1. e4 e5 (1... c5 2. Nf3", "").unwrap();
        let expected = Err(PgnError::UnbalancedVariation { token_index: 3 });
        assert_eq!(check_balance(&tokens), expected);
        assert_eq!(build_variations(&tokens).map(|_| ()), expected);
        assert_eq!(build_main_line(&tokens).map(|_| ()), expected);
    }

    #[test]
    fn unbalanced_close_reports_token_index() {
        let tokens = tokenize("1. e4 e5) 2. Nf3", "").unwrap();
        assert_eq!(
            check_balance(&tokens),
            Err(PgnError::UnbalancedVariation { token_index: 3 })
        );
    }

    #[test]
    fn variation_to_string_numbers_white_moves() {
        let line: Variation = vec!["e4".into(), "e5".into(), "Nf3".into()];
        assert_eq!(variation_to_string(&line), "1. e4 e5 2. Nf3");
        assert_eq!(variation_to_string(&[]), "");
    }
}
