//! Writes tags and moves back out as PGN text.

use serde::{Deserialize, Serialize};

use crate::movetext::Move;
use crate::side::Side;
use crate::tag::TagList;

/// Selects which optional move fields are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringifyOptions {
    pub glyph_codes: bool,
    pub annotations: bool,
    pub variations: bool,
}

impl StringifyOptions {
    /// Only move numbers and moves.
    pub const MOVES_ONLY: StringifyOptions = StringifyOptions {
        glyph_codes: false,
        annotations: false,
        variations: false,
    };
}

impl Default for StringifyOptions {
    fn default() -> Self {
        Self {
            glyph_codes: true,
            annotations: true,
            variations: true,
        }
    }
}

/// Renders a game as PGN.
///
/// Tags come first, one per line in their stored order, followed by a blank
/// line and the movetext. White moves are prefixed with `"{ordinal}."`; a
/// Black move that follows a comment or variation gets `"{ordinal}..."` so the
/// output parses back to the same moves. `result` terminates the movetext.
pub fn stringify(
    tags: &TagList,
    moves: &[Move],
    result: &str,
    options: &StringifyOptions,
) -> String {
    write_pgn(tags, "", moves, result, options)
}

pub(crate) fn write_pgn(
    tags: &TagList,
    leading_comment: &str,
    moves: &[Move],
    result: &str,
    options: &StringifyOptions,
) -> String {
    let mut out = String::new();
    for tag in tags {
        out.push_str(&tag.to_string());
        out.push('\n');
    }
    if !tags.is_empty() {
        out.push('\n');
    }

    let mut parts: Vec<String> = Vec::with_capacity(moves.len() + 1);
    let mut leading = (options.annotations && !leading_comment.is_empty()).then_some(leading_comment);
    let mut interrupted = false;

    for mv in moves {
        let rendered = match (mv.side, leading.take()) {
            (Side::White, Some(comment)) => {
                format!("{}. {{{}}} {}", mv.ordinal, comment, mv.notation)
            }
            (Side::White, None) => format!("{}.{}", mv.ordinal, mv.notation),
            (Side::Black, _) if interrupted => format!("{}...{}", mv.ordinal, mv.notation),
            (Side::Black, _) => mv.notation.clone(),
        };
        parts.push(rendered);
        interrupted = false;

        if options.glyph_codes {
            parts.extend(mv.glyph_codes.iter().cloned());
        }
        if options.annotations && !mv.annotation.is_empty() {
            parts.push(format!("{{{}}}", mv.annotation));
            interrupted = true;
        }
        if options.variations && !mv.variation_text.is_empty() {
            parts.push(mv.variation_text.clone());
            interrupted = true;
        }
    }

    // A game without moves still keeps its comment.
    if let Some(comment) = leading {
        parts.push(format!("{{{}}}", comment));
    }
    if !result.is_empty() {
        parts.push(result.to_string());
    }

    out.push_str(&parts.join(" "));
    out.push('\n');
    out
}
