//! Text and JSON rendering of parsed games for the terminal.

use chess_openings::Opening;
use chess_pgn::{Move, PgnGame, Side};
use serde::Serialize;

/// JSON representation of a game's main line.
#[derive(Serialize)]
struct MovesJson<'a> {
    result: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    leading_comment: Option<&'a str>,
    moves: &'a [Move],
}

/// One tag pair per line, in PGN form.
pub fn tags(game: &PgnGame) -> String {
    game.tags().iter().map(|tag| format!("{tag}\n")).collect()
}

/// One main-line move per line with its glyphs and comment.
///
/// ```text
/// 1. e4
/// 1... e5 {Open game}
/// 2. Nf3
/// ```
pub fn moves(game: &PgnGame) -> String {
    let mut out = String::new();
    for mv in game.moves() {
        let dots = match mv.side {
            Side::White => ".",
            Side::Black => "...",
        };
        out.push_str(&format!("{}{} {}", mv.ordinal, dots, mv.notation));
        for glyph in &mv.glyph_codes {
            out.push(' ');
            out.push_str(glyph);
        }
        if !mv.annotation.is_empty() {
            out.push_str(&format!(" {{{}}}", mv.annotation));
        }
        out.push('\n');
    }
    out
}

/// The main line as pretty-printed JSON.
pub fn moves_json(game: &PgnGame) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&MovesJson {
        result: game.result(),
        leading_comment: Some(game.leading_comment()).filter(|comment| !comment.is_empty()),
        moves: game.moves(),
    })
}

/// Every variation line, numbered from 0 (the main line).
pub fn variations(game: &PgnGame) -> String {
    game.variation_lines()
        .iter()
        .enumerate()
        .map(|(index, line)| format!("{index:>3}: {line}\n"))
        .collect()
}

pub fn opening(opening: &Opening) -> String {
    if opening.is_empty() {
        "unknown opening".to_string()
    } else {
        opening.to_string()
    }
}
