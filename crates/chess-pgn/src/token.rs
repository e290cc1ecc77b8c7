//! Movetext tokenizer.
//!
//! Scans the movetext of a game into a flat list of [`Token`]s. Moves are not
//! validated; any run of characters that starts like a SAN move is taken
//! verbatim.

use crate::tag::header_len;
use crate::PgnError;

/// A lexical unit of movetext. Each variant borrows its text from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Move number marker including its dots, e.g. `"12."` or `"4..."`.
    Number(&'a str),
    /// A move in SAN, e.g. `"Nxe5+"`.
    Move(&'a str),
    /// Body of a `{ ... }` comment, braces and surrounding whitespace removed.
    Annotation(&'a str),
    VariationOpen(&'a str),
    VariationClose(&'a str),
}

/// Tokenizes the movetext of `text`.
///
/// Scanning starts at the first `"1."` after the tag section that is not
/// inside a `{ ... }` comment; comments directly before it are kept. When the
/// trimmed input ends with `result`, the marker is cut off by length, since
/// strings like `1-0` can also occur inside comments. Otherwise scanning runs
/// to the end of the input.
///
/// # Errors
///
/// Returns [`PgnError::UnterminatedAnnotation`] if a `{` has no closing `}`
/// before the end of the scanned range.
pub fn tokenize<'a>(text: &'a str, result: &str) -> Result<Vec<Token<'a>>, PgnError> {
    let start = movetext_start(text, header_len(text));

    let trimmed = text.trim_end();
    let end = if trimmed.ends_with(result) {
        trimmed.len() - result.len()
    } else {
        trimmed.len()
    };

    scan(text, start, end.max(start))
}

/// Finds the first `"1."` at or after `header`, skipping comment bodies.
///
/// Returns the start of any run of comments and whitespace directly before
/// it, or `header` if there is no such marker.
fn movetext_start(text: &str, header: usize) -> usize {
    let bytes = text.as_bytes();
    let mut pos = header;
    let mut run_start: Option<usize> = None;

    while pos < bytes.len() {
        match bytes[pos] {
            b'{' => {
                run_start.get_or_insert(pos);
                match text[pos..].find('}') {
                    Some(close) => pos += close + 1,
                    // Let the scanner report the unterminated comment.
                    None => return header,
                }
            }
            b if b.is_ascii_whitespace() => pos += 1,
            _ if bytes[pos..].starts_with(b"1.") => return run_start.unwrap_or(pos),
            _ => {
                run_start = None;
                pos += 1;
            }
        }
    }

    header
}

fn scan(text: &str, start: usize, end: usize) -> Result<Vec<Token<'_>>, PgnError> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = start;

    while pos < end {
        match bytes[pos] {
            b'0'..=b'9' => {
                let from = pos;
                while pos < end && bytes[pos].is_ascii_digit() {
                    pos += 1;
                }
                while pos < end && bytes[pos] == b'.' {
                    pos += 1;
                }
                tokens.push(Token::Number(&text[from..pos]));
            }
            b'(' => {
                tokens.push(Token::VariationOpen(&text[pos..pos + 1]));
                pos += 1;
            }
            b')' => {
                tokens.push(Token::VariationClose(&text[pos..pos + 1]));
                pos += 1;
            }
            b'{' => {
                let body_start = pos + 1;
                let close = text[body_start..end]
                    .find('}')
                    .ok_or(PgnError::UnterminatedAnnotation { position: pos })?;
                tokens.push(Token::Annotation(
                    text[body_start..body_start + close].trim(),
                ));
                pos = body_start + close + 1;
            }
            b'a'..=b'h' | b'K' | b'Q' | b'B' | b'N' | b'R' | b'O' => {
                let from = pos;
                while pos < end && !ends_move(bytes[pos]) {
                    pos += 1;
                }
                tokens.push(Token::Move(&text[from..pos]));
            }
            _ => pos += 1,
        }
    }

    Ok(tokens)
}

#[inline]
fn ends_move(b: u8) -> bool {
    b.is_ascii_whitespace() || matches!(b, b'(' | b')' | b'{' | b'}')
}
