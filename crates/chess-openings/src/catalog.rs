//! Opening catalog text format.
//!
//! Each entry is one logical line:
//!
//! ```text
//! C60 "Ruy Lopez" 1.e4 e5 2.Nf3 Nc6 3.Bb5
//! ```
//!
//! A physical line starting with whitespace continues the previous entry.
//! Blank lines and lines starting with `#` are ignored.

use crate::OpeningError;

/// A logical catalog line after continuation lines have been joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLine {
    /// 1-based number of the first physical line.
    pub number: usize,
    pub text: String,
}

/// Drops comments and blank lines and joins continuation lines onto the
/// entry they belong to.
///
/// This must run before entries are parsed, since a continuation has no code
/// or name of its own.
pub fn normalize(catalog: &str) -> Vec<CatalogLine> {
    let mut lines: Vec<CatalogLine> = Vec::new();

    for (index, raw) in catalog.lines().enumerate() {
        if raw.trim().is_empty() || raw.starts_with('#') {
            continue;
        }

        if raw.starts_with(char::is_whitespace) {
            if let Some(previous) = lines.last_mut() {
                previous.text.push_str(raw);
                continue;
            }
            tracing::debug!(line = index + 1, "continuation line without an entry");
        }

        lines.push(CatalogLine {
            number: index + 1,
            text: raw.trim().to_string(),
        });
    }

    lines
}

/// One parsed catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub eco: String,
    pub name: String,
    /// Move labels with move numbers stripped.
    pub moves: Vec<String>,
}

impl CatalogEntry {
    /// Splits a logical line into code, quoted name and move list.
    ///
    /// # Errors
    ///
    /// Returns [`OpeningError::MalformedLine`] if the code is missing or the
    /// name is not enclosed in double quotes.
    pub fn parse(line: &CatalogLine) -> Result<Self, OpeningError> {
        let malformed = |reason: &str| OpeningError::MalformedLine {
            line: line.number,
            reason: reason.to_string(),
        };

        let text = line.text.as_str();
        let open = text.find('"').ok_or_else(|| malformed("missing quoted name"))?;
        let close = text[open + 1..]
            .find('"')
            .map(|offset| open + 1 + offset)
            .ok_or_else(|| malformed("unterminated name"))?;

        let eco = text[..open].trim();
        if eco.is_empty() {
            return Err(malformed("missing code"));
        }

        let moves = text[close + 1..]
            .split_whitespace()
            .filter(|token| !is_result_marker(token))
            .map(strip_move_number)
            .filter(|label| !label.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            eco: eco.to_string(),
            name: text[open + 1..close].to_string(),
            moves,
        })
    }
}

/// Removes a leading move number such as `"1."` or `"12..."` from a token.
///
/// Tokens that do not start with digits followed by a dot are returned
/// unchanged; a bare number like `"3."` becomes empty.
pub fn strip_move_number(token: &str) -> &str {
    let rest = token.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() < token.len() && rest.starts_with('.') {
        rest.trim_start_matches('.')
    } else {
        token
    }
}

fn is_result_marker(token: &str) -> bool {
    matches!(token, "*" | "1-0" | "0-1" | "1/2-1/2")
}
