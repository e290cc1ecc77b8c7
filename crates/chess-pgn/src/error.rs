//! Errors produced while reading PGN text.

use thiserror::Error;

/// Errors that can occur when parsing a PGN game.
///
/// `MalformedTag` is recovered locally by skipping the segment. The other
/// variants desynchronize the token stream and abort the parse.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PgnError {
    #[error("malformed tag pair: [{segment}]")]
    MalformedTag { segment: String },

    #[error("unterminated comment starting at byte {position}")]
    UnterminatedAnnotation { position: usize },

    #[error("unbalanced variation at token {token_index}")]
    UnbalancedVariation { token_index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PgnError::MalformedTag {
            segment: "Event".to_string(),
        };
        assert!(format!("{}", err).contains("[Event]"));

        let err = PgnError::UnterminatedAnnotation { position: 42 };
        assert!(format!("{}", err).contains("42"));

        let err = PgnError::UnbalancedVariation { token_index: 7 };
        assert!(format!("{}", err).contains("token 7"));
    }
}
