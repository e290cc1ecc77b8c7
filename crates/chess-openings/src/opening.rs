//! Classification result.

use serde::{Deserialize, Serialize};

/// An opening classification: ECO code and name.
///
/// The default value (both fields empty) means "not classified".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Opening {
    /// The ECO code (e.g., "B20", "C44").
    pub eco: String,
    /// The name of the opening.
    pub name: String,
}

impl Opening {
    /// Creates a new opening with the given ECO code and name.
    #[must_use]
    pub fn new(eco: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            eco: eco.into(),
            name: name.into(),
        }
    }

    /// Returns true if this is the empty "not classified" result.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.eco.is_empty() && self.name.is_empty()
    }
}

impl std::fmt::Display for Opening {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.eco, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_new() {
        let opening = Opening::new("C44", "King's Pawn Game");
        assert_eq!(opening.eco, "C44");
        assert_eq!(opening.name, "King's Pawn Game");
        assert!(!opening.is_empty());
    }

    #[test]
    fn test_default_is_empty() {
        assert!(Opening::default().is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(Opening::new("B20", "Sicilian defence").to_string(), "B20 Sicilian defence");
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&Opening::new("A00", "Polish")).unwrap();
        assert_eq!(json, r#"{"eco":"A00","name":"Polish"}"#);
    }
}
