//! Shared, reloadable opening tree.

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use thiserror::Error;

use crate::{Continuation, Opening, OpeningTree};

/// Errors that can occur when loading an opening catalog.
#[derive(Debug, Error)]
pub enum OpeningError {
    /// Failed to read the catalog file.
    #[error("failed to read opening catalog: {0}")]
    Io(#[from] std::io::Error),

    /// A catalog line could not be split into code, name and moves.
    #[error("malformed catalog line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },
}

/// An opening tree that can be swapped out while other threads classify.
///
/// A reload builds the new tree completely before replacing the old one, so
/// readers see either the previous tree or the new one, never a mix.
#[derive(Debug, Default)]
pub struct OpeningBook {
    tree: RwLock<Option<Arc<OpeningTree>>>,
}

impl OpeningBook {
    /// Creates a book with no tree loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a book serving `tree`.
    #[must_use]
    pub fn with_tree(tree: OpeningTree) -> Self {
        Self {
            tree: RwLock::new(Some(Arc::new(tree))),
        }
    }

    /// Builds a tree from catalog text and publishes it. Returns the node count.
    pub fn load(&self, catalog: &str) -> usize {
        let tree = OpeningTree::build(catalog);
        let nodes = tree.len();
        self.publish(tree);
        nodes
    }

    /// Reads a catalog file, then builds and publishes its tree.
    ///
    /// # Errors
    ///
    /// Returns [`OpeningError::Io`] if the file cannot be read; the current
    /// tree stays in place.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<usize, OpeningError> {
        let catalog = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loading opening catalog");
        Ok(self.load(&catalog))
    }

    /// Replaces the served tree.
    pub fn publish(&self, tree: OpeningTree) {
        let tree = Arc::new(tree);
        let nodes = tree.len();
        *self.tree.write().unwrap_or_else(PoisonError::into_inner) = Some(tree);
        tracing::info!(nodes, "published opening tree");
    }

    /// Returns the tree currently served, if any.
    pub fn snapshot(&self) -> Option<Arc<OpeningTree>> {
        self.tree
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot().is_some()
    }

    /// Classifies a move sequence; empty if no tree is loaded.
    pub fn identify<S: AsRef<str>>(&self, moves: &[S]) -> Opening {
        self.snapshot()
            .map(|tree| tree.identify(moves))
            .unwrap_or_default()
    }

    /// Classifies a movetext string; empty if no tree is loaded.
    pub fn identify_text(&self, move_text: &str) -> Opening {
        self.snapshot()
            .map(|tree| tree.identify_text(move_text))
            .unwrap_or_default()
    }

    pub fn continuations<S: AsRef<str>>(&self, moves: &[S]) -> Vec<Continuation> {
        self.snapshot()
            .map(|tree| tree.continuations(moves))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unloaded_book_returns_empty_result() {
        let book = OpeningBook::new();
        assert!(!book.is_loaded());
        assert!(book.identify(&["e4"]).is_empty());
        assert!(book.identify_text("1.e4").is_empty());
    }

    #[test]
    fn load_replaces_tree() {
        let book = OpeningBook::new();
        assert_eq!(book.load("B20 \"Sicilian\" 1.e4 c5"), 3);
        assert_eq!(book.identify(&["e4", "c5"]).eco, "B20");

        book.load("C00 \"French\" 1.e4 e6");
        assert!(book.identify(&["e4", "c5"]).is_empty());
        assert_eq!(book.identify(&["e4", "e6"]).eco, "C00");
    }

    #[test]
    fn snapshot_outlives_reload() {
        let book = OpeningBook::with_tree(OpeningTree::build("B20 \"Sicilian\" 1.e4 c5"));
        let old = book.snapshot().unwrap();
        book.load("C00 \"French\" 1.e4 e6");
        assert_eq!(old.identify(&["e4", "c5"]).eco, "B20");
    }

    #[test]
    fn missing_file_keeps_current_tree() {
        let book = OpeningBook::with_tree(OpeningTree::build("B20 \"Sicilian\" 1.e4 c5"));
        let result = book.load_file("/nonexistent/eco.pgn");
        assert!(matches!(result, Err(OpeningError::Io(_))));
        assert_eq!(book.identify(&["e4", "c5"]).eco, "B20");
    }

    #[test]
    fn error_display() {
        let err = OpeningError::MalformedLine {
            line: 12,
            reason: "missing quoted name".to_string(),
        };
        assert_eq!(err.to_string(), "malformed catalog line 12: missing quoted name");
    }
}
