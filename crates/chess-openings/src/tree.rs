//! Opening tree: a prefix tree over move labels.
//!
//! Nodes live in a single arena and refer to their children by [`NodeId`].
//! Only nodes where a catalog entry ends carry an ECO code and name.

use std::collections::BTreeMap;

use crate::catalog::{normalize, strip_move_number, CatalogEntry};
use crate::Opening;

/// Handle of a node inside an [`OpeningTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A position in the opening tree, reached by playing its label after its parent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpeningNode {
    label: String,
    opening: Opening,
    children: BTreeMap<String, NodeId>,
}

impl OpeningNode {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            ..Self::default()
        }
    }

    /// The move leading to this node; empty for the root.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The classification stored here, empty if no catalog entry ends here.
    pub fn opening(&self) -> &Opening {
        &self.opening
    }

    pub fn children(&self) -> impl Iterator<Item = (&str, NodeId)> + '_ {
        self.children.iter().map(|(label, id)| (label.as_str(), *id))
    }
}

/// A book move available from some position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Continuation {
    pub label: String,
    /// Classification stored at the resulting node, possibly empty.
    pub opening: Opening,
}

/// Prefix tree of catalog lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningTree {
    nodes: Vec<OpeningNode>,
}

impl Default for OpeningTree {
    fn default() -> Self {
        Self::new()
    }
}

impl OpeningTree {
    pub const ROOT: NodeId = NodeId(0);

    /// Creates a tree holding only the starting position.
    pub fn new() -> Self {
        Self {
            nodes: vec![OpeningNode::new("")],
        }
    }

    /// Builds a tree from catalog text.
    ///
    /// Malformed lines and lines without moves are logged and skipped.
    pub fn build(catalog: &str) -> Self {
        let mut tree = Self::new();
        let mut entries = 0usize;

        for line in normalize(catalog) {
            let entry = match CatalogEntry::parse(&line) {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!("skipping catalog entry: {}", err);
                    continue;
                }
            };
            if entry.moves.is_empty() {
                tracing::debug!(line = line.number, eco = %entry.eco, "catalog entry has no moves");
                continue;
            }
            tree.insert(&entry);
            entries += 1;
        }

        if entries == 0 {
            tracing::warn!("opening catalog contains no entries");
        }
        tracing::debug!(entries, nodes = tree.len(), "built opening tree");
        tree
    }

    /// Adds an entry's moves to the tree and returns the node where it ends.
    ///
    /// The code and name are stored on that final node unless an earlier
    /// entry already ended there; the first entry for a path wins.
    pub fn insert(&mut self, entry: &CatalogEntry) -> NodeId {
        let mut current = Self::ROOT;

        for label in &entry.moves {
            current = match self.child(current, label) {
                Some(child) => child,
                None => {
                    let child = NodeId(self.nodes.len());
                    self.nodes.push(OpeningNode::new(label));
                    self.nodes[current.0].children.insert(label.clone(), child);
                    child
                }
            };
        }

        let node = &mut self.nodes[current.0];
        if current != Self::ROOT && node.opening.is_empty() {
            node.opening = Opening::new(&entry.eco, &entry.name);
        }
        current
    }

    /// Returns the node for `id`; `None` if the id belongs to another tree.
    pub fn node(&self, id: NodeId) -> Option<&OpeningNode> {
        self.nodes.get(id.0)
    }

    pub fn root(&self) -> &OpeningNode {
        &self.nodes[Self::ROOT.0]
    }

    /// Returns the child of `id` reached by `label`.
    pub fn child(&self, id: NodeId, label: &str) -> Option<NodeId> {
        self.node(id)?.children.get(label).copied()
    }

    /// Number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree holds only the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Follows `moves` from the root; `None` if the sequence leaves the book.
    pub fn walk<S: AsRef<str>>(&self, moves: &[S]) -> Option<NodeId> {
        moves.iter().try_fold(Self::ROOT, |id, mv| {
            self.child(id, strip_move_number(mv.as_ref()))
        })
    }

    /// Classifies a move sequence.
    ///
    /// Walks from the root for as long as the moves stay in the tree and
    /// returns the classification of the deepest classified node passed.
    /// Returns the empty [`Opening`] if nothing matched.
    pub fn identify<S: AsRef<str>>(&self, moves: &[S]) -> Opening {
        let mut current = Self::ROOT;
        let mut found = &self.root().opening;

        for mv in moves {
            match self.child(current, strip_move_number(mv.as_ref())) {
                Some(next) => current = next,
                None => break,
            }
            let opening = &self.nodes[current.0].opening;
            if !opening.is_empty() {
                found = opening;
            }
        }

        found.clone()
    }

    /// Classifies a movetext string such as `"1.e4 e5 2.Nf3"`.
    pub fn identify_text(&self, move_text: &str) -> Opening {
        let moves: Vec<&str> = move_text
            .split_whitespace()
            .map(strip_move_number)
            .filter(|label| !label.is_empty())
            .collect();
        self.identify(moves.as_slice())
    }

    /// Lists the book moves available after `moves`, in label order.
    pub fn continuations<S: AsRef<str>>(&self, moves: &[S]) -> Vec<Continuation> {
        let Some(id) = self.walk(moves) else {
            return Vec::new();
        };
        self.nodes[id.0]
            .children()
            .map(|(label, child)| Continuation {
                label: label.to_string(),
                opening: self.nodes[child.0].opening.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = "\
C20 \"King's pawn game\" 1.e4 e5
C60 \"Ruy Lopez\" 1.e4 e5 2.Nf3 Nc6 3.Bb5
C50 \"Italian game\" 1.e4 e5 2.Nf3 Nc6 3.Bc4
B20 \"Sicilian defence\" 1.e4 c5
";

    #[test]
    fn build_shares_prefixes() {
        let tree = OpeningTree::build(CATALOG);
        // root, e4, e5, Nf3, Nc6, Bb5, Bc4, c5
        assert_eq!(tree.len(), 8);
        let e4 = tree.child(OpeningTree::ROOT, "e4").unwrap();
        assert_eq!(tree.node(e4).unwrap().children().count(), 2);
    }

    #[test]
    fn intermediate_nodes_carry_no_code() {
        let tree = OpeningTree::build(CATALOG);
        let nf3 = tree.walk(&["e4", "e5", "Nf3"]).unwrap();
        let node = tree.node(nf3).unwrap();
        assert!(node.opening().is_empty());
        assert_eq!(node.label(), "Nf3");
    }

    #[test]
    fn identify_deepest_classified_node() {
        let tree = OpeningTree::build(CATALOG);
        assert_eq!(
            tree.identify(&["e4", "e5", "Nf3", "Nc6", "Bb5", "a6"]),
            Opening::new("C60", "Ruy Lopez")
        );
        assert_eq!(
            tree.identify(&["e4", "e5", "Nf3", "Nc6"]),
            Opening::new("C20", "King's pawn game")
        );
        assert_eq!(tree.identify(&["e4", "e5", "f4"]), Opening::new("C20", "King's pawn game"));
    }

    #[test]
    fn identify_without_match() {
        let tree = OpeningTree::build(CATALOG);
        assert!(tree.identify(&["d4"]).is_empty());
        assert!(tree.identify::<&str>(&[]).is_empty());
        assert!(OpeningTree::new().identify(&["e4"]).is_empty());
    }

    #[test]
    fn identify_strips_move_numbers() {
        let tree = OpeningTree::build(CATALOG);
        assert_eq!(tree.identify(&["1.e4", "c5"]), Opening::new("B20", "Sicilian defence"));
        assert_eq!(
            tree.identify_text("1. e4 e5 2. Nf3 Nc6 3. Bc4 Bc5"),
            Opening::new("C50", "Italian game")
        );
    }

    #[test]
    fn first_entry_wins_on_same_path() {
        let tree = OpeningTree::build(
            "C44 \"King's pawn game\" 1.e4 e5 2.Nf3 Nc6\nC44b \"Scotch transposition\" 1.e4 e5 2.Nf3 Nc6",
        );
        assert_eq!(
            tree.identify(&["e4", "e5", "Nf3", "Nc6"]),
            Opening::new("C44", "King's pawn game")
        );
    }

    #[test]
    fn later_entry_classifies_existing_intermediate_node() {
        let tree = OpeningTree::build("C60 \"Ruy Lopez\" 1.e4 e5 2.Nf3 Nc6 3.Bb5\nC20 \"King's pawn game\" 1.e4 e5");
        assert_eq!(tree.identify(&["e4", "e5"]), Opening::new("C20", "King's pawn game"));
        assert_eq!(tree.len(), 6);
    }

    #[test]
    fn entries_without_moves_leave_root_unclassified() {
        let tree = OpeningTree::build("A00a \"Start position\" *\nB00 \"King's pawn\" 1.e4");
        assert!(tree.root().opening().is_empty());
        assert!(tree.identify(&["d4"]).is_empty());
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let tree = OpeningTree::build("garbage line\nB20 \"Sicilian defence\" 1.e4 c5");
        assert_eq!(tree.identify(&["e4", "c5"]).eco, "B20");
    }

    #[test]
    fn empty_catalog_builds_root_only() {
        let tree = OpeningTree::build("# nothing here\n");
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn foreign_node_id_is_rejected() {
        let large = OpeningTree::build(CATALOG);
        let small = OpeningTree::build("B20 \"Sicilian defence\" 1.e4 c5");
        let bc4 = large.walk(&["e4", "e5", "Nf3", "Nc6", "Bc4"]).unwrap();

        assert!(small.node(bc4).is_none());
        assert!(small.child(bc4, "Nf6").is_none());
        assert!(small.node(OpeningTree::ROOT).is_some());
    }

    #[test]
    fn continuations_list_book_moves() {
        let tree = OpeningTree::build(CATALOG);
        let next = tree.continuations(&["e4", "e5", "Nf3", "Nc6"]);
        let labels: Vec<_> = next.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Bb5", "Bc4"]);
        assert_eq!(next[0].opening.eco, "C60");

        assert!(tree.continuations(&["h4"]).is_empty());
        assert_eq!(tree.continuations::<&str>(&[]).len(), 1);
    }
}
