//! Chess opening catalog and classification.
//!
//! This crate reads opening catalogs (ECO code, name, move list per line) into
//! a prefix tree over moves and classifies played move sequences against it.
//! [`OpeningBook`] wraps a tree so it can be reloaded while in use.

pub mod book;
pub mod builtin;
pub mod catalog;
pub mod opening;
pub mod tree;

pub use book::{OpeningBook, OpeningError};
pub use builtin::{builtin_catalog, builtin_tree, BUILTIN_CATALOG};
pub use catalog::{CatalogEntry, CatalogLine};
pub use opening::Opening;
pub use tree::{Continuation, NodeId, OpeningNode, OpeningTree};
