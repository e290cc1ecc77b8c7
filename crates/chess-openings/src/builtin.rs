//! Built-in opening catalog.
//!
//! A small selection of ECO classifications compiled into the library, in the
//! same text format as external catalogs.

use crate::OpeningTree;

/// Catalog text of the built-in openings.
pub const BUILTIN_CATALOG: &str = r#"# ECO code, name, moves
A00 "Polish (Sokolsky) opening" 1.b4
A01 "Nimzovich-Larsen attack" 1.b3
A02 "Bird's opening" 1.f4
A04 "Reti opening" 1.Nf3
A10 "English opening" 1.c4
A40 "Queen's pawn" 1.d4
A45 "Queen's pawn game" 1.d4 Nf6
A80 "Dutch" 1.d4 f5
B00 "King's pawn opening" 1.e4
B01 "Scandinavian (centre counter) defence" 1.e4 d5
B07 "Pirc defence" 1.e4 d6 2.d4 Nf6
B10 "Caro-Kann defence" 1.e4 c6
B20 "Sicilian defence" 1.e4 c5
B90 "Sicilian: Najdorf" 1.e4 c5 2.Nf3 d6 3.d4 cxd4 4.Nxd4 Nf6
   5.Nc3 a6
C00 "French defence" 1.e4 e6
C20 "King's pawn game" 1.e4 e5
C30 "King's gambit" 1.e4 e5 2.f4
C40 "King's knight opening" 1.e4 e5 2.Nf3
C42 "Petrov's defence" 1.e4 e5 2.Nf3 Nf6
C44 "King's pawn game" 1.e4 e5 2.Nf3 Nc6
C45 "Scotch game" 1.e4 e5 2.Nf3 Nc6 3.d4 exd4 4.Nxd4
C50 "Italian game" 1.e4 e5 2.Nf3 Nc6 3.Bc4
C55 "Two knights defence" 1.e4 e5 2.Nf3 Nc6 3.Bc4 Nf6
C57 "Two knights defence" 1.e4 e5 2.Nf3 Nc6 3.Bc4 Nf6 4.Ng5
C60 "Ruy Lopez (Spanish opening)" 1.e4 e5 2.Nf3 Nc6 3.Bb5
D00 "Queen's pawn game" 1.d4 d5
D06 "Queen's Gambit" 1.d4 d5 2.c4
D30 "Queen's gambit declined" 1.d4 d5 2.c4 e6
E60 "King's Indian defence" 1.d4 Nf6 2.c4 g6
"#;

/// Returns [`BUILTIN_CATALOG`], for callers without a catalog file.
pub fn builtin_catalog() -> &'static str {
    BUILTIN_CATALOG
}

/// Builds the tree for [`BUILTIN_CATALOG`].
#[must_use]
pub fn builtin_tree() -> OpeningTree {
    OpeningTree::build(BUILTIN_CATALOG)
}
