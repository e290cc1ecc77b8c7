//! WebAssembly bindings for the PGN reader and opening classifier.
//!
//! This crate provides a JavaScript-friendly API over `chess-pgn` and
//! `chess-openings`, allowing games to be parsed and classified in web
//! browsers and Node.js.
//!
//! # Usage
//!
//! ```javascript
//! import init, { Game, Openings } from 'chess-wasm';
//!
//! await init();
//!
//! const game = Game.parse('[White "Fischer"]\n\n1. e4 e5 2. Nf3 *');
//! console.log(game.tag("White"));
//! console.log(game.sans());
//!
//! const openings = Openings.builtin();
//! const opening = openings.identify(game.sans());
//! console.log(`${opening.eco} ${opening.name}`);
//! ```

use chess_openings::{builtin_catalog, Opening, OpeningBook};
use chess_pgn::StringifyOptions;
use wasm_bindgen::prelude::*;

/// A parsed PGN game that can be inspected from JavaScript.
#[wasm_bindgen]
pub struct Game {
    inner: chess_pgn::PgnGame,
}

#[wasm_bindgen]
impl Game {
    /// Parses a single game.
    ///
    /// Returns an error if a comment is unterminated or the variation
    /// parentheses do not balance.
    #[wasm_bindgen]
    pub fn parse(text: &str) -> Result<Game, JsError> {
        let inner = chess_pgn::PgnGame::parse(text).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Game { inner })
    }

    /// Returns the value of a tag, or an empty string if absent.
    #[wasm_bindgen]
    pub fn tag(&self, name: &str) -> String {
        self.inner.tag(name).to_string()
    }

    /// Sets a tag. Returns false if the tag name is not recognized.
    #[wasm_bindgen(js_name = setTag)]
    pub fn set_tag(&mut self, name: &str, value: &str) -> bool {
        self.inner.set_tag(name, value)
    }

    /// Returns the main-line moves in SAN.
    #[wasm_bindgen]
    pub fn sans(&self) -> Vec<String> {
        self.inner.sans().into_iter().map(str::to_string).collect()
    }

    /// Returns the main-line moves with their comments and variations as an
    /// array of plain objects.
    #[wasm_bindgen]
    pub fn moves(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(self.inner.moves()).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Returns every variation as numbered movetext; index 0 is the main line.
    #[wasm_bindgen(js_name = variationLines)]
    pub fn variation_lines(&self) -> Vec<String> {
        self.inner.variation_lines()
    }

    /// Writes the game back out as PGN.
    #[wasm_bindgen]
    pub fn stringify(&self, glyph_codes: bool, annotations: bool, variations: bool) -> String {
        self.inner.to_pgn(&StringifyOptions {
            glyph_codes,
            annotations,
            variations,
        })
    }

    /// Returns the value of the Result tag.
    #[wasm_bindgen]
    pub fn result(&self) -> String {
        self.inner.result().to_string()
    }
}

/// An opening classification returned to JavaScript.
#[wasm_bindgen]
pub struct DetectedOpening {
    opening: Opening,
}

#[wasm_bindgen]
impl DetectedOpening {
    /// The ECO code, empty if nothing matched.
    #[wasm_bindgen(getter)]
    pub fn eco(&self) -> String {
        self.opening.eco.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.opening.name.clone()
    }

    /// True when no catalog line matched.
    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.opening.is_empty()
    }
}

/// An opening catalog loaded for classification.
#[wasm_bindgen]
pub struct Openings {
    book: OpeningBook,
}

#[wasm_bindgen]
impl Openings {
    /// Creates an empty catalog; nothing is classified until [`Openings::load`].
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Openings {
            book: OpeningBook::new(),
        }
    }

    /// Creates a catalog holding the built-in openings.
    #[wasm_bindgen]
    pub fn builtin() -> Self {
        let openings = Self::new();
        openings.book.load(builtin_catalog());
        openings
    }

    /// Replaces the catalog with the given text. Returns the tree node count.
    #[wasm_bindgen]
    pub fn load(&self, catalog: &str) -> usize {
        self.book.load(catalog)
    }

    /// Classifies a sequence of SAN moves.
    #[wasm_bindgen]
    pub fn identify(&self, moves: Vec<String>) -> DetectedOpening {
        DetectedOpening {
            opening: self.book.identify(moves.as_slice()),
        }
    }

    /// Classifies a movetext string such as "1.e4 e5 2.Nf3".
    #[wasm_bindgen(js_name = identifyText)]
    pub fn identify_text(&self, move_text: &str) -> DetectedOpening {
        DetectedOpening {
            opening: self.book.identify_text(move_text),
        }
    }
}

impl Default for Openings {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialization function called when WASM module loads.
#[wasm_bindgen(start)]
pub fn init() {}
