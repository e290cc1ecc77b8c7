//! Side to move.

use serde::{Deserialize, Serialize};

/// The player who made a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    White,
    Black,
}

impl Side {
    /// Returns the other side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// Running move counter: whose turn it is and the full-move number.
///
/// The ordinal advances only when Black's move hands the turn back to White.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Turn {
    pub side: Side,
    pub ordinal: u32,
}

impl Turn {
    pub const START: Turn = Turn {
        side: Side::White,
        ordinal: 1,
    };

    pub fn advance(&mut self) {
        self.side = self.side.opposite();
        if self.side == Side::White {
            self.ordinal += 1;
        }
    }
}
