use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The four pieces on the board. The discriminant is the piece's slot index.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
#[derive(FromPrimitive, Deserialize, Serialize)]
pub enum Piece {
    Block = 0,
    RedShoe = 1,
    BlueShoe = 2,
    BlackShoe = 3,
}

pub const ALL_PIECES: [Piece; 4] = [
    Piece::Block,
    Piece::RedShoe,
    Piece::BlueShoe,
    Piece::BlackShoe,
];

pub const SHOES: [Piece; 3] = [Piece::RedShoe, Piece::BlueShoe, Piece::BlackShoe];

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
#[error("there is no piece with index {0}")]
pub struct InvalidPieceIndex(pub usize);

impl Piece {
    pub fn from_index(n: usize) -> Result<Piece, InvalidPieceIndex> {
        Piece::from_usize(n).ok_or(InvalidPieceIndex(n))
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn to_str(self) -> &'static str {
        use Piece::*;
        match self {
            Block => "block",
            RedShoe => "red shoe",
            BlueShoe => "blue shoe",
            BlackShoe => "black shoe",
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl TryFrom<usize> for Piece {
    type Error = InvalidPieceIndex;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Piece::from_index(n)
    }
}
