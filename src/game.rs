pub mod direction_set;
pub mod logic;
pub mod piece;
pub mod position;
pub mod state;

pub use direction_set::*;
pub use piece::*;
pub use position::*;
pub use state::*;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A compass direction the block can be moved in.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Deserialize, Serialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
];

/// A coordinate change that is not a single orthogonal step.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
#[error("({d_row},{d_col}) does not correspond to any direction")]
pub struct InvalidDelta {
    pub d_row: i32,
    pub d_col: i32,
}

impl Direction {
    pub fn row_change(self) -> i32 {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
            Direction::Right | Direction::Left => 0,
        }
    }

    pub fn col_change(self) -> i32 {
        match self {
            Direction::Right => 1,
            Direction::Left => -1,
            Direction::Up | Direction::Down => 0,
        }
    }

    pub fn from_delta(d_row: i32, d_col: i32) -> Result<Direction, InvalidDelta> {
        ALL_DIRECTIONS
            .into_iter()
            .find(|d| d.row_change() == d_row && d.col_change() == d_col)
            .ok_or(InvalidDelta { d_row, d_col })
    }

    pub fn opposite(self) -> Direction {
        use Direction::*;
        match self {
            Up => Down,
            Right => Left,
            Down => Up,
            Left => Right,
        }
    }

    pub(crate) fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "UP",
            Direction::Right => "RIGHT",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_map_back_to_their_direction() {
        for d in ALL_DIRECTIONS {
            assert_eq!(Direction::from_delta(d.row_change(), d.col_change()), Ok(d));
        }
    }

    #[test]
    fn from_delta_rejects_non_steps() {
        for (d_row, d_col) in [(0, 0), (1, 1), (-1, 1), (2, 0), (0, -2)] {
            assert_eq!(
                Direction::from_delta(d_row, d_col),
                Err(InvalidDelta { d_row, d_col })
            );
        }
    }

    #[test]
    fn opposite_cancels_delta() {
        for d in ALL_DIRECTIONS {
            assert_eq!(d.row_change() + d.opposite().row_change(), 0);
            assert_eq!(d.col_change() + d.opposite().col_change(), 0);
            assert_eq!(d.opposite().opposite(), d);
        }
    }
}
