use crate::game::{Direction, InvalidDelta};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Position {
        Position { row, col }
    }

    /// The position one step away in `direction`. Board bounds are not checked.
    pub fn at(&self, direction: Direction) -> Position {
        Position {
            row: self.row + direction.row_change(),
            col: self.col + direction.col_change(),
        }
    }

    pub fn up(&self) -> Position {
        self.at(Direction::Up)
    }

    pub fn right(&self) -> Position {
        self.at(Direction::Right)
    }

    pub fn down(&self) -> Position {
        self.at(Direction::Down)
    }

    pub fn left(&self) -> Position {
        self.at(Direction::Left)
    }

    /// The direction of the single step leading from `self` to `other`.
    pub fn direction_to(&self, other: &Position) -> Result<Direction, InvalidDelta> {
        match (other.row.checked_sub(self.row), other.col.checked_sub(self.col)) {
            (Some(d_row), Some(d_col)) => Direction::from_delta(d_row, d_col),
            _ => Err(InvalidDelta {
                d_row: other.row.saturating_sub(self.row),
                d_col: other.col.saturating_sub(self.col),
            }),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("expected a position written as \"row,col\", got {0:?}")]
pub struct ParsePositionError(pub String);

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePositionError(s.to_string());

        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let (row, col) = inner.split_once(',').ok_or_else(err)?;
        let row = row.trim().parse().map_err(|_| err())?;
        let col = col.trim().parse().map_err(|_| err())?;

        Ok(Position { row, col })
    }
}
