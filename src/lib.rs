//! Rules for a 3x3 puzzle in which a block carries a red, a blue and a black
//! shoe around the board until the red shoe lands on the blue one.

pub mod cli;
pub mod game;
pub mod json_runner;
pub mod session;

pub use game::{Direction, DirectionSet, InvalidDelta, InvalidLayout, Piece, Position, PuzzleState};
pub use session::{Event, MoveOutcome, Session};
