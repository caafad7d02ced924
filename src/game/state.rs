use crate::game::logic;
use crate::game::{
    Direction, DirectionSet, InvalidPieceIndex, Piece, Position, ALL_DIRECTIONS, ALL_PIECES, SHOES,
};
use itertools::Itertools;
use std::fmt;
use thiserror::Error;
use tracing::trace;

/// The board is `BOARD_SIZE` by `BOARD_SIZE` squares.
pub const BOARD_SIZE: i32 = 3;

/// Block, red, blue and black shoe, in that order.
pub const INITIAL_POSITIONS: [Position; 4] = [
    Position::new(0, 0),
    Position::new(2, 0),
    Position::new(1, 1),
    Position::new(0, 2),
];

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum InvalidLayout {
    #[error("the {piece} is off the board at {position}")]
    OffBoard { piece: Piece, position: Position },
    #[error("the blue shoe and the black shoe cannot both be at {0}")]
    BlueShoeOnBlackShoe(Position),
}

/// Positions of the block and the three shoes.
///
/// The only way to change a `PuzzleState` after construction is
/// [`PuzzleState::move_block`]. Whether the puzzle is solved is derived from
/// the positions every time it is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleState {
    positions: [Position; 4],
}

impl Default for PuzzleState {
    fn default() -> Self {
        PuzzleState {
            positions: INITIAL_POSITIONS,
        }
    }
}

impl PuzzleState {
    pub fn new(
        block: Position,
        red_shoe: Position,
        blue_shoe: Position,
        black_shoe: Position,
    ) -> Result<PuzzleState, InvalidLayout> {
        PuzzleState::from_positions([block, red_shoe, blue_shoe, black_shoe])
    }

    /// Builds a state from positions indexed by [`Piece::index`].
    pub fn from_positions(positions: [Position; 4]) -> Result<PuzzleState, InvalidLayout> {
        check_positions(&positions)?;
        Ok(PuzzleState { positions })
    }

    pub fn position(&self, piece: Piece) -> Position {
        self.positions[piece.index()]
    }

    pub fn position_at_index(&self, n: usize) -> Result<Position, InvalidPieceIndex> {
        Piece::from_index(n).map(|piece| self.position(piece))
    }

    pub fn positions(&self) -> [Position; 4] {
        self.positions
    }

    pub fn is_solved(&self) -> bool {
        self.are_stacked(Piece::RedShoe, Piece::BlueShoe)
    }

    pub fn can_move(&self, direction: Direction) -> bool {
        logic::can_move(self, direction)
    }

    pub fn legal_moves(&self) -> DirectionSet {
        ALL_DIRECTIONS
            .into_iter()
            .filter(|d| self.can_move(*d))
            .collect()
    }

    /// Moves the block one step, together with the shoes it carries.
    ///
    /// Legality is not checked here; callers are expected to ask
    /// [`PuzzleState::can_move`] first. Called on an illegal direction, the
    /// same carrying rules are applied blindly and the result may leave the
    /// board or stack the blue shoe on the black one.
    pub fn move_block(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.move_up(),
            Direction::Right | Direction::Down => self.move_carrying(direction, &SHOES),
            // The black shoe stays behind when the block moves left.
            Direction::Left => self.move_carrying(direction, &[Piece::RedShoe, Piece::BlueShoe]),
        }
        trace!("New state: {}", self);
    }

    fn move_up(&mut self) {
        if self.are_stacked(Piece::BlackShoe, Piece::Block) {
            if self.are_stacked(Piece::RedShoe, Piece::Block) {
                self.step(Piece::RedShoe, Direction::Up);
            }
            self.step(Piece::BlackShoe, Direction::Up);
        }
        self.step(Piece::Block, Direction::Up);
    }

    fn move_carrying(&mut self, direction: Direction, shoes: &[Piece]) {
        for &shoe in shoes {
            if self.are_stacked(shoe, Piece::Block) {
                self.step(shoe, direction);
            }
        }
        self.step(Piece::Block, direction);
    }

    fn step(&mut self, piece: Piece, direction: Direction) {
        let pos = &mut self.positions[piece.index()];
        *pos = pos.at(direction);
    }

    pub fn are_stacked(&self, a: Piece, b: Piece) -> bool {
        self.position(a) == self.position(b)
    }

    /// Whether no piece occupies `pos`.
    pub fn is_empty(&self, pos: Position) -> bool {
        !self.positions.contains(&pos)
    }
}

pub fn is_on_board(pos: &Position) -> bool {
    (0..BOARD_SIZE).contains(&pos.row) && (0..BOARD_SIZE).contains(&pos.col)
}

fn check_positions(positions: &[Position; 4]) -> Result<(), InvalidLayout> {
    for (piece, position) in ALL_PIECES.into_iter().zip(positions) {
        if !is_on_board(position) {
            return Err(InvalidLayout::OffBoard {
                piece,
                position: *position,
            });
        }
    }

    let blue = positions[Piece::BlueShoe.index()];
    if blue == positions[Piece::BlackShoe.index()] {
        return Err(InvalidLayout::BlueShoeOnBlackShoe(blue));
    }

    Ok(())
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.positions.iter().join(","))
    }
}
