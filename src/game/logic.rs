use crate::game::{Direction, Piece, PuzzleState, BOARD_SIZE};

pub fn can_move(state: &PuzzleState, direction: Direction) -> bool {
    match direction {
        Direction::Up => can_move_up(state),
        Direction::Right => can_move_right(state),
        Direction::Down => can_move_down(state),
        Direction::Left => can_move_left(state),
    }
}

fn can_move_up(state: &PuzzleState) -> bool {
    let block = state.position(Piece::Block);
    block.row > 0 && state.is_empty(block.up())
}

fn can_move_left(state: &PuzzleState) -> bool {
    let block = state.position(Piece::Block);
    block.col > 0 && state.is_empty(block.left())
}

fn can_move_right(state: &PuzzleState) -> bool {
    let block = state.position(Piece::Block);
    if block.col == BOARD_SIZE - 1 {
        return false;
    }

    let right = block.right();

    // The block may push the black shoe, unless it is carrying the blue one.
    state.is_empty(right)
        || (state.position(Piece::BlackShoe) == right
            && !state.are_stacked(Piece::Block, Piece::BlueShoe))
}

fn can_move_down(state: &PuzzleState) -> bool {
    let block = state.position(Piece::Block);
    if block.row == BOARD_SIZE - 1 {
        return false;
    }

    let down = block.down();
    if state.is_empty(down) {
        return true;
    }

    if state.are_stacked(Piece::BlackShoe, Piece::Block) || state.position(Piece::BlackShoe) == down
    {
        return false;
    }

    state.position(Piece::BlueShoe) == down
        || (state.position(Piece::RedShoe) == down
            && !state.are_stacked(Piece::BlueShoe, Piece::Block))
}
