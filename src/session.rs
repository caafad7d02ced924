use crate::game::{Direction, Piece, Position, PuzzleState, ALL_PIECES};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Something a host may want to redraw for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "Event", rename_all = "PascalCase")]
pub enum Event {
    #[serde(rename_all = "PascalCase")]
    PieceMoved {
        piece: Piece,
        #[serde(with = "position_pair")]
        from: Position,
        #[serde(with = "position_pair")]
        to: Position,
    },
    /// A move brought the red shoe onto the blue one.
    #[serde(rename_all = "PascalCase")]
    Solved { move_count: usize },
    /// The whole board went back to the starting layout. No `PieceMoved`
    /// events accompany it, so hosts must re-read every position.
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MoveOutcome {
    Moved,
    Rejected,
    Ignored,
}

type Listener = Box<dyn FnMut(&Event)>;

/// Drives a single puzzle on behalf of a host.
///
/// Moves are checked before they are made, the number of moves is counted,
/// and once the puzzle is solved it starts over from the starting layout
/// unless `auto_reset` has been turned off.
pub struct Session {
    state: PuzzleState,
    starting_state: PuzzleState,
    move_count: usize,
    auto_reset: bool,
    listeners: Vec<Listener>,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(PuzzleState::default())
    }
}

impl Session {
    pub fn new(starting_state: PuzzleState) -> Session {
        Session {
            state: starting_state,
            starting_state,
            move_count: 0,
            auto_reset: true,
            listeners: Vec::new(),
        }
    }

    pub fn with_auto_reset(mut self, auto_reset: bool) -> Session {
        self.auto_reset = auto_reset;
        self
    }

    pub fn subscribe<F: FnMut(&Event) + 'static>(&mut self, listener: F) {
        self.listeners.push(Box::new(listener));
    }

    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    /// A copy of the current state that later moves will not affect.
    pub fn snapshot(&self) -> PuzzleState {
        self.state
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn perform_move(&mut self, direction: Direction) -> MoveOutcome {
        if !self.state.can_move(direction) {
            warn!("Invalid move: {direction}");
            return MoveOutcome::Rejected;
        }

        info!("Move: {direction}");
        let before = self.snapshot();
        let was_solved = before.is_solved();
        self.state.move_block(direction);
        self.move_count += 1;

        for piece in ALL_PIECES {
            let (from, to) = (before.position(piece), self.state.position(piece));
            if from != to {
                self.emit(Event::PieceMoved { piece, from, to });
            }
        }

        if !was_solved && self.state.is_solved() {
            info!("Puzzle solved in {} moves", self.move_count);
            self.emit(Event::Solved {
                move_count: self.move_count,
            });
            if self.auto_reset {
                self.reset();
            }
        }

        MoveOutcome::Moved
    }

    /// Moves the block towards the square at `row`, `col` if it is next to it.
    pub fn click(&mut self, row: i32, col: i32) -> MoveOutcome {
        debug!("Click on square ({row},{col})");
        let block = self.state.position(Piece::Block);
        match block.direction_to(&Position::new(row, col)) {
            Ok(direction) => self.perform_move(direction),
            Err(_) => {
                warn!("Click does not correspond to any direction");
                MoveOutcome::Ignored
            }
        }
    }

    pub fn reset(&mut self) {
        debug!("Restarting game...");
        self.state = self.starting_state;
        self.move_count = 0;
        self.emit(Event::Reset);
    }

    fn emit(&mut self, event: Event) {
        for listener in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}

mod position_pair {
    use crate::game::Position;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(pos: &Position, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq([pos.row, pos.col])
    }
}
