use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use tracing::{debug, warn};

use crate::game::{Direction, Position, PuzzleState};
use crate::session::{Event, MoveOutcome, Session};

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PositionJson {
    pub row: i32,
    pub col: i32,
}

impl From<Position> for PositionJson {
    fn from(pos: Position) -> Self {
        Self {
            row: pos.row,
            col: pos.col,
        }
    }
}

impl From<PositionJson> for Position {
    fn from(pos: PositionJson) -> Self {
        Position::new(pos.row, pos.col)
    }
}

#[derive(Deserialize, Debug, PartialEq, Eq)]
#[serde(tag = "Command", rename_all = "PascalCase")]
pub enum CommandJson {
    #[serde(rename_all = "PascalCase")]
    Move { direction: Direction },
    #[serde(rename_all = "PascalCase")]
    Click { row: i32, col: i32 },
    Reset,
    State,
    Quit,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StateJson {
    pub positions: [PositionJson; 4],
    pub solved: bool,
    pub legal_moves: Vec<Direction>,
    pub move_count: usize,
    pub outcome: Option<MoveOutcome>,
    pub events: Vec<Event>,
}

impl StateJson {
    fn new(state: &PuzzleState, move_count: usize) -> StateJson {
        StateJson {
            positions: state.positions().map(PositionJson::from),
            solved: state.is_solved(),
            legal_moves: state.legal_moves().iter().collect(),
            move_count,
            outcome: None,
            events: Vec::new(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorJson {
    pub error: String,
}

fn write_json<W: Write, T: Serialize>(out: &mut W, obj: T) -> Result<()> {
    serde_json::to_writer(&mut *out, &obj)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Runs `session` against one JSON command per input line until `Quit` or
/// end of input.
pub fn run_session<R: BufRead, W: Write>(session: &mut Session, input: R, mut out: W) -> Result<()> {
    writeln!(out, "puzzle-start")?;

    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    session.subscribe(move |event| sink.borrow_mut().push(*event));

    write_json(&mut out, StateJson::new(session.state(), session.move_count()))?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command: CommandJson = match serde_json::from_str(&line) {
            Ok(command) => command,
            Err(err) => {
                warn!("Unreadable command {line:?}: {err}");
                write_json(&mut out, ErrorJson { error: err.to_string() })?;
                continue;
            }
        };
        debug!("Command: {command:?}");

        let outcome = match command {
            CommandJson::Move { direction } => Some(session.perform_move(direction)),
            CommandJson::Click { row, col } => Some(session.click(row, col)),
            CommandJson::Reset => {
                session.reset();
                None
            }
            CommandJson::State => None,
            CommandJson::Quit => break,
        };

        let mut reply = StateJson::new(session.state(), session.move_count());
        reply.outcome = outcome;
        reply.events = events.borrow_mut().drain(..).collect();
        write_json(&mut out, reply)?;
    }

    Ok(())
}

pub fn run_stdio(session: &mut Session) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(session, stdin.lock(), stdout.lock())
}
