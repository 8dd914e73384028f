//! Line protocol spoken by the `xiangqi` binary.
//!
//! One command per input line, one JSON response per output line.

use serde::Serialize;
use thiserror::Error;

use xiangqi_core::{Engine, GameState, Move};

use crate::service::{GameService, TurnOutcome};

pub const COMMANDS: [&str; 7] = [
    "new",
    "state",
    "board",
    "moves",
    "move <piece_id> <to_x> <to_y> | move {\"piece_id\":..,\"to_x\":..,\"to_y\":..}",
    "help",
    "quit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    New,
    State,
    Board,
    Moves,
    Play(Move),
    Help,
    Quit,
}

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("usage: move <piece_id> <to_x> <to_y>")]
    MoveUsage,
    #[error("not a number: {0}")]
    BadNumber(String),
    #[error("bad move object: {0}")]
    BadJson(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    State { state: GameState },
    Turn(TurnOutcome),
    Moves { count: usize, moves: Vec<Move> },
    Board { board: String },
    Help { commands: Vec<&'static str> },
    Error { message: String },
    Bye,
}

impl Response {
    pub fn error(err: impl std::fmt::Display) -> Self {
        Response::Error {
            message: err.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error { .. })
    }
}

impl Command {
    pub fn decode(line: &str) -> Result<Command, ProtocolError> {
        let line = line.trim();
        if line.starts_with('{') {
            return Ok(Command::Play(serde_json::from_str(line)?));
        }

        let mut parts = line.split_whitespace();
        let kind = parts.next().ok_or(ProtocolError::Empty)?;
        let command = match kind.to_lowercase().as_str() {
            "new" => Command::New,
            "state" => Command::State,
            "board" => Command::Board,
            "moves" => Command::Moves,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "move" => {
                let rest = line[kind.len()..].trim_start();
                if rest.starts_with('{') {
                    Command::Play(serde_json::from_str(rest)?)
                } else {
                    Command::Play(decode_move_args(parts)?)
                }
            }
            _ => return Err(ProtocolError::Unknown(kind.to_string())),
        };
        Ok(command)
    }
}

fn decode_move_args<'a>(mut parts: impl Iterator<Item = &'a str>) -> Result<Move, ProtocolError> {
    let (Some(id), Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(ProtocolError::MoveUsage);
    };
    Ok(Move::new(number(id)?, number(x)?, number(y)?))
}

fn number<T: std::str::FromStr>(s: &str) -> Result<T, ProtocolError> {
    s.parse().map_err(|_| ProtocolError::BadNumber(s.to_string()))
}

/// Run one command against the service.
///
/// `Quit` only produces `Bye`; ending the loop is the caller's job.
pub fn handle<E: Engine>(service: &mut GameService<E>, command: Command) -> Response {
    let result = match command {
        Command::New => service.new_game().map(|state| Response::State {
            state: state.clone(),
        }),
        Command::State => service.state().map(|state| Response::State {
            state: state.clone(),
        }),
        Command::Board => service.state().map(|state| Response::Board {
            board: state.to_string(),
        }),
        Command::Moves => service.legal_moves().map(|moves| Response::Moves {
            count: moves.len(),
            moves,
        }),
        Command::Play(mv) => service.play(mv).map(Response::Turn),
        Command::Help => Ok(Response::Help {
            commands: COMMANDS.to_vec(),
        }),
        Command::Quit => Ok(Response::Bye),
    };
    result.unwrap_or_else(Response::error)
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod protocol_tests;
