use std::fmt;

use tokio::io::{AsyncBufRead, Lines};

use crate::games::{GameBroadcaster, SessionRng};
use crate::log;
use super::bot_controller::{BotController, BotType};
use super::game_state::TicTacToeGameState;
use super::types::{GameResult, Mark, PlaceError, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Bot(BotType),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Players {
    pub x: PlayerKind,
    pub o: PlayerKind,
}

impl Players {
    pub fn new(x: PlayerKind, o: PlayerKind) -> Self {
        Self { x, o }
    }

    pub fn for_mark(&self, mark: Mark) -> PlayerKind {
        match mark {
            Mark::O => self.o,
            _ => self.x,
        }
    }
}

#[derive(Debug)]
pub enum SessionError {
    InputClosed,
    Io(std::io::Error),
    Place(PlaceError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InputClosed => write!(f, "Input closed before the game finished"),
            SessionError::Io(e) => write!(f, "IO error: {}", e),
            SessionError::Place(e) => write!(f, "Invalid move: {}", e),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<std::io::Error> for SessionError {
    fn from(e: std::io::Error) -> Self {
        SessionError::Io(e)
    }
}

impl From<PlaceError> for SessionError {
    fn from(e: PlaceError) -> Self {
        SessionError::Place(e)
    }
}

/// Parses "row col" or "row,col" with both values in 0..=2.
pub fn parse_move(text: &str) -> Result<Position, String> {
    let parts: Vec<&str> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    if parts.len() != 2 {
        return Err("Enter a row and a column, e.g. \"1 2\"".to_string());
    }

    let row: usize = parts[0]
        .parse()
        .map_err(|_| format!("'{}' is not a number", parts[0]))?;
    let col: usize = parts[1]
        .parse()
        .map_err(|_| format!("'{}' is not a number", parts[1]))?;

    Position::try_new(row, col)
        .ok_or_else(|| format!("Position ({}, {}) is out of bounds, use 0 to 2", row, col))
}

pub struct TicTacToeSession;

impl TicTacToeSession {
    pub async fn run<R, B>(
        players: Players,
        input: &mut Lines<R>,
        rng: &mut SessionRng,
        broadcaster: &B,
    ) -> Result<GameResult, SessionError>
    where
        R: AsyncBufRead + Unpin,
        B: GameBroadcaster,
    {
        let mut state = TicTacToeGameState::new();
        let mut bots = BotController::new();

        loop {
            broadcaster.broadcast_state(&state);

            if let Some(result) = state.result() {
                broadcaster.broadcast_game_over(&state, &result);
                return Ok(result);
            }

            match players.for_mark(state.current_mark) {
                PlayerKind::Bot(bot_type) => {
                    let pos = state.play_bot_turn(bot_type, &mut bots, rng)?;
                    log!("{} bot played {} at {}", bot_type.name(), state.board.get(pos), pos);
                }
                PlayerKind::Human => {
                    play_human_turn(&mut state, input, broadcaster).await?;
                }
            }
        }
    }
}

async fn play_human_turn<R, B>(
    state: &mut TicTacToeGameState,
    input: &mut Lines<R>,
    broadcaster: &B,
) -> Result<(), SessionError>
where
    R: AsyncBufRead + Unpin,
    B: GameBroadcaster,
{
    loop {
        broadcaster.prompt_move(state.current_mark);

        let Some(line) = input.next_line().await? else {
            return Err(SessionError::InputClosed);
        };

        let pos = match parse_move(&line) {
            Ok(pos) => pos,
            Err(reason) => {
                broadcaster.reject_move(&reason);
                continue;
            }
        };

        match state.place_mark(pos) {
            Ok(()) => return Ok(()),
            Err(e @ PlaceError::Occupied(_)) => broadcaster.reject_move(&e.to_string()),
            Err(e) => return Err(e.into()),
        }
    }
}

/// Bot-only game on the same state machine, without any input.
pub fn simulate_game(
    bot_x: BotType,
    bot_o: BotType,
    bots: &mut BotController,
    rng: &mut SessionRng,
) -> Result<GameResult, PlaceError> {
    let mut state = TicTacToeGameState::new();

    loop {
        if let Some(result) = state.result() {
            return Ok(result);
        }
        let bot_type = match state.current_mark {
            Mark::O => bot_o,
            _ => bot_x,
        };
        state.play_bot_turn(bot_type, bots, rng)?;
    }
}
