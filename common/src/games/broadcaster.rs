use crate::games::tictactoe::{GameResult, Mark, TicTacToeGameState};

/// Presentation side of a running game. Nothing flows back into the game.
pub trait GameBroadcaster {
    fn broadcast_state(&self, state: &TicTacToeGameState);
    fn prompt_move(&self, mark: Mark);
    fn reject_move(&self, reason: &str);
    fn broadcast_game_over(&self, state: &TicTacToeGameState, result: &GameResult);
}

pub struct NullBroadcaster;

impl GameBroadcaster for NullBroadcaster {
    fn broadcast_state(&self, _state: &TicTacToeGameState) {}
    fn prompt_move(&self, _mark: Mark) {}
    fn reject_move(&self, _reason: &str) {}
    fn broadcast_game_over(&self, _state: &TicTacToeGameState, _result: &GameResult) {}
}
