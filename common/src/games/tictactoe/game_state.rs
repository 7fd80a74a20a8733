use crate::games::SessionRng;
use super::board::Board;
use super::bot_controller::{BotController, BotType};
use super::types::{GameResult, GameStatus, Mark, PlaceError, Position, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub move_count: usize,
    pub last_move: Option<Position>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    /// X always moves first.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            move_count: 0,
            last_move: None,
        }
    }

    /// Places the mark of the side to move. On error nothing changes and the same side moves again.
    pub fn place_mark(&mut self, pos: Position) -> Result<(), PlaceError> {
        if self.status != GameStatus::InProgress {
            return Err(PlaceError::GameOver);
        }

        self.board.place(pos, self.current_mark)?;
        self.move_count += 1;
        self.last_move = Some(pos);

        self.status = evaluate(&self.board);

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    pub fn play_bot_turn(
        &mut self,
        bot_type: BotType,
        bots: &mut BotController,
        rng: &mut SessionRng,
    ) -> Result<Position, PlaceError> {
        if self.status != GameStatus::InProgress {
            return Err(PlaceError::GameOver);
        }
        let pos = bots
            .calculate_move(bot_type, &self.board, self.current_mark, rng)
            .ok_or(PlaceError::NoMovesAvailable)?;
        self.place_mark(pos)?;
        Ok(pos)
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    pub fn result(&self) -> Option<GameResult> {
        if self.status.is_terminal() {
            Some(GameResult::new(self.status.winner(), self.move_count))
        } else {
            None
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }
}
