mod board;
mod bot_controller;
mod game_state;
mod session;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{BotController, BotType, MinimaxSearch, calculate_minimax_move};
pub use game_state::TicTacToeGameState;
pub use session::{PlayerKind, Players, SessionError, TicTacToeSession, parse_move, simulate_game};
pub use types::{BOARD_SIZE, GameResult, GameStatus, Mark, PlaceError, Position, WinningLine};
pub use win_detector::{check_win_with_line, evaluate};
