use tictactoe_common::games::GameBroadcaster;
use tictactoe_common::games::tictactoe::{GameResult, Mark, TicTacToeGameState};

pub struct ConsoleBroadcaster;

impl GameBroadcaster for ConsoleBroadcaster {
    fn broadcast_state(&self, state: &TicTacToeGameState) {
        println!();
        if let Some(pos) = state.last_move {
            println!("{} played {}", state.board.get(pos), pos);
        }
        print!("{}", state.board);
    }

    fn prompt_move(&self, mark: Mark) {
        println!("Player {}, enter row and column (0-2):", mark);
    }

    fn reject_move(&self, reason: &str) {
        println!("{}. Try again.", reason);
    }

    fn broadcast_game_over(&self, state: &TicTacToeGameState, result: &GameResult) {
        match (result.winner, state.winning_line()) {
            (Some(winner), Some(line)) => println!(
                "Player {} wins with the line {} -> {} after {} moves!",
                winner, line.start, line.end, result.move_count
            ),
            (Some(winner), None) => {
                println!("Player {} wins after {} moves!", winner, result.move_count)
            }
            (None, _) => println!("It's a draw after {} moves.", result.move_count),
        }
    }
}
