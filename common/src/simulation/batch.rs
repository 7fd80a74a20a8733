use crate::games::SessionRng;
use crate::games::tictactoe::{BotController, BotType, GameResult, PlaceError, simulate_game};

pub const BATCH_GAME_COUNT: usize = 10_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchMode {
    RandomVsRandom,
    MinimaxVsMinimax,
}

impl BatchMode {
    pub fn bots(&self) -> (BotType, BotType) {
        match self {
            BatchMode::RandomVsRandom => (BotType::Random, BotType::Random),
            BatchMode::MinimaxVsMinimax => (BotType::Minimax, BotType::Minimax),
        }
    }

    pub fn file_stem(&self) -> &'static str {
        match self {
            BatchMode::RandomVsRandom => "random_vs_random",
            BatchMode::MinimaxVsMinimax => "minimax_vs_minimax",
        }
    }
}

/// Plays `count` games one after another, each on a fresh board. All games
/// share one `BotController`.
pub fn run_batch(
    mode: BatchMode,
    count: usize,
    rng: &mut SessionRng,
) -> Result<Vec<GameResult>, PlaceError> {
    let (bot_x, bot_o) = mode.bots();
    let mut bots = BotController::new();
    (0..count)
        .map(|_| simulate_game(bot_x, bot_o, &mut bots, rng))
        .collect()
}
