use serde::{Deserialize, Serialize};

use crate::games::tictactoe::{GameResult, Mark};

/// One persisted game; exactly one of the three flags is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub winner_x: bool,
    pub winner_o: bool,
    pub draw: bool,
    pub moves: usize,
}

impl From<&GameResult> for GameRecord {
    fn from(result: &GameResult) -> Self {
        Self {
            winner_x: result.winner == Some(Mark::X),
            winner_o: result.winner == Some(Mark::O),
            draw: result.is_draw(),
            moves: result.move_count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl BatchSummary {
    pub fn from_records(records: &[GameRecord]) -> Self {
        records.iter().fold(Self::default(), |mut summary, record| {
            if record.winner_x {
                summary.x_wins += 1;
            } else if record.winner_o {
                summary.o_wins += 1;
            } else if record.draw {
                summary.draws += 1;
            }
            summary
        })
    }

    pub fn from_results(results: &[GameResult]) -> Self {
        let records: Vec<GameRecord> = results.iter().map(GameRecord::from).collect();
        Self::from_records(&records)
    }

    pub fn total(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }

    pub fn percentage(&self, count: usize) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            count as f64 * 100.0 / self.total() as f64
        }
    }

    pub fn max_count(&self) -> usize {
        self.x_wins.max(self.o_wins).max(self.draws)
    }
}
