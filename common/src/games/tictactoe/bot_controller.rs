use std::collections::HashMap;

use crate::games::SessionRng;
use super::board::Board;
use super::types::{GameStatus, Mark, Position};
use super::win_detector::evaluate;

const WIN_SCORE: i32 = 1;
const LOSS_SCORE: i32 = -1;
const DRAW_SCORE: i32 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotType {
    Random,
    Minimax,
}

impl BotType {
    pub fn name(&self) -> &'static str {
        match self {
            BotType::Random => "random",
            BotType::Minimax => "minimax",
        }
    }
}

/// Move source for bot players. One minimax search per mark is kept for the
/// lifetime of the controller, so a whole game or batch shares the caches.
pub struct BotController {
    x_search: MinimaxSearch,
    o_search: MinimaxSearch,
}

impl Default for BotController {
    fn default() -> Self {
        Self::new()
    }
}

impl BotController {
    pub fn new() -> Self {
        Self {
            x_search: MinimaxSearch::for_sides(Mark::X, Mark::O),
            o_search: MinimaxSearch::for_sides(Mark::O, Mark::X),
        }
    }

    pub fn calculate_move(
        &mut self,
        bot_type: BotType,
        board: &Board,
        mark: Mark,
        rng: &mut SessionRng,
    ) -> Option<Position> {
        match bot_type {
            BotType::Random => calculate_random_move(board, rng),
            BotType::Minimax => match mark {
                Mark::X => self.x_search.best_move(board),
                Mark::O => self.o_search.best_move(board),
                Mark::Empty => None,
            },
        }
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = board.empty_cells();
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

pub fn calculate_minimax_move(board: &Board, bot_mark: Mark) -> Option<Position> {
    MinimaxSearch::new(bot_mark)?.best_move(board)
}

/// Exhaustive minimax over the 3x3 board from the maximizer's point of view.
///
/// Scores are +1 for a maximizer win, -1 for a minimizer win and 0 for a draw.
/// Depth does not influence the score. Scored positions are cached for as long
/// as the search lives; the key holds the whole board and the side to move, and
/// the maximizer never changes, so reuse changes nothing but the running time.
pub struct MinimaxSearch {
    maximizer: Mark,
    minimizer: Mark,
    cache: HashMap<(Board, bool), i32>,
}

impl MinimaxSearch {
    pub fn new(maximizer: Mark) -> Option<Self> {
        let minimizer = maximizer.opponent()?;
        Some(Self::for_sides(maximizer, minimizer))
    }

    fn for_sides(maximizer: Mark, minimizer: Mark) -> Self {
        Self {
            maximizer,
            minimizer,
            cache: HashMap::new(),
        }
    }

    /// Ties keep the first move in row-major order. Returns `None` on a full board.
    pub fn best_move(&mut self, board: &Board) -> Option<Position> {
        let mut scratch = *board;
        let mut best_move = None;
        let mut best_score = i32::MIN;

        for pos in board.empty_cells() {
            let (pos, score) = self.score_move(&mut scratch, pos, self.maximizer, false);

            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            }
        }

        best_move
    }

    /// Score of every legal move for the maximizer, row-major.
    #[cfg(test)]
    fn move_scores(&mut self, board: &Board) -> Vec<(Position, i32)> {
        let mut scratch = *board;
        board
            .empty_cells()
            .into_iter()
            .map(|pos| self.score_move(&mut scratch, pos, self.maximizer, false))
            .collect()
    }

    pub fn score(&mut self, board: &mut Board, maximizing: bool) -> i32 {
        match evaluate(board) {
            GameStatus::Draw => return DRAW_SCORE,
            GameStatus::InProgress => {}
            won => {
                return if won.winner() == Some(self.maximizer) {
                    WIN_SCORE
                } else {
                    LOSS_SCORE
                };
            }
        }

        if let Some(&cached) = self.cache.get(&(*board, maximizing)) {
            return cached;
        }

        let (mark, next_maximizing) = if maximizing {
            (self.maximizer, false)
        } else {
            (self.minimizer, true)
        };

        let child_scores: Vec<i32> = board
            .empty_cells()
            .into_iter()
            .map(|pos| self.score_move(board, pos, mark, next_maximizing).1)
            .collect();

        let result = if maximizing {
            child_scores.into_iter().max()
        } else {
            child_scores.into_iter().min()
        }
        .unwrap_or(DRAW_SCORE);

        self.cache.insert((*board, maximizing), result);
        result
    }

    fn score_move(
        &mut self,
        board: &mut Board,
        pos: Position,
        mark: Mark,
        next_maximizing: bool,
    ) -> (Position, i32) {
        debug_assert!(board.is_empty(pos));
        board.set(pos, mark);
        let score = self.score(board, next_maximizing);
        board.clear(pos);
        (pos, score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Empty as E, O, X};

    #[test]
    fn test_completes_own_row() {
        let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);

        let best = calculate_minimax_move(&board, X);

        assert_eq!(best, Some(Position::new(0, 2)));
    }

    #[test]
    fn test_blocks_opponent_row() {
        let board = Board::from_rows([[X, E, E], [O, O, E], [X, E, E]]);

        let best = calculate_minimax_move(&board, X);

        assert_eq!(best, Some(Position::new(1, 2)));
    }

    #[test]
    fn test_winning_move_scores_plus_one() {
        let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
        let mut search = MinimaxSearch::new(X).unwrap();

        let scores = search.move_scores(&board);

        assert_eq!(scores[0], (Position::new(0, 2), WIN_SCORE));
    }

    #[test]
    fn test_empty_board_every_move_is_draw() {
        let mut search = MinimaxSearch::new(X).unwrap();

        let scores = search.move_scores(&Board::new());

        assert_eq!(scores.len(), 9);
        assert!(scores.iter().all(|&(_, score)| score == DRAW_SCORE));
    }

    #[test]
    fn test_empty_board_picks_first_cell() {
        assert_eq!(
            calculate_minimax_move(&Board::new(), X),
            Some(Position::new(0, 0))
        );
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, E]]);
        let before = board;

        let _ = calculate_minimax_move(&board, X);
        let mut search = MinimaxSearch::new(O).unwrap();
        let mut scratch = board;
        let _ = search.score(&mut scratch, true);

        assert_eq!(board, before);
        assert_eq!(scratch, before);
    }

    #[test]
    fn test_search_retracts_every_trial_mark() {
        let board = Board::from_rows([[X, O, E], [E, X, E], [E, E, E]]);
        let mut search = MinimaxSearch::new(O).unwrap();
        let mut scratch = board;

        for pos in board.empty_cells() {
            let (_, score) = search.score_move(&mut scratch, pos, O, false);
            assert!((LOSS_SCORE..=WIN_SCORE).contains(&score));
            assert_eq!(scratch, board);
        }
    }

    #[test]
    fn test_reused_search_keeps_cache_and_answers() {
        let board = Board::from_rows([[X, E, E], [E, E, E], [E, E, E]]);
        let mut search = MinimaxSearch::new(O).unwrap();

        let first = search.best_move(&board);
        let cached = search.cache.len();
        let second = search.best_move(&board);

        assert_eq!(first, second);
        assert_eq!(search.cache.len(), cached);
    }

    #[test]
    fn test_controller_matches_fresh_search_across_games() {
        let mut bots = BotController::new();
        let mut rng = SessionRng::new(31);

        for _ in 0..20 {
            let mut board = Board::new();
            let mut mark = X;
            while !evaluate(&board).is_terminal() {
                let shared = bots.calculate_move(BotType::Minimax, &board, mark, &mut rng);
                assert_eq!(shared, calculate_minimax_move(&board, mark));

                let pos = calculate_random_move(&board, &mut rng).unwrap();
                board.place(pos, mark).unwrap();
                mark = mark.opponent().unwrap();
            }
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);

        assert_eq!(calculate_minimax_move(&board, O), None);
        assert_eq!(calculate_random_move(&board, &mut SessionRng::new(1)), None);
    }

    #[test]
    fn test_empty_mark_cannot_search() {
        let mut bots = BotController::new();

        assert!(MinimaxSearch::new(E).is_none());
        assert_eq!(calculate_minimax_move(&Board::new(), E), None);
        assert_eq!(
            bots.calculate_move(BotType::Minimax, &Board::new(), E, &mut SessionRng::new(1)),
            None
        );
    }

    #[test]
    fn test_terminal_scores() {
        let mut search = MinimaxSearch::new(O).unwrap();
        let mut x_won = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        let mut drawn = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);

        assert_eq!(search.score(&mut x_won, true), LOSS_SCORE);
        assert_eq!(search.score(&mut drawn, false), DRAW_SCORE);
    }

    #[test]
    fn test_random_move_is_empty_cell() {
        let board = Board::from_rows([[X, O, X], [X, E, O], [O, X, E]]);
        let mut rng = SessionRng::new(42);
        let mut bots = BotController::new();

        for _ in 0..20 {
            let pos = bots.calculate_move(BotType::Random, &board, O, &mut rng).unwrap();
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_random_move_same_seed_same_choice() {
        let board = Board::new();
        let mut bots = BotController::new();
        let first = bots.calculate_move(BotType::Random, &board, X, &mut SessionRng::new(7));
        let second = bots.calculate_move(BotType::Random, &board, X, &mut SessionRng::new(7));

        assert_eq!(first, second);
    }
}
