use super::board::Board;
use super::types::{BOARD_SIZE, GameStatus, Mark, Position, WinningLine};

pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(line) = check_win_with_line(board) {
        return GameStatus::won_by(line.mark);
    }

    if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

/// Rows, then columns, then the two diagonals; the first complete line wins.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for row in 0..BOARD_SIZE {
        if let Some(line) = check_line(board, Position::new(row, 0), 0, 1) {
            return Some(line);
        }
    }

    for col in 0..BOARD_SIZE {
        if let Some(line) = check_line(board, Position::new(0, col), 1, 0) {
            return Some(line);
        }
    }

    if let Some(line) = check_line(board, Position::new(0, 0), 1, 1) {
        return Some(line);
    }

    check_line(board, Position::new(0, BOARD_SIZE - 1), 1, -1)
}

fn check_line(board: &Board, start: Position, d_row: usize, d_col: isize) -> Option<WinningLine> {
    let mark = board.get(start);
    if mark == Mark::Empty {
        return None;
    }

    let mut end = start;
    for i in 1..BOARD_SIZE {
        let row = start.row + d_row * i;
        let col = start.col.checked_add_signed(d_col * i as isize)?;
        end = Position::try_new(row, col)?;
        if board.get(end) != mark {
            return None;
        }
    }

    Some(WinningLine::new(mark, start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Empty as E, O, X};

    fn check_win(board: &Board) -> Option<Mark> {
        check_win_with_line(board).map(|line| line.mark)
    }

    /// Every complete line, in scan order.
    fn winning_lines(board: &Board) -> Vec<WinningLine> {
        let mut lines = Vec::new();
        for row in 0..BOARD_SIZE {
            lines.extend(check_line(board, Position::new(row, 0), 0, 1));
        }
        for col in 0..BOARD_SIZE {
            lines.extend(check_line(board, Position::new(0, col), 1, 0));
        }
        lines.extend(check_line(board, Position::new(0, 0), 1, 1));
        lines.extend(check_line(board, Position::new(0, BOARD_SIZE - 1), 1, -1));
        lines
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_row_win() {
        let board = Board::from_rows([[E, O, O], [X, X, X], [E, E, E]]);

        let line = check_win_with_line(&board).unwrap();

        assert_eq!(line.mark, X);
        assert_eq!(line.start, Position::new(1, 0));
        assert_eq!(line.end, Position::new(1, 2));
        assert_eq!(evaluate(&board), GameStatus::XWon);
    }

    #[test]
    fn test_column_win() {
        let board = Board::from_rows([[X, O, X], [E, O, E], [X, O, E]]);

        assert_eq!(check_win(&board), Some(O));
        assert_eq!(evaluate(&board), GameStatus::OWon);
    }

    #[test]
    fn test_main_diagonal_win() {
        let board = Board::from_rows([[X, O, E], [O, X, E], [E, E, X]]);

        let line = check_win_with_line(&board).unwrap();

        assert_eq!(line.start, Position::new(0, 0));
        assert_eq!(line.end, Position::new(2, 2));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = Board::from_rows([[X, X, O], [E, O, E], [O, E, X]]);

        let line = check_win_with_line(&board).unwrap();

        assert_eq!(line.mark, O);
        assert_eq!(line.start, Position::new(0, 2));
        assert_eq!(line.end, Position::new(2, 0));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);

        assert_eq!(check_win(&board), None);
        assert_eq!(evaluate(&board), GameStatus::Draw);
    }

    #[test]
    fn test_win_on_last_cell_beats_draw() {
        let board = Board::from_rows([[X, O, X], [O, X, O], [O, X, X]]);

        assert_eq!(evaluate(&board), GameStatus::XWon);
    }

    #[test]
    fn test_row_reported_before_column() {
        let board = Board::from_rows([[X, X, X], [X, O, O], [X, O, O]]);

        let line = check_win_with_line(&board).unwrap();

        assert_eq!(line.start, Position::new(0, 0));
        assert_eq!(line.end, Position::new(0, 2));
        assert_eq!(winning_lines(&board).len(), 2);
    }

    fn collect_reachable(board: &mut Board, mark: Mark, seen: &mut Vec<Board>) {
        seen.push(*board);
        if evaluate(board).is_terminal() {
            return;
        }
        for pos in board.empty_cells() {
            board.place(pos, mark).unwrap();
            collect_reachable(board, mark.opponent().unwrap(), seen);
            board.clear(pos);
        }
    }

    #[test]
    fn test_reachable_boards_never_have_two_winners() {
        let mut seen = Vec::new();
        collect_reachable(&mut Board::new(), X, &mut seen);

        for board in &seen {
            let lines = winning_lines(board);
            if let Some(first) = lines.first() {
                assert!(lines.iter().all(|line| line.mark == first.mark));
                assert_eq!(evaluate(board).winner(), Some(first.mark));
            }
            let status = evaluate(board);
            assert!(!(status.winner().is_some() && status == GameStatus::Draw));
        }
    }
}
