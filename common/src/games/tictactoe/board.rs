use std::fmt;

use super::types::{BOARD_SIZE, Mark, PlaceError, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.row][pos.col]
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Mark::Empty
    }

    /// Leaves the board untouched when the cell is already marked.
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), PlaceError> {
        if !self.is_empty(pos) {
            return Err(PlaceError::Occupied(pos));
        }
        self.cells[pos.row][pos.col] = mark;
        Ok(())
    }

    /// Unchecked write for search trials; the caller retracts it with `clear`.
    pub(crate) fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.row][pos.col] = mark;
    }

    pub(crate) fn clear(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = Mark::Empty;
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn mark_count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == mark)
            .count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    0   1   2")?;
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f, "   ---+---+---")?;
            }
            let symbols: Vec<String> = cells
                .iter()
                .map(|mark| match mark {
                    Mark::Empty => " ".to_string(),
                    other => other.to_string(),
                })
                .collect();
            writeln!(f, "{}   {} | {} | {}", row, symbols[0], symbols[1], symbols[2])?;
        }
        Ok(())
    }
}
