//! Four-in-a-row slot grid
//!
//! Row 0 is the bottom of the board. Pieces stack from the bottom up.

use serde::{Deserialize, Serialize};

/// A player's piece
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    Yellow,
    Red,
}

impl Piece {
    /// The opposing player's piece
    pub fn other(self) -> Self {
        match self {
            Piece::Yellow => Piece::Red,
            Piece::Red => Piece::Yellow,
        }
    }
}

/// Column-major grid of slots
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    columns: usize,
    rows: usize,
    slots: Vec<Option<Piece>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(7, 6)
    }
}

impl Board {
    /// Create an empty board
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            slots: vec![None; columns * rows],
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    fn index(&self, column: usize, row: usize) -> Option<usize> {
        (column < self.columns && row < self.rows).then(|| column * self.rows + row)
    }

    /// Piece at a slot, `None` when empty or out of range
    pub fn get(&self, column: usize, row: usize) -> Option<Piece> {
        self.index(column, row).and_then(|i| self.slots[i])
    }

    /// Lowest empty row in a column, scanning bottom-up
    pub fn lowest_free_row(&self, column: usize) -> Option<usize> {
        (0..self.rows).find(|&row| self.index(column, row).is_some_and(|i| self.slots[i].is_none()))
    }

    /// Whether a column has no free slot
    pub fn is_column_full(&self, column: usize) -> bool {
        self.lowest_free_row(column).is_none()
    }

    /// Whether every slot is taken
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Put a piece into an empty slot
    ///
    /// Returns `false` without writing when the slot is taken or out of range.
    pub fn place(&mut self, column: usize, row: usize, piece: Piece) -> bool {
        match self.index(column, row) {
            Some(i) if self.slots[i].is_none() => {
                self.slots[i] = Some(piece);
                true
            }
            _ => false,
        }
    }

    /// Number of occupied slots
    pub fn piece_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Iterate `(column, row, piece)` for occupied slots
    pub fn pieces(&self) -> impl Iterator<Item = (usize, usize, Piece)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(move |(i, slot)| slot.map(|p| (i / self.rows, i % self.rows, p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board_is_empty() {
        let board = Board::default();
        assert_eq!(board.columns(), 7);
        assert_eq!(board.rows(), 6);
        assert_eq!(board.piece_count(), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn test_other_piece() {
        assert_eq!(Piece::Yellow.other(), Piece::Red);
        assert_eq!(Piece::Red.other(), Piece::Yellow);
    }

    #[test]
    fn test_pieces_stack_bottom_up() {
        let mut board = Board::default();
        assert_eq!(board.lowest_free_row(2), Some(0));
        assert!(board.place(2, 0, Piece::Red));
        assert_eq!(board.lowest_free_row(2), Some(1));
        assert!(board.place(2, 1, Piece::Yellow));
        assert_eq!(board.lowest_free_row(2), Some(2));
        assert_eq!(board.get(2, 0), Some(Piece::Red));
        assert_eq!(board.get(2, 1), Some(Piece::Yellow));
    }

    #[test]
    fn test_place_rejects_occupied_slot() {
        let mut board = Board::default();
        assert!(board.place(0, 0, Piece::Red));
        assert!(!board.place(0, 0, Piece::Yellow));
        assert_eq!(board.get(0, 0), Some(Piece::Red));
        assert_eq!(board.piece_count(), 1);
    }

    #[test]
    fn test_out_of_range() {
        let mut board = Board::new(2, 2);
        assert!(!board.place(2, 0, Piece::Red));
        assert_eq!(board.get(5, 5), None);
        assert_eq!(board.lowest_free_row(9), None);
        assert!(board.is_column_full(9));
    }

    #[test]
    fn test_full_column_and_board() {
        let mut board = Board::new(1, 3);
        for row in 0..3 {
            assert!(board.place(0, row, Piece::Yellow));
        }
        assert!(board.is_column_full(0));
        assert!(board.is_full());
        assert_eq!(board.pieces().count(), 3);
    }
}
