//! The 3x3 grid.

use crate::position::Position;
use crate::types::{Cell, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from markers in row-major order, with no last-move flag.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self {
            cells: squares.map(|square| Cell::new(square, false)),
        }
    }

    /// Gets the marker at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.cells[pos.to_index()].square()
    }

    /// Gets the full cell at the given position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Sets the marker at the given position without touching the last-move flag.
    pub fn set(&mut self, pos: Position, square: Square) {
        let flag = self.cells[pos.to_index()].was_last_move();
        self.cells[pos.to_index()] = Cell::new(square, flag);
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the markers in row-major order.
    pub fn squares(&self) -> [Square; 9] {
        self.cells.map(|cell| cell.square())
    }

    /// Returns the empty positions, lowest number first.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::iter_all()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Returns the position carrying the last-move flag, if any.
    pub fn last_move(&self) -> Option<Position> {
        Position::iter_all().find(|pos| self.cell(*pos).was_last_move())
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.square().is_empty()).count()
    }

    /// Marks `pos` for `player` and moves the last-move flag onto it.
    ///
    /// Callers must have checked that the cell is empty.
    #[instrument(skip(self))]
    pub(crate) fn place(&mut self, pos: Position, player: Player) {
        debug_assert!(self.is_empty(pos), "place on occupied cell");
        for cell in self.cells.iter_mut() {
            cell.clear_last_move();
        }
        self.cells[pos.to_index()].occupy(player);
    }

    /// Empties every cell and clears all flags.
    pub(crate) fn clear(&mut self) {
        *self = Self::new();
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_moves_last_move_flag() {
        let mut board = Board::new();
        board.place(Position::Center, Player::PlayerOne);
        assert_eq!(board.last_move(), Some(Position::Center));

        board.place(Position::TopLeft, Player::PlayerTwo);
        assert_eq!(board.last_move(), Some(Position::TopLeft));
        assert!(!board.cell(Position::Center).was_last_move());
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::PlayerOne));
    }

    #[test]
    fn test_empty_positions_are_ordered() {
        let mut board = Board::new();
        board.place(Position::TopCenter, Player::PlayerOne);
        board.place(Position::BottomRight, Player::PlayerTwo);
        let numbers: Vec<usize> = board.empty_positions().iter().map(|p| p.number()).collect();
        assert_eq!(numbers, vec![1, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_clear_resets_cells_and_flags() {
        let mut board = Board::new();
        board.place(Position::Center, Player::PlayerOne);
        board.clear();
        assert_eq!(board, Board::new());
        assert_eq!(board.last_move(), None);
    }
}
