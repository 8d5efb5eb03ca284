//! Per-color piece registries derived from a grid.

use super::{Color, Grid, PieceId, PieceKind};

/// One color's pieces: a flat list, per-kind sub-lists and the king.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registry {
    pieces: Vec<PieceId>,
    by_kind: [Vec<PieceId>; 6],
    king: Option<PieceId>,
}

impl Registry {
    fn push(&mut self, id: PieceId, kind: PieceKind) {
        self.pieces.push(id);
        self.by_kind[kind.index()].push(id);
        if kind == PieceKind::King {
            self.king = Some(id);
        }
    }

    #[must_use]
    pub fn pieces(&self) -> &[PieceId] {
        &self.pieces
    }

    #[must_use]
    pub fn of_kind(&self, kind: PieceKind) -> &[PieceId] {
        &self.by_kind[kind.index()]
    }

    #[must_use]
    pub fn king(&self) -> Option<PieceId> {
        self.king
    }
}

/// Classification of every occupant of a grid by color and kind.
///
/// A `Board` is a snapshot: it is rebuilt wholesale with `from_grid` and is
/// not kept in step with later moves on that grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    white: Registry,
    black: Registry,
}

impl Board {
    /// Walk the tiles in row-major order and file each occupant.
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        let mut board = Board::default();
        for piece in grid.pieces() {
            board.registry_mut(piece.color()).push(piece.id(), piece.kind());
        }
        board
    }

    #[must_use]
    pub fn registry(&self, color: Color) -> &Registry {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    fn registry_mut(&mut self, color: Color) -> &mut Registry {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    #[must_use]
    pub fn pieces(&self, color: Color) -> &[PieceId] {
        self.registry(color).pieces()
    }

    #[must_use]
    pub fn of_kind(&self, color: Color, kind: PieceKind) -> &[PieceId] {
        self.registry(color).of_kind(kind)
    }

    #[must_use]
    pub fn king(&self, color: Color) -> Option<PieceId> {
        self.registry(color).king()
    }

    #[must_use]
    pub fn count(&self, color: Color, kind: PieceKind) -> usize {
        self.of_kind(color, kind).len()
    }

    /// The flat White and Black lists, consumed.
    #[must_use]
    pub fn into_lists(self) -> (Vec<PieceId>, Vec<PieceId>) {
        (self.white.pieces, self.black.pieces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    #[test]
    fn test_standard_registries() {
        let grid = Grid::standard();
        let board = Board::from_grid(&grid);
        for color in Color::BOTH {
            assert_eq!(board.pieces(color).len(), 16);
            assert_eq!(board.count(color, PieceKind::Pawn), 8);
            assert_eq!(board.count(color, PieceKind::Knight), 2);
            assert_eq!(board.count(color, PieceKind::Queen), 1);
            let king = grid.piece(board.king(color).unwrap());
            assert_eq!(king.square(), Square(color.back_rank(), 4));
        }
    }

    #[test]
    fn test_every_occupant_filed_once() {
        let grid = Grid::standard();
        let board = Board::from_grid(&grid);
        for piece in grid.pieces() {
            let bucket = board.of_kind(piece.color(), piece.kind());
            assert_eq!(bucket.iter().filter(|&&id| id == piece.id()).count(), 1);
            let other = board.pieces(piece.color().opponent());
            assert!(!other.contains(&piece.id()));
        }
    }

    #[test]
    fn test_registry_order_is_row_major() {
        let grid = Grid::standard();
        let board = Board::from_grid(&grid);
        let squares: Vec<Square> = board
            .pieces(Color::White)
            .iter()
            .map(|&id| grid.piece(id).square())
            .collect();
        let mut sorted = squares.clone();
        sorted.sort();
        assert_eq!(squares, sorted);
    }
}
