//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece, including move counts and
//! en-passant eligibility, which FEN placement cannot express.
//!
//! # Example
//! ```
//! use chess_rules::board::{GridBuilder, Color, PieceKind, Square};
//!
//! let position = GridBuilder::new()
//!     .piece(Square(0, 4), Color::White, PieceKind::King)
//!     .piece(Square(7, 4), Color::Black, PieceKind::King)
//!     .piece(Square(1, 0), Color::White, PieceKind::Pawn)
//!     .moved(Square(0, 4), 1)
//!     .build_position();
//! assert!(!position.in_check(Color::White));
//! ```

use super::grid::BACK_RANK;
use super::{Color, Grid, PieceKind, Position, Square};

#[derive(Clone, Debug)]
struct Placement {
    square: Square,
    color: Color,
    kind: PieceKind,
    move_count: u32,
    en_passant: bool,
}

/// A fluent builder for `Grid` and `Position` values.
#[derive(Clone, Debug, Default)]
pub struct GridBuilder {
    pieces: Vec<Placement>,
}

impl GridBuilder {
    /// Create a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            builder = builder
                .piece(Square(0, file), Color::White, kind)
                .piece(Square(1, file), Color::White, PieceKind::Pawn)
                .piece(Square(6, file), Color::Black, PieceKind::Pawn)
                .piece(Square(7, file), Color::Black, kind);
        }
        builder
    }

    /// Place a piece on the board, replacing whatever was there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|p| p.square != square);
        self.pieces.push(Placement {
            square,
            color,
            kind,
            move_count: 0,
            en_passant: false,
        });
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|p| p.square != square);
        self
    }

    /// Set the move count of the piece on `square`.
    ///
    /// # Panics
    /// Panics if no piece has been placed on `square`.
    #[must_use]
    pub fn moved(mut self, square: Square, move_count: u32) -> Self {
        self.placement_mut(square).move_count = move_count;
        self
    }

    /// Mark the pawn on `square` as having just advanced two squares.
    ///
    /// # Panics
    /// Panics if no pawn has been placed on `square`.
    #[must_use]
    pub fn en_passant(mut self, square: Square) -> Self {
        let placement = self.placement_mut(square);
        assert_eq!(placement.kind, PieceKind::Pawn, "only pawns can be taken en passant");
        placement.en_passant = true;
        placement.move_count = placement.move_count.max(1);
        self
    }

    fn placement_mut(&mut self, square: Square) -> &mut Placement {
        self.pieces
            .iter_mut()
            .find(|p| p.square == square)
            .unwrap_or_else(|| panic!("no piece placed on {square}"))
    }

    /// Build the grid with its attack map computed.
    #[must_use]
    pub fn build(self) -> Grid {
        let mut grid = Grid::empty();
        for placement in self.pieces {
            let id = grid.spawn(placement.square, placement.color, placement.kind);
            let piece = grid.piece_mut(id);
            piece.move_count = placement.move_count;
            piece.en_passant = placement.en_passant;
        }
        grid.refresh_protections();
        grid
    }

    /// Build a position with registries classified from the grid.
    #[must_use]
    pub fn build_position(self) -> Position {
        Position::new(self.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position_matches_standard() {
        assert_eq!(GridBuilder::starting_position().build(), Grid::standard());
    }

    #[test]
    fn test_piece_replaces_existing() {
        let grid = GridBuilder::new()
            .piece(Square(3, 3), Color::White, PieceKind::Knight)
            .piece(Square(3, 3), Color::Black, PieceKind::Bishop)
            .build();
        let piece = grid.occupant(Square(3, 3)).unwrap();
        assert_eq!((piece.color(), piece.kind()), (Color::Black, PieceKind::Bishop));
        assert_eq!(grid.pieces().count(), 1);
    }

    #[test]
    fn test_moved_and_en_passant_flags() {
        let grid = GridBuilder::new()
            .piece(Square(3, 4), Color::White, PieceKind::Pawn)
            .en_passant(Square(3, 4))
            .piece(Square(0, 0), Color::White, PieceKind::Rook)
            .moved(Square(0, 0), 3)
            .build();
        let pawn = grid.occupant(Square(3, 4)).unwrap();
        assert!(pawn.en_passant());
        assert_eq!(pawn.move_count(), 1);
        assert_eq!(grid.occupant(Square(0, 0)).unwrap().move_count(), 3);
    }

    #[test]
    #[should_panic(expected = "no piece placed")]
    fn test_moved_requires_piece() {
        let _ = GridBuilder::new().moved(Square(2, 2), 1);
    }
}
