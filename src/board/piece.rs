//! Pieces and their identity.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, PieceKind, Square};

/// Stable identity of one piece, valid for as long as it sits in its grid's arena.
///
/// Two pieces with the same kind and color on the same square are still
/// different pieces when their ids differ; undoing a promotion restores the
/// pawn's id, not merely an equal pawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceId(pub(crate) u32);

impl PieceId {
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A piece on (or captured from) a grid.
///
/// `square` is the denormalized copy of the tile that holds this piece; only
/// `Grid::set_occupant` writes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub(crate) id: PieceId,
    pub(crate) square: Square,
    pub(crate) move_count: u32,
    pub(crate) color: Color,
    pub(crate) kind: PieceKind,
    pub(crate) en_passant: bool,
}

impl Piece {
    pub(crate) fn new(id: PieceId, square: Square, color: Color, kind: PieceKind) -> Self {
        Piece {
            id,
            square,
            move_count: 0,
            color,
            kind,
            en_passant: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn square(&self) -> Square {
        self.square
    }

    #[inline]
    #[must_use]
    pub fn row(&self) -> usize {
        self.square.rank()
    }

    #[inline]
    #[must_use]
    pub fn column(&self) -> usize {
        self.square.file()
    }

    /// Number of moves this piece has made; 0 means it never moved.
    #[inline]
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[inline]
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.move_count > 0
    }

    #[inline]
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn is_king(&self) -> bool {
        self.kind == PieceKind::King
    }

    #[inline]
    #[must_use]
    pub fn is_pawn(&self) -> bool {
        self.kind == PieceKind::Pawn
    }

    /// Pawn that just advanced two squares and may be taken en passant.
    #[inline]
    #[must_use]
    pub fn en_passant(&self) -> bool {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub fn is_ally(&self, other: &Piece) -> bool {
        self.color == other.color
    }

    #[inline]
    #[must_use]
    pub fn is_enemy(&self, other: &Piece) -> bool {
        self.color != other.color
    }
}
