//! One cell of the grid.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, PieceId, Square};

/// A board cell: its fixed square, optional occupant, and the two attack-map flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tile {
    square: Square,
    pub(crate) occupant: Option<PieceId>,
    pub(crate) attacked_by_white: bool,
    pub(crate) attacked_by_black: bool,
}

impl Tile {
    pub(crate) fn new(square: Square) -> Self {
        Tile {
            square,
            occupant: None,
            attacked_by_white: false,
            attacked_by_black: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn square(&self) -> Square {
        self.square
    }

    #[inline]
    #[must_use]
    pub fn occupant(&self) -> Option<PieceId> {
        self.occupant
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    #[inline]
    #[must_use]
    pub fn attacked_by_white(&self) -> bool {
        self.attacked_by_white
    }

    #[inline]
    #[must_use]
    pub fn attacked_by_black(&self) -> bool {
        self.attacked_by_black
    }

    /// Whether pieces of `color` cover this tile.
    #[inline]
    #[must_use]
    pub fn attacked_by(&self, color: Color) -> bool {
        match color {
            Color::White => self.attacked_by_white,
            Color::Black => self.attacked_by_black,
        }
    }

    /// Covered by the side opposing `piece`.
    #[inline]
    #[must_use]
    pub fn protected_by_enemy(&self, piece: &Piece) -> bool {
        self.attacked_by(piece.color().opponent())
    }

    /// Covered by `piece`'s own side.
    #[inline]
    #[must_use]
    pub fn protected_by_ally(&self, piece: &Piece) -> bool {
        self.attacked_by(piece.color())
    }

    pub(crate) fn mark(&mut self, color: Color) {
        match color {
            Color::White => self.attacked_by_white = true,
            Color::Black => self.attacked_by_black = true,
        }
    }

    pub(crate) fn clear_marks(&mut self) {
        self.attacked_by_white = false;
        self.attacked_by_black = false;
    }
}
