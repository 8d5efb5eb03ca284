//! Move representation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// What a move does to the board, and so which applier variant handles it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    Quiet,
    /// Pawn advance of two squares from its start rank.
    DoublePush,
    Capture,
    /// Pawn reaching the far rank; always becomes a queen.
    Promotion,
    CapturePromotion,
    EnPassant,
    /// King move of two files; the matching rook jumps over it.
    Castle,
}

/// A move of one piece from one square to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Move { from, to, kind }
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        matches!(
            self.kind,
            MoveKind::Capture | MoveKind::CapturePromotion | MoveKind::EnPassant
        )
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(&self) -> bool {
        matches!(self.kind, MoveKind::Promotion | MoveKind::CapturePromotion)
    }
}
