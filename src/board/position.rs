//! The mutable position a search walks: one grid plus both flat registries.

use super::{Board, Color, Grid, Move, Piece, PieceId};

/// A grid together with the White and Black piece registries.
///
/// Exactly one `Position` is mutated in place by a depth-first search; the
/// make/unmake operations keep the grid, the registries and the attack map
/// consistent after every call. Fork with `clone` for independent copies.
#[derive(Clone, Debug)]
pub struct Position {
    pub(crate) grid: Grid,
    pub(crate) white: Vec<PieceId>,
    pub(crate) black: Vec<PieceId>,
}

impl Default for Position {
    fn default() -> Self {
        Self::standard()
    }
}

impl Position {
    /// Classify the grid's occupants into registries and rebuild the attack map.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        let (white, black) = Board::from_grid(&grid).into_lists();
        let mut position = Position { grid, white, black };
        position.recompute();
        #[cfg(feature = "logging")]
        log::debug!(
            "position with {} white and {} black pieces",
            position.white.len(),
            position.black.len()
        );
        position
    }

    #[must_use]
    pub fn standard() -> Self {
        Self::new(Grid::standard())
    }

    #[inline]
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// The flat registry for `color`, in its current iteration order.
    #[inline]
    #[must_use]
    pub fn pieces(&self, color: Color) -> &[PieceId] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub(crate) fn registry_mut(&mut self, color: Color) -> &mut Vec<PieceId> {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    /// A fresh per-kind classification of the current grid.
    #[must_use]
    pub fn board(&self) -> Board {
        Board::from_grid(&self.grid)
    }

    #[must_use]
    pub fn king(&self, color: Color) -> Option<&Piece> {
        self.pieces(color)
            .iter()
            .map(|&id| self.grid.piece(id))
            .find(|piece| piece.is_king())
    }

    /// Whether `color`'s king stands on a square the other side covers.
    /// A side without a king is never in check.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        self.king(color).is_some_and(|king| king.in_check(&self.grid))
    }

    /// Candidate moves for every piece of `color`, in registry order.
    #[must_use]
    pub fn pseudo_legal_moves(&self, color: Color) -> Vec<Move> {
        self.pieces(color)
            .iter()
            .flat_map(|&id| self.grid.candidate_moves(id))
            .collect()
    }

    /// Candidate moves that do not leave `color`'s own king in check.
    ///
    /// Each candidate is made and unmade on this position; the position is
    /// unchanged on return.
    pub fn legal_moves(&mut self, color: Color) -> Vec<Move> {
        let candidates = self.pseudo_legal_moves(color);
        candidates
            .into_iter()
            .filter(|&mv| {
                let info = self.make_move(mv);
                let safe = !self.in_check(color);
                self.unmake_move(info);
                safe
            })
            .collect()
    }

    pub(crate) fn recompute(&mut self) {
        self.grid.recompute_protections(&self.white, &self.black);
    }

    /// Exact equality including piece identities and registry order.
    #[must_use]
    pub(crate) fn identical(&self, other: &Position) -> bool {
        self.grid.identical(&other.grid) && self.white == other.white && self.black == other.black
    }
}
