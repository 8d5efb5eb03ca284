use super::super::attack_tables::KNIGHT_ATTACKS;
use super::super::{Bitboard, Grid, Piece, Square};

impl Piece {
    pub(crate) fn knight_protected(&self) -> Bitboard {
        KNIGHT_ATTACKS[self.square.index()]
    }

    pub(crate) fn knight_move_targets(&self, grid: &Grid) -> Vec<Square> {
        self.knight_protected()
            .iter()
            .filter(|&sq| grid.is_empty(sq))
            .collect()
    }

    pub(crate) fn knight_attack_targets(&self, grid: &Grid) -> Vec<Square> {
        self.knight_protected()
            .iter()
            .filter(|&sq| self.holds_enemy(grid, sq))
            .collect()
    }
}
