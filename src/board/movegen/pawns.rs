use super::super::attack_tables::PAWN_ATTACKS;
use super::super::{Bitboard, Grid, Piece, Square};

impl Piece {
    pub(crate) fn pawn_protected(&self) -> Bitboard {
        PAWN_ATTACKS[self.color.index()][self.square.index()]
    }

    pub(crate) fn pawn_move_targets(&self, grid: &Grid) -> Vec<Square> {
        let dir = self.color.pawn_direction();
        let mut targets = Vec::with_capacity(2);

        let Some(forward) = self.square.offset(dir, 0) else {
            return targets;
        };
        if !grid.is_empty(forward) {
            return targets;
        }
        targets.push(forward);

        if self.square.rank() == self.color.pawn_start_rank() {
            if let Some(double) = forward.offset(dir, 0) {
                if grid.is_empty(double) {
                    targets.push(double);
                }
            }
        }
        targets
    }

    pub(crate) fn pawn_attack_targets(&self, grid: &Grid) -> Vec<Square> {
        self.pawn_protected()
            .iter()
            .filter(|&sq| self.holds_enemy(grid, sq))
            .collect()
    }

    /// En-passant destination capturing toward the a-file side.
    #[must_use]
    pub fn left_en_passant_tile(&self, grid: &Grid) -> Option<Square> {
        self.en_passant_tile(grid, -1)
    }

    /// En-passant destination capturing toward the h-file side.
    #[must_use]
    pub fn right_en_passant_tile(&self, grid: &Grid) -> Option<Square> {
        self.en_passant_tile(grid, 1)
    }

    // Pawn on its fifth rank, an eligible enemy pawn beside it, and the
    // square that pawn skipped over still empty.
    fn en_passant_tile(&self, grid: &Grid, df: isize) -> Option<Square> {
        if !self.is_pawn() || self.square.rank() != self.color.en_passant_rank() {
            return None;
        }
        let beside = self.square.offset(0, df)?;
        let victim = grid.occupant(beside)?;
        if !(victim.is_pawn() && victim.is_enemy(self) && victim.en_passant) {
            return None;
        }
        let behind = beside.offset(self.color.pawn_direction(), 0)?;
        grid.is_empty(behind).then_some(behind)
    }
}
