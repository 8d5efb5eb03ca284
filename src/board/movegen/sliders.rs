use super::super::attack_tables::{ray, BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use super::super::{Bitboard, Grid, Piece, PieceKind, Square};

impl Piece {
    fn directions(&self) -> &'static [(isize, isize)] {
        match self.kind {
            PieceKind::Bishop => &BISHOP_DIRECTIONS,
            PieceKind::Rook => &ROOK_DIRECTIONS,
            PieceKind::Queen => &QUEEN_DIRECTIONS,
            other => unreachable!("{other} is not a slider"),
        }
    }

    pub(crate) fn slider_move_targets(&self, grid: &Grid) -> Vec<Square> {
        let mut targets = Vec::new();
        for &(dr, df) in self.directions() {
            targets.extend(ray(self.square, dr, df).take_while(|&sq| grid.is_empty(sq)));
        }
        targets
    }

    pub(crate) fn slider_attack_targets(&self, grid: &Grid) -> Vec<Square> {
        self.directions()
            .iter()
            .filter_map(|&(dr, df)| ray(self.square, dr, df).find(|&sq| !grid.is_empty(sq)))
            .filter(|&sq| self.holds_enemy(grid, sq))
            .collect()
    }

    /// Each ray covers up to and including its first blocker. When that
    /// blocker is the enemy king the ray pierces one square further, so the
    /// king cannot step back along the line it is attacked on.
    pub(crate) fn slider_protected(&self, grid: &Grid) -> Bitboard {
        let mut covered = Bitboard::EMPTY;
        for &(dr, df) in self.directions() {
            for sq in ray(self.square, dr, df) {
                covered.insert(sq);
                let Some(blocker) = grid.occupant(sq) else {
                    continue;
                };
                if blocker.is_king() && blocker.is_enemy(self) {
                    if let Some(behind) = sq.offset(dr, df) {
                        covered.insert(behind);
                    }
                }
                break;
            }
        }
        covered
    }
}
