use super::super::attack_tables::KING_ATTACKS;
use super::super::{Bitboard, Grid, Piece, PieceKind, Square};

const KING_HOME_FILE: usize = 4;

/// Castling destinations for a king: `left` toward the a-file rook,
/// `right` toward the h-file rook.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CastleTiles {
    pub left: Option<Square>,
    pub right: Option<Square>,
}

impl CastleTiles {
    pub fn iter(&self) -> impl Iterator<Item = Square> {
        self.left.into_iter().chain(self.right)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl Piece {
    pub(crate) fn king_protected(&self) -> Bitboard {
        KING_ATTACKS[self.square.index()]
    }

    pub(crate) fn king_move_targets(&self, grid: &Grid) -> Vec<Square> {
        self.king_protected()
            .iter()
            .filter(|&sq| grid.is_empty(sq) && !grid.tile(sq).protected_by_enemy(self))
            .collect()
    }

    pub(crate) fn king_attack_targets(&self, grid: &Grid) -> Vec<Square> {
        self.king_protected()
            .iter()
            .filter(|&sq| self.holds_enemy(grid, sq) && !grid.tile(sq).protected_by_enemy(self))
            .collect()
    }

    /// Whether the enemy covers this king's square.
    ///
    /// # Panics
    /// Panics if called on anything but a king.
    #[must_use]
    pub fn in_check(&self, grid: &Grid) -> bool {
        assert!(self.is_king(), "in_check asked of a {}", self.kind);
        grid.tile(self.square).protected_by_enemy(self)
    }

    /// Castling destinations currently open to this king.
    ///
    /// Requires an unmoved king on its home square and not in check, an
    /// unmoved allied rook in the corner, and every square between them
    /// empty and not covered by the enemy.
    #[must_use]
    pub fn castle_tiles(&self, grid: &Grid) -> CastleTiles {
        let home = Square(self.color.back_rank(), KING_HOME_FILE);
        if !self.is_king()
            || self.has_moved()
            || self.square != home
            || grid.tile(home).protected_by_enemy(self)
        {
            return CastleTiles::default();
        }
        CastleTiles {
            left: self.castle_side(grid, 0, 2),
            right: self.castle_side(grid, 7, 6),
        }
    }

    fn castle_side(&self, grid: &Grid, rook_file: usize, king_to_file: usize) -> Option<Square> {
        let rank = self.square.rank();
        let rook = grid.occupant(Square(rank, rook_file))?;
        if rook.kind != PieceKind::Rook || !rook.is_ally(self) || rook.has_moved() {
            return None;
        }
        let (lo, hi) = if rook_file < KING_HOME_FILE {
            (rook_file + 1, KING_HOME_FILE)
        } else {
            (KING_HOME_FILE + 1, rook_file)
        };
        let path_clear = (lo..hi).map(|file| Square(rank, file)).all(|sq| {
            grid.is_empty(sq) && !grid.tile(sq).protected_by_enemy(self)
        });
        path_clear.then_some(Square(rank, king_to_file))
    }
}
