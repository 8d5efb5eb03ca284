//! Per-piece move, attack and protection generation.
//!
//! Every kind answers the same capability set; dispatch is a match on
//! `PieceKind`. Protection is computed once as a `Bitboard` and the list,
//! mark and count forms are views of it.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub use kings::CastleTiles;

use super::{Bitboard, Grid, Move, MoveKind, Piece, PieceId, PieceKind, Square};

impl Piece {
    /// Empty squares this piece can move to. Only the king filters out
    /// squares the enemy covers; everything else is pseudo-legal.
    #[must_use]
    pub fn move_targets(&self, grid: &Grid) -> Vec<Square> {
        match self.kind {
            PieceKind::Pawn => self.pawn_move_targets(grid),
            PieceKind::Knight => self.knight_move_targets(grid),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                self.slider_move_targets(grid)
            }
            PieceKind::King => self.king_move_targets(grid),
        }
    }

    /// Enemy-occupied squares this piece can capture on.
    #[must_use]
    pub fn attack_targets(&self, grid: &Grid) -> Vec<Square> {
        match self.kind {
            PieceKind::Pawn => self.pawn_attack_targets(grid),
            PieceKind::Knight => self.knight_attack_targets(grid),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                self.slider_attack_targets(grid)
            }
            PieceKind::King => self.king_attack_targets(grid),
        }
    }

    /// Every square this piece covers, whoever stands there.
    #[must_use]
    pub fn protected_set(&self, grid: &Grid) -> Bitboard {
        match self.kind {
            PieceKind::Pawn => self.pawn_protected(),
            PieceKind::Knight => self.knight_protected(),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                self.slider_protected(grid)
            }
            PieceKind::King => self.king_protected(),
        }
    }

    #[must_use]
    pub fn protected_targets(&self, grid: &Grid) -> Vec<Square> {
        self.protected_set(grid).iter().collect()
    }

    #[must_use]
    pub fn protected_count(&self, grid: &Grid) -> u32 {
        self.protected_set(grid).popcount()
    }

    /// Set this piece's color flag on every tile it covers.
    pub fn mark_protected(&self, grid: &mut Grid) {
        let covered = self.protected_set(grid);
        grid.mark(self.color, covered);
    }

    fn holds_enemy(&self, grid: &Grid, sq: Square) -> bool {
        grid.occupant(sq).is_some_and(|other| other.is_enemy(self))
    }
}

impl Grid {
    /// Tagged candidate moves for one piece: plain moves, captures,
    /// en passant and castling, with promotions marked.
    #[must_use]
    pub fn candidate_moves(&self, id: PieceId) -> Vec<Move> {
        let piece = self.piece(id);
        debug_assert_eq!(self.tile(piece.square).occupant, Some(id), "piece is off the board");
        let from = piece.square;
        let promotes = |to: Square| piece.is_pawn() && to.rank() == piece.color.pawn_promotion_rank();
        let mut moves = Vec::new();

        for to in piece.move_targets(self) {
            let kind = if promotes(to) {
                MoveKind::Promotion
            } else if piece.is_pawn() && to.rank().abs_diff(from.rank()) == 2 {
                MoveKind::DoublePush
            } else {
                MoveKind::Quiet
            };
            moves.push(Move::new(from, to, kind));
        }

        for to in piece.attack_targets(self) {
            let kind = if promotes(to) {
                MoveKind::CapturePromotion
            } else {
                MoveKind::Capture
            };
            moves.push(Move::new(from, to, kind));
        }

        match piece.kind {
            PieceKind::Pawn => {
                let tiles = [piece.left_en_passant_tile(self), piece.right_en_passant_tile(self)];
                for to in tiles.into_iter().flatten() {
                    moves.push(Move::new(from, to, MoveKind::EnPassant));
                }
            }
            PieceKind::King => {
                for to in piece.castle_tiles(self).iter() {
                    moves.push(Move::new(from, to, MoveKind::Castle));
                }
            }
            _ => {}
        }

        moves
    }
}
