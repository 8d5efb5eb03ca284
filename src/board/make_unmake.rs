//! Reversible move application.
//!
//! Every `apply_*` returns the data its matching `undo_*` needs to restore
//! the grid, the registries and the attack map exactly. Undo calls must be
//! made in reverse order of their applies; a mismatched pairing panics.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Move, MoveKind, PieceId, PieceKind, Position, Square};

/// Restoration data for a plain move; every other variant embeds one.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveUndo {
    pub(crate) piece: PieceId,
    pub(crate) from: Square,
    pub(crate) to: Square,
    // Mover's pawns whose en-passant eligibility lapsed with this ply.
    pub(crate) cleared_en_passant: Vec<PieceId>,
}

impl MoveUndo {
    #[must_use]
    pub fn piece(&self) -> PieceId {
        self.piece
    }

    #[must_use]
    pub fn from(&self) -> Square {
        self.from
    }

    #[must_use]
    pub fn to(&self) -> Square {
        self.to
    }
}

/// A piece taken off the board, with the slot it held in its registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CapturedPiece {
    pub id: PieceId,
    pub square: Square,
    pub index: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PromotionUndo {
    pub(crate) shift: MoveUndo,
    pub(crate) queen: PieceId,
    pub(crate) index: usize,
}

impl PromotionUndo {
    /// The queen that replaced the pawn.
    #[must_use]
    pub fn queen(&self) -> PieceId {
        self.queen
    }

    /// The pawn, which undo puts back.
    #[must_use]
    pub fn pawn(&self) -> PieceId {
        self.shift.piece
    }

    /// Registry slot shared by the pawn and its queen.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CaptureUndo {
    pub(crate) shift: MoveUndo,
    pub(crate) captured: CapturedPiece,
}

impl CaptureUndo {
    #[must_use]
    pub fn captured(&self) -> CapturedPiece {
        self.captured
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CapturePromotionUndo {
    pub(crate) promotion: PromotionUndo,
    pub(crate) captured: CapturedPiece,
}

impl CapturePromotionUndo {
    #[must_use]
    pub fn captured(&self) -> CapturedPiece {
        self.captured
    }

    #[must_use]
    pub fn promotion(&self) -> &PromotionUndo {
        &self.promotion
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastleUndo {
    pub(crate) king: MoveUndo,
    pub(crate) rook: PieceId,
    pub(crate) rook_from: Square,
    pub(crate) rook_to: Square,
}

/// Restoration data for any applier variant, as returned by `make_move`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnmakeInfo {
    Move(MoveUndo),
    Promotion(PromotionUndo),
    Capture(CaptureUndo),
    CapturePromotion(CapturePromotionUndo),
    EnPassant(CaptureUndo),
    Castle(CastleUndo),
}

impl Position {
    /// Apply any move, dispatching on its kind.
    pub fn make_move(&mut self, mv: Move) -> UnmakeInfo {
        #[cfg(feature = "logging")]
        log::trace!("make {:?} {} -> {}", mv.kind, mv.from, mv.to);
        match mv.kind {
            MoveKind::Quiet | MoveKind::DoublePush => {
                UnmakeInfo::Move(self.apply_move(mv.from, mv.to))
            }
            MoveKind::Capture => UnmakeInfo::Capture(self.apply_capture(mv.from, mv.to)),
            MoveKind::Promotion => UnmakeInfo::Promotion(self.apply_promotion(mv.from, mv.to)),
            MoveKind::CapturePromotion => {
                UnmakeInfo::CapturePromotion(self.apply_capture_promotion(mv.from, mv.to))
            }
            MoveKind::EnPassant => UnmakeInfo::EnPassant(self.apply_en_passant(mv.from, mv.to)),
            MoveKind::Castle => UnmakeInfo::Castle(self.apply_castle(mv.from, mv.to)),
        }
    }

    /// Exactly invert the `make_move` that returned `info`.
    pub fn unmake_move(&mut self, info: UnmakeInfo) {
        #[cfg(feature = "logging")]
        log::trace!("unmake {info:?}");
        match info {
            UnmakeInfo::Move(undo) => self.undo_move(undo),
            UnmakeInfo::Promotion(undo) => self.undo_promotion(undo),
            UnmakeInfo::Capture(undo) => self.undo_capture(undo),
            UnmakeInfo::CapturePromotion(undo) => self.undo_capture_promotion(undo),
            UnmakeInfo::EnPassant(undo) => self.undo_en_passant(undo),
            UnmakeInfo::Castle(undo) => self.undo_castle(undo),
        }
    }

    /// Move the piece on `from` to the empty square `to`.
    pub fn apply_move(&mut self, from: Square, to: Square) -> MoveUndo {
        let undo = self.begin(from, to);
        self.recompute();
        undo
    }

    pub fn undo_move(&mut self, undo: MoveUndo) {
        self.rewind(&undo);
        self.recompute();
    }

    /// Move a pawn onto its last rank; a queen takes its square and registry slot.
    pub fn apply_promotion(&mut self, from: Square, to: Square) -> PromotionUndo {
        let shift = self.begin(from, to);
        let undo = self.promote(shift);
        self.recompute();
        undo
    }

    /// Discard the queen and put the original pawn back.
    pub fn undo_promotion(&mut self, undo: PromotionUndo) {
        self.demote(&undo);
        self.rewind(&undo.shift);
        self.recompute();
    }

    /// Take the enemy piece on `to` with the piece on `from`.
    pub fn apply_capture(&mut self, from: Square, to: Square) -> CaptureUndo {
        let capturer = self.mover(from);
        let captured = self.take(to, capturer);
        let shift = self.begin(from, to);
        self.recompute();
        CaptureUndo { shift, captured }
    }

    /// Put the capturer back and reinsert the captured piece at its old registry index.
    pub fn undo_capture(&mut self, undo: CaptureUndo) {
        self.rewind(&undo.shift);
        self.put_back(&undo.captured);
        self.recompute();
    }

    pub fn apply_capture_promotion(&mut self, from: Square, to: Square) -> CapturePromotionUndo {
        let capturer = self.mover(from);
        let captured = self.take(to, capturer);
        let shift = self.begin(from, to);
        let promotion = self.promote(shift);
        self.recompute();
        CapturePromotionUndo {
            promotion,
            captured,
        }
    }

    pub fn undo_capture_promotion(&mut self, undo: CapturePromotionUndo) {
        self.demote(&undo.promotion);
        self.rewind(&undo.promotion.shift);
        self.put_back(&undo.captured);
        self.recompute();
    }

    /// Pawn capture onto the empty square behind an eligible enemy pawn.
    pub fn apply_en_passant(&mut self, from: Square, to: Square) -> CaptureUndo {
        let capturer = self.mover(from);
        let victim_sq = Square(from.rank(), to.file());
        let victim = self
            .grid
            .occupant(victim_sq)
            .unwrap_or_else(|| panic!("no pawn to take en passant on {victim_sq}"));
        assert!(
            victim.is_pawn() && victim.en_passant(),
            "piece on {victim_sq} cannot be taken en passant"
        );
        let captured = self.take(victim_sq, capturer);
        let shift = self.begin(from, to);
        self.recompute();
        CaptureUndo { shift, captured }
    }

    pub fn undo_en_passant(&mut self, undo: CaptureUndo) {
        self.undo_capture(undo);
    }

    /// Move the king two files toward a rook and hop that rook over it.
    pub fn apply_castle(&mut self, from: Square, to: Square) -> CastleUndo {
        let king = self.mover(from);
        assert!(
            self.grid.piece(king).is_king() && from.rank() == to.rank() && from.file().abs_diff(to.file()) == 2,
            "{from} -> {to} is not a castling move"
        );
        let rank = from.rank();
        let (rook_from, rook_to) = if to.file() > from.file() {
            (Square(rank, 7), Square(rank, 5))
        } else {
            (Square(rank, 0), Square(rank, 3))
        };
        let rook = self
            .grid
            .tile(rook_from)
            .occupant()
            .unwrap_or_else(|| panic!("no rook on {rook_from} to castle with"));
        let king_undo = self.begin(from, to);
        self.shift(rook, rook_from, rook_to);
        self.recompute();
        CastleUndo {
            king: king_undo,
            rook,
            rook_from,
            rook_to,
        }
    }

    pub fn undo_castle(&mut self, undo: CastleUndo) {
        self.unshift(undo.rook, undo.rook_from, undo.rook_to);
        self.rewind(&undo.king);
        self.recompute();
    }

    fn mover(&self, from: Square) -> PieceId {
        self.grid
            .tile(from)
            .occupant()
            .unwrap_or_else(|| panic!("no piece on {from} to move"))
    }

    // Starts a ply: lapses the mover's en-passant flags, then moves the piece.
    fn begin(&mut self, from: Square, to: Square) -> MoveUndo {
        let piece = self.mover(from);
        let color = self.grid.piece(piece).color();
        let cleared_en_passant = self.clear_en_passant(color);
        self.shift(piece, from, to);
        MoveUndo {
            piece,
            from,
            to,
            cleared_en_passant,
        }
    }

    fn rewind(&mut self, undo: &MoveUndo) {
        self.unshift(undo.piece, undo.from, undo.to);
        for &id in &undo.cleared_en_passant {
            self.grid.piece_mut(id).en_passant = true;
        }
    }

    fn clear_en_passant(&mut self, color: Color) -> Vec<PieceId> {
        let cleared: Vec<PieceId> = self
            .pieces(color)
            .iter()
            .copied()
            .filter(|&id| self.grid.piece(id).en_passant)
            .collect();
        for &id in &cleared {
            self.grid.piece_mut(id).en_passant = false;
        }
        cleared
    }

    fn shift(&mut self, id: PieceId, from: Square, to: Square) {
        assert!(self.grid.is_empty(to), "cannot move onto occupied square {to}");
        self.grid.set_occupant(from, None);
        self.grid.set_occupant(to, Some(id));
        let piece = self.grid.piece_mut(id);
        piece.move_count += 1;
        if piece.is_pawn() && from.rank().abs_diff(to.rank()) == 2 {
            piece.en_passant = true;
        }
    }

    fn unshift(&mut self, id: PieceId, from: Square, to: Square) {
        assert_eq!(
            self.grid.tile(to).occupant(),
            Some(id),
            "undo does not match the last move onto {to}"
        );
        assert!(self.grid.is_empty(from), "cannot move back onto occupied square {from}");
        let piece = self.grid.piece_mut(id);
        piece.move_count = piece
            .move_count
            .checked_sub(1)
            .expect("undo of a piece that never moved");
        piece.en_passant = false;
        self.grid.set_occupant(to, None);
        self.grid.set_occupant(from, Some(id));
    }

    fn take(&mut self, sq: Square, capturer: PieceId) -> CapturedPiece {
        let capturer_color = self.grid.piece(capturer).color();
        let victim = *self
            .grid
            .occupant(sq)
            .unwrap_or_else(|| panic!("nothing to capture on {sq}"));
        assert_ne!(victim.color(), capturer_color, "cannot capture own piece on {sq}");
        let registry = self.registry_mut(victim.color());
        let index = registry
            .iter()
            .position(|&id| id == victim.id())
            .unwrap_or_else(|| panic!("captured piece on {sq} missing from its registry"));
        registry.remove(index);
        self.grid.set_occupant(sq, None);
        CapturedPiece {
            id: victim.id(),
            square: sq,
            index,
        }
    }

    fn put_back(&mut self, captured: &CapturedPiece) {
        assert!(
            self.grid.is_empty(captured.square),
            "cannot restore capture onto occupied square {}",
            captured.square
        );
        let color = self.grid.piece(captured.id).color();
        self.grid.set_occupant(captured.square, Some(captured.id));
        self.registry_mut(color).insert(captured.index, captured.id);
    }

    fn promote(&mut self, shift: MoveUndo) -> PromotionUndo {
        let pawn = *self.grid.piece(shift.piece);
        assert!(
            pawn.is_pawn() && shift.to.rank() == pawn.color().pawn_promotion_rank(),
            "only a pawn reaching its last rank promotes"
        );
        let queen = self.grid.allocate(shift.to, pawn.color(), PieceKind::Queen);
        self.grid.piece_mut(queen).move_count = pawn.move_count();
        self.grid.set_occupant(shift.to, Some(queen));
        let registry = self.registry_mut(pawn.color());
        let index = registry
            .iter()
            .position(|&id| id == pawn.id())
            .unwrap_or_else(|| panic!("promoting pawn missing from its registry"));
        registry[index] = queen;
        PromotionUndo { shift, queen, index }
    }

    fn demote(&mut self, undo: &PromotionUndo) {
        let at = undo.shift.to;
        assert_eq!(
            self.grid.tile(at).occupant(),
            Some(undo.queen),
            "undo does not match the promotion on {at}"
        );
        let color = self.grid.piece(undo.queen).color();
        let slot = &mut self.registry_mut(color)[undo.index];
        assert_eq!(*slot, undo.queen, "promoted queen moved within its registry");
        *slot = undo.shift.piece;
        self.grid.set_occupant(at, Some(undo.shift.piece));
        self.grid.release_last(undo.queen);
    }
}
