//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `attack_map.rs` - Protection flags and the pierce-through-king rule
//! - `movegen.rs` - Per-piece move and attack targets
//! - `castling.rs` - Castling eligibility and application
//! - `en_passant.rs` - En-passant eligibility, lapse and capture
//! - `promotion.rs` - Queen promotion and its undo
//! - `make_unmake.rs` - Apply/undo restores positions exactly
//! - `perft.rs` - Move-tree node counts
//! - `proptest.rs` - Property-based tests over random games

mod castling;
mod proptest;

use crate::board::{Bitboard, Color, Grid, Move, Position, Square};

pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("valid square name")
}

pub(super) fn position(placement: &str) -> Position {
    Position::new(Grid::from_fen(placement))
}

pub(super) fn find_move(position: &Position, color: Color, from: &str, to: &str) -> Move {
    let (from, to) = (sq(from), sq(to));
    position
        .pseudo_legal_moves(color)
        .into_iter()
        .find(|mv| mv.from == from && mv.to == to)
        .unwrap_or_else(|| panic!("expected move {from}{to} not found"))
}

/// Each flag must equal the union of the protected sets of that color's pieces.
pub(super) fn assert_attack_map_consistent(grid: &Grid) {
    for color in Color::BOTH {
        let mut covered = Bitboard::EMPTY;
        for piece in grid.pieces().filter(|p| p.color() == color) {
            covered |= piece.protected_set(grid);
        }
        for square in Square::all() {
            assert_eq!(
                grid.attacked_by(square, color),
                covered.contains(square),
                "{color} flag on {square}"
            );
        }
    }
}
