//! Castling eligibility and application tests.

use super::{assert_attack_map_consistent, find_move, position, sq};
use crate::board::{CastleTiles, Color, GridBuilder, MoveKind, PieceKind, Position};

const BOTH_SIDES: &str = "4k3/8/8/8/8/8/8/R3K2R";

fn castle_tiles(position: &Position, color: Color) -> CastleTiles {
    position
        .king(color)
        .expect("king on board")
        .castle_tiles(position.grid())
}

fn both_open() -> CastleTiles {
    CastleTiles {
        left: Some(sq("c1")),
        right: Some(sq("g1")),
    }
}

#[test]
fn test_both_sides_open() {
    let position = position(BOTH_SIDES);
    assert_eq!(castle_tiles(&position, Color::White), both_open());
    let castles: Vec<_> = position
        .pseudo_legal_moves(Color::White)
        .into_iter()
        .filter(|mv| mv.kind == MoveKind::Castle)
        .map(|mv| mv.to)
        .collect();
    assert_eq!(castles, vec![sq("c1"), sq("g1")]);
}

#[test]
fn test_black_castles_on_eighth_rank() {
    let position = position("r3k2r/8/8/8/8/8/8/4K3");
    assert_eq!(
        castle_tiles(&position, Color::Black),
        CastleTiles {
            left: Some(sq("c8")),
            right: Some(sq("g8")),
        }
    );
}

#[test]
fn test_moved_king_cannot_castle() {
    let position = GridBuilder::new()
        .piece(sq("e8"), Color::Black, PieceKind::King)
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("a1"), Color::White, PieceKind::Rook)
        .piece(sq("h1"), Color::White, PieceKind::Rook)
        .moved(sq("e1"), 2)
        .build_position();
    assert!(castle_tiles(&position, Color::White).is_empty());
}

#[test]
fn test_king_off_home_square_cannot_castle() {
    let position = position("4k3/8/8/8/8/8/8/R2K3R");
    assert!(castle_tiles(&position, Color::White).is_empty());
}

#[test]
fn test_king_in_check_cannot_castle() {
    let position = position("k7/8/8/4r3/8/8/8/R3K2R");
    assert!(position.in_check(Color::White));
    assert!(castle_tiles(&position, Color::White).is_empty());
}

#[test]
fn test_moved_rook_closes_its_side() {
    let position = GridBuilder::new()
        .piece(sq("e8"), Color::Black, PieceKind::King)
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("a1"), Color::White, PieceKind::Rook)
        .piece(sq("h1"), Color::White, PieceKind::Rook)
        .moved(sq("h1"), 2)
        .build_position();
    assert_eq!(
        castle_tiles(&position, Color::White),
        CastleTiles {
            left: Some(sq("c1")),
            right: None,
        }
    );
}

#[test]
fn test_corner_piece_must_be_allied_rook() {
    let enemy_rook = position("4k3/8/8/8/8/8/8/R3K2r");
    assert_eq!(castle_tiles(&enemy_rook, Color::White).right, None);

    let queen = position("4k3/8/8/8/8/8/8/R3K2Q");
    assert_eq!(castle_tiles(&queen, Color::White).right, None);

    let empty = position("4k3/8/8/8/8/8/8/4K2R");
    assert_eq!(castle_tiles(&empty, Color::White).left, None);
    assert_eq!(castle_tiles(&empty, Color::White).right, Some(sq("g1")));
}

#[test]
fn test_occupied_path_closes_side() {
    let knight_g1 = position("4k3/8/8/8/8/8/8/R3K1NR");
    assert_eq!(castle_tiles(&knight_g1, Color::White).right, None);
    assert_eq!(castle_tiles(&knight_g1, Color::White).left, Some(sq("c1")));

    // Every square between king and rook counts, b1 included.
    let knight_b1 = position("4k3/8/8/8/8/8/8/RN2K2R");
    assert_eq!(castle_tiles(&knight_b1, Color::White).left, None);
    assert_eq!(castle_tiles(&knight_b1, Color::White).right, Some(sq("g1")));
}

#[test]
fn test_covered_path_closes_side() {
    let f_file = position("4kr2/8/8/8/8/8/8/R3K2R");
    assert_eq!(
        castle_tiles(&f_file, Color::White),
        CastleTiles {
            left: Some(sq("c1")),
            right: None,
        }
    );

    let b_file = position("1r2k3/8/8/8/8/8/8/R3K2R");
    assert_eq!(
        castle_tiles(&b_file, Color::White),
        CastleTiles {
            left: None,
            right: Some(sq("g1")),
        }
    );
}

#[test]
fn test_apply_and_undo_castle_kingside() {
    let mut position = position(BOTH_SIDES);
    let before = position.clone();
    let undo = position.apply_castle(sq("e1"), sq("g1"));
    let grid = position.grid();
    let king = grid.occupant(sq("g1")).unwrap();
    let rook = grid.occupant(sq("f1")).unwrap();
    assert!(king.is_king());
    assert_eq!(rook.kind(), PieceKind::Rook);
    assert_eq!((king.move_count(), rook.move_count()), (1, 1));
    assert!(grid.is_empty(sq("e1")) && grid.is_empty(sq("h1")));
    assert_attack_map_consistent(grid);

    position.undo_castle(undo);
    assert!(position.identical(&before));
}

#[test]
fn test_make_castle_queenside() {
    let mut position = position(BOTH_SIDES);
    let before = position.clone();
    let mv = find_move(&position, Color::White, "e1", "c1");
    assert_eq!(mv.kind, MoveKind::Castle);
    let info = position.make_move(mv);
    assert!(position.grid().occupant(sq("c1")).unwrap().is_king());
    assert_eq!(
        position.grid().occupant(sq("d1")).unwrap().kind(),
        PieceKind::Rook
    );
    assert!(position.grid().is_empty(sq("a1")));
    assert!(castle_tiles(&position, Color::White).is_empty());
    position.unmake_move(info);
    assert!(position.identical(&before));
}

#[test]
#[should_panic(expected = "is not a castling move")]
fn test_apply_castle_rejects_plain_king_step() {
    let mut position = position(BOTH_SIDES);
    position.apply_castle(sq("e1"), sq("f1"));
}
