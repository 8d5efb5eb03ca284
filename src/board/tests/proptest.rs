//! Property-based tests using proptest.

use super::assert_attack_map_consistent;
use crate::board::{Board, Color, Grid, Position, UnmakeInfo};
use proptest::prelude::*;
use rand::prelude::*;

/// Strategy to generate a random game length in plies
fn ply_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `plies` random legal moves from the initial position.
fn random_game(seed: u64, plies: usize) -> (Position, Vec<UnmakeInfo>, Color) {
    let mut position = Position::standard();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut history = Vec::new();
    let mut color = Color::White;
    for _ in 0..plies {
        let moves = position.legal_moves(color);
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        history.push(position.make_move(mv));
        color = color.opponent();
    }
    (position, history, color)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: unmaking every move in reverse restores the exact start
    #[test]
    fn prop_make_unmake_restores_state(seed in seed_strategy(), plies in ply_count_strategy()) {
        let (mut position, mut history, _) = random_game(seed, plies);
        while let Some(info) = history.pop() {
            position.unmake_move(info);
        }
        prop_assert!(position.identical(&Position::standard()));
    }

    /// Property: the attack map always matches the pieces' protected sets
    #[test]
    fn prop_attack_map_consistent(seed in seed_strategy(), plies in ply_count_strategy()) {
        let (position, _, _) = random_game(seed, plies);
        assert_attack_map_consistent(position.grid());
    }

    /// Property: no legal move leaves the mover's king in check
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy(), plies in 0..20usize) {
        let (mut position, _, color) = random_game(seed, plies);
        for mv in position.legal_moves(color) {
            let info = position.make_move(mv);
            prop_assert!(!position.in_check(color), "legal move left king in check: {:?}", mv);
            position.unmake_move(info);
        }
    }

    /// Property: registries hold exactly the pieces on the board
    #[test]
    fn prop_registries_match_board(seed in seed_strategy(), plies in ply_count_strategy()) {
        let (position, _, _) = random_game(seed, plies);
        let board = Board::from_grid(position.grid());
        for color in Color::BOTH {
            let mut registered = position.pieces(color).to_vec();
            let mut on_board = board.pieces(color).to_vec();
            registered.sort_by_key(|id| id.index());
            on_board.sort_by_key(|id| id.index());
            prop_assert_eq!(registered, on_board);
        }
    }

    /// Property: encoding and decoding preserves the position and its hash
    #[test]
    fn prop_encoding_round_trip(seed in seed_strategy(), plies in ply_count_strategy()) {
        let (position, _, _) = random_game(seed, plies);
        let text = position.grid().encode();
        let decoded = Grid::decode(&text).expect("encoded grid decodes");
        prop_assert_eq!(&decoded, position.grid());
        prop_assert_eq!(decoded.zobrist(), position.grid().zobrist());
        prop_assert_eq!(decoded.encode(), text);
    }
}
