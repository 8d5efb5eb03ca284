//! Leaf-node counting over legal moves, for validating move generation
//! and the make/unmake pairing.

use super::{Color, Move, Position};

impl Position {
    /// Count the leaf positions reachable in `depth` plies with `to_move` starting.
    pub fn perft(&mut self, to_move: Color, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.legal_moves(to_move);
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut nodes = 0;
        for mv in moves {
            let info = self.make_move(mv);
            nodes += self.perft(to_move.opponent(), depth - 1);
            self.unmake_move(info);
        }
        nodes
    }

    /// Leaf counts per root move, sorted by origin then destination square.
    pub fn divide(&mut self, to_move: Color, depth: u32) -> Vec<(Move, u64)> {
        assert!(depth > 0, "divide needs at least one ply");
        let mut counts: Vec<_> = self
            .legal_moves(to_move)
            .into_iter()
            .map(|mv| {
                let info = self.make_move(mv);
                let nodes = self.perft(to_move.opponent(), depth - 1);
                self.unmake_move(info);
                (mv, nodes)
            })
            .collect();
        counts.sort_by_key(|(mv, _)| (mv.from, mv.to));
        counts
    }
}
