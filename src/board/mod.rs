//! Board representation and chess rules.
//!
//! A `Grid` of 64 tiles owns the pieces and the attack map; a `Position`
//! pairs it with per-color registries and applies and undoes moves in place
//! so a search can walk a game tree on one mutable board.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, Position};
//!
//! let mut position = Position::standard();
//! let moves = position.legal_moves(Color::White);
//! assert_eq!(moves.len(), 20);
//!
//! let info = position.make_move(moves[0]);
//! position.unmake_move(info);
//! ```

mod attack_tables;
mod builder;
mod encoding;
mod error;
mod fen;
mod grid;
mod make_unmake;
mod movegen;
mod perft;
mod piece;
pub mod prelude;
mod position;
mod registry;
mod tile;
mod types;

#[cfg(test)]
mod tests;

pub use builder::GridBuilder;
pub use encoding::PieceRecord;
pub use error::{DecodeError, FenError, SquareError};
pub use grid::Grid;
pub use make_unmake::{
    CaptureUndo, CapturePromotionUndo, CapturedPiece, CastleUndo, MoveUndo, PromotionUndo,
    UnmakeInfo,
};
pub use movegen::CastleTiles;
pub use piece::{Piece, PieceId};
pub use position::Position;
pub use registry::{Board, Registry};
pub use tile::Tile;
pub use types::{Bitboard, BitboardIter, Color, Move, MoveKind, PieceKind, Square};
