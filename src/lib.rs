pub mod board;
pub mod cache;
mod zobrist;

pub use board::{Board, Color, Grid, Move, MoveKind, Piece, PieceId, PieceKind, Position, Square};
pub use cache::{PositionCache, SharedPositionCache};
