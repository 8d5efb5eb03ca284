//! Core chess types.
//!
//! - `PieceKind` and `Color` - chess piece types and colors
//! - `Square` - (rank, file) board coordinate
//! - `Bitboard` - 64-bit square set
//! - `Move` and `MoveKind` - move representation

mod bitboard;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use moves::{Move, MoveKind};
pub use piece::{Color, PieceKind};
pub use square::Square;
