//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let position = Position::new(Grid::standard());
//! assert!(!position.in_check(Color::White));
//! ```

pub use super::{
    Board, Color, Grid, GridBuilder, Move, MoveKind, Piece, PieceId, PieceKind, Position, Square,
    UnmakeInfo,
};
pub use crate::cache::PositionCache;
