//! FEN piece-placement field support.
//!
//! Only the placement part of FEN is read or written; pieces come out with
//! a move count of 0 and no en-passant eligibility. Use `GridBuilder` to
//! adjust either.

use super::error::FenError;
use super::{Color, Grid, PieceKind, Square};

impl Grid {
    /// Parse a FEN piece-placement field such as
    /// `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.
    pub fn from_placement(placement: &str) -> Result<Grid, FenError> {
        let mut grid = Grid::empty();
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        for (rank_idx, rank_str) in ranks.into_iter().enumerate() {
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let kind = PieceKind::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if file >= 8 {
                    return Err(FenError::TooManyFiles {
                        rank: rank_idx,
                        files: file + 1,
                    });
                }
                grid.spawn(Square(7 - rank_idx, file), color, kind);
                file += 1;
            }
            if file > 8 {
                return Err(FenError::TooManyFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
            if file < 8 {
                return Err(FenError::TooFewFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        grid.refresh_protections();
        Ok(grid)
    }

    /// Parse a FEN placement field.
    ///
    /// # Panics
    /// Panics if the placement is invalid. Use `from_placement` for fallible parsing.
    #[must_use]
    pub fn from_fen(placement: &str) -> Grid {
        Self::from_placement(placement).expect("Invalid FEN placement")
    }

    /// The FEN piece-placement field for this grid.
    #[must_use]
    pub fn to_placement(&self) -> String {
        let mut out = String::new();
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                match self.occupant(Square(rank, file)) {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.kind().to_fen_char(piece.color()));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if rank > 0 {
                out.push('/');
            }
        }
        out
    }
}
