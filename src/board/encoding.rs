//! Plain-text positional encoding.
//!
//! A piece is one line of space-separated fields:
//! `row column move_count color kind [en_passant]`, where the en-passant
//! flag is present for pawns only. A grid is one such line per occupied
//! tile, in row-major order.

use std::fmt;
use std::str::FromStr;

use super::error::DecodeError;
use super::{Color, Grid, Piece, PieceId, PieceKind, Square};

/// Decoded form of one piece, not yet placed on any grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PieceRecord {
    pub square: Square,
    pub move_count: u32,
    pub color: Color,
    pub kind: PieceKind,
    pub en_passant: bool,
}

impl From<&Piece> for PieceRecord {
    fn from(piece: &Piece) -> Self {
        PieceRecord {
            square: piece.square(),
            move_count: piece.move_count(),
            color: piece.color(),
            kind: piece.kind(),
            en_passant: piece.en_passant(),
        }
    }
}

impl fmt::Display for PieceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.square.rank(),
            self.square.file(),
            self.move_count,
            self.color.tag(),
            self.kind.tag()
        )?;
        if self.kind == PieceKind::Pawn {
            write!(f, " {}", self.en_passant)?;
        }
        Ok(())
    }
}

fn parse_field<T: FromStr>(field: &'static str, found: &str) -> Result<T, DecodeError> {
    found.parse().map_err(|_| DecodeError::InvalidInteger {
        field,
        found: found.to_string(),
    })
}

impl FromStr for PieceRecord {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() != 5 && fields.len() != 6 {
            return Err(DecodeError::WrongFieldCount {
                expected: 5,
                found: fields.len(),
            });
        }

        let kind = PieceKind::from_tag(fields[4]).ok_or_else(|| DecodeError::UnknownPieceKind {
            found: fields[4].to_string(),
        })?;
        let expected = if kind == PieceKind::Pawn { 6 } else { 5 };
        if fields.len() != expected {
            return Err(DecodeError::WrongFieldCount {
                expected,
                found: fields.len(),
            });
        }

        let rank: usize = parse_field("row", fields[0])?;
        let file: usize = parse_field("column", fields[1])?;
        let square = Square::try_from((rank, file))?;
        let move_count = parse_field("move count", fields[2])?;
        let color = Color::from_tag(fields[3]).ok_or_else(|| DecodeError::UnknownColor {
            found: fields[3].to_string(),
        })?;
        let en_passant = match fields.get(5) {
            None => false,
            Some(&"true") => true,
            Some(&"false") => false,
            Some(other) => {
                return Err(DecodeError::InvalidBool {
                    found: other.to_string(),
                })
            }
        };

        Ok(PieceRecord {
            square,
            move_count,
            color,
            kind,
            en_passant,
        })
    }
}

impl Piece {
    /// This piece in the positional encoding.
    #[must_use]
    pub fn encode(&self) -> String {
        PieceRecord::from(self).to_string()
    }
}

impl Grid {
    /// Place a decoded piece. Fails if its square is already taken.
    pub fn place(&mut self, record: PieceRecord) -> Result<PieceId, DecodeError> {
        if !self.is_empty(record.square) {
            return Err(DecodeError::SquareOccupied {
                square: record.square.to_string(),
            });
        }
        let id = self.spawn(record.square, record.color, record.kind);
        let piece = self.piece_mut(id);
        piece.move_count = record.move_count;
        piece.en_passant = record.en_passant;
        Ok(id)
    }

    /// One record per occupied tile, row-major, newline separated.
    #[must_use]
    pub fn encode(&self) -> String {
        self.pieces()
            .map(|piece| format!("{}\n", piece.encode()))
            .collect()
    }

    /// Rebuild a grid from `encode` output. Blank lines are skipped; the
    /// attack map is recomputed.
    pub fn decode(text: &str) -> Result<Grid, DecodeError> {
        let mut grid = Grid::empty();
        for line in text.lines().filter(|line| !line.trim().is_empty()) {
            let record = line.parse::<PieceRecord>().map_err(|err| {
                #[cfg(feature = "logging")]
                log::debug!("rejecting piece record {line:?}: {err}");
                err
            })?;
            grid.place(record)?;
        }
        grid.refresh_protections();
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pawn_record_has_six_fields() {
        let grid = Grid::standard();
        let pawn = grid.occupant(Square(1, 3)).unwrap();
        assert_eq!(pawn.encode(), "1 3 0 white pawn false");
        let rook = grid.occupant(Square(7, 7)).unwrap();
        assert_eq!(rook.encode(), "7 7 0 black rook");
    }

    #[test]
    fn test_decode_piece_record() {
        let record: PieceRecord = "4 2 3 black pawn true".parse().unwrap();
        assert_eq!(record.square, Square(4, 2));
        assert_eq!(record.move_count, 3);
        assert_eq!(record.color, Color::Black);
        assert_eq!(record.kind, PieceKind::Pawn);
        assert!(record.en_passant);
    }

    #[test]
    fn test_decode_rejects_wrong_field_count() {
        assert_eq!(
            "1 1 0 white pawn".parse::<PieceRecord>(),
            Err(DecodeError::WrongFieldCount {
                expected: 6,
                found: 5
            })
        );
        assert_eq!(
            "1 1 0 white knight false".parse::<PieceRecord>(),
            Err(DecodeError::WrongFieldCount {
                expected: 5,
                found: 6
            })
        );
        assert!(matches!(
            "1 1".parse::<PieceRecord>(),
            Err(DecodeError::WrongFieldCount { found: 2, .. })
        ));
    }

    #[test]
    fn test_decode_rejects_bad_fields() {
        assert!(matches!(
            "x 1 0 white rook".parse::<PieceRecord>(),
            Err(DecodeError::InvalidInteger { field: "row", .. })
        ));
        assert!(matches!(
            "1 1 -2 white rook".parse::<PieceRecord>(),
            Err(DecodeError::InvalidInteger { field: "move count", .. })
        ));
        assert!(matches!(
            "1 1 0 white pawn maybe".parse::<PieceRecord>(),
            Err(DecodeError::InvalidBool { .. })
        ));
        assert!(matches!(
            "1 1 0 green rook".parse::<PieceRecord>(),
            Err(DecodeError::UnknownColor { .. })
        ));
        assert!(matches!(
            "1 1 0 white wizard".parse::<PieceRecord>(),
            Err(DecodeError::UnknownPieceKind { .. })
        ));
        assert!(matches!(
            "9 1 0 white rook".parse::<PieceRecord>(),
            Err(DecodeError::Square(_))
        ));
    }

    #[test]
    fn test_grid_encoding_survives_decode() {
        let grid = Grid::standard();
        let decoded = Grid::decode(&grid.encode()).unwrap();
        assert_eq!(decoded, grid);
    }

    #[test]
    fn test_grid_decode_rejects_duplicate_square() {
        let text = "0 4 0 white king\n0 4 0 black king\n";
        assert_eq!(
            Grid::decode(text),
            Err(DecodeError::SquareOccupied {
                square: "e1".to_string()
            })
        );
    }
}
