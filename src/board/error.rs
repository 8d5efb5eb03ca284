//! Error types for decoding positions.

use std::fmt;

/// Error type for FEN piece-placement parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Placement must describe exactly 8 ranks
    WrongRankCount { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
    /// A rank describes fewer than 8 files
    TooFewFiles { rank: usize, files: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongRankCount { found } => {
                write!(f, "Placement must have 8 ranks, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::TooFewFiles { rank, files } => {
                write!(f, "Too few files ({files}) in rank {rank}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for positional-encoding failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Record has the wrong number of fields for its piece kind
    WrongFieldCount { expected: usize, found: usize },
    /// A numeric field did not parse
    InvalidInteger { field: &'static str, found: String },
    /// The en-passant field is not `true` or `false`
    InvalidBool { found: String },
    /// Unrecognized color tag
    UnknownColor { found: String },
    /// Unrecognized piece type tag
    UnknownPieceKind { found: String },
    /// Row or column outside 0-7
    Square(SquareError),
    /// Two records name the same square
    SquareOccupied { square: String },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::WrongFieldCount { expected, found } => {
                write!(f, "Expected {expected} fields, found {found}")
            }
            DecodeError::InvalidInteger { field, found } => {
                write!(f, "Invalid {field} '{found}'")
            }
            DecodeError::InvalidBool { found } => {
                write!(f, "Invalid en passant flag '{found}', expected 'true' or 'false'")
            }
            DecodeError::UnknownColor { found } => write!(f, "Unknown color '{found}'"),
            DecodeError::UnknownPieceKind { found } => {
                write!(f, "Unknown piece type '{found}'")
            }
            DecodeError::Square(err) => write!(f, "{err}"),
            DecodeError::SquareOccupied { square } => {
                write!(f, "Square {square} is listed twice")
            }
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Square(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SquareError> for DecodeError {
    fn from(err: SquareError) -> Self {
        DecodeError::Square(err)
    }
}
