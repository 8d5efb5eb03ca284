//! The 8x8 grid of tiles and the attack map over it.
//!
//! The grid owns every piece in an arena indexed by `PieceId`; tiles and
//! registries refer to pieces by id. Captured pieces stay in the arena (off
//! the board) so an undo can put them back with their identity intact.

use std::hash::{Hash, Hasher};

use super::{Bitboard, Color, Piece, PieceId, PieceKind, Square, Tile};
use crate::zobrist::ZOBRIST;

pub(crate) const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Clone, Debug)]
pub struct Grid {
    tiles: Vec<Tile>,
    pieces: Vec<Piece>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Grid {
    /// A grid with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Grid {
            tiles: Square::all().map(Tile::new).collect(),
            pieces: Vec::new(),
        }
    }

    /// The standard starting position, attack map included.
    #[must_use]
    pub fn standard() -> Self {
        let mut grid = Grid::empty();
        for (file, kind) in BACK_RANK.into_iter().enumerate() {
            grid.spawn(Square(0, file), Color::White, kind);
            grid.spawn(Square(1, file), Color::White, PieceKind::Pawn);
        }
        for (file, kind) in BACK_RANK.into_iter().enumerate() {
            grid.spawn(Square(6, file), Color::Black, PieceKind::Pawn);
            grid.spawn(Square(7, file), Color::Black, kind);
        }
        grid.refresh_protections();
        grid
    }

    /// Independent deep copy of this position.
    ///
    /// Equivalent to `clone`; spelled out for call sites that take cache keys
    /// or fork a worker's board.
    #[must_use]
    pub fn snapshot(&self) -> Grid {
        self.clone()
    }

    /// # Panics
    /// Panics if `sq` lies off the board.
    #[inline]
    #[must_use]
    pub fn tile(&self, sq: Square) -> &Tile {
        &self.tiles[sq.index()]
    }

    /// # Panics
    /// Panics if `row` or `column` is outside 0-7.
    #[must_use]
    pub fn tile_at(&self, row: usize, column: usize) -> &Tile {
        self.tile(Square(row, column))
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// # Panics
    /// Panics if `id` was not allocated by this grid.
    #[inline]
    #[must_use]
    pub fn piece(&self, id: PieceId) -> &Piece {
        self.pieces
            .get(id.index())
            .unwrap_or_else(|| panic!("piece {id:?} does not belong to this grid"))
    }

    #[inline]
    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        self.pieces
            .get_mut(id.index())
            .unwrap_or_else(|| panic!("piece {id:?} does not belong to this grid"))
    }

    /// The piece standing on `sq`, if any.
    #[inline]
    #[must_use]
    pub fn occupant(&self, sq: Square) -> Option<&Piece> {
        self.tile(sq).occupant.map(|id| self.piece(id))
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.tile(sq).is_empty()
    }

    #[inline]
    #[must_use]
    pub fn attacked_by(&self, sq: Square, color: Color) -> bool {
        self.tile(sq).attacked_by(color)
    }

    /// Pieces currently on the board, in row-major tile order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.tiles
            .iter()
            .filter_map(|tile| tile.occupant.map(|id| self.piece(id)))
    }

    /// Create a piece in the arena without placing it.
    pub(crate) fn allocate(&mut self, square: Square, color: Color, kind: PieceKind) -> PieceId {
        let id = PieceId(self.pieces.len() as u32);
        self.pieces.push(Piece::new(id, square, color, kind));
        id
    }

    /// Create a piece and put it on `square`.
    ///
    /// # Panics
    /// Panics if `square` is already occupied.
    pub(crate) fn spawn(&mut self, square: Square, color: Color, kind: PieceKind) -> PieceId {
        assert!(self.is_empty(square), "cannot spawn onto occupied square {square}");
        let id = self.allocate(square, color, kind);
        self.set_occupant(square, Some(id));
        id
    }

    /// Drop the most recently allocated piece.
    ///
    /// # Panics
    /// Panics unless `id` is the last arena entry and is no longer on the board.
    pub(crate) fn release_last(&mut self, id: PieceId) {
        assert_eq!(
            id.index() + 1,
            self.pieces.len(),
            "only the newest piece can be released"
        );
        let sq = self.pieces[id.index()].square;
        assert_ne!(
            self.tile(sq).occupant,
            Some(id),
            "released piece still stands on {sq}"
        );
        self.pieces.pop();
    }

    /// The single occupancy write path: sets the tile's occupant and, when a
    /// piece is placed, retargets that piece's own square.
    pub(crate) fn set_occupant(&mut self, sq: Square, occupant: Option<PieceId>) {
        self.tiles[sq.index()].occupant = occupant;
        if let Some(id) = occupant {
            self.piece_mut(id).square = sq;
        }
    }

    /// Rebuild both attack-map flags from scratch for the given registries.
    pub fn recompute_protections(&mut self, white: &[PieceId], black: &[PieceId]) {
        for tile in &mut self.tiles {
            tile.clear_marks();
        }
        for &id in white.iter().chain(black) {
            let piece = *self.piece(id);
            piece.mark_protected(self);
        }
    }

    /// Recompute the attack map using every piece currently on the board.
    pub(crate) fn refresh_protections(&mut self) {
        let on_board: Vec<PieceId> = self.tiles.iter().filter_map(|t| t.occupant).collect();
        self.recompute_protections(&on_board, &[]);
    }

    pub(crate) fn mark(&mut self, color: Color, squares: Bitboard) {
        for sq in squares.iter() {
            self.tiles[sq.index()].mark(color);
        }
    }

    /// Zobrist key over piece placement and en-passant eligibility.
    #[must_use]
    pub fn zobrist(&self) -> u64 {
        self.pieces().fold(0, |key, piece| {
            let sq = piece.square.index();
            let mut key = key ^ ZOBRIST.piece_keys[piece.kind.index()][piece.color.index()][sq];
            if piece.en_passant {
                key ^= ZOBRIST.en_passant_keys[sq];
            }
            key
        })
    }

    /// Exact equality, piece identities and the arena included.
    #[must_use]
    pub(crate) fn identical(&self, other: &Grid) -> bool {
        self.tiles == other.tiles && self.pieces == other.pieces
    }

    fn tile_signature(&self, tile: &Tile) -> (Option<(PieceKind, Color, u32, bool)>, bool, bool) {
        let occupant = tile.occupant.map(|id| {
            let p = self.piece(id);
            (p.kind, p.color, p.move_count, p.en_passant)
        });
        (occupant, tile.attacked_by_white, tile.attacked_by_black)
    }
}

/// Structural equality: occupant kind, color, move count and en-passant flag
/// plus both attack flags, tile by tile. Piece ids are ignored.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.tiles
            .iter()
            .zip(&other.tiles)
            .all(|(a, b)| self.tile_signature(a) == other.tile_signature(b))
    }
}

impl Eq for Grid {}

impl Hash for Grid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.zobrist());
    }
}
