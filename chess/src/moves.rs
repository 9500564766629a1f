//! Move records and move application
//!
//! The move engine itself only answers queries; actually mutating a
//! board, the castling flags and the last-move record between queries
//! is the caller's job. This module implements that caller side:
//! [`apply_move`] performs a chosen move together with its
//! application-time effects (en-passant capture removal, promotion,
//! rook relocation on castling), and [`update_rights`] flips the
//! monotonic castling flags.

use crate::board::Board;
use crate::geometry;
use crate::types::{CastlingRights, CastlingSide, Coord, File, Piece, PieceKind};

use thiserror::Error;

/// The most recently applied move
///
/// Only the single last move is kept; pawn move generation inspects it
/// to detect an en-passant window.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MoveRecord {
    pub src: Coord,
    pub dst: Coord,
    pub piece: Piece,
}

impl MoveRecord {
    /// Returns `true` if this was a two-rank pawn advance
    pub fn is_double_pawn_step(&self) -> bool {
        self.piece.kind == PieceKind::Pawn
            && self.src.rank().index().abs_diff(self.dst.rank().index()) == 2
    }
}

/// Error applying a move to a board
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum ApplyError {
    #[error("no piece at {0}")]
    EmptySource(Coord),
}

/// Moves the piece at `src` to `dst`, with application-time effects
///
/// The move is not validated; pair this with
/// [`valid_moves`](crate::movegen::valid_moves) to only apply legal
/// destinations. Effects beyond the plain relocation:
///
/// - a pawn moving diagonally onto an empty square captures en passant,
///   removing the enemy pawn behind the destination;
/// - a pawn reaching the far rank promotes to a queen;
/// - a king moving two files is castling, relocating the matching rook
///   (G-file: H to F; C-file: A to D).
pub fn apply_move(board: &mut Board, src: Coord, dst: Coord) -> Result<MoveRecord, ApplyError> {
    let piece = board.get(src).ok_or(ApplyError::EmptySource(src))?;

    // En passant: the captured pawn sits beside the mover, on the
    // destination file and the source rank.
    if piece.kind == PieceKind::Pawn && src.file() != dst.file() && board.get(dst).is_none() {
        board.put(Coord::from_parts(dst.file(), src.rank()), None);
    }

    board.put(dst, Some(piece));
    board.put(src, None);

    if piece.kind == PieceKind::Pawn && dst.rank() == geometry::promotion_rank(piece.color) {
        board.put(dst, Some(Piece::new(piece.color, PieceKind::Queen)));
    }

    if piece.kind == PieceKind::King && src.file().index().abs_diff(dst.file().index()) == 2 {
        let rank = src.rank();
        let (rook_src, rook_dst) = match dst.file() {
            File::G => (File::H, File::F),
            _ => (File::A, File::D),
        };
        let rook = board.get2(rook_src, rank);
        board.put2(rook_dst, rank, rook);
        board.put2(rook_src, rank, None);
    }

    Ok(MoveRecord { src, dst, piece })
}

/// Flips the castling flags affected by an applied move
///
/// A king departure marks the king as moved; a rook departure from its
/// original file (A or H) marks that rook as moved. Flags are
/// monotonic, so re-marking is harmless.
pub fn update_rights(rights: &mut CastlingRights, rec: &MoveRecord) {
    let color = rec.piece.color;
    match rec.piece.kind {
        PieceKind::King => rights.mark_king_moved(color),
        PieceKind::Rook => match rec.src.file() {
            File::A => rights.mark_rook_moved(color, CastlingSide::Queen),
            File::H => rights.mark_rook_moved(color, CastlingSide::King),
            _ => {}
        },
        _ => {}
    }
}
