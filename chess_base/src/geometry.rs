//! Board geometry shared by move generation and move application
//!
//! All deltas and offset tables are `(delta_file, delta_rank)` pairs
//! meant to be used with [`Coord::try_shift`](crate::types::Coord::try_shift).

use crate::types::{Color, Rank};

/// Back rank of the given side, where its king and rooks start
pub const fn back_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R1,
        Color::Black => Rank::R8,
    }
}

/// Rank the given side's pawns start on, enabling the double step
pub const fn pawn_home_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R2,
        Color::Black => Rank::R7,
    }
}

/// Far rank where the given side's pawns promote
pub const fn promotion_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R8,
        Color::Black => Rank::R1,
    }
}

/// Rank-index delta of a forward pawn step
pub const fn pawn_forward_delta(c: Color) -> isize {
    match c {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// The eight knight jumps
pub const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (-1, -2),
    (1, -2),
    (-2, -1),
    (2, -1),
    (-2, 1),
    (2, 1),
    (-1, 2),
    (1, 2),
];

/// The eight king steps
pub const KING_DELTAS: [(isize, isize); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// Diagonal sweep directions (bishop)
pub const BISHOP_DIRS: [(isize, isize); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Orthogonal sweep directions (rook)
pub const ROOK_DIRS: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
