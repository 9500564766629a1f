//! Move legality engine for 8x8 chess
//!
//! The crate answers three questions about a position: which squares a
//! given piece may legally move to, whether a side is in check, and
//! whether a side is checkmated. It deliberately stops there. Turn
//! order, game history, draw rules and move application side effects
//! (en passant removal, promotion, castling rook relocation) live in
//! the thin [`moves`] layer and in the caller.
//!
//! ```
//! use gridchess::{valid_moves, Board, CastlingRights, Coord};
//! use std::str::FromStr;
//!
//! let board = Board::initial();
//! let origin = Coord::from_str("g1").unwrap();
//! let moves = valid_moves(&board, origin, None, CastlingRights::FRESH);
//! let strs: Vec<_> = moves.iter().map(ToString::to_string).collect();
//! assert_eq!(strs, ["f3", "h3"]);
//! ```

pub use gridchess_base::{geometry, types};

pub mod board;
pub mod movegen;
pub mod moves;

pub use board::{Board, PrettyStyle};
pub use movegen::{is_checkmate, is_in_check, is_square_attacked, pseudo_moves, valid_moves, MoveList};
pub use moves::{apply_move, update_rights, ApplyError, MoveRecord};
pub use types::{CastlingRights, CastlingSide, Color, Coord, File, Piece, PieceKind, Rank};
