//! # Base types for gridchess
//!
//! This is an auxiliary crate for `gridchess`, which contains the core value
//! types (squares, pieces, castling flags) and board geometry constants.
//!
//! Normally you don't want to use this crate directly; use `gridchess` instead.

pub mod geometry;
pub mod types;

pub use types::{
    CastlingRights, CastlingSide, Color, Coord, File, Piece, PieceKind, Rank,
};
