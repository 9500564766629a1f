//! Board and related things

use crate::types::{Color, Coord, File, Piece, PieceKind, Rank};

use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

/// Error parsing a board from a FEN piece-placement string
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum PlacementParseError {
    /// Rank is too large
    #[error("too many items in rank {0}")]
    RankOverflow(Rank),
    /// Rank is too small
    #[error("not enough items in rank {0}")]
    RankUnderflow(Rank),
    /// Too many ranks
    #[error("too many ranks")]
    Overflow,
    /// Not enough ranks
    #[error("not enough ranks")]
    Underflow,
    /// Unexpected character
    #[error("unexpected char {0:?}")]
    UnexpectedChar(char),
}

/// 8x8 mailbox chess board
///
/// Each cell holds at most one [`Piece`]. The board is a plain `Copy`
/// value: legality simulation works on throwaway copies, so the engine
/// never mutates a board handed to it by the caller.
///
/// Side to move, castling flags and the last played move are *not*
/// part of the board; the caller owns them and passes them to the move
/// queries explicitly.
///
/// # Example
///
/// ```
/// use gridchess::{Board, Color, Coord, File, Piece, PieceKind, Rank};
///
/// let board = Board::from_placement("8/8/8/3k4/8/8/1K6/8").unwrap();
/// assert_eq!(
///     board.get2(File::D, Rank::R5),
///     Some(Piece::new(Color::Black, PieceKind::King))
/// );
/// assert_eq!(board.as_placement(), "8/8/8/3k4/8/8/1K6/8");
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Returns a board without any pieces
    #[inline]
    pub const fn empty() -> Board {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Returns a board with the initial position
    pub fn initial() -> Board {
        let mut res = Board::empty();
        for file in File::iter() {
            res.put2(file, Rank::R2, Some(Piece::new(Color::White, PieceKind::Pawn)));
            res.put2(file, Rank::R7, Some(Piece::new(Color::Black, PieceKind::Pawn)));
        }
        for (color, rank) in [(Color::White, Rank::R1), (Color::Black, Rank::R8)] {
            res.put2(File::A, rank, Some(Piece::new(color, PieceKind::Rook)));
            res.put2(File::B, rank, Some(Piece::new(color, PieceKind::Knight)));
            res.put2(File::C, rank, Some(Piece::new(color, PieceKind::Bishop)));
            res.put2(File::D, rank, Some(Piece::new(color, PieceKind::Queen)));
            res.put2(File::E, rank, Some(Piece::new(color, PieceKind::King)));
            res.put2(File::F, rank, Some(Piece::new(color, PieceKind::Bishop)));
            res.put2(File::G, rank, Some(Piece::new(color, PieceKind::Knight)));
            res.put2(File::H, rank, Some(Piece::new(color, PieceKind::Rook)));
        }
        res
    }

    /// Parses a board from a FEN piece-placement string
    ///
    /// Does the same as [`Board::from_str`]. It is recommended to use this
    /// function instead of `from_str()` for better readability.
    #[inline]
    pub fn from_placement(s: &str) -> Result<Board, PlacementParseError> {
        Board::from_str(s)
    }

    /// Returns the contents of the square with coordinate `c`
    #[inline]
    pub fn get(&self, c: Coord) -> Option<Piece> {
        self.cells[c.rank().index()][c.file().index()]
    }

    /// Returns the contents of the square with file `file` and rank `rank`
    #[inline]
    pub fn get2(&self, file: File, rank: Rank) -> Option<Piece> {
        self.get(Coord::from_parts(file, rank))
    }

    /// Puts `piece` onto the square with coordinate `c`
    #[inline]
    pub fn put(&mut self, c: Coord, piece: Option<Piece>) {
        self.cells[c.rank().index()][c.file().index()] = piece;
    }

    /// Puts `piece` onto the square with file `file` and rank `rank`
    #[inline]
    pub fn put2(&mut self, file: File, rank: Rank, piece: Option<Piece>) {
        self.put(Coord::from_parts(file, rank), piece);
    }

    /// Returns the position of the king of color `c`, scanning the whole
    /// board
    ///
    /// A well-formed position has exactly one king per side, but the board
    /// does not enforce this; with no king present the function returns
    /// `None`, which check detection treats as "in check".
    pub fn king_pos(&self, c: Color) -> Option<Coord> {
        Coord::iter().find(|&coord| self.get(coord) == Some(Piece::new(c, PieceKind::King)))
    }

    /// Wraps the board to allow pretty-printing with the given style
    ///
    /// The resulting wrapper implements [`fmt::Display`], so can be used
    /// with `write!()`, `println!()`, or `ToString::to_string`.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridchess::board::PrettyStyle;
    /// # use gridchess::Board;
    /// #
    /// let b = Board::initial();
    ///
    /// let res = r#"
    /// 8|rnbqkbnr
    /// 7|pppppppp
    /// 6|........
    /// 5|........
    /// 4|........
    /// 3|........
    /// 2|PPPPPPPP
    /// 1|RNBQKBNR
    /// -+--------
    ///  |abcdefgh
    /// "#;
    /// assert_eq!(b.pretty(PrettyStyle::Ascii).to_string().trim(), res.trim());
    /// ```
    #[inline]
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        Pretty { board: self, style }
    }

    /// Converts the board into a FEN piece-placement string
    ///
    /// Does the same as `Board::to_string()`. It is recommended to use this
    /// function instead of `to_string()` for better readability.
    #[inline]
    pub fn as_placement(&self) -> String {
        self.to_string()
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Board {
        Board::empty()
    }
}

/// Style for [`Board::pretty()`]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PrettyStyle {
    /// Print pieces and frames as ASCII characters
    Ascii,
    /// Print pieces and frames as fancy Unicode characters
    Utf8,
}

/// Wrapper to pretty-print the board
///
/// See docs for [`Board::pretty()`] for more details.
pub struct Pretty<'a> {
    board: &'a Board,
    style: PrettyStyle,
}

impl FromStr for Board {
    type Err = PlacementParseError;

    fn from_str(s: &str) -> Result<Board, Self::Err> {
        type Error = PlacementParseError;

        let mut res = Board::empty();
        let mut file = 0_usize;
        let mut rank = 0_usize;
        for b in s.bytes() {
            match b {
                b'1'..=b'8' => {
                    let add = (b - b'0') as usize;
                    if file + add > 8 {
                        return Err(Error::RankOverflow(Rank::from_index(rank)));
                    }
                    file += add;
                }
                b'/' => {
                    if file < 8 {
                        return Err(Error::RankUnderflow(Rank::from_index(rank)));
                    }
                    rank += 1;
                    file = 0;
                    if rank >= 8 {
                        return Err(Error::Overflow);
                    }
                }
                _ => {
                    if file >= 8 {
                        return Err(Error::RankOverflow(Rank::from_index(rank)));
                    }
                    let piece =
                        Piece::from_char(b as char).ok_or(Error::UnexpectedChar(b as char))?;
                    res.put2(File::from_index(file), Rank::from_index(rank), Some(piece));
                    file += 1;
                }
            }
        }

        if file < 8 {
            return Err(Error::RankUnderflow(Rank::from_index(rank)));
        }
        if rank < 7 {
            return Err(Error::Underflow);
        }

        Ok(res)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for rank in Rank::iter() {
            if rank.index() != 0 {
                write!(f, "/")?;
            }
            let mut empty = 0;
            for file in File::iter() {
                match self.get2(file, rank) {
                    None => empty += 1,
                    Some(piece) => {
                        if empty != 0 {
                            write!(f, "{}", (b'0' + empty) as char)?;
                            empty = 0;
                        }
                        write!(f, "{}", piece)?;
                    }
                }
            }
            if empty != 0 {
                write!(f, "{}", (b'0' + empty) as char)?;
            }
        }
        Ok(())
    }
}

trait StyleTable {
    const HORZ_FRAME: char;
    const VERT_FRAME: char;
    const ANGLE_FRAME: char;
    const EMPTY_CELL: char;

    fn cell(p: Piece) -> char;

    fn fmt(b: &Board, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for rank in Rank::iter() {
            write!(f, "{}{}", rank, Self::VERT_FRAME)?;
            for file in File::iter() {
                match b.get2(file, rank) {
                    Some(piece) => write!(f, "{}", Self::cell(piece))?,
                    None => write!(f, "{}", Self::EMPTY_CELL)?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "{}{}", Self::HORZ_FRAME, Self::ANGLE_FRAME)?;
        for _ in File::iter() {
            write!(f, "{}", Self::HORZ_FRAME)?;
        }
        writeln!(f)?;
        write!(f, " {}", Self::VERT_FRAME)?;
        for file in File::iter() {
            write!(f, "{}", file)?;
        }
        writeln!(f)?;
        Ok(())
    }
}

struct AsciiStyleTable;
struct Utf8StyleTable;

impl StyleTable for AsciiStyleTable {
    const HORZ_FRAME: char = '-';
    const VERT_FRAME: char = '|';
    const ANGLE_FRAME: char = '+';
    const EMPTY_CELL: char = '.';

    fn cell(p: Piece) -> char {
        p.as_char()
    }
}

impl StyleTable for Utf8StyleTable {
    const HORZ_FRAME: char = '─';
    const VERT_FRAME: char = '│';
    const ANGLE_FRAME: char = '┼';
    const EMPTY_CELL: char = '.';

    fn cell(p: Piece) -> char {
        p.as_utf8_char()
    }
}

impl<'a> Display for Pretty<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.style {
            PrettyStyle::Ascii => AsciiStyleTable::fmt(self.board, f),
            PrettyStyle::Utf8 => Utf8StyleTable::fmt(self.board, f),
        }
    }
}
