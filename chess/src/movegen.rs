//! Move generation, attack probing and checkmate detection
//!
//! The central split here is between *pseudo-legal* generation
//! ([`pseudo_moves`]), which only applies movement geometry and
//! occupancy rules, and *legal* generation ([`valid_moves`]), which
//! additionally simulates every candidate on a scratch copy of the
//! board and discards the ones leaving the mover's own king in check.
//!
//! Attack probing ([`is_square_attacked`]) runs on the pseudo-legal
//! layer with king-safety checking disabled. It must never call back
//! into the legality filter: "is this king move safe" asks "is the
//! destination attacked", and letting the probe ask about king safety
//! again would recurse forever.

use crate::board::Board;
use crate::geometry;
use crate::moves::MoveRecord;
use crate::types::{CastlingRights, CastlingSide, Color, Coord, File, Piece, PieceKind};

use std::ops::{Deref, DerefMut};
use std::slice;

use arrayvec::ArrayVec;

/// List of destination squares for a single piece
///
/// A queen in the open tops out at 27 destinations and a castling king
/// at 10, so the list never spills. The order of entries follows
/// generation order (sweep direction order for sliding pieces, offset
/// table order for knights and kings) and is stable across calls.
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct MoveList(ArrayVec<Coord, 28>);

impl MoveList {
    pub fn new() -> MoveList {
        MoveList(ArrayVec::new())
    }
}

impl Deref for MoveList {
    type Target = ArrayVec<Coord, 28>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Coord;
    type IntoIter = slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a mut MoveList {
    type Item = &'a mut Coord;
    type IntoIter = slice::IterMut<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

fn push_step(b: &Board, color: Color, dst: Coord, out: &mut MoveList) {
    match b.get(dst) {
        Some(p) if p.color == color => {}
        _ => out.push(dst),
    }
}

fn gen_pawn(
    b: &Board,
    src: Coord,
    piece: Piece,
    last: Option<&MoveRecord>,
    out: &mut MoveList,
) {
    let forward = geometry::pawn_forward_delta(piece.color);

    // Single step, and the double step from the home rank when both
    // squares ahead are empty.
    if let Some(step) = src.try_shift(0, forward) {
        if b.get(step).is_none() {
            out.push(step);
            if src.rank() == geometry::pawn_home_rank(piece.color) {
                if let Some(double) = src.try_shift(0, 2 * forward) {
                    if b.get(double).is_none() {
                        out.push(double);
                    }
                }
            }
        }
    }

    // Diagonal captures.
    for delta_file in [-1, 1] {
        if let Some(dst) = src.try_shift(delta_file, forward) {
            if matches!(b.get(dst), Some(p) if p.color != piece.color) {
                out.push(dst);
            }
        }
    }

    // En passant: the last move was a double pawn step ending right
    // beside us on our rank. The captured pawn's removal is an
    // application-time effect, not generated here.
    if let Some(last) = last {
        if last.is_double_pawn_step()
            && last.dst.rank() == src.rank()
            && last.dst.file().index().abs_diff(src.file().index()) == 1
        {
            let delta_file = last.dst.file().index() as isize - src.file().index() as isize;
            if let Some(dst) = src.try_shift(delta_file, forward) {
                out.push(dst);
            }
        }
    }
}

fn gen_knight(b: &Board, src: Coord, color: Color, out: &mut MoveList) {
    for &(delta_file, delta_rank) in &geometry::KNIGHT_DELTAS {
        if let Some(dst) = src.try_shift(delta_file, delta_rank) {
            push_step(b, color, dst, out);
        }
    }
}

fn gen_rays(b: &Board, src: Coord, color: Color, dirs: &[(isize, isize)], out: &mut MoveList) {
    for &(delta_file, delta_rank) in dirs {
        let mut cur = src;
        while let Some(dst) = cur.try_shift(delta_file, delta_rank) {
            match b.get(dst) {
                None => {
                    out.push(dst);
                    cur = dst;
                }
                Some(p) => {
                    if p.color != color {
                        out.push(dst);
                    }
                    break;
                }
            }
        }
    }
}

fn gen_king_raw(b: &Board, src: Coord, color: Color, out: &mut MoveList) {
    for &(delta_file, delta_rank) in &geometry::KING_DELTAS {
        if let Some(dst) = src.try_shift(delta_file, delta_rank) {
            push_step(b, color, dst, out);
        }
    }
}

/// Destinations obeying movement geometry and occupancy only
///
/// This is the probe-mode entry point (king-safety checking disabled):
/// no legality filtering, no castling, and the king contributes its
/// eight raw neighbor squares. `last` only matters for pawns, whose
/// en-passant window it opens.
pub fn pseudo_moves(b: &Board, origin: Coord, last: Option<&MoveRecord>) -> MoveList {
    let mut out = MoveList::new();
    let piece = match b.get(origin) {
        Some(piece) => piece,
        None => return out,
    };
    match piece.kind {
        PieceKind::Pawn => gen_pawn(b, origin, piece, last, &mut out),
        PieceKind::Knight => gen_knight(b, origin, piece.color, &mut out),
        PieceKind::Bishop => gen_rays(b, origin, piece.color, &geometry::BISHOP_DIRS, &mut out),
        PieceKind::Rook => gen_rays(b, origin, piece.color, &geometry::ROOK_DIRS, &mut out),
        PieceKind::Queen => {
            gen_rays(b, origin, piece.color, &geometry::ROOK_DIRS, &mut out);
            gen_rays(b, origin, piece.color, &geometry::BISHOP_DIRS, &mut out);
        }
        PieceKind::King => gen_king_raw(b, origin, piece.color, &mut out),
    }
    out
}

/// Returns `true` if any piece of `by` attacks `target`
///
/// Probes run without en-passant context: an en-passant destination is
/// always an empty square, so it can never be an attacked king's
/// square.
pub fn is_square_attacked(b: &Board, target: Coord, by: Color) -> bool {
    Coord::iter().any(|src| {
        matches!(b.get(src), Some(p) if p.color == by)
            && pseudo_moves(b, src, None).contains(&target)
    })
}

/// Returns `true` if `side`'s king is attacked by the opposing side
///
/// A board with no king for `side` reports check (fail-safe, not
/// fail-silent).
pub fn is_in_check(b: &Board, side: Color) -> bool {
    match b.king_pos(side) {
        Some(king) => is_square_attacked(b, king, side.inv()),
        None => true,
    }
}

/// Relocates the piece on a scratch copy and verifies the mover's king
/// is not left in check
///
/// This is a legality probe, not a move applier: the en-passant pawn
/// removal and promotion are not modeled.
fn leaves_king_safe(b: &Board, src: Coord, dst: Coord, piece: Piece) -> bool {
    let mut copy = *b;
    copy.put(dst, Some(piece));
    copy.put(src, None);
    !is_in_check(&copy, piece.color)
}

fn gen_castling(b: &Board, src: Coord, color: Color, rights: CastlingRights, out: &mut MoveList) {
    let rank = geometry::back_rank(color);
    // Castling is only defined for a king on its original square.
    if src != Coord::from_parts(File::E, rank) {
        return;
    }
    for (side, between, transit, dst) in [
        (CastlingSide::King, &[File::F, File::G][..], File::F, File::G),
        (
            CastlingSide::Queen,
            &[File::B, File::C, File::D][..],
            File::D,
            File::C,
        ),
    ] {
        if !rights.can_castle(color, side) {
            continue;
        }
        if between.iter().any(|&file| b.get2(file, rank).is_some()) {
            continue;
        }
        // The king's current, transit and destination squares must all
        // be unattacked. Probed through the attack oracle, not the
        // check detector.
        let enemy = color.inv();
        if is_square_attacked(b, src, enemy)
            || is_square_attacked(b, Coord::from_parts(transit, rank), enemy)
            || is_square_attacked(b, Coord::from_parts(dst, rank), enemy)
        {
            continue;
        }
        out.push(Coord::from_parts(dst, rank));
    }
}

/// King moves are safety-filtered inline, square by square, so that the
/// castling destinations can be appended to an already-filtered set.
fn gen_king(b: &Board, src: Coord, piece: Piece, rights: CastlingRights, out: &mut MoveList) {
    for &(delta_file, delta_rank) in &geometry::KING_DELTAS {
        if let Some(dst) = src.try_shift(delta_file, delta_rank) {
            let blocked = matches!(b.get(dst), Some(p) if p.color == piece.color);
            if !blocked && leaves_king_safe(b, src, dst, piece) {
                out.push(dst);
            }
        }
    }
    gen_castling(b, src, piece.color, rights, out);
}

/// Returns the legal destinations for the piece at `origin`
///
/// An empty origin square yields an empty list. `last` is the most
/// recently applied move (for the en-passant window), `rights` the
/// caller-maintained castling flags.
pub fn valid_moves(
    b: &Board,
    origin: Coord,
    last: Option<&MoveRecord>,
    rights: CastlingRights,
) -> MoveList {
    let piece = match b.get(origin) {
        Some(piece) => piece,
        None => return MoveList::new(),
    };
    if piece.kind == PieceKind::King {
        let mut out = MoveList::new();
        gen_king(b, origin, piece, rights, &mut out);
        return out;
    }
    let mut out = pseudo_moves(b, origin, last);
    out.retain(|&mut dst| leaves_king_safe(b, origin, dst, piece));
    out
}

/// Returns `true` if `side` is checkmated: in check with no legal move
/// anywhere
///
/// Scans all 64 squares and generates the full legal move list of each
/// piece of `side`. That is fine at interactive speed on a fixed 8x8
/// board; this detector is not meant for deep search.
pub fn is_checkmate(
    b: &Board,
    side: Color,
    last: Option<&MoveRecord>,
    rights: CastlingRights,
) -> bool {
    if !is_in_check(b, side) {
        return false;
    }
    !Coord::iter().any(|src| {
        matches!(b.get(src), Some(p) if p.color == side)
            && !valid_moves(b, src, last, rights).is_empty()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rank;
    use std::str::FromStr;

    fn c(s: &str) -> Coord {
        Coord::from_str(s).unwrap()
    }

    fn names(moves: &MoveList) -> Vec<String> {
        moves.iter().map(ToString::to_string).collect()
    }

    fn mirrored(b: &Board) -> Board {
        let mut res = Board::empty();
        for coord in Coord::iter() {
            if let Some(p) = b.get(coord) {
                res.put(coord.flipped_rank(), Some(Piece::new(p.color.inv(), p.kind)));
            }
        }
        res
    }

    #[test]
    fn test_empty_origin() {
        let board = Board::initial();
        assert!(valid_moves(&board, c("e4"), None, CastlingRights::FRESH).is_empty());
        assert!(pseudo_moves(&board, c("e4"), None).is_empty());
    }

    #[test]
    fn test_idempotence() {
        let board = Board::from_placement("1rq1r1k1/1p3ppp/pB3n2/3ppP2/Pbb1P3/1PN2B2/2P2QPP/R1R4K")
            .unwrap();
        for origin in Coord::iter() {
            let first = valid_moves(&board, origin, None, CastlingRights::SPENT);
            let second = valid_moves(&board, origin, None, CastlingRights::SPENT);
            assert_eq!(first, second, "unstable result at {}", origin);
        }
    }

    #[test]
    fn test_pawn_steps() {
        let board = Board::initial();
        assert_eq!(
            names(&valid_moves(&board, c("e2"), None, CastlingRights::FRESH)),
            vec!["e3", "e4"]
        );

        // Off the home rank only the single step remains.
        let board = Board::from_placement("4k3/8/8/8/8/4P3/8/4K3").unwrap();
        assert_eq!(
            names(&valid_moves(&board, c("e3"), None, CastlingRights::SPENT)),
            vec!["e4"]
        );

        // A blocked double step, then a fully blocked pawn.
        let board = Board::from_placement("4k3/8/8/8/4p3/8/4P3/4K3").unwrap();
        assert_eq!(
            names(&valid_moves(&board, c("e2"), None, CastlingRights::SPENT)),
            vec!["e3"]
        );
        let board = Board::from_placement("4k3/8/8/8/8/4p3/4P3/4K3").unwrap();
        assert!(valid_moves(&board, c("e2"), None, CastlingRights::SPENT).is_empty());
    }

    #[test]
    fn test_pawn_captures() {
        let board = Board::from_placement("4k3/8/8/3p1p2/4P3/8/8/4K3").unwrap();
        assert_eq!(
            names(&valid_moves(&board, c("e4"), None, CastlingRights::SPENT)),
            vec!["e5", "d5", "f5"]
        );

        // Own pieces are not capture targets.
        let board = Board::from_placement("4k3/8/8/3P1p2/4P3/8/8/4K3").unwrap();
        assert_eq!(
            names(&valid_moves(&board, c("e4"), None, CastlingRights::SPENT)),
            vec!["e5", "f5"]
        );
    }

    #[test]
    fn test_en_passant_window() {
        let board = Board::from_placement("4k3/8/8/3pP3/8/8/8/4K3").unwrap();
        let double_step = MoveRecord {
            src: c("d7"),
            dst: c("d5"),
            piece: Piece::new(Color::Black, PieceKind::Pawn),
        };
        assert_eq!(
            names(&valid_moves(
                &board,
                c("e5"),
                Some(&double_step),
                CastlingRights::SPENT
            )),
            vec!["e6", "d6"]
        );

        // The window closes as soon as any other move is the last one.
        let other = MoveRecord {
            src: c("a7"),
            dst: c("a6"),
            piece: Piece::new(Color::Black, PieceKind::Pawn),
        };
        assert_eq!(
            names(&valid_moves(&board, c("e5"), Some(&other), CastlingRights::SPENT)),
            vec!["e6"]
        );
        assert_eq!(
            names(&valid_moves(&board, c("e5"), None, CastlingRights::SPENT)),
            vec!["e6"]
        );

        // A single-step arrival next to the pawn opens no window.
        let single_step = MoveRecord {
            src: c("d6"),
            dst: c("d5"),
            piece: Piece::new(Color::Black, PieceKind::Pawn),
        };
        assert_eq!(
            names(&valid_moves(
                &board,
                c("e5"),
                Some(&single_step),
                CastlingRights::SPENT
            )),
            vec!["e6"]
        );
    }

    #[test]
    fn test_knight() {
        let board = Board::initial();
        assert_eq!(
            names(&valid_moves(&board, c("b1"), None, CastlingRights::FRESH)),
            vec!["a3", "c3"]
        );

        let board = Board::from_placement("4k3/8/8/8/3N4/8/8/4K3").unwrap();
        assert_eq!(
            names(&valid_moves(&board, c("d4"), None, CastlingRights::SPENT)),
            vec!["c6", "e6", "b5", "f5", "b3", "f3", "c2", "e2"]
        );
    }

    #[test]
    fn test_rook_sweep() {
        let board = Board::from_placement("4k3/8/8/3b4/3R4/8/8/4K3").unwrap();
        assert_eq!(
            names(&valid_moves(&board, c("d4"), None, CastlingRights::SPENT)),
            vec!["d5", "d3", "d2", "d1", "c4", "b4", "a4", "e4", "f4", "g4", "h4"]
        );
    }

    #[test]
    fn test_queen_union() {
        let board = Board::from_placement("1k6/8/8/8/3Q4/8/8/7K").unwrap();
        let moves = valid_moves(&board, c("d4"), None, CastlingRights::SPENT);
        assert_eq!(moves.len(), 27);
        // Rook sweeps come first, bishop sweeps after.
        assert_eq!(moves[0], c("d5"));
        assert!(moves.contains(&c("a7")));
        assert!(moves.contains(&c("h8")));
    }

    #[test]
    fn test_king_avoids_attacked_squares() {
        let board = Board::from_placement("k3r3/8/8/8/8/8/8/4K3").unwrap();
        assert_eq!(
            names(&valid_moves(&board, c("e1"), None, CastlingRights::SPENT)),
            vec!["d1", "f1", "d2", "f2"]
        );
    }

    #[test]
    fn test_attack_oracle() {
        let board = Board::from_placement("4k3/8/8/8/8/8/3P4/4K3").unwrap();
        assert!(is_square_attacked(&board, c("c3"), Color::White));
        assert!(is_square_attacked(&board, c("e3"), Color::White));
        // The oracle reuses the full pseudo-legal set, so a pawn's
        // forward push counts too. Harmless for check detection: a
        // push needs an empty destination and a checked king square
        // never is.
        assert!(is_square_attacked(&board, c("d3"), Color::White));
        assert!(!is_square_attacked(&board, c("d5"), Color::White));
        // In probe mode a king attacks its eight neighbors.
        assert!(is_square_attacked(&board, c("d1"), Color::White));
        assert!(is_square_attacked(&board, c("f8"), Color::Black));
        assert!(!is_square_attacked(&board, c("e6"), Color::Black));
    }

    #[test]
    fn test_attack_oracle_mirror_symmetry() {
        let board =
            Board::from_placement("r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R").unwrap();
        let mirror = mirrored(&board);
        for target in Coord::iter() {
            for by in [Color::White, Color::Black] {
                assert_eq!(
                    is_square_attacked(&board, target, by),
                    is_square_attacked(&mirror, target.flipped_rank(), by.inv()),
                    "mirror mismatch at {} for {:?}",
                    target,
                    by
                );
            }
        }
    }

    #[test]
    fn test_check_detection() {
        let board = Board::from_placement("4k3/8/8/8/8/8/4r3/4K3").unwrap();
        assert!(is_in_check(&board, Color::White));
        assert!(!is_in_check(&board, Color::Black));

        // Fail-safe: a missing king counts as check.
        assert!(is_in_check(&Board::empty(), Color::White));
        assert!(is_in_check(&Board::empty(), Color::Black));
    }

    #[test]
    fn test_pinned_piece_has_no_moves() {
        // The d2 pawn is pinned against the king by the b4 bishop.
        let board = Board::from_placement("4k3/8/8/8/1b6/8/3P4/4K3").unwrap();
        assert!(valid_moves(&board, c("d2"), None, CastlingRights::SPENT).is_empty());
    }

    #[test]
    fn test_non_suicide() {
        let board = Board::from_placement("rnb1kbnr/ppp2ppp/3p4/4p2q/4P3/5P2/PPPP2PP/RNBQKBNR")
            .unwrap();
        for origin in Coord::iter() {
            let piece = match board.get(origin) {
                Some(piece) => piece,
                None => continue,
            };
            for &dst in &valid_moves(&board, origin, None, CastlingRights::SPENT) {
                let mut copy = board;
                copy.put(dst, Some(piece));
                copy.put(origin, None);
                assert!(
                    !is_in_check(&copy, piece.color),
                    "move {} -> {} leaves own king in check",
                    origin,
                    dst
                );
            }
        }
    }

    #[test]
    fn test_castling_gating() {
        let board = Board::from_placement("r3k2r/8/8/8/8/8/8/R3K2R").unwrap();

        let all = valid_moves(&board, c("e1"), None, CastlingRights::FRESH);
        assert!(all.contains(&c("g1")));
        assert!(all.contains(&c("c1")));
        let black = valid_moves(&board, c("e8"), None, CastlingRights::FRESH);
        assert!(black.contains(&c("g8")));
        assert!(black.contains(&c("c8")));

        // A moved kingside rook disables only that side.
        let mut rights = CastlingRights::FRESH;
        rights.mark_rook_moved(Color::White, CastlingSide::King);
        let moves = valid_moves(&board, c("e1"), None, rights);
        assert!(!moves.contains(&c("g1")));
        assert!(moves.contains(&c("c1")));

        // A moved king disables both.
        let mut rights = CastlingRights::FRESH;
        rights.mark_king_moved(Color::White);
        let moves = valid_moves(&board, c("e1"), None, rights);
        assert!(!moves.contains(&c("g1")));
        assert!(!moves.contains(&c("c1")));
    }

    #[test]
    fn test_castling_path_must_be_empty() {
        let board = Board::initial();
        let moves = valid_moves(&board, c("e1"), None, CastlingRights::FRESH);
        assert!(moves.is_empty());

        let board = Board::from_placement("r3k2r/8/8/8/8/8/8/RN2K2R").unwrap();
        let moves = valid_moves(&board, c("e1"), None, CastlingRights::FRESH);
        assert!(moves.contains(&c("g1")));
        assert!(!moves.contains(&c("c1")));
    }

    #[test]
    fn test_castling_path_must_be_safe() {
        // The f8 rook attacks f1, ruling out kingside castling only.
        let board = Board::from_placement("4kr2/8/8/8/8/8/8/R3K2R").unwrap();
        let moves = valid_moves(&board, c("e1"), None, CastlingRights::FRESH);
        assert!(!moves.contains(&c("g1")));
        assert!(moves.contains(&c("c1")));

        // A king in check cannot castle either way.
        let board = Board::from_placement("2k1r3/8/8/8/8/8/8/R3K2R").unwrap();
        let moves = valid_moves(&board, c("e1"), None, CastlingRights::FRESH);
        assert!(!moves.contains(&c("g1")));
        assert!(!moves.contains(&c("c1")));
    }

    #[test]
    fn test_castling_requires_home_square() {
        // Fresh flags but a displaced king generate no castling move.
        let board = Board::from_placement("r3k2r/8/8/8/8/8/8/R2K3R").unwrap();
        let moves = valid_moves(&board, c("d1"), None, CastlingRights::FRESH);
        assert!(!moves.contains(&c("g1")));
    }

    #[test]
    fn test_checkmate_two_rooks() {
        let board = Board::from_placement("R6k/1R6/8/8/8/8/8/K7").unwrap();
        assert!(is_checkmate(&board, Color::Black, None, CastlingRights::SPENT));
        assert!(!is_checkmate(&board, Color::White, None, CastlingRights::SPENT));

        // Removing one attacker opens an escape.
        let board = Board::from_placement("R6k/8/8/8/8/8/8/K7").unwrap();
        assert!(!is_checkmate(&board, Color::Black, None, CastlingRights::SPENT));
    }

    #[test]
    fn test_checkmate_scholars() {
        let board =
            Board::from_placement("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR")
                .unwrap();
        assert!(is_checkmate(&board, Color::Black, None, CastlingRights::FRESH));

        // Same position without the queen is not even check.
        let board =
            Board::from_placement("r1bqkb1r/pppp2pp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR").unwrap();
        assert!(!is_checkmate(&board, Color::Black, None, CastlingRights::FRESH));
    }

    #[test]
    fn test_check_but_not_mate() {
        // A back-rank check where interposing the rook on e8 is the
        // only defense: the king is boxed in by its own pawns.
        let board = Board::from_placement("R6k/6pp/8/8/4r3/8/8/K7").unwrap();
        assert!(is_in_check(&board, Color::Black));
        assert!(!is_checkmate(&board, Color::Black, None, CastlingRights::SPENT));
        assert!(valid_moves(&board, c("e4"), None, CastlingRights::SPENT).contains(&c("e8")));
        assert!(valid_moves(&board, c("h8"), None, CastlingRights::SPENT).is_empty());
    }

    #[test]
    fn test_initial_position_sanity() {
        let board = Board::initial();
        assert!(!is_in_check(&board, Color::White));
        assert!(!is_in_check(&board, Color::Black));
        assert!(!is_checkmate(&board, Color::White, None, CastlingRights::FRESH));

        // Only pawns and knights can move at all.
        for origin in Coord::iter() {
            let piece = match board.get(origin) {
                Some(piece) => piece,
                None => continue,
            };
            let moves = valid_moves(&board, origin, None, CastlingRights::FRESH);
            match piece.kind {
                PieceKind::Pawn => assert_eq!(moves.len(), 2),
                PieceKind::Knight => assert_eq!(moves.len(), 2),
                _ => assert!(moves.is_empty(), "unexpected moves at {}", origin),
            }
        }
    }

    #[test]
    fn test_containment() {
        // In-bounds containment is enforced by the Coord type itself;
        // verify that generation also stays inside the rank bounds for
        // edge pawns and knights.
        let board = Board::from_placement("n6k/8/8/8/8/8/8/N6K").unwrap();
        for origin in [c("a1"), c("a8"), c("h1"), c("h8")] {
            for &dst in &valid_moves(&board, origin, None, CastlingRights::SPENT) {
                assert!(dst.file().index() < 8 && dst.rank().index() < 8);
            }
        }
    }

    #[test]
    fn test_checkmate_on_kingless_board() {
        // Fail-safe composition: with no king of the queried side every
        // simulated move still "leaves" it in check, so a bare side is
        // reported mated rather than crashing.
        let board = Board::from_placement("4k3/8/8/8/8/8/8/8").unwrap();
        assert!(is_checkmate(&board, Color::White, None, CastlingRights::SPENT));
    }

    #[test]
    fn test_king_cannot_approach_king() {
        let board = Board::from_placement("8/8/8/3k4/8/3K4/8/8").unwrap();
        let moves = valid_moves(&board, c("d3"), None, CastlingRights::SPENT);
        for dst in [c("c4"), c("d4"), c("e4")] {
            assert!(!moves.contains(&dst), "king may not step to {}", dst);
        }
        assert!(moves.contains(&c("d2")));
        assert_eq!(
            board.get2(File::D, Rank::R3),
            Some(Piece::new(Color::White, PieceKind::King))
        );
    }
}
