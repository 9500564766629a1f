//! Minimal two-player terminal chess using the legality engine.
//!
//! Moves are entered as source and destination squares, e.g. `e2e4`.
//! Promotion is always to a queen and draws are not scored; the loop
//! ends on checkmate or end of input.

use gridchess::{
    apply_move, is_checkmate, is_in_check, update_rights, valid_moves, Board, CastlingRights,
    Color, Coord, MoveRecord, PrettyStyle,
};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

fn parse_squares(s: &str) -> Option<(Coord, Coord)> {
    if s.len() != 4 {
        return None;
    }
    let src = Coord::from_str(&s[0..2]).ok()?;
    let dst = Coord::from_str(&s[2..4]).ok()?;
    Some((src, dst))
}

fn main() -> io::Result<()> {
    let mut board = Board::initial();
    let mut turn = Color::White;
    let mut rights = CastlingRights::FRESH;
    let mut last: Option<MoveRecord> = None;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!("{}", board.pretty(PrettyStyle::Ascii));
        if is_checkmate(&board, turn, last.as_ref(), rights) {
            println!("checkmate, {:?} wins", turn.inv());
            break;
        }
        if is_in_check(&board, turn) {
            println!("{:?} is in check", turn);
        }
        print!("{:?} move> ", turn);
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let (src, dst) = match parse_squares(line.trim()) {
            Some(pair) => pair,
            None => {
                println!("expected a move like e2e4");
                continue;
            }
        };
        match board.get(src) {
            Some(piece) if piece.color == turn => {}
            _ => {
                println!("no {:?} piece on {}", turn, src);
                continue;
            }
        }
        if !valid_moves(&board, src, last.as_ref(), rights).contains(&dst) {
            println!("illegal move {}{}", src, dst);
            continue;
        }

        let rec = apply_move(&mut board, src, dst).expect("validated move must apply");
        update_rights(&mut rights, &rec);
        last = Some(rec);
        turn = turn.inv();
    }
    Ok(())
}
