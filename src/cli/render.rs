//! Console glyphs for boards.

use std::string::String;
use std::vec::Vec;

use crate::board::Board;
use crate::cell::{Coord, Mark};
use crate::config::BOARD_SIZE;

/// Glyph for `mark`. Hidden boards show unhit ship segments as water.
pub fn glyph(mark: Mark, hidden: bool) -> char {
    match mark {
        Mark::Empty => '·',
        Mark::Contour => '-',
        Mark::Ship if hidden => '·',
        Mark::Ship => '■',
        Mark::Burn => '✹',
        Mark::Killed => 'X',
        Mark::Miss => 'T',
    }
}

/// Board as text lines: a column header followed by one line per row.
pub fn board_lines(board: &Board) -> Vec<String> {
    let mut lines = Vec::with_capacity(BOARD_SIZE + 1);
    let mut header = String::from("  ");
    for x in 0..BOARD_SIZE {
        header.push(' ');
        header.push((b'A' + x as u8) as char);
    }
    lines.push(header);
    for y in 0..BOARD_SIZE {
        let mut line = format!("{:2}", y + 1);
        for x in 0..BOARD_SIZE {
            let mark = board.cell_at(Coord::new(x, y)).unwrap_or_default();
            line.push(' ');
            line.push(glyph(mark, board.is_hidden()));
        }
        lines.push(line);
    }
    lines
}

/// Single board with a title line.
pub fn render_board(title: &str, board: &Board) -> String {
    let mut out = format!("{}\n", title);
    for line in board_lines(board) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Two boards next to each other, titles above.
pub fn render_pair(left_title: &str, left: &Board, right_title: &str, right: &Board) -> String {
    const GAP: &str = "      ";
    let width = 2 + 2 * BOARD_SIZE;
    let mut out = format!("{:<width$}{}{}\n", left_title, GAP, right_title, width = width);
    for (l, r) in board_lines(left).iter().zip(board_lines(right).iter()) {
        out.push_str(&format!("{:<width$}{}{}\n", l, GAP, r, width = width));
    }
    out.push_str("Legend: ■ ship  ✹ hit  X sunk  T miss  - contour\n");
    out
}
