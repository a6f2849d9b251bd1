//! Text coordinates: a column letter followed by a row number, `A1` being (0, 0).

use std::string::String;

use crate::cell::Coord;
use crate::config::BOARD_SIZE;

/// Last valid column letter.
fn last_column() -> char {
    (b'A' + BOARD_SIZE as u8 - 1) as char
}

/// Render `c` the way players type it.
pub fn coord_to_string(c: Coord) -> String {
    let col = (b'A' + c.x as u8) as char;
    format!("{}{}", col, c.y + 1)
}

/// Parse a single coordinate such as `b4`.
pub fn parse_coord(input: &str) -> Result<Coord, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!(
            "Invalid column '{}' - must be a letter A-{}",
            col_ch,
            last_column()
        ));
    }
    let x = (col_ch as u8 - b'A') as usize;
    if x >= BOARD_SIZE {
        return Err(format!(
            "Column '{}' out of bounds - must be A-{}",
            col_ch,
            last_column()
        ));
    }
    let row_str: String = chars.collect();
    if row_str.is_empty() {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, BOARD_SIZE))?;
    if row == 0 || row > BOARD_SIZE {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, BOARD_SIZE));
    }
    Ok(Coord::new(x, row - 1))
}

/// Parse ship endpoints: `A1 A3`, `A1-A3` or a lone `B5` for a single-cell ship.
pub fn parse_ship(input: &str) -> Result<(Coord, Option<Coord>), String> {
    let parts: Vec<&str> = input
        .split(|ch: char| ch.is_whitespace() || ch == '-')
        .filter(|part| !part.is_empty())
        .collect();
    match parts.as_slice() {
        [single] => Ok((parse_coord(single)?, None)),
        [begin, end] => Ok((parse_coord(begin)?, Some(parse_coord(end)?))),
        [] => Err("Empty input".to_string()),
        _ => Err("Enter one or two coordinates (e.g., A1 A3)".to_string()),
    }
}
