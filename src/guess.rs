//! Parsing of typed guesses such as `"A3"`.

use crate::common::Coordinate;
use crate::config::ROW_LABELS;
use crate::error::GuessError;

/// Converts a guess into a coordinate on a `board_size`×`board_size` board.
///
/// The guess is a row letter (case-insensitive, `A` is row 0) followed by a
/// single column digit, with nothing before or after.
pub fn parse_guess(input: &str, board_size: usize) -> Result<Coordinate, GuessError> {
    let mut chars = input.chars();
    let (row_ch, col_ch) = match (chars.next(), chars.next(), chars.next()) {
        (Some(r), Some(c), None) => (r, c),
        _ => {
            return Err(GuessError::WrongLength {
                len: input.chars().count(),
            })
        }
    };

    let labels = &ROW_LABELS[..board_size.min(ROW_LABELS.len())];
    let row = labels
        .iter()
        .position(|&l| l as char == row_ch.to_ascii_uppercase())
        .ok_or(GuessError::RowOffBoard { row: row_ch })?;

    let col = col_ch
        .to_digit(10)
        .map(|d| d as usize)
        .filter(|&d| d < board_size)
        .ok_or(GuessError::ColumnOffBoard { col: col_ch })?;

    Ok(Coordinate::new(row as u8, col as u8))
}
