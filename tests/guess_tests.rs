use broadside::{parse_guess, Coordinate, GuessError, BOARD_SIZE};

#[test]
fn test_parses_letter_and_digit() {
    assert_eq!(parse_guess("A3", BOARD_SIZE), Ok(Coordinate::new(0, 3)));
    assert_eq!(parse_guess("G6", BOARD_SIZE), Ok(Coordinate::new(6, 6)));
    assert_eq!(parse_guess("d0", BOARD_SIZE), Ok(Coordinate::new(3, 0)));
}

#[test]
fn test_rejects_surrounding_whitespace() {
    assert_eq!(
        parse_guess(" A3 ", BOARD_SIZE),
        Err(GuessError::WrongLength { len: 4 })
    );
    assert_eq!(
        parse_guess("A3\n", BOARD_SIZE),
        Err(GuessError::WrongLength { len: 3 })
    );
    assert_eq!(
        parse_guess("A3\t", BOARD_SIZE),
        Err(GuessError::WrongLength { len: 3 })
    );
}

#[test]
fn test_rejects_wrong_length() {
    assert_eq!(
        parse_guess("A", BOARD_SIZE),
        Err(GuessError::WrongLength { len: 1 })
    );
    assert_eq!(
        parse_guess("", BOARD_SIZE),
        Err(GuessError::WrongLength { len: 0 })
    );
    assert_eq!(
        parse_guess("A10", BOARD_SIZE),
        Err(GuessError::WrongLength { len: 3 })
    );
}

#[test]
fn test_rejects_off_board_row() {
    assert_eq!(
        parse_guess("H1", BOARD_SIZE),
        Err(GuessError::RowOffBoard { row: 'H' })
    );
    assert_eq!(
        parse_guess("11", BOARD_SIZE),
        Err(GuessError::RowOffBoard { row: '1' })
    );
}

#[test]
fn test_rejects_off_board_column() {
    assert_eq!(
        parse_guess("A7", BOARD_SIZE),
        Err(GuessError::ColumnOffBoard { col: '7' })
    );
    assert_eq!(
        parse_guess("AB", BOARD_SIZE),
        Err(GuessError::ColumnOffBoard { col: 'B' })
    );
}

#[test]
fn test_board_size_bounds_letters() {
    assert_eq!(parse_guess("J9", 10), Ok(Coordinate::new(9, 9)));
    assert!(parse_guess("D0", 3).is_err());
}

#[test]
fn test_error_text_is_player_facing() {
    let err = parse_guess("A", BOARD_SIZE).unwrap_err();
    assert_eq!(err.to_string(), "Please enter a letter + number like A3");
    let err = parse_guess("Z1", BOARD_SIZE).unwrap_err();
    assert_eq!(err.to_string(), "That's off the board!");
}
