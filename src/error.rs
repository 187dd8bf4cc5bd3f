//! Error types for configuration, placement, guesses and play.

use thiserror::Error;

use crate::common::Coordinate;
use crate::config::MAX_BOARD_SIZE;

/// Errors returned by bitboard operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// Cell lies outside the `n`×`n` grid.
    #[error("cell {cell} lies outside the {n}x{n} grid")]
    OutOfBounds { cell: Coordinate, n: usize },
}

/// A rejected guess string. The display text is what the player sees.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    #[error("Please enter a letter + number like A3")]
    WrongLength { len: usize },
    #[error("That's off the board!")]
    RowOffBoard { row: char },
    #[error("That's off the board!")]
    ColumnOffBoard { col: char },
}

/// The fleet could not be laid out on the board.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    #[error("could not place ship {ship} after {attempts} attempts")]
    Exhausted { ship: usize, attempts: u32 },
    #[error("a ship of length {length} does not fit on a {board_size}x{board_size} board")]
    TooLong { length: usize, board_size: usize },
    #[error("expected {expected} ships, got {actual}")]
    FleetSize { expected: usize, actual: usize },
    #[error("ship {ship} has {actual} cells, expected {expected}")]
    ShipLength {
        ship: usize,
        expected: usize,
        actual: usize,
    },
    #[error("ship {ship} leaves the board at {cell}")]
    OutOfBounds { ship: usize, cell: Coordinate },
    #[error("ship {ship} overlaps another ship at {cell}")]
    Overlap { ship: usize, cell: Coordinate },
}

/// Invalid game parameters.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board size {size} is outside 1..={}", MAX_BOARD_SIZE)]
    BoardSize { size: usize },
    #[error("a game needs at least one ship")]
    NoShips,
    #[error("ships need a length of at least one cell")]
    ZeroLength,
    #[error("placement needs at least one attempt per ship")]
    NoAttempts,
}

/// Errors surfaced while setting up or playing a game.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    InvalidGuessFormat(#[from] GuessError),
    #[error(transparent)]
    Placement(#[from] PlacementError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0} is not on the board")]
    OffBoard(Coordinate),
    #[error("The game is over, all ships are already sunk")]
    GameOver,
}
