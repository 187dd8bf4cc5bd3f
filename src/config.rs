use crate::bitboard::BitBoard;
use crate::error::ConfigError;

pub const BOARD_SIZE: usize = 7;
pub const NUM_SHIPS: usize = 3;
pub const SHIP_LENGTH: usize = 3;
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 100;

/// Largest supported board. Guesses carry a single column digit.
pub const MAX_BOARD_SIZE: usize = 10;

/// Row letters in board order.
pub const ROW_LABELS: [u8; MAX_BOARD_SIZE] = *b"ABCDEFGHIJ";

/// Cell set able to hold any supported board.
pub type Grid = BitBoard<u128, MAX_BOARD_SIZE>;

/// Board and fleet dimensions for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub board_size: usize,
    pub num_ships: usize,
    pub ship_length: usize,
    /// Random placements tried per ship before giving up.
    pub max_placement_attempts: u32,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardSize {
                size: self.board_size,
            });
        }
        if self.num_ships == 0 {
            return Err(ConfigError::NoShips);
        }
        if self.ship_length == 0 {
            return Err(ConfigError::ZeroLength);
        }
        if self.max_placement_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            num_ships: NUM_SHIPS,
            ship_length: SHIP_LENGTH,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}
