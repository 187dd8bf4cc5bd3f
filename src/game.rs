use rand::Rng;

use crate::{
    board::Board,
    common::{Coordinate, ShotOutcome},
    config::GameConfig,
    error::GameError,
    fleet::Fleet,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    /// Every ship sunk after `guesses` accepted guesses.
    Won { guesses: u32 },
}

/// One accepted guess and what it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn {
    pub target: Coordinate,
    pub outcome: ShotOutcome,
    /// Guess count including this one.
    pub guesses: u32,
    pub status: GameStatus,
}

/// State of a single game: the board being fired at and the guess counter.
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    guesses: u32,
}

impl GameState {
    /// Validates `config` and lays out a random fleet.
    pub fn new<R: Rng>(rng: &mut R, config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let fleet = Fleet::generate(rng, &config)?;
        Self::with_fleet(config, fleet)
    }

    /// Starts a game against a fleet that is already laid out.
    /// `config` is validated and every ship must fit its board.
    pub fn with_fleet(config: GameConfig, fleet: Fleet) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            board: Board::new(config.board_size, fleet)?,
            config,
            guesses: 0,
        })
    }

    /// Resolves the guess against the board and counts it.
    /// Rejected with `GameOver` once every ship is sunk; a rejected shot
    /// leaves the counter alone.
    pub fn shoot(&mut self, target: Coordinate) -> Result<Turn, GameError> {
        if self.board.all_sunk() {
            return Err(GameError::GameOver);
        }
        if !target.within(self.config.board_size) {
            return Err(GameError::OffBoard(target));
        }
        let outcome = self.board.fire(target)?;
        self.guesses += 1;
        Ok(Turn {
            target,
            outcome,
            guesses: self.guesses,
            status: self.status(),
        })
    }

    pub fn status(&self) -> GameStatus {
        if self.board.all_sunk() {
            GameStatus::Won {
                guesses: self.guesses,
            }
        } else {
            GameStatus::InProgress
        }
    }

    pub fn guesses(&self) -> u32 {
        self.guesses
    }

    pub fn sunk(&self) -> usize {
        self.board.sunk()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn fleet(&self) -> &Fleet {
        self.board.fleet()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
