//! Turns raw guess text into shots and reports the outcome to a [`Renderer`].

use alloc::string::{String, ToString};
use rand::Rng;

use crate::{
    common::ShotOutcome,
    config::GameConfig,
    error::GameError,
    game::{GameState, GameStatus, Turn},
    guess::parse_guess,
    render::Renderer,
};

pub const MSG_HIT: &str = "HIT!";
pub const MSG_MISS: &str = "MISS!";
pub const MSG_SUNK: &str = "You sank my battleship!";
pub const MSG_ALREADY_HIT: &str = "You already hit that!";
pub const MSG_ALREADY_MISS: &str = "You already shot there!";

/// Owns the game and runs one parse, resolve, render cycle per submitted guess.
#[derive(Debug, Clone)]
pub struct Controller {
    state: GameState,
}

impl Controller {
    /// Starts a game with a randomly laid out fleet.
    pub fn new<R: Rng>(rng: &mut R, config: GameConfig) -> Result<Self, GameError> {
        Ok(Self::from_state(GameState::new(rng, config)?))
    }

    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Handles one guess as typed by the player.
    ///
    /// Malformed text and guesses after the win are reported to `view` and
    /// returned as errors without touching the guess counter.
    pub fn submit<V>(&mut self, raw: &str, view: &mut V) -> Result<Turn, GameError>
    where
        V: Renderer + ?Sized,
    {
        let target = match parse_guess(raw, self.state.config().board_size) {
            Ok(target) => target,
            Err(err) => {
                log::debug!("rejected guess {:?}: {:?}", raw, err);
                view.show_message(&err.to_string());
                return Err(err.into());
            }
        };

        let turn = match self.state.shoot(target) {
            Ok(turn) => turn,
            Err(err) => {
                view.show_message(&err.to_string());
                return Err(err);
            }
        };
        if turn.outcome.is_repeat() {
            log::debug!("guess {} repeats {}", turn.guesses, turn.target);
        } else {
            log::debug!(
                "guess {} at {}: {:?}",
                turn.guesses,
                turn.target,
                turn.outcome
            );
        }

        match turn.outcome {
            ShotOutcome::Hit => {
                view.mark_hit(target);
                view.show_message(MSG_HIT);
            }
            ShotOutcome::Sunk { ship } => {
                view.mark_hit(target);
                view.show_message(MSG_HIT);
                view.show_message(MSG_SUNK);
                log::info!(
                    "ship {} sunk ({} of {})",
                    ship,
                    self.state.sunk(),
                    self.state.fleet().len()
                );
            }
            ShotOutcome::AlreadyHit => view.show_message(MSG_ALREADY_HIT),
            ShotOutcome::Miss => {
                view.mark_miss(target);
                view.show_message(MSG_MISS);
            }
            ShotOutcome::AlreadyMiss => view.show_message(MSG_ALREADY_MISS),
        }

        if let (true, GameStatus::Won { guesses }) = (turn.outcome.is_new_damage(), turn.status) {
            log::info!("all ships sunk in {} guesses", guesses);
            view.show_message(&win_message(guesses));
        }
        Ok(turn)
    }
}

/// Message shown once the last ship goes down.
pub fn win_message(guesses: u32) -> String {
    alloc::format!("You sank all ships in {} guesses!", guesses)
}
