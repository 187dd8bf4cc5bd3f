//! Board state: the fleet, the miss set and shot resolution.

use crate::common::{Coordinate, ShotOutcome};
use crate::config::{Grid, MAX_BOARD_SIZE};
use crate::error::{ConfigError, GameError, PlacementError};
use crate::fleet::Fleet;

/// Everything the opponent fired at, plus the ships being fired at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    fleet: Fleet,
    misses: Grid,
    sunk: usize,
}

impl Board {
    /// Wraps a laid-out fleet on a `size`×`size` board.
    ///
    /// Fails when `size` is outside `1..=MAX_BOARD_SIZE` or a ship cell lies
    /// off the board.
    pub fn new(size: usize, fleet: Fleet) -> Result<Self, GameError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardSize { size }.into());
        }
        if let Some(cell) = fleet.occupied().cells().find(|c| !c.within(size)) {
            let ship = fleet.ship_at(cell).unwrap_or_default();
            return Err(PlacementError::OutOfBounds { ship, cell }.into());
        }

        let sunk = fleet.sunk_count();
        Ok(Board {
            size,
            fleet,
            misses: Grid::new(),
            sunk,
        })
    }

    /// Resolves a shot at `target`.
    ///
    /// Ship cells are checked first: a fresh hit sets the segment's flag and
    /// reports `Sunk` when it was the last one, a repeat reports `AlreadyHit`.
    /// Otherwise the cell joins the miss set, or reports `AlreadyMiss` if it
    /// was there already. Ship locations never change.
    pub fn fire(&mut self, target: Coordinate) -> Result<ShotOutcome, GameError> {
        if !target.within(self.size) {
            return Err(GameError::OffBoard(target));
        }

        for (i, ship) in self.fleet.ships_mut().iter_mut().enumerate() {
            match ship.register_hit(target) {
                None => continue,
                Some(false) => return Ok(ShotOutcome::AlreadyHit),
                Some(true) if ship.is_sunk() => {
                    self.sunk += 1;
                    return Ok(ShotOutcome::Sunk { ship: i });
                }
                Some(true) => return Ok(ShotOutcome::Hit),
            }
        }

        let fresh = self
            .misses
            .insert(target)
            .map_err(|_| GameError::OffBoard(target))?;
        Ok(if fresh {
            ShotOutcome::Miss
        } else {
            ShotOutcome::AlreadyMiss
        })
    }

    /// Returns `true` when every ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.sunk == self.fleet.len()
    }

    pub fn sunk(&self) -> usize {
        self.sunk
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn misses(&self) -> Grid {
        self.misses
    }

    /// Cells where a ship segment has been hit.
    pub fn hits(&self) -> Grid {
        let mut hits = Grid::new();
        for ship in self.fleet.ships() {
            for (cell, hit) in ship.cells().iter().zip(ship.hits()) {
                if *hit {
                    let _ = hits.insert(*cell);
                }
            }
        }
        hits
    }
}
