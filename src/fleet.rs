//! Fleet layout: random non-overlapping placement and explicit construction.

use alloc::vec::Vec;
use rand::Rng;

use crate::common::{Coordinate, Orientation};
use crate::config::{GameConfig, Grid};
use crate::error::PlacementError;
use crate::ship::Ship;

/// The ships of one game. No two ships share a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
    occupied: Grid,
}

impl Fleet {
    /// Places `config.num_ships` ships at random.
    ///
    /// Each slot draws an orientation and an anchor that keeps the run on the
    /// board, and redraws on collision with an earlier ship. A slot that still
    /// collides after `config.max_placement_attempts` draws fails the whole
    /// layout.
    pub fn generate<R: Rng>(rng: &mut R, config: &GameConfig) -> Result<Self, PlacementError> {
        let size = config.board_size;
        let length = config.ship_length;
        if size == 0 || length > size {
            return Err(PlacementError::TooLong {
                length,
                board_size: size,
            });
        }

        let mut fleet = Fleet {
            ships: Vec::with_capacity(config.num_ships),
            occupied: Grid::new(),
        };
        for slot in 0..config.num_ships {
            let ship = fleet.random_placement(rng, slot, config)?;
            log::trace!("ship {} placed at {:?}", slot, ship);
            fleet.occupied |= ship.mask();
            fleet.ships.push(ship);
        }
        log::debug!("fleet laid out: {:?}", fleet.ships);
        Ok(fleet)
    }

    fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        slot: usize,
        config: &GameConfig,
    ) -> Result<Ship, PlacementError> {
        let size = config.board_size;
        let length = config.ship_length;
        for attempt in 1..=config.max_placement_attempts {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orientation {
                Orientation::Horizontal => (size - 1, size - length),
                Orientation::Vertical => (size - length, size - 1),
            };
            let origin = Coordinate::new(
                rng.random_range(0..=max_r) as u8,
                rng.random_range(0..=max_c) as u8,
            );
            let ship = Ship::new(origin, orientation, length, size).ok_or(
                PlacementError::OutOfBounds {
                    ship: slot,
                    cell: origin,
                },
            )?;
            if !self.occupied.intersects(&ship.mask()) {
                return Ok(ship);
            }
            log::trace!("ship {} collided at {} (attempt {})", slot, origin, attempt);
        }
        log::warn!(
            "gave up placing ship {} after {} attempts",
            slot,
            config.max_placement_attempts
        );
        Err(PlacementError::Exhausted {
            ship: slot,
            attempts: config.max_placement_attempts,
        })
    }

    /// Builds a fleet from explicit ships, checking count, lengths, bounds and overlap.
    pub fn from_ships(ships: Vec<Ship>, config: &GameConfig) -> Result<Self, PlacementError> {
        if ships.len() != config.num_ships {
            return Err(PlacementError::FleetSize {
                expected: config.num_ships,
                actual: ships.len(),
            });
        }
        let mut occupied = Grid::new();
        for (i, ship) in ships.iter().enumerate() {
            if ship.len() != config.ship_length {
                return Err(PlacementError::ShipLength {
                    ship: i,
                    expected: config.ship_length,
                    actual: ship.len(),
                });
            }
            if let Some(&cell) = ship
                .cells()
                .iter()
                .find(|c| !c.within(config.board_size))
            {
                return Err(PlacementError::OutOfBounds { ship: i, cell });
            }
            if let Some(cell) = (occupied & ship.mask()).cells().next() {
                return Err(PlacementError::Overlap { ship: i, cell });
            }
            occupied |= ship.mask();
        }
        Ok(Fleet { ships, occupied })
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub(crate) fn ships_mut(&mut self) -> &mut [Ship] {
        &mut self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Union of every ship's cells.
    pub fn occupied(&self) -> Grid {
        self.occupied
    }

    /// Index of the ship covering `cell`, if any.
    pub fn ship_at(&self, cell: Coordinate) -> Option<usize> {
        self.ships.iter().position(|s| s.contains(cell))
    }

    /// Number of ships with every segment hit.
    pub fn sunk_count(&self) -> usize {
        self.ships.iter().filter(|s| s.is_sunk()).count()
    }
}
