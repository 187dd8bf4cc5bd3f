//! Ship layout and damage tracking.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{Coordinate, Orientation};
use crate::config::Grid;

/// A straight run of cells with one hit flag per cell.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    orientation: Orientation,
    cells: Vec<Coordinate>,
    hits: Vec<bool>,
    mask: Grid,
}

impl Ship {
    /// Lays out a ship of `length` cells starting at `origin`.
    /// Returns `None` if any cell would fall outside a `board_size`×`board_size` board.
    pub fn new(
        origin: Coordinate,
        orientation: Orientation,
        length: usize,
        board_size: usize,
    ) -> Option<Self> {
        let cells = (0..length)
            .map(|step| origin.offset(orientation, step))
            .collect::<Option<Vec<_>>>()?;
        if !cells.iter().all(|cell| cell.within(board_size)) {
            return None;
        }
        let mask = Grid::from_cells(cells.iter().copied()).ok()?;
        Some(Ship {
            orientation,
            hits: alloc::vec![false; cells.len()],
            cells,
            mask,
        })
    }

    /// Parses a ship from its cell keys, e.g. `["30", "31", "32"]`.
    /// Returns `None` unless the keys form one straight contiguous run.
    pub fn from_keys(keys: &[&str], board_size: usize) -> Option<Self> {
        let cells = keys
            .iter()
            .map(|k| Coordinate::from_key(k))
            .collect::<Option<Vec<_>>>()?;
        let origin = *cells.first()?;
        let orientation = match cells.get(1) {
            Some(next) if next.row() == origin.row() => Orientation::Horizontal,
            _ => Orientation::Vertical,
        };
        let ship = Ship::new(origin, orientation, cells.len(), board_size)?;
        (ship.cells == cells).then_some(ship)
    }

    /// Records a shot at `target`. Returns `None` when the ship does not occupy
    /// `target`, otherwise `Some(true)` for fresh damage and `Some(false)` when
    /// that segment was already hit.
    pub fn register_hit(&mut self, target: Coordinate) -> Option<bool> {
        let idx = self.cells.iter().position(|&c| c == target)?;
        let fresh = !self.hits[idx];
        self.hits[idx] = true;
        Some(fresh)
    }

    /// All segments hit.
    pub fn is_sunk(&self) -> bool {
        self.hits.iter().all(|&h| h)
    }

    pub fn hit_count(&self) -> usize {
        self.hits.iter().filter(|&&h| h).count()
    }

    pub fn contains(&self, target: Coordinate) -> bool {
        self.mask.contains(target).unwrap_or(false)
    }

    /// Occupied cells, from the origin outwards.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Hit flags, parallel to [`Ship::cells`].
    pub fn hits(&self) -> &[bool] {
        &self.hits
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn mask(&self) -> Grid {
        self.mask
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ship {{ {:?}, cells: [", self.orientation)?;
        for (i, (cell, hit)) in self.cells.iter().zip(&self.hits).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}{}", cell.key(), if *hit { "*" } else { "" })?;
        }
        write!(f, "] }}")
    }
}
