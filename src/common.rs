//! Common types for the game: grid coordinates, ship orientation and shot outcomes.

use alloc::string::String;
use core::fmt;

use crate::config::ROW_LABELS;

/// A cell on the board, addressed by zero-based row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// Row digit followed by column digit, e.g. `"30"` for row 3, column 0.
    pub fn key(&self) -> String {
        alloc::format!("{}{}", self.row, self.col)
    }

    /// Inverse of [`Coordinate::key`]. Only single-digit rows and columns are accepted.
    pub fn from_key(key: &str) -> Option<Self> {
        let mut chars = key.chars();
        let row = chars.next()?.to_digit(10)?;
        let col = chars.next()?.to_digit(10)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Self::new(row as u8, col as u8))
    }

    /// Returns the cell `step` places further along `orientation`.
    pub fn offset(&self, orientation: Orientation, step: usize) -> Option<Self> {
        let step = u8::try_from(step).ok()?;
        match orientation {
            Orientation::Horizontal => Some(Self::new(self.row, self.col.checked_add(step)?)),
            Orientation::Vertical => Some(Self::new(self.row.checked_add(step)?, self.col)),
        }
    }

    /// Whether the cell lies inside a `size`×`size` board.
    pub fn within(&self, size: usize) -> bool {
        self.row() < size && self.col() < size
    }
}

/// Formats the coordinate the way a player types it: row letter then column digit.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match ROW_LABELS.get(self.row()) {
            Some(&label) => write!(f, "{}{}", label as char, self.col),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Result of firing at a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot struck an undamaged ship segment.
    Hit,
    /// Shot struck the last undamaged segment of the ship at index `ship`.
    Sunk { ship: usize },
    /// Segment was already hit; no new damage.
    AlreadyHit,
    /// Shot found open water.
    Miss,
    /// Same open-water cell was fired at before.
    AlreadyMiss,
}

impl ShotOutcome {
    /// `true` when the shot landed on a ship, including repeat hits.
    pub fn is_hit(self) -> bool {
        matches!(
            self,
            ShotOutcome::Hit | ShotOutcome::Sunk { .. } | ShotOutcome::AlreadyHit
        )
    }

    /// `true` for repeat shots, which change nothing on the board.
    pub fn is_repeat(self) -> bool {
        matches!(self, ShotOutcome::AlreadyHit | ShotOutcome::AlreadyMiss)
    }

    /// `true` when the shot did fresh damage.
    pub fn is_new_damage(self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk { .. })
    }
}
