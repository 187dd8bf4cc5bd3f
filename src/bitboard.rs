//! A fixed-capacity set of board cells packed into one unsigned integer.
//!
//! `BitBoard<T, N>` addresses an `N×N` grid; cell `(r, c)` is bit `r * N + c`
//! of `T`. Used for fleet occupancy, ship masks and the miss set, so overlap
//! checks and repeat detection are single bitwise operations.

use core::ops::{BitAnd, BitOr, BitOrAssign};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::common::Coordinate;
use crate::error::BitBoardError;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const CELLS: usize = N * N;

    /// Empty set. `N×N` must fit in the bit width of `T`.
    #[inline]
    pub fn new() -> Self {
        debug_assert!(Self::CELLS <= mem::size_of::<T>() * 8);
        BitBoard { bits: T::zero() }
    }

    /// Builds a set from cells, failing on the first out-of-range one.
    pub fn from_cells<I>(cells: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut board = Self::new();
        for cell in cells {
            board.insert(cell)?;
        }
        Ok(board)
    }

    #[inline]
    fn bit(cell: Coordinate) -> Result<T, BitBoardError> {
        if !cell.within(N) {
            return Err(BitBoardError::OutOfBounds { cell, n: N });
        }
        Ok(T::one() << (cell.row() * N + cell.col()))
    }

    pub fn contains(&self, cell: Coordinate) -> Result<bool, BitBoardError> {
        let bit = Self::bit(cell)?;
        Ok(!(self.bits & bit).is_zero())
    }

    /// Adds `cell`. Returns `true` if it was not already present.
    pub fn insert(&mut self, cell: Coordinate) -> Result<bool, BitBoardError> {
        let bit = Self::bit(cell)?;
        let fresh = (self.bits & bit).is_zero();
        self.bits = self.bits | bit;
        Ok(fresh)
    }

    /// Number of cells in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// `true` if the two sets share at least one cell.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.bits & other.bits).is_zero()
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> Cells<T, N> {
        Cells {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.cells()).finish()
    }
}

/// Iterator over the cells of a [`BitBoard`].
#[derive(Clone, Copy)]
pub struct Cells<T, const N: usize> {
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for Cells<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if !((self.bits >> idx) & T::one()).is_zero() {
                return Some(Coordinate::new((idx / N) as u8, (idx % N) as u8));
            }
        }
        None
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOrAssign for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}
