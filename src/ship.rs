//! Ship definitions and per-ship hit tracking using our `BitBoard`.

use core::fmt;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::bitboard::BitBoard;
use crate::common::GameError;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Cell `i` segments away from `(row, col)` along this orientation.
    #[inline]
    pub fn step(self, row: usize, col: usize, i: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship placed on an N×N board. Hits are tracked in their own bitboard so
/// the hit count can never exceed the number of distinct segments.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    ship_type: ShipType,
    orientation: Orientation,
    row: usize,
    col: usize,
    mask: BitBoard<T, N>,
    hits: BitBoard<T, N>,
}

impl<T, const N: usize> Ship<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Place a ship with its first segment at (`row`, `col`).
    pub fn new(
        ship_type: ShipType,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, GameError> {
        let len = ship_type.length();
        if len == 0 || len > N || row >= N || col >= N {
            return Err(GameError::ShipOutOfBounds);
        }
        let (last_row, last_col) = orientation.step(row, col, len - 1);
        if last_row >= N || last_col >= N {
            return Err(GameError::ShipOutOfBounds);
        }

        let mask = BitBoard::<T, N>::from_cells((0..len).map(|i| orientation.step(row, col, i)))?;
        Ok(Ship {
            ship_type,
            orientation,
            row,
            col,
            mask,
            hits: BitBoard::new(),
        })
    }

    /// Record a hit at (`row`, `col`). Returns `false` if the cell is not
    /// part of this ship.
    pub fn register_hit(&mut self, row: usize, col: usize) -> bool {
        if self.contains(row, col) {
            self.hits.set(row, col).is_ok()
        } else {
            false
        }
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.mask.get(row, col).unwrap_or(false)
    }

    /// Number of distinct segments hit so far.
    pub fn hits(&self) -> usize {
        self.hits.count_ones()
    }

    pub fn len(&self) -> usize {
        self.ship_type.length()
    }

    pub fn is_sunk(&self) -> bool {
        self.hits() == self.len()
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> BitBoard<T, N> {
        self.mask
    }

    /// Segments from the origin outward.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (row, col, orientation) = (self.row, self.col, self.orientation);
        (0..self.len()).map(move |i| orientation.step(row, col, i))
    }
}

impl<T, const N: usize> fmt::Debug for Ship<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: ({}, {}), orientation: {:?}, hits: {}/{} }}",
            self.ship_type.name(),
            self.row,
            self.col,
            self.orientation,
            self.hits(),
            self.len(),
        )
    }
}
