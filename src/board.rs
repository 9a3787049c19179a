//! Board state: ship layout, hits and destroyed markings.

use crate::bitboard::BitBoard;
use crate::common::{AttackOutcome, GameError};
use crate::config::{SinkMarking, GRID_SIZE, MAX_PLACEMENT_ATTEMPTS, NUM_SHIPS, SHIPS};
use crate::ship::{Orientation, Ship};
use core::fmt;
use log::debug;
use rand::Rng;

type BB = BitBoard<u128, GRID_SIZE>;

/// A ship sized for the game grid.
pub type PlacedShip = Ship<u128, GRID_SIZE>;

/// Per-position view of the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub has_ship: bool,
    pub hit: bool,
    pub destroyed: bool,
}

/// What the player is allowed to see of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum CellView {
    #[default]
    Untouched,
    Miss,
    Hit,
    Destroyed,
}

impl Cell {
    pub fn view(&self) -> CellView {
        match (self.hit, self.has_ship, self.destroyed) {
            (false, _, _) => CellView::Untouched,
            (true, false, _) => CellView::Miss,
            (true, true, false) => CellView::Hit,
            (true, true, true) => CellView::Destroyed,
        }
    }
}

/// Ship layout plus everything the player has done to it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    ships: [Option<PlacedShip>; NUM_SHIPS],
    ship_map: BB,
    hits: BB,
    destroyed: BB,
}

impl Board {
    /// Empty board with no ships placed.
    pub fn new() -> Self {
        Board {
            ships: [None; NUM_SHIPS],
            ship_map: BB::new(),
            hits: BB::new(),
            destroyed: BB::new(),
        }
    }

    /// Random layout of every configured ship, placed in configuration order.
    pub fn generate<R: Rng>(rng: &mut R) -> Result<Self, GameError> {
        let mut board = Board::new();
        for i in 0..NUM_SHIPS {
            let (r, c, o) = board.random_placement(rng, i)?;
            board.place(i, r, c, o)?;
        }
        Ok(board)
    }

    /// Place ship `ship_index` with its first segment at (row, col).
    pub fn place(
        &mut self,
        ship_index: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        if ship_index >= NUM_SHIPS {
            return Err(GameError::InvalidIndex);
        }
        if self.ships[ship_index].is_some() {
            return Err(GameError::ShipAlreadyPlaced);
        }
        let ship = PlacedShip::new(SHIPS[ship_index], orientation, row, col)?;
        if self.ship_map.intersects(&ship.mask()) {
            return Err(GameError::ShipOverlaps);
        }
        self.ship_map |= ship.mask();
        self.ships[ship_index] = Some(ship);
        debug!(
            "placed {} at ({}, {}) {:?}",
            SHIPS[ship_index].name(),
            row,
            col,
            orientation
        );
        Ok(())
    }

    /// Returns a random non-overlapping (row, col, Orientation) for `ship_index`.
    /// Origins are drawn only from positions where the ship fits on the grid.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        ship_index: usize,
    ) -> Result<(usize, usize, Orientation), GameError> {
        if ship_index >= NUM_SHIPS {
            return Err(GameError::InvalidIndex);
        }
        let def = SHIPS[ship_index];
        if def.length() == 0 || def.length() > GRID_SIZE {
            return Err(GameError::ShipOutOfBounds);
        }
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orient {
                Orientation::Horizontal => (GRID_SIZE - 1, GRID_SIZE - def.length()),
                Orientation::Vertical => (GRID_SIZE - def.length(), GRID_SIZE - 1),
            };
            let r = rng.random_range(0..=max_r);
            let c = rng.random_range(0..=max_c);
            let ship = PlacedShip::new(def, orient, r, c)?;
            if !self.ship_map.intersects(&ship.mask()) {
                return Ok((r, c, orient));
            }
        }
        Err(GameError::UnableToPlaceShip)
    }

    /// Placed ships, in configuration order.
    pub fn ships(&self) -> impl Iterator<Item = &PlacedShip> + '_ {
        self.ships.iter().flatten()
    }

    pub fn ship(&self, index: usize) -> Option<&PlacedShip> {
        self.ships.get(index).and_then(Option::as_ref)
    }

    /// Occupancy mask of all ships.
    pub fn ship_map(&self) -> BB {
        self.ship_map
    }

    pub fn hits(&self) -> BB {
        self.hits
    }

    pub fn destroyed(&self) -> BB {
        self.destroyed
    }

    /// Number of sunk ships, counted from the ships themselves.
    pub fn destroyed_ships(&self) -> usize {
        self.ships().filter(|s| s.is_sunk()).count()
    }

    /// `true` once every configured ship is on the board and sunk.
    pub fn all_sunk(&self) -> bool {
        self.destroyed_ships() == NUM_SHIPS
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(GameError::OutOfBounds { row, col });
        }
        Ok(Cell {
            has_ship: self.ship_map.get(row, col)?,
            hit: self.hits.get(row, col)?,
            destroyed: self.destroyed.get(row, col)?,
        })
    }

    /// Full grid of cells, row-major.
    pub fn cells(&self) -> [[Cell; GRID_SIZE]; GRID_SIZE] {
        let mut grid = [[Cell::default(); GRID_SIZE]; GRID_SIZE];
        for (r, row) in grid.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                let at = |bb: BB| bb.get(r, c).unwrap_or(false);
                *cell = Cell {
                    has_ship: at(self.ship_map),
                    hit: at(self.hits),
                    destroyed: at(self.destroyed),
                };
            }
        }
        grid
    }

    /// Resolve an attack in place. Callers that need value semantics work on
    /// a copy; see `GameState::attack`.
    pub(crate) fn strike(
        &mut self,
        row: usize,
        col: usize,
        marking: SinkMarking,
    ) -> Result<AttackOutcome, GameError> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(GameError::OutOfBounds { row, col });
        }
        if self.hits.get(row, col)? {
            return Ok(AttackOutcome::Repeat);
        }
        self.hits.set(row, col)?;
        if !self.ship_map.get(row, col)? {
            return Ok(AttackOutcome::Miss);
        }

        let ship = self
            .ships
            .iter_mut()
            .flatten()
            .find(|s| s.contains(row, col))
            .ok_or(GameError::UnknownShipHit)?;
        ship.register_hit(row, col);
        if !ship.is_sunk() {
            return Ok(AttackOutcome::Hit);
        }
        match marking {
            SinkMarking::WholeShip => self.destroyed |= ship.mask(),
            SinkMarking::FinalCell => self.destroyed.set(row, col)?,
        }
        Ok(AttackOutcome::Sink(ship.ship_type().name()))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ship_map: {:?},\n  hits: {:?},\n  destroyed: {:?},\n  ships: {:?}\n}}",
            self.ship_map, self.hits, self.destroyed, self.ships
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_view_covers_every_state() {
        let untouched = Cell::default();
        assert_eq!(untouched.view(), CellView::Untouched);
        let miss = Cell { hit: true, ..Cell::default() };
        assert_eq!(miss.view(), CellView::Miss);
        let hit = Cell { hit: true, has_ship: true, destroyed: false };
        assert_eq!(hit.view(), CellView::Hit);
        let sunk = Cell { destroyed: true, ..hit };
        assert_eq!(sunk.view(), CellView::Destroyed);
    }

    #[test]
    fn strike_outside_grid_is_rejected() {
        let mut board = Board::new();
        assert_eq!(
            board.strike(GRID_SIZE, 0, SinkMarking::WholeShip),
            Err(GameError::OutOfBounds { row: GRID_SIZE, col: 0 })
        );
        assert!(board.hits().is_empty());
    }
}
