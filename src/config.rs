//! Fixed game constants and the small runtime configuration.

use crate::ship::ShipType;

/// Side length of the square grid.
pub const GRID_SIZE: usize = 10;

/// Ship lengths, in placement order.
pub const SHIP_SIZES: [usize; NUM_SHIPS] = [4, 3, 2];
pub const NUM_SHIPS: usize = 3;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Battleship", SHIP_SIZES[0]),
    ShipType::new("Cruiser", SHIP_SIZES[1]),
    ShipType::new("Destroyer", SHIP_SIZES[2]),
];

/// Total number of ship segments on a fully placed board.
pub const TOTAL_SHIP_CELLS: usize = SHIP_SIZES[0] + SHIP_SIZES[1] + SHIP_SIZES[2];

/// Random placement attempts per ship before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Which cells get the destroyed marking when a ship sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize, clap::ValueEnum))]
#[cfg_attr(feature = "std", serde(rename_all = "kebab-case"))]
pub enum SinkMarking {
    /// Every segment of the sunk ship.
    #[default]
    WholeShip,
    /// Only the segment whose hit sank the ship.
    FinalCell,
}

/// Runtime options for a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub sink_marking: SinkMarking,
}

impl GameConfig {
    pub fn with_sink_marking(mut self, sink_marking: SinkMarking) -> Self {
        self.sink_marking = sink_marking;
        self
    }
}
