//! Common types: engine errors and attack outcomes.

use crate::bitboard::BitBoardError;

/// Result of a single attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// Attack hit open water.
    Miss,
    /// Attack hit a ship that is still afloat.
    Hit,
    /// Attack sank a ship, carrying its name.
    Sink(&'static str),
    /// Cell was already attacked; nothing changed.
    Repeat,
    /// Game is already won; nothing changed.
    GameOver,
}

impl AttackOutcome {
    /// Change in the destroyed-ship count caused by this attack.
    pub fn destroyed_delta(&self) -> usize {
        match self {
            AttackOutcome::Sink(_) => 1,
            _ => 0,
        }
    }

    /// `true` if the attack changed the board.
    pub fn is_effective(&self) -> bool {
        matches!(
            self,
            AttackOutcome::Miss | AttackOutcome::Hit | AttackOutcome::Sink(_)
        )
    }
}

/// Errors returned by engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Underlying bitboard error.
    BitBoardError(BitBoardError),
    /// Attack coordinate outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Ship index is out of range.
    InvalidIndex,
    /// Ship with this index is already on the board.
    ShipAlreadyPlaced,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship would extend past the grid edge.
    ShipOutOfBounds,
    /// Random placement ran out of attempts.
    UnableToPlaceShip,
    /// Occupancy mask says ship but no placed ship covers the cell.
    UnknownShipHit,
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        GameError::BitBoardError(err)
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            GameError::OutOfBounds { row, col } => {
                write!(f, "Coordinate ({}, {}) is outside the grid", row, col)
            }
            GameError::InvalidIndex => write!(f, "Ship index is out of range"),
            GameError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            GameError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            GameError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            GameError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            GameError::UnknownShipHit => write!(f, "Hit cell is not covered by any placed ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
