//! Common types for the game: board errors and shot results.

/// Index of a ship in its board's fleet, assigned in placement order.
pub type ShipId = usize;

/// Result of a shot resolved by a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Shot landed on open water or a contour cell.
    Miss,
    /// Shot struck a ship that is still afloat.
    Hit,
    /// Shot struck the last segment of the ship with this id.
    Sunk(ShipId),
}

/// Errors returned by ship, board and game operations.
///
/// None of them leaves the state partially mutated; the caller may retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Ship endpoints are not on one row or column, or span more than three cells.
    InvalidShipShape,
    /// Coordinate lies outside the grid.
    OutOfBounds,
    /// The fleet already holds every ship of this length.
    AllShipsOfLengthUsed,
    /// Another ship owns one of the cells.
    OccupiedConflict,
    /// A cell touches another ship's contour.
    AdjacentShipConflict,
    /// Cell has already been shot at.
    AlreadyFired,
    /// Ship segment was already hit.
    AlreadyStruck,
    /// Coordinate is not one of the ship's segments.
    NotOnShip,
    /// Game cannot start before both fleets are complete.
    FleetIncomplete,
    /// The random generator exhausted its reset budget.
    UnableToPlaceFleet,
    /// A side tried to shoot out of turn.
    NotYourTurn,
    /// Shots are not accepted once a fleet is destroyed.
    GameOver,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidShipShape => {
                write!(f, "Ship must lie in one row or column and be 1 to 3 cells long")
            }
            BoardError::OutOfBounds => write!(f, "Coordinate is outside the board"),
            BoardError::AllShipsOfLengthUsed => {
                write!(f, "All ships of this length are already placed")
            }
            BoardError::OccupiedConflict => write!(f, "Cell is already occupied by a ship"),
            BoardError::AdjacentShipConflict => write!(f, "Ship is too close to another ship"),
            BoardError::AlreadyFired => write!(f, "This cell has already been fired at"),
            BoardError::AlreadyStruck => write!(f, "This ship segment is already hit"),
            BoardError::NotOnShip => write!(f, "Coordinate is not part of the ship"),
            BoardError::FleetIncomplete => write!(f, "Fleet is not complete"),
            BoardError::UnableToPlaceFleet => write!(f, "Unable to place the fleet"),
            BoardError::NotYourTurn => write!(f, "It is not this side's turn"),
            BoardError::GameOver => write!(f, "The game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
