//! Game board: the grid of cell states, the placed fleet and shot resolution.

use crate::bitboard::BitBoard;
use crate::cell::{Coord, Mark};
use crate::common::{BoardError, ShipId, ShotResult};
use crate::config::{quota_for, BOARD_SIZE, FLEET_SIZE, MAX_SHIP_LENGTH};
use crate::ship::{Ship, Strike};
use core::fmt;

/// Coordinate set sized for the game grid.
pub type CoordSet = BitBoard<u64, BOARD_SIZE>;

/// What a grid position holds: plain water in one of its states, or a
/// reference to the ship segment occupying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Empty,
    Contour,
    Miss,
    ShipRef { id: ShipId, segment: usize },
}

/// Main board state: grid, fleet and per-length placement tally.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[CellState; BOARD_SIZE]; BOARD_SIZE],
    ships: [Option<Ship>; FLEET_SIZE],
    ship_count: usize,
    tally: [usize; MAX_SHIP_LENGTH + 1],
    hidden: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty, visible board.
    pub fn new() -> Self {
        Board {
            grid: [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE],
            ships: [None; FLEET_SIZE],
            ship_count: 0,
            tally: [0; MAX_SHIP_LENGTH + 1],
            hidden: false,
        }
    }

    /// Builder-style setter for the display flag.
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Whether renderers should conceal unhit ship segments.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    fn check_bounds(coord: Coord) -> Result<(), BoardError> {
        if coord.in_bounds() {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds)
        }
    }

    fn slot(&self, coord: Coord) -> CellState {
        self.grid[coord.y][coord.x]
    }

    fn slot_mut(&mut self, coord: Coord) -> &mut CellState {
        &mut self.grid[coord.y][coord.x]
    }

    /// Raw grid state at `coord`.
    pub fn state_at(&self, coord: Coord) -> Result<CellState, BoardError> {
        Self::check_bounds(coord)?;
        Ok(self.slot(coord))
    }

    /// Display mark at `coord`, resolving ship references to the segment mark.
    pub fn cell_at(&self, coord: Coord) -> Result<Mark, BoardError> {
        Ok(match self.state_at(coord)? {
            CellState::Empty => Mark::Empty,
            CellState::Contour => Mark::Contour,
            CellState::Miss => Mark::Miss,
            CellState::ShipRef { id, segment } => self
                .ship(id)
                .and_then(|ship| ship.mark_at(segment))
                .unwrap_or(Mark::Ship),
        })
    }

    /// Ship with the given id, if placed.
    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id).and_then(|slot| slot.as_ref())
    }

    /// Placed ships with their ids, in placement order.
    pub fn ships(&self) -> impl Iterator<Item = (ShipId, &Ship)> + '_ {
        self.ships
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| slot.as_ref().map(|ship| (id, ship)))
    }

    pub fn ship_count(&self) -> usize {
        self.ship_count
    }

    /// Ships of `length` still missing from the fleet.
    pub fn remaining_of_length(&self, length: usize) -> usize {
        let placed = self.tally.get(length).copied().unwrap_or(0);
        quota_for(length).saturating_sub(placed)
    }

    /// `true` once every ship of the fleet is placed.
    pub fn is_fleet_complete(&self) -> bool {
        self.ship_count == FLEET_SIZE
    }

    /// Sum of remaining lives over all placed ships.
    pub fn total_lives(&self) -> usize {
        self.ships().map(|(_, ship)| ship.lives()).sum()
    }

    /// Returns `true` when ships were placed and every one of them is sunk.
    pub fn all_sunk(&self) -> bool {
        self.ship_count > 0 && self.total_lives() == 0
    }

    /// Coordinates owned by a ship or marked as contour.
    pub fn blocked(&self) -> CoordSet {
        let mut set = CoordSet::new();
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                if matches!(
                    self.grid[y][x],
                    CellState::Contour | CellState::ShipRef { .. }
                ) {
                    set.insert(Coord::new(x, y));
                }
            }
        }
        set
    }

    /// Validate and place `ship`, returning its id.
    ///
    /// Checks run in order: fleet quota, bounds, then conflicts with other
    /// ships (`OccupiedConflict`) or their contour (`AdjacentShipConflict`).
    /// Nothing is written unless every check passes.
    pub fn place_ship(&mut self, ship: Ship) -> Result<ShipId, BoardError> {
        let length = ship.length();
        if self.remaining_of_length(length) == 0 {
            return Err(BoardError::AllShipsOfLengthUsed);
        }
        for c in ship.occupied_cells() {
            Self::check_bounds(c)?;
        }
        if ship
            .occupied_cells()
            .any(|c| matches!(self.slot(c), CellState::ShipRef { .. } | CellState::Miss))
        {
            return Err(BoardError::OccupiedConflict);
        }
        if ship
            .occupied_cells()
            .any(|c| self.slot(c) == CellState::Contour)
        {
            return Err(BoardError::AdjacentShipConflict);
        }

        let id = self.ship_count;
        for (segment, c) in ship.occupied_cells().enumerate() {
            *self.slot_mut(c) = CellState::ShipRef { id, segment };
        }
        self.ships[id] = Some(ship);
        self.ship_count += 1;
        self.tally[length] += 1;
        self.stamp_contour(id);
        log::debug!("placed ship #{} {:?}", id, ship);
        Ok(id)
    }

    /// Ring the ship with contour, writing only onto empty cells.
    fn stamp_contour(&mut self, id: ShipId) {
        let Some(ship) = self.ships[id] else {
            return;
        };
        for c in ship.occupied_cells() {
            for n in c.ring() {
                let slot = self.slot_mut(n);
                if *slot == CellState::Empty {
                    *slot = CellState::Contour;
                }
            }
        }
    }

    /// Reset every contour cell to empty. Ships and misses are untouched.
    pub fn clear_contours(&mut self) {
        for row in self.grid.iter_mut() {
            for slot in row.iter_mut() {
                if *slot == CellState::Contour {
                    *slot = CellState::Empty;
                }
            }
        }
    }

    /// Resolve a shot at `coord`.
    ///
    /// Water and contour become a miss. A hit on a ship segment burns it; the
    /// hit that sinks a ship rings it with contour again.
    pub fn fire_at(&mut self, coord: Coord) -> Result<ShotResult, BoardError> {
        Self::check_bounds(coord)?;
        let result = match self.slot(coord) {
            CellState::Miss => return Err(BoardError::AlreadyFired),
            CellState::Empty | CellState::Contour => {
                *self.slot_mut(coord) = CellState::Miss;
                ShotResult::Miss
            }
            CellState::ShipRef { id, .. } => {
                let ship = self.ships[id].as_mut().ok_or(BoardError::NotOnShip)?;
                let strike = ship.register_hit(coord).map_err(|e| match e {
                    BoardError::AlreadyStruck => BoardError::AlreadyFired,
                    other => other,
                })?;
                match strike {
                    Strike::Damaged => ShotResult::Hit,
                    Strike::Sunk => {
                        self.stamp_contour(id);
                        ShotResult::Sunk(id)
                    }
                }
            }
        };
        log::trace!("shot at {} -> {:?}", coord, result);
        Ok(result)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ships: {:?},\n  tally: {:?},\n  lives: {},\n  hidden: {}\n}}",
            self.ships,
            self.tally,
            self.total_lives(),
            self.hidden
        )
    }
}
