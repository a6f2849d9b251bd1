//! Fleet layout: random generation and the finishing step for manual setup.
//!
//! Manual placement is just repeated [`Board::place_ship`] calls driven by the
//! caller, followed by [`seal_fleet`]. The random generator below keeps a set
//! of free coordinates, anchors each ship on one of them and throws the whole
//! board away whenever it paints itself into a corner. A generator seeded
//! with a partly filled board keeps those ships and only discards what it
//! added itself.

use rand::Rng;

use crate::board::{Board, CoordSet};
use crate::cell::Coord;
use crate::common::{BoardError, ShipId};
use crate::config::{PlacementConfig, FLEET_LENGTHS};
use crate::ship::Ship;

/// The current layout cannot be completed; the board has to be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Deadlock;

/// Check that the fleet is complete and drop the placement contour.
pub fn seal_fleet(board: &mut Board) -> Result<(), BoardError> {
    if !board.is_fleet_complete() {
        return Err(BoardError::FleetIncomplete);
    }
    board.clear_contours();
    Ok(())
}

/// Generate a complete random fleet, contour already cleared.
pub fn random_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    config: PlacementConfig,
) -> Result<Board, BoardError> {
    let mut placer = RandomPlacer::new(config);
    placer.place_fleet(rng)?;
    placer.finish()
}

/// Place the rest of the fleet around the ships already on `board`.
///
/// Ships already placed stay where they are. Fails with `UnableToPlaceFleet`
/// when no completion is found within the reset budget.
pub fn complete_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    board: Board,
    config: PlacementConfig,
) -> Result<Board, BoardError> {
    let mut placer = RandomPlacer::from_board(board, config);
    placer.place_fleet(rng)?;
    placer.finish()
}

/// Randomized fleet generator.
#[derive(Debug, Clone)]
pub struct RandomPlacer {
    config: PlacementConfig,
    seed: Board,
    board: Board,
    free: CoordSet,
    resets: usize,
}

impl RandomPlacer {
    pub fn new(config: PlacementConfig) -> Self {
        Self::from_board(Board::new(), config)
    }

    /// Generator that starts from `board` and returns to it on every reset.
    /// The board must still carry its contour.
    pub fn from_board(board: Board, config: PlacementConfig) -> Self {
        let free = !board.blocked();
        Self {
            config,
            seed: board.clone(),
            board,
            free,
            resets: 0,
        }
    }

    /// Board under construction, contour still stamped.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Coordinates neither owned by a ship nor marked as contour.
    pub fn free(&self) -> CoordSet {
        self.free
    }

    /// How many times the board has been thrown away so far.
    pub fn resets(&self) -> usize {
        self.resets
    }

    /// Place every missing ship of the fleet, restarting from the starting
    /// board on deadlock until the reset budget runs out.
    pub fn place_fleet<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        while self.fill(rng).is_err() {
            self.reset()?;
        }
        log::debug!(
            "random fleet placed after {} reset(s), {} free cells left",
            self.resets,
            self.free.len()
        );
        Ok(())
    }

    /// Seal the completed board and hand it over.
    pub fn finish(mut self) -> Result<Board, BoardError> {
        seal_fleet(&mut self.board)?;
        Ok(self.board)
    }

    fn reset(&mut self) -> Result<(), BoardError> {
        if self.resets >= self.config.max_resets {
            log::warn!("giving up after {} board resets", self.resets);
            return Err(BoardError::UnableToPlaceFleet);
        }
        self.resets += 1;
        log::trace!("discarding board, reset #{}", self.resets);
        self.board = self.seed.clone();
        self.free = !self.seed.blocked();
        Ok(())
    }

    fn fill<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), Deadlock> {
        for &length in FLEET_LENGTHS.iter() {
            if self.board.remaining_of_length(length) == 0 {
                continue;
            }
            self.place_one(rng, length)?;
            if self.free.is_empty() && !self.board.is_fleet_complete() {
                return Err(Deadlock);
            }
        }
        Ok(())
    }

    fn place_one<R: Rng + ?Sized>(&mut self, rng: &mut R, length: usize) -> Result<ShipId, Deadlock> {
        for _ in 0..self.config.max_anchor_attempts {
            let Some(anchor) = self.free.choose(rng) else {
                return Err(Deadlock);
            };
            let Some(end) = self.pick_end(rng, anchor, length) else {
                continue;
            };
            let Ok(ship) = Ship::new(anchor, Some(end)) else {
                continue;
            };
            match self.board.place_ship(ship) {
                Ok(id) => {
                    self.free = self.free & !self.board.blocked();
                    return Ok(id);
                }
                Err(e) => log::trace!("rejected {:?}: {}", ship, e),
            }
        }
        Err(Deadlock)
    }

    /// Free opposite endpoint `length - 1` cells away along one axis.
    fn pick_end<R: Rng + ?Sized>(&self, rng: &mut R, anchor: Coord, length: usize) -> Option<Coord> {
        if length <= 1 {
            return Some(anchor);
        }
        let d = (length - 1) as isize;
        let free = self.free;
        let candidates = CoordSet::from_coords(
            [(d, 0), (-d, 0), (0, d), (0, -d)]
                .into_iter()
                .filter_map(|(dx, dy)| anchor.offset(dx, dy))
                .filter(|c| free.contains(*c)),
        );
        candidates.choose(rng)
    }
}
