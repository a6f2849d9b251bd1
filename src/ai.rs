// Hunt/target shot selection for the computer opponent.
// Uses no_std and avoids heap allocations.

use rand::Rng;

use crate::board::{Board, CoordSet};
use crate::cell::{Coord, Mark};
use crate::common::{BoardError, ShipId, ShotResult};
use crate::config::BOARD_SIZE;

/// What one engine step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shot {
    /// Picked a contour cell and held fire.
    NoShot,
    Miss(Coord),
    Hit(Coord),
    Sunk(Coord, ShipId),
    /// Target had already been resolved; the shot is wasted.
    AlreadyFired(Coord),
}

impl Shot {
    /// Coordinate fired at, if any.
    pub fn target(&self) -> Option<Coord> {
        match *self {
            Shot::NoShot => None,
            Shot::Miss(c) | Shot::Hit(c) | Shot::Sunk(c, _) | Shot::AlreadyFired(c) => Some(c),
        }
    }
}

/// Outcome of [`TargetingEngine::take_turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub shot: Shot,
    /// Same side keeps shooting when `true`.
    pub continues: bool,
}

impl Turn {
    fn new(shot: Shot, continues: bool) -> Self {
        Self { shot, continues }
    }
}

/// Random search until something is hit, then probing the hit's neighbours
/// until the ship goes down.
///
/// The engine owns nothing but its hunt queue; every decision reads the
/// target board through its public queries.
#[derive(Debug, Clone, Default)]
pub struct TargetingEngine {
    hunt: CoordSet,
}

impl TargetingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Candidates queued around earlier hits.
    pub fn hunt_queue(&self) -> CoordSet {
        self.hunt
    }

    /// `true` while the engine is following up on a hit.
    pub fn is_hunting(&self) -> bool {
        !self.hunt.is_empty()
    }

    /// Forget all queued candidates.
    pub fn reset(&mut self) {
        self.hunt.clear();
    }

    /// Fire one shot at `board`.
    pub fn take_turn<R: Rng + ?Sized>(&mut self, board: &mut Board, rng: &mut R) -> Turn {
        if self.hunt.is_empty() {
            self.search(board, rng)
        } else {
            self.strike(board, rng)
        }
    }

    /// Random shot among the cells not yet fired at. A contour pick holds
    /// fire and asks to be called again.
    fn search<R: Rng + ?Sized>(&mut self, board: &mut Board, rng: &mut R) -> Turn {
        let Some(target) = unresolved(board).choose(rng) else {
            return Turn::new(Shot::NoShot, false);
        };
        if board.cell_at(target) == Ok(Mark::Contour) {
            log::trace!("search picked contour cell {}, holding fire", target);
            return Turn::new(Shot::NoShot, true);
        }
        match board.fire_at(target) {
            Ok(ShotResult::Miss) => Turn::new(Shot::Miss(target), false),
            Ok(ShotResult::Hit) => {
                self.enqueue_neighbours(target, board);
                log::debug!("search hit {}, hunting {} candidate(s)", target, self.hunt.len());
                Turn::new(Shot::Hit(target), true)
            }
            Ok(ShotResult::Sunk(id)) => {
                self.enqueue_neighbours(target, board);
                Turn::new(Shot::Sunk(target, id), true)
            }
            Err(e) => self.wasted(target, e),
        }
    }

    fn strike<R: Rng + ?Sized>(&mut self, board: &mut Board, rng: &mut R) -> Turn {
        let Some(target) = self.hunt.choose(rng) else {
            return Turn::new(Shot::NoShot, true);
        };
        self.hunt.remove(target);
        match board.fire_at(target) {
            Ok(ShotResult::Hit) => {
                self.enqueue_neighbours(target, board);
                Turn::new(Shot::Hit(target), true)
            }
            Ok(ShotResult::Sunk(id)) => {
                self.filter(board);
                log::debug!("sunk ship #{} at {}, {} candidate(s) left", id, target, self.hunt.len());
                Turn::new(Shot::Sunk(target, id), true)
            }
            Ok(ShotResult::Miss) => {
                self.filter(board);
                Turn::new(Shot::Miss(target), false)
            }
            Err(e) => {
                self.filter(board);
                self.wasted(target, e)
            }
        }
    }

    fn wasted(&self, target: Coord, e: BoardError) -> Turn {
        log::warn!("engine fired at resolved cell {}: {}", target, e);
        Turn::new(Shot::AlreadyFired(target), false)
    }

    fn enqueue_neighbours(&mut self, target: Coord, board: &Board) {
        for n in target.orthogonal() {
            self.hunt.insert(n);
        }
        self.filter(board);
    }

    /// Drop candidates that cannot hold an unsunk ship.
    ///
    /// Besides contour cells this also drops every resolved cell (burn,
    /// killed, miss), so a neighbour missed earlier never re-enters the
    /// queue and a hunt shot never lands on a cell already fired at.
    /// Off-grid neighbours never enter the set.
    fn filter(&mut self, board: &Board) {
        self.hunt.retain(|c| match board.cell_at(c) {
            Ok(mark) => mark != Mark::Contour && !mark.is_resolved(),
            Err(_) => false,
        });
    }
}

/// Cells of `board` not yet shot at, seen without peeking at ship positions.
fn unresolved(board: &Board) -> CoordSet {
    let mut set = CoordSet::new();
    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            let c = Coord::new(x, y);
            if board.cell_at(c).is_ok_and(|mark| !mark.is_resolved()) {
                set.insert(c);
            }
        }
    }
    set
}
