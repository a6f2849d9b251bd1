//! Ships: straight runs of one to three cells with per-segment hit tracking.

use core::fmt;

use crate::cell::{Cell, Coord, Mark};
use crate::common::BoardError;
use crate::config::MAX_SHIP_LENGTH;

/// Orientation of a ship on the board. Single-cell ships report `Horizontal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// What a registered hit did to the ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strike {
    /// Segment burned, ship still afloat.
    Damaged,
    /// Last segment hit; every segment is now `Killed`.
    Sunk,
}

/// A ship between two endpoints, holding its segments and remaining lives.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    segments: [Cell; MAX_SHIP_LENGTH],
    length: usize,
    lives: usize,
}

impl Ship {
    /// Build a ship from `begin` to `end` (inclusive); `None` makes a
    /// single-cell ship at `begin`.
    ///
    /// Endpoints must share a row or column and span at most three cells.
    /// Bounds are not checked here; the board does that on placement.
    pub fn new(begin: Coord, end: Option<Coord>) -> Result<Self, BoardError> {
        let end = end.unwrap_or(begin);
        if begin.x != end.x && begin.y != end.y {
            return Err(BoardError::InvalidShipShape);
        }
        let length = begin.x.abs_diff(end.x).max(begin.y.abs_diff(end.y)) + 1;
        if length > MAX_SHIP_LENGTH {
            return Err(BoardError::InvalidShipShape);
        }

        let blank = Cell::new(begin, Mark::Ship);
        let mut segments = [blank; MAX_SHIP_LENGTH];
        match length {
            1 => {}
            2 => segments[1] = Cell::new(end, Mark::Ship),
            _ => {
                let mid = Coord::new(
                    begin.x.min(end.x) + begin.x.abs_diff(end.x) / 2,
                    begin.y.min(end.y) + begin.y.abs_diff(end.y) / 2,
                );
                segments[1] = Cell::new(mid, Mark::Ship);
                segments[2] = Cell::new(end, Mark::Ship);
            }
        }

        Ok(Ship {
            segments,
            length,
            lives: length,
        })
    }

    /// Number of cells the ship occupies.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Segments not yet hit.
    pub fn lives(&self) -> usize {
        self.lives
    }

    pub fn is_sunk(&self) -> bool {
        self.lives == 0
    }

    /// First endpoint.
    pub fn begin(&self) -> Coord {
        self.segments[0].coord
    }

    /// Second endpoint; equals `begin` for single-cell ships.
    pub fn end(&self) -> Coord {
        self.segments[self.length - 1].coord
    }

    pub fn orientation(&self) -> Orientation {
        if self.begin().x == self.end().x && self.length > 1 {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }

    /// Segments in order begin → midpoint → end.
    pub fn segments(&self) -> &[Cell] {
        &self.segments[..self.length]
    }

    /// Occupied coordinates in order begin → midpoint → end.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.segments().iter().map(|cell| cell.coord)
    }

    /// Position of `coord` among the segments.
    pub fn segment_index(&self, coord: Coord) -> Option<usize> {
        self.occupied_cells().position(|c| c == coord)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.segment_index(coord).is_some()
    }

    /// Mark of the segment at `index`.
    pub fn mark_at(&self, index: usize) -> Option<Mark> {
        self.segments().get(index).map(|cell| cell.mark)
    }

    /// Record a hit on the segment at `coord`.
    ///
    /// A segment can burn only once; hitting it again fails with
    /// `AlreadyStruck` and changes nothing.
    pub fn register_hit(&mut self, coord: Coord) -> Result<Strike, BoardError> {
        let idx = self.segment_index(coord).ok_or(BoardError::NotOnShip)?;
        if matches!(self.segments[idx].mark, Mark::Burn | Mark::Killed) {
            return Err(BoardError::AlreadyStruck);
        }
        self.segments[idx].mark = Mark::Burn;
        self.lives -= 1;
        if self.lives > 0 {
            return Ok(Strike::Damaged);
        }
        for cell in self.segments[..self.length].iter_mut() {
            cell.mark = Mark::Killed;
        }
        Ok(Strike::Sunk)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ begin: {}, end: {}, length: {}, lives: {} }}",
            self.begin(),
            self.end(),
            self.length,
            self.lives,
        )
    }
}
