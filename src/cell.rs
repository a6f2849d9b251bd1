//! Grid positions and their markings.

use core::fmt;

use crate::config::BOARD_SIZE;

/// Column/row position on the grid. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns `true` when the coordinate lies on the `BOARD_SIZE` grid.
    pub const fn in_bounds(&self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }

    /// Shift by (`dx`, `dy`), or `None` when that leaves the grid.
    pub fn offset(&self, dx: isize, dy: isize) -> Option<Coord> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        let c = Coord::new(x, y);
        c.in_bounds().then_some(c)
    }

    /// The up to four in-bounds orthogonal neighbours.
    pub fn orthogonal(self) -> impl Iterator<Item = Coord> {
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }

    /// The up to eight in-bounds cells of the surrounding ring.
    pub fn ring(self) -> impl Iterator<Item = Coord> {
        (-1isize..=1)
            .flat_map(|dy| (-1isize..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Coord::new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Every state a grid position can be shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mark {
    #[default]
    Empty,
    /// Buffer ring around a ship; advisory only.
    Contour,
    /// Unhit ship segment.
    Ship,
    /// Hit segment of a ship still afloat.
    Burn,
    /// Segment of a sunk ship.
    Killed,
    Miss,
}

impl Mark {
    /// `true` for marks left by a shot.
    pub const fn is_resolved(self) -> bool {
        matches!(self, Mark::Burn | Mark::Killed | Mark::Miss)
    }
}

/// A coordinate together with its current mark.
///
/// Equality looks at the coordinate only.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    pub coord: Coord,
    pub mark: Mark,
}

impl Cell {
    pub const fn new(coord: Coord, mark: Mark) -> Self {
        Self { coord, mark }
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Cell {}
