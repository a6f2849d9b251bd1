//! Fixed rules of the classic 6×6 game and runtime placement knobs.

/// Side length of the square grid.
pub const BOARD_SIZE: usize = 6;
/// Longest ship allowed.
pub const MAX_SHIP_LENGTH: usize = 3;
/// Number of ships in a complete fleet.
pub const FLEET_SIZE: usize = 7;
/// Ship lengths in the order the random generator places them.
pub const FLEET_LENGTHS: [usize; FLEET_SIZE] = [3, 2, 2, 1, 1, 1, 1];
/// How many ships of each length a fleet holds, indexed by length.
pub const FLEET_QUOTA: [usize; MAX_SHIP_LENGTH + 1] = [0, 4, 2, 1];
/// Total number of ship segments in a complete fleet.
pub const TOTAL_SHIP_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Quota for ships of `length`, zero for lengths the fleet never uses.
pub fn quota_for(length: usize) -> usize {
    FLEET_QUOTA.get(length).copied().unwrap_or(0)
}

/// Bounds for the randomized fleet generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementConfig {
    /// Anchors tried for a single ship before the board is discarded.
    pub max_anchor_attempts: usize,
    /// Board resets tolerated before giving up.
    pub max_resets: usize,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            max_anchor_attempts: 100,
            max_resets: 1000,
        }
    }
}
