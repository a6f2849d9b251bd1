//! Console front end: coordinate parsing, board rendering, the interactive
//! session and computer-versus-computer simulation.

#![cfg(feature = "std")]

pub mod console;
pub mod parse;
pub mod render;
pub mod sim;

pub use console::Console;
pub use parse::{coord_to_string, parse_coord, parse_ship};
pub use render::{board_lines, glyph, render_board, render_pair};
pub use sim::{simulate, simulate_game, SimReport};

use std::time::Duration;

use crate::config::PlacementConfig;

/// Greeting shown before the first game.
pub const RULES: &str = "\
Sea Battle: you against the computer on a 6x6 grid.
Columns are A-F, rows 1-6. Each fleet has one 3-cell ship, two 2-cell ships
and four 1-cell ships; ships lie in a row or column and never touch.
Take turns shooting; a hit or a sink earns another shot.
Sink the whole enemy fleet first to win.
Marks: ■ ship, ✹ hit, X sunk, T miss.";

/// Settings for one console session.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Text printed when the session starts.
    pub rules: &'static str,
    /// Generate the player's fleet instead of asking for it.
    pub random_fleet: bool,
    /// Show the computer's ships.
    pub reveal: bool,
    /// Pause before each computer shot.
    pub delay: Duration,
    pub placement: PlacementConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rules: RULES,
            random_fleet: false,
            reveal: false,
            delay: Duration::from_millis(500),
            placement: PlacementConfig::default(),
        }
    }
}
