#![cfg_attr(not(feature = "std"), no_std)]

mod ai;
mod bitboard;
mod board;
mod cell;
mod common;
mod config;
mod game;
mod placement;
mod ship;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
mod logging;

pub use ai::*;
pub use bitboard::{BitBoard, BitBoardError, Members};
pub use board::*;
pub use cell::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use placement::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use logging::{format_line, init_logging, level_from, short_target, LOG_ENV};
