use rand::Rng;

use crate::{
    ai::{TargetingEngine, Turn},
    board::Board,
    cell::Coord,
    common::{BoardError, ShotResult},
};

/// One of the two fleets in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The human at the console.
    Player,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Computer => 1,
        }
    }
}

/// Current status of a game, seen from [`Side::Player`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Both boards plus whose turn it is.
///
/// A side keeps shooting after `Hit` and `Sunk`; the turn passes on a miss
/// or a wasted engine shot.
#[derive(Debug, Clone)]
pub struct GameEngine {
    boards: [Board; 2],
    turn: Side,
    shots: [usize; 2],
}

impl GameEngine {
    /// Start a game with the player to move. Both fleets must be complete.
    pub fn new(player: Board, computer: Board) -> Result<Self, BoardError> {
        if !player.is_fleet_complete() || !computer.is_fleet_complete() {
            return Err(BoardError::FleetIncomplete);
        }
        Ok(Self {
            boards: [player, computer],
            turn: Side::Player,
            shots: [0; 2],
        })
    }

    /// Side allowed to shoot next.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// The fleet belonging to `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// Shots `side` has fired so far, wasted ones included.
    pub fn shots_fired(&self, side: Side) -> usize {
        self.shots[side.index()]
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.board(Side::Player).all_sunk() {
            GameStatus::Lost
        } else if self.board(Side::Computer).all_sunk() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    fn ensure_running(&self, shooter: Side) -> Result<(), BoardError> {
        if self.status() != GameStatus::InProgress {
            return Err(BoardError::GameOver);
        }
        if shooter != self.turn {
            return Err(BoardError::NotYourTurn);
        }
        Ok(())
    }

    /// `shooter` fires at `coord` on the opposing board.
    ///
    /// Errors leave the turn where it was, so the shooter may pick another
    /// target.
    pub fn fire(&mut self, shooter: Side, coord: Coord) -> Result<ShotResult, BoardError> {
        self.ensure_running(shooter)?;
        let result = self.boards[shooter.opponent().index()].fire_at(coord)?;
        self.shots[shooter.index()] += 1;
        if result == ShotResult::Miss {
            self.turn = shooter.opponent();
        }
        Ok(result)
    }

    /// Let `engine` take one step for the side to move.
    pub fn volley<R: Rng + ?Sized>(
        &mut self,
        engine: &mut TargetingEngine,
        rng: &mut R,
    ) -> Result<Turn, BoardError> {
        let shooter = self.turn;
        self.ensure_running(shooter)?;
        let turn = engine.take_turn(&mut self.boards[shooter.opponent().index()], rng);
        if turn.shot.target().is_some() {
            self.shots[shooter.index()] += 1;
        }
        if !turn.continues {
            self.turn = shooter.opponent();
        }
        Ok(turn)
    }
}
