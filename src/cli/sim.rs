//! Computer-versus-computer games for gauging the targeting engine.

use std::fmt;

use anyhow::bail;
use rand::Rng;

use crate::ai::TargetingEngine;
use crate::config::PlacementConfig;
use crate::game::{GameEngine, GameStatus, Side};
use crate::placement::random_fleet;

/// Engine steps after which a game is considered stuck.
const MAX_VOLLEYS: usize = 10_000;

/// Totals over a batch of simulated games.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimReport {
    pub games: usize,
    pub first_wins: usize,
    pub second_wins: usize,
    /// Shots fired by the winner, summed over all games.
    pub winning_shots: usize,
}

impl SimReport {
    /// Average number of shots the winner needed.
    pub fn average_shots(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.winning_shots as f64 / self.games as f64
        }
    }
}

impl fmt::Display for SimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "games: {}, first engine wins: {}, second engine wins: {}, average winning shots: {:.1}",
            self.games,
            self.first_wins,
            self.second_wins,
            self.average_shots()
        )
    }
}

/// Play one game between two engines, the first moving first.
pub fn simulate_game<R: Rng + ?Sized>(
    rng: &mut R,
    placement: PlacementConfig,
) -> anyhow::Result<GameEngine> {
    let first = random_fleet(rng, placement)?;
    let second = random_fleet(rng, placement)?;
    let mut game = GameEngine::new(first, second)?;
    let mut engines = [TargetingEngine::new(), TargetingEngine::new()];

    for _ in 0..MAX_VOLLEYS {
        if game.status() != GameStatus::InProgress {
            return Ok(game);
        }
        let engine = match game.turn() {
            Side::Player => &mut engines[0],
            Side::Computer => &mut engines[1],
        };
        game.volley(engine, rng)?;
    }
    bail!("game did not finish within {} volleys", MAX_VOLLEYS)
}

/// Play `games` games and tally the results.
pub fn simulate<R: Rng + ?Sized>(
    rng: &mut R,
    games: usize,
    placement: PlacementConfig,
) -> anyhow::Result<SimReport> {
    let mut report = SimReport::default();
    for i in 0..games {
        let game = simulate_game(rng, placement)?;
        let winner = match game.status() {
            GameStatus::Won => Side::Player,
            GameStatus::Lost => Side::Computer,
            GameStatus::InProgress => bail!("game {} ended without a winner", i),
        };
        match winner {
            Side::Player => report.first_wins += 1,
            Side::Computer => report.second_wins += 1,
        }
        report.winning_shots += game.shots_fired(winner);
        report.games += 1;
        log::info!("game {}: {:?} won after {} shots", i, winner, game.shots_fired(winner));
    }
    Ok(report)
}
