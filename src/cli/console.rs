//! Interactive session between a person at the console and the computer.

use std::io::{self, BufRead, Write};
use std::string::String;
use std::thread;

use anyhow::{bail, Context};
use rand::Rng;

use super::parse::{coord_to_string, parse_coord, parse_ship};
use super::render::{render_board, render_pair};
use super::SessionConfig;
use crate::ai::{Shot, TargetingEngine};
use crate::board::Board;
use crate::cell::Coord;
use crate::common::{BoardError, ShotResult};
use crate::config::{FLEET_QUOTA, FLEET_SIZE};
use crate::game::{GameEngine, GameStatus, Side};
use crate::placement::{complete_fleet, random_fleet, seal_fleet};
use crate::ship::Ship;

/// Console session over any line-based input and text output.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
    config: SessionConfig,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Session on the process's stdin/stdout.
    pub fn stdio(config: SessionConfig) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), config)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Hand back the output sink, e.g. to inspect what was written.
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> anyhow::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from console")?;
        if read == 0 {
            bail!("input closed");
        }
        Ok(line.trim().to_string())
    }

    /// Print the rules text.
    pub fn greet(&mut self) -> anyhow::Result<()> {
        let rules = self.config.rules;
        self.say(rules)
    }

    /// Ask yes/no; anything starting with `y` counts as yes.
    pub fn ask_play_again(&mut self) -> anyhow::Result<bool> {
        let answer = self.ask("\nPlay again? (y/n): ")?;
        Ok(answer.to_ascii_lowercase().starts_with('y'))
    }

    /// Build the player's fleet, either typed ship by ship or generated.
    pub fn setup_fleet<G: Rng + ?Sized>(&mut self, rng: &mut G) -> anyhow::Result<Board> {
        if self.config.random_fleet {
            let board = random_fleet(rng, self.config.placement)?;
            self.say(&render_board("Your fleet:", &board))?;
            return Ok(board);
        }

        let mut board = Board::new();
        while !board.is_fleet_complete() {
            self.say(&render_board("\nYour board:", &board))?;
            let remaining = remaining_summary(&board);
            let line = self.ask(&format!(
                "Ship {}/{} [{}] (e.g. A1 A3, B5; 'random' or 'help'): ",
                board.ship_count() + 1,
                FLEET_SIZE,
                remaining
            ))?;
            if line.eq_ignore_ascii_case("help") {
                self.say(PLACEMENT_HELP)?;
                continue;
            }
            if line.eq_ignore_ascii_case("random") {
                match complete_fleet(rng, board.clone(), self.config.placement) {
                    Ok(done) => {
                        board = done;
                        self.say("Remaining ships placed at random.")?;
                        break;
                    }
                    Err(e) => self.say(&format!("✗ {}. Keep placing by hand.", e))?,
                }
                continue;
            }
            let placed = parse_ship(&line)
                .map_err(PlacementFailure::Input)
                .and_then(|(begin, end)| {
                    Ship::new(begin, end)
                        .and_then(|ship| board.place_ship(ship))
                        .map_err(PlacementFailure::Rule)
                });
            match placed {
                Ok(id) => log::debug!("player placed ship #{}", id),
                Err(PlacementFailure::Input(e)) => self.say(&format!("✗ {}", e))?,
                Err(PlacementFailure::Rule(e)) => self.say(&format!("✗ {}. Try again.", e))?,
            }
        }
        seal_fleet(&mut board)?;
        self.say(&render_board("\nYour fleet is ready:", &board))?;
        Ok(board)
    }

    fn show(&mut self, game: &GameEngine) -> anyhow::Result<()> {
        let text = render_pair(
            "Your board",
            game.board(Side::Player),
            "Enemy board",
            game.board(Side::Computer),
        );
        self.say(&text)
    }

    /// Prompt until the player names a cell they have not shot at.
    fn prompt_target(&mut self) -> anyhow::Result<Coord> {
        loop {
            let line = self.ask("\nYour shot (e.g. C4): ")?;
            match parse_coord(&line) {
                Ok(c) => return Ok(c),
                Err(e) => self.say(&format!("✗ Invalid coordinate: {}", e))?,
            }
        }
    }

    /// The player shoots until they miss or the enemy fleet is gone.
    pub fn player_turn(&mut self, game: &mut GameEngine) -> anyhow::Result<()> {
        while game.turn() == Side::Player && game.status() == GameStatus::InProgress {
            self.show(game)?;
            let target = self.prompt_target()?;
            let at = coord_to_string(target);
            match game.fire(Side::Player, target) {
                Ok(ShotResult::Miss) => self.say(&format!("Miss at {}.", at))?,
                Ok(ShotResult::Hit) => self.say(&format!("Hit at {}! Shoot again.", at))?,
                Ok(ShotResult::Sunk(_)) => self.say(&format!("Sunk at {}! Shoot again.", at))?,
                Err(BoardError::AlreadyFired) => {
                    self.say(&format!("✗ You already fired at {}. Pick another cell.", at))?
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    /// The computer shoots until it misses or the player's fleet is gone.
    pub fn computer_turn<G: Rng + ?Sized>(
        &mut self,
        game: &mut GameEngine,
        engine: &mut TargetingEngine,
        rng: &mut G,
    ) -> anyhow::Result<()> {
        while game.turn() == Side::Computer && game.status() == GameStatus::InProgress {
            let turn = game.volley(engine, rng)?;
            let line = match turn.shot {
                Shot::NoShot => continue,
                Shot::Miss(c) => format!("Computer fires at {}: miss.", coord_to_string(c)),
                Shot::Hit(c) => format!("Computer fires at {}: hit!", coord_to_string(c)),
                Shot::Sunk(c, _) => {
                    format!("Computer fires at {}: your ship is sunk!", coord_to_string(c))
                }
                Shot::AlreadyFired(c) => {
                    format!("Computer fires at {} again and wastes the shot.", coord_to_string(c))
                }
            };
            if !self.config.delay.is_zero() {
                thread::sleep(self.config.delay);
            }
            self.say(&line)?;
        }
        Ok(())
    }

    /// Play one full game and report how it ended for the player.
    pub fn play_round<G: Rng + ?Sized>(&mut self, rng: &mut G) -> anyhow::Result<GameStatus> {
        let player = self.setup_fleet(rng)?;
        let computer = random_fleet(rng, self.config.placement)?.with_hidden(!self.config.reveal);
        let mut game = GameEngine::new(player, computer)?;
        let mut engine = TargetingEngine::new();

        while game.status() == GameStatus::InProgress {
            match game.turn() {
                Side::Player => self.player_turn(&mut game)?,
                Side::Computer => self.computer_turn(&mut game, &mut engine, rng)?,
            }
        }

        self.show(&game)?;
        let status = game.status();
        match status {
            GameStatus::Won => self.say(&format!(
                "You won in {} shots!",
                game.shots_fired(Side::Player)
            ))?,
            GameStatus::Lost => self.say(&format!(
                "The computer won in {} shots.",
                game.shots_fired(Side::Computer)
            ))?,
            GameStatus::InProgress => {}
        }
        Ok(status)
    }

    /// Greet, then play rounds until the player declines another.
    pub fn run<G: Rng + ?Sized>(&mut self, rng: &mut G) -> anyhow::Result<()> {
        self.greet()?;
        loop {
            self.play_round(rng)?;
            if !self.ask_play_again()? {
                return Ok(());
            }
        }
    }
}

enum PlacementFailure {
    Input(String),
    Rule(BoardError),
}

/// Ships still to place, e.g. `1x3 2x2 4x1`.
fn remaining_summary(board: &Board) -> String {
    (1..FLEET_QUOTA.len())
        .rev()
        .map(|len| (len, board.remaining_of_length(len)))
        .filter(|&(_, n)| n > 0)
        .map(|(len, n)| format!("{}x{}", n, len))
        .collect::<Vec<_>>()
        .join(" ")
}

const PLACEMENT_HELP: &str = "\
Enter the two ends of a ship, e.g. `A1 A3` or `B2-C2`, or a single cell
such as `E5` for a one-cell ship. Ships lie in one row or column and may not
touch each other, not even at a corner. The fleet is one 3-cell ship, two
2-cell ships and four 1-cell ships. Type `random` to place the ships still
missing automatically; the ones already on the board stay put.";
