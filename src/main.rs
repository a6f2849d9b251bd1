use std::time::Duration;

use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::cli::{simulate, Console, SessionConfig, RULES};
use sea_battle::{init_logging, PlacementConfig};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer at the console.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Place your fleet at random instead of typing it")]
        random_fleet: bool,
        #[arg(long, help = "Show the computer's ships")]
        reveal: bool,
        #[arg(long, default_value_t = 500, help = "Pause before each computer shot, in milliseconds")]
        delay_ms: u64,
    },
    /// Let two computer players fight and print statistics.
    Sim {
        #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 100)]
        games: usize,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (games will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            random_fleet,
            reveal,
            delay_ms,
        } => {
            let mut rng = make_rng(seed);
            let config = SessionConfig {
                rules: RULES,
                random_fleet,
                reveal,
                delay: Duration::from_millis(delay_ms),
                placement: PlacementConfig::default(),
            };
            Console::stdio(config).run(&mut rng)?;
        }
        Commands::Sim { seed, games } => {
            let mut rng = make_rng(seed);
            let report = simulate(&mut rng, games, PlacementConfig::default())?;
            println!("{}", report);
        }
    }
    Ok(())
}
