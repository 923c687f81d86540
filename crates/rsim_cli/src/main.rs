//! rsim CLI
//!
//! Headless match runner:
//! - `run`   one match, JSON summary on stdout
//! - `batch` many seeds of one pairing, CSV + JSON summary
//! - `sweep` every composition pairing

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use rsim_core::engine::config::{MatchConfig, SquadConfig};
#[cfg(feature = "cli")]
use rsim_core::engine::match_sim::{EventRecorder, Match};
#[cfg(feature = "cli")]
use rsim_core::engine::physics_constants::match_rules;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "rsim")]
#[command(about = "Run robot soccer matches headless", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct EngineArgs {
    /// Tuning preset: realistic, arcade or test
    #[arg(long)]
    profile: Option<String>,

    /// Engine tuning JSON file (overrides --profile)
    #[arg(long)]
    engine: Option<PathBuf>,

    /// Match length in seconds
    #[arg(long, default_value_t = match_rules::DURATION_S)]
    duration: f32,
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct SquadArgs {
    /// Red defenders (the rest of the squad are attackers)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=3))]
    red_defenders: u8,

    /// Blue defenders (the rest of the squad are attackers)
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(0..=3))]
    blue_defenders: u8,
}

#[cfg(feature = "cli")]
impl SquadArgs {
    fn squads(&self) -> (SquadConfig, SquadConfig) {
        let squad = |d: u8| SquadConfig::new(d, match_rules::SQUAD_SIZE.saturating_sub(d));
        (squad(self.red_defenders), squad(self.blue_defenders))
    }
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Play a single match
    Run {
        #[command(flatten)]
        squads: SquadArgs,

        #[command(flatten)]
        engine: EngineArgs,

        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Include the event stream in the output
        #[arg(long, default_value = "false")]
        events: bool,
    },

    /// Play many seeds of one pairing
    Batch {
        #[command(flatten)]
        squads: SquadArgs,

        #[command(flatten)]
        engine: EngineArgs,

        #[arg(long, default_value_t = 100)]
        games: u32,

        /// Seed of game 1; game n uses seed + n - 1
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Per-game CSV output
        #[arg(long)]
        out: Option<PathBuf>,

        /// Batch summary JSON output
        #[arg(long)]
        summary: Option<PathBuf>,
    },

    /// Play every composition pairing
    Sweep {
        #[command(flatten)]
        engine: EngineArgs,

        /// Games per pairing
        #[arg(long, default_value_t = 20)]
        games: u32,

        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Sweep table CSV output
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { squads, engine, seed, events } => {
            let (red, blue) = squads.squads();
            let config = MatchConfig::new(red, blue)
                .with_seed(seed)
                .with_duration(engine.duration)
                .with_engine(load_engine(&engine)?);

            let mut sim = Match::new(config)?;
            let mut recorder = EventRecorder::default();
            let summary = sim.run_with(&mut recorder);

            let output = if events {
                serde_json::json!({ "summary": summary, "events": recorder.events })
            } else {
                serde_json::to_value(&summary)?
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        Commands::Batch { squads, engine, games, seed, out, summary } => {
            let (red, blue) = squads.squads();
            println!("Running {} games: Red {} vs Blue {}", games, label(red), label(blue));

            let settings = settings(&engine, games, seed)?;
            let report = rsim_cli::run_batch(red, blue, &settings)?;
            print_batch(&report.summary);

            if let Some(path) = out {
                rsim_cli::write_csv(&path, &report.games)?;
                println!("\nGames written to: {}", path.display());
            }
            if let Some(path) = summary {
                rsim_cli::write_json(&path, &report)?;
                println!("Summary written to: {}", path.display());
            }
        }

        Commands::Sweep { engine, games, seed, out } => {
            if games == 0 {
                anyhow::bail!("--games must be at least 1");
            }
            let settings = settings(&engine, games, seed)?;
            let rows = rsim_cli::run_sweep(&settings)?;

            println!("{:>6} {:>6} {:>7} {:>7} {:>7}", "red", "blue", "red%", "blue%", "draw%");
            for row in &rows {
                let pct = |n: u32| n as f64 / row.games as f64 * 100.0;
                println!(
                    "{:>6} {:>6} {:>6.1}% {:>6.1}% {:>6.1}%",
                    format!("{}D{}A", row.red_defenders, row.red_attackers),
                    format!("{}D{}A", row.blue_defenders, row.blue_attackers),
                    pct(row.red_wins),
                    pct(row.blue_wins),
                    pct(row.draws)
                );
            }

            if let Some(path) = out {
                rsim_cli::write_csv(&path, &rows)?;
                println!("\nSweep written to: {}", path.display());
            }
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn load_engine(args: &EngineArgs) -> Result<rsim_core::EngineConfig> {
    rsim_cli::load_engine(args.engine.as_deref(), args.profile.as_deref())
}

#[cfg(feature = "cli")]
fn settings(args: &EngineArgs, games: u32, base_seed: u64) -> Result<rsim_cli::BatchSettings> {
    Ok(rsim_cli::BatchSettings { games, base_seed, duration_s: args.duration, engine: load_engine(args)? })
}

#[cfg(feature = "cli")]
fn label(squad: SquadConfig) -> String {
    format!("{}D{}A", squad.defenders, squad.attackers)
}

#[cfg(feature = "cli")]
fn print_batch(summary: &rsim_cli::BatchSummary) {
    println!("\nResults over {} games", summary.total_games);
    println!("   Red wins:  {:>4} ({:.1}%)", summary.red_wins, summary.percent(summary.red_wins));
    println!("   Blue wins: {:>4} ({:.1}%)", summary.blue_wins, summary.percent(summary.blue_wins));
    println!("   Draws:     {:>4} ({:.1}%)", summary.draws, summary.percent(summary.draws));
    println!("   Avg score: {:.2} - {:.2}", summary.average_red_score, summary.average_blue_score);
    println!("   Avg collisions: {:.1}", summary.average_collisions);
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("rsim CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
