//! Arena Tactics - demo runner
//!
//! Drives the agent against a scripted adversary and prints either a short
//! summary or every issued command as JSON lines.

use std::path::PathBuf;

use arena_tactics::core::config::{load_config, AgentConfig};
use arena_tactics::core::error::Result;
use arena_tactics::sim::ScriptedArena;
use arena_tactics::tactics::CombatStance;
use arena_tactics::Agent;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "arena-tactics")]
#[command(about = "Run the tactical agent against a scripted adversary")]
struct Args {
    /// Number of ticks to simulate
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Random seed; overrides the one in the config
    #[arg(long)]
    seed: Option<u64>,

    /// Agent config (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print every tick as a JSON line instead of a summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arena_tactics=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => AgentConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let mut arena = ScriptedArena::demo(config.seed);
    let mut agent = Agent::new(config, arena.map().clone())?;

    let mut failure = None;
    let summary = arena.run(&mut agent, args.ticks, |record| {
        if args.json && failure.is_none() {
            match serde_json::to_string(record) {
                Ok(line) => println!("{line}"),
                Err(e) => failure = Some(e),
            }
        }
    });
    if let Some(e) = failure {
        return Err(e.into());
    }

    if !args.json {
        println!("=== ARENA TACTICS ===");
        println!("Ticks:   {}", summary.ticks);
        println!("Kills:   {}", summary.kills);
        println!("Deaths:  {}", summary.deaths);
        println!("Pickups: {}", summary.pickups);
        println!();
        for stance in CombatStance::ALL {
            let ticks = summary.stance_ticks[stance.index()];
            let share = ticks as f64 * 100.0 / summary.ticks.max(1) as f64;
            println!("  {stance:<8} {ticks:>6} ticks ({share:5.1}%)");
        }
    }

    Ok(())
}
