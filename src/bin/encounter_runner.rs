//! Headless Encounter Runner
//!
//! Plays one encounter with the autopilot and prints the report.

use catastrophe_chronicles::combat::{run_encounter_for, AutoPilot, CombatSession, WeightedPolicy};
use catastrophe_chronicles::core::error::Result;
use catastrophe_chronicles::core::GameConfig;
use catastrophe_chronicles::entity::StatTable;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Headless Encounter Runner - autopilot vs enemy policy
#[derive(Parser, Debug)]
#[command(name = "encounter_runner")]
#[command(about = "Run one auto-played encounter and print the report")]
struct Args {
    /// Party members, comma separated
    #[arg(long, value_delimiter = ',', default_value = "Whiskerwall,Purrception,Meowdicine")]
    party: Vec<String>,

    /// Enemies in order of appearance, comma separated
    #[arg(long, value_delimiter = ',', default_value = "Viperstrike")]
    enemies: Vec<String>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum rounds before the encounter is called unfinished
    #[arg(long, default_value_t = 500)]
    max_rounds: u32,

    /// Stat table to use instead of the built-in roster
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Game configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("catastrophe_chronicles=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let table = match &args.roster {
        Some(path) => StatTable::load(path)?,
        None => StatTable::builtin()?,
    };

    let seed = args.seed.or(config.combat.seed).unwrap_or_else(rand::random);
    tracing::info!(seed, party = ?args.party, enemies = ?args.enemies, "Running encounter");

    let mut session = CombatSession::new(table.party(&args.party)?, table.enemy_group(&args.enemies)?)?
        .with_config(config.combat.clone())
        .with_policy(WeightedPolicy::new(config.policy.clone()))
        .with_seed(seed);

    let report = run_encounter_for(&mut session, &mut AutoPilot, Some(args.max_rounds))?;

    match args.format.as_str() {
        "text" => {
            println!("Encounter Result");
            println!("================");
            println!("Seed: {}", seed);
            println!("Outcome: {:?}", report.outcome);
            println!("Rounds: {}", report.rounds);
            println!(
                "Actions: {} player, {} enemy ({} refused)",
                report.player_actions, report.enemy_actions, report.refusals
            );
            println!();
            for member in report.party.iter().chain(report.enemies.iter()) {
                println!(
                    "  {:<12} {:>4}/{:<4} {}",
                    member.name,
                    member.health_points,
                    member.max_health_points,
                    if member.alive { "" } else { "(defeated)" }
                );
            }
            println!();
            println!("Final log:");
            for entry in &report.log {
                println!("  [R{}] {}", entry.round, entry.message);
            }
        }
        _ => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
