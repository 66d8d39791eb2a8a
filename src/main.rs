//! CATastrophe Chronicles - Entry Point
//!
//! Loads the roster and configuration, then plays the scene script in the
//! terminal.

use std::io;
use std::path::PathBuf;

use catastrophe_chronicles::campaign::{Campaign, CampaignOutcome};
use catastrophe_chronicles::core::error::{GameError, Result};
use catastrophe_chronicles::core::GameConfig;
use catastrophe_chronicles::entity::StatTable;
use catastrophe_chronicles::ui::TerminalUi;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Turn-based party combat in the terminal
#[derive(Parser, Debug)]
#[command(name = "catastrophe-chronicles")]
#[command(about = "Lead a party of cats through the CATastrophe Chronicles")]
struct Args {
    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Stat table to use instead of the built-in roster
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Game configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Do not clear the screen between views
    #[arg(long)]
    no_clear: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Warnings only by default so menus stay readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("catastrophe_chronicles=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if args.seed.is_some() {
        config.combat.seed = args.seed;
    }

    let table = match &args.roster {
        Some(path) => StatTable::load(path)?,
        None => StatTable::builtin()?,
    };
    tracing::info!(
        characters = table.characters().len(),
        enemies = table.enemies().len(),
        "Roster loaded"
    );

    let stdin = io::stdin();
    let mut terminal = TerminalUi::new(stdin.lock(), io::stdout()).with_clear_screen(!args.no_clear);
    let mut campaign = Campaign::new(table, config);

    match campaign.run(&mut terminal) {
        Ok(CampaignOutcome::Victory) => println!("\nThanks for playing!"),
        Ok(CampaignOutcome::Defeat) => println!("\nGAME OVER"),
        Ok(CampaignOutcome::Retreated) => println!("\nThe party heads home."),
        Err(GameError::InputClosed) => println!("\nGoodbye!"),
        Err(e) => return Err(e),
    }
    Ok(())
}
