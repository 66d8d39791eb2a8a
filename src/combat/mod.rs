//! Turn-based combat: session state machine, enemy policy and encounter driver

pub mod action;
pub mod constants;
pub mod driver;
pub mod log;
pub mod policy;
pub mod resolution;
pub mod session;

pub use action::{ActionError, EnemyAction, PlayerAction};
pub use driver::{
    run_encounter, run_encounter_for, AutoPilot, CombatantSummary, EncounterOutcome,
    EncounterReport, PlayerChoice, PlayerController,
};
pub use log::{BattleLog, LogEntry};
pub use policy::{EnemyPolicy, ScriptedPolicy, WeightedPolicy};
pub use session::{ActionResult, CombatSession};
