//! Encounter driver: runs rounds until the battle ends
//!
//! A refused player action retries the same round with the refusal handed
//! back to the controller; turn order is not re-rolled.

use serde::Serialize;

use crate::combat::action::{ActionError, PlayerAction};
use crate::combat::log::LogEntry;
use crate::combat::session::CombatSession;
use crate::core::error::Result;
use crate::core::types::{BattleStatus, Side};
use crate::entity::Combatant;
use crate::skills::SkillId;

/// What the player wants to do on their turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerChoice {
    Act(PlayerAction),
    /// Abandon the encounter
    Retreat,
}

/// Source of player decisions (a terminal, a script, an autopilot)
pub trait PlayerController {
    /// Pick the active character's action
    ///
    /// `refusal` holds the reason the previous pick this round was refused.
    fn choose_action(
        &mut self,
        session: &CombatSession,
        refusal: Option<&ActionError>,
    ) -> Result<PlayerChoice>;

    /// Notified after every resolved action of either side
    fn observe(&mut self, _session: &CombatSession, _line: &str) -> Result<()> {
        Ok(())
    }
}

/// How an encounter finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EncounterOutcome {
    PlayerWon,
    EnemyWon,
    Retreated,
    /// Round limit reached with both sides standing
    Unfinished,
}

impl From<BattleStatus> for EncounterOutcome {
    fn from(status: BattleStatus) -> Self {
        match status {
            BattleStatus::PlayerWon => EncounterOutcome::PlayerWon,
            BattleStatus::EnemyWon => EncounterOutcome::EnemyWon,
            BattleStatus::Ongoing => EncounterOutcome::Unfinished,
        }
    }
}

/// Snapshot of one combatant after the encounter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombatantSummary {
    pub name: String,
    pub health_points: i32,
    pub max_health_points: i32,
    pub alive: bool,
}

impl CombatantSummary {
    fn of(combatant: &dyn Combatant) -> Self {
        let stats = combatant.stats();
        Self {
            name: stats.name.clone(),
            health_points: stats.health_points,
            max_health_points: stats.max_health_points,
            alive: stats.is_alive(),
        }
    }
}

/// Result of a driven encounter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncounterReport {
    pub outcome: EncounterOutcome,
    pub rounds: u32,
    /// Actions accepted for each side
    pub player_actions: u32,
    pub enemy_actions: u32,
    /// Refused player picks, retried within their round
    pub refusals: u32,
    pub party: Vec<CombatantSummary>,
    pub enemies: Vec<CombatantSummary>,
    /// Final contents of the battle log
    pub log: Vec<LogEntry>,
}

impl EncounterReport {
    pub fn player_won(&self) -> bool {
        self.outcome == EncounterOutcome::PlayerWon
    }
}

/// Drive `session` until one side is wiped out or the player retreats
pub fn run_encounter<C: PlayerController + ?Sized>(
    session: &mut CombatSession,
    controller: &mut C,
) -> Result<EncounterReport> {
    run_encounter_for(session, controller, None)
}

/// Like [`run_encounter`], stopping after `max_rounds` rounds when given
pub fn run_encounter_for<C: PlayerController + ?Sized>(
    session: &mut CombatSession,
    controller: &mut C,
    max_rounds: Option<u32>,
) -> Result<EncounterReport> {
    let mut player_actions = 0;
    let mut enemy_actions = 0;
    let mut refusals = 0;
    let mut retreated = false;

    while session.status().is_ongoing() {
        if max_rounds.is_some_and(|limit| session.round() >= limit) {
            tracing::warn!(rounds = session.round(), "Round limit reached");
            break;
        }

        match session.begin_round()? {
            Side::Player => {
                let mut refusal: Option<ActionError> = None;
                loop {
                    let action = match controller.choose_action(session, refusal.as_ref())? {
                        PlayerChoice::Act(action) => action,
                        PlayerChoice::Retreat => {
                            retreated = true;
                            break;
                        }
                    };
                    match session.apply_player_action(action) {
                        Ok(line) => {
                            player_actions += 1;
                            controller.observe(session, &line)?;
                            break;
                        }
                        Err(err) if err.is_recoverable() => {
                            tracing::debug!(?action, %err, "Player action refused, retrying round");
                            refusals += 1;
                            refusal = Some(err);
                        }
                        Err(err) => return Err(err.into()),
                    }
                }
                if retreated {
                    tracing::info!(round = session.round(), "Party retreated");
                    break;
                }
            }
            Side::Enemy => {
                let line = session.run_enemy_turn()?;
                enemy_actions += 1;
                controller.observe(session, &line)?;
            }
        }
    }

    let outcome = if retreated {
        EncounterOutcome::Retreated
    } else {
        session.status().into()
    };

    Ok(EncounterReport {
        outcome,
        rounds: session.round(),
        player_actions,
        enemy_actions,
        refusals,
        party: session
            .players()
            .iter()
            .map(|p| CombatantSummary::of(p))
            .collect(),
        enemies: session
            .enemies()
            .iter()
            .map(|e| CombatantSummary::of(e))
            .collect(),
        log: session.battle_log().iter().cloned().collect(),
    })
}

/// Health fraction below which the autopilot patches up
const LOW_HEALTH: f32 = 0.3;

/// Built-in controller for headless runs
///
/// Prefers an affordable damaging skill, heals or guards when hurt, and
/// otherwise attacks. Never switches characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoPilot;

impl PlayerController for AutoPilot {
    fn choose_action(
        &mut self,
        session: &CombatSession,
        refusal: Option<&ActionError>,
    ) -> Result<PlayerChoice> {
        // attacks are never refused
        if refusal.is_some() {
            return Ok(PlayerChoice::Act(PlayerAction::Attack));
        }

        let player = session.active_player();
        let affordable = |index: usize| {
            player
                .skill(index)
                .filter(|s| s.check_affordable(player.magic_points, player.stats.speed_points).is_ok())
        };
        let slots = 0..player.skills().count();

        if player.stats.health_ratio() < LOW_HEALTH {
            let mend = slots
                .clone()
                .find(|&i| affordable(i).is_some_and(|s| s.id == SkillId::Mend));
            if let Some(index) = mend {
                return Ok(PlayerChoice::Act(PlayerAction::UseSkill(index)));
            }
            if player.stats.defense_points == 0 {
                return Ok(PlayerChoice::Act(PlayerAction::Defend));
            }
        }

        if let Some(index) = slots.clone().find(|&i| affordable(i).is_some_and(|s| s.id.deals_damage()))
        {
            return Ok(PlayerChoice::Act(PlayerAction::UseSkill(index)));
        }

        Ok(PlayerChoice::Act(PlayerAction::Attack))
    }
}
