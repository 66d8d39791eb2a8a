//! Enemy decision making
//!
//! A policy only picks an [`EnemyAction`]; the session checks costs and
//! executes it.

use rand::{Rng, RngCore};

use crate::combat::action::EnemyAction;
use crate::core::config::PolicyConfig;
use crate::entity::{EnemyCharacter, PlayerCharacter};

/// Chooses the active enemy's action each enemy turn
pub trait EnemyPolicy {
    fn select_action(
        &mut self,
        enemy: &EnemyCharacter,
        target: &PlayerCharacter,
        rng: &mut dyn RngCore,
    ) -> EnemyAction;
}

/// Default policy: shore up broken defenses, otherwise mix techniques into attacks
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedPolicy {
    config: PolicyConfig,
}

impl WeightedPolicy {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }
}

impl Default for WeightedPolicy {
    fn default() -> Self {
        Self::new(PolicyConfig::default())
    }
}

impl EnemyPolicy for WeightedPolicy {
    fn select_action(
        &mut self,
        enemy: &EnemyCharacter,
        _target: &PlayerCharacter,
        rng: &mut dyn RngCore,
    ) -> EnemyAction {
        if enemy.stats.defense_points == 0
            && enemy.stats.max_defense_points > 0
            && rng.gen_bool(self.config.defend_chance.clamp(0.0, 1.0))
        {
            return EnemyAction::Defend;
        }

        let affordable = enemy
            .technique()
            .is_some_and(|t| t.check_affordable(0, enemy.stats.speed_points).is_ok());
        if affordable && rng.gen_bool(self.config.skill_chance.clamp(0.0, 1.0)) {
            return EnemyAction::Technique;
        }

        EnemyAction::Attack
    }
}

/// Cycles through a fixed list of actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedPolicy {
    script: Vec<EnemyAction>,
    next: usize,
}

impl ScriptedPolicy {
    /// An empty script always attacks
    pub fn new(script: Vec<EnemyAction>) -> Self {
        Self { script, next: 0 }
    }
}

impl EnemyPolicy for ScriptedPolicy {
    fn select_action(
        &mut self,
        _enemy: &EnemyCharacter,
        _target: &PlayerCharacter,
        _rng: &mut dyn RngCore,
    ) -> EnemyAction {
        let Some(&action) = self.script.get(self.next) else {
            return EnemyAction::Attack;
        };
        self.next = (self.next + 1) % self.script.len();
        action
    }
}
