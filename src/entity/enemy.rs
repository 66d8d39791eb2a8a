//! Enemy combatants

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::combat::constants::{CRIT_CHANCE_PER_LUCK, DEFEND_RECOVERY};
use crate::combat::resolution::{roll_attack, strike};
use crate::entity::stats::{BaseStats, StatBlock};
use crate::entity::Combatant;
use crate::skills::{SkillDefinition, SkillId};

/// An enemy: a stat block and at most one technique
///
/// Enemies have no magic points; techniques cost speed points only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyCharacter {
    pub stats: StatBlock,
    technique: Option<SkillId>,
}

impl EnemyCharacter {
    pub fn new(name: impl Into<String>, base: BaseStats, technique: Option<SkillId>) -> Self {
        Self {
            stats: StatBlock::new(name, base),
            technique,
        }
    }

    pub fn technique(&self) -> Option<&'static SkillDefinition> {
        self.technique.map(|id| id.definition())
    }

    pub fn basic_attack(&mut self, target: &mut dyn Combatant, rng: &mut dyn RngCore) -> String {
        let roll = roll_attack(
            self.stats.attack_points,
            self.stats.luck,
            CRIT_CHANCE_PER_LUCK,
            rng,
        );
        strike(self, target, roll, "attacks")
    }

    pub fn defend(&mut self) -> String {
        let recovered = self.stats.recover_defense(DEFEND_RECOVERY);
        format!(
            "{} braces and recovers {} defense points.",
            self.stats.name, recovered
        )
    }
}

impl Combatant for EnemyCharacter {
    fn stats(&self) -> &StatBlock {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut StatBlock {
        &mut self.stats
    }
}
