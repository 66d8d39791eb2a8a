//! Player-controlled characters

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::combat::resolution::{roll_attack, strike};
use crate::entity::stats::{BaseStats, HitReport, StatBlock};
use crate::entity::{Combatant, JobClass};
use crate::skills::{EffectKind, EffectSet, SkillDefinition, SkillId};

/// A member of the player's party
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCharacter {
    pub stats: StatBlock,
    pub magic_points: i32,
    pub job_class: JobClass,
    skills: [SkillId; 2],
    pub active_effects: EffectSet,
    base_magic: i32,
}

impl PlayerCharacter {
    pub fn new(name: impl Into<String>, job_class: JobClass, base: BaseStats, magic: i32) -> Self {
        Self {
            stats: StatBlock::new(name, base),
            magic_points: magic,
            job_class,
            skills: job_class.skills(),
            active_effects: EffectSet::new(),
            base_magic: magic,
        }
    }

    /// Skill in the given slot, if any
    pub fn skill(&self, index: usize) -> Option<&'static SkillDefinition> {
        self.skills.get(index).map(|id| id.definition())
    }

    pub fn skills(&self) -> impl Iterator<Item = &'static SkillDefinition> + '_ {
        self.skills.iter().map(|id| id.definition())
    }

    /// Class-flavoured basic attack
    pub fn basic_attack(&mut self, target: &mut dyn Combatant, rng: &mut dyn RngCore) -> String {
        let class = self.job_class;
        let base = self.stats.attack_points + class.attack_bonus(self.stats.luck);
        let roll = roll_attack(base, self.stats.luck, class.crit_chance_per_luck(), rng);
        strike(self, target, roll, "attacks")
    }

    /// Class-flavoured defend: recover defense, healers also patch up
    pub fn defend(&mut self) -> String {
        let class = self.job_class;
        let recovered = self.stats.recover_defense(class.defend_recovery(self.stats.luck));
        let healed = self.stats.heal(class.defend_heal());

        let mut line = format!(
            "{} braces and recovers {} defense points",
            self.stats.name, recovered
        );
        if healed > 0 {
            line.push_str(&format!(" and {} health points", healed));
        }
        line.push('.');
        line
    }

    /// Tick round-based effects during an idle update
    ///
    /// Returns a description when anything happened.
    pub fn tick_effects(&mut self) -> Option<String> {
        let tick = self.active_effects.tick();
        let healed = self.stats.heal(tick.healing);
        let lost = self.stats.pierce(tick.damage);

        let mut parts = Vec::new();
        if healed > 0 {
            parts.push(format!("regenerates {} health", healed));
        }
        if lost > 0 {
            parts.push(format!("loses {} health to poison", lost));
        }
        if parts.is_empty() {
            return None;
        }
        Some(format!("{} {}.", self.stats.name, parts.join(" and ")))
    }

    /// Reset stats, magic and effects to their initial state
    pub fn restore_stats(&mut self) {
        self.stats.restore();
        self.magic_points = self.base_magic;
        self.active_effects.clear();
    }

    pub fn base_magic(&self) -> i32 {
        self.base_magic
    }
}

impl Combatant for PlayerCharacter {
    fn stats(&self) -> &StatBlock {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut StatBlock {
        &mut self.stats
    }

    fn receive_hit(&mut self, damage: i32) -> HitReport {
        if self.active_effects.consume_charge(EffectKind::Evasion) {
            return HitReport {
                evaded: true,
                ..HitReport::default()
            };
        }

        let mut damage = damage.max(0);
        let mut reflected = 0;
        if self.active_effects.consume_charge(EffectKind::Reflect) {
            reflected = damage / 2;
            damage -= reflected;
        }
        if self.active_effects.has(EffectKind::Fortified) {
            damage -= damage / 2;
        }

        let mut report = self.stats.absorb_hit(damage);
        report.reflected = reflected;
        report
    }

    fn apply_effect(&mut self, kind: EffectKind) -> bool {
        self.active_effects.apply(kind);
        true
    }
}
