//! Combatants: shared stat block, player classes and enemies

pub mod class;
pub mod enemy;
pub mod player;
pub mod roster;
pub mod stats;

pub use class::JobClass;
pub use enemy::EnemyCharacter;
pub use player::PlayerCharacter;
pub use roster::StatTable;
pub use stats::{BaseStats, HitReport, StatBlock};

use crate::skills::EffectKind;

/// Capability interface shared by every combatant
pub trait Combatant {
    fn stats(&self) -> &StatBlock;

    fn stats_mut(&mut self) -> &mut StatBlock;

    fn name(&self) -> &str {
        &self.stats().name
    }

    fn is_alive(&self) -> bool {
        self.stats().is_alive()
    }

    /// Take an incoming hit
    fn receive_hit(&mut self, damage: i32) -> HitReport {
        self.stats_mut().absorb_hit(damage)
    }

    /// Apply a status effect; false if this combatant cannot carry effects
    fn apply_effect(&mut self, _kind: EffectKind) -> bool {
        false
    }
}
