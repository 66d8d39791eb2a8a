//! Stat block shared by every combatant
//!
//! Health is clamped to `[0, max]` and defense to `[0, max]` after every
//! mutation. Intermediate arithmetic is free to go negative.

use serde::{Deserialize, Serialize};

/// Initial stat values, kept so stats can be restored between encounters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub health: i32,
    pub defense: i32,
    pub attack: i32,
    pub speed: i32,
    pub luck: i32,
}

/// Mutable combat stats of a single entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub name: String,
    pub health_points: i32,
    pub max_health_points: i32,
    pub defense_points: i32,
    pub max_defense_points: i32,
    pub attack_points: i32,
    pub speed_points: i32,
    pub luck: i32,
    base: BaseStats,
}

/// How an incoming hit was distributed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitReport {
    /// Damage soaked up by defense points
    pub absorbed: i32,
    /// Damage that reached health points
    pub health_lost: i32,
    /// Hit was evaded entirely
    pub evaded: bool,
    /// Damage bounced back onto the attacker
    pub reflected: i32,
}

impl HitReport {
    pub fn total(&self) -> i32 {
        self.absorbed + self.health_lost
    }
}

impl StatBlock {
    pub fn new(name: impl Into<String>, base: BaseStats) -> Self {
        let health = base.health.max(0);
        let defense = base.defense.max(0);
        Self {
            name: name.into(),
            health_points: health,
            max_health_points: health,
            defense_points: defense,
            max_defense_points: defense,
            attack_points: base.attack,
            speed_points: base.speed,
            luck: base.luck,
            base,
        }
    }

    pub fn base(&self) -> BaseStats {
        self.base
    }

    pub fn is_alive(&self) -> bool {
        self.health_points > 0
    }

    /// Re-establish the health and defense bounds
    pub fn clamp(&mut self) {
        self.health_points = self.health_points.clamp(0, self.max_health_points);
        self.defense_points = self.defense_points.clamp(0, self.max_defense_points);
    }

    /// Apply a hit: defense absorbs points-for-points, the excess spills to health
    pub fn absorb_hit(&mut self, amount: i32) -> HitReport {
        let amount = amount.max(0);
        let absorbed = amount.min(self.defense_points.max(0));
        let spill = amount - absorbed;
        let health_before = self.health_points;

        self.defense_points -= absorbed;
        self.health_points -= spill;
        self.clamp();

        HitReport {
            absorbed,
            health_lost: health_before - self.health_points,
            ..HitReport::default()
        }
    }

    /// Damage that bypasses defense; returns health actually lost
    pub fn pierce(&mut self, amount: i32) -> i32 {
        let before = self.health_points;
        self.health_points -= amount.max(0);
        self.clamp();
        before - self.health_points
    }

    /// Restore health up to the maximum; returns health actually gained
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.health_points;
        self.health_points += amount.max(0);
        self.clamp();
        self.health_points - before
    }

    /// Restore defense up to the maximum; returns defense actually gained
    pub fn recover_defense(&mut self, amount: i32) -> i32 {
        let before = self.defense_points;
        self.defense_points += amount.max(0);
        self.clamp();
        self.defense_points - before
    }

    /// Reset every stat to its initial value
    pub fn restore(&mut self) {
        let base = self.base;
        self.health_points = self.max_health_points;
        self.defense_points = self.max_defense_points;
        self.attack_points = base.attack;
        self.speed_points = base.speed;
        self.luck = base.luck;
    }

    /// Floor a defeated entity at exactly zero health
    pub fn mark_defeated(&mut self) {
        self.health_points = 0;
    }

    /// Health as a fraction of maximum
    pub fn health_ratio(&self) -> f32 {
        if self.max_health_points <= 0 {
            return 0.0;
        }
        self.health_points as f32 / self.max_health_points as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(health: i32, defense: i32) -> StatBlock {
        StatBlock::new(
            "Dummy",
            BaseStats {
                health,
                defense,
                attack: 10,
                speed: 5,
                luck: 0,
            },
        )
    }

    #[test]
    fn test_defense_absorbs_before_health() {
        let mut stats = block(100, 20);
        let report = stats.absorb_hit(15);
        assert_eq!(report.absorbed, 15);
        assert_eq!(report.health_lost, 0);
        assert_eq!(stats.defense_points, 5);
        assert_eq!(stats.health_points, 100);
    }

    #[test]
    fn test_excess_spills_into_health() {
        let mut stats = block(100, 20);
        let report = stats.absorb_hit(35);
        assert_eq!(report.absorbed, 20);
        assert_eq!(report.health_lost, 15);
        assert_eq!(stats.defense_points, 0);
        assert_eq!(stats.health_points, 85);
    }

    #[test]
    fn test_health_never_negative() {
        let mut stats = block(10, 0);
        let report = stats.absorb_hit(50);
        assert_eq!(stats.health_points, 0);
        assert_eq!(report.health_lost, 10);
        assert!(!stats.is_alive());
    }

    #[test]
    fn test_heal_capped_at_max() {
        let mut stats = block(100, 0);
        stats.pierce(30);
        assert_eq!(stats.heal(50), 30);
        assert_eq!(stats.health_points, 100);
    }

    #[test]
    fn test_negative_defense_floored() {
        let mut stats = block(100, 20);
        stats.defense_points = -7;
        stats.clamp();
        assert_eq!(stats.defense_points, 0);
    }

    #[test]
    fn test_restore_resets_everything() {
        let mut stats = block(100, 20);
        stats.absorb_hit(60);
        stats.attack_points = 2;
        stats.speed_points = 40;
        stats.restore();
        assert_eq!(stats.health_points, 100);
        assert_eq!(stats.defense_points, 20);
        assert_eq!(stats.attack_points, 10);
        assert_eq!(stats.speed_points, 5);
    }

    #[test]
    fn test_negative_hit_is_ignored() {
        let mut stats = block(100, 20);
        let report = stats.absorb_hit(-5);
        assert_eq!(report.total(), 0);
        assert_eq!(stats.health_points, 100);
    }
}
