//! Combat constants - all tunable values in one place
//!
//! Damage is integer; crits and the heavy skills scale it by whole
//! multipliers. Crit chances are whole percentages.

// Basic attack
pub const CRIT_CHANCE_PER_LUCK: u32 = 3;
pub const ASSASSIN_CRIT_CHANCE_PER_LUCK: u32 = 6;
pub const MAX_CRIT_CHANCE: u32 = 75;
pub const CRIT_MULTIPLIER: i32 = 2;

// Defend
pub const DEFEND_RECOVERY: i32 = 10;
pub const TANK_DEFEND_BONUS: i32 = 10;
pub const HEALER_DEFEND_HEAL: i32 = 8;

// Player skills
pub const MEND_BASE_HEAL: i32 = 25;
pub const REGENERATION_HEAL: i32 = 10;
pub const REGENERATION_ROUNDS: u32 = 3;
pub const FORTIFIED_ROUNDS: u32 = 2;
pub const ARCANE_SHATTER_MULTIPLIER: i32 = 2;
pub const BACKSTAB_MULTIPLIER: i32 = 2;

// Enemy techniques
pub const POISON_DAMAGE: i32 = 4;
pub const POISON_ROUNDS: u32 = 3;
pub const DREAD_AURA_ATTACK_LOSS: i32 = 3;
pub const MIN_ATTACK_POINTS: i32 = 1;
pub const MIST_VEIL_RECOVERY: i32 = 15;

/// Crit chance in percent for a given luck and per-luck rate
pub fn crit_chance(luck: i32, per_luck: u32) -> u32 {
    (luck.max(0) as u32)
        .saturating_mul(per_luck)
        .min(MAX_CRIT_CHANCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crit_chance_scales_and_caps() {
        assert_eq!(crit_chance(0, CRIT_CHANCE_PER_LUCK), 0);
        assert_eq!(crit_chance(5, CRIT_CHANCE_PER_LUCK), 15);
        assert_eq!(crit_chance(100, ASSASSIN_CRIT_CHANCE_PER_LUCK), MAX_CRIT_CHANCE);
        assert_eq!(crit_chance(-4, CRIT_CHANCE_PER_LUCK), 0);
    }

    #[test]
    fn test_assassin_crits_more_often() {
        assert!(ASSASSIN_CRIT_CHANCE_PER_LUCK > CRIT_CHANCE_PER_LUCK);
        assert!(CRIT_MULTIPLIER > 1);
    }
}
