//! Game configuration with documented defaults
//!
//! Session-level knobs live here. Per-class combat formulas are tuned in
//! `combat::constants` instead.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{GameError, Result};

/// Configuration for a combat session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Number of battle log entries kept; older entries drop off the front
    pub battle_log_capacity: usize,

    /// Speed points gained by the idle character after each resolved turn
    pub speed_regen: i32,

    /// Magic points gained by an idle player character after each resolved turn
    pub magic_regen: i32,

    /// Seed for crit rolls, enemy choices and speed ties
    ///
    /// `None` draws a fresh seed per session.
    pub seed: Option<u64>,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            battle_log_capacity: 5,
            speed_regen: 1,
            magic_regen: 1,
            seed: None,
        }
    }
}

/// Weights for the default enemy policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Chance to use an affordable technique instead of a basic attack
    pub skill_chance: f64,

    /// Chance to defend when the enemy's own defense is fully depleted
    pub defend_chance: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            skill_chance: 0.35,
            defend_chance: 0.5,
        }
    }
}

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub combat: CombatConfig,
    pub policy: PolicyConfig,
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate().map_err(GameError::InvalidConfig)?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.combat.battle_log_capacity == 0 {
            return Err("battle_log_capacity must be at least 1".into());
        }

        if self.combat.speed_regen < 0 || self.combat.magic_regen < 0 {
            return Err(format!(
                "regeneration must not be negative (speed_regen {}, magic_regen {})",
                self.combat.speed_regen, self.combat.magic_regen
            ));
        }

        for (name, chance) in [
            ("skill_chance", self.policy.skill_chance),
            ("defend_chance", self.policy.defend_chance),
        ] {
            if !(0.0..=1.0).contains(&chance) {
                return Err(format!("{} ({}) must be within 0.0..=1.0", name, chance));
            }
        }

        Ok(())
    }
}
