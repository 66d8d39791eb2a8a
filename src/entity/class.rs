//! Player job classes
//!
//! Each class owns a fixed pair of skills and flavours the basic attack and
//! defend formulas. Dispatch is a plain match so every class is handled
//! exhaustively.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::combat::constants::{
    ASSASSIN_CRIT_CHANCE_PER_LUCK, CRIT_CHANCE_PER_LUCK, DEFEND_RECOVERY, HEALER_DEFEND_HEAL,
    TANK_DEFEND_BONUS,
};
use crate::core::error::GameError;
use crate::skills::SkillId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobClass {
    Tank,
    MirrorMage,
    Healer,
    Assassin,
}

impl JobClass {
    pub const ALL: [JobClass; 4] = [
        JobClass::Tank,
        JobClass::MirrorMage,
        JobClass::Healer,
        JobClass::Assassin,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            JobClass::Tank => "Tank",
            JobClass::MirrorMage => "MirrorMage",
            JobClass::Healer => "Healer",
            JobClass::Assassin => "Assassin",
        }
    }

    /// The two skills every member of this class starts with
    pub fn skills(&self) -> [SkillId; 2] {
        match self {
            JobClass::Tank => [SkillId::IronWall, SkillId::ShieldBash],
            JobClass::MirrorMage => [SkillId::MirrorImage, SkillId::ArcaneShatter],
            JobClass::Healer => [SkillId::Mend, SkillId::Rejuvenate],
            JobClass::Assassin => [SkillId::ShadowStep, SkillId::Backstab],
        }
    }

    /// Crit chance in percent per point of luck
    pub fn crit_chance_per_luck(&self) -> u32 {
        match self {
            JobClass::Assassin => ASSASSIN_CRIT_CHANCE_PER_LUCK,
            _ => CRIT_CHANCE_PER_LUCK,
        }
    }

    /// Flat bonus added to the basic attack
    pub fn attack_bonus(&self, luck: i32) -> i32 {
        match self {
            JobClass::MirrorMage => luck.max(0) / 2,
            _ => 0,
        }
    }

    /// Defense points recovered by defending
    pub fn defend_recovery(&self, luck: i32) -> i32 {
        match self {
            JobClass::Tank => DEFEND_RECOVERY + TANK_DEFEND_BONUS,
            JobClass::MirrorMage => DEFEND_RECOVERY + luck.max(0),
            JobClass::Healer | JobClass::Assassin => DEFEND_RECOVERY,
        }
    }

    /// Health restored by defending
    pub fn defend_heal(&self) -> i32 {
        match self {
            JobClass::Healer => HEALER_DEFEND_HEAL,
            _ => 0,
        }
    }
}

impl std::fmt::Display for JobClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for JobClass {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "tank" => Ok(JobClass::Tank),
            "mirrormage" => Ok(JobClass::MirrorMage),
            "healer" => Ok(JobClass::Healer),
            "assassin" => Ok(JobClass::Assassin),
            _ => Err(GameError::UnknownClass(s.to_string())),
        }
    }
}
