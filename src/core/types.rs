//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// One of the two opposing rosters in an encounter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    /// The side that is idle while this one acts
    pub fn opponent(&self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Enemy => write!(f, "enemy"),
        }
    }
}

/// Encounter state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BattleStatus {
    #[default]
    Ongoing,
    PlayerWon,
    EnemyWon,
}

impl BattleStatus {
    pub fn is_ongoing(&self) -> bool {
        matches!(self, BattleStatus::Ongoing)
    }

    /// Winning side, if the encounter has ended
    pub fn winner(&self) -> Option<Side> {
        match self {
            BattleStatus::Ongoing => None,
            BattleStatus::PlayerWon => Some(Side::Player),
            BattleStatus::EnemyWon => Some(Side::Enemy),
        }
    }
}
