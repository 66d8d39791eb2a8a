//! Actions the two sides can take and the reasons an action is refused

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A player command for the active character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAction {
    Attack,
    Defend,
    /// Skill slot on the active character
    UseSkill(usize),
    /// Roster index to make active
    SwitchCharacter(usize),
}

/// Action descriptor chosen by an enemy policy
///
/// The session validates and executes it; choosing never mutates anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyAction {
    Attack,
    Defend,
    Technique,
}

/// Refusal of a command; the session state is left untouched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("Not enough magic points! {skill} needs {required}, only {available} left.")]
    NotEnoughMagic {
        skill: &'static str,
        required: i32,
        available: i32,
    },

    #[error("Not enough speed points! {skill} needs {required}, only {available} left.")]
    NotEnoughSpeed {
        skill: &'static str,
        required: i32,
        available: i32,
    },

    #[error("No skill in slot {0}")]
    InvalidSkill(usize),

    #[error("No character at position {0}")]
    InvalidCharacter(usize),

    #[error("{0} is defeated and can't be chosen!")]
    CharacterDefeated(String),

    #[error("{0} is already in the fight")]
    AlreadyActive(String),

    #[error("The battle is over")]
    BattleOver,
}

impl ActionError {
    /// Whether the actor may simply choose again
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ActionError::BattleOver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refusal_messages() {
        let err = ActionError::NotEnoughMagic {
            skill: "Mend",
            required: 4,
            available: 2,
        };
        assert!(err.to_string().starts_with("Not enough magic points!"));
        assert_eq!(
            ActionError::CharacterDefeated("Shadowpaw".into()).to_string(),
            "Shadowpaw is defeated and can't be chosen!"
        );
    }

    #[test]
    fn test_only_battle_over_is_final() {
        assert!(ActionError::InvalidSkill(4).is_recoverable());
        assert!(ActionError::AlreadyActive("Whiskerwall".into()).is_recoverable());
        assert!(!ActionError::BattleOver.is_recoverable());
    }
}
