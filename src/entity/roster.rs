//! Stat table: starting stats per named character and enemy
//!
//! The built-in table is embedded from `data/roster.toml`; a replacement
//! file can be loaded at runtime.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::core::error::{GameError, Result};
use crate::entity::stats::BaseStats;
use crate::entity::{EnemyCharacter, JobClass, PlayerCharacter};
use crate::skills::SkillId;

const BUILTIN_ROSTER: &str = include_str!("../../data/roster.toml");

/// Validated starting stats for a playable character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterEntry {
    pub name: String,
    pub job_class: JobClass,
    pub base: BaseStats,
    pub magic: i32,
}

/// Validated starting stats for an enemy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnemyEntry {
    pub name: String,
    pub base: BaseStats,
    pub technique: Option<SkillId>,
}

/// Lookup table of starting stats
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatTable {
    characters: Vec<CharacterEntry>,
    enemies: Vec<EnemyEntry>,
}

/// TOML representation of the roster file
#[derive(Debug, Deserialize)]
struct TomlRoster {
    #[serde(default)]
    characters: Vec<TomlCharacter>,
    #[serde(default)]
    enemies: Vec<TomlEnemy>,
}

#[derive(Debug, Deserialize)]
struct TomlCharacter {
    name: String,
    class: String,
    health: i32,
    defense: i32,
    attack: i32,
    speed: i32,
    #[serde(default)]
    luck: i32,
    magic: i32,
}

#[derive(Debug, Deserialize)]
struct TomlEnemy {
    name: String,
    health: i32,
    defense: i32,
    attack: i32,
    speed: i32,
    #[serde(default)]
    luck: i32,
    technique: Option<String>,
}

impl TomlCharacter {
    fn base(&self) -> BaseStats {
        BaseStats {
            health: self.health,
            defense: self.defense,
            attack: self.attack,
            speed: self.speed,
            luck: self.luck,
        }
    }
}

impl TomlEnemy {
    fn base(&self) -> BaseStats {
        BaseStats {
            health: self.health,
            defense: self.defense,
            attack: self.attack,
            speed: self.speed,
            luck: self.luck,
        }
    }
}

impl StatTable {
    /// The table shipped with the game
    pub fn builtin() -> Result<Self> {
        Self::parse_toml(BUILTIN_ROSTER)
    }

    /// Load a stat table from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse and validate a stat table from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self> {
        let roster: TomlRoster = toml::from_str(content)?;
        let mut seen = HashSet::new();

        let mut characters = Vec::with_capacity(roster.characters.len());
        for entry in roster.characters {
            if !seen.insert(entry.name.to_lowercase()) {
                return Err(GameError::DuplicateName(entry.name));
            }
            let job_class: JobClass = entry.class.parse()?;
            characters.push(CharacterEntry {
                base: entry.base(),
                name: entry.name,
                job_class,
                magic: entry.magic,
            });
        }

        let mut enemies = Vec::with_capacity(roster.enemies.len());
        for entry in roster.enemies {
            if !seen.insert(entry.name.to_lowercase()) {
                return Err(GameError::DuplicateName(entry.name));
            }
            let base = entry.base();
            let technique = match entry.technique {
                Some(name) => Some(
                    SkillId::technique_from_name(&name)
                        .ok_or(GameError::UnknownTechnique(name))?,
                ),
                None => None,
            };
            enemies.push(EnemyEntry {
                name: entry.name,
                base,
                technique,
            });
        }

        Ok(Self {
            characters,
            enemies,
        })
    }

    pub fn characters(&self) -> &[CharacterEntry] {
        &self.characters
    }

    pub fn enemies(&self) -> &[EnemyEntry] {
        &self.enemies
    }

    /// Build a fresh player character by name (case-insensitive)
    pub fn character(&self, name: &str) -> Result<PlayerCharacter> {
        self.characters
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
            .map(|entry| {
                PlayerCharacter::new(entry.name.clone(), entry.job_class, entry.base, entry.magic)
            })
            .ok_or_else(|| GameError::UnknownCharacter(name.to_string()))
    }

    /// Build a fresh enemy by name (case-insensitive)
    pub fn enemy(&self, name: &str) -> Result<EnemyCharacter> {
        self.enemies
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
            .map(|entry| EnemyCharacter::new(entry.name.clone(), entry.base, entry.technique))
            .ok_or_else(|| GameError::UnknownCharacter(name.to_string()))
    }

    /// Build every named character, preserving order
    pub fn party<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<PlayerCharacter>> {
        names.iter().map(|name| self.character(name.as_ref())).collect()
    }

    /// Build every named enemy, preserving order
    pub fn enemy_group<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<EnemyCharacter>> {
        names.iter().map(|name| self.enemy(name.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_roster_loads() {
        let table = StatTable::builtin().unwrap();
        assert_eq!(table.characters().len(), 4);
        assert_eq!(table.enemies().len(), 3);

        let classes: Vec<JobClass> = table.characters().iter().map(|c| c.job_class).collect();
        for class in JobClass::ALL {
            assert!(classes.contains(&class), "{} missing", class);
        }
    }

    #[test]
    fn test_character_lookup_is_case_insensitive() {
        let table = StatTable::builtin().unwrap();
        let tank = table.character("whiskerwall").unwrap();
        assert_eq!(tank.stats.name, "Whiskerwall");
        assert_eq!(tank.job_class, JobClass::Tank);
        assert_eq!(tank.stats.health_points, tank.stats.max_health_points);
    }

    #[test]
    fn test_enemy_techniques_resolved() {
        let table = StatTable::builtin().unwrap();
        let viper = table.enemy("Viperstrike").unwrap();
        assert_eq!(viper.technique().map(|t| t.id), Some(SkillId::VenomFang));
    }

    #[test]
    fn test_unknown_name() {
        let table = StatTable::builtin().unwrap();
        assert!(matches!(
            table.character("Garfield"),
            Err(GameError::UnknownCharacter(_))
        ));
        assert!(matches!(
            table.party(&["Shadowpaw", "Nobody"]),
            Err(GameError::UnknownCharacter(_))
        ));
    }

    #[test]
    fn test_unknown_class_rejected() {
        let content = r#"
            [[characters]]
            name = "Bard"
            class = "Bard"
            health = 10
            defense = 0
            attack = 1
            speed = 1
            magic = 0
        "#;
        assert!(matches!(
            StatTable::parse_toml(content),
            Err(GameError::UnknownClass(_))
        ));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let content = r#"
            [[enemies]]
            name = "Rat"
            health = 10
            defense = 0
            attack = 1
            speed = 1

            [[enemies]]
            name = "rat"
            health = 12
            defense = 0
            attack = 1
            speed = 1
        "#;
        assert!(matches!(
            StatTable::parse_toml(content),
            Err(GameError::DuplicateName(_))
        ));
    }

    #[test]
    fn test_unknown_technique_rejected() {
        let content = r#"
            [[enemies]]
            name = "Rat"
            health = 10
            defense = 0
            attack = 1
            speed = 1
            technique = "Gnaw"
        "#;
        assert!(matches!(
            StatTable::parse_toml(content),
            Err(GameError::UnknownTechnique(_))
        ));
    }
}
