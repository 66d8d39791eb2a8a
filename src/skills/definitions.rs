//! Static skill definitions - the global library every combatant references

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::combat::action::ActionError;
use crate::entity::Combatant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillId {
    // Tank
    IronWall,
    ShieldBash,
    // MirrorMage
    MirrorImage,
    ArcaneShatter,
    // Healer
    Mend,
    Rejuvenate,
    // Assassin
    ShadowStep,
    Backstab,
    // Enemy techniques
    VenomFang,
    DreadAura,
    MistVeil,
}

/// Immutable definition of a skill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDefinition {
    pub id: SkillId,
    pub name: &'static str,
    pub description: &'static str,
    /// Class (or "Enemy") that owns the skill
    pub belongs_to: &'static str,
    pub magic_points_cost: i32,
    pub speed_points_cost: i32,
}

/// Global skill library, indexed by `SkillId`
pub static SKILL_LIBRARY: &[SkillDefinition] = &[
    SkillDefinition {
        id: SkillId::IronWall,
        name: "Iron Wall",
        description: "Restores defense to full and halves incoming hits for two rounds.",
        belongs_to: "Tank",
        magic_points_cost: 3,
        speed_points_cost: 1,
    },
    SkillDefinition {
        id: SkillId::ShieldBash,
        name: "Shield Bash",
        description: "Slams the target for attack plus half of the caster's defense.",
        belongs_to: "Tank",
        magic_points_cost: 4,
        speed_points_cost: 2,
    },
    SkillDefinition {
        id: SkillId::MirrorImage,
        name: "Mirror Image",
        description: "The next incoming hit is split; half of it bounces back at the attacker.",
        belongs_to: "MirrorMage",
        magic_points_cost: 4,
        speed_points_cost: 1,
    },
    SkillDefinition {
        id: SkillId::ArcaneShatter,
        name: "Arcane Shatter",
        description: "Deals double attack damage that ignores the target's defense.",
        belongs_to: "MirrorMage",
        magic_points_cost: 6,
        speed_points_cost: 2,
    },
    SkillDefinition {
        id: SkillId::Mend,
        name: "Mend",
        description: "Heals the caster for 25 health plus luck.",
        belongs_to: "Healer",
        magic_points_cost: 4,
        speed_points_cost: 1,
    },
    SkillDefinition {
        id: SkillId::Rejuvenate,
        name: "Rejuvenate",
        description: "The caster regenerates 10 health at the end of each of the next three rounds.",
        belongs_to: "Healer",
        magic_points_cost: 5,
        speed_points_cost: 2,
    },
    SkillDefinition {
        id: SkillId::ShadowStep,
        name: "Shadow Step",
        description: "The caster evades the next incoming hit entirely.",
        belongs_to: "Assassin",
        magic_points_cost: 3,
        speed_points_cost: 2,
    },
    SkillDefinition {
        id: SkillId::Backstab,
        name: "Backstab",
        description: "Strikes for double attack plus luck, with the assassin's crit chance.",
        belongs_to: "Assassin",
        magic_points_cost: 5,
        speed_points_cost: 3,
    },
    SkillDefinition {
        id: SkillId::VenomFang,
        name: "Venom Fang",
        description: "Bites the target and poisons it for three rounds.",
        belongs_to: "Enemy",
        magic_points_cost: 0,
        speed_points_cost: 3,
    },
    SkillDefinition {
        id: SkillId::DreadAura,
        name: "Dread Aura",
        description: "Saps the target's attack points.",
        belongs_to: "Enemy",
        magic_points_cost: 0,
        speed_points_cost: 3,
    },
    SkillDefinition {
        id: SkillId::MistVeil,
        name: "Mist Veil",
        description: "Wraps the caster in mist, recovering 15 defense points.",
        belongs_to: "Enemy",
        magic_points_cost: 0,
        speed_points_cost: 2,
    },
];

impl SkillId {
    pub const ENEMY_TECHNIQUES: [SkillId; 3] =
        [SkillId::VenomFang, SkillId::DreadAura, SkillId::MistVeil];

    pub fn definition(self) -> &'static SkillDefinition {
        &SKILL_LIBRARY[self as usize]
    }

    /// Whether the skill hurts its target
    pub fn deals_damage(self) -> bool {
        matches!(
            self,
            SkillId::ShieldBash | SkillId::ArcaneShatter | SkillId::Backstab | SkillId::VenomFang
        )
    }

    /// Look up an enemy technique by display or snake_case name
    pub fn technique_from_name(name: &str) -> Option<SkillId> {
        let wanted = normalize(name);
        Self::ENEMY_TECHNIQUES
            .into_iter()
            .find(|id| normalize(id.definition().name) == wanted)
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

impl SkillDefinition {
    /// Check both costs against the caster's current resources
    ///
    /// Magic is checked before speed.
    pub fn check_affordable(&self, magic_points: i32, speed_points: i32) -> Result<(), ActionError> {
        if self.magic_points_cost > magic_points {
            return Err(ActionError::NotEnoughMagic {
                skill: self.name,
                required: self.magic_points_cost,
                available: magic_points,
            });
        }
        if self.speed_points_cost > speed_points {
            return Err(ActionError::NotEnoughSpeed {
                skill: self.name,
                required: self.speed_points_cost,
                available: speed_points,
            });
        }
        Ok(())
    }

    /// Apply the skill's effect and describe it
    ///
    /// Costs are the caller's responsibility and must be deducted first.
    pub fn apply(
        &self,
        caster: &mut dyn Combatant,
        target: &mut dyn Combatant,
        rng: &mut dyn RngCore,
    ) -> String {
        crate::skills::resolution::apply_skill(self, caster, target, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_indexed_by_id() {
        for (index, def) in SKILL_LIBRARY.iter().enumerate() {
            assert_eq!(def.id as usize, index, "{} out of order", def.name);
        }
        assert_eq!(SkillId::MistVeil.definition().name, "Mist Veil");
    }

    #[test]
    fn test_costs_non_negative() {
        for def in SKILL_LIBRARY {
            assert!(def.magic_points_cost >= 0);
            assert!(def.speed_points_cost >= 0);
        }
    }

    #[test]
    fn test_enemy_techniques_cost_no_magic() {
        for id in SkillId::ENEMY_TECHNIQUES {
            assert_eq!(id.definition().magic_points_cost, 0);
            assert_eq!(id.definition().belongs_to, "Enemy");
        }
    }

    #[test]
    fn test_technique_from_name() {
        assert_eq!(SkillId::technique_from_name("venom_fang"), Some(SkillId::VenomFang));
        assert_eq!(SkillId::technique_from_name("Dread Aura"), Some(SkillId::DreadAura));
        assert_eq!(SkillId::technique_from_name("mend"), None);
    }

    #[test]
    fn test_magic_checked_before_speed() {
        let bash = SkillId::ShieldBash.definition();
        assert!(matches!(
            bash.check_affordable(0, 0),
            Err(ActionError::NotEnoughMagic { .. })
        ));
        assert!(matches!(
            bash.check_affordable(10, 0),
            Err(ActionError::NotEnoughSpeed { .. })
        ));
        assert!(bash.check_affordable(4, 2).is_ok());
    }
}
