//! Skill effect resolution
//!
//! Skills never touch resource costs here; the session deducts them before
//! calling in.

use rand::RngCore;

use crate::combat::constants::{
    ARCANE_SHATTER_MULTIPLIER, ASSASSIN_CRIT_CHANCE_PER_LUCK, BACKSTAB_MULTIPLIER,
    DREAD_AURA_ATTACK_LOSS, MEND_BASE_HEAL, MIN_ATTACK_POINTS, MIST_VEIL_RECOVERY,
};
use crate::combat::resolution::{roll_attack, strike, AttackRoll};
use crate::entity::Combatant;
use crate::skills::{EffectKind, SkillDefinition, SkillId};

/// Apply a skill's effect from `caster` onto `target` (or the caster itself)
pub fn apply_skill(
    skill: &SkillDefinition,
    caster: &mut dyn Combatant,
    target: &mut dyn Combatant,
    rng: &mut dyn RngCore,
) -> String {
    let caster_name = caster.name().to_string();
    let target_name = target.name().to_string();

    match skill.id {
        SkillId::IronWall => {
            let max_defense = caster.stats().max_defense_points;
            let recovered = caster.stats_mut().recover_defense(max_defense);
            caster.apply_effect(EffectKind::Fortified);
            format!(
                "{} raises an Iron Wall, recovering {} defense points and becoming Fortified.",
                caster_name, recovered
            )
        }
        SkillId::ShieldBash => {
            let stats = caster.stats();
            let roll = AttackRoll {
                damage: stats.attack_points + stats.defense_points / 2,
                critical: false,
            };
            strike(caster, target, roll, "shield-bashes")
        }
        SkillId::MirrorImage => {
            caster.apply_effect(EffectKind::Reflect);
            format!(
                "{} conjures a Mirror Image; the next blow will be reflected.",
                caster_name
            )
        }
        SkillId::ArcaneShatter => {
            let damage = caster.stats().attack_points * ARCANE_SHATTER_MULTIPLIER;
            let lost = target.stats_mut().pierce(damage);
            format!(
                "{} casts Arcane Shatter, piercing {}'s defense for {} damage.",
                caster_name, target_name, lost
            )
        }
        SkillId::Mend => {
            let amount = MEND_BASE_HEAL + caster.stats().luck.max(0);
            let healed = caster.stats_mut().heal(amount);
            format!("{} casts Mend and recovers {} health points.", caster_name, healed)
        }
        SkillId::Rejuvenate => {
            caster.apply_effect(EffectKind::Regeneration);
            format!("{} casts Rejuvenate and begins to regenerate.", caster_name)
        }
        SkillId::ShadowStep => {
            caster.apply_effect(EffectKind::Evasion);
            format!(
                "{} melts into the shadows, ready to evade the next attack.",
                caster_name
            )
        }
        SkillId::Backstab => {
            let stats = caster.stats();
            let base = stats.attack_points * BACKSTAB_MULTIPLIER + stats.luck.max(0);
            let roll = roll_attack(base, stats.luck, ASSASSIN_CRIT_CHANCE_PER_LUCK, rng);
            strike(caster, target, roll, "backstabs")
        }
        SkillId::VenomFang => {
            let roll = AttackRoll {
                damage: caster.stats().attack_points,
                critical: false,
            };
            let mut line = strike(caster, target, roll, "sinks its fangs into");
            if target.apply_effect(EffectKind::Poisoned) {
                line.push_str(&format!(" {} is Poisoned!", target_name));
            }
            line
        }
        SkillId::DreadAura => {
            let stats = target.stats_mut();
            let before = stats.attack_points;
            stats.attack_points = (before - DREAD_AURA_ATTACK_LOSS).max(MIN_ATTACK_POINTS);
            let lost = before - stats.attack_points;
            format!(
                "{} radiates a Dread Aura; {} loses {} attack points.",
                caster_name, target_name, lost
            )
        }
        SkillId::MistVeil => {
            let recovered = caster.stats_mut().recover_defense(MIST_VEIL_RECOVERY);
            format!(
                "{} vanishes into a Mist Veil and recovers {} defense points.",
                caster_name, recovered
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::constants::{POISON_DAMAGE, REGENERATION_HEAL};
    use crate::entity::stats::BaseStats;
    use crate::entity::{EnemyCharacter, JobClass, PlayerCharacter};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn base(health: i32, defense: i32, attack: i32) -> BaseStats {
        BaseStats {
            health,
            defense,
            attack,
            speed: 5,
            luck: 0,
        }
    }

    fn enemy() -> EnemyCharacter {
        EnemyCharacter::new("Doomshroud", base(200, 20, 10), None)
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(11)
    }

    #[test]
    fn test_iron_wall_restores_and_fortifies() {
        let mut tank = PlayerCharacter::new("Whiskerwall", JobClass::Tank, base(150, 40, 10), 10);
        tank.stats.defense_points = 3;
        let mut target = enemy();
        SkillId::IronWall
            .definition()
            .apply(&mut tank, &mut target, &mut rng());
        assert_eq!(tank.stats.defense_points, 40);
        assert!(tank.active_effects.has(EffectKind::Fortified));
    }

    #[test]
    fn test_shield_bash_uses_defense() {
        let mut tank = PlayerCharacter::new("Whiskerwall", JobClass::Tank, base(150, 40, 10), 10);
        let mut target = enemy();
        SkillId::ShieldBash
            .definition()
            .apply(&mut tank, &mut target, &mut rng());
        // 10 + 40/2 = 30 damage, 20 absorbed
        assert_eq!(target.stats.defense_points, 0);
        assert_eq!(target.stats.health_points, 190);
    }

    #[test]
    fn test_arcane_shatter_pierces() {
        let mut mage =
            PlayerCharacter::new("Purrception", JobClass::MirrorMage, base(90, 10, 14), 20);
        let mut target = enemy();
        let line = SkillId::ArcaneShatter
            .definition()
            .apply(&mut mage, &mut target, &mut rng());
        assert_eq!(target.stats.defense_points, 20);
        assert_eq!(target.stats.health_points, 200 - 28);
        assert!(line.contains("28 damage"));
    }

    #[test]
    fn test_mend_heals_caster() {
        let mut healer = PlayerCharacter::new("Meowdicine", JobClass::Healer, base(100, 20, 8), 20);
        healer.stats.pierce(60);
        let mut target = enemy();
        SkillId::Mend
            .definition()
            .apply(&mut healer, &mut target, &mut rng());
        assert_eq!(healer.stats.health_points, 40 + MEND_BASE_HEAL);
        assert_eq!(target.stats.health_points, 200);
    }

    #[test]
    fn test_rejuvenate_applies_regeneration() {
        let mut healer = PlayerCharacter::new("Meowdicine", JobClass::Healer, base(100, 20, 8), 20);
        healer.stats.pierce(50);
        let mut target = enemy();
        SkillId::Rejuvenate
            .definition()
            .apply(&mut healer, &mut target, &mut rng());
        healer.tick_effects();
        assert_eq!(healer.stats.health_points, 50 + REGENERATION_HEAL);
    }

    #[test]
    fn test_backstab_doubles_attack() {
        let mut assassin =
            PlayerCharacter::new("Shadowpaw", JobClass::Assassin, base(80, 10, 15), 12);
        let mut target = EnemyCharacter::new("Viperstrike", base(100, 0, 10), None);
        SkillId::Backstab
            .definition()
            .apply(&mut assassin, &mut target, &mut rng());
        assert_eq!(target.stats.health_points, 70);
    }

    #[test]
    fn test_venom_fang_poisons_player() {
        let mut viper = EnemyCharacter::new("Viperstrike", base(100, 0, 10), Some(SkillId::VenomFang));
        let mut healer = PlayerCharacter::new("Meowdicine", JobClass::Healer, base(100, 0, 8), 20);
        let line = SkillId::VenomFang
            .definition()
            .apply(&mut viper, &mut healer, &mut rng());
        assert!(line.contains("Poisoned"));
        assert_eq!(healer.stats.health_points, 90);
        healer.tick_effects();
        assert_eq!(healer.stats.health_points, 90 - POISON_DAMAGE);
    }

    #[test]
    fn test_dread_aura_floors_attack() {
        let mut shroud = enemy();
        let mut healer = PlayerCharacter::new("Meowdicine", JobClass::Healer, base(100, 0, 2), 20);
        SkillId::DreadAura
            .definition()
            .apply(&mut shroud, &mut healer, &mut rng());
        assert_eq!(healer.stats.attack_points, MIN_ATTACK_POINTS);
    }

    #[test]
    fn test_mist_veil_recovers_defense() {
        let mut mist = EnemyCharacter::new("Mistwalker", base(100, 30, 10), Some(SkillId::MistVeil));
        mist.stats.defense_points = 0;
        let mut healer = PlayerCharacter::new("Meowdicine", JobClass::Healer, base(100, 0, 8), 20);
        SkillId::MistVeil
            .definition()
            .apply(&mut mist, &mut healer, &mut rng());
        assert_eq!(mist.stats.defense_points, MIST_VEIL_RECOVERY);
    }
}
