//! Hit resolution shared by basic attacks and damaging skills
//!
//! A hit is rolled once (base damage plus an optional crit), then handed to
//! the target, which may evade, reflect or soak it with defense.

use rand::{Rng, RngCore};

use crate::combat::constants::{crit_chance, CRIT_MULTIPLIER};
use crate::entity::Combatant;

/// Damage rolled for a single hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackRoll {
    pub damage: i32,
    pub critical: bool,
}

/// Roll damage for a hit
///
/// No random number is drawn when the crit chance is zero, so luckless
/// attacks are fully deterministic.
pub fn roll_attack(base: i32, luck: i32, crit_per_luck: u32, rng: &mut dyn RngCore) -> AttackRoll {
    let chance = crit_chance(luck, crit_per_luck);
    let critical = chance > 0 && rng.gen_range(0..100) < chance;
    let damage = if critical {
        base.max(0) * CRIT_MULTIPLIER
    } else {
        base.max(0)
    };
    AttackRoll { damage, critical }
}

/// Land a rolled hit on `target` and describe it
///
/// Reflected damage is applied to `attacker` and ignores its defense.
pub fn strike(
    attacker: &mut dyn Combatant,
    target: &mut dyn Combatant,
    roll: AttackRoll,
    verb: &str,
) -> String {
    let attacker_name = attacker.name().to_string();
    let target_name = target.name().to_string();
    let report = target.receive_hit(roll.damage);

    let mut line = String::new();
    if roll.critical {
        line.push_str("Critical hit! ");
    }

    if report.evaded {
        line.push_str(&format!(
            "{} {} {}, but {} evades the blow!",
            attacker_name, verb, target_name, target_name
        ));
        return line;
    }

    line.push_str(&format!(
        "{} {} {} for {} damage",
        attacker_name,
        verb,
        target_name,
        report.total()
    ));
    if report.absorbed > 0 {
        line.push_str(&format!(" ({} absorbed by defense)", report.absorbed));
    }
    line.push('.');

    if report.reflected > 0 {
        let lost = attacker.stats_mut().pierce(report.reflected);
        line.push_str(&format!(
            " {} reflects {} damage back at {}.",
            target_name, lost, attacker_name
        ));
    }

    line
}
