//! Status effects applied by skills
//!
//! An effect either lasts a number of rounds (ticked on the bearer's idle
//! update) or holds a single charge consumed by the next incoming hit.

use serde::{Deserialize, Serialize};

use crate::combat::constants::{
    FORTIFIED_ROUNDS, POISON_DAMAGE, POISON_ROUNDS, REGENERATION_HEAL, REGENERATION_ROUNDS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    /// Incoming hits are halved
    Fortified,
    /// Half of the next incoming hit bounces back
    Reflect,
    /// The next incoming hit misses
    Evasion,
    /// Heals on each idle update
    Regeneration,
    /// Loses health on each idle update, ignoring defense
    Poisoned,
}

/// How long an effect lasts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Duration {
    Rounds(u32),
    Charges(u32),
}

impl EffectKind {
    pub fn name(&self) -> &'static str {
        match self {
            EffectKind::Fortified => "Fortified",
            EffectKind::Reflect => "Reflect",
            EffectKind::Evasion => "Evasion",
            EffectKind::Regeneration => "Regeneration",
            EffectKind::Poisoned => "Poisoned",
        }
    }

    pub fn initial_duration(&self) -> Duration {
        match self {
            EffectKind::Fortified => Duration::Rounds(FORTIFIED_ROUNDS),
            EffectKind::Reflect | EffectKind::Evasion => Duration::Charges(1),
            EffectKind::Regeneration => Duration::Rounds(REGENERATION_ROUNDS),
            EffectKind::Poisoned => Duration::Rounds(POISON_ROUNDS),
        }
    }

    pub fn is_harmful(&self) -> bool {
        matches!(self, EffectKind::Poisoned)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveEffect {
    pub kind: EffectKind,
    pub remaining: Duration,
}

impl ActiveEffect {
    pub fn new(kind: EffectKind) -> Self {
        Self {
            kind,
            remaining: kind.initial_duration(),
        }
    }

    fn expired(&self) -> bool {
        matches!(self.remaining, Duration::Rounds(0) | Duration::Charges(0))
    }
}

/// Health change produced by ticking round-based effects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EffectTick {
    pub healing: i32,
    pub damage: i32,
    pub expired: usize,
}

/// Ordered set of active effects; applying an existing kind refreshes it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectSet {
    effects: Vec<ActiveEffect>,
}

impl EffectSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply or refresh an effect. Returns true if it was newly added.
    pub fn apply(&mut self, kind: EffectKind) -> bool {
        if let Some(existing) = self.effects.iter_mut().find(|e| e.kind == kind) {
            existing.remaining = kind.initial_duration();
            return false;
        }
        self.effects.push(ActiveEffect::new(kind));
        true
    }

    pub fn has(&self, kind: EffectKind) -> bool {
        self.effects.iter().any(|e| e.kind == kind)
    }

    /// Spend one charge of a charge-based effect. Returns false if absent.
    pub fn consume_charge(&mut self, kind: EffectKind) -> bool {
        let Some(effect) = self.effects.iter_mut().find(|e| e.kind == kind) else {
            return false;
        };
        match &mut effect.remaining {
            Duration::Charges(n) if *n > 0 => *n -= 1,
            _ => return false,
        }
        self.effects.retain(|e| !e.expired());
        true
    }

    /// Advance round-based effects by one idle update
    pub fn tick(&mut self) -> EffectTick {
        let mut tick = EffectTick::default();
        for effect in &mut self.effects {
            if let Duration::Rounds(n) = &mut effect.remaining {
                match effect.kind {
                    EffectKind::Regeneration => tick.healing += REGENERATION_HEAL,
                    EffectKind::Poisoned => tick.damage += POISON_DAMAGE,
                    _ => {}
                }
                *n = n.saturating_sub(1);
            }
        }
        let before = self.effects.len();
        self.effects.retain(|e| !e.expired());
        tick.expired = before - self.effects.len();
        tick
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActiveEffect> {
        self.effects.iter()
    }

    /// Effect names in application order
    pub fn names(&self) -> Vec<&'static str> {
        self.effects.iter().map(|e| e.kind.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
