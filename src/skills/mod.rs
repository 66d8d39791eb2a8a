//! Skills and the status effects they apply
//!
//! Every player class owns two skills; enemies may own one technique that
//! costs speed points only.

pub mod definitions;
pub mod effects;
pub mod resolution;

pub use definitions::{SkillDefinition, SkillId, SKILL_LIBRARY};
pub use effects::{ActiveEffect, Duration, EffectKind, EffectSet, EffectTick};
pub use resolution::apply_skill;
