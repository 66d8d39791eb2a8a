pub mod config;
pub mod error;
pub mod types;

pub use config::{CombatConfig, GameConfig, PolicyConfig};
pub use error::{GameError, Result};
pub use types::{BattleStatus, Side};
