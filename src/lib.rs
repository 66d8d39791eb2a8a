//! CATastrophe Chronicles - turn-based party combat

pub mod campaign;
pub mod combat;
pub mod core;
pub mod entity;
pub mod skills;
pub mod ui;
