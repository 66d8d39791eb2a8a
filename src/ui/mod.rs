//! Terminal presentation: menus, screen rendering and the interactive front-end

pub mod display;
pub mod menu;
pub mod terminal;

pub use menu::{Menu, MenuOption};
pub use terminal::TerminalUi;
