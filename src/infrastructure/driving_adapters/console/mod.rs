//! Console Adapter
//!
//! Text menu for operators working at a terminal.

pub mod menu;
pub mod render;

pub use menu::ConsoleMenu;
