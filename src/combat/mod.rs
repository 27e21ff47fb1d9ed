//! Combat module - health and damage application.

mod components;
mod plugin;
mod systems;

pub use components::*;
pub use plugin::CombatPlugin;
