//! Enemies module - the mimic: data, behaviour, navigation and feedback.

mod ai;
pub mod brain;
mod components;
pub mod data;
mod debug;
mod indicators;
pub mod navigation;
mod plugin;
mod spawning;

pub use ai::RapierSight;
pub use brain::{BehaviorMode, MimicBrain};
pub use components::*;
pub use data::MimicRegistry;
pub use debug::DebugGizmos;
pub use indicators::update_indicators;
pub use navigation::NavAgent;
pub use plugin::{EnemyPlugin, MimicAiPlugin, MimicSet};
pub use spawning::{mimic_behaviour, spawn_mimic};
