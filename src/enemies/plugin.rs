//! Enemy plugins - register mimic data, AI, visuals and debug systems.

use bevy::prelude::*;

use super::ai;
use super::components::AttackEffectToggled;
use super::data::{load_mimic_definitions, MimicRegistry};
use super::debug::{draw_mimic_gizmos, toggle_debug_gizmos, DebugGizmos};
use super::indicators::update_indicators;
use super::navigation::steer_nav_agents;
use crate::core::GameState;

/// System ordering for one mimic frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MimicSet {
    /// Target lookup, brain ticks, movement
    Behaviour,
    /// Effects and indicator colours reacting to this frame's brain state
    Feedback,
}

/// Mimic behaviour only: runs headless, no rendering resources needed.
pub struct MimicAiPlugin;

impl Plugin for MimicAiPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<AttackEffectToggled>()
            .configure_sets(
                Update,
                (MimicSet::Behaviour, MimicSet::Feedback)
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            )
            .add_systems(
                Update,
                (
                    ai::acquire_targets,
                    ai::activate_brains,
                    ai::run_mimic_brains,
                    steer_nav_agents,
                )
                    .chain()
                    .in_set(MimicSet::Behaviour),
            )
            .add_systems(Update, ai::apply_attack_effects.in_set(MimicSet::Feedback));
    }
}

/// Enemy plugin - mimic definitions, AI, indicator colours and gizmos.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MimicAiPlugin)
            .init_resource::<MimicRegistry>()
            .init_resource::<DebugGizmos>()
            .add_systems(Startup, load_mimic_definitions)
            .add_systems(Update, update_indicators.in_set(MimicSet::Feedback))
            .add_systems(
                Update,
                (
                    toggle_debug_gizmos,
                    draw_mimic_gizmos.run_if(|gizmos: Res<DebugGizmos>| gizmos.0),
                )
                    .chain()
                    .run_if(in_state(GameState::InGame).or(in_state(GameState::Paused))),
            );
    }
}
