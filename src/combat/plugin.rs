//! Combat plugin - registers damage and death systems.

use bevy::prelude::*;

use super::systems;
use crate::core::GameState;

/// Combat plugin - applies damage events and handles player death.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (systems::apply_damage, systems::check_deaths)
                .chain()
                .run_if(in_state(GameState::InGame)),
        );
    }
}
