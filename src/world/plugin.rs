//! World plugin - level loading, building and the delivery trigger.

use bevy::prelude::*;

use crate::core::{GameState, InSession};
use crate::enemies::MimicRegistry;
use crate::player::{spawn_player, Player, PlayerConfig};

use super::builder::{build_level_from_data, LevelGeometry};
use super::data::{load_level_definitions, CurrentLevel, LevelRegistry};
use super::delivery::{detect_deliveries, MealStatus};
use super::surface::WalkableSurface;

/// Distance the mimic keeps from walls when choosing waypoints.
const AGENT_CLEARANCE: f32 = 0.6;

/// World plugin - handles level loading and world setup.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelRegistry>()
            .init_resource::<CurrentLevel>()
            .init_resource::<MealStatus>()
            .add_systems(Startup, load_level_definitions)
            .add_systems(OnEnter(InSession), setup_level)
            .add_systems(OnExit(InSession), cleanup_level)
            .add_systems(Update, detect_deliveries.run_if(in_state(GameState::InGame)));
    }
}

/// Set up the level from data.
pub fn setup_level(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    level_registry: Res<LevelRegistry>,
    current_level: Res<CurrentLevel>,
    mimic_registry: Res<MimicRegistry>,
    player_config: Res<PlayerConfig>,
    mut meal_status: ResMut<MealStatus>,
) {
    let level = level_registry.get_or_fallback(&current_level.name);
    info!("Building level: {}", level.name);

    let player_pos = build_level_from_data(
        &mut commands,
        &mut meshes,
        &mut materials,
        &level,
        &mimic_registry,
    );

    commands.insert_resource(WalkableSurface::from_level(&level, AGENT_CLEARANCE));
    *meal_status = MealStatus::default();

    spawn_player(&mut commands, player_pos, &player_config);
}

/// Clean up level entities when the session ends.
fn cleanup_level(
    mut commands: Commands,
    level_query: Query<Entity, With<LevelGeometry>>,
    player_query: Query<Entity, With<Player>>,
) {
    for entity in level_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
    for entity in player_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
    commands.remove_resource::<WalkableSurface>();
}
