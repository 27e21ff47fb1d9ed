//! Mimic Hunt - a first-person delivery game with a mimic that hunts you.
//!
//! The player carries a meal across a canteen to a delivery point while a
//! mimic patrols the room, spots the player inside its view cone, chases,
//! and bites when close enough.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, pause and smoothing helpers
//! - **Player**: First-person movement, camera, player config
//! - **Combat**: Health and damage application
//! - **Enemies**: Mimic data, brain, navigation, indicators and debug gizmos
//! - **World**: Level data, level building, walkable surface, delivery zone
//! - **Audio**: Mimic sound cues
//! - **UI**: Menus, pause overlay, game over screen and HUD
//!
//! The mimic's decision making lives in [`enemies::brain`] and talks to the
//! engine only through small traits, so it runs without a window or physics.

pub mod audio;
pub mod combat;
pub mod core;
pub mod enemies;
pub mod player;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct MimicPlugin;

impl Plugin for MimicPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Combat systems
            .add_plugins(combat::CombatPlugin)

            // Enemy systems
            .add_plugins(enemies::EnemyPlugin)

            // World systems
            .add_plugins(world::WorldPlugin)

            // Sound cues
            .add_plugins(audio::AudioCuePlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
