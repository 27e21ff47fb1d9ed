//! Mimic Hunt - Entry Point
//!
//! Carry the meal to the delivery point without getting eaten.
//!
//! Controls:
//! - WASD: Move
//! - Mouse: Look around
//! - Shift: Sprint
//! - Escape: Pause/Unpause
//! - F3: Toggle mimic debug gizmos

use bevy::prelude::*;
use bevy_kira_audio::AudioPlugin;
use bevy_rapier3d::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins, with kira handling audio instead
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Mimic Hunt".to_string(),
                        resolution: (1280.0, 720.0).into(),
                        ..default()
                    }),
                    ..default()
                })
                .disable::<bevy::audio::AudioPlugin>(),
        )

        // Physics
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())

        // Audio
        .add_plugins(AudioPlugin)

        // Our game plugin
        .add_plugins(mimic_hunt::MimicPlugin)

        .run();
}
