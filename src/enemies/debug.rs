//! Debug gizmos for mimic perception and navigation. F3 toggles them.

use bevy::math::Isometry3d;
use bevy::prelude::*;

use super::brain::{MimicBrain, NavigationAgent};
use super::navigation::NavAgent;

/// Whether perception gizmos are drawn.
#[derive(Resource, Default)]
pub struct DebugGizmos(pub bool);

pub fn toggle_debug_gizmos(keyboard: Res<ButtonInput<KeyCode>>, mut gizmos: ResMut<DebugGizmos>) {
    if keyboard.just_pressed(KeyCode::F3) {
        gizmos.0 = !gizmos.0;
        info!("Mimic debug gizmos {}", if gizmos.0 { "on" } else { "off" });
    }
}

/// Eye, field-of-view edges and current destination of every mimic.
pub fn draw_mimic_gizmos(
    mut gizmos: Gizmos,
    query: Query<(&Transform, &MimicBrain, &NavAgent)>,
) {
    let sight_color = Color::srgb(1.0, 1.0, 0.0);
    let path_color = Color::srgb(0.0, 0.0, 1.0);

    for (transform, brain, agent) in query.iter() {
        let eye = brain.eye_position(transform.translation);
        gizmos.sphere(Isometry3d::from_translation(eye), 0.2, sight_color);

        let half_fov = (brain.stats.field_of_view_deg / 2.0).to_radians();
        let forward = transform.forward().as_vec3();
        for angle in [half_fov, -half_fov] {
            let edge = Quat::from_rotation_y(angle) * forward;
            gizmos.ray(eye, edge * brain.stats.sight_range, sight_color);
        }

        if let Some(destination) = agent.destination() {
            gizmos.sphere(Isometry3d::from_translation(destination), 0.5, path_color);
            gizmos.line(transform.translation, destination, path_color);
        }
    }
}
