//! First-person player movement and camera control.

use bevy::input::mouse::MouseMotion;
use bevy::pbr::FogFalloff;
use bevy::prelude::*;
use bevy::render::camera::ClearColorConfig;
use bevy::window::{CursorGrabMode, PrimaryWindow};
use bevy_rapier3d::prelude::*;

use super::components::*;
use crate::combat::Health;
use crate::core::GameState;

/// The player's camera.
#[derive(Component, Default)]
pub struct PlayerCamera {
    /// Current pitch angle in radians (looking up/down)
    pub pitch: f32,
}

/// Set up player movement systems.
pub fn setup_movement_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), grab_cursor)
        .add_systems(OnExit(GameState::InGame), release_cursor)
        .add_systems(
            Update,
            (mouse_look, player_movement).run_if(in_state(GameState::InGame)),
        );
}

/// Grab and hide cursor when entering gameplay.
fn grab_cursor(mut window_query: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = window_query.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::Locked;
        window.cursor_options.visible = false;
    }
}

/// Release cursor for menus.
fn release_cursor(mut window_query: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = window_query.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::None;
        window.cursor_options.visible = true;
    }
}

/// Rotates the player horizontally (yaw) and the camera vertically (pitch).
pub fn mouse_look(
    mut mouse_motion: EventReader<MouseMotion>,
    config: Res<PlayerConfig>,
    mut player_query: Query<&mut Transform, With<Player>>,
    mut camera_query: Query<(&mut Transform, &mut PlayerCamera), Without<Player>>,
) {
    let delta: Vec2 = mouse_motion.read().map(|event| event.delta).sum();
    if delta == Vec2::ZERO {
        return;
    }

    let Ok(mut player_transform) = player_query.get_single_mut() else {
        return;
    };
    let Ok((mut camera_transform, mut camera)) = camera_query.get_single_mut() else {
        return;
    };

    let sensitivity = config.mouse_sensitivity * 0.001;
    let y_invert = if config.invert_y { -1.0 } else { 1.0 };

    player_transform.rotate_y(-delta.x * sensitivity);

    // Clamped to about 80 degrees to prevent flipping
    camera.pitch = (camera.pitch - delta.y * sensitivity * y_invert).clamp(-1.4, 1.4);
    camera_transform.rotation = Quat::from_rotation_x(camera.pitch);
}

/// WASD movement with sprint, through Rapier's character controller.
pub fn player_movement(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    config: Res<PlayerConfig>,
    mut player_query: Query<
        (
            &Transform,
            &mut MovementState,
            &mut KinematicCharacterController,
            Option<&KinematicCharacterControllerOutput>,
        ),
        With<Player>,
    >,
) {
    let Ok((transform, mut movement_state, mut controller, output)) = player_query.get_single_mut()
    else {
        return;
    };

    movement_state.is_grounded = output.map_or(true, |output| output.grounded);
    if movement_state.is_grounded {
        movement_state.vertical_velocity = movement_state.vertical_velocity.max(0.0);
    } else {
        movement_state.vertical_velocity -= config.gravity * time.delta_secs();
    }

    let mut direction = Vec3::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        direction.z -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        direction.z += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        direction.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        direction.x += 1.0;
    }
    let direction = direction.normalize_or_zero();

    // Only the horizontal part of the facing matters
    let yaw = transform.rotation.to_euler(EulerRot::YXZ).0;
    let movement = Quat::from_rotation_y(yaw) * direction;

    let speed = if keyboard.pressed(KeyCode::ShiftLeft) {
        config.move_speed * config.sprint_multiplier
    } else {
        config.move_speed
    };

    let horizontal = movement * speed * time.delta_secs();
    let vertical = Vec3::Y * movement_state.vertical_velocity * time.delta_secs();
    controller.translation = Some(horizontal + vertical);
}

/// Spawn the player entity with camera.
pub fn spawn_player(commands: &mut Commands, position: Vec3, config: &PlayerConfig) -> Entity {
    let player = commands
        .spawn((
            Player,
            MovementState::default(),
            Health::new(config.max_health),
            Transform::from_translation(position),
            Visibility::default(),
            RigidBody::KinematicPositionBased,
            Collider::capsule_y(0.5, 0.3),
            KinematicCharacterController {
                offset: CharacterLength::Absolute(0.01),
                autostep: Some(CharacterAutostep {
                    max_height: CharacterLength::Absolute(0.4),
                    min_width: CharacterLength::Absolute(0.3),
                    include_dynamic_bodies: false,
                }),
                snap_to_ground: Some(CharacterLength::Absolute(0.5)),
                ..default()
            },
        ))
        .id();

    commands.entity(player).with_children(|parent| {
        parent.spawn((
            Camera3d::default(),
            Camera {
                clear_color: ClearColorConfig::Custom(Color::srgb(0.02, 0.02, 0.03)),
                ..default()
            },
            DistanceFog {
                color: Color::srgb(0.04, 0.04, 0.05),
                falloff: FogFalloff::ExponentialSquared { density: 0.06 },
                ..default()
            },
            PlayerCamera::default(),
            // Eye level relative to the capsule centre
            Transform::from_xyz(0.0, 0.4, 0.0),
        ));
    });

    player
}
