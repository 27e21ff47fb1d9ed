//! Mimic spawning.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::brain::MimicBrain;
use super::components::{
    AttackEffect, AttackEffectLink, ChaseTarget, Mimic, MimicStats, MimicType, VisualIndicators,
};
use super::data::MimicDefinition;
use super::navigation::NavAgent;

/// Behaviour components every mimic carries, without body or visuals.
pub fn mimic_behaviour(stats: MimicStats) -> impl Bundle {
    (
        Mimic,
        MimicBrain::new(stats),
        NavAgent::default(),
        ChaseTarget::default(),
        AttackEffectLink::default(),
    )
}

/// Spawn a mimic body with its attack effect child.
///
/// `indicators` may be empty, in which case every tagged indicator is used.
#[allow(clippy::too_many_arguments)]
pub fn spawn_mimic(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    mimic_type: &str,
    definition: &MimicDefinition,
    position: Vec3,
    indicators: Vec<Entity>,
    cleanup_marker: impl Component,
) -> Entity {
    let radius = definition.body_radius;
    let half_height = definition.body_half_height;
    // Stand the capsule on the floor
    let spawn_pos = Vec3::new(position.x, half_height + radius, position.z);

    let body_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.12, 0.1, 0.1),
        perceptual_roughness: 0.9,
        ..default()
    });
    let effect_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.7, 0.8, 1.0),
        emissive: LinearRgba::rgb(4.0, 5.0, 8.0),
        unlit: true,
        ..default()
    });

    let mimic = commands
        .spawn((
            mimic_behaviour(definition.to_stats()),
            MimicType(mimic_type.to_string()),
            VisualIndicators(indicators),
            Mesh3d(meshes.add(Capsule3d::new(radius, half_height * 2.0))),
            MeshMaterial3d(body_material),
            Transform::from_translation(spawn_pos),
            RigidBody::KinematicPositionBased,
            Collider::capsule_y(half_height, radius),
            KinematicCharacterController {
                offset: CharacterLength::Absolute(0.01),
                ..default()
            },
            cleanup_marker,
        ))
        .id();

    let effect = commands
        .spawn((
            AttackEffect,
            Mesh3d(meshes.add(Sphere::new(radius * 1.6))),
            MeshMaterial3d(effect_material),
            PointLight {
                color: Color::srgb(0.7, 0.8, 1.0),
                intensity: 200000.0,
                range: 8.0,
                shadows_enabled: false,
                ..default()
            },
            Transform::default(),
            Visibility::Hidden,
        ))
        .id();

    commands
        .entity(mimic)
        .add_child(effect)
        .insert(AttackEffectLink(Some(effect)));

    info!("Spawned {} at {:?}", definition.name, spawn_pos);
    mimic
}
