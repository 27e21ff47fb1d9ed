//! Level construction from data definitions.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::data::LevelDefinition;
use super::delivery::DeliveryZone;
use crate::enemies::{spawn_mimic, IndicatorTag, MimicRegistry};

/// Marker for all level entities that should be cleaned up.
#[derive(Component)]
pub struct LevelGeometry;

const FLOOR_THICKNESS: f32 = 0.2;

/// Build a level from a level definition. Returns where the player starts.
pub fn build_level_from_data(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    level: &LevelDefinition,
    mimic_registry: &MimicRegistry,
) -> Vec3 {
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.6, 0.6, 0.7),
        brightness: level.ambient_brightness,
    });

    spawn_floor_and_walls(commands, meshes, materials, level);

    for light in &level.lights {
        let (x, y, z) = light.position;
        let (r, g, b) = light.color;
        commands.spawn((
            PointLight {
                color: Color::srgb(r, g, b),
                intensity: light.intensity,
                range: light.range,
                shadows_enabled: light.shadows,
                ..default()
            },
            Transform::from_xyz(x, y, z),
            LevelGeometry,
        ));
    }

    let indicators = spawn_indicators(commands, meshes, materials, level);

    if let Some(zone) = &level.delivery_zone {
        let (x, y, z) = zone.center;
        let (hx, hy, hz) = zone.half_extents;
        commands.spawn((
            DeliveryZone,
            Mesh3d(meshes.add(Cuboid::new(hx * 2.0, 0.05, hz * 2.0))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgba(0.9, 0.8, 0.3, 0.4),
                alpha_mode: AlphaMode::Blend,
                unlit: true,
                ..default()
            })),
            Transform::from_xyz(x, y, z),
            Collider::cuboid(hx, hy, hz),
            Sensor,
            ActiveEvents::COLLISION_EVENTS,
            // The player is a kinematic body; sensors ignore those by default
            ActiveCollisionTypes::default() | ActiveCollisionTypes::KINEMATIC_STATIC,
            LevelGeometry,
        ));
    }

    for spawn in &level.mimics {
        let Some(definition) = mimic_registry.get(&spawn.kind) else {
            warn!("Unknown mimic type in level '{}': {}", level.name, spawn.kind);
            continue;
        };
        let linked = if spawn.link_indicators {
            indicators.clone()
        } else {
            Vec::new()
        };
        let (x, z) = spawn.position;
        spawn_mimic(
            commands,
            meshes,
            materials,
            &spawn.kind,
            definition,
            Vec3::new(x, 0.0, z),
            linked,
            LevelGeometry,
        );
    }

    level.player_spawn()
}

fn spawn_floor_and_walls(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    level: &LevelDefinition,
) {
    let floor_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.25, 0.24, 0.22),
        perceptual_roughness: 0.95,
        ..default()
    });
    let wall_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.35, 0.33, 0.3),
        perceptual_roughness: 0.9,
        ..default()
    });

    let (width, depth) = (level.floor.width, level.floor.depth);
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(width, FLOOR_THICKNESS, depth))),
        MeshMaterial3d(floor_material),
        Transform::from_xyz(0.0, -FLOOR_THICKNESS / 2.0, 0.0),
        Collider::cuboid(width / 2.0, FLOOR_THICKNESS / 2.0, depth / 2.0),
        LevelGeometry,
    ));

    let height = level.wall_height;
    for wall in &level.walls {
        let (sx, sz) = wall.size;
        let (cx, cz) = wall.center;
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(sx, height, sz))),
            MeshMaterial3d(wall_material.clone()),
            Transform::from_xyz(cx, height / 2.0, cz),
            Collider::cuboid(sx / 2.0, height / 2.0, sz / 2.0),
            LevelGeometry,
        ));
    }
}

/// Spawn indicators, each with its own material so they blend independently.
fn spawn_indicators(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    level: &LevelDefinition,
) -> Vec<Entity> {
    let start_color = Color::srgb(0.5, 0.5, 0.5);

    level
        .indicators
        .iter()
        .map(|indicator| {
            let (x, y, z) = indicator.position;
            let material = materials.add(StandardMaterial {
                base_color: start_color,
                emissive: start_color.to_linear(),
                ..default()
            });
            let mut entity = commands.spawn((
                IndicatorTag,
                Mesh3d(meshes.add(Sphere::new(indicator.size))),
                MeshMaterial3d(material),
                Transform::from_xyz(x, y, z),
                LevelGeometry,
            ));
            if indicator.light {
                entity.insert(PointLight {
                    color: start_color,
                    intensity: 40000.0,
                    range: 10.0,
                    shadows_enabled: false,
                    ..default()
                });
            }
            entity.id()
        })
        .collect()
}
