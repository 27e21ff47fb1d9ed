//! Mimic-related components.

use bevy::prelude::*;

/// Marker component for all mimics.
#[derive(Component)]
pub struct Mimic;

/// Mimic type identifier (matches RON file name).
#[derive(Component, Clone)]
pub struct MimicType(pub String);

/// Tunable mimic parameters, loaded from RON data files.
#[derive(Debug, Clone)]
pub struct MimicStats {
    // Perception
    pub sight_range: f32,
    pub field_of_view_deg: f32,
    /// Eye position relative to the body origin, in world axes
    pub sight_offset: Vec3,
    /// Seconds the target may stay hidden before the chase is dropped
    pub lose_sight_delay: f32,
    // Locomotion
    pub patrol_radius: f32,
    /// Stopping distance of the navigation agent
    pub waypoint_tolerance: f32,
    /// Longest time spent heading for one scout waypoint
    pub min_scout_time: f32,
    pub chase_speed: f32,
    pub patrol_speed: f32,
    // Combat
    pub attack_range: f32,
    pub attack_cooldown: f32,
    pub attack_damage: f32,
    /// Seconds the attack effect stays visible
    pub attack_effect_hold: f32,
    // Visual feedback
    pub chase_color: Color,
    pub patrol_color: Color,
    pub color_transition_speed: f32,
}

impl Default for MimicStats {
    fn default() -> Self {
        Self {
            sight_range: 10.0,
            field_of_view_deg: 90.0,
            sight_offset: Vec3::ZERO,
            lose_sight_delay: 3.0,
            patrol_radius: 10.0,
            waypoint_tolerance: 1.5,
            min_scout_time: 3.0,
            chase_speed: 10.0,
            patrol_speed: 5.0,
            attack_range: 2.0,
            attack_cooldown: 5.0,
            attack_damage: 20.0,
            attack_effect_hold: 0.5,
            chase_color: Color::srgb(1.0, 0.0, 0.0),
            patrol_color: Color::srgb(0.0, 1.0, 0.0),
            color_transition_speed: 1.0,
        }
    }
}

/// Who the mimic hunts. Filled with the player when empty or stale.
#[derive(Component, Default, Debug, Clone, Copy)]
pub struct ChaseTarget(pub Option<Entity>);

/// Indicator entities this mimic recolours.
///
/// Empty means "every entity tagged with [`IndicatorTag`]".
#[derive(Component, Default, Debug, Clone)]
pub struct VisualIndicators(pub Vec<Entity>);

/// Tag for scene objects that show the mimic's mood.
#[derive(Component)]
pub struct IndicatorTag;

/// Marker for the effect shown while an attack lands.
#[derive(Component)]
pub struct AttackEffect;

/// Link from a mimic to its attack effect entity.
#[derive(Component, Default, Debug, Clone, Copy)]
pub struct AttackEffectLink(pub Option<Entity>);

/// Internal event: show or hide a mimic's attack effect.
#[derive(Event, Debug, Clone, Copy)]
pub struct AttackEffectToggled {
    pub mimic: Entity,
    pub visible: bool,
}
