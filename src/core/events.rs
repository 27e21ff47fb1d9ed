//! Global events used for cross-system communication.
//!
//! The mimic AI sends `DamageEvent`s, the combat plugin applies them, and the
//! audio plugin listens for `MimicSpotted`/`MimicAttacked` to play cues.

use bevy::prelude::*;

/// Sent when an entity takes damage.
#[derive(Event, Debug, Clone)]
pub struct DamageEvent {
    /// Entity receiving damage
    pub target: Entity,
    /// Entity that caused the damage
    pub source: Entity,
    pub amount: f32,
}

/// Sent when an entity's health reaches 0.
#[derive(Event, Debug, Clone)]
pub struct DeathEvent {
    pub entity: Entity,
    pub killed_by: Option<Entity>,
}

/// Sent when a mimic first sees its target and starts chasing.
#[derive(Event, Debug, Clone)]
pub struct MimicSpotted {
    pub mimic: Entity,
    pub target: Entity,
}

/// Sent when a mimic gives up a chase.
#[derive(Event, Debug, Clone)]
pub struct MimicLostSight {
    pub mimic: Entity,
}

/// Sent when a mimic attack actually fires (not when it is on cooldown).
#[derive(Event, Debug, Clone)]
pub struct MimicAttacked {
    pub mimic: Entity,
    pub target: Entity,
}

/// Sent when the player walks into the delivery trigger.
#[derive(Event, Debug, Clone)]
pub struct MealDelivered {
    pub player: Entity,
}
