//! Meal delivery trigger.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::MealDelivered;
use crate::player::Player;

/// Marker for the delivery trigger volume.
#[derive(Component)]
pub struct DeliveryZone;

/// Whether the meal has been delivered this session.
#[derive(Resource, Default, Debug)]
pub struct MealStatus {
    pub delivered: bool,
}

/// Log and report when the player walks into a delivery zone.
pub fn detect_deliveries(
    mut collisions: EventReader<CollisionEvent>,
    zone_query: Query<(), With<DeliveryZone>>,
    player_query: Query<(), With<Player>>,
    mut status: ResMut<MealStatus>,
    mut delivered_events: EventWriter<MealDelivered>,
) {
    for event in collisions.read() {
        let CollisionEvent::Started(a, b, _) = event else {
            continue;
        };

        let player = if zone_query.contains(*a) && player_query.contains(*b) {
            *b
        } else if zone_query.contains(*b) && player_query.contains(*a) {
            *a
        } else {
            continue;
        };

        info!("Delivered meal");
        status.delivered = true;
        delivered_events.send(MealDelivered { player });
    }
}
