//! Mimic AI systems: adapt ECS data and physics to the brain's capabilities.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::brain::{
    AttackOutcome, EffectToggle, MimicBrain, NavigationSurface, SightQuery, TargetInfo,
    TickContext,
};
use super::components::{
    AttackEffect, AttackEffectLink, AttackEffectToggled, ChaseTarget, Mimic,
};
use super::navigation::NavAgent;
use crate::core::{DamageEvent, MimicAttacked, MimicLostSight, MimicSpotted};
use crate::player::Player;
use crate::world::WalkableSurface;

/// Line-of-sight through the Rapier query pipeline.
///
/// Without a physics context every line counts as clear.
pub struct RapierSight<'a> {
    context: Option<&'a RapierContext>,
    /// The looking body, so the ray does not hit its own collider
    viewer: Entity,
}

impl<'a> RapierSight<'a> {
    pub fn new(context: Option<&'a RapierContext>, viewer: Entity) -> Self {
        Self { context, viewer }
    }
}

impl SightQuery for RapierSight<'_> {
    fn linecast(&self, from: Vec3, to: Vec3) -> Option<Entity> {
        let context = self.context?;
        let direction = to - from;
        if direction.length_squared() < 1e-8 {
            return None;
        }

        let filter = QueryFilter::default()
            .exclude_sensors()
            .exclude_collider(self.viewer);
        // Unnormalised direction: time of impact 1.0 is the end of the segment
        context
            .cast_ray(from, direction, 1.0, true, filter)
            .map(|(entity, _)| entity)
    }
}

/// Surface used when no level is loaded: nothing is walkable.
struct NoSurface;

impl NavigationSurface for NoSurface {
    fn sample_position(&self, _near: Vec3, _max_distance: f32) -> Option<Vec3> {
        None
    }
}

/// Point mimics with no (or a despawned) target at the player.
pub fn acquire_targets(
    player_query: Query<Entity, With<Player>>,
    mut mimic_query: Query<&mut ChaseTarget, With<Mimic>>,
    existing: Query<(), With<Transform>>,
) {
    let player = player_query.get_single().ok();

    for mut target in mimic_query.iter_mut() {
        let stale = target.0.is_some_and(|entity| existing.get(entity).is_err());
        if target.0.is_none() || stale {
            target.0 = player;
        }
    }
}

/// Apply starting speed and stopping distance to freshly spawned mimics.
pub fn activate_brains(
    mut query: Query<(&mut MimicBrain, &mut NavAgent, &Transform), Added<MimicBrain>>,
) {
    for (mut brain, mut agent, transform) in query.iter_mut() {
        brain.activate(agent.as_mut(), transform.translation);
    }
}

/// Tick every mimic brain and turn its report into events.
#[allow(clippy::too_many_arguments)]
pub fn run_mimic_brains(
    time: Res<Time>,
    surface: Option<Res<WalkableSurface>>,
    rapier_context: Query<&RapierContext>,
    target_query: Query<&Transform, Without<Mimic>>,
    mut mimic_query: Query<
        (Entity, &Transform, &mut MimicBrain, &mut NavAgent, &ChaseTarget),
        With<Mimic>,
    >,
    mut spotted_events: EventWriter<MimicSpotted>,
    mut lost_events: EventWriter<MimicLostSight>,
    mut attack_events: EventWriter<MimicAttacked>,
    mut damage_events: EventWriter<DamageEvent>,
    mut effect_events: EventWriter<AttackEffectToggled>,
) {
    let context = rapier_context.get_single().ok();
    let surface: &dyn NavigationSurface = match surface.as_deref() {
        Some(surface) => surface,
        None => &NoSurface,
    };
    let mut rng = rand::thread_rng();

    for (entity, transform, mut brain, mut agent, chase_target) in mimic_query.iter_mut() {
        let target = chase_target.0.and_then(|target| {
            target_query.get(target).ok().map(|target_transform| TargetInfo {
                entity: target,
                position: target_transform.translation,
            })
        });

        let ctx = TickContext {
            dt: time.delta_secs(),
            now: time.elapsed_secs(),
            position: transform.translation,
            forward: transform.forward().as_vec3(),
            target,
        };
        let sight = RapierSight::new(context, entity);

        let report = brain.tick(&ctx, agent.as_mut(), surface, &sight, &mut rng);

        if let Some(target) = target {
            if report.spotted {
                spotted_events.send(MimicSpotted {
                    mimic: entity,
                    target: target.entity,
                });
            }
            if report.attack == Some(AttackOutcome::Fired) {
                attack_events.send(MimicAttacked {
                    mimic: entity,
                    target: target.entity,
                });
                damage_events.send(DamageEvent {
                    target: target.entity,
                    source: entity,
                    amount: brain.stats.attack_damage,
                });
            }
        }
        if report.lost {
            lost_events.send(MimicLostSight { mimic: entity });
        }
        if let Some(effect) = report.effect {
            effect_events.send(AttackEffectToggled {
                mimic: entity,
                visible: effect == EffectToggle::Show,
            });
        }
    }
}

/// Show or hide attack effects as the brains ask.
pub fn apply_attack_effects(
    mut toggles: EventReader<AttackEffectToggled>,
    links: Query<&AttackEffectLink>,
    mut effects: Query<&mut Visibility, With<AttackEffect>>,
) {
    for toggle in toggles.read() {
        let Some(effect) = links.get(toggle.mimic).ok().and_then(|link| link.0) else {
            continue;
        };
        let Ok(mut visibility) = effects.get_mut(effect) else {
            continue;
        };
        *visibility = if toggle.visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sight_without_physics_is_clear() {
        let sight = RapierSight::new(None, Entity::from_raw(1));
        assert_eq!(sight.linecast(Vec3::ZERO, Vec3::X * 5.0), None);
    }

    #[test]
    fn empty_surface_rejects_everything() {
        assert_eq!(NoSurface.sample_position(Vec3::ZERO, 100.0), None);
    }
}
