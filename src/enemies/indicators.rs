//! Mimic mood indicators: lamps and panels that drift between patrol and
//! chase colours.

use bevy::prelude::*;
use std::collections::HashMap;

use super::brain::MimicBrain;
use super::components::{IndicatorTag, VisualIndicators};
use crate::core::{blend_color, blend_linear};

/// Entities a mimic should recolour: its own list, or every tagged indicator.
pub fn indicator_targets(listed: &[Entity], tagged: impl Iterator<Item = Entity>) -> Vec<Entity> {
    if listed.is_empty() {
        tagged.collect()
    } else {
        listed.to_vec()
    }
}

/// Pick one owning mimic per indicator.
///
/// `owners` holds each mimic's indicator list and whether it is chasing.
/// An indicator shared by several mimics follows a chasing one if there is
/// any, so it is blended once per frame.
pub fn assign_indicators(owners: &[(&[Entity], bool)], tagged: &[Entity]) -> HashMap<Entity, usize> {
    let mut assigned: HashMap<Entity, usize> = HashMap::new();

    for (index, (listed, chasing)) in owners.iter().enumerate() {
        for entity in indicator_targets(listed, tagged.iter().copied()) {
            assigned
                .entry(entity)
                .and_modify(|owner| {
                    if *chasing && !owners[*owner].1 {
                        *owner = index;
                    }
                })
                .or_insert(index);
        }
    }
    assigned
}

/// Blend material, emission and light colours toward the owning mimic's target colour.
pub fn update_indicators(
    time: Res<Time>,
    mimic_query: Query<(&MimicBrain, &VisualIndicators)>,
    tagged_query: Query<Entity, With<IndicatorTag>>,
    mut parts_query: Query<(Option<&MeshMaterial3d<StandardMaterial>>, Option<&mut PointLight>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let dt = time.delta_secs();

    let brains: Vec<(&MimicBrain, &VisualIndicators)> = mimic_query.iter().collect();
    let owners: Vec<(&[Entity], bool)> = brains
        .iter()
        .map(|(brain, indicators)| (indicators.0.as_slice(), brain.is_chasing()))
        .collect();
    let tagged: Vec<Entity> = tagged_query.iter().collect();

    for (entity, owner) in assign_indicators(&owners, &tagged) {
        // Despawned indicators are skipped, the rest still update
        let Ok((material, light)) = parts_query.get_mut(entity) else {
            continue;
        };

        let brain = brains[owner].0;
        let target = brain.target_color();
        let rate = brain.stats.color_transition_speed;

        if let Some(material) = material.and_then(|handle| materials.get_mut(&handle.0)) {
            material.base_color = blend_color(material.base_color, target, rate, dt);
            material.emissive = blend_linear(material.emissive, target.to_linear(), rate, dt);
        }

        if let Some(mut light) = light {
            light.color = blend_color(light.color, target, rate, dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listed_indicators_win_over_tags() {
        let listed = [Entity::from_raw(1)];
        let tagged = vec![Entity::from_raw(2), Entity::from_raw(3)];
        assert_eq!(indicator_targets(&listed, tagged.into_iter()), vec![Entity::from_raw(1)]);
    }

    #[test]
    fn empty_list_falls_back_to_tagged() {
        let tagged = vec![Entity::from_raw(2), Entity::from_raw(3)];
        assert_eq!(
            indicator_targets(&[], tagged.clone().into_iter()),
            tagged
        );
    }

    #[test]
    fn shared_indicators_follow_a_chasing_mimic() {
        let tagged = [Entity::from_raw(2), Entity::from_raw(3)];
        let owners: [(&[Entity], bool); 2] = [(&[], false), (&[], true)];

        let assigned = assign_indicators(&owners, &tagged);

        assert_eq!(assigned.len(), 2);
        assert!(assigned.values().all(|&owner| owner == 1));
    }

    #[test]
    fn first_owner_keeps_indicator_when_nobody_chases() {
        let lamp = Entity::from_raw(5);
        let owners: [(&[Entity], bool); 2] = [(&[lamp], false), (&[lamp], false)];

        assert_eq!(assign_indicators(&owners, &[])[&lamp], 0);
    }

    #[test]
    fn listed_indicators_stay_with_their_mimic() {
        let lamp = Entity::from_raw(5);
        let tagged = [Entity::from_raw(2)];
        let owners: [(&[Entity], bool); 2] = [(&[lamp], false), (&[], true)];

        let assigned = assign_indicators(&owners, &tagged);

        assert_eq!(assigned[&lamp], 0);
        assert_eq!(assigned[&Entity::from_raw(2)], 1);
    }
}
