//! Mimic data loading from RON files.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::brain::MimicBrain;
use super::components::MimicStats;
use crate::world::{read_ron, DataLoadError};

/// Directory holding one RON file per mimic type.
pub const MIMIC_DATA_DIR: &str = "assets/data/enemies";

/// Type used when a level does not name one, and for the built-in fallback.
pub const DEFAULT_MIMIC_TYPE: &str = "mimic";

/// Mimic definition loaded from a RON file.
///
/// Every field has a default, so a file only needs the values it changes.
#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct MimicDefinition {
    pub name: String,
    // Perception
    pub sight_range: f32,
    pub field_of_view: f32,
    pub sight_offset: (f32, f32, f32),
    pub lose_sight_delay: f32,
    // Locomotion
    pub patrol_radius: f32,
    pub waypoint_tolerance: f32,
    pub min_scout_time: f32,
    pub chase_speed: f32,
    pub patrol_speed: f32,
    // Combat
    pub attack_range: f32,
    pub attack_cooldown: f32,
    pub attack_damage: f32,
    pub attack_effect_hold: f32,
    // Visual feedback, sRGB
    pub chase_color: (f32, f32, f32),
    pub patrol_color: (f32, f32, f32),
    pub color_transition_speed: f32,
    // Body
    pub body_radius: f32,
    pub body_half_height: f32,
}

impl Default for MimicDefinition {
    fn default() -> Self {
        Self {
            name: "Mimic".to_string(),
            sight_range: 10.0,
            field_of_view: 90.0,
            sight_offset: (0.0, 0.0, 0.0),
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
            chase_color: (1.0, 0.0, 0.0),
            patrol_color: (0.0, 1.0, 0.0),
            color_transition_speed: 1.0,
            body_radius: 0.4,
            body_half_height: 0.6,
        }
    }
}

impl MimicDefinition {
    /// Reject values the behaviour cannot work with.
    pub fn validate(&self) -> Result<(), DataLoadError> {
        let invalid = |reason: &str| {
            Err(DataLoadError::InvalidDefinition {
                name: self.name.clone(),
                reason: reason.to_string(),
            })
        };

        if !(self.field_of_view > 0.0 && self.field_of_view <= 360.0) {
            return invalid("field_of_view must be in (0, 360]");
        }
        let non_negative = [
            ("sight_range", self.sight_range),
            ("lose_sight_delay", self.lose_sight_delay),
            ("patrol_radius", self.patrol_radius),
            ("waypoint_tolerance", self.waypoint_tolerance),
            ("min_scout_time", self.min_scout_time),
            ("chase_speed", self.chase_speed),
            ("patrol_speed", self.patrol_speed),
            ("attack_range", self.attack_range),
            ("attack_cooldown", self.attack_cooldown),
            ("attack_damage", self.attack_damage),
            ("attack_effect_hold", self.attack_effect_hold),
            ("color_transition_speed", self.color_transition_speed),
        ];
        if let Some((field, _)) = non_negative.iter().find(|(_, value)| *value < 0.0) {
            return invalid(&format!("{field} must not be negative"));
        }
        if self.body_radius <= 0.0 || self.body_half_height <= 0.0 {
            return invalid("body dimensions must be positive");
        }
        Ok(())
    }

    /// Convert to the stats the brain runs on.
    pub fn to_stats(&self) -> MimicStats {
        let (r, g, b) = self.chase_color;
        let chase_color = Color::srgb(r, g, b);
        let (r, g, b) = self.patrol_color;
        let patrol_color = Color::srgb(r, g, b);
        let (x, y, z) = self.sight_offset;

        MimicStats {
            sight_range: self.sight_range,
            field_of_view_deg: self.field_of_view,
            sight_offset: Vec3::new(x, y, z),
            lose_sight_delay: self.lose_sight_delay,
            patrol_radius: self.patrol_radius,
            waypoint_tolerance: self.waypoint_tolerance,
            min_scout_time: self.min_scout_time,
            chase_speed: self.chase_speed,
            patrol_speed: self.patrol_speed,
            attack_range: self.attack_range,
            attack_cooldown: self.attack_cooldown,
            attack_damage: self.attack_damage,
            attack_effect_hold: self.attack_effect_hold,
            chase_color,
            patrol_color,
            color_transition_speed: self.color_transition_speed,
        }
    }
}

impl MimicBrain {
    /// Build a brain straight from a loaded definition.
    pub fn from_definition(definition: &MimicDefinition) -> Self {
        Self::new(definition.to_stats())
    }
}

/// Read and validate one definition file.
pub fn load_definition(path: &Path) -> Result<MimicDefinition, DataLoadError> {
    let definition: MimicDefinition = read_ron(path)?;
    definition.validate()?;
    Ok(definition)
}

/// Resource holding all loaded mimic definitions.
#[derive(Resource, Default)]
pub struct MimicRegistry {
    pub definitions: HashMap<String, MimicDefinition>,
}

impl MimicRegistry {
    /// Get a mimic definition by type name.
    pub fn get(&self, mimic_type: &str) -> Option<&MimicDefinition> {
        self.definitions.get(mimic_type)
    }
}

/// Load all mimic definitions from the assets/data/enemies/ directory.
pub fn load_mimic_definitions(mut registry: ResMut<MimicRegistry>) {
    let mimics_dir = Path::new(MIMIC_DATA_DIR);

    match fs::read_dir(mimics_dir) {
        Ok(entries) => {
            for entry in entries.flatten() {
                let path = entry.path();
                if !path.extension().is_some_and(|ext| ext == "ron") {
                    continue;
                }

                let mimic_type = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("unknown")
                    .to_string();

                match load_definition(&path) {
                    Ok(definition) => {
                        info!("Loaded mimic definition: {} ({})", definition.name, mimic_type);
                        registry.definitions.insert(mimic_type, definition);
                    }
                    Err(e) => error!("{}", e),
                }
            }
        }
        Err(e) => warn!("Mimic definitions directory {:?} unreadable: {}", mimics_dir, e),
    }

    if !registry.definitions.contains_key(DEFAULT_MIMIC_TYPE) {
        warn!("No '{}' definition on disk, using built-in defaults", DEFAULT_MIMIC_TYPE);
        registry
            .definitions
            .insert(DEFAULT_MIMIC_TYPE.to_string(), MimicDefinition::default());
    }

    info!("Loaded {} mimic definitions", registry.definitions.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::parse_ron;

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let definition: MimicDefinition =
            parse_ron("inline", "(name: \"Shy Mimic\", sight_range: 6.0, chase_color: (0.5, 0.0, 0.5))").unwrap();

        assert_eq!(definition.name, "Shy Mimic");
        assert_eq!(definition.sight_range, 6.0);
        assert_eq!(definition.attack_cooldown, 5.0);
        assert!(definition.validate().is_ok());

        let stats = definition.to_stats();
        assert_eq!(stats.sight_range, 6.0);
        assert_eq!(stats.chase_color, Color::srgb(0.5, 0.0, 0.5));
        assert_eq!(stats.patrol_color, Color::srgb(0.0, 1.0, 0.0));
    }

    #[test]
    fn negative_values_are_rejected() {
        let definition = MimicDefinition {
            attack_cooldown: -1.0,
            ..default()
        };
        match definition.validate() {
            Err(DataLoadError::InvalidDefinition { reason, .. }) => {
                assert!(reason.contains("attack_cooldown"))
            }
            other => panic!("expected invalid definition, got {other:?}"),
        }
    }

    #[test]
    fn field_of_view_must_be_a_cone() {
        let definition = MimicDefinition {
            field_of_view: 0.0,
            ..default()
        };
        assert!(definition.validate().is_err());
    }

    #[test]
    fn shipped_definition_loads() {
        let definition = load_definition(Path::new("assets/data/enemies/mimic.ron")).unwrap();
        assert_eq!(definition.name, "Mimic");
        assert!(definition.sight_offset.1 > 0.0);
    }

    #[test]
    fn brain_from_definition_starts_patrolling() {
        let definition = MimicDefinition {
            sight_range: 4.0,
            ..default()
        };
        let brain = MimicBrain::from_definition(&definition);

        assert_eq!(brain.stats.sight_range, 4.0);
        assert!(!brain.is_chasing());
        assert_eq!(brain.last_attack_at(), None);
    }
}
