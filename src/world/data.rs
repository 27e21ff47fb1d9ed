//! Level data structures and RON loading.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::error::{read_ron, DataLoadError};
use crate::enemies::data::DEFAULT_MIMIC_TYPE;

/// Directory holding one RON file per level.
pub const LEVEL_DATA_DIR: &str = "assets/data/levels";

/// Level loaded when the player presses Play Now.
pub const DEFAULT_LEVEL: &str = "canteen";

/// Rectangular floor centred on the world origin.
#[derive(Debug, Clone, Deserialize)]
pub struct FloorDef {
    pub width: f32,
    pub depth: f32,
}

/// A wall block standing on the floor, as an XZ footprint.
#[derive(Debug, Clone, Deserialize)]
pub struct WallDef {
    pub center: (f32, f32),
    pub size: (f32, f32),
}

impl WallDef {
    pub fn footprint(&self) -> Rect {
        Rect::from_center_size(
            Vec2::new(self.center.0, self.center.1),
            Vec2::new(self.size.0, self.size.1),
        )
    }
}

fn default_mimic_kind() -> String {
    DEFAULT_MIMIC_TYPE.to_string()
}

fn default_true() -> bool {
    true
}

/// Where a mimic starts, on the floor.
#[derive(Debug, Clone, Deserialize)]
pub struct MimicSpawn {
    #[serde(default = "default_mimic_kind")]
    pub kind: String,
    pub position: (f32, f32),
    /// Recolour the level's indicators explicitly rather than by tag
    #[serde(default = "default_true")]
    pub link_indicators: bool,
}

fn default_indicator_size() -> f32 {
    0.25
}

/// A glowing mood indicator.
#[derive(Debug, Clone, Deserialize)]
pub struct IndicatorDef {
    pub position: (f32, f32, f32),
    /// Also carries a point light
    #[serde(default)]
    pub light: bool,
    #[serde(default = "default_indicator_size")]
    pub size: f32,
}

/// The trigger volume the meal must be carried into.
#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryZoneDef {
    pub center: (f32, f32, f32),
    pub half_extents: (f32, f32, f32),
}

#[derive(Debug, Clone, Deserialize)]
pub struct LightDef {
    pub position: (f32, f32, f32),
    pub intensity: f32,
    pub range: f32,
    #[serde(default = "white")]
    pub color: (f32, f32, f32),
    #[serde(default)]
    pub shadows: bool,
}

fn white() -> (f32, f32, f32) {
    (1.0, 1.0, 1.0)
}

fn default_wall_height() -> f32 {
    3.0
}

fn default_ambient() -> f32 {
    40.0
}

/// A complete level definition.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelDefinition {
    pub name: String,
    pub floor: FloorDef,
    #[serde(default = "default_wall_height")]
    pub wall_height: f32,
    #[serde(default)]
    pub walls: Vec<WallDef>,
    pub player_spawn: (f32, f32, f32),
    #[serde(default)]
    pub mimics: Vec<MimicSpawn>,
    #[serde(default)]
    pub indicators: Vec<IndicatorDef>,
    #[serde(default)]
    pub delivery_zone: Option<DeliveryZoneDef>,
    #[serde(default)]
    pub lights: Vec<LightDef>,
    #[serde(default = "default_ambient")]
    pub ambient_brightness: f32,
}

impl Default for LevelDefinition {
    /// A small walled room, used when no level file can be loaded.
    fn default() -> Self {
        Self {
            name: "Fallback Room".to_string(),
            floor: FloorDef {
                width: 24.0,
                depth: 24.0,
            },
            wall_height: default_wall_height(),
            walls: vec![
                WallDef { center: (0.0, -12.0), size: (24.0, 0.5) },
                WallDef { center: (0.0, 12.0), size: (24.0, 0.5) },
                WallDef { center: (-12.0, 0.0), size: (0.5, 24.0) },
                WallDef { center: (12.0, 0.0), size: (0.5, 24.0) },
            ],
            player_spawn: (0.0, 1.0, 9.0),
            mimics: vec![MimicSpawn {
                kind: default_mimic_kind(),
                position: (0.0, -8.0),
                link_indicators: true,
            }],
            indicators: vec![IndicatorDef {
                position: (0.0, 2.5, -11.5),
                light: true,
                size: default_indicator_size(),
            }],
            delivery_zone: Some(DeliveryZoneDef {
                center: (9.0, 1.0, -9.0),
                half_extents: (1.5, 1.0, 1.5),
            }),
            lights: vec![LightDef {
                position: (0.0, 2.8, 0.0),
                intensity: 60000.0,
                range: 20.0,
                color: (1.0, 0.85, 0.7),
                shadows: true,
            }],
            ambient_brightness: default_ambient(),
        }
    }
}

impl LevelDefinition {
    /// Floor rectangle in XZ.
    pub fn floor_rect(&self) -> Rect {
        Rect::from_center_size(Vec2::ZERO, Vec2::new(self.floor.width, self.floor.depth))
    }

    pub fn player_spawn(&self) -> Vec3 {
        let (x, y, z) = self.player_spawn;
        Vec3::new(x, y, z)
    }

    /// Reject levels whose spawns fall off the floor.
    pub fn validate(&self) -> Result<(), DataLoadError> {
        let invalid = |reason: String| {
            Err(DataLoadError::InvalidDefinition {
                name: self.name.clone(),
                reason,
            })
        };

        if self.floor.width <= 0.0 || self.floor.depth <= 0.0 {
            return invalid("floor must have a positive size".to_string());
        }
        let floor = self.floor_rect();
        let spawn = self.player_spawn();
        if !floor.contains(Vec2::new(spawn.x, spawn.z)) {
            return invalid(format!("player spawn {spawn:?} is off the floor"));
        }
        for mimic in &self.mimics {
            let (x, z) = mimic.position;
            if !floor.contains(Vec2::new(x, z)) {
                return invalid(format!("mimic spawn ({x}, {z}) is off the floor"));
            }
        }
        Ok(())
    }
}

/// Read and validate one level file.
pub fn load_level(path: &Path) -> Result<LevelDefinition, DataLoadError> {
    let level: LevelDefinition = read_ron(path)?;
    level.validate()?;
    Ok(level)
}

/// Resource holding all loaded level definitions.
#[derive(Resource, Default)]
pub struct LevelRegistry {
    pub levels: HashMap<String, LevelDefinition>,
}

impl LevelRegistry {
    /// Get a level by file stem, falling back to the built-in room.
    pub fn get_or_fallback(&self, name: &str) -> LevelDefinition {
        match self.levels.get(name) {
            Some(level) => level.clone(),
            None => {
                warn!("Level '{}' not loaded, using the fallback room", name);
                LevelDefinition::default()
            }
        }
    }
}

/// Which level the next session builds.
#[derive(Resource)]
pub struct CurrentLevel {
    pub name: String,
}

impl Default for CurrentLevel {
    fn default() -> Self {
        Self {
            name: DEFAULT_LEVEL.to_string(),
        }
    }
}

/// Load all level definitions from assets/data/levels/.
pub fn load_level_definitions(mut registry: ResMut<LevelRegistry>) {
    let levels_dir = Path::new(LEVEL_DATA_DIR);

    let Ok(entries) = fs::read_dir(levels_dir) else {
        warn!("Level directory not found: {:?}", levels_dir);
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.extension().is_some_and(|ext| ext == "ron") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        match load_level(&path) {
            Ok(level) => {
                info!("Loaded level: {} ({})", level.name, stem);
                registry.levels.insert(stem.to_string(), level);
            }
            Err(e) => error!("{}", e),
        }
    }
}
