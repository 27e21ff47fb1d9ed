//! World module - levels, walkable surface and the delivery trigger.

mod builder;
mod data;
mod delivery;
mod error;
mod plugin;
mod surface;

pub use builder::LevelGeometry;
pub use data::{CurrentLevel, LevelDefinition, LevelRegistry};
pub use delivery::{detect_deliveries, DeliveryZone, MealStatus};
pub use error::{parse_ron, read_ron, DataLoadError};
pub use plugin::{setup_level, WorldPlugin};
pub use surface::WalkableSurface;
