//! Audio module - mimic sound cues.

mod cues;
mod plugin;

pub use cues::{CueFile, SoundCues};
pub use plugin::AudioCuePlugin;
