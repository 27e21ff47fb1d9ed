//! Sound cue lists loaded from assets/data/audio/cues.ron.

use bevy::prelude::*;
use bevy_kira_audio::AudioSource;
use rand::seq::SliceRandom;
use serde::Deserialize;
use std::path::Path;

use crate::world::read_ron;

pub const CUE_FILE: &str = "assets/data/audio/cues.ron";

/// Clip paths, relative to the assets folder.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CueFile {
    pub spotted: Vec<String>,
    pub attack: Vec<String>,
}

/// Loaded clip handles per cue.
#[derive(Resource, Default)]
pub struct SoundCues {
    pub spotted: Vec<Handle<AudioSource>>,
    pub attack: Vec<Handle<AudioSource>>,
}

/// Pick a random clip, or nothing from an empty list.
pub fn pick_clip<T: Clone>(clips: &[T]) -> Option<T> {
    clips.choose(&mut rand::thread_rng()).cloned()
}

/// Read the cue file and start loading its clips.
pub fn load_sound_cues(mut commands: Commands, asset_server: Res<AssetServer>) {
    let file: CueFile = match read_ron(Path::new(CUE_FILE)) {
        Ok(file) => file,
        Err(e) => {
            warn!("{}. Mimic will be silent.", e);
            CueFile::default()
        }
    };

    let load_all = |paths: &[String]| -> Vec<Handle<AudioSource>> {
        paths.iter().map(|path| asset_server.load(path.clone())).collect()
    };

    let cues = SoundCues {
        spotted: load_all(&file.spotted),
        attack: load_all(&file.attack),
    };
    info!(
        "Sound cues: {} spotted, {} attack",
        cues.spotted.len(),
        cues.attack.len()
    );
    commands.insert_resource(cues);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::parse_ron;

    #[test]
    fn empty_list_picks_nothing() {
        let clips: Vec<u32> = Vec::new();
        assert_eq!(pick_clip(&clips), None);
    }

    #[test]
    fn pick_comes_from_the_list() {
        let clips = [3, 5, 8];
        let picked = pick_clip(&clips).unwrap();
        assert!(clips.contains(&picked));
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let file: CueFile = parse_ron("inline", "(spotted: [\"audio/a.ogg\"])").unwrap();
        assert_eq!(file.spotted, vec!["audio/a.ogg".to_string()]);
        assert!(file.attack.is_empty());
    }
}
