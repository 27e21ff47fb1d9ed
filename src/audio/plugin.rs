//! Audio plugin - plays mimic cues on AI events.

use bevy::prelude::*;
use bevy_kira_audio::{Audio, AudioControl};

use super::cues::{load_sound_cues, pick_clip, SoundCues};
use crate::core::{MimicAttacked, MimicSpotted};

/// Plays a random spotted/attack clip when a mimic spots or hits the player.
///
/// Needs `bevy_kira_audio::AudioPlugin` in the app.
pub struct AudioCuePlugin;

impl Plugin for AudioCuePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SoundCues>()
            .add_systems(Startup, load_sound_cues)
            .add_systems(Update, (play_spotted_cues, play_attack_cues));
    }
}

fn play_spotted_cues(
    mut events: EventReader<MimicSpotted>,
    cues: Res<SoundCues>,
    audio: Res<Audio>,
) {
    for _ in events.read() {
        if let Some(clip) = pick_clip(&cues.spotted) {
            audio.play(clip);
        }
    }
}

fn play_attack_cues(
    mut events: EventReader<MimicAttacked>,
    cues: Res<SoundCues>,
    audio: Res<Audio>,
) {
    for _ in events.read() {
        if let Some(clip) = pick_clip(&cues.attack) {
            audio.play(clip);
        }
    }
}
