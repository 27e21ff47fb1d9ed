//! Core plugin that sets up game states, events, and pause handling.

use bevy::prelude::*;

use super::events::*;
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, MainMenu, InGame, Paused, GameOver)
/// - Global events (DamageEvent, MimicSpotted, MealDelivered, etc.)
/// - Escape-to-pause and the virtual clock freeze while paused
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            .init_state::<GameState>()
            .add_sub_state::<MenuScreen>()
            .add_computed_state::<InSession>()

            .add_event::<DamageEvent>()
            .add_event::<DeathEvent>()
            .add_event::<MimicSpotted>()
            .add_event::<MimicLostSight>()
            .add_event::<MimicAttacked>()
            .add_event::<MealDelivered>()

            // Data files are read in Startup, so there is nothing to wait for
            .add_systems(OnEnter(GameState::Loading), transition_to_main_menu)

            .add_systems(
                Update,
                handle_pause_input.run_if(in_state(GameState::InGame).or(in_state(GameState::Paused))),
            )

            // Time scale: 0 while paused, 1 otherwise
            .add_systems(OnEnter(GameState::Paused), freeze_time)
            .add_systems(OnExit(GameState::Paused), resume_time);
    }
}

fn transition_to_main_menu(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::MainMenu);
}

/// Handle Escape key to pause/unpause the game.
fn handle_pause_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    current_state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        match current_state.get() {
            GameState::InGame => next_state.set(GameState::Paused),
            GameState::Paused => next_state.set(GameState::InGame),
            _ => {}
        }
    }
}

fn freeze_time(mut time: ResMut<Time<Virtual>>) {
    time.pause();
    info!("Game paused");
}

fn resume_time(mut time: ResMut<Time<Virtual>>) {
    time.unpause();
    info!("Game resumed");
}
