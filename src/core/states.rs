//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. Mimic AI and
//! player movement only run in `InGame`, menu systems only in `MainMenu`.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// - Start in `Loading` while data files are read
/// - Move to `MainMenu` when loading completes
/// - Enter `InGame` when the player presses Play Now
/// - `Paused` freezes gameplay but keeps the world visible
/// - `GameOver` when the mimic has killed the player
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading data files
    #[default]
    Loading,
    /// Main menu / title screen
    MainMenu,
    /// Active gameplay
    InGame,
    /// Game is paused (overlay on gameplay)
    Paused,
    /// Player has died
    GameOver,
}

/// Which main menu panel is showing. Only exists while in `GameState::MainMenu`.
#[derive(SubStates, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
#[source(GameState = GameState::MainMenu)]
pub enum MenuScreen {
    #[default]
    Main,
    Credits,
}

/// Present while a level is loaded, i.e. during `InGame` and `Paused`.
///
/// Level setup and teardown hang off this state so that pausing does not
/// tear the world down.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct InSession;

impl ComputedStates for InSession {
    type SourceStates = GameState;

    fn compute(sources: GameState) -> Option<Self> {
        matches!(sources, GameState::InGame | GameState::Paused).then_some(InSession)
    }
}
