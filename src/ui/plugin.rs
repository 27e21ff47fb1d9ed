//! UI plugin - menus, HUD, and interface elements.

use bevy::prelude::*;

use super::hud;
use crate::core::{GameState, MenuScreen};

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        hud::setup_hud_systems(app);

        app
            // Main menu: the camera lives for the whole state, panels per screen
            .add_systems(OnEnter(GameState::MainMenu), spawn_menu_camera)
            .add_systems(OnExit(GameState::MainMenu), cleanup_menu_camera)
            .add_systems(OnEnter(MenuScreen::Main), setup_main_panel)
            .add_systems(OnExit(MenuScreen::Main), cleanup::<MainPanelUi>)
            .add_systems(OnEnter(MenuScreen::Credits), setup_credits_panel)
            .add_systems(OnExit(MenuScreen::Credits), cleanup::<CreditsPanelUi>)

            // Pause menu
            .add_systems(OnEnter(GameState::Paused), setup_pause_menu)
            .add_systems(OnExit(GameState::Paused), cleanup::<PauseMenuUi>)

            // Game over
            .add_systems(OnEnter(GameState::GameOver), (spawn_menu_camera, setup_game_over))
            .add_systems(
                OnExit(GameState::GameOver),
                (cleanup::<GameOverUi>, cleanup_menu_camera),
            )

            .add_systems(
                Update,
                menu_button_input.run_if(
                    in_state(GameState::MainMenu)
                        .or(in_state(GameState::Paused))
                        .or(in_state(GameState::GameOver)),
                ),
            );
    }
}

/// Marker for the main menu's button panel.
#[derive(Component)]
struct MainPanelUi;

/// Marker for the credits panel.
#[derive(Component)]
struct CreditsPanelUi;

/// Marker for the menu camera (used when no game camera exists).
#[derive(Component)]
struct MenuCamera;

/// Marker for pause menu UI entities.
#[derive(Component)]
struct PauseMenuUi;

/// Marker for game over UI entities.
#[derive(Component)]
struct GameOverUi;

/// What a menu button does when pressed.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
enum MenuButton {
    PlayNow,
    Credits,
    Back,
    Quit,
    Resume,
    MainMenu,
    Retry,
}

const BUTTON_IDLE: Color = Color::srgb(0.15, 0.15, 0.2);
const BUTTON_HOVER: Color = Color::srgb(0.25, 0.25, 0.3);
const BUTTON_PRESSED: Color = Color::srgb(0.3, 0.3, 0.35);

fn spawn_menu_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MenuCamera));
}

fn cleanup_menu_camera(mut commands: Commands, query: Query<Entity, With<MenuCamera>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

/// Despawn every entity carrying marker `T`.
fn cleanup<T: Component>(mut commands: Commands, query: Query<Entity, With<T>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

/// Full-screen column container used by every menu screen.
fn screen_root(background: Color) -> impl Bundle {
    (
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        BackgroundColor(background),
    )
}

fn spawn_title(parent: &mut ChildBuilder, text: &str, size: f32, color: Color, gap: f32) {
    parent.spawn((
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
        Node {
            margin: UiRect::bottom(Val::Px(gap)),
            ..default()
        },
    ));
}

/// Set up the main menu button panel.
fn setup_main_panel(mut commands: Commands) {
    commands
        .spawn((screen_root(Color::srgb(0.05, 0.05, 0.08)), MainPanelUi))
        .with_children(|parent| {
            spawn_title(parent, "MIMIC", 80.0, Color::srgb(0.8, 0.3, 0.25), 20.0);
            spawn_title(
                parent,
                "Deliver the meal. Don't trust the furniture.",
                22.0,
                Color::srgb(0.5, 0.5, 0.55),
                60.0,
            );

            spawn_menu_button(parent, "Play Now", MenuButton::PlayNow);
            spawn_menu_button(parent, "Credits", MenuButton::Credits);
            spawn_menu_button(parent, "Quit", MenuButton::Quit);
        });
}

/// Set up the credits panel.
fn setup_credits_panel(mut commands: Commands) {
    commands
        .spawn((screen_root(Color::srgb(0.05, 0.05, 0.08)), CreditsPanelUi))
        .with_children(|parent| {
            spawn_title(parent, "CREDITS", 48.0, Color::srgb(0.8, 0.7, 0.6), 30.0);
            for line in [
                "Built with Bevy and Rapier",
                "Audio by bevy_kira_audio",
                "Thanks for playing",
            ] {
                spawn_title(parent, line, 20.0, Color::srgb(0.6, 0.6, 0.65), 10.0);
            }

            spawn_menu_button(parent, "Back", MenuButton::Back);
        });
}

/// Helper to spawn a menu button.
fn spawn_menu_button(parent: &mut ChildBuilder, text: &str, button: MenuButton) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(200.0),
                height: Val::Px(50.0),
                margin: UiRect::all(Val::Px(10.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(BUTTON_IDLE),
            button,
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(text),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.85)),
            ));
        });
}

/// Handle button interactions for every menu screen.
fn menu_button_input(
    mut interaction_query: Query<
        (&Interaction, &MenuButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut next_state: ResMut<NextState<GameState>>,
    mut next_screen: ResMut<NextState<MenuScreen>>,
    mut exit: EventWriter<AppExit>,
) {
    for (interaction, button, mut bg_color) in interaction_query.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                *bg_color = BUTTON_PRESSED.into();
                match button {
                    MenuButton::PlayNow | MenuButton::Resume | MenuButton::Retry => {
                        next_state.set(GameState::InGame);
                    }
                    MenuButton::MainMenu => next_state.set(GameState::MainMenu),
                    MenuButton::Credits => next_screen.set(MenuScreen::Credits),
                    MenuButton::Back => next_screen.set(MenuScreen::Main),
                    MenuButton::Quit => {
                        exit.send(AppExit::Success);
                    }
                }
            }
            Interaction::Hovered => *bg_color = BUTTON_HOVER.into(),
            Interaction::None => *bg_color = BUTTON_IDLE.into(),
        }
    }
}

/// Set up the pause menu.
fn setup_pause_menu(mut commands: Commands) {
    commands
        .spawn((screen_root(Color::srgba(0.0, 0.0, 0.0, 0.7)), PauseMenuUi))
        .with_children(|parent| {
            spawn_title(parent, "PAUSED", 48.0, Color::srgb(0.8, 0.8, 0.85), 40.0);

            spawn_menu_button(parent, "Resume", MenuButton::Resume);
            spawn_menu_button(parent, "Main Menu", MenuButton::MainMenu);
            spawn_menu_button(parent, "Quit", MenuButton::Quit);
        });
}

/// Set up the game over screen.
fn setup_game_over(mut commands: Commands) {
    commands
        .spawn((screen_root(Color::srgba(0.1, 0.0, 0.0, 0.9)), GameOverUi))
        .with_children(|parent| {
            spawn_title(parent, "EATEN", 72.0, Color::srgb(0.8, 0.2, 0.2), 60.0);

            spawn_menu_button(parent, "Retry", MenuButton::Retry);
            spawn_menu_button(parent, "Main Menu", MenuButton::MainMenu);
        });
}
