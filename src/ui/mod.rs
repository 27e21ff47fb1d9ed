//! UI module - main menu, pause overlay, game over screen and HUD.

mod hud;
mod plugin;

pub use plugin::UiPlugin;
