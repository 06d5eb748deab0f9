pub mod assets;
pub mod components;
pub mod config;
pub mod gui;
pub mod logging;
pub mod state;
pub mod theme;
pub mod utils;

use gpui::{App, actions};
pub use gui::{open_main_window, setup_app};
use tracing::info;

actions!(pickup_ui, [Quit]);

pub fn quit(
    _: &Quit,
    cx: &mut App,
) {
    info!("Executing quit handler");
    cx.quit();
}
