use anyhow::Result;
use gpui::{App, AppContext, Bounds, KeyBinding, Menu, MenuItem, WindowBounds, WindowOptions};
use gpui_component::Root;
use tracing::info;

use crate::{
    Quit,
    assets::LogoSource,
    components::{AppWindow, WindowPreferences},
    config::AppConfig,
    quit,
    theme::apply_booking_theme,
};

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);
    apply_booking_theme(app_cx);

    app_cx.activate(true);

    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.on_action(quit);

    app_cx.set_menus(vec![Menu {
        name: "Mattress Pickup".into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Opens the main window on the landing screen.
pub fn open_main_window(
    config: &AppConfig,
    app_cx: &mut App,
) -> Result<()> {
    let preferences = WindowPreferences::from(&config.window);
    let bounds = Bounds::centered(None, preferences.size, app_cx);
    let logo = LogoSource::resolve(&config.logo_path);

    app_cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            ..Default::default()
        },
        move |window, cx| {
            let view = cx.new(|view_cx| AppWindow::new(logo, view_cx));
            cx.new(|root_cx| Root::new(view, window, root_cx))
        },
    )?;

    info!(
        width = config.window.width,
        height = config.window.height,
        "main window opened"
    );
    Ok(())
}
