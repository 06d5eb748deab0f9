use std::path::PathBuf;

use clap::Parser;
use gpui::{App, Application};
use tracing::{error, info, warn};

use pickup_ui::{config::AppConfig, logging, open_main_window, setup_app};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Mattress pickup and recycling booking.
///
/// Opens the landing screen; tap the logo to start a booking.
#[derive(Debug, Parser)]
struct Cli {
    /// TOML configuration file. Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Logo image shown on both screens.
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `info,pickup_core=trace`.
    #[arg(long)]
    log_level: Option<String>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_control = logging::init_logging();

    let config = AppConfig::load(cli.config.as_deref())?.with_overrides(cli.logo, cli.log_level);

    match &log_control {
        Some(control) => {
            if let Err(error) = control.apply_config(&config.log) {
                warn!(%error, "log configuration not applied");
            }
        }
        None => warn!("a global tracing subscriber was already installed"),
    }

    info!(app = logging::app_name(), "starting");

    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx: &mut App| {
            setup_app(cx);

            if let Err(error) = open_main_window(&config, cx) {
                error!(?error, "failed to open main window");
                cx.quit();
            }
        });

    Ok(())
}
