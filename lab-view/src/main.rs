//! Application entry point for the particle background and logic lab viewer.
//!
//! This binary installs a `tracing` subscriber, loads `lab.toml` if one
//! exists, sets up eframe/egui and delegates everything else to [`Viewer`].

mod viewer;

use lab_core::config::Config;
use tracing_subscriber::EnvFilter;
use viewer::Viewer;

const CONFIG_PATH: &str = "lab.toml";

/// Starts the native eframe application.
///
/// A config file that exists but is invalid is reported and replaced by
/// the defaults; the background is decoration and should always start.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = Config::load_or_default(CONFIG_PATH).unwrap_or_else(|err| {
        tracing::warn!(%err, path = CONFIG_PATH, "invalid config, using defaults");
        Config::default()
    });
    tracing::info!(particles = cfg.particle_count, "starting viewer");

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Particle Field",
        options,
        Box::new(move |_cc| Ok(Box::new(Viewer::new(cfg)))),
    )
}
