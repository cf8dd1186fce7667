// Despacho - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Session-store path resolution and history restore
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::core::...` etc.
pub use despacho::app;
pub use despacho::core;
pub use despacho::platform;
pub use despacho::ui;
pub use despacho::util;

use clap::Parser;
use std::path::PathBuf;

/// Despacho - fire-department dispatch demo.
///
/// A single-window demo UI: filterable responder roster, alert submission
/// with a session-scoped history log, and a quick-assign action.
#[derive(Parser, Debug)]
#[command(name = "Despacho", version, about)]
struct Cli {
    /// Override the session-store directory (default: OS temp dir).
    #[arg(short = 's', long = "store-dir")]
    store_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialise logging subsystem
    util::logging::init(cli.debug);

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "Despacho starting"
    );

    // Resolve the session store: CLI override > OS temp dir.
    let paths = platform::config::SessionPaths::resolve_with_override(cli.store_dir.as_deref());
    tracing::debug!(store = %paths.store_dir.display(), "Session store resolved");

    // Create application state, restoring any persisted history.
    let state = app::state::AppState::new(Some(paths.history_path()), cli.debug);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::DespachoApp::new(state)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch Despacho GUI: {e}");
        std::process::exit(1);
    }
}
