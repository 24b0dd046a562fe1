//! `CalSync` - tray-resident desktop shell
//!
//! Builds the window and tray indicator, then runs the slint event loop until
//! the user picks "Exit" from the tray menu.

// Set Windows subsystem to hide console window
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![expect(
    missing_docs,
    reason = "Slint-generated code from include_modules! lacks doc comments"
)]
#![allow(clippy::unwrap_used)] // Slint-generated code from include_modules! uses .unwrap() extensively

// GUI module is only in the binary, not the library
mod gui;

use anyhow::{Context, Result};
use calsync::{
    config::ShellConfig,
    error::get_user_friendly_error,
    shell::{EXIT_SUCCESS, Shell},
    utils,
};
use gui::SlintToolkit;
use std::cell::RefCell;
use std::process::ExitCode;
use std::rc::Rc;
use tracing::{error, info};

// Include Slint-generated code
slint::include_modules!();

/// Main entry point for the application
///
/// Any startup construction failure is logged, reported, and ends the process
/// with a non-zero status before the window is ever shown.
fn main() -> Result<ExitCode> {
    utils::init_logging().context("Failed to initialize logging system")?;

    info!("CalSync v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = ShellConfig::default();

    let shell = match Shell::initialize(SlintToolkit::new(), &config) {
        Ok(shell) => Rc::new(RefCell::new(shell)),
        Err(e) => {
            error!("Failed to initialize shell: {}", e);
            show_fatal_error(&get_user_friendly_error(&e));
            return Err(e).context("Failed to initialize shell");
        }
    };

    gui::bind_window_events(&shell).context("Failed to bind window events")?;
    let _tray_timer = gui::start_tray_polling(&shell);

    info!("Starting GUI event loop");
    slint::run_event_loop_until_quit().context("GUI event loop terminated with error")?;

    let code = {
        let mut shell = shell.borrow_mut();
        shell.shutdown();
        shell.context().exit_code().unwrap_or(EXIT_SUCCESS)
    };

    info!("CalSync shutting down with status {}", code);

    Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
}

/// Shows an error dialog describing a fatal startup failure.
#[cfg(windows)]
fn show_fatal_error(message: &str) {
    use rfd::MessageDialog;

    MessageDialog::new()
        .set_title("CalSync - Error")
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .set_level(rfd::MessageLevel::Error)
        .show();
}

/// Reports a fatal startup failure on stderr (non-Windows fallback).
#[cfg(not(windows))]
fn show_fatal_error(message: &str) {
    eprintln!("ERROR: {message}");
}
