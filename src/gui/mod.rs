//! GUI module
//!
//! Provides the Slint-based window, the system tray integration, and the glue
//! that turns window callbacks and tray notifications into shell events.

pub mod slint_toolkit;
pub mod tray;

pub use slint_toolkit::SlintToolkit;

use anyhow::{Result, anyhow};
use calsync::shell::{Shell, ShellEvent};
use slint::{CloseRequestResponse, ComponentHandle, Timer, TimerMode};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use tracing::{debug, warn};

/// The shell as shared between slint callbacks on the UI thread
pub type SharedShell = Rc<RefCell<Shell<SlintToolkit>>>;

/// How often pending tray and menu events are collected
const TRAY_POLL_INTERVAL: Duration = Duration::from_millis(50);

fn dispatch(shell: &Weak<RefCell<Shell<SlintToolkit>>>, event: &ShellEvent) {
    let Some(shell) = shell.upgrade() else {
        return;
    };
    let Ok(mut guard) = shell.try_borrow_mut() else {
        warn!("Shell busy, dropping {:?}", event);
        return;
    };
    let handled = guard.dispatch(event);
    debug!("{:?} handled by {} handler(s)", event.kind(), handled);
}

/// Route the window's trigger, resize and close callbacks into the shell.
///
/// Close requests never close the window directly; the shell's handler hides
/// it and the event loop keeps running.
pub fn bind_window_events(shell: &SharedShell) -> Result<()> {
    let guard = shell.borrow();
    let window = guard
        .context()
        .toolkit()
        .window()
        .ok_or_else(|| anyhow!("Main window missing after initialization"))?;

    let weak = Rc::downgrade(shell);
    window.on_trigger_clicked(move || dispatch(&weak, &ShellEvent::TransformTriggered));

    let weak = Rc::downgrade(shell);
    window.on_resized(move |width, height| {
        dispatch(&weak, &ShellEvent::Resized { width, height });
    });

    let weak = Rc::downgrade(shell);
    window.window().on_close_requested(move || {
        dispatch(&weak, &ShellEvent::CloseRequested);
        CloseRequestResponse::KeepWindowShown
    });

    Ok(())
}

/// Poll the tray indicator from the UI thread.
///
/// The returned timer must be kept alive for as long as events should flow.
pub fn start_tray_polling(shell: &SharedShell) -> Timer {
    let weak = Rc::downgrade(shell);
    let timer = Timer::default();

    timer.start(TimerMode::Repeated, TRAY_POLL_INTERVAL, move || {
        let events = {
            let Some(shell) = weak.upgrade() else {
                return;
            };
            let Ok(guard) = shell.try_borrow() else {
                return;
            };
            guard
                .context()
                .toolkit()
                .tray()
                .map(tray::TrayIndicator::drain_events)
                .unwrap_or_default()
        };

        for event in &events {
            dispatch(&weak, event);
        }
    });

    timer
}
