//! Application context and shell lifecycle
//!
//! [`Shell::initialize`] runs the fail-fast startup sequence and wires the
//! default handlers into the event table. Every handler receives the single
//! [`AppContext`], which owns the toolkit and all shell state.

use super::events::{EventKind, EventTable, MenuAction, MouseButton, ShellEvent};
use super::state::{TextPanes, WindowState};
use super::toolkit::{IndicatorSpec, TextRegion, Toolkit, WindowSpec};
use crate::config::ShellConfig;
use crate::error::{CalSyncError, Result, StartupStep};
use crate::utils::icon::load_icon;
use tracing::{debug, info, warn};

/// Exit status reported when the user picks "Exit" from the tray menu
pub const EXIT_SUCCESS: i32 = 0;

/// State shared by every event handler
#[derive(Debug)]
pub struct AppContext<T: Toolkit> {
    toolkit: T,
    panes: TextPanes,
    window_state: WindowState,
    exit_code: Option<i32>,
    indicator_released: bool,
}

impl<T: Toolkit> AppContext<T> {
    fn new(toolkit: T) -> Self {
        Self {
            toolkit,
            panes: TextPanes::new(),
            window_state: WindowState::Visible,
            exit_code: None,
            indicator_released: false,
        }
    }

    /// The underlying toolkit
    pub fn toolkit(&self) -> &T {
        &self.toolkit
    }

    /// Mutable access to the underlying toolkit
    pub fn toolkit_mut(&mut self) -> &mut T {
        &mut self.toolkit
    }

    /// Text buffers as of the last trigger
    pub fn panes(&self) -> &TextPanes {
        &self.panes
    }

    /// Current window state
    pub fn window_state(&self) -> WindowState {
        self.window_state
    }

    /// Exit status once the user has asked to exit
    pub fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }

    /// `false` once an exit has been requested
    pub fn is_running(&self) -> bool {
        self.exit_code.is_none()
    }

    /// Whether the indicator has been released
    pub fn indicator_released(&self) -> bool {
        self.indicator_released
    }

    /// Read the input region, upper-case it, and write the output region
    pub fn run_transform(&mut self) {
        let input = self.toolkit.text(TextRegion::Input);
        let output = self.panes.apply_trigger(&input);
        self.toolkit.set_text(TextRegion::Output, output);
        debug!(
            "Transformed {} bytes of input (trigger #{})",
            input.len(),
            self.panes.trigger_count()
        );
    }

    /// Hidden -> Visible
    pub fn show_window(&mut self) {
        self.set_window_state(WindowState::Visible);
    }

    /// Visible -> Hidden
    pub fn hide_window(&mut self) {
        self.set_window_state(WindowState::Hidden);
    }

    fn set_window_state(&mut self, target: WindowState) {
        if let Err(e) = self.toolkit.set_window_visible(target.is_visible()) {
            warn!("Failed to change window visibility to {:?}: {}", target, e);
            return;
        }

        if self.window_state != target {
            info!("Window state {:?} -> {:?}", self.window_state, target);
        }
        self.window_state = target;
    }

    /// Request process exit with `code`; only the first request counts
    pub fn exit(&mut self, code: i32) {
        if let Some(existing) = self.exit_code {
            debug!("Exit already requested with status {}", existing);
            return;
        }

        info!("Exit requested with status {}", code);
        self.exit_code = Some(code);
        self.release_indicator();
        self.toolkit.exit_process(code);
    }

    fn release_indicator(&mut self) {
        if self.indicator_released {
            return;
        }
        self.indicator_released = true;
        self.toolkit.release_indicator();
        info!("Tray indicator released");
    }
}

/// The UI shell: application context plus its event dispatch table
pub struct Shell<T: Toolkit> {
    ctx: AppContext<T>,
    table: EventTable<AppContext<T>>,
}

impl<T: Toolkit + 'static> Shell<T> {
    /// Build the window and the tray indicator, then show the window.
    ///
    /// Each construction step is fatal: the first failure is returned as
    /// [`CalSyncError::StartupConstructionFailure`] and the window is never
    /// shown. A failed startup notification is only logged.
    pub fn initialize(toolkit: T, config: &ShellConfig) -> Result<Self> {
        let mut ctx = AppContext::new(toolkit);

        let icon_path = config.resolve_icon_path();
        info!("Loading icon from {}", icon_path.display());
        let icon = load_icon(&icon_path)?;

        info!(
            "Creating main window ({}x{})",
            config.window_size.width, config.window_size.height
        );
        let window = WindowSpec {
            title: &config.title,
            size: config.window_size,
            icon: &icon,
        };
        let tk = &mut ctx.toolkit;
        tk.create_window(&window)
            .map_err(|e| CalSyncError::startup(StartupStep::CreateWindow, e))?;

        tk.create_text_region(TextRegion::Input, false)
            .map_err(|e| CalSyncError::startup(StartupStep::CreateTextRegion, e))?;
        tk.create_text_region(TextRegion::Output, true)
            .map_err(|e| CalSyncError::startup(StartupStep::CreateTextRegion, e))?;
        tk.create_button(&config.trigger_label)
            .map_err(|e| CalSyncError::startup(StartupStep::CreateButton, e))?;

        info!("Creating system tray indicator");
        let indicator = IndicatorSpec {
            icon: &icon,
            tooltip: &config.tooltip,
        };
        tk.create_indicator(&indicator)
            .map_err(|e| CalSyncError::startup(StartupStep::CreateIndicator, e))?;

        tk.add_menu_action(MenuAction::Settings, &config.settings_label)
            .map_err(|e| CalSyncError::startup(StartupStep::AddMenuAction, e))?;
        tk.add_menu_separator()
            .map_err(|e| CalSyncError::startup(StartupStep::AddMenuAction, e))?;
        tk.add_menu_action(MenuAction::Exit, &config.exit_label)
            .map_err(|e| CalSyncError::startup(StartupStep::AddMenuAction, e))?;
        debug!("Tray menu created with 3 items");

        tk.set_indicator_visible(true)
            .map_err(|e| CalSyncError::startup(StartupStep::ShowIndicator, e))?;

        if let Err(e) = tk.notify(&config.notification_title, &config.notification_body) {
            warn!("Failed to show startup notification: {}", e);
        }

        let mut shell = Self {
            ctx,
            table: EventTable::new(),
        };
        shell.attach_default_handlers();

        shell
            .ctx
            .toolkit
            .set_window_visible(true)
            .map_err(|e| CalSyncError::startup(StartupStep::ShowWindow, e))?;
        shell.ctx.window_state = WindowState::Visible;

        info!("Shell initialized");
        Ok(shell)
    }

    fn attach_default_handlers(&mut self) {
        self.table
            .attach(EventKind::TransformTriggered, |ctx, _| ctx.run_transform());

        self.table
            .attach(EventKind::CloseRequested, |ctx, _| ctx.hide_window());

        self.table.attach(EventKind::Resized, |_, event| {
            if let ShellEvent::Resized { width, height } = event {
                info!("size changed {}x{}", width, height);
            }
        });

        self.table
            .attach(EventKind::IndicatorPressed, |ctx, event| match event {
                ShellEvent::IndicatorPressed(MouseButton::Left) => ctx.show_window(),
                ShellEvent::IndicatorPressed(button) => {
                    debug!("Ignoring {:?} button on tray indicator", button);
                }
                _ => {}
            });

        self.table.attach(EventKind::MenuTriggered, |ctx, event| {
            if let ShellEvent::MenuTriggered(action) = event {
                match action {
                    MenuAction::Settings => ctx.show_window(),
                    MenuAction::Exit => ctx.exit(EXIT_SUCCESS),
                }
            }
        });
    }

    /// Append an extra handler after the default ones
    pub fn attach<F>(&mut self, kind: EventKind, handler: F)
    where
        F: FnMut(&mut AppContext<T>, &ShellEvent) + 'static,
    {
        self.table.attach(kind, handler);
    }
}

impl<T: Toolkit> Shell<T> {
    /// Deliver an event to its handlers. Events arriving after an exit
    /// request are dropped.
    pub fn dispatch(&mut self, event: &ShellEvent) -> usize {
        if !self.ctx.is_running() {
            debug!("Dropping {:?} after exit request", event.kind());
            return 0;
        }
        self.table.dispatch(&mut self.ctx, event)
    }

    /// Application context
    pub fn context(&self) -> &AppContext<T> {
        &self.ctx
    }

    /// Mutable application context
    pub fn context_mut(&mut self) -> &mut AppContext<T> {
        &mut self.ctx
    }

    /// Release the indicator. Safe to call more than once.
    pub fn shutdown(&mut self) {
        self.ctx.release_indicator();
    }
}

impl<T: Toolkit> Drop for Shell<T> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
