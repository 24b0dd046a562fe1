//! System tray integration
//!
//! Wraps a `tray-icon` indicator and its context menu. The icon is created
//! hidden; the shell shows it once the menu is complete. Dropping the
//! indicator removes the icon from the tray.
//!
//! Tray and menu events arrive on global channels owned by `tray-icon`;
//! [`TrayIndicator::drain_events`] translates them into shell events and is
//! polled from the UI thread.

use calsync::error::BoxError;
use calsync::shell::{IndicatorSpec, ShellEvent};

#[cfg(windows)]
use calsync::shell::{MenuAction, MouseButton};
#[cfg(windows)]
use tracing::debug;
#[cfg(windows)]
use tray_icon::{
    Icon, MouseButtonState, TrayIconBuilder, TrayIconEvent,
    menu::{Menu, MenuEvent, MenuId, MenuItem, PredefinedMenuItem},
};

/// System tray icon with context menu
#[cfg(windows)]
pub struct TrayIndicator {
    tray: tray_icon::TrayIcon,
    menu: Menu,
    actions: Vec<(MenuId, MenuAction)>,
}

/// Placeholder for non-Windows platforms
#[cfg(not(windows))]
pub struct TrayIndicator;

#[cfg(windows)]
impl TrayIndicator {
    /// Create a hidden tray icon with an empty context menu.
    ///
    /// Left clicks are delivered as events instead of opening the menu.
    pub fn new(spec: &IndicatorSpec<'_>) -> Result<Self, BoxError> {
        let icon = Icon::from_rgba(spec.icon.rgba.clone(), spec.icon.width, spec.icon.height)?;
        let menu = Menu::new();

        let tray = TrayIconBuilder::new()
            .with_menu(Box::new(menu.clone()))
            .with_menu_on_left_click(false)
            .with_icon(icon)
            .with_tooltip(spec.tooltip)
            .build()?;
        tray.set_visible(false)?;

        debug!("Tray icon created ({}x{})", spec.icon.width, spec.icon.height);

        Ok(Self {
            tray,
            menu,
            actions: Vec::new(),
        })
    }

    /// Append a menu entry bound to `action`
    pub fn add_action(&mut self, action: MenuAction, label: &str) -> Result<(), BoxError> {
        let item = MenuItem::new(label, true, None);
        self.menu.append(&item)?;
        self.actions.push((item.id().clone(), action));
        Ok(())
    }

    /// Append a separator line
    pub fn add_separator(&mut self) -> Result<(), BoxError> {
        self.menu.append(&PredefinedMenuItem::separator())?;
        Ok(())
    }

    /// Show or hide the icon
    pub fn set_visible(&self, visible: bool) -> Result<(), BoxError> {
        self.tray.set_visible(visible)?;
        Ok(())
    }

    fn action_for(&self, id: &MenuId) -> Option<MenuAction> {
        self.actions
            .iter()
            .find(|(item_id, _)| item_id == id)
            .map(|(_, action)| *action)
    }

    /// Take every pending tray and menu event
    ///
    /// Only button-down clicks are reported, matching a mouse-down handler;
    /// hover and release notifications are discarded.
    pub fn drain_events(&self) -> Vec<ShellEvent> {
        let mut events = Vec::new();

        while let Ok(event) = TrayIconEvent::receiver().try_recv() {
            if let TrayIconEvent::Click {
                button,
                button_state: MouseButtonState::Down,
                ..
            } = event
            {
                let button = match button {
                    tray_icon::MouseButton::Left => MouseButton::Left,
                    tray_icon::MouseButton::Right => MouseButton::Right,
                    tray_icon::MouseButton::Middle => MouseButton::Middle,
                };
                events.push(ShellEvent::IndicatorPressed(button));
            }
        }

        while let Ok(event) = MenuEvent::receiver().try_recv() {
            match self.action_for(&event.id) {
                Some(action) => events.push(ShellEvent::MenuTriggered(action)),
                None => debug!("Ignoring unknown menu id {:?}", event.id),
            }
        }

        events
    }
}

/// Stub implementation for non-Windows platforms
///
/// Creating the indicator always fails, which aborts startup: without a tray
/// there would be no way back to a hidden window.
#[cfg(not(windows))]
impl TrayIndicator {
    /// Always fails on this platform
    pub fn new(_spec: &IndicatorSpec<'_>) -> Result<Self, BoxError> {
        Err("the system tray indicator is only supported on Windows".into())
    }

    /// No-op on this platform
    pub fn add_action(
        &mut self,
        _action: calsync::shell::MenuAction,
        _label: &str,
    ) -> Result<(), BoxError> {
        Ok(())
    }

    /// No-op on this platform
    pub fn add_separator(&mut self) -> Result<(), BoxError> {
        Ok(())
    }

    /// No-op on this platform
    pub fn set_visible(&self, _visible: bool) -> Result<(), BoxError> {
        Ok(())
    }

    /// Always empty on this platform
    pub fn drain_events(&self) -> Vec<ShellEvent> {
        Vec::new()
    }
}
