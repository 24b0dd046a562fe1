//! Windowing toolkit boundary
//!
//! The shell never talks to a GUI library directly. The binary implements
//! [`Toolkit`] over slint and tray-icon; tests implement it with a recorder.
//! Construction primitives may fail and are only called during startup.
//! Runtime primitives are called from event handlers on the UI thread.

use super::events::MenuAction;
use crate::config::WindowSize;
use crate::error::BoxError;
use crate::utils::icon::IconImage;

/// Outcome of a toolkit primitive that can fail
pub type ToolkitResult = std::result::Result<(), BoxError>;

/// The two text regions of the main window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextRegion {
    /// Editable source pane (left)
    Input,
    /// Read-only result pane (right)
    Output,
}

/// Parameters for the top-level window
#[derive(Debug, Clone, Copy)]
pub struct WindowSpec<'a> {
    /// Window title
    pub title: &'a str,
    /// Fixed size; minimum and maximum are both set to it
    pub size: WindowSize,
    /// Window icon
    pub icon: &'a IconImage,
}

/// Parameters for the tray indicator
#[derive(Debug, Clone, Copy)]
pub struct IndicatorSpec<'a> {
    /// Indicator image
    pub icon: &'a IconImage,
    /// Hover text
    pub tooltip: &'a str,
}

/// Primitives the shell consumes from the native GUI runtime
pub trait Toolkit {
    /// Create the top-level window (not yet shown)
    fn create_window(&mut self, spec: &WindowSpec<'_>) -> ToolkitResult;

    /// Add a text region to the window layout
    fn create_text_region(&mut self, region: TextRegion, read_only: bool) -> ToolkitResult;

    /// Add the trigger button to the window layout
    fn create_button(&mut self, label: &str) -> ToolkitResult;

    /// Create the tray indicator (not yet shown)
    fn create_indicator(&mut self, spec: &IndicatorSpec<'_>) -> ToolkitResult;

    /// Append an action to the indicator's context menu
    fn add_menu_action(&mut self, action: MenuAction, label: &str) -> ToolkitResult;

    /// Append a separator to the indicator's context menu
    fn add_menu_separator(&mut self) -> ToolkitResult;

    /// Show or hide the indicator
    fn set_indicator_visible(&mut self, visible: bool) -> ToolkitResult;

    /// Show or hide the main window
    fn set_window_visible(&mut self, visible: bool) -> ToolkitResult;

    /// Full current text of a region
    fn text(&self, region: TextRegion) -> String;

    /// Replace the text of a region
    fn set_text(&mut self, region: TextRegion, text: &str);

    /// Show a transient notification next to the indicator
    fn notify(&mut self, title: &str, body: &str) -> ToolkitResult;

    /// Remove the indicator and free its native resources
    fn release_indicator(&mut self);

    /// Stop the event loop; the process then exits with `code`
    fn exit_process(&mut self, code: i32);
}
