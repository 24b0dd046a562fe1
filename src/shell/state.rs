//! Shell state: window visibility and the text buffers

use super::transform::scream;

/// Whether the main window is currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowState {
    /// Window is on screen
    #[default]
    Visible,
    /// Window is hidden; the process keeps running behind the tray indicator
    Hidden,
}

impl WindowState {
    /// Returns `true` for [`WindowState::Visible`]
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// Output buffer mirror
///
/// The output is empty until the first trigger and afterwards always holds the
/// upper-cased input as it was at the most recent trigger. It is not updated
/// while the user types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextPanes {
    output: String,
    triggers: u64,
}

impl TextPanes {
    /// Create empty panes
    pub fn new() -> Self {
        Self::default()
    }

    /// Transform `input` into the output buffer and return the new output
    pub fn apply_trigger(&mut self, input: &str) -> &str {
        self.output = scream(input);
        self.triggers += 1;
        &self.output
    }

    /// Current output buffer content
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Number of times the trigger has fired
    pub fn trigger_count(&self) -> u64 {
        self.triggers
    }
}
