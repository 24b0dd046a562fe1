//! Configuration data models

use std::path::{Path, PathBuf};

/// Logical window size; the shell window is fixed to this size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    /// Width in logical units
    pub width: u32,
    /// Height in logical units
    pub height: u32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
        }
    }
}

/// Top-level shell configuration
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Main window title
    pub title: String,
    /// Fixed (min = max) window size
    pub window_size: WindowSize,
    /// Packaged image used for the window and the tray indicator
    pub icon_path: PathBuf,
    /// Tray indicator tooltip
    pub tooltip: String,
    /// Label of the trigger button
    pub trigger_label: String,
    /// Context menu label that restores the window (`&` marks the mnemonic)
    pub settings_label: String,
    /// Context menu label that exits the process
    pub exit_label: String,
    /// Title of the notification shown once the indicator is up
    pub notification_title: String,
    /// Body of the notification shown once the indicator is up
    pub notification_body: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: "CalSync".to_string(),
            window_size: WindowSize::default(),
            icon_path: PathBuf::from("assets").join("caldb.ico"),
            tooltip: "Click for settings or use context menu to exit.".to_string(),
            trigger_label: "SCREAM".to_string(),
            settings_label: "S&ettings".to_string(),
            exit_label: "E&xit".to_string(),
            notification_title: "CalSync is enabled".to_string(),
            notification_body: "Click the icon to display settings".to_string(),
        }
    }
}

impl ShellConfig {
    /// Resolve the icon path
    ///
    /// Absolute paths are returned unchanged. A relative path is looked up next
    /// to the running executable first, so the shell starts from any working
    /// directory when installed with its assets; otherwise it is left relative
    /// to the working directory.
    pub fn resolve_icon_path(&self) -> PathBuf {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        resolve_relative_to(&self.icon_path, exe_dir.as_deref())
    }
}

fn resolve_relative_to(path: &Path, base: Option<&Path>) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }

    match base.map(|dir| dir.join(path)) {
        Some(candidate) if candidate.is_file() => candidate,
        _ => path.to_path_buf(),
    }
}
