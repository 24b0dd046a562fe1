#![expect(
    clippy::unwrap_used,
    reason = "Test utilities use .unwrap() for brevity"
)]

//! Shared test utilities for `CalSync` unit tests.
//!
//! This module provides common test infrastructure used across multiple test modules.
//! It is only compiled during testing (`#[cfg(test)]`).

use crate::config::ShellConfig;
use crate::error::StringError;
use crate::shell::{IndicatorSpec, MenuAction, TextRegion, Toolkit, ToolkitResult, WindowSpec};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper function to create a temporary test directory using tempfile.
/// Returns a `TempDir` that automatically cleans up when dropped.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Write a small PNG icon into `dir` and return its path
pub fn write_test_icon(dir: &Path) -> PathBuf {
    let path = dir.join("icon.png");
    let image = image::RgbaImage::from_pixel(16, 16, image::Rgba([200, 40, 40, 255]));
    image.save(&path).unwrap();
    path
}

/// Default config whose icon points at a freshly written test icon in `dir`
pub fn test_config(dir: &Path) -> ShellConfig {
    ShellConfig {
        icon_path: write_test_icon(dir),
        ..ShellConfig::default()
    }
}

/// Toolkit double that records every primitive call
///
/// `failing_on` makes the named construction primitive return an error the
/// first time it is called.
#[derive(Debug, Default)]
pub struct RecordingToolkit {
    pub calls: Vec<String>,
    pub fail_on: Option<&'static str>,
    pub fail_notify: bool,
    pub fail_visibility: bool,
    pub input: String,
    pub output: String,
    pub window_visible: bool,
    pub indicator_visible: bool,
    pub menu: Vec<Option<(MenuAction, String)>>,
    pub notifications: Vec<(String, String)>,
    pub released: u32,
    pub exit_codes: Vec<i32>,
}

impl RecordingToolkit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(op: &'static str) -> Self {
        Self {
            fail_on: Some(op),
            ..Self::default()
        }
    }

    fn record(&mut self, op: &'static str, call: String) -> ToolkitResult {
        self.calls.push(call);
        if self.fail_on == Some(op) {
            self.fail_on = None;
            return Err(StringError::new(format!("{op} failed")));
        }
        Ok(())
    }
}

impl Toolkit for RecordingToolkit {
    fn create_window(&mut self, spec: &WindowSpec<'_>) -> ToolkitResult {
        assert!(spec.icon.width > 0);
        self.record("create_window", "create_window".to_string())
    }

    fn create_text_region(&mut self, region: TextRegion, read_only: bool) -> ToolkitResult {
        let mode = if read_only { "ro" } else { "rw" };
        self.record(
            "create_text_region",
            format!("create_text_region:{region:?}:{mode}"),
        )
    }

    fn create_button(&mut self, label: &str) -> ToolkitResult {
        self.record("create_button", format!("create_button:{label}"))
    }

    fn create_indicator(&mut self, spec: &IndicatorSpec<'_>) -> ToolkitResult {
        assert!(!spec.tooltip.is_empty());
        self.record("create_indicator", "create_indicator".to_string())
    }

    fn add_menu_action(&mut self, action: MenuAction, label: &str) -> ToolkitResult {
        self.record("add_menu_action", format!("add_menu_action:{action:?}"))?;
        self.menu.push(Some((action, label.to_string())));
        Ok(())
    }

    fn add_menu_separator(&mut self) -> ToolkitResult {
        self.record("add_menu_separator", "add_menu_separator".to_string())?;
        self.menu.push(None);
        Ok(())
    }

    fn set_indicator_visible(&mut self, visible: bool) -> ToolkitResult {
        self.record(
            "set_indicator_visible",
            format!("set_indicator_visible:{visible}"),
        )?;
        self.indicator_visible = visible;
        Ok(())
    }

    fn set_window_visible(&mut self, visible: bool) -> ToolkitResult {
        self.record("set_window_visible", format!("set_window_visible:{visible}"))?;
        if self.fail_visibility {
            return Err(StringError::new("window handle lost"));
        }
        self.window_visible = visible;
        Ok(())
    }

    fn text(&self, region: TextRegion) -> String {
        match region {
            TextRegion::Input => self.input.clone(),
            TextRegion::Output => self.output.clone(),
        }
    }

    fn set_text(&mut self, region: TextRegion, text: &str) {
        match region {
            TextRegion::Input => text.clone_into(&mut self.input),
            TextRegion::Output => text.clone_into(&mut self.output),
        }
    }

    fn notify(&mut self, title: &str, body: &str) -> ToolkitResult {
        self.calls.push("notify".to_string());
        if self.fail_notify {
            return Err(StringError::new("notifications disabled"));
        }
        self.notifications.push((title.to_string(), body.to_string()));
        Ok(())
    }

    fn release_indicator(&mut self) {
        self.released += 1;
        self.indicator_visible = false;
    }

    fn exit_process(&mut self, code: i32) {
        self.exit_codes.push(code);
    }
}
