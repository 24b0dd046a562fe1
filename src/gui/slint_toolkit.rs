//! Slint-backed toolkit
//!
//! Implements the shell's toolkit boundary over the generated `MainWindow`
//! and the tray indicator. The window's widgets are declared statically in
//! `ui/main.slint`, so the text-region and button primitives configure the
//! existing widgets and fail only when the window does not exist yet.

use super::tray::TrayIndicator;
use crate::MainWindow;
use calsync::error::BoxError;
use calsync::shell::{
    IndicatorSpec, MenuAction, TextRegion, Toolkit, ToolkitResult, WindowSpec,
};
use calsync::utils::IconImage;
use slint::{ComponentHandle, Image, Rgba8Pixel, SharedPixelBuffer};
use tracing::{debug, error};

/// Toolkit over a slint window and a tray-icon indicator
#[derive(Default)]
pub struct SlintToolkit {
    window: Option<MainWindow>,
    tray: Option<TrayIndicator>,
}

impl SlintToolkit {
    /// Empty toolkit; nothing is created until the shell asks for it
    pub fn new() -> Self {
        Self::default()
    }

    /// The main window, once created
    pub fn window(&self) -> Option<&MainWindow> {
        self.window.as_ref()
    }

    /// The tray indicator, until released
    pub fn tray(&self) -> Option<&TrayIndicator> {
        self.tray.as_ref()
    }

    fn require_window(&self) -> Result<&MainWindow, BoxError> {
        self.window
            .as_ref()
            .ok_or_else(|| "main window has not been created".into())
    }

    fn require_tray(&mut self) -> Result<&mut TrayIndicator, BoxError> {
        self.tray
            .as_mut()
            .ok_or_else(|| "tray indicator has not been created".into())
    }
}

fn to_slint_image(icon: &IconImage) -> Image {
    let buffer =
        SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(&icon.rgba, icon.width, icon.height);
    Image::from_rgba8(buffer)
}

impl Toolkit for SlintToolkit {
    #[expect(
        clippy::cast_precision_loss,
        reason = "Window sizes are small integers that f32 represents exactly"
    )]
    fn create_window(&mut self, spec: &WindowSpec<'_>) -> ToolkitResult {
        let window = MainWindow::new()?;
        window.set_window_title(spec.title.into());
        window.set_window_icon(to_slint_image(spec.icon));
        window.set_fixed_width(spec.size.width as f32);
        window.set_fixed_height(spec.size.height as f32);
        self.window = Some(window);
        Ok(())
    }

    fn create_text_region(&mut self, region: TextRegion, read_only: bool) -> ToolkitResult {
        let window = self.require_window()?;
        match region {
            TextRegion::Input => window.set_input_read_only(read_only),
            TextRegion::Output => window.set_output_read_only(read_only),
        }
        Ok(())
    }

    fn create_button(&mut self, label: &str) -> ToolkitResult {
        self.require_window()?.set_trigger_label(label.into());
        Ok(())
    }

    fn create_indicator(&mut self, spec: &IndicatorSpec<'_>) -> ToolkitResult {
        self.tray = Some(TrayIndicator::new(spec)?);
        Ok(())
    }

    fn add_menu_action(&mut self, action: MenuAction, label: &str) -> ToolkitResult {
        self.require_tray()?.add_action(action, label)
    }

    fn add_menu_separator(&mut self) -> ToolkitResult {
        self.require_tray()?.add_separator()
    }

    fn set_indicator_visible(&mut self, visible: bool) -> ToolkitResult {
        self.require_tray()?.set_visible(visible)
    }

    fn set_window_visible(&mut self, visible: bool) -> ToolkitResult {
        let window = self.require_window()?;
        if visible {
            window.show()?;
        } else {
            window.hide()?;
        }
        Ok(())
    }

    fn text(&self, region: TextRegion) -> String {
        let Some(window) = self.window.as_ref() else {
            return String::new();
        };
        match region {
            TextRegion::Input => window.get_input_text().to_string(),
            TextRegion::Output => window.get_output_text().to_string(),
        }
    }

    fn set_text(&mut self, region: TextRegion, text: &str) {
        let Some(window) = self.window.as_ref() else {
            return;
        };
        match region {
            TextRegion::Input => window.set_input_text(text.into()),
            TextRegion::Output => window.set_output_text(text.into()),
        }
    }

    #[cfg(windows)]
    fn notify(&mut self, title: &str, body: &str) -> ToolkitResult {
        use tauri_winrt_notification::Toast;

        Toast::new(Toast::POWERSHELL_APP_ID)
            .title(title)
            .text1(body)
            .show()?;
        Ok(())
    }

    #[cfg(not(windows))]
    fn notify(&mut self, _title: &str, _body: &str) -> ToolkitResult {
        Err("notifications are only supported on Windows".into())
    }

    fn release_indicator(&mut self) {
        if self.tray.take().is_some() {
            debug!("Tray icon removed");
        }
    }

    fn exit_process(&mut self, code: i32) {
        debug!("Stopping event loop (exit status {})", code);
        if let Err(e) = slint::quit_event_loop() {
            error!("Failed to stop the event loop: {}", e);
        }
    }
}
