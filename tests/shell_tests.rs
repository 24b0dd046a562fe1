//! Integration tests for `CalSync`
//!
//! Drives the shell through its public API with an in-memory toolkit,
//! covering startup, the transform scenarios, and the window/tray lifecycle.

use calsync::{
    config::ShellConfig,
    error::{CalSyncError, StartupStep},
    shell::{
        EXIT_SUCCESS, IndicatorSpec, MenuAction, MouseButton, Shell, ShellEvent, TextRegion,
        Toolkit, ToolkitResult, WindowSpec, WindowState,
    },
};
use std::path::PathBuf;
use tempfile::TempDir;

/// Minimal in-memory toolkit
#[derive(Default)]
struct FakeToolkit {
    input: String,
    output: String,
    visible: bool,
    menu_labels: Vec<String>,
    fail_indicator: bool,
    released: u32,
    exited_with: Option<i32>,
}

impl Toolkit for FakeToolkit {
    fn create_window(&mut self, spec: &WindowSpec<'_>) -> ToolkitResult {
        assert_eq!((spec.size.width, spec.size.height), (600, 400));
        Ok(())
    }

    fn create_text_region(&mut self, _region: TextRegion, _read_only: bool) -> ToolkitResult {
        Ok(())
    }

    fn create_button(&mut self, _label: &str) -> ToolkitResult {
        Ok(())
    }

    fn create_indicator(&mut self, _spec: &IndicatorSpec<'_>) -> ToolkitResult {
        if self.fail_indicator {
            return Err("no notification area".into());
        }
        Ok(())
    }

    fn add_menu_action(&mut self, _action: MenuAction, label: &str) -> ToolkitResult {
        self.menu_labels.push(label.to_string());
        Ok(())
    }

    fn add_menu_separator(&mut self) -> ToolkitResult {
        self.menu_labels.push("-".to_string());
        Ok(())
    }

    fn set_indicator_visible(&mut self, _visible: bool) -> ToolkitResult {
        Ok(())
    }

    fn set_window_visible(&mut self, visible: bool) -> ToolkitResult {
        self.visible = visible;
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
            TextRegion::Input => self.input = text.to_string(),
            TextRegion::Output => self.output = text.to_string(),
        }
    }

    fn notify(&mut self, _title: &str, _body: &str) -> ToolkitResult {
        Ok(())
    }

    fn release_indicator(&mut self) {
        self.released += 1;
    }

    fn exit_process(&mut self, code: i32) {
        self.exited_with = Some(code);
    }
}

fn config_with_icon() -> (TempDir, ShellConfig) {
    let dir = tempfile::tempdir().unwrap();
    let icon_path = dir.path().join("tray.png");
    image::RgbaImage::from_pixel(8, 8, image::Rgba([0, 0, 0, 255]))
        .save(&icon_path)
        .unwrap();
    let config = ShellConfig {
        icon_path,
        ..ShellConfig::default()
    };
    (dir, config)
}

fn start() -> (TempDir, Shell<FakeToolkit>) {
    let (dir, config) = config_with_icon();
    let shell = Shell::initialize(FakeToolkit::default(), &config).unwrap();
    (dir, shell)
}

fn trigger_with(shell: &mut Shell<FakeToolkit>, input: &str) -> String {
    shell
        .context_mut()
        .toolkit_mut()
        .set_text(TextRegion::Input, input);
    shell.dispatch(&ShellEvent::TransformTriggered);
    shell.context().toolkit().text(TextRegion::Output)
}

#[test]
fn test_startup_shows_window_with_menu() {
    let (_dir, shell) = start();

    assert_eq!(shell.context().window_state(), WindowState::Visible);
    assert!(shell.context().toolkit().visible);
    assert_eq!(
        shell.context().toolkit().menu_labels,
        vec!["S&ettings", "-", "E&xit"]
    );
    assert_eq!(shell.context().panes().output(), "");
}

#[test]
fn test_transform_scenarios() {
    let (_dir, mut shell) = start();

    assert_eq!(trigger_with(&mut shell, "hello world"), "HELLO WORLD");
    assert_eq!(trigger_with(&mut shell, ""), "");
    assert_eq!(trigger_with(&mut shell, "MiXeD123!@#"), "MIXED123!@#");
}

#[test]
fn test_transform_twice_is_stable() {
    let (_dir, mut shell) = start();

    let first = trigger_with(&mut shell, "Twice Over");
    shell.dispatch(&ShellEvent::TransformTriggered);
    let second = shell.context().toolkit().text(TextRegion::Output);

    assert_eq!(first, second);
    assert_eq!(shell.context().toolkit().input, "Twice Over");
}

#[test]
fn test_hide_and_restore_cycle() {
    let (_dir, mut shell) = start();

    for _ in 0..3 {
        shell.dispatch(&ShellEvent::CloseRequested);
        assert_eq!(shell.context().window_state(), WindowState::Hidden);
        assert!(shell.context().is_running());

        shell.dispatch(&ShellEvent::IndicatorPressed(MouseButton::Left));
        assert_eq!(shell.context().window_state(), WindowState::Visible);
    }
}

#[test]
fn test_exit_from_either_window_state() {
    for hide_first in [false, true] {
        let (_dir, mut shell) = start();
        if hide_first {
            shell.dispatch(&ShellEvent::CloseRequested);
        }

        shell.dispatch(&ShellEvent::MenuTriggered(MenuAction::Exit));

        assert_eq!(shell.context().exit_code(), Some(EXIT_SUCCESS));
        assert_eq!(shell.context().toolkit().exited_with, Some(0));
        assert_eq!(shell.context().toolkit().released, 1);
    }
}

#[test]
fn test_indicator_failure_aborts_startup() {
    let (_dir, config) = config_with_icon();
    let toolkit = FakeToolkit {
        fail_indicator: true,
        ..FakeToolkit::default()
    };

    let Err(error) = Shell::initialize(toolkit, &config) else {
        panic!("startup must fail without an indicator");
    };

    assert!(matches!(
        error,
        CalSyncError::StartupConstructionFailure {
            step: StartupStep::CreateIndicator,
            ..
        }
    ));
    assert!(error.to_string().contains("no notification area"));
}

#[test]
fn test_missing_icon_aborts_startup() {
    let config = ShellConfig {
        icon_path: PathBuf::from("definitely/not/here.ico"),
        ..ShellConfig::default()
    };

    let Err(error) = Shell::initialize(FakeToolkit::default(), &config) else {
        panic!("startup must fail without an icon");
    };
    assert_eq!(error.startup_step(), Some(StartupStep::LoadIcon));
}
