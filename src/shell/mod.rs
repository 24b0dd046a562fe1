//! UI shell
//!
//! Toolkit-independent core of the application: the upper-case transform, the
//! window state machine, the event dispatch table, and the startup sequence.
//! The binary supplies a [`Toolkit`] backed by slint and tray-icon.

pub mod app;
pub mod events;
pub mod state;
pub mod toolkit;
pub mod transform;

pub use app::{AppContext, EXIT_SUCCESS, Shell};
pub use events::{EventKind, EventTable, Handler, MenuAction, MouseButton, ShellEvent};
pub use state::{TextPanes, WindowState};
pub use toolkit::{IndicatorSpec, TextRegion, Toolkit, ToolkitResult, WindowSpec};
pub use transform::scream;
