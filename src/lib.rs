//! `CalSync` - tray-resident desktop shell
//!
//! A fixed-size window with two text panes and a trigger button that writes the
//! upper-cased left pane into the right pane. Closing the window hides it; a
//! system tray indicator brings it back and offers an exit action.
//!
//! The library holds everything that does not need a display: configuration,
//! errors, the shell state machine and event dispatch, icon decoding and
//! logging. The slint window and tray indicator live in the binary.

// Module declarations
pub mod config;
pub mod error;
pub mod shell;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use error::{CalSyncError, Result};
