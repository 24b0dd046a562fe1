//! Shell configuration
//!
//! All settings are compile-time defaults. Nothing is read from or written to
//! disk, and there are no command-line flags.

pub mod models;

pub use models::{ShellConfig, WindowSize};
