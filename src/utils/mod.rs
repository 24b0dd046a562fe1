//! Utility modules
//!
//! Provides icon decoding and logging setup.

pub mod icon;
pub mod logging;

pub use icon::{IconImage, load_icon};
pub use logging::init_logging;
