//! Error types for `CalSync`
//!
//! Startup is fail-fast: every construction step that can fail maps to a
//! [`StartupStep`] and surfaces as [`CalSyncError::StartupConstructionFailure`].
//! The transform and window visibility operations cannot fail.
//!
//! Error variants use `#[source]` to preserve error chains so the logged
//! message carries the underlying toolkit or decoder error.

use std::fmt;
use thiserror::Error;

/// Boxed error produced by the windowing toolkit or an image decoder
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// A resource-construction step performed during startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StartupStep {
    /// Decoding the packaged indicator/window image
    LoadIcon,
    /// Creating the top-level window
    CreateWindow,
    /// Adding a text region to the window layout
    CreateTextRegion,
    /// Adding the trigger button to the window layout
    CreateButton,
    /// Creating the background indicator
    CreateIndicator,
    /// Adding an action (or separator) to the indicator's context menu
    AddMenuAction,
    /// Making the indicator visible
    ShowIndicator,
    /// Showing the main window for the first time
    ShowWindow,
}

impl fmt::Display for StartupStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = match self {
            Self::LoadIcon => "load the indicator image",
            Self::CreateWindow => "create the main window",
            Self::CreateTextRegion => "add a text region to the layout",
            Self::CreateButton => "add the trigger button to the layout",
            Self::CreateIndicator => "create the tray indicator",
            Self::AddMenuAction => "add a tray menu action",
            Self::ShowIndicator => "show the tray indicator",
            Self::ShowWindow => "show the main window",
        };
        f.write_str(step)
    }
}

/// Main error type for `CalSync`
#[derive(Debug, Error)]
pub enum CalSyncError {
    /// A startup construction step failed; the process must not continue
    /// Preserves the underlying error source for full error chain transparency
    #[error("Startup failed while trying to {step}: {source}")]
    StartupConstructionFailure {
        /// The step that failed
        step: StartupStep,
        /// The underlying failure
        #[source]
        source: BoxError,
    },

    /// Logging system could not be installed
    #[error("Logging setup failed: {0}")]
    LoggingError(#[source] BoxError),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CalSyncError {
    /// Wrap a toolkit error as a failure of `step`
    pub fn startup(step: StartupStep, source: impl Into<BoxError>) -> Self {
        Self::StartupConstructionFailure {
            step,
            source: source.into(),
        }
    }

    /// The startup step that failed, if this is a construction failure
    pub fn startup_step(&self) -> Option<StartupStep> {
        match self {
            Self::StartupConstructionFailure { step, .. } => Some(*step),
            _ => None,
        }
    }
}

/// Result type alias for `CalSync` operations
pub type Result<T> = std::result::Result<T, CalSyncError>;

/// Convert an error to a message suitable for the fatal startup dialog
pub fn get_user_friendly_error(error: &CalSyncError) -> String {
    match error {
        CalSyncError::StartupConstructionFailure {
            step: StartupStep::LoadIcon,
            source,
        } => {
            format!(
                "The application icon could not be loaded:\n\n{source}\n\n\
                 Make sure the assets folder was installed next to the executable."
            )
        }
        CalSyncError::StartupConstructionFailure {
            step: StartupStep::CreateIndicator | StartupStep::ShowIndicator,
            source,
        } => {
            format!(
                "The system tray icon could not be created:\n\n{source}\n\n\
                 CalSync needs a system tray to run in the background."
            )
        }
        CalSyncError::StartupConstructionFailure { step, source } => {
            format!("CalSync could not {step}:\n\n{source}")
        }
        CalSyncError::LoggingError(e) => {
            format!("The log file could not be opened:\n\n{e}")
        }
        CalSyncError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
    }
}
