use thiserror::Error;

use crate::core::ResourceKind;

/// Main error type for Dockhand
#[derive(Error, Debug)]
pub enum DockhandError {
    /// Container runtime errors
    #[error("Runtime error: {0}")]
    Runtime(#[from] RuntimeError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// General errors
    #[error("{0}")]
    Other(String),
}

/// Errors from driving the container runtime CLI
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// The runtime binary could not be invoked at all
    #[error("Could not invoke the container runtime: {0}")]
    Unavailable(String),

    /// The runtime command ran but exited non-zero
    #[error("Command failed for '{key}': {message}")]
    CommandFailed { key: String, message: String },

    /// List output did not match the expected field contract
    #[error("Malformed {kind} list line: {line:?}")]
    Parse { kind: ResourceKind, line: String },

    /// A user action was triggered with nothing selected
    #[error("Nothing is selected")]
    NoSelection,

    /// Terminal launch on an unhandled OS
    #[error("Opening a terminal is not supported on {0}")]
    PlatformUnsupported(String),
}

impl RuntimeError {
    /// Build a CommandFailed from a resource key and the runtime's stderr
    pub fn command_failed(key: impl Into<String>, message: impl Into<String>) -> Self {
        RuntimeError::CommandFailed {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Build a Parse error for one offending output line
    pub fn parse(kind: ResourceKind, line: impl Into<String>) -> Self {
        RuntimeError::Parse {
            kind,
            line: line.into(),
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Parse errors
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// Validation errors
    #[error("Configuration validation failed: {0}")]
    Validation(String),

    /// File not found
    #[error("Configuration file not found: {0}")]
    NotFound(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, DockhandError>;

impl DockhandError {
    /// Get a user-friendly error message for the notification area
    pub fn user_message(&self) -> String {
        match self {
            DockhandError::Runtime(RuntimeError::Unavailable(_)) => {
                "Could not reach the container runtime. Is Docker running?".to_string()
            }
            DockhandError::Runtime(RuntimeError::NoSelection) => {
                "Select a resource first.".to_string()
            }
            DockhandError::Config(ConfigError::NotFound(_)) => {
                "Configuration file not found. Using defaults.".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl From<toml::de::Error> for DockhandError {
    fn from(err: toml::de::Error) -> Self {
        DockhandError::Config(ConfigError::Parse(err.to_string()))
    }
}

impl From<toml::ser::Error> for DockhandError {
    fn from(err: toml::ser::Error) -> Self {
        DockhandError::Config(ConfigError::Parse(err.to_string()))
    }
}
