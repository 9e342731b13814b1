//! Error types for the helm mixin.
//!
//! Every operation returns [`MixinError`]. Errors are never recovered from
//! locally: the first one aborts the operation and reaches the host through
//! the process exit code and the error stream.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the helm mixin.
#[derive(Debug, Error)]
pub enum MixinError {
    /// A bundled resource is missing.
    #[error("resource not found: {name}")]
    ResourceNotFound {
        /// Name the resource was looked up by.
        name: String,
    },

    /// A bundled resource is not valid UTF-8 text.
    #[error("resource {name} is not valid UTF-8")]
    InvalidResource {
        /// Name of the resource.
        name: String,
    },

    /// The step payload could not be read.
    #[error("could not read payload from {source_name}: {message}")]
    Payload {
        /// Where the payload was read from.
        source_name: String,
        /// Description of the read failure.
        message: String,
    },

    /// The step payload is not valid YAML or does not fit the step shape.
    #[error("could not parse payload: {message}")]
    Deserialization {
        /// Parser message.
        message: String,
    },

    /// The payload does not contain exactly one step.
    #[error("expected a single step, but got {count}")]
    Validation {
        /// Number of steps actually found.
        count: usize,
    },

    /// The requested output format is not supported.
    #[error("invalid format: {format}")]
    InvalidFormat {
        /// The rejected format value.
        format: String,
    },

    /// The external command could not be started.
    #[error("could not execute command, {command}: {source}")]
    Launch {
        /// Rendered command line.
        command: String,
        /// Underlying OS error.
        source: std::io::Error,
    },

    /// The external command ran but did not exit cleanly.
    #[error("{command} failed: {status}")]
    Execution {
        /// Rendered command line.
        command: String,
        /// Exit status as reported by the OS.
        status: String,
    },

    /// Configuration errors.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors while writing to the output streams.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The `.env` file exists but could not be loaded.
    #[error("failed to load {path}: {message}")]
    DotEnv {
        /// Path to the `.env` file.
        path: PathBuf,
        /// Description of the failure.
        message: String,
    },

    /// A setting has an unusable value.
    #[error("invalid value for {name}: {message}")]
    InvalidValue {
        /// Name of the setting.
        name: String,
        /// Why the value was rejected.
        message: String,
    },
}

/// Result type alias for mixin operations.
pub type Result<T> = std::result::Result<T, MixinError>;

impl MixinError {
    /// Creates a deserialization error from a parser message.
    #[must_use]
    pub fn deserialization(message: impl Into<String>) -> Self {
        Self::Deserialization {
            message: message.into(),
        }
    }

    /// Creates an invalid format error.
    #[must_use]
    pub fn invalid_format(format: impl Into<String>) -> Self {
        Self::InvalidFormat {
            format: format.into(),
        }
    }

    /// Creates a launch error for a command that could not be started.
    #[must_use]
    pub fn launch(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Launch {
            command: command.into(),
            source,
        }
    }

    /// Creates an execution error for a command that exited unsuccessfully.
    #[must_use]
    pub fn execution(command: impl Into<String>, status: impl Into<String>) -> Self {
        Self::Execution {
            command: command.into(),
            status: status.into(),
        }
    }
}

impl ConfigError {
    /// Creates an invalid value error for a named setting.
    #[must_use]
    pub fn invalid_value(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            name: name.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_reports_count() {
        let err = MixinError::Validation { count: 2 };
        assert_eq!(err.to_string(), "expected a single step, but got 2");
    }

    #[test]
    fn test_launch_message_includes_command_and_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = MixinError::launch("helm status mysql", cause);
        assert_eq!(
            err.to_string(),
            "could not execute command, helm status mysql: no such file"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
