//! Payload loading and parsing.
//!
//! The host hands the mixin its step YAML either on stdin or in a file.
//! [`PayloadSource`] reads it and [`ActionParser`] turns it into typed steps.

use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{MixinError, Result};

use super::spec::StatusAction;

/// Where the step payload comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PayloadSource {
    /// Read the payload from standard input.
    #[default]
    Stdin,
    /// Read the payload from a file.
    File(PathBuf),
    /// Use an in-memory payload.
    Bytes(Vec<u8>),
}

impl PayloadSource {
    /// Picks the file source when a path is given, stdin otherwise.
    #[must_use]
    pub fn from_path(path: Option<&Path>) -> Self {
        path.map_or(Self::Stdin, |p| Self::File(p.to_path_buf()))
    }

    /// Reads the whole payload.
    ///
    /// # Errors
    ///
    /// Returns a payload error if the source cannot be read.
    pub fn read(&self) -> Result<Vec<u8>> {
        match self {
            Self::Stdin => {
                let mut buf = Vec::new();
                std::io::stdin()
                    .lock()
                    .read_to_end(&mut buf)
                    .map_err(|e| self.read_error(&e))?;
                Ok(buf)
            }
            Self::File(path) => std::fs::read(path).map_err(|e| self.read_error(&e)),
            Self::Bytes(bytes) => Ok(bytes.clone()),
        }
    }

    fn read_error(&self, err: &std::io::Error) -> MixinError {
        MixinError::Payload {
            source_name: self.to_string(),
            message: err.to_string(),
        }
    }
}

impl std::fmt::Display for PayloadSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdin => f.write_str("stdin"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Bytes(_) => f.write_str("memory"),
        }
    }
}

/// Parser for step payloads.
#[derive(Debug, Default)]
pub struct ActionParser;

impl ActionParser {
    /// Creates a new parser.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parses a status payload.
    ///
    /// An empty or null document yields an action without steps.
    ///
    /// # Errors
    ///
    /// Returns a deserialization error if the payload is not valid YAML or
    /// does not have the status step shape.
    pub fn parse_status(&self, payload: &[u8]) -> Result<StatusAction> {
        if payload.iter().all(u8::is_ascii_whitespace) {
            debug!("Empty status payload");
            return Ok(StatusAction::default());
        }

        let action = serde_yaml::from_slice::<Option<StatusAction>>(payload)
            .map_err(|e| MixinError::deserialization(e.to_string()))?
            .unwrap_or_default();

        debug!("Parsed status payload with {} step(s)", action.steps.len());
        Ok(action)
    }
}
