//! Runtime settings for the mixin binary.
//!
//! Settings come from the environment, optionally seeded from a `.env` file
//! next to the working directory. Command-line flags override both.

use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::{ConfigError, Result};

/// Environment variable overriding the helm program.
pub const HELM_PATH_ENV: &str = "HELM_MIXIN_HELM_PATH";

/// Program invoked when nothing overrides it.
pub const DEFAULT_HELM_PROGRAM: &str = "helm";

/// Resolved mixin settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixinConfig {
    /// Program run for `helm` invocations.
    pub helm_program: String,
}

impl Default for MixinConfig {
    fn default() -> Self {
        Self {
            helm_program: DEFAULT_HELM_PROGRAM.to_string(),
        }
    }
}

impl MixinConfig {
    /// Builds settings from a variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unusable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = lookup(HELM_PATH_ENV) {
            debug!("Overriding helm program from environment");
            config = config.with_helm_program(path, HELM_PATH_ENV)?;
        }

        Ok(config)
    }

    /// Replaces the helm program with a value read from `setting`.
    ///
    /// # Errors
    ///
    /// Returns an error naming `setting` if the program is blank.
    pub fn with_helm_program(mut self, program: impl Into<String>, setting: &str) -> Result<Self> {
        let program = program.into();
        if program.trim().is_empty() {
            return Err(ConfigError::invalid_value(setting, "helm program cannot be empty").into());
        }
        self.helm_program = program;
        Ok(self)
    }
}

/// Loads [`MixinConfig`] from the process environment.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Directory searched for a `.env` file.
    base_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Creates a loader rooted at the working directory.
    #[must_use]
    pub const fn new() -> Self {
        Self { base_path: None }
    }

    /// Sets the directory searched for a `.env` file.
    #[must_use]
    pub fn with_base_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_path = Some(path.into());
        self
    }

    /// Loads the `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be loaded.
    pub fn load_dotenv(&self) -> Result<()> {
        let env_path = self
            .base_path
            .as_ref()
            .map_or_else(|| PathBuf::from(".env"), |p| p.join(".env"));

        if env_path.exists() {
            info!("Loading environment from: {}", env_path.display());
            dotenvy::from_path(&env_path).map_err(|e| ConfigError::DotEnv {
                path: env_path.clone(),
                message: e.to_string(),
            })?;
        } else {
            debug!(".env file not found at: {}", env_path.display());
        }

        Ok(())
    }

    /// Loads `.env` and resolves settings from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `.env` cannot be loaded or a value is unusable.
    pub fn load(&self) -> Result<MixinConfig> {
        self.load_dotenv()?;
        MixinConfig::from_lookup(|name| std::env::var(name).ok())
    }
}
