//! Output format selection.

use std::fmt;
use std::str::FromStr;

use crate::error::{MixinError, Result};

/// Output formats the host can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text, the default.
    #[default]
    Plaintext,
    /// YAML output.
    Yaml,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Flags that select this format on `helm status`.
    #[must_use]
    pub const fn helm_flags(self) -> &'static [&'static str] {
        match self {
            Self::Plaintext => &[],
            Self::Yaml => &["-o", "yaml"],
            Self::Json => &["-o", "json"],
        }
    }

    /// Name of the format as the host spells it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plaintext => "plaintext",
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = MixinError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "plaintext" => Ok(Self::Plaintext),
            "yaml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            other => Err(MixinError::invalid_format(other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Printing options supplied by the host.
///
/// The format stays a raw string until an operation resolves it, so an
/// unsupported value is reported by the operation that needed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    /// Requested output format.
    pub format: String,
}

impl PrintOptions {
    /// Creates print options for the given format value.
    #[must_use]
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }

    /// Resolves the requested format.
    ///
    /// # Errors
    ///
    /// Returns an invalid format error for unrecognized values.
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.format.parse()
    }
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self::new(OutputFormat::default().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helm_flags() {
        assert!(OutputFormat::Plaintext.helm_flags().is_empty());
        assert_eq!(OutputFormat::Yaml.helm_flags(), ["-o", "yaml"]);
        assert_eq!(OutputFormat::Json.helm_flags(), ["-o", "json"]);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let err = PrintOptions::new("table").output_format().unwrap_err();
        assert!(matches!(err, MixinError::InvalidFormat { ref format } if format == "table"));
        assert_eq!(err.to_string(), "invalid format: table");
    }

    #[test]
    fn test_format_names_are_case_sensitive() {
        assert!(PrintOptions::new("JSON").output_format().is_err());
        assert_eq!(
            PrintOptions::default().output_format().unwrap(),
            OutputFormat::Plaintext
        );
    }
}
