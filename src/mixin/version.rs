//! The `version` operation.

use serde::Serialize;
use std::io::Write;

use crate::config::{OutputFormat, PrintOptions};
use crate::error::{MixinError, Result};

use super::context::Mixin;

/// Name the mixin reports itself as.
pub const MIXIN_NAME: &str = "helm-mixin";

/// Build metadata reported by `version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    /// Mixin name.
    pub name: String,
    /// Crate version.
    pub version: String,
    /// Crate authors.
    pub author: String,
}

impl Default for VersionInfo {
    fn default() -> Self {
        Self {
            name: MIXIN_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            author: env!("CARGO_PKG_AUTHORS").to_string(),
        }
    }
}

impl Mixin {
    /// Writes the mixin's version in the requested format.
    ///
    /// # Errors
    ///
    /// Returns an error if the format is unknown or the output cannot be
    /// written.
    pub fn print_version(&mut self, opts: &PrintOptions) -> Result<()> {
        let info = VersionInfo::default();

        match opts.output_format()? {
            OutputFormat::Plaintext => {
                writeln!(self.out, "{} v{} by {}", info.name, info.version, info.author)?;
            }
            OutputFormat::Yaml => {
                let yaml = serde_yaml::to_string(&info)
                    .map_err(|e| MixinError::Io(std::io::Error::other(e)))?;
                self.out.write_all(yaml.as_bytes())?;
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&info)
                    .map_err(|e| MixinError::Io(std::io::Error::other(e)))?;
                writeln!(self.out, "{json}")?;
            }
        }

        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::SharedBuffer;

    fn printed(format: &str) -> Result<String> {
        let out = SharedBuffer::default();
        let mut mixin = Mixin::default().with_output(out.clone());
        mixin.print_version(&PrintOptions::new(format))?;
        Ok(out.contents())
    }

    #[test]
    fn test_plaintext_version() {
        let text = printed("plaintext").unwrap();
        assert!(text.starts_with(&format!("helm-mixin v{}", env!("CARGO_PKG_VERSION"))));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_json_version() {
        let json: serde_json::Value = serde_json::from_str(&printed("json").unwrap()).unwrap();
        assert_eq!(json["name"], "helm-mixin");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_yaml_version() {
        let yaml: serde_yaml::Value = serde_yaml::from_str(&printed("yaml").unwrap()).unwrap();
        assert_eq!(yaml["name"], serde_yaml::Value::from("helm-mixin"));
    }

    #[test]
    fn test_unknown_version_format() {
        assert!(matches!(
            printed("table"),
            Err(MixinError::InvalidFormat { .. })
        ));
    }
}
