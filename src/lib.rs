// ============================================================================
// Strict linting - Dangerous or non-idiomatic practices are forbidden
// ============================================================================

#![deny(warnings)]                    // All warnings are treated as errors
#![deny(unsafe_code)]                 // Unsafe code is forbidden
#![deny(missing_docs)]                // All public items must be documented
#![deny(dead_code)]                   // Unused code is forbidden
#![deny(unused_imports)]              // Unused imports are forbidden
#![deny(unused_must_use)]             // Must handle Result and Option explicitly
#![deny(nonstandard_style)]           // Non-standard code style is forbidden

// Clippy lints (warnings only)
#![warn(clippy::all)]                 // All standard Clippy lints
#![warn(clippy::pedantic)]            // Very strict Clippy lints
#![warn(clippy::unwrap_used)]         // unwrap() warning
#![warn(clippy::expect_used)]         // expect() warning
#![warn(clippy::print_stdout)]        // println!() warning, output goes through the mixin
#![warn(clippy::redundant_clone)]     // Useless clones warning

// ============================================================================
// Crate Documentation
// ============================================================================

//! # Helm Mixin
//!
//! A deployment-tool mixin that reports the status of helm releases.
//!
//! ## Overview
//!
//! The host orchestration tool hands the mixin a step written in YAML. For a
//! `status` step the mixin runs `helm status` once per release, streaming
//! helm's output straight through, and stops at the first failure. The mixin
//! also prints the JSON schema describing the steps it accepts.
//!
//! ## Modules
//!
//! - [`config`]: Step payload types, output formats and runtime settings
//! - [`runner`]: Command lines and the process runner
//! - [`schema`]: Bundled schema resources
//! - [`mixin`]: The mixin context and its operations
//! - [`cli`]: Command-line interface
//!
//! ## Example
//!
//! ```yaml
//! status:
//!   - helm:
//!       description: "MySQL Status"
//!       releases:
//!         - mysql
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod cli;
pub mod config;
pub mod error;
pub mod mixin;
pub mod runner;
pub mod schema;

#[cfg(test)]
pub(crate) mod testing;

// ============================================================================
// Re-exports
// ============================================================================

pub use cli::{Cli, Commands};
pub use config::{ConfigLoader, MixinConfig, OutputFormat, PayloadSource, PrintOptions, StatusAction};
pub use error::{ConfigError, MixinError, Result};
pub use mixin::{Mixin, VersionInfo};
pub use runner::{CommandRunner, HelmCommand, ProcessRunner};
pub use schema::{EmbeddedSchemas, HELM_SCHEMA, SchemaSource};
