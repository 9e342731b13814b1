//! Configuration module for the helm mixin.
//!
//! This module handles everything the mixin reads before it acts:
//! - Step payload types and their YAML parsing
//! - Output format selection
//! - Runtime settings from the environment

mod format;
mod parser;
mod settings;
mod spec;

pub use format::{OutputFormat, PrintOptions};
pub use parser::{ActionParser, PayloadSource};
pub use settings::{ConfigLoader, DEFAULT_HELM_PROGRAM, HELM_PATH_ENV, MixinConfig};
pub use spec::{StatusAction, StatusArguments, StatusStep, Step};
