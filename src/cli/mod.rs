//! CLI module for the helm mixin.
//!
//! This module provides the command-line interface the host uses to invoke
//! the mixin.

mod commands;

pub use commands::{Cli, Commands};
