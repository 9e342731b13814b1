//! Command runner trait definition.
//!
//! This module defines the interface the mixin uses to launch external
//! programs.

use async_trait::async_trait;
use std::io::Write;

use crate::error::Result;
use super::command::HelmCommand;

/// Output sink handed to a running command.
pub type Sink = dyn Write + Send;

/// Trait for launching external commands.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs a command to completion.
    ///
    /// The command's standard output and standard error are forwarded to
    /// `out` and `err` while it runs.
    ///
    /// # Errors
    ///
    /// Returns a launch error if the command cannot be started and an
    /// execution error if it exits unsuccessfully.
    async fn run(&self, command: &HelmCommand, out: &mut Sink, err: &mut Sink) -> Result<()>;
}

#[async_trait]
impl CommandRunner for Box<dyn CommandRunner> {
    async fn run(&self, command: &HelmCommand, out: &mut Sink, err: &mut Sink) -> Result<()> {
        (**self).run(command, out, err).await
    }
}
