//! The mixin context shared by every operation.

use std::io::Write;

use crate::config::{MixinConfig, PayloadSource};
use crate::runner::{CommandRunner, HelmCommand, ProcessRunner};
use crate::schema::{EmbeddedSchemas, SchemaSource};

/// Streams, payload and capabilities an operation runs with.
///
/// The binary wires this to stdout, stderr and real processes; tests swap
/// in buffers and fakes through the `with_*` builders.
pub struct Mixin {
    /// Stream operators see as the mixin's output.
    pub(super) out: Box<dyn Write + Send>,
    /// Stream for error output of launched commands.
    pub(super) err: Box<dyn Write + Send>,
    /// Where the step payload is read from.
    pub(super) payload: PayloadSource,
    /// Launches external commands.
    pub(super) runner: Box<dyn CommandRunner>,
    /// Bundled schema lookup.
    pub(super) schemas: Box<dyn SchemaSource>,
    /// Program used for helm invocations.
    helm_program: String,
}

impl Mixin {
    /// Creates a mixin bound to the process streams.
    #[must_use]
    pub fn new(config: &MixinConfig) -> Self {
        Self {
            out: Box::new(std::io::stdout()),
            err: Box::new(std::io::stderr()),
            payload: PayloadSource::Stdin,
            runner: Box::new(ProcessRunner::new()),
            schemas: Box::new(EmbeddedSchemas),
            helm_program: config.helm_program.clone(),
        }
    }

    /// Replaces the output stream.
    #[must_use]
    pub fn with_output(mut self, out: impl Write + Send + 'static) -> Self {
        self.out = Box::new(out);
        self
    }

    /// Replaces the error stream.
    #[must_use]
    pub fn with_error(mut self, err: impl Write + Send + 'static) -> Self {
        self.err = Box::new(err);
        self
    }

    /// Replaces the payload source.
    #[must_use]
    pub fn with_payload(mut self, payload: PayloadSource) -> Self {
        self.payload = payload;
        self
    }

    /// Replaces the command runner.
    #[must_use]
    pub fn with_runner(mut self, runner: impl CommandRunner + 'static) -> Self {
        self.runner = Box::new(runner);
        self
    }

    /// Replaces the schema lookup.
    #[must_use]
    pub fn with_schemas(mut self, schemas: impl SchemaSource + 'static) -> Self {
        self.schemas = Box::new(schemas);
        self
    }

    /// Program used for helm invocations.
    #[must_use]
    pub fn helm_program(&self) -> &str {
        &self.helm_program
    }

    /// Starts a helm command with the given arguments.
    #[must_use]
    pub fn new_command<I, S>(&self, args: I) -> HelmCommand
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        HelmCommand::new(self.helm_program.as_str()).with_args(args)
    }
}

impl Default for Mixin {
    fn default() -> Self {
        Self::new(&MixinConfig::default())
    }
}

impl std::fmt::Debug for Mixin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mixin")
            .field("payload", &self.payload)
            .field("helm_program", &self.helm_program)
            .finish_non_exhaustive()
    }
}
