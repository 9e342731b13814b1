//! External command execution.
//!
//! The mixin builds [`HelmCommand`]s and hands them to a [`CommandRunner`].
//! [`ProcessRunner`] launches real child processes; tests substitute a
//! recording runner.

mod command;
mod launcher;
mod process;

pub use command::HelmCommand;
pub use launcher::{CommandRunner, Sink};
pub use process::ProcessRunner;
