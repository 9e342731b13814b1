//! Test doubles shared by the unit tests.

use async_trait::async_trait;
use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::error::{MixinError, Result};
use crate::runner::{CommandRunner, HelmCommand, Sink};

/// In-memory writer whose contents stay readable after it is boxed.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    /// Everything written so far, as text.
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().expect("buffer lock").clone()).expect("utf-8 output")
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("buffer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runner that records commands instead of spawning them.
///
/// The release is taken from the second argument (`status <release>`).
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    calls: Arc<Mutex<Vec<HelmCommand>>>,
    failing: HashSet<String>,
    unlaunchable: HashSet<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the command for `release` exit unsuccessfully.
    pub fn fail_on(mut self, release: &str) -> Self {
        self.failing.insert(release.to_string());
        self
    }

    /// Makes the command for `release` fail to start.
    pub fn refuse_launch(mut self, release: &str) -> Self {
        self.unlaunchable.insert(release.to_string());
        self
    }

    /// Commands the mixin tried to launch, in order.
    pub fn calls(&self) -> Vec<HelmCommand> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, command: &HelmCommand, out: &mut Sink, err: &mut Sink) -> Result<()> {
        let release = command.args().get(1).cloned().unwrap_or_default();
        self.calls.lock().expect("calls lock").push(command.clone());

        if self.unlaunchable.contains(&release) {
            return Err(MixinError::launch(
                command.to_string(),
                io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            ));
        }

        if self.failing.contains(&release) {
            writeln!(err, "Error: release: not found")?;
            return Err(MixinError::execution(command.to_string(), "exit status: 1"));
        }

        writeln!(out, "NAME: {release}")?;
        Ok(())
    }
}
