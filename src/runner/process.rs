//! Command runner backed by real child processes.

use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{ChildStderr, ChildStdout, Command};
use tracing::debug;

use crate::error::{MixinError, Result};

use super::command::HelmCommand;
use super::launcher::{CommandRunner, Sink};

/// Size of the buffer used per pipe when forwarding output.
const FORWARD_CHUNK_BYTES: usize = 8 * 1024;

/// Runs commands as child processes of the mixin.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl ProcessRunner {
    /// Creates a new process runner.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, command: &HelmCommand, out: &mut Sink, err: &mut Sink) -> Result<()> {
        debug!("Spawning: {command}");

        let mut child = Command::new(command.program())
            .args(command.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| MixinError::launch(command.to_string(), e))?;

        forward(child.stdout.take(), child.stderr.take(), out, err).await?;

        let status = child
            .wait()
            .await
            .map_err(|e| MixinError::execution(command.to_string(), e.to_string()))?;

        debug!("{command} exited with {status}");
        if status.success() {
            Ok(())
        } else {
            Err(MixinError::execution(command.to_string(), status.to_string()))
        }
    }
}

/// Copies both child pipes into the sinks until each reaches end of file.
///
/// Chunks are written as soon as they are read, so output from the child
/// shows up while it is still running.
async fn forward(
    mut stdout: Option<ChildStdout>,
    mut stderr: Option<ChildStderr>,
    out: &mut Sink,
    err: &mut Sink,
) -> Result<()> {
    let mut out_buf = vec![0u8; FORWARD_CHUNK_BYTES];
    let mut err_buf = vec![0u8; FORWARD_CHUNK_BYTES];

    while stdout.is_some() || stderr.is_some() {
        tokio::select! {
            read = read_chunk(stdout.as_mut(), &mut out_buf), if stdout.is_some() => {
                match read? {
                    0 => stdout = None,
                    n => {
                        out.write_all(&out_buf[..n])?;
                        out.flush()?;
                    }
                }
            }
            read = read_chunk(stderr.as_mut(), &mut err_buf), if stderr.is_some() => {
                match read? {
                    0 => stderr = None,
                    n => {
                        err.write_all(&err_buf[..n])?;
                        err.flush()?;
                    }
                }
            }
        }
    }

    Ok(())
}

/// Reads one chunk from a pipe that may already be closed.
async fn read_chunk<R>(reader: Option<&mut R>, buf: &mut [u8]) -> std::io::Result<usize>
where
    R: AsyncRead + Unpin,
{
    match reader {
        Some(reader) => reader.read(buf).await,
        None => Ok(0),
    }
}
