//! The `status` operation.

use std::io::Write;
use tracing::{debug, info};

use crate::config::{ActionParser, PrintOptions};
use crate::error::Result;
use crate::runner::CommandRunner;

use super::context::Mixin;

impl Mixin {
    /// Reports the status of the releases named by the step payload.
    ///
    /// Runs `helm status <release>` once per release, in order, echoing each
    /// command line to the output stream before launching it. The first
    /// failure stops the loop; later releases are not attempted.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be read or parsed, does not
    /// hold exactly one step, requests an unknown format, or if any helm
    /// command fails to start or exits unsuccessfully.
    pub async fn status(&mut self, opts: &PrintOptions) -> Result<()> {
        let payload = self.payload.read()?;
        let action = ActionParser::new().parse_status(&payload)?;
        let step = action.into_single_step()?;
        let format = opts.output_format()?;

        info!("Checking status of {} release(s)", step.releases().len());

        for release in step.releases() {
            let command = self
                .new_command(["status", release.as_str()])
                .with_args(format.helm_flags().iter().copied());

            writeln!(self.out, "{command}")?;
            self.out.flush()?;

            debug!("Reporting status of release {release}");
            self.runner
                .run(&command, self.out.as_mut(), self.err.as_mut())
                .await?;
        }

        Ok(())
    }
}
