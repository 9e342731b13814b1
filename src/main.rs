//! helm-mixin CLI entrypoint.
//!
//! The host runs this binary with a subcommand and feeds step payloads on
//! stdin. Exit code 0 means success; anything else carries an error on stderr.

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use helm_mixin::cli::{Cli, Commands};
use helm_mixin::config::{ConfigLoader, MixinConfig, PayloadSource};
use helm_mixin::error::Result;
use helm_mixin::mixin::Mixin;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Main entrypoint.
fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Steps run one after another on the calling thread
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("{} failed to create async runtime: {e}", "Error:".red());
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "Error:".red());
            ExitCode::FAILURE
        }
    }
}

/// Initializes the logging system.
///
/// Logs go to stderr so they never mix with the output the host reads.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Main async entry point.
async fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.helm_path.as_deref())?;
    let opts = cli.command.print_options().unwrap_or_default();
    let mut mixin = Mixin::new(&config);

    match cli.command {
        Commands::Status { file, .. } => {
            mixin = mixin.with_payload(PayloadSource::from_path(file.as_deref()));
            mixin.status(&opts).await
        }
        Commands::Schema => mixin.print_schema(),
        Commands::Version { .. } => mixin.print_version(&opts),
    }
}

/// Resolves settings, letting `--helm-path` win over the environment.
fn load_config(helm_path: Option<&str>) -> Result<MixinConfig> {
    let config = ConfigLoader::new().load()?;
    debug!("Resolved configuration: {config:?}");

    match helm_path {
        Some(path) => config.with_helm_program(path, "--helm-path"),
        None => Ok(config),
    }
}
