//! CLI command definitions.
//!
//! This module defines all CLI commands and their arguments using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::PrintOptions;

/// helm-mixin - Reports helm release status for deployment steps.
#[derive(Parser, Debug)]
#[command(name = "helm-mixin")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Program to run for helm commands.
    #[arg(long, global = true)]
    pub helm_path: Option<String>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report the status of the releases named by a status step.
    Status {
        /// Read the step payload from this file instead of stdin.
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output format (plaintext, yaml, json).
        #[arg(short, long, default_value = "plaintext")]
        output: String,
    },

    /// Print the JSON schema for the mixin's steps.
    Schema,

    /// Print the mixin version.
    Version {
        /// Output format (plaintext, yaml, json).
        #[arg(short, long, default_value = "plaintext")]
        output: String,
    },
}

impl Commands {
    /// Print options carried by the command, if it prints formatted output.
    #[must_use]
    pub fn print_options(&self) -> Option<PrintOptions> {
        match self {
            Self::Status { output, .. } | Self::Version { output } => {
                Some(PrintOptions::new(output.as_str()))
            }
            Self::Schema => None,
        }
    }
}
