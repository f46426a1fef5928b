//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// deploy-check - Pre-deployment checklist for web projects.
#[derive(Debug, Parser)]
#[command(name = "deploy-check")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .deploy-check.yml)
    #[arg(short, long, global = true, env = "DEPLOY_CHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the pre-deployment checklist (default if no command specified)
    ///
    /// Check targets come from `.deploy-check.yml` in the project root,
    /// `--config` or `DEPLOY_CHECK_CONFIG`. Without a config file the
    /// defaults apply. A named config file that is missing, or any config
    /// file that is invalid, stops the run before any check executes and
    /// exits with status 1.
    Check(CheckArgs),

    /// List source files that nothing else appears to reference
    Orphans(OrphansArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `orphans` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct OrphansArgs {
    /// Source directory to scan (overrides orphans.src_dir)
    #[arg(long, value_name = "DIR")]
    pub src: Option<PathBuf>,
}
