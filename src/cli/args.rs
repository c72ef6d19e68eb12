//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Skiff - Deployment configuration resolver.
#[derive(Debug, Parser)]
#[command(name = "skiff")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
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
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List environment names defined in a deployment file
    Environments(EnvironmentsArgs),

    /// Show one fully resolved environment
    Show(ShowArgs),

    /// List environment variables referenced by a deployment file
    Vars(VarsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `environments` command.
#[derive(Debug, Clone, clap::Args)]
pub struct EnvironmentsArgs {
    /// Path to the deployment file (.json, .yaml or .yml)
    pub file: PathBuf,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ShowArgs {
    /// Path to the deployment file (.json, .yaml or .yml)
    pub file: PathBuf,

    /// Environment to show
    pub environment: String,

    /// Output as YAML instead of JSON
    #[arg(long)]
    pub yaml: bool,
}

/// Arguments for the `vars` command.
#[derive(Debug, Clone, clap::Args)]
pub struct VarsArgs {
    /// Path to the deployment file (.json, .yaml or .yml)
    pub file: PathBuf,

    /// Only list variables currently unset in the process environment
    #[arg(long)]
    pub missing: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
