//! Command-line interface.

pub mod completions;
pub mod load;
pub mod output;
pub mod paths;
pub mod transform;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// vaultlayer - Merge secrets from a remote store into layered configuration.
#[derive(Parser)]
#[command(
    name = "vaultlayer",
    about = "Merge secrets from a remote store into layered configuration",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Build configuration from base files with secrets merged in
    Load {
        /// Provider options file (.toml or .json)
        #[arg(short, long, env = "VAULTLAYER_OPTIONS")]
        options: PathBuf,
        /// Directory holding exported secrets (<dir>/<mount>/<path>.json)
        #[arg(short, long)]
        secrets: PathBuf,
        /// Base configuration JSON files, applied in order before secrets
        #[arg(short, long)]
        base: Vec<PathBuf>,
        /// Keep the base configuration if secrets cannot be retrieved
        #[arg(long)]
        optional: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the remote paths that would be queried
    Paths {
        /// Provider options file (.toml or .json)
        #[arg(short, long, env = "VAULTLAYER_OPTIONS")]
        options: PathBuf,
    },

    /// Show the configuration key a secret key maps to
    Transform {
        /// Secret key as stored remotely (e.g., ENV_Database__Host)
        key: String,
        /// Provider options file (.toml or .json); defaults apply without it
        #[arg(short, long)]
        options: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Load {
            options,
            secrets,
            base,
            optional,
            json,
        } => load::execute(&options, &secrets, &base, optional, json),
        Paths { options } => paths::execute(&options),
        Transform { key, options } => transform::execute(&key, options.as_deref()),
        Completions { shell } => completions::execute(shell),
    }
}
