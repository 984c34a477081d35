//! vaultlayer - Merge secrets from a remote store into layered configuration.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vaultlayer::cli::output;
use vaultlayer::cli::{execute, Cli};
use vaultlayer::core::constants::LOG_ENV;
use vaultlayer::error::{ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("vaultlayer=debug")
        } else {
            EnvFilter::new("vaultlayer=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .init();

    if let Err(e) = execute(cli.command) {
        let suggestion = match &e {
            Error::Config(ConfigError::MissingSubPaths) => {
                Some("add SecretsSubPaths to the options file")
            }
            Error::Retrieval(_) => Some("pass --optional to continue without secrets"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
