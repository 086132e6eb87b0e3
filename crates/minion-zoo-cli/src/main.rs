//! minion-zoo CLI - run synthetic labelers from a roster configuration.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Roster { config, json } => commands::roster::run(config, json, cli.verbose),

        Commands::Simulate {
            config,
            subjects,
            seed,
            output,
            format,
        } => commands::simulate::run(config, subjects, seed, output, format, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` when set.
fn init_logging(verbose: bool) {
    let default = if verbose { "minion_zoo=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
