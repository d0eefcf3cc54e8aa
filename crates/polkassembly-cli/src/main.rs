//! CLI entry point.
//!
//! Loads configuration, installs logging and dispatches to handlers.
//! Handler failures map to sysexits-style exit codes via `CliError`.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use polkassembly_cli::{CheckConfig, Cli, CliError, Commands, handlers};

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: &CheckConfig, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Types { area } => handlers::types::execute(area.as_deref()),
        Commands::Check { kind, input } => handlers::check::execute(config, &kind, &input),
        Commands::CheckDir { dir } => handlers::check_dir::execute(config, &dir),
        Commands::Normalize { kind, input } => {
            handlers::normalize::execute(config, &kind, &input)
        }
        Commands::Config => {
            handlers::config::execute(config);
            Ok(())
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Loads .env before logging so RUST_LOG can come from it
    let config = match CheckConfig::load() {
        Ok(config) => cli.apply_to(config),
        Err(err) => {
            let err = CliError::from(err);
            eprintln!("Error: {err}");
            std::process::exit(err.exit_code());
        }
    };

    init_logging(cli.verbose);
    tracing::debug!(?config, "Effective configuration");

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    if let Err(err) = run(&config, command) {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
    Ok(())
}
