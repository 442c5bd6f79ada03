//! localrepo - Local artifact repository layer
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use localrepo::cli::{Cli, Commands};
use localrepo::config::schema::GeneralConfig;
use localrepo::config::ConfigManager;
use localrepo::error::RepoResult;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> RepoResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_manager = if let Some(ref path) = cli.config {
        ConfigManager::with_path(path.clone())
    } else {
        ConfigManager::new()
    };
    let mut config = config_manager.load().await?;

    init_logging(cli.verbose, &config.general);
    debug!("Using config {}", config_manager.path().display());

    if let Some(basedir) = cli.basedir {
        debug!("Base directory override: {}", basedir.display());
        config.repository.basedir = basedir;
    }

    // Dispatch to command
    match cli.command {
        Commands::Path(args) => localrepo::cli::commands::path(args, &config).await,
        Commands::Find(args) => localrepo::cli::commands::find(args, &config).await,
        Commands::Key(args) => localrepo::cli::commands::key(args, &config).await,
        Commands::Config(args) => {
            localrepo::cli::commands::config(args, &config, &config_manager).await
        }
    }
}

/// Initialize logging: 0 = warn, 1 = info, 2+ = debug. Output goes to
/// stderr so stdout stays usable in scripts.
fn init_logging(verbose: u8, general: &GeneralConfig) {
    let level = match verbose {
        0 if general.verbose => 1,
        n => n,
    };
    let filter = match level {
        0 => EnvFilter::new("localrepo=warn"),
        1 => EnvFilter::new("localrepo=info"),
        _ => EnvFilter::new("localrepo=debug"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr);

    if general.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
