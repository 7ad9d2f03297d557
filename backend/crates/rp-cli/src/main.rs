//! rp - Rank Poll CLI
//!
//! Talks to rp-server and remembers the logged-in user in local storage.
//!
//! # Examples
//!
//! ```bash
//! rp user login --username ana --password secret
//! rp poll create --title "Lunch" --option Pizza --option Tacos --duration 10m
//! rp vote <poll-id> --rank Pizza=1 --rank Tacos=2
//! rp poll get <poll-id> --pretty
//! ```

use rp_cli::{Cli, CliError, CliResult, Client, RpApp, TerminalEnvironment, logger};

use rp_startup::{FileStorage, LogSink, StartupLoader};

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::{LevelFilter, debug};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Some(hint) = e.hint() {
                eprintln!("Hint: {}", hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let config = rp_config::Config::load()?;
    config.validate()?;

    let level = if cli.verbose {
        config.logging.level.0
    } else {
        LevelFilter::Warn
    };
    logger::initialize(level, config.logging.colored)?;

    let storage = Arc::new(FileStorage::new(config.storage_path()?));
    debug!("Local storage at {}", storage.path().display());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|source| CliError::Runtime { source })?;

    let server_url = cli
        .server
        .clone()
        .unwrap_or_else(|| config.client.server_url.clone());
    let app = RpApp::new(
        cli,
        Client::new(&server_url),
        Arc::clone(&storage),
        runtime.handle().clone(),
    );

    StartupLoader::new(storage, LogSink).load_and_start(&TerminalEnvironment, app)?
}
