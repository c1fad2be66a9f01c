mod cli;
mod commands;
mod error;
mod output;

use std::process::ExitCode;

use clap::Parser;
use jstdata_core::{Client, ClientConfig};

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<(), CliError> {
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match dotenv {
        Ok(path) => log::debug!("loaded environment from {}", path.display()),
        Err(error) if error.not_found() => {}
        Err(error) => log::warn!("ignoring unreadable .env file: {error}"),
    }
    log::debug!("command line input recorded: {cli:?}");

    let client = Client::connect_with_reqwest(client_config(&cli)).await?;
    let records = commands::run(&cli, &client).await?;
    output::render(&records, cli.format)
}

/// Environment first, then command-line overrides.
fn client_config(cli: &Cli) -> ClientConfig {
    let mut config = ClientConfig::from_env().with_credential_check(cli.verify_key);
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }
    config
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
