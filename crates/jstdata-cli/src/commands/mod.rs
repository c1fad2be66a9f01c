mod metric;
mod query;
mod reference;
mod ticker;

use jstdata_core::{Client, RecordSet};

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli, client: &Client) -> Result<RecordSet, CliError> {
    match &cli.command {
        Command::Metric(args) => metric::run(args, client).await,
        Command::Query(args) => query::run(args, client).await,
        Command::Reference(args) => reference::run(args, client).await,
        Command::Ticker(args) => ticker::run(args, client).await,
    }
}
