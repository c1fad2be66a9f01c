use jstdata_core::{Client, RecordSet};

use crate::cli::{TickerArgs, TickerCommand};
use crate::error::CliError;

pub async fn run(args: &TickerArgs, client: &Client) -> Result<RecordSet, CliError> {
    let records = match &args.command {
        TickerCommand::Ls(ls) => client.tickers(ls.page.into()).await?,
        TickerCommand::Financials(symbol) => {
            client.financials(&symbol.ticker, symbol.page.into()).await?
        }
        TickerCommand::Prices(symbol) => client.prices(&symbol.ticker, symbol.page.into()).await?,
    };
    Ok(records)
}
