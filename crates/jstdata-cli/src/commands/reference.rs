use jstdata_core::{Client, CountriesRequest, RecordSet};

use crate::cli::{ReferenceArgs, ReferenceCommand};
use crate::error::CliError;

pub async fn run(args: &ReferenceArgs, client: &Client) -> Result<RecordSet, CliError> {
    match &args.command {
        ReferenceCommand::Countries(countries) => {
            let request = CountriesRequest {
                page: countries.page.into(),
                sort_order: countries.sort_order.clone(),
            };
            Ok(client.countries(&request).await?)
        }
    }
}
