use jstdata_core::{Client, ObservationsRequest, Ordering, RecordSet, SeriesRequest};

use crate::cli::{ByIdArgs, QueryArgs, QueryCommand, SeriesArgs};
use crate::error::CliError;

pub async fn run(args: &QueryArgs, client: &Client) -> Result<RecordSet, CliError> {
    match &args.command {
        QueryCommand::ById(by_id) => observations(by_id, client).await,
        QueryCommand::Series(series) => metric_series(series, client).await,
        QueryCommand::Concept(concept) => Ok(client
            .ticker_series_by_concept(&concept.ticker, &concept.concept)
            .await?),
    }
}

async fn observations(args: &ByIdArgs, client: &Client) -> Result<RecordSet, CliError> {
    let request = observations_request(args)?;
    Ok(client.observations(&request).await?)
}

fn observations_request(args: &ByIdArgs) -> Result<ObservationsRequest, CliError> {
    let mut request = ObservationsRequest::new(args.series.iter().cloned());
    request.observation_type.clone_from(&args.observation_type);
    request.page = args.page.into();
    request.ordering = Ordering::new(&args.order_by, &args.sort_order);

    if let Some(start) = &args.start {
        request = request.with_start(start)?;
    }
    if let Some(end) = &args.end {
        request = request.with_end(end)?;
    }
    Ok(request)
}

async fn metric_series(args: &SeriesArgs, client: &Client) -> Result<RecordSet, CliError> {
    let mut request = SeriesRequest::new(&args.metric);
    request.page = args.page.into();
    request.ordering = Ordering::new(&args.order_by, &args.sort_order);
    Ok(client.metric_series(&request).await?)
}
