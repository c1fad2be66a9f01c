use jstdata_core::{Client, MetricsRequest, Ordering, RecordSet};

use crate::cli::{MetricArgs, MetricCommand, MetricLsArgs};
use crate::error::CliError;

/// Columns kept by `metric ls` without `--expanded`.
const CONDENSED_COLUMNS: [&str; 1] = ["slug"];

pub async fn run(args: &MetricArgs, client: &Client) -> Result<RecordSet, CliError> {
    match &args.command {
        MetricCommand::Ls(ls) => list(ls, client).await,
        MetricCommand::Show(show) => Ok(client.metric(&show.metric).await?),
        MetricCommand::Dimensions(dimensions) => {
            Ok(client.metric_dimensions(&dimensions.metric).await?)
        }
    }
}

async fn list(args: &MetricLsArgs, client: &Client) -> Result<RecordSet, CliError> {
    let request = MetricsRequest {
        page: args.page.into(),
        ordering: Ordering::new(&args.order_by, &args.sort_order),
    };
    let metrics = client.metrics(&request).await?;

    if args.expanded {
        Ok(metrics)
    } else {
        Ok(condense(metrics))
    }
}

fn condense(metrics: RecordSet) -> RecordSet {
    let RecordSet {
        records,
        limit,
        offset,
    } = metrics;

    RecordSet {
        records: records
            .iter()
            .map(|record| record.select(&CONDENSED_COLUMNS))
            .collect(),
        limit,
        offset,
    }
}
