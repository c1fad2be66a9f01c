//! CLI argument definitions for jstdata.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `metric ls` | List metrics (slugs only unless `--expanded`) |
//! | `metric show` | Show one metric as a key/value table |
//! | `metric dimensions` | Show the dimensions a metric's series span |
//! | `query by-id` | Observations for one or more series ids |
//! | `query series` | Series belonging to a metric |
//! | `query concept` | Ticker series by concept (not implemented) |
//! | `reference countries` | Country reference list |
//! | `ticker ls/financials/prices` | Ticker data (not implemented) |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `pretty` | Output format (json, csv, pretty) |
//! | `--base-url` | env / `https://api.jeffersonst.io` | Provider base URL |
//! | `--verify-key` | `false` | Check the API key against `heartbeat` first |
//! | `-v` | warn | Raise log verbosity (repeatable) |
//!
//! # Examples
//!
//! ```bash
//! jstdata metric ls --limit 5 --expanded
//! jstdata metric show gdp --format json
//! jstdata query by-id US.GDP DE.GDP --start 2020 --end 2024-05
//! jstdata reference countries --format csv
//! ```

use clap::{Args, Parser, Subcommand};
use jstdata_core::{OutputFormat, Page};
use std::str::FromStr;

/// Jefferson Street economic data CLI.
#[derive(Debug, Parser)]
#[command(
    name = "jstdata",
    author,
    version,
    about = "Query metrics, series and observations from the Jefferson Street API",
    long_about = "jstdata fetches economic reference data from the Jefferson Street API \
and prints it as JSON, CSV or an aligned table.\n\
\n\
The API key is read from JEFFERSON_STREET_API_KEY (a .env file in the working \
directory is loaded first). JEFFERSON_STREET_SERVER overrides the base URL."
)]
pub struct Cli {
    /// Output format: json, csv or pretty.
    #[arg(long, global = true, default_value = "pretty", value_parser = OutputFormat::from_str)]
    pub format: OutputFormat,

    /// Provider base URL; overrides JEFFERSON_STREET_SERVER.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Verify the API key against the heartbeat endpoint before running.
    #[arg(long, global = true, default_value_t = false)]
    pub verify_key: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Metric catalogue.
    Metric(MetricArgs),

    /// Series and observation queries.
    Query(QueryArgs),

    /// Reference data.
    Reference(ReferenceArgs),

    /// Ticker data (not implemented by the provider client yet).
    Ticker(TickerArgs),
}

/// `--limit` / `--offset`, shared by every listing command.
#[derive(Debug, Clone, Copy, Args)]
pub struct PageArgs {
    /// Maximum number of records to return.
    #[arg(long, default_value_t = 100)]
    pub limit: u32,

    /// Number of records to skip.
    #[arg(long, default_value_t = 0)]
    pub offset: u32,
}

impl From<PageArgs> for Page {
    fn from(args: PageArgs) -> Self {
        Page::new(args.limit, args.offset)
    }
}

#[derive(Debug, Args)]
pub struct MetricArgs {
    #[command(subcommand)]
    pub command: MetricCommand,
}

#[derive(Debug, Subcommand)]
pub enum MetricCommand {
    /// List available metrics.
    Ls(MetricLsArgs),

    /// Show a single metric.
    Show(MetricSlugArgs),

    /// Show the dimensions of a metric.
    Dimensions(MetricSlugArgs),
}

#[derive(Debug, Args)]
pub struct MetricLsArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Sort order (asc or desc).
    #[arg(long = "sort_order", alias = "sort-order", default_value = "desc")]
    pub sort_order: String,

    /// Column to order by.
    #[arg(long = "order_by", alias = "order-by", default_value = "last_updated")]
    pub order_by: String,

    /// Return every metric field instead of just the slug.
    #[arg(long, default_value_t = false)]
    pub expanded: bool,
}

#[derive(Debug, Args)]
pub struct MetricSlugArgs {
    /// The metric's slug.
    pub metric: String,
}

#[derive(Debug, Args)]
pub struct QueryArgs {
    #[command(subcommand)]
    pub command: QueryCommand,
}

#[derive(Debug, Subcommand)]
pub enum QueryCommand {
    /// Observations for one or more series ids.
    ById(ByIdArgs),

    /// Series belonging to a metric.
    Series(SeriesArgs),

    /// Ticker series matching a concept.
    Concept(ConceptArgs),
}

#[derive(Debug, Args)]
pub struct ByIdArgs {
    /// One or more series ids.
    #[arg(required = true, num_args = 1..)]
    pub series: Vec<String>,

    #[command(flatten)]
    pub page: PageArgs,

    /// Type of observations (earliest or latest).
    #[arg(long = "observation_type", alias = "observation-type", default_value = "latest")]
    pub observation_type: String,

    /// Sort order (asc or desc).
    #[arg(long = "sort_order", alias = "sort-order", default_value = "desc")]
    pub sort_order: String,

    /// Column to order by.
    #[arg(long = "order_by", alias = "order-by", default_value = "id")]
    pub order_by: String,

    /// Start period: YYYY-MM-DD, YYYY-MM, YYYY or unix timestamp.
    #[arg(long)]
    pub start: Option<String>,

    /// End period: YYYY-MM-DD, YYYY-MM, YYYY or unix timestamp.
    #[arg(long)]
    pub end: Option<String>,
}

#[derive(Debug, Args)]
pub struct SeriesArgs {
    /// The metric's slug.
    pub metric: String,

    #[command(flatten)]
    pub page: PageArgs,

    /// Sort order (asc or desc).
    #[arg(long = "sort_order", alias = "sort-order", default_value = "desc")]
    pub sort_order: String,

    /// Column to order by.
    #[arg(long = "order_by", alias = "order-by", default_value = "last_updated")]
    pub order_by: String,
}

#[derive(Debug, Args)]
pub struct ConceptArgs {
    /// Ticker symbol.
    pub ticker: String,

    /// Concept name, e.g. Revenues.
    pub concept: String,
}

#[derive(Debug, Args)]
pub struct ReferenceArgs {
    #[command(subcommand)]
    pub command: ReferenceCommand,
}

#[derive(Debug, Subcommand)]
pub enum ReferenceCommand {
    /// List countries.
    Countries(CountriesArgs),
}

#[derive(Debug, Args)]
pub struct CountriesArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Sort order (asc or desc).
    #[arg(long = "sort_order", alias = "sort-order", default_value = "asc")]
    pub sort_order: String,
}

#[derive(Debug, Args)]
pub struct TickerArgs {
    #[command(subcommand)]
    pub command: TickerCommand,
}

#[derive(Debug, Subcommand)]
pub enum TickerCommand {
    /// List tickers.
    Ls(TickerLsArgs),

    /// Historical financials for a ticker.
    Financials(TickerSymbolArgs),

    /// Historical prices for a ticker.
    Prices(TickerSymbolArgs),
}

#[derive(Debug, Args)]
pub struct TickerLsArgs {
    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Debug, Args)]
pub struct TickerSymbolArgs {
    /// Ticker symbol.
    pub ticker: String,

    #[command(flatten)]
    pub page: PageArgs,
}
