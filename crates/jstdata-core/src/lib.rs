//! # jstdata core
//!
//! Client library for the Jefferson Street economic data API.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Authenticated data access façade and configuration |
//! | [`date`] | `--start` / `--end` date shorthand normalization |
//! | [`error`] | Validation, client and top-level error types |
//! | [`format`] | JSON / CSV / pretty-table rendering |
//! | [`http_client`] | Transport abstraction with a reqwest implementation |
//! | [`record`] | Ordered dynamic records and record sets |
//! | [`request`] | Endpoints and per-operation query parameters |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use jstdata_core::{render, Client, ClientConfig, MetricsRequest, OutputFormat};
//!
//! # async fn run() -> Result<(), jstdata_core::CoreError> {
//! let client = Client::connect_with_reqwest(ClientConfig::from_env()).await?;
//! let metrics = client.metrics(&MetricsRequest::default()).await?;
//! println!("{}", render(metrics.as_ref(), OutputFormat::Pretty)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────┐
//! │ Client (façade) │────▶│ HttpClient       │
//! └────────┬────────┘     │ (reqwest/custom) │
//!          │              └──────────────────┘
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ RecordSet       │────▶│ format::render   │──▶ String
//! └─────────────────┘     └──────────────────┘
//! ```
//!
//! The library never reads the environment on its own or prints anything;
//! [`ClientConfig::from_env`] is an explicit call made by the binary.

pub mod client;
pub mod date;
pub mod error;
pub mod format;
pub mod http_client;
pub mod record;
pub mod request;

pub use client::{Client, ClientConfig, API_KEY_ENV, DEFAULT_BASE_URL, SERVER_ENV};

pub use date::{normalize_date, DateSpec};

pub use error::{ClientError, CoreError, ValidationError};

pub use format::{render, OutputFormat};

pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};

pub use record::{Record, RecordSet, Value};

pub use request::{
    CountriesRequest, Endpoint, MetricsRequest, ObservationsRequest, Ordering, Page, SeriesRequest,
};
