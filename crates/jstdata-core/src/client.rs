//! Data access client for the Jefferson Street API.
//!
//! Every operation is a single authenticated GET. Successful responses are
//! expected to wrap their rows in a `records` array:
//!
//! ```text
//! { "records": [ {...}, {...} ], "limit": 100, "offset": 0 }
//! ```
//!
//! # Error mapping
//!
//! | Condition | Error |
//! |-----------|-------|
//! | no/empty API key at construction | [`ClientError::CredentialMissing`] |
//! | heartbeat not `ok` (opt-in) | [`ClientError::InvalidCredential`] |
//! | non-2xx status | [`ClientError::InvalidInput`] |
//! | no response at all | [`ClientError::Transport`] |
//! | body is not a `records` envelope | [`ClientError::MalformedResponse`] |
//! | ticker/financials/prices/concept | [`ClientError::NotImplemented`] |

use std::env;
use std::sync::Arc;

use serde::Deserialize;

use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient, API_KEY_PARAM};
use crate::request::{
    CountriesRequest, Endpoint, MetricsRequest, ObservationsRequest, Page, QueryPairs,
    SeriesRequest,
};
use crate::{ClientError, Record, RecordSet};

pub const DEFAULT_BASE_URL: &str = "https://api.jeffersonst.io";
pub const API_KEY_ENV: &str = "JEFFERSON_STREET_API_KEY";
pub const SERVER_ENV: &str = "JEFFERSON_STREET_SERVER";

/// Connection settings for [`Client`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    /// Call `heartbeat` during [`Client::connect`] and reject a non-`ok` status.
    pub verify_credential: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: String::from(DEFAULT_BASE_URL),
            verify_credential: false,
        }
    }
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Read `JEFFERSON_STREET_API_KEY` and `JEFFERSON_STREET_SERVER`.
    ///
    /// A missing key is not an error here; [`Client::new`] reports it.
    pub fn from_env() -> Self {
        let api_key = env::var(API_KEY_ENV).ok();
        let base_url = env::var(SERVER_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| String::from(DEFAULT_BASE_URL));

        Self {
            api_key,
            base_url,
            verify_credential: false,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_credential_check(mut self, verify_credential: bool) -> Self {
        self.verify_credential = verify_credential;
        self
    }
}

#[derive(Deserialize)]
struct Envelope {
    records: Vec<Record>,
}

#[derive(Deserialize)]
struct Heartbeat {
    status: Option<String>,
}

/// Façade over the provider's REST endpoints.
#[derive(Clone)]
pub struct Client {
    api_key: String,
    base_url: String,
    verify_credential: bool,
    http_client: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("verify_credential", &self.verify_credential)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Build a client without touching the network.
    pub fn new(config: ClientConfig, http_client: Arc<dyn HttpClient>) -> Result<Self, ClientError> {
        let api_key = config
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(ClientError::CredentialMissing)?;

        Ok(Self {
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            verify_credential: config.verify_credential,
            http_client,
        })
    }

    /// Build a client and, when the config asks for it, verify the key.
    pub async fn connect(
        config: ClientConfig,
        http_client: Arc<dyn HttpClient>,
    ) -> Result<Self, ClientError> {
        let client = Self::new(config, http_client)?;
        if client.verify_credential {
            client.heartbeat().await?;
        }
        Ok(client)
    }

    /// [`Client::connect`] over the reqwest transport.
    pub async fn connect_with_reqwest(config: ClientConfig) -> Result<Self, ClientError> {
        Self::connect(config, Arc::new(ReqwestHttpClient::new())).await
    }

    /// Liveness and credential check against `heartbeat`.
    pub async fn heartbeat(&self) -> Result<(), ClientError> {
        let endpoint = Endpoint::Heartbeat;
        let body = match self.get(endpoint, Vec::new()).await {
            Ok(body) => body,
            Err(ClientError::InvalidInput {
                status: status @ (401 | 403),
                ..
            }) => {
                return Err(ClientError::InvalidCredential {
                    status: format!("HTTP {status}"),
                })
            }
            Err(error) => return Err(error),
        };

        let heartbeat: Heartbeat =
            serde_json::from_str(&body).map_err(|e| ClientError::MalformedResponse {
                endpoint: endpoint.as_str(),
                reason: e.to_string(),
            })?;

        match heartbeat.status.as_deref() {
            Some("ok") => Ok(()),
            Some(other) => Err(ClientError::InvalidCredential {
                status: other.to_owned(),
            }),
            None => Err(ClientError::MalformedResponse {
                endpoint: endpoint.as_str(),
                reason: String::from("missing 'status' field"),
            }),
        }
    }

    /// Available metrics, ordered server-side.
    pub async fn metrics(&self, request: &MetricsRequest) -> Result<RecordSet, ClientError> {
        self.fetch_records(Endpoint::Metric, request.query_pairs(), Some(request.page))
            .await
    }

    /// A single metric by slug.
    pub async fn metric(&self, slug: &str) -> Result<RecordSet, ClientError> {
        self.fetch_records(Endpoint::Metric, vec![("metric", slug.to_owned())], None)
            .await
    }

    /// Dimension values (geography, industry, ...) that a metric's series span.
    pub async fn metric_dimensions(&self, slug: &str) -> Result<RecordSet, ClientError> {
        self.fetch_records(
            Endpoint::MetricDimensions,
            vec![("metric", slug.to_owned())],
            None,
        )
        .await
    }

    pub async fn metric_series(&self, request: &SeriesRequest) -> Result<RecordSet, ClientError> {
        self.fetch_records(
            Endpoint::MetricSeries,
            request.query_pairs(),
            Some(request.page),
        )
        .await
    }

    pub async fn observations(
        &self,
        request: &ObservationsRequest,
    ) -> Result<RecordSet, ClientError> {
        self.fetch_records(
            Endpoint::MetricObservations,
            request.query_pairs(),
            Some(request.page),
        )
        .await
    }

    pub async fn countries(&self, request: &CountriesRequest) -> Result<RecordSet, ClientError> {
        self.fetch_records(Endpoint::Countries, request.query_pairs(), Some(request.page))
            .await
    }

    /// Not available: the provider's ticker endpoint is not published.
    pub async fn tickers(&self, page: Page) -> Result<RecordSet, ClientError> {
        log::warn!(
            "tickers requested (limit={}, offset={}) but not implemented",
            page.limit,
            page.offset
        );
        Err(ClientError::NotImplemented {
            operation: "tickers",
        })
    }

    /// Not available: the provider's financials endpoint is not published.
    pub async fn financials(&self, ticker: &str, page: Page) -> Result<RecordSet, ClientError> {
        log::warn!(
            "financials for '{ticker}' requested (limit={}, offset={}) but not implemented",
            page.limit,
            page.offset
        );
        Err(ClientError::NotImplemented {
            operation: "financials",
        })
    }

    /// Not available: the provider's price endpoint is not published.
    pub async fn prices(&self, ticker: &str, page: Page) -> Result<RecordSet, ClientError> {
        log::warn!(
            "prices for '{ticker}' requested (limit={}, offset={}) but not implemented",
            page.limit,
            page.offset
        );
        Err(ClientError::NotImplemented { operation: "prices" })
    }

    /// Not available: concept search has no published request shape.
    pub async fn ticker_series_by_concept(
        &self,
        ticker: &str,
        concept: &str,
    ) -> Result<RecordSet, ClientError> {
        log::warn!("concept '{concept}' for '{ticker}' requested but not implemented");
        Err(ClientError::NotImplemented {
            operation: "ticker_series_by_concept",
        })
    }

    async fn fetch_records(
        &self,
        endpoint: Endpoint,
        pairs: QueryPairs,
        page: Option<Page>,
    ) -> Result<RecordSet, ClientError> {
        let body = self.get(endpoint, pairs).await?;
        let envelope: Envelope =
            serde_json::from_str(&body).map_err(|e| ClientError::MalformedResponse {
                endpoint: endpoint.as_str(),
                reason: e.to_string(),
            })?;

        log::debug!("{endpoint}: {} record(s)", envelope.records.len());

        let records = RecordSet::new(envelope.records);
        Ok(match page {
            Some(page) => records.with_page(page.limit, page.offset),
            None => records,
        })
    }

    /// One authenticated GET; returns the body of a 2xx response.
    async fn get(&self, endpoint: Endpoint, pairs: QueryPairs) -> Result<String, ClientError> {
        let mut request = HttpRequest::get(format!("{}/{}", self.base_url, endpoint.as_str()))
            .with_header("accept", "application/json");
        for (name, value) in pairs {
            request = request.with_query(name, value);
        }
        request = request.with_query(API_KEY_PARAM, self.api_key.as_str());

        log::debug!("GET {}", request.redacted_url());

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|source| ClientError::Transport {
                endpoint: endpoint.as_str(),
                source,
            })?;

        if !response.is_success() {
            log::debug!("{endpoint}: HTTP {}", response.status);
            return Err(ClientError::InvalidInput {
                endpoint: endpoint.as_str(),
                status: response.status,
                body: response.body,
            });
        }

        Ok(response.body)
    }
}
