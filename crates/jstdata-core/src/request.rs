//! Request parameter sets for each client operation.
//!
//! Values are forwarded verbatim: there is no client-side range check on
//! `limit`/`offset` and no whitelist for `order_by`/`sort_order`.

use std::fmt::{Display, Formatter};

use crate::{normalize_date, ValidationError};

/// Provider endpoints, relative to the base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Heartbeat,
    Metric,
    MetricDimensions,
    MetricSeries,
    MetricObservations,
    Countries,
}

impl Endpoint {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Heartbeat => "heartbeat",
            Self::Metric => "metric",
            Self::MetricDimensions => "metric/dimensions",
            Self::MetricSeries => "metric/series",
            Self::MetricObservations => "metric/observations",
            Self::Countries => "reference/geo/countries",
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type QueryPairs = Vec<(&'static str, String)>;

/// `limit` / `offset` pair echoed back on the returned record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: u32,
    pub offset: u32,
}

impl Page {
    pub const DEFAULT_LIMIT: u32 = 10_000;

    pub const fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }

    fn push_pairs(self, pairs: &mut QueryPairs) {
        pairs.push(("limit", self.limit.to_string()));
        pairs.push(("offset", self.offset.to_string()));
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIMIT, 0)
    }
}

/// Server-side ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ordering {
    pub order_by: String,
    pub sort_order: String,
}

impl Ordering {
    pub fn new(order_by: impl Into<String>, sort_order: impl Into<String>) -> Self {
        Self {
            order_by: order_by.into(),
            sort_order: sort_order.into(),
        }
    }

    fn push_pairs(&self, pairs: &mut QueryPairs) {
        pairs.push(("order_by", self.order_by.clone()));
        pairs.push(("sort_order", self.sort_order.clone()));
    }
}

/// Parameters for listing metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsRequest {
    pub page: Page,
    pub ordering: Ordering,
}

impl Default for MetricsRequest {
    fn default() -> Self {
        Self {
            page: Page::default(),
            ordering: Ordering::new("last_updated", "desc"),
        }
    }
}

impl MetricsRequest {
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = Vec::with_capacity(4);
        self.page.push_pairs(&mut pairs);
        self.ordering.push_pairs(&mut pairs);
        pairs
    }
}

/// Parameters for listing the series of one metric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesRequest {
    pub metric: String,
    pub page: Page,
    pub ordering: Ordering,
}

impl SeriesRequest {
    pub fn new(metric: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            page: Page::default(),
            ordering: Ordering::new("last_updated", "asc"),
        }
    }

    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = vec![("metric", self.metric.clone())];
        self.page.push_pairs(&mut pairs);
        self.ordering.push_pairs(&mut pairs);
        pairs
    }
}

/// Parameters for fetching observations of one or more series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservationsRequest {
    pub series: Vec<String>,
    pub observation_type: String,
    pub page: Page,
    pub ordering: Ordering,
    pub start: Option<String>,
    pub end: Option<String>,
}

impl ObservationsRequest {
    pub fn new<S: Into<String>>(series: impl IntoIterator<Item = S>) -> Self {
        Self {
            series: series.into_iter().map(Into::into).collect(),
            observation_type: String::from("latest"),
            page: Page::default(),
            ordering: Ordering::new("id", "asc"),
            start: None,
            end: None,
        }
    }

    /// Set the start period, normalizing date shorthand such as `2024` or `2024-05`.
    pub fn with_start(mut self, start: &str) -> Result<Self, ValidationError> {
        self.start = Some(normalize_date(start)?);
        Ok(self)
    }

    /// Set the end period, normalizing date shorthand such as `2024` or `2024-05`.
    pub fn with_end(mut self, end: &str) -> Result<Self, ValidationError> {
        self.end = Some(normalize_date(end)?);
        Ok(self)
    }

    /// Each series id becomes its own repeated `series` pair.
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs: QueryPairs = self
            .series
            .iter()
            .map(|id| ("series", id.clone()))
            .collect();
        pairs.push(("observation_type", self.observation_type.clone()));
        self.page.push_pairs(&mut pairs);
        self.ordering.push_pairs(&mut pairs);
        if let Some(start) = &self.start {
            pairs.push(("start", start.clone()));
        }
        if let Some(end) = &self.end {
            pairs.push(("end", end.clone()));
        }
        pairs
    }
}

/// Parameters for the country reference list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountriesRequest {
    pub page: Page,
    pub sort_order: String,
}

impl Default for CountriesRequest {
    fn default() -> Self {
        Self {
            page: Page::default(),
            sort_order: String::from("asc"),
        }
    }
}

impl CountriesRequest {
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = Vec::with_capacity(3);
        self.page.push_pairs(&mut pairs);
        pairs.push(("sort_order", self.sort_order.clone()));
        pairs
    }
}
