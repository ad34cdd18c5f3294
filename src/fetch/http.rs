use std::time::Duration;

use reqwest::{Client, Url};
use tracing::{debug, trace};

use crate::api::DashboardConfig;
use crate::core::QueryResult;
use crate::error::{DashboardResult, FetchError};

use super::{ContinentSource, GraphQlRequest};

/// GraphQL-over-HTTP client for the continents query.
#[derive(Debug, Clone)]
pub struct HttpContinentFetcher {
    http: Client,
    endpoint: Url,
}

impl HttpContinentFetcher {
    /// Creates a fetcher posting to `endpoint`.
    ///
    /// `timeout` of `None` leaves the request bounded only by the transport.
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| FetchError::InvalidEndpoint(format!("{endpoint}: {e}")))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(FetchError::InvalidEndpoint(format!(
                "{endpoint}: scheme must be http or https"
            )));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| FetchError::Transport(format!("http client init: {e}")))?;

        Ok(Self { http, endpoint })
    }

    /// Creates a fetcher from validated dashboard config.
    pub fn from_config(config: &DashboardConfig) -> DashboardResult<Self> {
        config.validate()?;
        Ok(Self::new(&config.endpoint, config.request_timeout())?)
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl ContinentSource for HttpContinentFetcher {
    async fn fetch_continents(&self) -> Result<QueryResult, FetchError> {
        debug!(endpoint = %self.endpoint, "posting continents query");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&GraphQlRequest::continents())
            .send()
            .await
            .map_err(|e| FetchError::Transport(format!("{}: {e}", self.endpoint)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(format!("reading body: {e}")))?;
        trace!(
            status = status.as_u16(),
            len = bytes.len(),
            "continents response received"
        );

        let value: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(QueryResult::from_value(value))
    }
}
