use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};
use crate::fetch::COUNTRIES_ENDPOINT;
use crate::render::BarChartStyle;

/// Widget bootstrap configuration.
///
/// This type is serializable so hosts can persist/load the widget setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// `None` keeps the request bounded only by the transport.
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
    #[serde(default)]
    pub chart: BarChartStyle,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout_ms: None,
            chart: BarChartStyle::default(),
        }
    }
}

impl DashboardConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Points the fetcher at another GraphQL endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn with_request_timeout_ms(mut self, timeout_ms: Option<u64>) -> Self {
        self.request_timeout_ms = timeout_ms;
        self
    }

    #[must_use]
    pub fn with_chart_style(mut self, style: BarChartStyle) -> Self {
        self.chart = style;
        self
    }

    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }

    pub fn validate(&self) -> DashboardResult<()> {
        if self.endpoint.trim().is_empty() {
            return Err(DashboardError::InvalidConfig(
                "endpoint must not be empty".to_owned(),
            ));
        }
        if self.request_timeout_ms == Some(0) {
            return Err(DashboardError::InvalidConfig(
                "request timeout must be > 0 when set".to_owned(),
            ));
        }
        self.chart.validate()
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> DashboardResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DashboardError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON. Missing fields take their defaults.
    pub fn from_json_str(input: &str) -> DashboardResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| DashboardError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

fn default_endpoint() -> String {
    COUNTRIES_ENDPOINT.to_owned()
}
