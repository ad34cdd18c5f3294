use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

/// Paired category labels and counts driving the bar chart.
///
/// Fields stay private so `labels.len() == values.len()` holds for every
/// instance; deserialized values are checked through `TryFrom`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawChartSeries")]
pub struct ChartSeries {
    labels: Vec<String>,
    values: Vec<u64>,
}

#[derive(Deserialize)]
struct RawChartSeries {
    labels: Vec<String>,
    values: Vec<u64>,
}

impl TryFrom<RawChartSeries> for ChartSeries {
    type Error = DashboardError;

    fn try_from(raw: RawChartSeries) -> DashboardResult<Self> {
        Self::from_parts(raw.labels, raw.values)
    }
}

impl ChartSeries {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            labels: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn from_parts(labels: Vec<String>, values: Vec<u64>) -> DashboardResult<Self> {
        if labels.len() != values.len() {
            return Err(DashboardError::InvalidData(format!(
                "series length mismatch: {} labels, {} values",
                labels.len(),
                values.len()
            )));
        }
        Ok(Self { labels, values })
    }

    pub fn push(&mut self, label: impl Into<String>, value: u64) {
        self.labels.push(label.into());
        self.values.push(value);
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    pub fn clear(&mut self) {
        self.labels.clear();
        self.values.clear();
    }
}
