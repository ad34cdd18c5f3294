use serde::{Deserialize, Serialize};

use crate::api::HostContext;
use crate::core::ChartSeries;
use crate::error::{DashboardError, DashboardResult};
use crate::render::{BarChartStyle, Color, LegendPosition, escape_html};

/// Visual variant of the widget surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceVariant {
    Standard,
    /// Hosted inside an embedding context (e.g. a chat/teams tab).
    Embedded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarDataset {
    pub label: String,
    pub data: Vec<u64>,
    #[serde(rename = "backgroundColor")]
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<BarDataset>,
}

/// Display options, nested the way chart.js reads them
/// (`plugins.legend.position`, `scales.y.beginAtZero`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub plugins: ChartPlugins,
    pub scales: ChartScales,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPlugins {
    pub legend: LegendOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendOptions {
    pub position: LegendPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartScales {
    pub y: AxisOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    pub begin_at_zero: bool,
}

impl ChartOptions {
    #[must_use]
    pub fn from_style(style: &BarChartStyle) -> Self {
        Self {
            responsive: style.responsive,
            plugins: ChartPlugins {
                legend: LegendOptions {
                    position: style.legend_position,
                },
            },
            scales: ChartScales {
                y: AxisOptions {
                    begin_at_zero: style.y_begin_at_zero,
                },
            },
        }
    }

    #[must_use]
    pub fn legend_position(&self) -> LegendPosition {
        self.plugins.legend.position
    }

    #[must_use]
    pub fn y_begin_at_zero(&self) -> bool {
        self.scales.y.begin_at_zero
    }
}

/// Backend-agnostic description of one widget draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardFrame {
    pub surface: SurfaceVariant,
    /// Already escaped for HTML output.
    pub greeting: String,
    pub chart_title: String,
    pub height_px: u32,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl DashboardFrame {
    /// Builds the frame for the given series snapshot and host context.
    ///
    /// Pure: the same inputs always produce the same frame.
    #[must_use]
    pub fn build(series: &ChartSeries, context: &HostContext, style: &BarChartStyle) -> Self {
        let surface = if context.has_embedding_context {
            SurfaceVariant::Embedded
        } else {
            SurfaceVariant::Standard
        };

        Self {
            surface,
            greeting: format!("Welcome, {}!", escape_html(&context.user_display_name)),
            chart_title: style.title.clone(),
            height_px: style.height_px,
            data: ChartData {
                labels: series.labels().to_vec(),
                datasets: vec![BarDataset {
                    label: style.dataset_label.clone(),
                    data: series.values().to_vec(),
                    color: style.color,
                }],
            },
            options: ChartOptions::from_style(style),
        }
    }

    pub fn validate(&self) -> DashboardResult<()> {
        if self.height_px == 0 {
            return Err(DashboardError::InvalidData(
                "frame height must be > 0".to_owned(),
            ));
        }
        for dataset in &self.data.datasets {
            if dataset.data.len() != self.data.labels.len() {
                return Err(DashboardError::InvalidData(format!(
                    "dataset `{}` has {} values for {} labels",
                    dataset.label,
                    dataset.data.len(),
                    self.data.labels.len()
                )));
            }
            dataset.color.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.labels.is_empty()
    }
}
