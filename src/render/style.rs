use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};
use crate::render::Color;

/// Legend placement relative to the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

/// Fixed presentation settings for the countries bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartStyle {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_dataset_label")]
    pub dataset_label: String,
    #[serde(default = "default_color")]
    pub color: Color,
    #[serde(default = "default_height_px")]
    pub height_px: u32,
    #[serde(default)]
    pub legend_position: LegendPosition,
    #[serde(default = "default_true")]
    pub responsive: bool,
    #[serde(default = "default_true")]
    pub y_begin_at_zero: bool,
}

impl Default for BarChartStyle {
    fn default() -> Self {
        Self {
            title: default_title(),
            dataset_label: default_dataset_label(),
            color: default_color(),
            height_px: default_height_px(),
            legend_position: LegendPosition::default(),
            responsive: true,
            y_begin_at_zero: true,
        }
    }
}

impl BarChartStyle {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_dataset_label(mut self, label: impl Into<String>) -> Self {
        self.dataset_label = label.into();
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_height_px(mut self, height_px: u32) -> Self {
        self.height_px = height_px;
        self
    }

    #[must_use]
    pub fn with_legend_position(mut self, position: LegendPosition) -> Self {
        self.legend_position = position;
        self
    }

    pub fn validate(&self) -> DashboardResult<()> {
        if self.height_px == 0 {
            return Err(DashboardError::InvalidConfig(
                "chart height must be > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

fn default_title() -> String {
    "Countries per Continent".to_owned()
}

fn default_dataset_label() -> String {
    "Number of Countries".to_owned()
}

fn default_color() -> Color {
    // #0078d4
    Color::rgb(0.0, 120.0 / 255.0, 212.0 / 255.0)
}

fn default_height_px() -> u32 {
    400
}

fn default_true() -> bool {
    true
}
