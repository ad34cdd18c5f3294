mod escape;
mod frame;
mod json_contract;
mod null_renderer;
mod primitives;
mod style;

pub use escape::escape_html;
pub use frame::{
    AxisOptions, BarDataset, ChartData, ChartOptions, ChartPlugins, ChartScales, DashboardFrame,
    LegendOptions, SurfaceVariant,
};
pub use json_contract::{DASHBOARD_FRAME_JSON_SCHEMA_V1, DashboardFrameJsonContractV1};
pub use null_renderer::NullRenderer;
pub use primitives::Color;
pub use style::{BarChartStyle, LegendPosition};

use crate::error::DashboardResult;

/// Contract implemented by any drawing surface.
///
/// Backends receive a fully materialized `DashboardFrame` so drawing code
/// stays isolated from fetching and lifecycle logic. Frames are snapshots;
/// backends never feed anything back into the widget.
pub trait Renderer {
    fn render(&mut self, frame: &DashboardFrame) -> DashboardResult<()>;
}
