mod config;
mod host_context;
mod observability;
mod state;
mod widget;

pub use config::DashboardConfig;
pub use host_context::HostContext;
pub use observability::{ErrorSink, RecordingErrorSink, TracingErrorSink};
pub use state::{FetchOutcome, WidgetSnapshot, WidgetState};
pub use widget::DashboardWidget;
