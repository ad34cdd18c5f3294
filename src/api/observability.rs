use tracing::error;

use crate::error::DashboardError;

/// Receives failures swallowed at the widget boundary.
///
/// Each failed mount is recorded exactly once. Sinks observe; they cannot
/// change widget state.
pub trait ErrorSink {
    fn record(&mut self, error: &DashboardError);
}

/// Default sink: one `tracing` error event per failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingErrorSink;

impl ErrorSink for TracingErrorSink {
    fn record(&mut self, err: &DashboardError) {
        error!(error = %err, "continents data load failed");
    }
}

/// Sink keeping rendered error messages in memory.
#[derive(Debug, Default, Clone)]
pub struct RecordingErrorSink {
    pub errors: Vec<String>,
}

impl ErrorSink for RecordingErrorSink {
    fn record(&mut self, err: &DashboardError) {
        self.errors.push(err.to_string());
    }
}
