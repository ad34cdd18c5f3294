use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::ChartSeries;

use super::HostContext;

/// Lifecycle state of one widget mount.
///
/// `Failed` renders exactly like `Empty`: both carry an empty series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WidgetState {
    #[default]
    Empty,
    Loading,
    Ready,
    Failed,
}

impl WidgetState {
    /// Whether the state is final for the current mount.
    #[must_use]
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Ready | Self::Failed)
    }
}

/// How a pending fetch settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchOutcome {
    Ready { entries: usize },
    Failed,
    /// The mount that started the fetch was torn down; nothing was applied.
    Discarded,
}

/// Serializable state snapshot used by regression tests and debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetSnapshot {
    pub state: WidgetState,
    pub series: ChartSeries,
    pub context: HostContext,
    pub mounted: bool,
    pub mount_count: u64,
    pub last_transition_at: Option<DateTime<Utc>>,
}
