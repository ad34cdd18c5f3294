//! graphql-dashboard: headless countries-per-continent dashboard widget.
//!
//! The crate keeps a strict split between the outbound GraphQL call
//! (`fetch`), the pure payload-to-series transformation (`core`), the
//! mount/unmount lifecycle (`api`), and the renderable description handed to
//! whatever drawing surface the host provides (`render`).

pub mod api;
pub mod core;
pub mod error;
pub mod fetch;
pub mod render;
pub mod telemetry;

pub use api::{DashboardConfig, DashboardWidget, HostContext};
pub use error::{DashboardError, DashboardResult, FetchError, TransformError};
