//! Outbound continents query.
//!
//! The query text is fixed. [`ContinentSource`] is the seam the widget
//! consumes; [`HttpContinentFetcher`] is the real GraphQL-over-HTTP client.

mod http;

use std::future::Future;

use serde::Serialize;

use crate::core::QueryResult;
use crate::error::FetchError;

pub use http::HttpContinentFetcher;

/// Public countries GraphQL endpoint queried by default.
pub const COUNTRIES_ENDPOINT: &str = "https://countries.trevorblades.com/";

/// The one GraphQL document this widget ever sends.
pub const CONTINENTS_QUERY: &str = "query { continents { name countries { code } } }";

/// JSON body of a GraphQL POST request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
}

impl GraphQlRequest<'static> {
    #[must_use]
    pub const fn continents() -> Self {
        Self {
            query: CONTINENTS_QUERY,
        }
    }
}

/// Source of raw continents query results.
///
/// Implementations issue one request per call; concurrent calls are not
/// deduplicated. No retries and no shape validation happen here.
pub trait ContinentSource {
    fn fetch_continents(&self) -> impl Future<Output = Result<QueryResult, FetchError>>;
}
