use thiserror::Error;

pub type DashboardResult<T> = Result<T, DashboardError>;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("continents fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("continents payload rejected: {0}")]
    Transform(#[from] TransformError),

    #[error("widget is already mounted")]
    AlreadyMounted,

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// Failure of the outbound GraphQL call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("invalid endpoint `{0}`")]
    InvalidEndpoint(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected http status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response body is not json: {0}")]
    Decode(String),
}

/// Structural problem found while turning a raw query result into a series.
///
/// `path` uses dotted JSON notation such as `data.continents[2].countries`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("`{path}` is not an object")]
    NotAnObject { path: String },

    #[error("`{path}` is missing")]
    MissingField { path: String },

    #[error("`{path}` has wrong type, expected {expected}")]
    WrongType {
        path: String,
        expected: &'static str,
    },

    #[error("remote reported errors: {}", .0.join("; "))]
    RemoteErrors(Vec<String>),
}
