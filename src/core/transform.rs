use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::core::{ChartSeries, QueryResult};
use crate::error::TransformError;

/// Converts a raw continents query result into a chart series.
///
/// For each element of `data.continents`, in source order, the label is the
/// continent `name` and the value is the number of entries in `countries`.
/// Country entries are counted, never inspected.
///
/// Malformed payloads are rejected with the JSON path of the first offending
/// node. A GraphQL `errors` array without usable `data` is reported as
/// [`TransformError::RemoteErrors`].
pub fn to_series(result: &QueryResult) -> Result<ChartSeries, TransformError> {
    let root = expect_object(result.as_value(), "$")?;

    let data = match root.get("data") {
        Some(Value::Null) | None => {
            if let Some(messages) = remote_error_messages(root) {
                return Err(TransformError::RemoteErrors(messages));
            }
            return Err(TransformError::MissingField {
                path: "data".to_owned(),
            });
        }
        Some(value) => expect_object(value, "data")?,
    };

    let continents = data
        .get("continents")
        .ok_or_else(|| TransformError::MissingField {
            path: "data.continents".to_owned(),
        })?
        .as_array()
        .ok_or_else(|| TransformError::WrongType {
            path: "data.continents".to_owned(),
            expected: "array",
        })?;

    let mut series = ChartSeries::with_capacity(continents.len());
    for (index, continent) in continents.iter().enumerate() {
        let path = format!("data.continents[{index}]");
        let continent = expect_object(continent, &path)?;

        let name = continent
            .get("name")
            .ok_or_else(|| TransformError::MissingField {
                path: format!("{path}.name"),
            })?
            .as_str()
            .ok_or_else(|| TransformError::WrongType {
                path: format!("{path}.name"),
                expected: "string",
            })?;

        let countries = continent
            .get("countries")
            .ok_or_else(|| TransformError::MissingField {
                path: format!("{path}.countries"),
            })?
            .as_array()
            .ok_or_else(|| TransformError::WrongType {
                path: format!("{path}.countries"),
                expected: "array",
            })?;

        trace!(continent = name, countries = countries.len(), "series entry");
        series.push(name, countries.len() as u64);
    }

    debug!(entries = series.len(), "continents payload transformed");
    Ok(series)
}

fn expect_object<'a>(
    value: &'a Value,
    path: &str,
) -> Result<&'a Map<String, Value>, TransformError> {
    value.as_object().ok_or_else(|| TransformError::NotAnObject {
        path: path.to_owned(),
    })
}

fn remote_error_messages(root: &Map<String, Value>) -> Option<Vec<String>> {
    let errors = root.get("errors")?.as_array()?;
    if errors.is_empty() {
        return None;
    }
    Some(
        errors
            .iter()
            .map(|error| match error.get("message").and_then(Value::as_str) {
                Some(message) => message.to_owned(),
                None => error.to_string(),
            })
            .collect(),
    )
}
