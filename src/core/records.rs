use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// One country entry as returned by the countries endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub code: String,
}

impl CountryRecord {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

/// One continent and its countries, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinentRecord {
    pub name: String,
    #[serde(default)]
    pub countries: Vec<CountryRecord>,
}

impl ContinentRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, country_codes: &[&str]) -> Self {
        Self {
            name: name.into(),
            countries: country_codes.iter().copied().map(CountryRecord::new).collect(),
        }
    }
}

/// Raw response envelope of the continents query.
///
/// The wrapped value is untrusted: nothing about its shape is checked until
/// it goes through [`crate::core::to_series`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryResult(Value);

impl QueryResult {
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Builds a well-formed `{ data: { continents: [...] } }` envelope.
    #[must_use]
    pub fn from_continents(continents: &[ContinentRecord]) -> Self {
        Self(json!({ "data": { "continents": continents } }))
    }

    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for QueryResult {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}
