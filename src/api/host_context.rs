use serde::{Deserialize, Serialize};

/// Read-only properties supplied by the host shell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostContext {
    #[serde(default)]
    pub has_embedding_context: bool,
    #[serde(default)]
    pub user_display_name: String,
}

impl HostContext {
    #[must_use]
    pub fn new(user_display_name: impl Into<String>) -> Self {
        Self {
            has_embedding_context: false,
            user_display_name: user_display_name.into(),
        }
    }

    #[must_use]
    pub fn with_embedding_context(mut self, embedded: bool) -> Self {
        self.has_embedding_context = embedded;
        self
    }
}
