use serde::{Deserialize, Serialize};

/// What catalog loading does with an entry that fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPolicy {
    /// The first rejected entry fails the whole load.
    #[default]
    FailFast,
    /// Rejected entries are logged, skipped and returned in the load report.
    SkipInvalid,
}

/// Catalog construction settings.
///
/// Serializable so hosts can ship it next to their catalog documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogLoadConfig {
    #[serde(default)]
    pub policy: LoadPolicy,
    /// Rejects base specs without a `$schema` url.
    #[serde(default)]
    pub require_schema_url: bool,
}

impl Default for CatalogLoadConfig {
    fn default() -> Self {
        Self {
            policy: LoadPolicy::FailFast,
            require_schema_url: false,
        }
    }
}

impl CatalogLoadConfig {
    #[must_use]
    pub fn with_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_require_schema_url(mut self, require_schema_url: bool) -> Self {
        self.require_schema_url = require_schema_url;
        self
    }
}

/// Per-session editor settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorSessionConfig {
    /// Maximum number of undo steps kept; `0` disables undo.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_history_limit() -> usize {
    100
}

impl Default for EditorSessionConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
        }
    }
}

impl EditorSessionConfig {
    #[must_use]
    pub fn with_history_limit(mut self, history_limit: usize) -> Self {
        self.history_limit = history_limit;
        self
    }
}
