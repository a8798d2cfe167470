use thiserror::Error;

pub type SpecResult<T> = Result<T, SpecError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    #[error("invalid catalog entry `{id}`: {reason}")]
    InvalidCatalogEntry { id: String, reason: String },

    #[error("chart with id `{id}` is already registered")]
    DuplicateId { id: String },

    #[error("chart with id `{id}` not found")]
    NotFound { id: String },

    #[error("working specification invariant violated: {0}")]
    InvariantViolation(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// A single structural problem found while validating a chart specification.
///
/// `path` is a dotted location inside the Vega-Lite document, e.g.
/// `encoding.y.field`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{path}` {message}")]
pub struct SpecViolation {
    pub path: String,
    pub message: String,
}

impl SpecViolation {
    #[must_use]
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn into_catalog_error(self, id: &str) -> SpecError {
        SpecError::InvalidCatalogEntry {
            id: id.to_owned(),
            reason: self.to_string(),
        }
    }

    #[must_use]
    pub fn into_invariant_error(self) -> SpecError {
        SpecError::InvariantViolation(self.to_string())
    }
}
