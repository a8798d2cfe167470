use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::core::types::ColumnType;
use crate::error::{SpecError, SpecResult};

/// Summary statistics of a column.
///
/// Profilers omit members they could not compute and may report dates or
/// labels for non-numeric columns; any member that is not a number decodes
/// as `None` instead of failing the profile.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ColumnStats {
    #[serde(default, deserialize_with = "number_or_none", skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, deserialize_with = "number_or_none", skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, deserialize_with = "number_or_none", skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
    #[serde(default, deserialize_with = "number_or_none", skip_serializing_if = "Option::is_none")]
    pub median: Option<f64>,
}

impl ColumnStats {
    #[must_use]
    pub fn new(min: f64, max: f64, mean: f64, median: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            mean: Some(mean),
            median: Some(median),
        }
    }
}

fn number_or_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_f64())
}

/// Profiler output for one dataset column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMetadata {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_values: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing_values: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<ColumnStats>,
}

impl ColumnMetadata {
    #[must_use]
    pub fn new(name: impl Into<String>, column_type: impl Into<ColumnType>) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
            unique_values: None,
            missing_values: None,
            stats: None,
        }
    }

    #[must_use]
    pub fn with_unique_values(mut self, unique_values: u64) -> Self {
        self.unique_values = Some(unique_values);
        self
    }

    #[must_use]
    pub fn with_missing_values(mut self, missing_values: u64) -> Self {
        self.missing_values = Some(missing_values);
        self
    }

    #[must_use]
    pub fn with_stats(mut self, stats: ColumnStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Statistics, only when the column is quantitative.
    #[must_use]
    pub fn quantitative_stats(&self) -> Option<ColumnStats> {
        match self.column_type {
            ColumnType::Known(crate::core::SemanticType::Quantitative) => self.stats,
            _ => None,
        }
    }
}

/// Row count and column metadata for one loaded dataset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetProfile {
    pub row_count: u64,
    pub columns: Vec<ColumnMetadata>,
}

impl DatasetProfile {
    /// Builds a profile, rejecting empty or duplicated column names.
    pub fn new(row_count: u64, columns: Vec<ColumnMetadata>) -> SpecResult<Self> {
        let profile = Self { row_count, columns };
        profile.validate()?;
        Ok(profile)
    }

    /// Decodes the profiler's JSON payload and validates it.
    pub fn from_json_str(input: &str) -> SpecResult<Self> {
        let profile: Self = serde_json::from_str(input).map_err(|e| {
            SpecError::InvalidData(format!("failed to parse dataset profile json: {e}"))
        })?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> SpecResult<()> {
        for (index, column) in self.columns.iter().enumerate() {
            if column.name.is_empty() {
                return Err(SpecError::InvalidData(format!(
                    "dataset column #{index} has an empty name"
                )));
            }
            if self.columns[..index]
                .iter()
                .any(|previous| previous.name == column.name)
            {
                return Err(SpecError::InvalidData(format!(
                    "dataset column `{}` appears more than once",
                    column.name
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&ColumnMetadata> {
        self.columns.iter().find(|column| column.name == name)
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }
}
