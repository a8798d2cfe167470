use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::ChartSpec;
use crate::error::{SpecError, SpecResult, SpecViolation};

use super::CatalogLoadConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartCategory {
    Basic,
    Comparison,
    Distribution,
    Relationship,
    Composition,
    Temporal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Beginner,
    Intermediate,
    Advanced,
}

/// Minimum shape a dataset needs for a chart to be usable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataRequirements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_data_points: Option<u64>,
    #[serde(default)]
    pub required_fields: Vec<String>,
}

impl DataRequirements {
    #[must_use]
    pub fn fields<I, S>(required_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            min_data_points: None,
            required_fields: required_fields.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn with_min_data_points(mut self, min_data_points: u64) -> Self {
        self.min_data_points = Some(min_data_points);
        self
    }
}

/// Catalog entry: display metadata, data requirements and the base spec an
/// editor session starts from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDefinition {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: ChartCategory,
    pub complexity: Complexity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_requirements: Option<DataRequirements>,
    pub base_spec: ChartSpec,
}

impl ChartDefinition {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: ChartCategory,
        complexity: Complexity,
        base_spec: ChartSpec,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category,
            complexity,
            data_requirements: None,
            base_spec,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_data_requirements(mut self, requirements: DataRequirements) -> Self {
        self.data_requirements = Some(requirements);
        self
    }

    #[must_use]
    pub fn required_fields(&self) -> &[String] {
        self.data_requirements
            .as_ref()
            .map(|requirements| requirements.required_fields.as_slice())
            .unwrap_or_default()
    }

    fn validate(&self, config: &CatalogLoadConfig) -> SpecResult<()> {
        let reject = |reason: String| SpecError::InvalidCatalogEntry {
            id: self.id.clone(),
            reason,
        };

        if self.id.trim().is_empty() {
            return Err(reject("id must not be empty".to_owned()));
        }
        if self.title.trim().is_empty() {
            return Err(reject("title must not be empty".to_owned()));
        }
        if let Some(requirements) = &self.data_requirements {
            for (index, field) in requirements.required_fields.iter().enumerate() {
                if field.is_empty() {
                    return Err(reject(format!("required field #{index} is empty")));
                }
                if requirements.required_fields[..index].contains(field) {
                    return Err(reject(format!("required field `{field}` is listed twice")));
                }
            }
        }
        if config.require_schema_url && self.base_spec.schema.is_none() {
            return Err(SpecViolation::new("$schema", "is required by catalog config")
                .into_catalog_error(&self.id));
        }
        self.base_spec
            .validate()
            .map_err(|violation| violation.into_catalog_error(&self.id))
    }
}

/// Append-only registry of chart definitions, keyed by id.
///
/// Built once at startup, then only read. Iteration follows registration
/// order so compatibility results are deterministic.
#[derive(Debug, Clone, Default)]
pub struct ChartCatalog {
    entries: IndexMap<String, ChartDefinition>,
    config: CatalogLoadConfig,
}

impl ChartCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: CatalogLoadConfig) -> Self {
        Self {
            entries: IndexMap::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> CatalogLoadConfig {
        self.config
    }

    /// Registers a definition after validating it.
    ///
    /// On error the catalog is left unchanged.
    pub fn register(&mut self, definition: ChartDefinition) -> SpecResult<()> {
        if self.entries.contains_key(&definition.id) {
            return Err(SpecError::DuplicateId {
                id: definition.id,
            });
        }
        definition.validate(&self.config)?;
        debug!(
            id = %definition.id,
            category = ?definition.category,
            count = self.entries.len() + 1,
            "register chart definition"
        );
        self.entries.insert(definition.id.clone(), definition);
        Ok(())
    }

    pub fn get(&self, id: &str) -> SpecResult<&ChartDefinition> {
        self.entries.get(id).ok_or_else(|| SpecError::NotFound {
            id: id.to_owned(),
        })
    }

    /// Definitions in registration order.
    pub fn list(&self) -> impl ExactSizeIterator<Item = &ChartDefinition> + '_ {
        self.entries.values()
    }

    pub fn by_category(
        &self,
        category: ChartCategory,
    ) -> impl Iterator<Item = &ChartDefinition> + '_ {
        self.list()
            .filter(move |definition| definition.category == category)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
