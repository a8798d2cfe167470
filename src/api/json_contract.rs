use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::ChartSpec;
use crate::error::{SpecError, SpecResult};

use super::{
    CatalogLoadConfig, ChartCatalog, ChartDefinition, CompatibilityReportEntry, LoadPolicy,
};

pub const CATALOG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogJsonContractV1 {
    pub schema_version: u32,
    pub charts: Vec<ChartDefinition>,
}

/// Entries rejected while loading a catalog document under
/// [`LoadPolicy::SkipInvalid`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogLoadReport {
    pub loaded: usize,
    pub rejected: Vec<SpecError>,
}

impl CatalogLoadReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

impl ChartCatalog {
    /// Builds a catalog from a JSON document: either a bare array of
    /// definitions or a versioned `{"schema_version": 1, "charts": [...]}`.
    pub fn from_json_str(
        input: &str,
        config: CatalogLoadConfig,
    ) -> SpecResult<(Self, CatalogLoadReport)> {
        let mut catalog = Self::with_config(config);
        let report = catalog.load_json_str(input)?;
        Ok((catalog, report))
    }

    /// Registers every definition of a JSON document, honoring the catalog's
    /// [`LoadPolicy`].
    pub fn load_json_str(&mut self, input: &str) -> SpecResult<CatalogLoadReport> {
        let document: Value = serde_json::from_str(input).map_err(|e| {
            SpecError::InvalidData(format!("failed to parse catalog json payload: {e}"))
        })?;
        let entries = catalog_entries(document)?;

        let mut report = CatalogLoadReport::default();
        for entry in entries {
            let outcome = decode_definition(entry).and_then(|definition| self.register(definition));
            match outcome {
                Ok(()) => report.loaded += 1,
                Err(err) if self.config().policy == LoadPolicy::SkipInvalid => {
                    warn!(error = %err, "skipping rejected catalog entry");
                    report.rejected.push(err);
                }
                Err(err) => return Err(err),
            }
        }
        debug!(
            loaded = report.loaded,
            rejected = report.rejected.len(),
            "load catalog json"
        );
        Ok(report)
    }

    pub fn to_json_contract_v1_pretty(&self) -> SpecResult<String> {
        let payload = CatalogJsonContractV1 {
            schema_version: CATALOG_JSON_SCHEMA_V1,
            charts: self.list().cloned().collect(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            SpecError::InvalidData(format!("failed to serialize catalog contract v1: {e}"))
        })
    }
}

fn catalog_entries(document: Value) -> SpecResult<Vec<Value>> {
    match document {
        Value::Array(entries) => Ok(entries),
        Value::Object(mut payload) => {
            let version = payload.get("schema_version").and_then(Value::as_u64);
            if version != Some(u64::from(CATALOG_JSON_SCHEMA_V1)) {
                return Err(SpecError::InvalidData(format!(
                    "unsupported catalog schema version: {}",
                    payload
                        .get("schema_version")
                        .map_or_else(|| "missing".to_owned(), Value::to_string)
                )));
            }
            match payload.remove("charts") {
                Some(Value::Array(entries)) => Ok(entries),
                _ => Err(SpecError::InvalidData(
                    "catalog contract `charts` must be an array".to_owned(),
                )),
            }
        }
        _ => Err(SpecError::InvalidData(
            "catalog json must be an array or a versioned contract object".to_owned(),
        )),
    }
}

/// Decodes one entry; shape errors (including negative `minDataPoints`) are
/// attributed to the entry's id when it has one.
fn decode_definition(entry: Value) -> SpecResult<ChartDefinition> {
    let id = entry
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or("<unknown>")
        .to_owned();
    serde_json::from_value(entry).map_err(|e| SpecError::InvalidCatalogEntry {
        id,
        reason: e.to_string(),
    })
}

impl ChartSpec {
    /// Decodes a Vega-Lite document and validates it.
    pub fn from_json_str(input: &str) -> SpecResult<Self> {
        let spec: Self = serde_json::from_str(input).map_err(|e| {
            SpecError::InvalidData(format!("failed to parse chart specification json: {e}"))
        })?;
        spec.validate().map_err(|violation| {
            SpecError::InvalidData(format!("invalid chart specification: {violation}"))
        })?;
        Ok(spec)
    }

    pub fn to_json_value(&self) -> SpecResult<Value> {
        serde_json::to_value(self).map_err(|e| {
            SpecError::InvalidData(format!("failed to serialize chart specification: {e}"))
        })
    }

    pub fn to_json_pretty(&self) -> SpecResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            SpecError::InvalidData(format!("failed to serialize chart specification: {e}"))
        })
    }
}

pub fn compatibility_report_json_pretty(entries: &[CompatibilityReportEntry]) -> SpecResult<String> {
    serde_json::to_string_pretty(entries).map_err(|e| {
        SpecError::InvalidData(format!("failed to serialize compatibility report: {e}"))
    })
}
