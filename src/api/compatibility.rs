use serde::{Deserialize, Serialize};

use crate::core::DatasetProfile;

use super::{ChartCatalog, ChartDefinition};

/// Outcome of checking one catalog entry against a dataset profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Compatibility<'a> {
    pub definition: &'a ChartDefinition,
    pub satisfied: bool,
    /// Required fields absent from the profile, in declared order.
    pub missing_fields: Vec<String>,
    /// `false` only when `minDataPoints` is set and exceeds the row count.
    pub enough_rows: bool,
    /// Share of required fields present; `1.0` when nothing is required.
    pub coverage: f64,
}

/// Checks every catalog entry against `profile`, in registration order.
///
/// Never fails: unknown column types are unconstrained and entries without
/// data requirements are always satisfied.
#[must_use]
pub fn filter<'a>(catalog: &'a ChartCatalog, profile: &DatasetProfile) -> Vec<Compatibility<'a>> {
    #[cfg(feature = "parallel-filter")]
    {
        use rayon::prelude::*;

        let definitions: Vec<&ChartDefinition> = catalog.list().collect();
        definitions
            .into_par_iter()
            .map(|definition| check_definition(definition, profile))
            .collect()
    }

    #[cfg(not(feature = "parallel-filter"))]
    {
        catalog
            .list()
            .map(|definition| check_definition(definition, profile))
            .collect()
    }
}

/// Satisfied definitions only, in registration order.
#[must_use]
pub fn compatible_charts<'a>(
    catalog: &'a ChartCatalog,
    profile: &DatasetProfile,
) -> Vec<&'a ChartDefinition> {
    filter(catalog, profile)
        .into_iter()
        .filter(|result| result.satisfied)
        .map(|result| result.definition)
        .collect()
}

#[must_use]
pub fn check_definition<'a>(
    definition: &'a ChartDefinition,
    profile: &DatasetProfile,
) -> Compatibility<'a> {
    let Some(requirements) = &definition.data_requirements else {
        return Compatibility {
            definition,
            satisfied: true,
            missing_fields: Vec::new(),
            enough_rows: true,
            coverage: 1.0,
        };
    };

    let missing_fields: Vec<String> = requirements
        .required_fields
        .iter()
        .filter(|field| !profile.has_column(field))
        .cloned()
        .collect();
    let enough_rows = requirements
        .min_data_points
        .is_none_or(|min| profile.row_count >= min);

    let required = requirements.required_fields.len();
    let coverage = if required == 0 {
        1.0
    } else {
        (required - missing_fields.len()) as f64 / required as f64
    };

    Compatibility {
        definition,
        satisfied: missing_fields.is_empty() && enough_rows,
        missing_fields,
        enough_rows,
        coverage,
    }
}

/// Gallery-facing summary of one [`Compatibility`] result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityReportEntry {
    pub id: String,
    pub title: String,
    pub satisfied: bool,
    pub missing_fields: Vec<String>,
}

impl From<&Compatibility<'_>> for CompatibilityReportEntry {
    fn from(result: &Compatibility<'_>) -> Self {
        Self {
            id: result.definition.id.clone(),
            title: result.definition.title.clone(),
            satisfied: result.satisfied,
            missing_fields: result.missing_fields.clone(),
        }
    }
}

#[must_use]
pub fn compatibility_report(results: &[Compatibility<'_>]) -> Vec<CompatibilityReportEntry> {
    results.iter().map(CompatibilityReportEntry::from).collect()
}
