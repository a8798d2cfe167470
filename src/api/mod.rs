//! Catalog, compatibility checking and the visual-editor update engine.

pub mod binding_resolver;
pub mod builtin_catalog;
pub mod catalog;
pub mod compatibility;
pub mod config;
pub mod editor_session;
pub mod json_contract;
pub mod spec_update_engine;

pub use binding_resolver::{resolve, resolve_semantic_type, resolve_update};
pub use builtin_catalog::builtin_definitions;
pub use catalog::{ChartCatalog, ChartCategory, ChartDefinition, Complexity, DataRequirements};
pub use compatibility::{
    Compatibility, CompatibilityReportEntry, check_definition, compatibility_report,
    compatible_charts, filter,
};
pub use config::{CatalogLoadConfig, EditorSessionConfig, LoadPolicy};
pub use editor_session::EditorSession;
pub use json_contract::{
    CATALOG_JSON_SCHEMA_V1, CatalogJsonContractV1, CatalogLoadReport,
    compatibility_report_json_pretty,
};
pub use spec_update_engine::{apply, apply_all};
