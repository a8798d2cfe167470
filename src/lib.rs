//! chart-spec-rs: chart catalog and visual-editor update engine.
//!
//! The crate holds a registry of Vega-Lite chart definitions, checks which of
//! them a profiled dataset can drive, and folds partial visual edits (mark
//! swaps, channel bindings) into a working specification without ever
//! exposing an invalid one.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{ChartCatalog, ChartDefinition, EditorSession};
pub use error::{SpecError, SpecResult, SpecViolation};
