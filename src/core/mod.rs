pub mod column;
pub mod spec;
pub mod types;
pub mod update;
pub(crate) mod validation;

pub use column::{ColumnMetadata, ColumnStats, DatasetProfile};
pub use spec::{
    Aggregate, BinDef, BinKeyword, ChannelDef, ChartSpec, DataSource, Dimension,
    DimensionKeyword, Encoding, FieldBinding, MarkDef, StepSize, VEGA_LITE_SCHEMA_V5,
};
pub use types::{ColumnType, EncodingChannel, MarkType, SemanticType};
pub use update::{EncodingUpdate, VisualEditorUpdate};
