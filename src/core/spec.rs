use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::core::types::{EncodingChannel, MarkType, SemanticType};
use crate::error::SpecViolation;

pub const VEGA_LITE_SCHEMA_V5: &str = "https://vega.github.io/schema/vega-lite/v5.json";

/// Channel bindings in declaration order.
///
/// `IndexMap` keeps serialized output stable across edits: an overwritten
/// channel keeps its slot, a new channel is appended.
pub type Encoding = IndexMap<EncodingChannel, ChannelDef>;

/// A Vega-Lite single-view specification.
///
/// Field order matches the order keys are written back out. Top-level keys the
/// editor does not understand (`transform`, `config`, ...) are kept in `extra`
/// and passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<DataSource>,
    pub mark: MarkDef,
    #[serde(default)]
    pub encoding: Encoding,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChartSpec {
    #[must_use]
    pub fn new(mark: impl Into<MarkDef>) -> Self {
        Self {
            schema: Some(VEGA_LITE_SCHEMA_V5.to_owned()),
            title: None,
            description: None,
            width: None,
            height: None,
            data: None,
            mark: mark.into(),
            encoding: Encoding::new(),
            extra: Map::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_size(mut self, width: Dimension, height: Dimension) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: DataSource) -> Self {
        self.data = Some(data);
        self
    }

    #[must_use]
    pub fn with_encoding(mut self, channel: EncodingChannel, def: impl Into<ChannelDef>) -> Self {
        self.encoding.insert(channel, def.into());
        self
    }

    /// The single field definition bound to `channel`; `None` when the
    /// channel is unbound or holds a list.
    #[must_use]
    pub fn binding(&self, channel: EncodingChannel) -> Option<&FieldBinding> {
        self.encoding.get(&channel).and_then(ChannelDef::as_single)
    }

    /// Field names referenced by the encoding, in channel order.
    #[must_use]
    pub fn bound_fields(&self) -> Vec<&str> {
        self.encoding
            .values()
            .flat_map(ChannelDef::bindings)
            .filter_map(|binding| binding.field.as_deref())
            .collect()
    }

    pub fn validate(&self) -> Result<(), SpecViolation> {
        crate::core::validation::validate_chart_spec(self)
    }
}

/// Plot width or height: pixels, `"container"`, or a `{"step": n}` band size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Pixels(u32),
    Keyword(DimensionKeyword),
    Step(StepSize),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepSize {
    pub step: Number,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionKeyword {
    Container,
}

impl Dimension {
    pub const CONTAINER: Self = Self::Keyword(DimensionKeyword::Container);

    #[must_use]
    pub fn step(step: u32) -> Self {
        Self::Step(StepSize {
            step: Number::from(step),
            extra: Map::new(),
        })
    }
}

/// Mark definition: a bare type (`"bar"`) or a typed object with properties
/// (`{"type": "arc", "innerRadius": 50}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "MarkRepr", into = "MarkRepr")]
pub struct MarkDef {
    pub kind: MarkType,
    pub properties: IndexMap<String, Value>,
}

impl MarkDef {
    #[must_use]
    pub fn new(kind: MarkType) -> Self {
        Self {
            kind,
            properties: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }
}

impl From<MarkType> for MarkDef {
    fn from(kind: MarkType) -> Self {
        Self::new(kind)
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum MarkRepr {
    Kind(MarkType),
    Object {
        #[serde(rename = "type")]
        kind: MarkType,
        #[serde(flatten)]
        properties: IndexMap<String, Value>,
    },
}

impl From<MarkRepr> for MarkDef {
    fn from(repr: MarkRepr) -> Self {
        match repr {
            MarkRepr::Kind(kind) => Self::new(kind),
            MarkRepr::Object { kind, properties } => Self { kind, properties },
        }
    }
}

impl From<MarkDef> for MarkRepr {
    fn from(mark: MarkDef) -> Self {
        if mark.properties.is_empty() {
            Self::Kind(mark.kind)
        } else {
            Self::Object {
                kind: mark.kind,
                properties: mark.properties,
            }
        }
    }
}

/// Aggregate operation of a field definition.
///
/// The operations the editor reasons about are named; any other op
/// (`"average"`, `"distinct"`, `{"argmax": "date"}`, ...) is kept verbatim in
/// `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum Aggregate {
    Count,
    Sum,
    Mean,
    Median,
    Min,
    Max,
    Other(Value),
}

impl From<Value> for Aggregate {
    fn from(value: Value) -> Self {
        match value.as_str() {
            Some("count") => Self::Count,
            Some("sum") => Self::Sum,
            Some("mean") => Self::Mean,
            Some("median") => Self::Median,
            Some("min") => Self::Min,
            Some("max") => Self::Max,
            _ => Self::Other(value),
        }
    }
}

impl From<Aggregate> for Value {
    fn from(aggregate: Aggregate) -> Self {
        let op = match aggregate {
            Aggregate::Count => "count",
            Aggregate::Sum => "sum",
            Aggregate::Mean => "mean",
            Aggregate::Median => "median",
            Aggregate::Min => "min",
            Aggregate::Max => "max",
            Aggregate::Other(value) => return value,
        };
        Value::String(op.to_owned())
    }
}

/// `bin` of a field definition: a flag, `"binned"`, or binning parameters
/// such as `{"maxbins": 20}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BinDef {
    Flag(bool),
    Keyword(BinKeyword),
    Params(Map<String, Value>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinKeyword {
    Binned,
}

impl From<bool> for BinDef {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

/// Definition bound to one channel: a single field definition or, for
/// channels such as `tooltip`, a list of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChannelDef {
    Single(FieldBinding),
    Multiple(Vec<FieldBinding>),
}

impl ChannelDef {
    #[must_use]
    pub fn as_single(&self) -> Option<&FieldBinding> {
        match self {
            Self::Single(binding) => Some(binding),
            Self::Multiple(_) => None,
        }
    }

    #[must_use]
    pub fn bindings(&self) -> &[FieldBinding] {
        match self {
            Self::Single(binding) => std::slice::from_ref(binding),
            Self::Multiple(bindings) => bindings,
        }
    }
}

impl From<FieldBinding> for ChannelDef {
    fn from(binding: FieldBinding) -> Self {
        Self::Single(binding)
    }
}

impl From<Vec<FieldBinding>> for ChannelDef {
    fn from(bindings: Vec<FieldBinding>) -> Self {
        Self::Multiple(bindings)
    }
}

/// Field definition bound to one encoding channel.
///
/// `field` may only be omitted for `aggregate: count`, which counts records,
/// or for value and datum definitions (`{"value": "red"}`). Other keys
/// (`scale`, `sort`, `axis`, `value`, ...) live in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldBinding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<SemanticType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<Aggregate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bin: Option<BinDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FieldBinding {
    #[must_use]
    pub fn new(field: impl Into<String>, field_type: SemanticType) -> Self {
        Self {
            field: Some(field.into()),
            field_type: Some(field_type),
            aggregate: None,
            bin: None,
            title: None,
            extra: Map::new(),
        }
    }

    /// `{"aggregate": "count", "type": "quantitative"}`.
    #[must_use]
    pub fn count() -> Self {
        Self {
            field: None,
            field_type: Some(SemanticType::Quantitative),
            aggregate: Some(Aggregate::Count),
            bin: None,
            title: None,
            extra: Map::new(),
        }
    }

    #[must_use]
    pub fn with_aggregate(mut self, aggregate: Aggregate) -> Self {
        self.aggregate = Some(aggregate);
        self
    }

    #[must_use]
    pub fn with_bin(mut self, bin: impl Into<BinDef>) -> Self {
        self.bin = Some(bin.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Top-level `data` block.
///
/// Inline `values` are exposed directly; every other source key (`url`,
/// `name`, `format`, `sequence`, ...) is kept in `extra` as written.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DataSource {
    /// Inline rows, `{"values": [..]}`.
    #[must_use]
    pub fn inline(rows: Vec<Value>) -> Self {
        Self {
            values: Some(Value::Array(rows)),
            extra: Map::new(),
        }
    }

    /// Remote source, `{"url": ".."}`.
    #[must_use]
    pub fn url(url: impl Into<String>) -> Self {
        let mut extra = Map::new();
        extra.insert("url".to_owned(), Value::String(url.into()));
        Self {
            values: None,
            extra,
        }
    }
}
