use std::fmt;

use serde::{Deserialize, Serialize};

/// Vega-Lite measurement type of an encoded field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticType {
    Quantitative,
    Temporal,
    Nominal,
    Ordinal,
}

impl SemanticType {
    pub const ALL: [Self; 4] = [
        Self::Quantitative,
        Self::Temporal,
        Self::Nominal,
        Self::Ordinal,
    ];

    /// Parses one of the four recognized kinds. Matching is exact and case-sensitive.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "quantitative" => Some(Self::Quantitative),
            "temporal" => Some(Self::Temporal),
            "nominal" => Some(Self::Nominal),
            "ordinal" => Some(Self::Ordinal),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quantitative => "quantitative",
            Self::Temporal => "temporal",
            Self::Nominal => "nominal",
            Self::Ordinal => "ordinal",
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column type as reported by the profiler.
///
/// Unrecognized strings are carried through unchanged; consumers treat them as
/// unconstrained instead of rejecting the column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColumnType {
    Known(SemanticType),
    Other(String),
}

impl ColumnType {
    #[must_use]
    pub fn semantic(&self) -> Option<SemanticType> {
        match self {
            Self::Known(kind) => Some(*kind),
            Self::Other(_) => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(kind) => kind.as_str(),
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for ColumnType {
    fn from(raw: String) -> Self {
        match SemanticType::parse(&raw) {
            Some(kind) => Self::Known(kind),
            None => Self::Other(raw),
        }
    }
}

impl From<&str> for ColumnType {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_owned())
    }
}

impl From<SemanticType> for ColumnType {
    fn from(kind: SemanticType) -> Self {
        Self::Known(kind)
    }
}

impl From<ColumnType> for String {
    fn from(value: ColumnType) -> Self {
        match value {
            ColumnType::Known(kind) => kind.as_str().to_owned(),
            ColumnType::Other(raw) => raw,
        }
    }
}

/// Visual role a mark can bind to a data field.
///
/// Covers every single-view Vega-Lite channel. Editor updates usually target
/// `x`, `y`, `color`, `size`, `theta` or `tooltip`, but any channel is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EncodingChannel {
    X,
    Y,
    X2,
    Y2,
    XOffset,
    YOffset,
    Longitude,
    Latitude,
    Longitude2,
    Latitude2,
    Theta,
    Theta2,
    Radius,
    Radius2,
    Color,
    Fill,
    Stroke,
    Opacity,
    FillOpacity,
    StrokeOpacity,
    StrokeWidth,
    StrokeDash,
    Size,
    Angle,
    Shape,
    Text,
    Tooltip,
    Href,
    Url,
    Description,
    Detail,
    Key,
    Order,
    Facet,
    Row,
    Column,
}

impl EncodingChannel {
    pub const ALL: [Self; 36] = [
        Self::X,
        Self::Y,
        Self::X2,
        Self::Y2,
        Self::XOffset,
        Self::YOffset,
        Self::Longitude,
        Self::Latitude,
        Self::Longitude2,
        Self::Latitude2,
        Self::Theta,
        Self::Theta2,
        Self::Radius,
        Self::Radius2,
        Self::Color,
        Self::Fill,
        Self::Stroke,
        Self::Opacity,
        Self::FillOpacity,
        Self::StrokeOpacity,
        Self::StrokeWidth,
        Self::StrokeDash,
        Self::Size,
        Self::Angle,
        Self::Shape,
        Self::Text,
        Self::Tooltip,
        Self::Href,
        Self::Url,
        Self::Description,
        Self::Detail,
        Self::Key,
        Self::Order,
        Self::Facet,
        Self::Row,
        Self::Column,
    ];

    /// Type used when neither caller nor column pins a recognized one.
    #[must_use]
    pub fn default_semantic_type(self) -> SemanticType {
        match self {
            Self::Color => SemanticType::Nominal,
            _ => SemanticType::Quantitative,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::X2 => "x2",
            Self::Y2 => "y2",
            Self::XOffset => "xOffset",
            Self::YOffset => "yOffset",
            Self::Longitude => "longitude",
            Self::Latitude => "latitude",
            Self::Longitude2 => "longitude2",
            Self::Latitude2 => "latitude2",
            Self::Theta => "theta",
            Self::Theta2 => "theta2",
            Self::Radius => "radius",
            Self::Radius2 => "radius2",
            Self::Color => "color",
            Self::Fill => "fill",
            Self::Stroke => "stroke",
            Self::Opacity => "opacity",
            Self::FillOpacity => "fillOpacity",
            Self::StrokeOpacity => "strokeOpacity",
            Self::StrokeWidth => "strokeWidth",
            Self::StrokeDash => "strokeDash",
            Self::Size => "size",
            Self::Angle => "angle",
            Self::Shape => "shape",
            Self::Text => "text",
            Self::Tooltip => "tooltip",
            Self::Href => "href",
            Self::Url => "url",
            Self::Description => "description",
            Self::Detail => "detail",
            Self::Key => "key",
            Self::Order => "order",
            Self::Facet => "facet",
            Self::Row => "row",
            Self::Column => "column",
        }
    }
}

impl fmt::Display for EncodingChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geometric primitive used to draw encoded data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkType {
    Bar,
    Line,
    Point,
    Area,
    Arc,
    Rect,
    Tick,
    Rule,
    Circle,
    Square,
    Text,
    Boxplot,
    Trail,
    Image,
    Geoshape,
    Errorbar,
    Errorband,
}

impl MarkType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Point => "point",
            Self::Area => "area",
            Self::Arc => "arc",
            Self::Rect => "rect",
            Self::Tick => "tick",
            Self::Rule => "rule",
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Text => "text",
            Self::Boxplot => "boxplot",
            Self::Trail => "trail",
            Self::Image => "image",
            Self::Geoshape => "geoshape",
            Self::Errorbar => "errorbar",
            Self::Errorband => "errorband",
        }
    }
}

impl fmt::Display for MarkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
