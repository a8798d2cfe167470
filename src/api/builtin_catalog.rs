use serde_json::json;

use crate::core::{
    Aggregate, ChartSpec, DataSource, Dimension, EncodingChannel, FieldBinding, MarkDef,
    MarkType, SemanticType,
};
use crate::error::SpecResult;

use super::{ChartCatalog, ChartCategory, ChartDefinition, Complexity, DataRequirements};

use EncodingChannel::{Color, Size, Theta, Tooltip, X, Y};
use SemanticType::{Nominal, Ordinal, Quantitative, Temporal};

impl ChartCatalog {
    /// The chart gallery shipped with the crate, in gallery order.
    pub fn builtin() -> SpecResult<Self> {
        let mut catalog = Self::new();
        for definition in builtin_definitions() {
            catalog.register(definition)?;
        }
        Ok(catalog)
    }
}

#[must_use]
pub fn builtin_definitions() -> Vec<ChartDefinition> {
    vec![
        bar_chart(),
        stacked_bar_chart(),
        line_chart(),
        area_chart(),
        scatter_plot(),
        bubble_chart(),
        pie_chart(),
        donut_chart(),
        heatmap(),
        histogram(),
        box_plot(),
    ]
}

fn base(mark: impl Into<MarkDef>) -> ChartSpec {
    ChartSpec::new(mark).with_size(Dimension::CONTAINER, Dimension::Pixels(300))
}

fn field(name: &str, kind: SemanticType) -> FieldBinding {
    FieldBinding::new(name, kind)
}

fn category_values() -> DataSource {
    DataSource::inline(vec![
        json!({"category": "A", "value": 28}),
        json!({"category": "B", "value": 55}),
        json!({"category": "C", "value": 43}),
    ])
}

fn dated_values() -> DataSource {
    DataSource::inline(vec![
        json!({"date": "2024-01-01", "value": 12}),
        json!({"date": "2024-02-01", "value": 19}),
        json!({"date": "2024-03-01", "value": 15}),
    ])
}

fn bar_chart() -> ChartDefinition {
    ChartDefinition::new(
        "bar-chart",
        "Bar Chart",
        ChartCategory::Basic,
        Complexity::Beginner,
        base(MarkType::Bar)
            .with_data(category_values())
            .with_encoding(X, field("category", Nominal))
            .with_encoding(Y, field("value", Quantitative)),
    )
    .with_description("Compare a numeric value across categories.")
    .with_data_requirements(
        DataRequirements::fields(["category", "value"]).with_min_data_points(1),
    )
}

fn stacked_bar_chart() -> ChartDefinition {
    ChartDefinition::new(
        "stacked-bar-chart",
        "Stacked Bar Chart",
        ChartCategory::Comparison,
        Complexity::Intermediate,
        base(MarkType::Bar)
            .with_encoding(X, field("category", Nominal))
            .with_encoding(Y, field("value", Quantitative).with_aggregate(Aggregate::Sum))
            .with_encoding(Color, field("group", Nominal)),
    )
    .with_description("Show how groups contribute to each category total.")
    .with_data_requirements(
        DataRequirements::fields(["category", "group", "value"]).with_min_data_points(2),
    )
}

fn line_chart() -> ChartDefinition {
    ChartDefinition::new(
        "line-chart",
        "Line Chart",
        ChartCategory::Temporal,
        Complexity::Beginner,
        base(MarkType::Line)
            .with_data(dated_values())
            .with_encoding(X, field("date", Temporal))
            .with_encoding(Y, field("value", Quantitative)),
    )
    .with_description("Follow a value over time.")
    .with_data_requirements(DataRequirements::fields(["date", "value"]).with_min_data_points(2))
}

fn area_chart() -> ChartDefinition {
    ChartDefinition::new(
        "area-chart",
        "Area Chart",
        ChartCategory::Temporal,
        Complexity::Intermediate,
        base(MarkDef::new(MarkType::Area).with_property("opacity", 0.7))
            .with_data(dated_values())
            .with_encoding(X, field("date", Temporal))
            .with_encoding(Y, field("value", Quantitative)),
    )
    .with_description("Emphasize the magnitude of change over time.")
    .with_data_requirements(DataRequirements::fields(["date", "value"]).with_min_data_points(2))
}

fn scatter_plot() -> ChartDefinition {
    ChartDefinition::new(
        "scatter-plot",
        "Scatter Plot",
        ChartCategory::Relationship,
        Complexity::Beginner,
        base(MarkType::Point)
            .with_encoding(X, field("x", Quantitative))
            .with_encoding(Y, field("y", Quantitative)),
    )
    .with_description("Reveal the relationship between two numeric variables.")
    .with_data_requirements(DataRequirements::fields(["x", "y"]).with_min_data_points(2))
}

fn bubble_chart() -> ChartDefinition {
    ChartDefinition::new(
        "bubble-chart",
        "Bubble Chart",
        ChartCategory::Relationship,
        Complexity::Intermediate,
        base(MarkType::Circle)
            .with_encoding(X, field("x", Quantitative))
            .with_encoding(Y, field("y", Quantitative))
            .with_encoding(Size, field("size", Quantitative))
            .with_encoding(Tooltip, field("size", Quantitative)),
    )
    .with_description("Scatter plot with a third variable mapped to point area.")
    .with_data_requirements(DataRequirements::fields(["x", "y", "size"]).with_min_data_points(2))
}

fn pie_chart() -> ChartDefinition {
    ChartDefinition::new(
        "pie-chart",
        "Pie Chart",
        ChartCategory::Composition,
        Complexity::Beginner,
        base(MarkType::Arc)
            .with_data(category_values())
            .with_encoding(Theta, field("value", Quantitative))
            .with_encoding(Color, field("category", Nominal)),
    )
    .with_description("Show parts of a whole.")
    .with_data_requirements(
        DataRequirements::fields(["category", "value"]).with_min_data_points(1),
    )
}

fn donut_chart() -> ChartDefinition {
    ChartDefinition::new(
        "donut-chart",
        "Donut Chart",
        ChartCategory::Composition,
        Complexity::Intermediate,
        base(MarkDef::new(MarkType::Arc).with_property("innerRadius", 50))
            .with_data(category_values())
            .with_encoding(Theta, field("value", Quantitative))
            .with_encoding(Color, field("category", Nominal)),
    )
    .with_description("Pie chart with a hollow center for a headline figure.")
    .with_data_requirements(
        DataRequirements::fields(["category", "value"]).with_min_data_points(1),
    )
}

fn heatmap() -> ChartDefinition {
    ChartDefinition::new(
        "heatmap",
        "Heatmap",
        ChartCategory::Comparison,
        Complexity::Advanced,
        base(MarkType::Rect)
            .with_encoding(X, field("x", Ordinal))
            .with_encoding(Y, field("y", Ordinal))
            .with_encoding(Color, field("value", Quantitative).with_aggregate(Aggregate::Mean)),
    )
    .with_description("Encode a value over two discrete dimensions as color.")
    .with_data_requirements(DataRequirements::fields(["x", "y", "value"]).with_min_data_points(1))
}

fn histogram() -> ChartDefinition {
    ChartDefinition::new(
        "histogram",
        "Histogram",
        ChartCategory::Distribution,
        Complexity::Intermediate,
        base(MarkType::Bar)
            .with_encoding(X, field("value", Quantitative).with_bin(true))
            .with_encoding(Y, FieldBinding::count()),
    )
    .with_description("Show the distribution of a single numeric variable.")
    .with_data_requirements(DataRequirements::fields(["value"]).with_min_data_points(1))
}

fn box_plot() -> ChartDefinition {
    ChartDefinition::new(
        "box-plot",
        "Box Plot",
        ChartCategory::Distribution,
        Complexity::Advanced,
        base(MarkType::Boxplot)
            .with_encoding(X, field("category", Nominal))
            .with_encoding(Y, field("value", Quantitative)),
    )
    .with_description("Summarize spread and outliers per category.")
    .with_data_requirements(
        DataRequirements::fields(["category", "value"]).with_min_data_points(5),
    )
}
