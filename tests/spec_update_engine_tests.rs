use chart_spec::SpecError;
use chart_spec::api::{apply, apply_all};
use chart_spec::core::{
    ChartSpec, EncodingChannel, EncodingUpdate, FieldBinding, MarkDef, MarkType, SemanticType,
    VisualEditorUpdate,
};
use serde_json::json;

fn bar_spec() -> ChartSpec {
    ChartSpec::new(MarkType::Bar)
        .with_encoding(
            EncodingChannel::X,
            FieldBinding::new("category", SemanticType::Nominal),
        )
        .with_encoding(
            EncodingChannel::Y,
            FieldBinding::new("value", SemanticType::Quantitative),
        )
}

#[test]
fn editing_y_leaves_x_untouched() {
    let base = bar_spec();
    let update = VisualEditorUpdate::channel(
        EncodingChannel::Y,
        EncodingUpdate::set("score", SemanticType::Quantitative),
    );

    let next = apply(&base, &update).expect("apply");

    assert_eq!(next.binding(EncodingChannel::X), base.binding(EncodingChannel::X));
    let y = next.binding(EncodingChannel::Y).expect("y binding");
    assert_eq!(y.field.as_deref(), Some("score"));
    assert_eq!(y.field_type, Some(SemanticType::Quantitative));
}

#[test]
fn mark_change_keeps_encoding() {
    let base = bar_spec();
    let next = apply(&base, &VisualEditorUpdate::mark(MarkType::Line)).expect("apply");

    assert_eq!(next.mark.kind, MarkType::Line);
    assert_eq!(next.encoding, base.encoding);
}

#[test]
fn mark_change_replaces_mark_properties_wholesale() {
    let base = bar_spec().with_encoding(
        EncodingChannel::Theta,
        FieldBinding::new("value", SemanticType::Quantitative),
    );
    let donut = apply(
        &base,
        &VisualEditorUpdate::mark(MarkDef::new(MarkType::Arc).with_property("innerRadius", 50)),
    )
    .expect("to donut");
    let pie = apply(&donut, &VisualEditorUpdate::mark(MarkType::Arc)).expect("to pie");

    assert!(pie.mark.properties.is_empty());
}

#[test]
fn clear_removes_channel_key() {
    let base = bar_spec().with_encoding(
        EncodingChannel::Color,
        FieldBinding::new("region", SemanticType::Nominal),
    );
    let next = apply(
        &base,
        &VisualEditorUpdate::channel(EncodingChannel::Color, EncodingUpdate::clear()),
    )
    .expect("apply");

    assert!(next.binding(EncodingChannel::Color).is_none());
    let value = next.to_json_value().expect("json");
    assert!(value["encoding"].get("color").is_none());
    assert_eq!(next.encoding.len(), 2);
}

#[test]
fn input_specification_is_not_mutated() {
    let base = bar_spec();
    let snapshot = base.clone();
    let _ = apply(
        &base,
        &VisualEditorUpdate::mark(MarkType::Point)
            .with_channel(EncodingChannel::X, EncodingUpdate::clear())
            .with_channel(
                EncodingChannel::Size,
                EncodingUpdate::set("value", SemanticType::Quantitative),
            ),
    )
    .expect("apply");

    assert_eq!(base, snapshot);
}

#[test]
fn later_updates_to_same_channel_win() {
    let base = bar_spec();
    let first = VisualEditorUpdate::channel(
        EncodingChannel::Color,
        EncodingUpdate::set("region", SemanticType::Nominal),
    );
    let second = VisualEditorUpdate::channel(
        EncodingChannel::Color,
        EncodingUpdate::set("segment", SemanticType::Ordinal),
    );

    let forward = apply_all(&base, [&first, &second]).expect("forward");
    let backward = apply_all(&base, [&second, &first]).expect("backward");

    assert_eq!(
        forward.binding(EncodingChannel::Color),
        Some(&FieldBinding::new("segment", SemanticType::Ordinal))
    );
    assert_eq!(
        backward.binding(EncodingChannel::Color),
        Some(&FieldBinding::new("region", SemanticType::Nominal))
    );
}

#[test]
fn untouched_parts_of_document_pass_through() {
    let base = ChartSpec::from_json_str(
        &json!({
            "$schema": "https://vega.github.io/schema/vega-lite/v5.json",
            "data": {"values": [{"category": "A", "value": 1}]},
            "mark": "bar",
            "encoding": {
                "x": {"field": "category", "type": "nominal", "sort": "-y"},
                "y": {"field": "value", "type": "quantitative"}
            },
            "config": {"axis": {"grid": false}}
        })
        .to_string(),
    )
    .expect("spec");

    let next = apply(
        &base,
        &VisualEditorUpdate::channel(
            EncodingChannel::Y,
            EncodingUpdate::set("score", SemanticType::Quantitative),
        ),
    )
    .expect("apply");

    let value = next.to_json_value().expect("json");
    assert_eq!(value["config"], json!({"axis": {"grid": false}}));
    assert_eq!(value["encoding"]["x"]["sort"], json!("-y"));
    assert_eq!(value["data"]["values"][0]["category"], json!("A"));
}

#[test]
fn invalid_working_spec_surfaces_invariant_violation() {
    let mut broken = bar_spec();
    broken.schema = Some("not-a-schema".to_owned());

    let err = apply(&broken, &VisualEditorUpdate::default()).expect_err("invalid");
    assert!(matches!(err, SpecError::InvariantViolation(_)));
}

#[test]
fn data_source_keys_survive_a_channel_edit() {
    let base = ChartSpec::from_json_str(
        &json!({
            "data": {"values": [{"a": 1}], "format": {"type": "json"}, "name": "table"},
            "mark": "bar",
            "encoding": {"x": {"field": "a", "type": "quantitative"}}
        })
        .to_string(),
    )
    .expect("spec");

    let next = apply(
        &base,
        &VisualEditorUpdate::channel(
            EncodingChannel::Y,
            EncodingUpdate::set("b", SemanticType::Quantitative),
        ),
    )
    .expect("apply");

    let value = next.to_json_value().expect("json");
    assert_eq!(
        value["data"],
        json!({"values": [{"a": 1}], "format": {"type": "json"}, "name": "table"})
    );
    assert_eq!(next.data, base.data);
}

#[test]
fn unmodelled_definitions_survive_an_edit_elsewhere() {
    let base = ChartSpec::from_json_str(
        &json!({
            "width": {"step": 18},
            "data": {"url": "data/cars.json"},
            "mark": "point",
            "encoding": {
                "x": {"field": "hp", "type": "quantitative", "bin": {"maxbins": 10}},
                "y": {"field": "mpg", "type": "quantitative", "aggregate": "average"},
                "shape": {"field": "origin", "type": "nominal"},
                "tooltip": [{"field": "name", "type": "nominal"}, {"field": "hp", "type": "quantitative"}]
            }
        })
        .to_string(),
    )
    .expect("spec");

    let next = apply(
        &base,
        &VisualEditorUpdate::channel(
            EncodingChannel::Color,
            EncodingUpdate::set("origin", SemanticType::Nominal),
        ),
    )
    .expect("apply");

    for channel in [
        EncodingChannel::X,
        EncodingChannel::Y,
        EncodingChannel::Shape,
        EncodingChannel::Tooltip,
    ] {
        assert_eq!(next.encoding.get(&channel), base.encoding.get(&channel));
    }
    assert_eq!(next.width, base.width);
    assert_eq!(next.data, base.data);
    let keys: Vec<EncodingChannel> = next.encoding.keys().copied().collect();
    assert_eq!(keys.last(), Some(&EncodingChannel::Color));
}
