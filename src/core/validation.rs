use serde_json::Value;

use crate::core::spec::{
    Aggregate, BinDef, ChannelDef, ChartSpec, DataSource, Dimension, FieldBinding, MarkDef,
};
use crate::error::SpecViolation;

const VEGA_LITE_SCHEMA_PREFIX: &str = "https://vega.github.io/schema/vega-lite/v";

/// Mark properties that must be finite, non-negative numbers when present.
const NON_NEGATIVE_MARK_PROPERTIES: [&str; 6] = [
    "innerRadius",
    "outerRadius",
    "size",
    "strokeWidth",
    "cornerRadius",
    "padAngle",
];

/// Field-definition keys that stand in for `field`.
const FIELDLESS_DEFINITION_KEYS: [&str; 2] = ["value", "datum"];

pub(crate) fn validate_chart_spec(spec: &ChartSpec) -> Result<(), SpecViolation> {
    if let Some(schema) = &spec.schema {
        validate_schema_url(schema)?;
    }
    for (name, dimension) in [("width", &spec.width), ("height", &spec.height)] {
        if let Some(dimension) = dimension {
            validate_dimension(name, dimension)?;
        }
    }
    validate_mark(&spec.mark)?;
    for (channel, def) in &spec.encoding {
        match def {
            ChannelDef::Single(binding) => {
                validate_field_binding(&format!("encoding.{channel}"), binding)?;
            }
            ChannelDef::Multiple(bindings) => {
                for (index, binding) in bindings.iter().enumerate() {
                    validate_field_binding(&format!("encoding.{channel}[{index}]"), binding)?;
                }
            }
        }
    }
    if let Some(data) = &spec.data {
        validate_data(data)?;
    }
    Ok(())
}

/// Accepts `https://vega.github.io/schema/vega-lite/v<major>.json`.
pub(crate) fn validate_schema_url(schema: &str) -> Result<(), SpecViolation> {
    let version = schema
        .strip_prefix(VEGA_LITE_SCHEMA_PREFIX)
        .and_then(|rest| rest.strip_suffix(".json"));
    match version {
        Some(major) if !major.is_empty() && major.bytes().all(|b| b.is_ascii_digit()) => Ok(()),
        _ => Err(SpecViolation::new(
            "$schema",
            format!("must be a Vega-Lite schema url, got `{schema}`"),
        )),
    }
}

fn validate_dimension(name: &str, dimension: &Dimension) -> Result<(), SpecViolation> {
    match dimension {
        Dimension::Pixels(0) => Err(SpecViolation::new(name, "must be > 0")),
        Dimension::Step(step) if !step.step.as_f64().is_some_and(|v| v > 0.0) => Err(
            SpecViolation::new(format!("{name}.step"), "must be a number > 0"),
        ),
        _ => Ok(()),
    }
}

fn validate_mark(mark: &MarkDef) -> Result<(), SpecViolation> {
    for name in NON_NEGATIVE_MARK_PROPERTIES {
        if let Some(value) = mark.properties.get(name) {
            if !is_non_negative_number(value) {
                return Err(SpecViolation::new(
                    format!("mark.{name}"),
                    "must be a finite number >= 0",
                ));
            }
        }
    }
    if let Some(opacity) = mark.properties.get("opacity") {
        let in_range = opacity.as_f64().is_some_and(|v| (0.0..=1.0).contains(&v));
        if !in_range {
            return Err(SpecViolation::new(
                "mark.opacity",
                "must be a number between 0 and 1",
            ));
        }
    }
    Ok(())
}

fn is_non_negative_number(value: &Value) -> bool {
    value.as_f64().is_some_and(|v| v.is_finite() && v >= 0.0)
}

fn validate_field_binding(path: &str, binding: &FieldBinding) -> Result<(), SpecViolation> {
    match binding.field.as_deref() {
        Some("") => {
            return Err(SpecViolation::new(
                format!("{path}.field"),
                "must not be empty",
            ));
        }
        Some(_) => {}
        None => {
            let fieldless = binding.aggregate == Some(Aggregate::Count)
                || FIELDLESS_DEFINITION_KEYS
                    .iter()
                    .any(|key| binding.extra.contains_key(*key));
            if !fieldless {
                return Err(SpecViolation::new(
                    format!("{path}.field"),
                    "is required unless aggregate is `count` or a value/datum is given",
                ));
            }
        }
    }
    if let Some(Aggregate::Other(op)) = &binding.aggregate {
        let well_formed = op.as_str().is_some_and(|name| !name.is_empty()) || op.is_object();
        if !well_formed {
            return Err(SpecViolation::new(
                format!("{path}.aggregate"),
                "must be an operation name or an argmin/argmax object",
            ));
        }
    }
    if let Some(BinDef::Params(params)) = &binding.bin {
        if let Some(maxbins) = params.get("maxbins") {
            if !maxbins.as_f64().is_some_and(|v| v.is_finite() && v >= 2.0) {
                return Err(SpecViolation::new(
                    format!("{path}.bin.maxbins"),
                    "must be a number >= 2",
                ));
            }
        }
    }
    Ok(())
}

fn validate_data(data: &DataSource) -> Result<(), SpecViolation> {
    match &data.values {
        None | Some(Value::Array(_) | Value::String(_) | Value::Object(_)) => {}
        Some(_) => {
            return Err(SpecViolation::new(
                "data.values",
                "must be an array, a string or an object",
            ));
        }
    }
    if let Some(url) = data.extra.get("url") {
        if !url.as_str().is_some_and(|url| !url.is_empty()) {
            return Err(SpecViolation::new("data.url", "must be a non-empty string"));
        }
    }
    Ok(())
}
