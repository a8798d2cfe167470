use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::spec::MarkDef;
use crate::core::types::{EncodingChannel, SemanticType};
use crate::error::{SpecError, SpecResult};

/// Edit for one encoding channel.
///
/// Together with the channel's presence in [`VisualEditorUpdate::encoding`]
/// this gives three states:
/// - channel key absent: binding left as-is
/// - `field: Some(..)`: binding set to `{field, type}`
/// - `field: None`: channel removed (`{}` or `{"field": null}` on the wire)
///
/// On the wire a clear carries nothing but an optional `"field": null`. An
/// entry with a `type` but no `field`, or with any other key, is rejected
/// rather than read as a clear.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "EncodingUpdateWire")]
pub struct EncodingUpdate {
    pub field: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<SemanticType>,
}

impl EncodingUpdate {
    #[must_use]
    pub fn set(field: impl Into<String>, field_type: SemanticType) -> Self {
        Self {
            field: Some(field.into()),
            field_type: Some(field_type),
        }
    }

    #[must_use]
    pub fn clear() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.field.is_none()
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct EncodingUpdateWire {
    #[serde(default)]
    field: Option<String>,
    #[serde(rename = "type", default)]
    field_type: Option<SemanticType>,
}

impl TryFrom<EncodingUpdateWire> for EncodingUpdate {
    type Error = String;

    fn try_from(wire: EncodingUpdateWire) -> Result<Self, Self::Error> {
        match (wire.field, wire.field_type) {
            (None, Some(field_type)) => Err(format!(
                "channel edit with type `{field_type}` needs a `field`; send `{{}}` to clear the channel"
            )),
            (field, field_type) => Ok(Self { field, field_type }),
        }
    }
}

/// One user interaction: a mark swap, channel edits, or both.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VisualEditorUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mark: Option<MarkDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<IndexMap<EncodingChannel, EncodingUpdate>>,
}

impl VisualEditorUpdate {
    #[must_use]
    pub fn mark(mark: impl Into<MarkDef>) -> Self {
        Self {
            mark: Some(mark.into()),
            encoding: None,
        }
    }

    #[must_use]
    pub fn channel(channel: EncodingChannel, update: EncodingUpdate) -> Self {
        Self::default().with_channel(channel, update)
    }

    /// Adds (or replaces) the edit for `channel`.
    #[must_use]
    pub fn with_channel(mut self, channel: EncodingChannel, update: EncodingUpdate) -> Self {
        self.encoding
            .get_or_insert_with(IndexMap::new)
            .insert(channel, update);
        self
    }

    #[must_use]
    pub fn with_mark(mut self, mark: impl Into<MarkDef>) -> Self {
        self.mark = Some(mark.into());
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mark.is_none() && self.encoding.as_ref().is_none_or(IndexMap::is_empty)
    }

    pub fn from_json_str(input: &str) -> SpecResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            SpecError::InvalidData(format!("failed to parse visual editor update json: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{EncodingUpdate, VisualEditorUpdate};
    use crate::core::{EncodingChannel, MarkType, SemanticType};

    #[test]
    fn wire_form_distinguishes_set_and_clear() {
        let update = VisualEditorUpdate::from_json_str(
            r#"{"encoding": {
                "y": {"field": "score", "type": "quantitative"},
                "color": {},
                "size": {"field": null}
            }}"#,
        )
        .expect("update");

        let encoding = update.encoding.expect("encoding");
        assert_eq!(
            encoding[&EncodingChannel::Y],
            EncodingUpdate::set("score", SemanticType::Quantitative)
        );
        assert!(encoding[&EncodingChannel::Color].is_clear());
        assert!(encoding[&EncodingChannel::Size].is_clear());
        assert!(!encoding.contains_key(&EncodingChannel::X));
    }

    #[test]
    fn mark_only_update_has_no_encoding() {
        let update = VisualEditorUpdate::from_json_str(r#"{"mark": "line"}"#).expect("update");
        assert_eq!(update, VisualEditorUpdate::mark(MarkType::Line));
        assert!(!update.is_empty());
        assert!(VisualEditorUpdate::default().is_empty());
    }

    #[test]
    fn type_without_field_is_not_a_clear() {
        for input in [
            r#"{"encoding": {"x": {"type": "ordinal"}}}"#,
            r#"{"encoding": {"x": {"field": null, "type": "ordinal"}}}"#,
            r#"{"encoding": {"x": {"feild": "a"}}}"#,
        ] {
            assert!(
                VisualEditorUpdate::from_json_str(input).is_err(),
                "accepted {input}"
            );
        }
    }

    #[test]
    fn unknown_type_in_update_is_rejected() {
        assert!(
            VisualEditorUpdate::from_json_str(
                r#"{"encoding": {"x": {"field": "a", "type": "geojson"}}}"#
            )
            .is_err()
        );
    }
}
