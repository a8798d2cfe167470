use crate::core::{
    ColumnMetadata, EncodingChannel, EncodingUpdate, SemanticType, VisualEditorUpdate,
};

/// Turns a dropped column and a target channel into a channel binding.
///
/// The field is always the column name. The type is, in order: the caller's
/// explicit type when it is one of the four recognized kinds, the column's own
/// type when recognized, then the channel default.
#[must_use]
pub fn resolve(
    column: &ColumnMetadata,
    channel: EncodingChannel,
    explicit_type: Option<&str>,
) -> EncodingUpdate {
    EncodingUpdate::set(
        column.name.clone(),
        resolve_semantic_type(column, channel, explicit_type),
    )
}

/// Single-channel editor update for a resolved binding.
#[must_use]
pub fn resolve_update(
    column: &ColumnMetadata,
    channel: EncodingChannel,
    explicit_type: Option<&str>,
) -> VisualEditorUpdate {
    VisualEditorUpdate::channel(channel, resolve(column, channel, explicit_type))
}

#[must_use]
pub fn resolve_semantic_type(
    column: &ColumnMetadata,
    channel: EncodingChannel,
    explicit_type: Option<&str>,
) -> SemanticType {
    explicit_type
        .and_then(SemanticType::parse)
        .or_else(|| column.column_type.semantic())
        .unwrap_or_else(|| channel.default_semantic_type())
}
