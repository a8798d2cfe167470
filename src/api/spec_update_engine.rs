use serde_json::Map;
use tracing::debug;

use crate::core::{ChartSpec, FieldBinding, VisualEditorUpdate};
use crate::error::{SpecError, SpecResult, SpecViolation};

/// Folds one editor update into `current` and returns the next specification.
///
/// - `mark` replaces the mark wholesale; encoding is left alone.
/// - Each channel named in `encoding` is either overwritten with the new
///   `{field, type}` pair or, when the edit carries no field, removed.
/// - Channels not named keep their binding and position.
///
/// `current` is never mutated. Fails with `InvariantViolation` when `current`
/// is not a valid specification, or when the result would not be one.
pub fn apply(current: &ChartSpec, update: &VisualEditorUpdate) -> SpecResult<ChartSpec> {
    current
        .validate()
        .map_err(SpecViolation::into_invariant_error)?;

    let mut next = current.clone();
    if let Some(mark) = &update.mark {
        next.mark = mark.clone();
    }

    let mut set_count = 0usize;
    let mut cleared_count = 0usize;
    if let Some(encoding) = &update.encoding {
        for (channel, edit) in encoding {
            match &edit.field {
                Some(field) => {
                    let binding = FieldBinding {
                        field: Some(field.clone()),
                        field_type: edit.field_type,
                        aggregate: None,
                        bin: None,
                        title: None,
                        extra: Map::new(),
                    };
                    next.encoding.insert(*channel, binding.into());
                    set_count += 1;
                }
                None => {
                    if next.encoding.shift_remove(channel).is_some() {
                        cleared_count += 1;
                    }
                }
            }
        }
    }

    next.validate().map_err(|violation| {
        SpecError::InvariantViolation(format!(
            "update would produce an invalid specification: {violation}"
        ))
    })?;

    debug!(
        mark = %next.mark.kind,
        mark_changed = update.mark.is_some(),
        set_count,
        cleared_count,
        "apply visual editor update"
    );
    Ok(next)
}

/// Applies `updates` strictly in order; later edits to a channel win.
pub fn apply_all<'a, I>(current: &ChartSpec, updates: I) -> SpecResult<ChartSpec>
where
    I: IntoIterator<Item = &'a VisualEditorUpdate>,
{
    updates
        .into_iter()
        .try_fold(current.clone(), |spec, update| apply(&spec, update))
}
