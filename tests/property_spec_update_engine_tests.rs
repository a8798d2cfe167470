use chart_spec::api::{apply, apply_all};
use chart_spec::core::{
    ChartSpec, EncodingChannel, EncodingUpdate, FieldBinding, MarkType, SemanticType,
    VisualEditorUpdate,
};
use proptest::prelude::*;

fn channel() -> impl Strategy<Value = EncodingChannel> {
    prop::sample::select(EncodingChannel::ALL.to_vec())
}

fn semantic_type() -> impl Strategy<Value = SemanticType> {
    prop::sample::select(SemanticType::ALL.to_vec())
}

fn mark_type() -> impl Strategy<Value = MarkType> {
    prop::sample::select(vec![
        MarkType::Bar,
        MarkType::Line,
        MarkType::Point,
        MarkType::Area,
        MarkType::Arc,
        MarkType::Rect,
    ])
}

fn field_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}"
}

fn working_spec() -> impl Strategy<Value = ChartSpec> {
    (
        mark_type(),
        prop::collection::vec((channel(), field_name(), semantic_type()), 0..6),
    )
        .prop_map(|(mark, bindings)| {
            bindings
                .into_iter()
                .fold(ChartSpec::new(mark), |spec, (channel, field, kind)| {
                    spec.with_encoding(channel, FieldBinding::new(field, kind))
                })
        })
}

fn encoding_update() -> impl Strategy<Value = EncodingUpdate> {
    prop_oneof![
        1 => Just(EncodingUpdate::clear()),
        3 => (field_name(), semantic_type())
            .prop_map(|(field, kind)| EncodingUpdate::set(field, kind)),
    ]
}

fn editor_update() -> impl Strategy<Value = VisualEditorUpdate> {
    (
        prop::option::of(mark_type()),
        prop::collection::vec((channel(), encoding_update()), 0..4),
    )
        .prop_map(|(mark, edits)| {
            let update = VisualEditorUpdate {
                mark: mark.map(Into::into),
                encoding: None,
            };
            edits
                .into_iter()
                .fold(update, |update, (channel, edit)| update.with_channel(channel, edit))
        })
}

proptest! {
    #[test]
    fn single_channel_edit_leaves_other_channels_identical(
        spec in working_spec(),
        target in channel(),
        edit in encoding_update()
    ) {
        let next = apply(&spec, &VisualEditorUpdate::channel(target, edit)).expect("apply");

        for other in EncodingChannel::ALL.into_iter().filter(|c| *c != target) {
            prop_assert_eq!(
                serde_json::to_string(&next.binding(other)).expect("encode next"),
                serde_json::to_string(&spec.binding(other)).expect("encode base")
            );
        }
        prop_assert_eq!(&next.mark, &spec.mark);
    }

    #[test]
    fn applying_same_update_twice_is_idempotent(
        spec in working_spec(),
        update in editor_update()
    ) {
        let once = apply(&spec, &update).expect("once");
        let twice = apply(&once, &update).expect("twice");
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn fold_matches_step_by_step_application(
        spec in working_spec(),
        updates in prop::collection::vec(editor_update(), 0..6)
    ) {
        let folded = apply_all(&spec, &updates).expect("fold");
        let mut stepped = spec.clone();
        for update in &updates {
            stepped = apply(&stepped, update).expect("step");
        }
        prop_assert_eq!(folded, stepped);
    }

    #[test]
    fn last_write_to_a_channel_wins(
        spec in working_spec(),
        target in channel(),
        first in encoding_update(),
        second in encoding_update()
    ) {
        let u1 = VisualEditorUpdate::channel(target, first);
        let u2 = VisualEditorUpdate::channel(target, second.clone());
        let next = apply_all(&spec, [&u1, &u2]).expect("fold");

        match second.field {
            Some(field) => {
                let binding = next.binding(target).expect("bound");
                prop_assert_eq!(binding.field.as_deref(), Some(field.as_str()));
                prop_assert_eq!(binding.field_type, second.field_type);
            }
            None => prop_assert!(next.binding(target).is_none()),
        }
    }

    #[test]
    fn results_always_validate(
        spec in working_spec(),
        updates in prop::collection::vec(editor_update(), 1..6)
    ) {
        let next = apply_all(&spec, &updates).expect("fold");
        prop_assert!(next.validate().is_ok());
    }
}
