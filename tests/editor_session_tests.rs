use chart_spec::SpecError;
use chart_spec::api::{ChartCatalog, EditorSession, EditorSessionConfig, resolve_update};
use chart_spec::core::{
    ColumnMetadata, EncodingChannel, EncodingUpdate, MarkType, SemanticType, VisualEditorUpdate,
};

fn session() -> EditorSession {
    let catalog = ChartCatalog::builtin().expect("builtin");
    EditorSession::open(&catalog, "bar-chart", EditorSessionConfig::default()).expect("session")
}

#[test]
fn open_unknown_definition_is_not_found() {
    let catalog = ChartCatalog::builtin().expect("builtin");
    let err = EditorSession::open(&catalog, "sankey", EditorSessionConfig::default())
        .expect_err("unknown");
    assert!(matches!(err, SpecError::NotFound { .. }));
}

#[test]
fn session_starts_from_base_spec_copy() {
    let catalog = ChartCatalog::builtin().expect("builtin");
    let mut session =
        EditorSession::open(&catalog, "bar-chart", EditorSessionConfig::default()).expect("open");
    assert_eq!(session.definition_id(), "bar-chart");

    session
        .apply(&VisualEditorUpdate::mark(MarkType::Line))
        .expect("apply");

    let definition = catalog.get("bar-chart").expect("definition");
    assert_eq!(definition.base_spec.mark.kind, MarkType::Bar);
    assert_eq!(session.current().mark.kind, MarkType::Line);
}

#[test]
fn undo_restores_previous_spec_exactly() {
    let mut session = session();
    let before = session.current().clone();

    let column = ColumnMetadata::new("region", SemanticType::Nominal);
    session
        .apply(&resolve_update(&column, EncodingChannel::Color, None))
        .expect("bind color");
    assert_ne!(session.current(), &before);

    assert!(session.undo());
    assert_eq!(session.current(), &before);
    assert!(session.can_redo());

    assert!(session.redo());
    assert_eq!(
        session
            .current()
            .binding(EncodingChannel::Color)
            .and_then(|b| b.field.as_deref()),
        Some("region")
    );
}

#[test]
fn new_apply_discards_redo_branch() {
    let mut session = session();
    session
        .apply(&VisualEditorUpdate::mark(MarkType::Line))
        .expect("line");
    assert!(session.undo());
    session
        .apply(&VisualEditorUpdate::mark(MarkType::Area))
        .expect("area");

    assert!(!session.can_redo());
    assert!(!session.redo());
    assert_eq!(session.current().mark.kind, MarkType::Area);
}

#[test]
fn failed_apply_leaves_state_and_history_untouched() {
    let mut session = session();
    session
        .apply(&VisualEditorUpdate::mark(MarkType::Point))
        .expect("point");
    let snapshot = session.current().clone();
    let revision = session.revision();

    let err = session
        .apply(&VisualEditorUpdate::channel(
            EncodingChannel::X,
            EncodingUpdate::set("", SemanticType::Nominal),
        ))
        .expect_err("empty field");

    assert!(matches!(err, SpecError::InvariantViolation(_)));
    assert_eq!(session.current(), &snapshot);
    assert_eq!(session.revision(), revision);
    assert!(session.undo());
    assert_eq!(session.current().mark.kind, MarkType::Bar);
}

#[test]
fn reset_is_undoable() {
    let mut session = session();
    session
        .apply(&VisualEditorUpdate::channel(
            EncodingChannel::Y,
            EncodingUpdate::clear(),
        ))
        .expect("clear y");
    let edited = session.current().clone();

    assert!(session.reset());
    assert_eq!(session.current(), session.base());

    assert!(session.undo());
    assert_eq!(session.current(), &edited);
}
