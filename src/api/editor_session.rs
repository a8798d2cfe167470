use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::core::{ChartSpec, VisualEditorUpdate};
use crate::error::{SpecResult, SpecViolation};

use super::{ChartCatalog, ChartDefinition, EditorSessionConfig, spec_update_engine};

/// One user's in-progress edit of a chart definition.
///
/// Updates go through [`spec_update_engine::apply`] in the order they are
/// issued. A failed update leaves the working spec and history untouched.
#[derive(Debug, Clone)]
pub struct EditorSession {
    definition_id: String,
    base: ChartSpec,
    current: ChartSpec,
    undo_stack: VecDeque<ChartSpec>,
    redo_stack: Vec<ChartSpec>,
    config: EditorSessionConfig,
    revision: u64,
}

impl EditorSession {
    /// Starts from a deep copy of the definition's base spec.
    pub fn new(definition: &ChartDefinition, config: EditorSessionConfig) -> SpecResult<Self> {
        definition
            .base_spec
            .validate()
            .map_err(SpecViolation::into_invariant_error)?;
        debug!(id = %definition.id, "open editor session");
        Ok(Self {
            definition_id: definition.id.clone(),
            base: definition.base_spec.clone(),
            current: definition.base_spec.clone(),
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            config,
            revision: 0,
        })
    }

    /// Looks up `id` in the catalog and opens a session on it.
    pub fn open(catalog: &ChartCatalog, id: &str, config: EditorSessionConfig) -> SpecResult<Self> {
        Self::new(catalog.get(id)?, config)
    }

    #[must_use]
    pub fn definition_id(&self) -> &str {
        &self.definition_id
    }

    #[must_use]
    pub fn current(&self) -> &ChartSpec {
        &self.current
    }

    #[must_use]
    pub fn base(&self) -> &ChartSpec {
        &self.base
    }

    /// Count of successful state changes (apply, reset, undo, redo).
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn apply(&mut self, update: &VisualEditorUpdate) -> SpecResult<&ChartSpec> {
        let next = spec_update_engine::apply(&self.current, update)?;
        self.commit(next);
        Ok(&self.current)
    }

    /// Restores the base spec. Returns `false` when already at base.
    pub fn reset(&mut self) -> bool {
        if self.current == self.base {
            return false;
        }
        self.commit(self.base.clone());
        true
    }

    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.undo_stack.pop_back() else {
            return false;
        };
        let replaced = std::mem::replace(&mut self.current, previous);
        self.redo_stack.push(replaced);
        self.revision += 1;
        trace!(revision = self.revision, "undo editor update");
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        let replaced = std::mem::replace(&mut self.current, next);
        self.push_undo(replaced);
        self.revision += 1;
        trace!(revision = self.revision, "redo editor update");
        true
    }

    fn commit(&mut self, next: ChartSpec) {
        let previous = std::mem::replace(&mut self.current, next);
        self.push_undo(previous);
        self.redo_stack.clear();
        self.revision += 1;
        trace!(
            revision = self.revision,
            undo_depth = self.undo_stack.len(),
            "commit working specification"
        );
    }

    fn push_undo(&mut self, spec: ChartSpec) {
        if self.config.history_limit == 0 {
            return;
        }
        while self.undo_stack.len() >= self.config.history_limit {
            self.undo_stack.pop_front();
        }
        self.undo_stack.push_back(spec);
    }
}
