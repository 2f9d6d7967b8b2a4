//! Per-row view state for the task list.
//!
//! Each row is a transient copy of a task that is either on display or being
//! edited with a local draft. Rows are rebuilt from the canonical
//! [`TaskList`] whenever its revision moves. Under
//! [`ResyncPolicy::ResetAll`] that rebuild drops every open draft, including
//! drafts on rows unrelated to the change. This is the intended behavior,
//! not an accident; [`ResyncPolicy::KeepDrafts`] opts out of it.

use std::collections::HashMap;

use log::debug;

use crate::model::config::ResyncPolicy;
use crate::model::task::TaskId;
use crate::ops::task_ops::{Clock, TaskList};
use crate::ops::text_input::TextBuffer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowMode {
    Display,
    Editing { draft: TextBuffer },
}

/// A row's local copy of a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    pub title: String,
    pub done: bool,
    pub mode: RowMode,
}

impl TaskRow {
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, RowMode::Editing { .. })
    }

    /// The draft when editing
    pub fn draft(&self) -> Option<&TextBuffer> {
        match &self.mode {
            RowMode::Editing { draft } => Some(draft),
            RowMode::Display => None,
        }
    }
}

/// Result of committing a row edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Draft written to the task list; the row is back on display
    Committed,
    /// Draft was blank; the row stays in edit mode
    Rejected,
    /// The row does not exist or is not being edited
    NotEditing,
}

#[derive(Debug, Clone, Default)]
pub struct TaskRows {
    rows: Vec<TaskRow>,
    /// Task list revision the rows were last built from
    synced_revision: Option<u64>,
    policy: ResyncPolicy,
}

impl TaskRows {
    pub fn new(policy: ResyncPolicy) -> Self {
        TaskRows {
            rows: Vec::new(),
            synced_revision: None,
            policy,
        }
    }

    pub fn policy(&self) -> ResyncPolicy {
        self.policy
    }

    pub fn rows(&self) -> &[TaskRow] {
        &self.rows
    }

    pub fn row(&self, id: TaskId) -> Option<&TaskRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn editing_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_editing()).count()
    }

    /// Rebuild every row from the task list. Returns how many open drafts
    /// were discarded.
    pub fn resync<C: Clock>(&mut self, tasks: &TaskList<C>) -> usize {
        let open = self.editing_count();
        let mut kept: HashMap<TaskId, TextBuffer> = HashMap::new();
        if self.policy == ResyncPolicy::KeepDrafts {
            for row in self.rows.drain(..) {
                if let RowMode::Editing { draft } = row.mode {
                    kept.insert(row.id, draft);
                }
            }
        }

        self.rows = tasks
            .tasks()
            .iter()
            .map(|t| TaskRow {
                id: t.id,
                title: t.title.clone(),
                done: t.done,
                mode: match kept.remove(&t.id) {
                    Some(draft) => RowMode::Editing { draft },
                    None => RowMode::Display,
                },
            })
            .collect();
        self.synced_revision = Some(tasks.revision());

        let dropped = open - self.editing_count();
        if dropped > 0 {
            debug!("event=drafts_discarded count={}", dropped);
        }
        dropped
    }

    /// Resync if the task list changed since the last sync. Returns whether
    /// a resync happened.
    pub fn sync_if_stale<C: Clock>(&mut self, tasks: &TaskList<C>) -> bool {
        if self.synced_revision == Some(tasks.revision()) {
            return false;
        }
        self.resync(tasks);
        true
    }

    /// Display → Editing, with the current title as the draft.
    pub fn begin_edit(&mut self, id: TaskId) -> bool {
        match self.rows.iter_mut().find(|r| r.id == id) {
            Some(row) if !row.is_editing() => {
                row.mode = RowMode::Editing {
                    draft: TextBuffer::with_text(&row.title),
                };
                true
            }
            _ => false,
        }
    }

    /// Apply a local change to a row's draft. Nothing reaches the task list.
    pub fn update_draft(&mut self, id: TaskId, f: impl FnOnce(&mut TextBuffer)) -> bool {
        match self.rows.iter_mut().find(|r| r.id == id) {
            Some(TaskRow {
                mode: RowMode::Editing { draft },
                ..
            }) => {
                f(draft);
                true
            }
            _ => false,
        }
    }

    /// Write the draft to the task list and return to display.
    pub fn commit_edit<C: Clock>(&mut self, id: TaskId, tasks: &mut TaskList<C>) -> CommitOutcome {
        let Some(draft) = self.row(id).and_then(TaskRow::draft) else {
            return CommitOutcome::NotEditing;
        };
        let title = draft.text().trim();
        if title.is_empty() {
            return CommitOutcome::Rejected;
        }
        let title = title.to_string();

        // The row leaves edit mode first so a KeepDrafts resync does not
        // carry the committed draft forward.
        if let Some(row) = self.rows.iter_mut().find(|r| r.id == id) {
            row.mode = RowMode::Display;
        }
        if !tasks.edit_task(id, title) {
            self.sync_if_stale(tasks);
            return CommitOutcome::NotEditing;
        }
        self.resync(tasks);
        CommitOutcome::Committed
    }

    /// Leave edit mode, discarding the draft and restoring the title from the
    /// task list. The task list itself is not touched.
    pub fn cancel_edit<C: Clock>(&mut self, id: TaskId, tasks: &TaskList<C>) -> bool {
        let Some(row) = self.rows.iter_mut().find(|r| r.id == id) else {
            return false;
        };
        if !row.is_editing() {
            return false;
        }
        if let Some(task) = tasks.get(id) {
            row.title = task.title.clone();
        }
        row.mode = RowMode::Display;
        true
    }
}
