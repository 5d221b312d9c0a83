//! Board Controller
//!
//! Owns the board, the drag reconciler and the store. Every change is saved
//! as a full snapshot before the call returns.

use tracing::{debug, warn};

use crate::board::Board;
use crate::config::{BoardConfig, LookupPolicy};
use crate::domain::{BoardResult, Id};
use crate::persistence::{load_board, save_board, KeyValueStore, LoadSource};
use crate::reconciler::{DragItem, DragOutcome, Reconciler};

#[derive(Debug)]
pub struct BoardController<S> {
    board: Board,
    drag: Reconciler,
    store: S,
    config: BoardConfig,
    source: LoadSource,
    /// A write failed during the current drag and was already reported
    drag_write_failed: bool,
}

impl<S: KeyValueStore> BoardController<S> {
    /// Restore the board from `store`.
    pub fn load(store: S, config: BoardConfig) -> Self {
        let loaded = load_board(&store, &config);
        Self {
            board: loaded.board,
            drag: Reconciler::new(),
            store,
            config,
            source: loaded.source,
            drag_write_failed: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn drag(&self) -> &Reconciler {
        &self.drag
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn load_source(&self) -> LoadSource {
        self.source
    }

    pub fn save(&self) -> BoardResult<()> {
        save_board(&self.store, &self.config, &self.board)
    }

    pub fn task_counts(&self) -> Vec<(Id, usize)> {
        self.board.task_counts()
    }

    pub fn create_status(&mut self) -> BoardResult<Id> {
        let id = self.board.create_status();
        self.save()?;
        Ok(id)
    }

    pub fn rename_status(&mut self, id: &Id, title: impl Into<String>) -> BoardResult<()> {
        let result = self.board.rename_status(id, title);
        self.commit(result)
    }

    pub fn delete_status(&mut self, id: &Id) -> BoardResult<()> {
        let result = self.board.delete_status(id).map(|removed| {
            debug!(%id, removed, "status deleted with its cards");
        });
        self.commit(result)
    }

    /// Unknown columns are always reported, whatever the lookup policy.
    pub fn create_task(&mut self, status_id: &Id) -> BoardResult<Id> {
        let id = self.board.create_task(status_id)?;
        self.save()?;
        Ok(id)
    }

    pub fn rename_task(&mut self, id: &Id, content: impl Into<String>) -> BoardResult<()> {
        let result = self.board.rename_task(id, content);
        self.commit(result)
    }

    pub fn delete_task(&mut self, id: &Id) -> BoardResult<()> {
        let result = self.board.delete_task(id);
        self.commit(result)
    }

    pub fn drag_start(&mut self, source: &DragItem) -> bool {
        self.drag_write_failed = false;
        self.drag.start(&self.board, source)
    }

    pub fn drag_over(&mut self, over: &DragItem) -> BoardResult<DragOutcome> {
        let outcome = self.drag.over(&mut self.board, over);
        self.persist_drag(outcome)
    }

    pub fn drag_end(&mut self, over: Option<&DragItem>) -> BoardResult<DragOutcome> {
        let outcome = self.drag.end(&mut self.board, over);
        self.persist_drag(outcome)
    }

    pub fn drag_cancel(&mut self) -> BoardResult<DragOutcome> {
        let outcome = self.drag.cancel(&mut self.board);
        self.persist_drag(outcome)
    }

    /// Save a drag change. A failed write is reported once per gesture;
    /// later moves stay in memory and the write is retried when the gesture
    /// ends.
    fn persist_drag(&mut self, outcome: DragOutcome) -> BoardResult<DragOutcome> {
        let finished = !self.drag.is_dragging();
        if !outcome.changed() && !(finished && self.drag_write_failed) {
            return Ok(outcome);
        }
        if self.drag_write_failed && !finished {
            return Ok(outcome);
        }

        let reported = std::mem::replace(&mut self.drag_write_failed, !finished);
        match self.save() {
            Ok(()) => {
                self.drag_write_failed = false;
                Ok(outcome)
            }
            Err(err) if reported => {
                debug!(%err, "drag write failed again");
                self.drag_write_failed = false;
                Ok(outcome)
            }
            Err(err) => Err(err),
        }
    }

    /// Save after a successful edit, or apply the lookup policy to a miss.
    fn commit(&self, result: BoardResult<()>) -> BoardResult<()> {
        match result {
            Ok(()) => self.save(),
            Err(err) if err.is_lookup_miss() => match self.config.lookup_policy {
                LookupPolicy::Ignore => Ok(()),
                LookupPolicy::Log => {
                    warn!(%err, "ignoring edit of missing entity");
                    Ok(())
                }
                LookupPolicy::Reject => Err(err),
            },
            Err(err) => Err(err),
        }
    }
}
