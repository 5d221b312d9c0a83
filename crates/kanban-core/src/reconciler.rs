//! Drag Reconciler
//!
//! Turns the start/over/end/cancel events of one drag gesture into column
//! and card moves.
//!
//! Cards follow the pointer live: every `over` event reassigns and reorders
//! the dragged card. Columns only move when the gesture ends.

use tracing::debug;

use crate::board::{move_item, Board};
use crate::domain::{position_of, Id, Status, Task};

/// Something that can be dragged or dropped onto
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DragItem {
    Status(Id),
    Task(Id),
}

impl DragItem {
    pub fn id(&self) -> &Id {
        match self {
            DragItem::Status(id) | DragItem::Task(id) => id,
        }
    }
}

/// Gesture state. The captured entity drives the drag preview.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    DraggingStatus(Status),
    DraggingTask(Task),
}

/// Which collection a drag event replaced, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    Unchanged,
    TasksChanged,
    StatusesChanged,
}

impl DragOutcome {
    pub fn changed(self) -> bool {
        self != DragOutcome::Unchanged
    }
}

#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    state: DragState,
    /// Card order when a card drag started, restored on cancel
    origin_tasks: Option<Vec<Task>>,
}

impl Reconciler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state != DragState::Idle
    }

    /// The element being dragged
    pub fn active(&self) -> Option<DragItem> {
        match &self.state {
            DragState::Idle => None,
            DragState::DraggingStatus(s) => Some(DragItem::Status(s.id.clone())),
            DragState::DraggingTask(t) => Some(DragItem::Task(t.id.clone())),
        }
    }

    /// Capture the dragged entity. Unknown ids leave the reconciler idle.
    pub fn start(&mut self, board: &Board, source: &DragItem) -> bool {
        self.origin_tasks = None;
        self.state = match source {
            DragItem::Status(id) => match board.status(id) {
                Some(status) => DragState::DraggingStatus(status.clone()),
                None => DragState::Idle,
            },
            DragItem::Task(id) => match board.task(id) {
                Some(task) => {
                    self.origin_tasks = Some(board.tasks().to_vec());
                    DragState::DraggingTask(task.clone())
                }
                None => DragState::Idle,
            },
        };
        debug!(?source, dragging = self.is_dragging(), "drag start");
        self.is_dragging()
    }

    /// Pointer is over `over`. Only card drags react.
    pub fn over(&mut self, board: &mut Board, over: &DragItem) -> DragOutcome {
        let DragState::DraggingTask(active) = &self.state else {
            return DragOutcome::Unchanged;
        };
        if matches!(over, DragItem::Task(id) if id == &active.id) {
            return DragOutcome::Unchanged;
        }

        let tasks = board.tasks();
        let Some(from) = position_of(tasks, &active.id) else {
            return DragOutcome::Unchanged;
        };

        let (status_id, to) = match over {
            DragItem::Task(over_id) => match position_of(tasks, over_id) {
                Some(to) => (tasks[to].status_id.clone(), to),
                None => return DragOutcome::Unchanged,
            },
            DragItem::Status(status_id) => {
                if board.status(status_id).is_none() {
                    return DragOutcome::Unchanged;
                }
                (status_id.clone(), from)
            }
        };

        let mut reassigned = tasks.to_vec();
        reassigned[from] = Task {
            status_id,
            ..tasks[from].clone()
        };
        let next = move_item(&reassigned, from, to);

        if next.as_slice() == board.tasks() {
            return DragOutcome::Unchanged;
        }
        debug!(task = %active.id, ?over, from, to, "drag over");
        board.replace_tasks(next);
        DragOutcome::TasksChanged
    }

    /// Finish the gesture. Always returns to idle; nothing is rolled back.
    pub fn end(&mut self, board: &mut Board, over: Option<&DragItem>) -> DragOutcome {
        let state = std::mem::take(&mut self.state);
        self.origin_tasks = None;

        let (DragState::DraggingStatus(active), Some(over)) = (state, over) else {
            return DragOutcome::Unchanged;
        };

        // A card stands in for the column that holds it.
        let target = match over {
            DragItem::Status(id) => id.clone(),
            DragItem::Task(id) => match board.task(id) {
                Some(task) => task.status_id.clone(),
                None => return DragOutcome::Unchanged,
            },
        };
        if target == active.id {
            return DragOutcome::Unchanged;
        }

        let statuses = board.statuses();
        let (Some(from), Some(to)) = (position_of(statuses, &active.id), position_of(statuses, &target)) else {
            return DragOutcome::Unchanged;
        };
        debug!(status = %active.id, %target, from, to, "drag end");
        let next = move_item(statuses, from, to);
        board.replace_statuses(next);
        DragOutcome::StatusesChanged
    }

    /// Abort the gesture and put the cards back where they were.
    pub fn cancel(&mut self, board: &mut Board) -> DragOutcome {
        self.state = DragState::Idle;
        match self.origin_tasks.take() {
            Some(origin) if origin.as_slice() != board.tasks() => {
                debug!("drag cancelled, restoring card order");
                board.replace_tasks(origin);
                DragOutcome::TasksChanged
            }
            _ => DragOutcome::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::default_board;

    fn task(id: &str) -> DragItem {
        DragItem::Task(Id::from(id))
    }

    fn status(id: &str) -> DragItem {
        DragItem::Status(Id::from(id))
    }

    fn order(board: &Board) -> Vec<String> {
        board.tasks().iter().map(|t| format!("{}@{}", t.id, t.status_id)).collect()
    }

    #[test]
    fn test_start_captures_entity() {
        let board = default_board();
        let mut drag = Reconciler::new();

        assert!(drag.start(&board, &task("4")));
        assert!(matches!(drag.state(), DragState::DraggingTask(t) if t.content == "Card 2"));
        assert_eq!(drag.active(), Some(task("4")));

        assert!(drag.start(&board, &status("doing")));
        assert!(matches!(drag.state(), DragState::DraggingStatus(s) if s.title == "In Progress"));
    }

    #[test]
    fn test_start_unknown_id_stays_idle() {
        let board = default_board();
        let mut drag = Reconciler::new();
        assert!(!drag.start(&board, &task("99")));
        assert_eq!(drag.state(), &DragState::Idle);
    }

    #[test]
    fn test_task_over_task_in_other_column() {
        let mut board = default_board();
        let mut drag = Reconciler::new();
        drag.start(&board, &task("1"));

        assert_eq!(drag.over(&mut board, &task("4")), DragOutcome::TasksChanged);
        assert_eq!(
            order(&board),
            vec!["2@todo", "3@todo", "4@doing", "1@doing", "5@completed"]
        );
    }

    #[test]
    fn test_task_over_task_moving_up() {
        let mut board = default_board();
        let mut drag = Reconciler::new();
        drag.start(&board, &task("5"));

        drag.over(&mut board, &task("2"));
        assert_eq!(
            order(&board),
            vec!["1@todo", "5@todo", "2@todo", "3@todo", "4@doing"]
        );
    }

    #[test]
    fn test_task_over_empty_column() {
        let mut board = default_board();
        let new_status = board.create_status();
        let mut drag = Reconciler::new();
        drag.start(&board, &task("2"));

        let outcome = drag.over(&mut board, &DragItem::Status(new_status.clone()));
        assert_eq!(outcome, DragOutcome::TasksChanged);
        assert_eq!(board.tasks()[1].status_id, new_status);
        assert_eq!(board.tasks()[1].id, Id::from("2"));
    }

    #[test]
    fn test_task_over_own_column_is_unchanged() {
        let mut board = default_board();
        let mut drag = Reconciler::new();
        drag.start(&board, &task("2"));
        assert_eq!(drag.over(&mut board, &status("todo")), DragOutcome::Unchanged);
    }

    #[test]
    fn test_task_over_itself_is_noop() {
        let mut board = default_board();
        let before = board.clone();
        let mut drag = Reconciler::new();
        drag.start(&board, &task("3"));

        assert_eq!(drag.over(&mut board, &task("3")), DragOutcome::Unchanged);
        assert_eq!(drag.end(&mut board, Some(&task("3"))), DragOutcome::Unchanged);
        assert_eq!(board, before);
    }

    #[test]
    fn test_status_drag_ignores_over() {
        let mut board = default_board();
        let before = board.clone();
        let mut drag = Reconciler::new();
        drag.start(&board, &status("todo"));

        assert_eq!(drag.over(&mut board, &status("completed")), DragOutcome::Unchanged);
        assert_eq!(drag.over(&mut board, &task("5")), DragOutcome::Unchanged);
        assert_eq!(board, before);
    }

    #[test]
    fn test_status_moves_on_end() {
        let mut board = default_board();
        let mut drag = Reconciler::new();
        drag.start(&board, &status("todo"));

        assert_eq!(drag.end(&mut board, Some(&status("completed"))), DragOutcome::StatusesChanged);
        let ids: Vec<String> = board.statuses().iter().map(|s| s.id.to_string()).collect();
        assert_eq!(ids, vec!["doing", "completed", "todo"]);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_status_dropped_on_card_uses_card_column() {
        let mut board = default_board();
        let mut drag = Reconciler::new();
        drag.start(&board, &status("completed"));

        drag.end(&mut board, Some(&task("1")));
        let ids: Vec<String> = board.statuses().iter().map(|s| s.id.to_string()).collect();
        assert_eq!(ids, vec!["completed", "todo", "doing"]);
    }

    #[test]
    fn test_status_onto_itself_is_noop() {
        let mut board = default_board();
        let before = board.clone();
        let mut drag = Reconciler::new();
        drag.start(&board, &status("doing"));

        assert_eq!(drag.end(&mut board, Some(&status("doing"))), DragOutcome::Unchanged);
        assert_eq!(board, before);
    }

    #[test]
    fn test_end_over_nothing_keeps_live_changes() {
        let mut board = default_board();
        let mut drag = Reconciler::new();
        drag.start(&board, &task("1"));
        drag.over(&mut board, &status("completed"));

        assert_eq!(drag.end(&mut board, None), DragOutcome::Unchanged);
        assert_eq!(board.task(&Id::from("1")).unwrap().status_id, Id::from("completed"));
        assert_eq!(drag.state(), &DragState::Idle);
    }

    #[test]
    fn test_cancel_restores_card_order() {
        let mut board = default_board();
        let before = board.clone();
        let mut drag = Reconciler::new();
        drag.start(&board, &task("1"));
        drag.over(&mut board, &task("5"));
        assert_ne!(board, before);

        assert_eq!(drag.cancel(&mut board), DragOutcome::TasksChanged);
        assert_eq!(board, before);
        assert!(!drag.is_dragging());
        assert_eq!(drag.cancel(&mut board), DragOutcome::Unchanged);
    }
}
