//! Board State
//!
//! The in-memory columns and cards plus every operation that changes them.
//! Operations are strict: a missing id is reported as an error and nothing
//! changes. The controller decides what a miss means to the caller.

use tracing::debug;

use crate::domain::{position_of, BoardError, BoardResult, Id, Status, Task};
use crate::ids::next_id;

/// Columns and cards, both in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    statuses: Vec<Status>,
    tasks: Vec<Task>,
}

impl Board {
    pub fn new(statuses: Vec<Status>, tasks: Vec<Task>) -> Self {
        Self { statuses, tasks }
    }

    pub fn statuses(&self) -> &[Status] {
        &self.statuses
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn status(&self, id: &Id) -> Option<&Status> {
        self.statuses.iter().find(|s| &s.id == id)
    }

    pub fn task(&self, id: &Id) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Cards of one column, in board order
    pub fn tasks_in<'a>(&'a self, status_id: &'a Id) -> impl Iterator<Item = &'a Task> + 'a {
        self.tasks.iter().filter(move |t| &t.status_id == status_id)
    }

    pub fn task_count(&self, status_id: &Id) -> usize {
        self.tasks_in(status_id).count()
    }

    /// Card count for every column, in column order.
    ///
    /// Recomputed on each call.
    pub fn task_counts(&self) -> Vec<(Id, usize)> {
        self.statuses
            .iter()
            .map(|s| (s.id.clone(), self.task_count(&s.id)))
            .collect()
    }

    /// Append a column titled `Status {n+1}`.
    pub fn create_status(&mut self) -> Id {
        let id = next_id(&self.statuses);
        let title = format!("Status {}", self.statuses.len() + 1);
        debug!(%id, %title, "creating status");
        self.statuses.push(Status::new(id.clone(), title));
        id
    }

    pub fn rename_status(&mut self, id: &Id, title: impl Into<String>) -> BoardResult<()> {
        let status = self
            .statuses
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or_else(|| BoardError::StatusNotFound(id.clone()))?;
        status.title = title.into();
        Ok(())
    }

    /// Remove a column and every card in it.
    ///
    /// Both vectors are replaced together. Returns the number of cards removed.
    pub fn delete_status(&mut self, id: &Id) -> BoardResult<usize> {
        if position_of(&self.statuses, id).is_none() {
            return Err(BoardError::StatusNotFound(id.clone()));
        }

        let statuses: Vec<Status> = self.statuses.iter().filter(|s| &s.id != id).cloned().collect();
        let tasks: Vec<Task> = self.tasks.iter().filter(|t| &t.status_id != id).cloned().collect();
        let removed = self.tasks.len() - tasks.len();

        self.statuses = statuses;
        self.tasks = tasks;
        debug!(%id, removed, "deleted status");
        Ok(removed)
    }

    /// Append a card titled `Card {n+1}` to an existing column.
    pub fn create_task(&mut self, status_id: &Id) -> BoardResult<Id> {
        if self.status(status_id).is_none() {
            return Err(BoardError::StatusNotFound(status_id.clone()));
        }

        let id = next_id(&self.tasks);
        let content = format!("Card {}", self.tasks.len() + 1);
        debug!(%id, %status_id, %content, "creating task");
        self.tasks.push(Task::new(id.clone(), status_id.clone(), content));
        Ok(id)
    }

    pub fn rename_task(&mut self, id: &Id, content: impl Into<String>) -> BoardResult<()> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| BoardError::TaskNotFound(id.clone()))?;
        task.content = content.into();
        Ok(())
    }

    pub fn delete_task(&mut self, id: &Id) -> BoardResult<()> {
        let index = position_of(&self.tasks, id).ok_or_else(|| BoardError::TaskNotFound(id.clone()))?;
        self.tasks.remove(index);
        Ok(())
    }

    pub(crate) fn replace_statuses(&mut self, statuses: Vec<Status>) {
        self.statuses = statuses;
    }

    pub(crate) fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }
}

/// New vector with the element at `from` moved to `to`.
///
/// The element is removed first and then inserted, so every element between
/// the two positions shifts by one.
pub fn move_item<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut moved = items.to_vec();
    if from >= moved.len() || to >= moved.len() || from == to {
        return moved;
    }
    let item = moved.remove(from);
    moved.insert(to, item);
    moved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::default_board;

    fn ids_of(tasks: &[Task]) -> Vec<String> {
        tasks.iter().map(|t| t.id.to_string()).collect()
    }

    #[test]
    fn test_create_status_title_and_color() {
        let mut board = default_board();
        let id = board.create_status();

        let status = board.statuses().last().unwrap();
        assert_eq!(status.id, id);
        assert_eq!(status.title, "Status 4");
        assert!(status.background_color.is_empty());
    }

    #[test]
    fn test_create_status_ids_are_unique() {
        let mut board = Board::default();
        let a = board.create_status();
        let b = board.create_status();
        assert_ne!(a, b);
        assert_eq!(board.statuses()[1].title, "Status 2");
    }

    #[test]
    fn test_rename_status() {
        let mut board = default_board();
        board.rename_status(&Id::from("doing"), "Review").unwrap();
        assert_eq!(board.status(&Id::from("doing")).unwrap().title, "Review");
    }

    #[test]
    fn test_rename_missing_status_changes_nothing() {
        let mut board = default_board();
        let before = board.clone();
        let err = board.rename_status(&Id::from("nope"), "x").unwrap_err();
        assert_eq!(err, BoardError::StatusNotFound(Id::from("nope")));
        assert_eq!(board, before);
    }

    #[test]
    fn test_delete_status_cascades() {
        let mut board = default_board();
        let removed = board.delete_status(&Id::from("todo")).unwrap();

        assert_eq!(removed, 3);
        assert_eq!(ids_of(board.tasks()), vec!["4", "5"]);
        assert!(board.status(&Id::from("todo")).is_none());
    }

    #[test]
    fn test_create_task_in_unknown_status_is_rejected() {
        let mut board = default_board();
        let err = board.create_task(&Id::from("archive")).unwrap_err();
        assert_eq!(err, BoardError::StatusNotFound(Id::from("archive")));
        assert_eq!(board.tasks().len(), 5);
    }

    #[test]
    fn test_create_task_content_counts_all_columns() {
        let mut board = default_board();
        board.create_task(&Id::from("completed")).unwrap();
        board.create_task(&Id::from("todo")).unwrap();

        let last = board.tasks().last().unwrap();
        assert_eq!(last.content, "Card 7");
        assert_eq!(last.status_id, Id::from("todo"));
        assert_eq!(last.id, Id::Number(7));
    }

    #[test]
    fn test_rename_and_delete_task() {
        let mut board = default_board();
        board.rename_task(&Id::from("2"), "Write docs").unwrap();
        assert_eq!(board.task(&Id::from("2")).unwrap().content, "Write docs");

        board.delete_task(&Id::from("2")).unwrap();
        assert!(board.task(&Id::from("2")).is_none());
        assert_eq!(
            board.delete_task(&Id::from("2")),
            Err(BoardError::TaskNotFound(Id::from("2")))
        );
    }

    #[test]
    fn test_task_counts_follow_column_order() {
        let board = default_board();
        assert_eq!(
            board.task_counts(),
            vec![
                (Id::from("todo"), 3),
                (Id::from("doing"), 1),
                (Id::from("completed"), 1),
            ]
        );
    }

    #[test]
    fn test_tasks_in_keeps_board_order() {
        let board = default_board();
        let todo = Id::from("todo");
        let contents: Vec<&str> = board.tasks_in(&todo).map(|t| t.content.as_str()).collect();
        assert_eq!(contents, vec!["Card 4", "Card 1", "Card 5"]);
    }

    #[test]
    fn test_move_item() {
        let items = vec!['a', 'b', 'c', 'd'];
        assert_eq!(move_item(&items, 0, 2), vec!['b', 'c', 'a', 'd']);
        assert_eq!(move_item(&items, 3, 1), vec!['a', 'd', 'b', 'c']);
        assert_eq!(move_item(&items, 1, 1), items);
        assert_eq!(move_item(&items, 9, 0), items);
    }
}
