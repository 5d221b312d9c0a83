//! Default board content, used when storage holds nothing usable.

use crate::board::Board;
use crate::domain::{Id, Status, Task};

pub fn default_statuses() -> Vec<Status> {
    vec![
        Status::with_color(Id::from("todo"), "Not Started", "coral"),
        Status::with_color(Id::from("doing"), "In Progress", "darkgoldenrod"),
        Status::with_color(Id::from("completed"), "Completed", "green"),
    ]
}

pub fn default_tasks() -> Vec<Task> {
    [
        ("1", "todo", "Card 4"),
        ("2", "todo", "Card 1"),
        ("3", "todo", "Card 5"),
        ("4", "doing", "Card 2"),
        ("5", "completed", "Card 3"),
    ]
    .into_iter()
    .map(|(id, status_id, content)| Task::new(Id::from(id), Id::from(status_id), content))
    .collect()
}

/// Three columns and five cards.
pub fn default_board() -> Board {
    Board::new(default_statuses(), default_tasks())
}
