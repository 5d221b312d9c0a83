//! UI Components
//!
//! Leptos components for the board.

mod board;
mod delete_status_button;
mod drag_overlay;
mod error_banner;
mod status_column;
mod task_card;

pub use board::KanbanBoard;
pub use delete_status_button::DeleteStatusButton;
pub use drag_overlay::DragOverlay;
pub use error_banner::ErrorBanner;
pub use status_column::StatusColumn;
pub use task_card::TaskCard;
