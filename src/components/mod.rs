//! UI Components
//!
//! Leptos components projecting the todo store into the DOM.

mod add_todo_modal;
mod delete_confirm_button;
mod edit_todo_modal;
mod filter_bar;
mod stats_bar;
mod toast;
mod todo_list;
mod todo_row;

pub use add_todo_modal::AddTodoModal;
pub use delete_confirm_button::DeleteConfirmButton;
pub use edit_todo_modal::EditTodoModal;
pub use filter_bar::FilterBar;
pub use stats_bar::StatsBar;
pub use toast::Toast;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;

/// Input length cap, enforced at the modal boundary rather than the model
pub(crate) const MAX_TEXT_LEN: usize = 200;
/// Character counter switches to warning styling past this
pub(crate) const WARN_TEXT_LEN: usize = 180;
/// Delay before focusing a freshly opened modal input, so the open
/// transition can start first
pub(crate) const FOCUS_DELAY_MS: u32 = 100;
/// Duration of the rejected-input shake
pub(crate) const SHAKE_MS: u32 = 500;
