//! Calendar screen and its job dialogs.

mod assign_dialog;
mod calendar_grid;
mod create_dialog;
mod page;

pub use assign_dialog::AssignJobDialog;
pub use calendar_grid::CalendarGrid;
pub use create_dialog::CreateJobDialog;
pub use page::SchedulerPage;
