//! Daily task dashboard and sign-off flow.

mod history_panel;
mod page;
mod signoff_dialog;
mod task_group_card;

pub use history_panel::HistoryPanel;
pub use page::TaskDashboardPage;
pub use signoff_dialog::SignOffDialog;
pub use task_group_card::TaskGroupCard;
