//! Per-screen view-models.
//!
//! Each screen owns one of these inside a signal. Components call the
//! transition methods and perform whatever request a transition hands back.

mod assign_job;
mod create_job;
mod dashboard;
mod registry;
mod scheduler;
mod signoff;

pub use assign_job::{ASSIGN_JOB_FAILED, AssignJobForm};
pub use create_job::{CREATE_JOB_FAILED, CreateJobForm, DEFAULT_JOB_DURATION_HOURS, JobFormChange};
pub use dashboard::{
    DashboardData, DashboardState, HISTORY_LIMIT, INITIAL_LOAD_FAILED, LoadPhase, SIGN_OFF_FAILED,
    TASKS_LOAD_FAILED, TaskQuery,
};
pub use registry::{Editor, EditorMode, RegistryEntity, RegistryState, RegistryWrite};
pub use scheduler::{SchedulerData, SchedulerDialog, SchedulerState};
pub use signoff::{SignOffConfirmation, SignOffDialogState, SignOffStep};
