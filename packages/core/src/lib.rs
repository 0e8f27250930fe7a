//! Core domain types for the operations scheduler.
//!
//! This crate contains shared types used across all packages:
//! - Jobs, indexes and team members for the calendar
//! - Time slots, companies, task groups and sign-offs for the dashboard
//! - Calendar projection and layout helpers
//! - Screen view-models with their state transitions

mod error;
mod ids;
mod index;
mod job;
mod tasks;
mod team;

pub mod calendar;
pub mod submit;
pub mod view;

pub use error::ValidationError;
pub use ids::{CompanyId, IndexId, JobId, SignOffId, TaskGroupId, TaskId, TeamMemberId, TimeSlotId};
pub use index::{Index, IndexForm};
pub use job::{AssignJobRequest, DEFAULT_JOB_COLOR, JOB_COLOR_PRESETS, Job, NewJob, UNASSIGNED_LABEL};
pub use tasks::{Company, LatestSignOff, SignOff, SignOffRequest, Task, TaskGroup, TimeSlot};
pub use team::{TeamMember, TeamMemberForm};
