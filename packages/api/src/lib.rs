//! HTTP client for the scheduling REST API.
//!
//! This crate contains the typed calls used by every screen:
//! - Jobs (list, create, assign)
//! - Team members and indexes (generic CRUD)
//! - Time slots, companies with tasks, sign-offs and history
//! - Combined loaders for the scheduler and dashboard screens

mod client;
mod config;
mod error;
mod jobs;
mod load;
mod registry;
mod tasks;

pub use client::{IDEMPOTENCY_HEADER, SchedulerClient, client};
pub use config::{API_URL_ENV, ApiConfig, DEFAULT_API_URL};
pub use error::ApiError;
pub use jobs::JobFilter;
pub use registry::RegistryEndpoint;

// Re-export core types for convenience
pub use scheduler_core::{
    AssignJobRequest, Company, Index, IndexForm, Job, JobId, NewJob, SignOff, SignOffRequest,
    TeamMember, TeamMemberForm, TimeSlot,
};
