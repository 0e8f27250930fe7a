//! Create-job dialog state.

use chrono::{DateTime, Duration, Utc};

use crate::error::{ValidationError, require};
use crate::submit::{Submission, SubmitGuard};
use crate::{DEFAULT_JOB_COLOR, IndexId, NewJob, TeamMemberId};

/// Default length of a new job.
pub const DEFAULT_JOB_DURATION_HOURS: i64 = 2;

pub const CREATE_JOB_FAILED: &str = "Failed to create job. Please try again.";

/// A single field edit in the create dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum JobFormChange {
    Title(String),
    Index(Option<IndexId>),
    Start(DateTime<Utc>),
    End(DateTime<Utc>),
    AssignedTo(Option<TeamMemberId>),
    Notes(String),
    Color(String),
}

/// Fields and submit state of the create-job dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateJobForm {
    pub title: String,
    pub index: Option<IndexId>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub assigned_to: Option<TeamMemberId>,
    pub notes: String,
    pub color: String,
    /// Inline validation message.
    pub error: Option<ValidationError>,
    /// Blocking alert after a failed request.
    pub alert: Option<String>,
    pub submit: SubmitGuard,
}

impl CreateJobForm {
    /// A blank form starting at `start` and lasting the default duration.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            title: String::new(),
            index: None,
            start,
            end: start + Duration::hours(DEFAULT_JOB_DURATION_HOURS),
            assigned_to: None,
            notes: String::new(),
            color: DEFAULT_JOB_COLOR.to_string(),
            error: None,
            alert: None,
            submit: SubmitGuard::default(),
        }
    }

    pub fn update(&mut self, change: JobFormChange) {
        match change {
            JobFormChange::Title(title) => self.title = title,
            JobFormChange::Index(index) => self.index = index,
            JobFormChange::Start(start) => self.start = start,
            JobFormChange::End(end) => self.end = end,
            JobFormChange::AssignedTo(member) => self.assigned_to = member,
            JobFormChange::Notes(notes) => self.notes = notes,
            JobFormChange::Color(color) => self.color = color,
        }
        self.error = None;
        self.submit.invalidate();
    }

    /// Build the request body. End before start is left for the server to judge.
    pub fn validate(&self) -> Result<NewJob, ValidationError> {
        require(&self.title, "Title")?;
        let index = self.index.ok_or(ValidationError::MissingField("Index"))?;
        let color = if self.color.trim().is_empty() {
            DEFAULT_JOB_COLOR.to_string()
        } else {
            self.color.clone()
        };

        Ok(NewJob {
            title: self.title.trim().to_string(),
            index,
            start_time: self.start,
            end_time: self.end,
            assigned_to: self.assigned_to,
            notes: self.notes.clone(),
            color,
        })
    }

    /// Validate and claim the submit slot.
    pub fn begin_submit(&mut self) -> Option<Submission<NewJob>> {
        let body = match self.validate() {
            Ok(body) => body,
            Err(e) => {
                self.error = Some(e);
                return None;
            }
        };
        let key = self.submit.begin()?;
        Some(Submission { body, key })
    }

    pub fn submit_failed(&mut self, error: &dyn std::fmt::Display) {
        tracing::error!("Error creating job: {}", error);
        self.submit.fail();
        self.alert = Some(CREATE_JOB_FAILED.to_string());
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn is_submitting(&self) -> bool {
        self.submit.in_flight()
    }
}
