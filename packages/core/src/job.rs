//! Job domain types for calendar work items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{IndexId, JobId, TeamMemberId};

/// Color used when a job has none set.
pub const DEFAULT_JOB_COLOR: &str = "#3174ad";

/// Quick-pick swatches offered by the create dialog.
pub const JOB_COLOR_PRESETS: [&str; 5] = ["#3174ad", "#ff6b6b", "#5cb85c", "#f0ad4e", "#9467bd"];

/// Label shown when a job has no assignee.
pub const UNASSIGNED_LABEL: &str = "Unassigned";

/// A scheduled unit of work shown as a calendar event.
///
/// `index_name` and `assigned_to_name` are computed by the server and are
/// never joined locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    /// Owning index.
    pub index: IndexId,
    #[serde(default)]
    pub index_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub assigned_to: Option<TeamMemberId>,
    #[serde(default)]
    pub assigned_to_name: Option<String>,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub notes: String,
}

impl Job {
    /// Color to paint the event with, falling back to the default.
    pub fn display_color(&self) -> &str {
        if self.color.trim().is_empty() {
            DEFAULT_JOB_COLOR
        } else {
            &self.color
        }
    }

    /// Assignee name for display, or "Unassigned".
    pub fn assignee_label(&self) -> &str {
        self.assigned_to_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(UNASSIGNED_LABEL)
    }

    /// Take the assignment fields from the server's copy of this job.
    pub fn apply_assignment(&mut self, updated: &Job) {
        self.assigned_to = updated.assigned_to;
        self.assigned_to_name = updated.assigned_to_name.clone();
    }
}

/// Body for `POST /api/jobs/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewJob {
    pub title: String,
    pub index: IndexId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub assigned_to: Option<TeamMemberId>,
    pub notes: String,
    pub color: String,
}

/// Body for `PUT /api/assign-job/{id}/`. `None` unassigns the job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignJobRequest {
    pub team_member_id: Option<TeamMemberId>,
}
