//! Assign-job dialog state.

use chrono::TimeZone;

use crate::submit::{Submission, SubmitGuard};
use crate::{AssignJobRequest, Job, TeamMemberId};

pub const ASSIGN_JOB_FAILED: &str = "Failed to assign job. Please try again.";

/// Read-only job details plus the one editable field: the assignee.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignJobForm {
    pub job: Job,
    pub selected: Option<TeamMemberId>,
    pub alert: Option<String>,
    pub submit: SubmitGuard,
}

impl AssignJobForm {
    pub fn new(job: Job) -> Self {
        Self {
            selected: job.assigned_to,
            job,
            alert: None,
            submit: SubmitGuard::default(),
        }
    }

    pub fn select(&mut self, member: Option<TeamMemberId>) {
        if self.selected != member {
            self.selected = member;
            self.submit.invalidate();
        }
    }

    pub fn begin_submit(&mut self) -> Option<Submission<AssignJobRequest>> {
        let key = self.submit.begin()?;
        Some(Submission {
            body: AssignJobRequest {
                team_member_id: self.selected,
            },
            key,
        })
    }

    pub fn submit_failed(&mut self, error: &dyn std::fmt::Display) {
        tracing::error!(job_id = %self.job.id, "Error assigning job: {}", error);
        self.submit.fail();
        self.alert = Some(ASSIGN_JOB_FAILED.to_string());
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn is_submitting(&self) -> bool {
        self.submit.in_flight()
    }

    /// Start and end in the viewer's time zone.
    pub fn time_range_label<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        const FORMAT: &str = "%b %-d, %Y %-I:%M %p";
        format!(
            "{} - {}",
            self.job.start_time.with_timezone(tz).format(FORMAT),
            self.job.end_time.with_timezone(tz).format(FORMAT)
        )
    }
}
