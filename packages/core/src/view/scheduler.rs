//! Scheduler (calendar) screen state.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use super::{AssignJobForm, CreateJobForm};
use crate::calendar::{CalendarEvent, CalendarNav, CalendarView, project_events};
use crate::submit::IdempotencyKey;
use crate::{Index, Job, JobId, TeamMember};

/// Everything the scheduler needs on mount, fetched together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchedulerData {
    pub jobs: Vec<Job>,
    pub team_members: Vec<TeamMember>,
    pub indexes: Vec<Index>,
}

/// The dialog currently open over the calendar, if any.
#[derive(Debug, Clone, PartialEq)]
pub enum SchedulerDialog {
    Create(CreateJobForm),
    Assign(AssignJobForm),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SchedulerState {
    pub jobs: Vec<Job>,
    pub team_members: Vec<TeamMember>,
    pub indexes: Vec<Index>,
    pub view: CalendarView,
    /// Date the visible page is built around.
    pub anchor: NaiveDate,
    pub dialog: Option<SchedulerDialog>,
}

impl SchedulerState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            jobs: Vec::new(),
            team_members: Vec::new(),
            indexes: Vec::new(),
            view: CalendarView::default(),
            anchor: today,
            dialog: None,
        }
    }

    pub fn load_succeeded(&mut self, data: SchedulerData) {
        tracing::debug!(
            jobs = data.jobs.len(),
            team_members = data.team_members.len(),
            indexes = data.indexes.len(),
            "scheduler data loaded"
        );
        self.jobs = data.jobs;
        self.team_members = data.team_members;
        self.indexes = data.indexes;
    }

    /// Failures degrade silently: whatever was shown stays.
    pub fn load_failed(&mut self, error: &dyn std::fmt::Display) {
        tracing::error!("Error fetching data: {}", error);
    }

    pub fn set_view(&mut self, view: CalendarView) {
        self.view = view;
    }

    pub fn navigate(&mut self, nav: CalendarNav) {
        self.anchor = match nav {
            CalendarNav::Back => self.view.step(self.anchor, false),
            CalendarNav::Next => self.view.step(self.anchor, true),
            CalendarNav::Today(today) => today,
        };
    }

    pub fn events<Tz: TimeZone>(&self, tz: &Tz) -> Vec<CalendarEvent> {
        project_events(&self.jobs, tz)
    }

    pub fn job(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// Open the assign dialog for an existing event.
    pub fn select_event(&mut self, id: JobId) -> bool {
        match self.job(id).cloned() {
            Some(job) => {
                self.dialog = Some(SchedulerDialog::Assign(AssignJobForm::new(job)));
                true
            }
            None => {
                tracing::warn!(job_id = %id, "selected event has no matching job");
                false
            }
        }
    }

    /// Open the create dialog pre-filled with an empty slot's start.
    pub fn select_slot(&mut self, start: DateTime<Utc>) {
        self.dialog = Some(SchedulerDialog::Create(CreateJobForm::new(start)));
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn create_form_mut(&mut self) -> Option<&mut CreateJobForm> {
        match self.dialog.as_mut() {
            Some(SchedulerDialog::Create(form)) => Some(form),
            _ => None,
        }
    }

    pub fn assign_form_mut(&mut self) -> Option<&mut AssignJobForm> {
        match self.dialog.as_mut() {
            Some(SchedulerDialog::Assign(form)) => Some(form),
            _ => None,
        }
    }

    /// Append the server's copy of a new job. The create dialog closes only
    /// if it is the one that sent `key`.
    pub fn job_created(&mut self, key: IdempotencyKey, job: Job) {
        tracing::info!(job_id = %job.id, "job created");
        self.jobs.push(job);
        if self.create_form_mut().is_some_and(|form| form.submit.owns(key)) {
            self.dialog = None;
        }
    }

    pub fn create_failed(&mut self, key: IdempotencyKey, error: &dyn std::fmt::Display) {
        match self.create_form_mut().filter(|form| form.submit.owns(key)) {
            Some(form) => form.submit_failed(error),
            None => tracing::error!(%key, "Error creating job after its dialog closed: {}", error),
        }
    }

    /// Merge the assignment response into the matching job only.
    pub fn job_assigned(&mut self, key: IdempotencyKey, updated: &Job) {
        for job in self.jobs.iter_mut().filter(|job| job.id == updated.id) {
            job.apply_assignment(updated);
        }
        tracing::info!(job_id = %updated.id, assignee = updated.assignee_label(), "job assigned");
        if self.assign_form_mut().is_some_and(|form| form.submit.owns(key)) {
            self.dialog = None;
        }
    }

    pub fn assign_failed(&mut self, key: IdempotencyKey, error: &dyn std::fmt::Display) {
        match self.assign_form_mut().filter(|form| form.submit.owns(key)) {
            Some(form) => form.submit_failed(error),
            None => tracing::error!(%key, "Error assigning job after its dialog closed: {}", error),
        }
    }
}
