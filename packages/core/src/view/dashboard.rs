//! Task dashboard state, driven by the active (time slot, date) pair.
//!
//! Every transition that changes the filter returns the [`TaskQuery`] the
//! caller must fetch, so exactly one request is issued per change. Responses
//! are matched against the current filter and dropped if they are stale.

use chrono::{Duration, NaiveDate};

use super::signoff::SignOffDialogState;
use crate::submit::{IdempotencyKey, Submission};
use crate::{Company, SignOff, SignOffRequest, TaskGroup, TaskGroupId, TeamMember, TimeSlot, TimeSlotId};

/// Number of history entries shown in the sidebar.
pub const HISTORY_LIMIT: usize = 10;

pub const INITIAL_LOAD_FAILED: &str = "Failed to load initial data. Please refresh the page.";
pub const TASKS_LOAD_FAILED: &str = "Failed to load tasks. Please try again.";
pub const SIGN_OFF_FAILED: &str = "Failed to sign off task. Please try again.";

/// Filter for the companies-with-tasks endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskQuery {
    pub time_slot: TimeSlotId,
    pub date: NaiveDate,
}

impl TaskQuery {
    /// `YYYY-MM-DD` form used on the wire.
    pub fn date_param(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Lists fetched together when the dashboard mounts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub time_slots: Vec<TimeSlot>,
    pub team_members: Vec<TeamMember>,
    pub history: Vec<SignOff>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
    /// Replaces the whole view with an error panel.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub time_slots: Vec<TimeSlot>,
    pub team_members: Vec<TeamMember>,
    pub history: Vec<SignOff>,
    /// Companies with at least one task group for the active filter.
    pub companies: Vec<Company>,
    pub active_slot: Option<TimeSlotId>,
    pub active_date: NaiveDate,
    today: NaiveDate,
    pub phase: LoadPhase,
    pub signoff: Option<SignOffDialogState>,
}

impl DashboardState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            time_slots: Vec::new(),
            team_members: Vec::new(),
            history: Vec::new(),
            companies: Vec::new(),
            active_slot: None,
            active_date: today,
            today,
            phase: LoadPhase::Loading,
            signoff: None,
        }
    }

    pub fn current_query(&self) -> Option<TaskQuery> {
        self.active_slot.map(|time_slot| TaskQuery {
            time_slot,
            date: self.active_date,
        })
    }

    /// Sign-off is only offered for the current calendar day.
    pub fn is_today(&self) -> bool {
        self.active_date == self.today
    }

    pub fn initial_loaded(&mut self, data: DashboardData) -> Option<TaskQuery> {
        let mut time_slots = data.time_slots;
        time_slots.sort_by_key(|slot| slot.order);
        if self.active_slot.is_none() {
            self.active_slot = time_slots.first().map(|slot| slot.id);
        }
        self.time_slots = time_slots;
        self.team_members = data.team_members;
        self.history = data.history;

        let query = self.current_query();
        if query.is_none() {
            self.phase = LoadPhase::Ready;
        }
        query
    }

    pub fn initial_failed(&mut self, error: &dyn std::fmt::Display) {
        tracing::error!("Error loading initial data: {}", error);
        self.phase = LoadPhase::Failed(INITIAL_LOAD_FAILED.to_string());
    }

    pub fn select_time_slot(&mut self, id: TimeSlotId) -> Option<TaskQuery> {
        if self.active_slot == Some(id) {
            return None;
        }
        self.active_slot = Some(id);
        self.filter_changed()
    }

    pub fn previous_day(&mut self) -> Option<TaskQuery> {
        self.active_date -= Duration::days(1);
        self.filter_changed()
    }

    /// Jump back to `today`, which also refreshes the idea of "today".
    pub fn go_to_today(&mut self, today: NaiveDate) -> Option<TaskQuery> {
        self.today = today;
        if self.active_date == today {
            return None;
        }
        self.active_date = today;
        self.filter_changed()
    }

    fn filter_changed(&mut self) -> Option<TaskQuery> {
        self.companies.clear();
        let query = self.current_query()?;
        self.phase = LoadPhase::Loading;
        Some(query)
    }

    /// Accept a response for `query`. Returns false if it was stale.
    pub fn tasks_loaded(&mut self, query: TaskQuery, companies: Vec<Company>) -> bool {
        if self.current_query() != Some(query) {
            tracing::debug!(?query, "dropping stale task response");
            return false;
        }
        self.companies = companies.into_iter().filter(Company::has_task_groups).collect();
        self.phase = LoadPhase::Ready;
        true
    }

    pub fn tasks_failed(&mut self, query: TaskQuery, error: &dyn std::fmt::Display) {
        if self.current_query() != Some(query) {
            return;
        }
        tracing::error!("Error loading tasks: {}", error);
        self.phase = LoadPhase::Failed(TASKS_LOAD_FAILED.to_string());
    }

    pub fn history_loaded(&mut self, history: Vec<SignOff>) {
        self.history = history;
    }

    pub fn history_failed(&mut self, error: &dyn std::fmt::Display) {
        tracing::error!("Error loading sign-off history: {}", error);
    }

    pub fn visible_history(&self) -> &[SignOff] {
        &self.history[..self.history.len().min(HISTORY_LIMIT)]
    }

    /// The "Sign Off" button is shown only while the group has no sign-off.
    pub fn shows_sign_off_button(&self, group: &TaskGroup) -> bool {
        !group.is_signed_off()
    }

    /// Whether the button is enabled.
    pub fn can_sign_off(&self, group: &TaskGroup) -> bool {
        self.shows_sign_off_button(group) && self.is_today()
    }

    fn group(&self, id: TaskGroupId) -> Option<&TaskGroup> {
        self.companies
            .iter()
            .flat_map(|company| company.task_groups.iter())
            .find(|group| group.id == id)
    }

    /// Open the dialog for group `id`. `today` is re-read here so a page left
    /// open past midnight cannot sign off on a day that has ended.
    pub fn open_sign_off(&mut self, id: TaskGroupId, today: NaiveDate) -> bool {
        if self.today != today {
            tracing::debug!(%today, "calendar day rolled over");
            self.today = today;
        }
        let Some(group) = self.group(id).filter(|g| self.can_sign_off(g)).cloned() else {
            return false;
        };
        self.signoff = Some(SignOffDialogState::new(group));
        true
    }

    /// Reset the dialog's fields, then drop it.
    pub fn close_sign_off(&mut self) {
        if let Some(dialog) = self.signoff.as_mut() {
            dialog.reset();
        }
        self.signoff = None;
    }

    /// Turn the dialog's confirmation into a request for the active date.
    pub fn begin_sign_off(&mut self) -> Option<Submission<SignOffRequest>> {
        let date = self.active_date;
        let confirmation = self.signoff.as_mut()?.confirm()?;
        Some(Submission {
            body: SignOffRequest {
                task_group_id: confirmation.task_group_id,
                team_member_id: confirmation.team_member_id,
                notes: confirmation.notes,
                completed_date: date,
            },
            key: confirmation.key,
        })
    }

    /// Return the filter to refresh. The dialog closes only if it is the one
    /// that sent `key`; a dialog opened since then is left alone.
    pub fn sign_off_succeeded(&mut self, key: IdempotencyKey) -> Option<TaskQuery> {
        tracing::info!(%key, "task group signed off");
        if self.owned_dialog(key).is_some() {
            self.close_sign_off();
        }
        self.current_query()
    }

    pub fn sign_off_failed(&mut self, key: IdempotencyKey, error: &dyn std::fmt::Display) {
        tracing::error!(%key, "Error signing off task: {}", error);
        if let Some(dialog) = self.owned_dialog(key) {
            dialog.submit.fail();
            dialog.alert = Some(SIGN_OFF_FAILED.to_string());
        }
    }

    fn owned_dialog(&mut self, key: IdempotencyKey) -> Option<&mut SignOffDialogState> {
        self.signoff.as_mut().filter(|dialog| dialog.submit.owns(key))
    }

    pub fn dismiss_sign_off_alert(&mut self) {
        if let Some(dialog) = self.signoff.as_mut() {
            dialog.alert = None;
        }
    }

    /// e.g. "Monday, 4 March 2024".
    pub fn display_date(&self) -> String {
        self.active_date.format("%A, %-d %B %Y").to_string()
    }
}
