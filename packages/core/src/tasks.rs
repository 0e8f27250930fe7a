//! Task dashboard domain types: time slots, companies, task groups and sign-offs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{CompanyId, SignOffId, TaskGroupId, TaskId, TeamMemberId, TimeSlotId};

/// A named, ordered partition of the day (e.g. "Morning").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: TimeSlotId,
    pub name: String,
    #[serde(default)]
    pub order: i32,
}

/// A single task description inside a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    #[serde(default)]
    pub order: i32,
}

/// Summary of the sign-off recorded for a group on the requested date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestSignOff {
    pub id: SignOffId,
    pub team_member_name: String,
    pub sign_off_date: DateTime<Utc>,
}

/// A bundle of tasks for one company and time slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskGroup {
    pub id: TaskGroupId,
    pub name: String,
    pub company: CompanyId,
    #[serde(default)]
    pub company_name: String,
    pub time_slot: TimeSlotId,
    #[serde(default)]
    pub time_slot_name: String,
    /// Display-only time annotation.
    #[serde(default)]
    pub dallas_time: Option<String>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub latest_signoff: Option<LatestSignOff>,
}

impl TaskGroup {
    /// "Company - Group" label used by the sign-off dialog.
    pub fn label(&self) -> String {
        format!("{} - {}", self.company_name, self.name)
    }

    pub fn is_signed_off(&self) -> bool {
        self.latest_signoff.is_some()
    }
}

/// A company with the task groups matching the current dashboard filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub task_groups: Vec<TaskGroup>,
}

impl Company {
    pub fn has_task_groups(&self) -> bool {
        !self.task_groups.is_empty()
    }
}

/// A sign-off record as returned by the history endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignOff {
    pub id: SignOffId,
    pub task_group: TaskGroupId,
    #[serde(default)]
    pub task_group_name: String,
    pub team_member: TeamMemberId,
    #[serde(default)]
    pub team_member_name: String,
    pub sign_off_date: DateTime<Utc>,
    pub completed_date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub time_slot_name: String,
}

/// Body for `POST /api/task-signoffs/sign_off/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignOffRequest {
    pub task_group_id: TaskGroupId,
    pub team_member_id: TeamMemberId,
    pub notes: String,
    pub completed_date: NaiveDate,
}
