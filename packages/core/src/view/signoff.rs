//! Two-step sign-off dialog.

use crate::error::ValidationError;
use crate::submit::{IdempotencyKey, SubmitGuard};
use crate::{TaskGroup, TaskGroupId, TeamMemberId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignOffStep {
    /// Choosing a team member and writing notes. No network traffic here.
    #[default]
    Selecting,
    /// Re-reading the task list before committing.
    Confirming,
}

/// What the dialog hands to the dashboard on "Yes, Sign Off".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignOffConfirmation {
    pub task_group_id: TaskGroupId,
    pub team_member_id: TeamMemberId,
    pub notes: String,
    pub key: IdempotencyKey,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignOffDialogState {
    pub group: TaskGroup,
    pub step: SignOffStep,
    pub team_member: Option<TeamMemberId>,
    pub notes: String,
    pub error: Option<ValidationError>,
    pub alert: Option<String>,
    pub submit: SubmitGuard,
}

impl SignOffDialogState {
    pub fn new(group: TaskGroup) -> Self {
        Self {
            group,
            step: SignOffStep::Selecting,
            team_member: None,
            notes: String::new(),
            error: None,
            alert: None,
            submit: SubmitGuard::default(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.step {
            SignOffStep::Selecting => "Sign Off Task",
            SignOffStep::Confirming => "Confirm Sign-Off",
        }
    }

    pub fn select_member(&mut self, member: Option<TeamMemberId>) {
        self.team_member = member;
        self.submit.invalidate();
    }

    pub fn set_notes(&mut self, notes: String) {
        self.notes = notes;
        self.submit.invalidate();
    }

    /// Move to confirmation once a team member is chosen.
    pub fn next(&mut self) -> bool {
        if self.team_member.is_none() {
            self.error = Some(ValidationError::NoTeamMember);
            return false;
        }
        self.error = None;
        self.step = SignOffStep::Confirming;
        true
    }

    /// Back to selection, keeping what was entered.
    pub fn back(&mut self) {
        self.step = SignOffStep::Selecting;
    }

    pub fn confirm(&mut self) -> Option<SignOffConfirmation> {
        if self.step != SignOffStep::Confirming {
            return None;
        }
        let team_member_id = self.team_member?;
        let key = self.submit.begin()?;
        Some(SignOffConfirmation {
            task_group_id: self.group.id,
            team_member_id,
            notes: self.notes.clone(),
            key,
        })
    }

    /// Clear every entered value.
    pub fn reset(&mut self) {
        *self = Self::new(self.group.clone());
    }

    pub fn is_submitting(&self) -> bool {
        self.submit.in_flight()
    }
}
