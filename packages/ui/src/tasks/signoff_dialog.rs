//! Two-step sign-off dialog.

use dioxus::prelude::*;
use scheduler_core::TeamMemberId;
use scheduler_core::view::{DashboardState, SignOffStep};

use super::page::{load_history, load_tasks};
use crate::{AlertDialog, Modal};

const CONFIRM_WARNING: &str =
    "Please confirm: Have you completed all the tasks and subtasks for this index?";

/// Pick a team member, then confirm against the task list before posting.
#[component]
pub fn SignOffDialog(mut dashboard: Signal<DashboardState>) -> Element {
    let state = dashboard.read();
    let Some(dialog) = state.signoff.clone() else {
        return rsx! {};
    };
    let team_members = state.team_members.clone();
    drop(state);

    let confirm = move |_| {
        let submission = dashboard.write().begin_sign_off();
        let Some(submission) = submission else {
            return;
        };

        spawn(async move {
            match api::client().sign_off(&submission.body, submission.key).await {
                Ok(()) => {
                    let refresh = dashboard.write().sign_off_succeeded(submission.key);
                    if let Some(query) = refresh {
                        load_tasks(dashboard, query).await;
                    }
                    load_history(dashboard).await;
                }
                Err(e) => dashboard.write().sign_off_failed(submission.key, &e),
            }
        });
    };

    let group = &dialog.group;
    let member_name = dialog
        .team_member
        .and_then(|id| team_members.iter().find(|m| m.id == id))
        .map(|m| m.name.clone())
        .unwrap_or_default();
    let selected = dialog.team_member.map(|id| id.to_string()).unwrap_or_default();
    let submitting = dialog.is_submitting();

    rsx! {
        Modal {
            title: dialog.title().to_string(),
            on_close: move |_| dashboard.write().close_sign_off(),

            div { class: "signoff-group",
                strong { {group.label()} }
                if let Some(time) = &group.dallas_time {
                    span { class: "task-group-time", "{time}" }
                }
            }

            {match dialog.step {
                SignOffStep::Selecting => rsx! {
                    if let Some(err) = &dialog.error {
                        div { class: "error-message", "{err}" }
                    }
                    div { class: "form-group",
                        label { r#for: "signoff-member", "Team Member" }
                        select {
                            id: "signoff-member",
                            value: "{selected}",
                            onchange: move |e| {
                                if let Some(dialog) = dashboard.write().signoff.as_mut() {
                                    dialog.select_member(TeamMemberId::parse_optional(&e.value()));
                                }
                            },
                            option { value: "", "Select a team member" }
                            for member in team_members.iter() {
                                option {
                                    value: "{member.id}",
                                    selected: dialog.team_member == Some(member.id),
                                    "{member.name}"
                                }
                            }
                        }
                    }
                    div { class: "form-group",
                        label { r#for: "signoff-notes", "Notes" }
                        textarea {
                            id: "signoff-notes",
                            rows: 3,
                            placeholder: "Optional notes",
                            value: "{dialog.notes}",
                            oninput: move |e| {
                                if let Some(dialog) = dashboard.write().signoff.as_mut() {
                                    dialog.set_notes(e.value());
                                }
                            },
                        }
                    }
                    div { class: "form-actions",
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| {
                                if let Some(dialog) = dashboard.write().signoff.as_mut() {
                                    dialog.next();
                                }
                            },
                            "Next"
                        }
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| dashboard.write().close_sign_off(),
                            "Cancel"
                        }
                    }
                },
                SignOffStep::Confirming => rsx! {
                    div { class: "warning-message", "{CONFIRM_WARNING}" }
                    if !group.tasks.is_empty() {
                        ol { class: "task-list",
                            for task in group.tasks.iter() {
                                li { key: "{task.id}", "{task.description}" }
                            }
                        }
                    }
                    dl { class: "detail-list",
                        dt { "Signed off by" }
                        dd { "{member_name}" }
                        if !dialog.notes.is_empty() {
                            dt { "Notes" }
                            dd { "{dialog.notes}" }
                        }
                    }
                    div { class: "form-actions",
                        button {
                            class: "btn btn-primary",
                            disabled: submitting,
                            onclick: confirm,
                            if submitting { "Signing Off..." } else { "Yes, Sign Off" }
                        }
                        button {
                            class: "btn btn-secondary",
                            disabled: submitting,
                            onclick: move |_| {
                                if let Some(dialog) = dashboard.write().signoff.as_mut() {
                                    dialog.back();
                                }
                            },
                            "Back"
                        }
                    }
                },
            }}
        }

        if let Some(message) = dialog.alert.clone() {
            AlertDialog {
                message,
                on_dismiss: move |_| dashboard.write().dismiss_sign_off_alert(),
            }
        }
    }
}
