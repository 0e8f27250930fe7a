//! Assign job dialog component.

use chrono::Local;
use dioxus::prelude::*;
use scheduler_core::TeamMemberId;
use scheduler_core::view::{SchedulerDialog, SchedulerState};

use crate::{AlertDialog, Modal};

/// Read-only job details with an assignee picker.
#[component]
pub fn AssignJobDialog(mut scheduler: Signal<SchedulerState>) -> Element {
    let state = scheduler.read();
    let Some(SchedulerDialog::Assign(form)) = state.dialog.clone() else {
        return rsx! {};
    };
    let team_members = state.team_members.clone();
    drop(state);

    let submit = move |_| {
        let pending = scheduler.write().assign_form_mut().and_then(|form| {
            let id = form.job.id;
            form.begin_submit().map(|submission| (id, submission))
        });
        let Some((id, submission)) = pending else {
            return;
        };

        spawn(async move {
            match api::client().assign_job(id, &submission.body, submission.key).await {
                Ok(job) => scheduler.write().job_assigned(submission.key, &job),
                Err(e) => scheduler.write().assign_failed(submission.key, &e),
            }
        });
    };

    let job = &form.job;
    let time_range = form.time_range_label(&Local);
    let selected = form.selected.map(|id| id.to_string()).unwrap_or_default();
    let submitting = form.is_submitting();

    rsx! {
        Modal {
            title: "{job.title}",
            on_close: move |_| scheduler.write().close_dialog(),

            dl { class: "detail-list",
                dt { "Index" }
                dd { "{job.index_name}" }
                dt { "Time" }
                dd { "{time_range}" }
                if !job.notes.is_empty() {
                    dt { "Notes" }
                    dd { "{job.notes}" }
                }
                dt { "Currently Assigned To" }
                dd { {job.assignee_label()} }
            }

            div { class: "form-group",
                label { r#for: "assign-member", "Assign To" }
                select {
                    id: "assign-member",
                    value: "{selected}",
                    onchange: move |e| {
                        if let Some(form) = scheduler.write().assign_form_mut() {
                            form.select(TeamMemberId::parse_optional(&e.value()));
                        }
                    },
                    option { value: "", "Unassigned" }
                    for member in team_members {
                        option {
                            value: "{member.id}",
                            selected: form.selected == Some(member.id),
                            "{member.name}"
                        }
                    }
                }
            }

            div { class: "form-actions",
                button {
                    class: "btn btn-primary",
                    disabled: submitting,
                    onclick: submit,
                    if submitting { "Assigning..." } else { "Assign" }
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| scheduler.write().close_dialog(),
                    "Close"
                }
            }
        }

        if let Some(message) = form.alert.clone() {
            AlertDialog {
                message,
                on_dismiss: move |_| {
                    if let Some(form) = scheduler.write().assign_form_mut() {
                        form.dismiss_alert();
                    }
                },
            }
        }
    }
}
