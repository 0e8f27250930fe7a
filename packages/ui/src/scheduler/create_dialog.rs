//! Create job dialog component.

use dioxus::prelude::*;
use scheduler_core::view::{CreateJobForm, JobFormChange, SchedulerDialog, SchedulerState};
use scheduler_core::{IndexId, JOB_COLOR_PRESETS, TeamMemberId};

use crate::time::{from_input_value, to_input_value};
use crate::{AlertDialog, Modal};

/// Form for a new job. On success the server's copy is added to the calendar.
#[component]
pub fn CreateJobDialog(mut scheduler: Signal<SchedulerState>) -> Element {
    let state = scheduler.read();
    let Some(SchedulerDialog::Create(form)) = state.dialog.clone() else {
        return rsx! {};
    };
    let indexes = state.indexes.clone();
    let team_members = state.team_members.clone();
    drop(state);

    let mut update = move |change: JobFormChange| {
        if let Some(form) = scheduler.write().create_form_mut() {
            form.update(change);
        }
    };

    let submit = move |e: FormEvent| {
        e.prevent_default();
        let submission = scheduler
            .write()
            .create_form_mut()
            .and_then(CreateJobForm::begin_submit);
        let Some(submission) = submission else {
            return;
        };

        spawn(async move {
            match api::client().create_job(&submission.body, submission.key).await {
                Ok(job) => scheduler.write().job_created(submission.key, job),
                Err(e) => scheduler.write().create_failed(submission.key, &e),
            }
        });
    };

    let submitting = form.is_submitting();
    let selected_index = form.index.map(|id| id.to_string()).unwrap_or_default();
    let selected_member = form.assigned_to.map(|id| id.to_string()).unwrap_or_default();

    rsx! {
        Modal {
            title: "Create New Job",
            on_close: move |_| scheduler.write().close_dialog(),

            form { class: "job-form", onsubmit: submit,
                if let Some(err) = &form.error {
                    div { class: "error-message", "{err}" }
                }

                div { class: "form-group",
                    label { r#for: "job-title", "Title" }
                    input {
                        id: "job-title",
                        r#type: "text",
                        required: true,
                        value: "{form.title}",
                        oninput: move |e| update(JobFormChange::Title(e.value())),
                    }
                }

                div { class: "form-group",
                    label { r#for: "job-index", "Index" }
                    select {
                        id: "job-index",
                        required: true,
                        value: "{selected_index}",
                        onchange: move |e| update(JobFormChange::Index(IndexId::parse_optional(&e.value()))),
                        option { value: "", "Select an index" }
                        for index in indexes {
                            option {
                                value: "{index.id}",
                                selected: form.index == Some(index.id),
                                "{index.name}"
                            }
                        }
                    }
                }

                div { class: "form-row",
                    div { class: "form-group",
                        label { r#for: "job-start", "Start" }
                        input {
                            id: "job-start",
                            r#type: "datetime-local",
                            required: true,
                            value: to_input_value(form.start),
                            oninput: move |e| {
                                if let Some(start) = from_input_value(&e.value()) {
                                    update(JobFormChange::Start(start));
                                }
                            },
                        }
                    }
                    div { class: "form-group",
                        label { r#for: "job-end", "End" }
                        input {
                            id: "job-end",
                            r#type: "datetime-local",
                            required: true,
                            value: to_input_value(form.end),
                            oninput: move |e| {
                                if let Some(end) = from_input_value(&e.value()) {
                                    update(JobFormChange::End(end));
                                }
                            },
                        }
                    }
                }

                div { class: "form-group",
                    label { r#for: "job-assignee", "Assign To" }
                    select {
                        id: "job-assignee",
                        value: "{selected_member}",
                        onchange: move |e| update(JobFormChange::AssignedTo(TeamMemberId::parse_optional(&e.value()))),
                        option { value: "", "Unassigned" }
                        for member in team_members {
                            option {
                                value: "{member.id}",
                                selected: form.assigned_to == Some(member.id),
                                "{member.name}"
                            }
                        }
                    }
                }

                div { class: "form-group",
                    label { r#for: "job-color", "Color" }
                    div { class: "color-picker",
                        input {
                            id: "job-color",
                            r#type: "color",
                            value: "{form.color}",
                            oninput: move |e| update(JobFormChange::Color(e.value())),
                        }
                        for preset in JOB_COLOR_PRESETS {
                            button {
                                r#type: "button",
                                class: if form.color == preset { "color-swatch selected" } else { "color-swatch" },
                                style: "background-color: {preset};",
                                title: "{preset}",
                                onclick: move |_| update(JobFormChange::Color(preset.to_string())),
                            }
                        }
                    }
                }

                div { class: "form-group",
                    label { r#for: "job-notes", "Notes" }
                    textarea {
                        id: "job-notes",
                        rows: 3,
                        value: "{form.notes}",
                        oninput: move |e| update(JobFormChange::Notes(e.value())),
                    }
                }

                div { class: "form-actions",
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: submitting,
                        if submitting { "Creating..." } else { "Create Job" }
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-secondary",
                        onclick: move |_| scheduler.write().close_dialog(),
                        "Cancel"
                    }
                }
            }
        }

        if let Some(message) = form.alert.clone() {
            AlertDialog {
                message,
                on_dismiss: move |_| {
                    if let Some(form) = scheduler.write().create_form_mut() {
                        form.dismiss_alert();
                    }
                },
            }
        }
    }
}
