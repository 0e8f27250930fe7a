//! Scheduler page - the job calendar.

use chrono::{Local, Utc};
use dioxus::prelude::*;
use scheduler_core::calendar::{CalendarNav, CalendarView};
use scheduler_core::view::{SchedulerDialog, SchedulerState};

use super::{AssignJobDialog, CalendarGrid, CreateJobDialog};
use crate::time::local_today;

/// Calendar of all jobs with create and assign dialogs.
#[component]
pub fn SchedulerPage() -> Element {
    let mut scheduler = use_signal(|| SchedulerState::new(local_today()));
    let mut initialized = use_signal(|| false);

    // Jobs, team members and indexes together; any failure leaves the lists empty
    let data = use_resource(move || async move { api::client().load_scheduler().await });

    use_effect(move || {
        if initialized() {
            return;
        }
        match data.read().as_ref() {
            Some(Ok(loaded)) => {
                scheduler.write().load_succeeded(loaded.clone());
                initialized.set(true);
            }
            Some(Err(e)) => {
                scheduler.write().load_failed(e);
                initialized.set(true);
            }
            None => {}
        }
    });

    let state = scheduler.read();
    let events = state.events(&Local);
    let view = state.view;
    let anchor = state.anchor;
    let title = view.title(anchor);
    let dialog = state.dialog.clone();
    drop(state);

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Job Scheduler" }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| scheduler.write().select_slot(Utc::now()),
                    "Add New Job"
                }
            }

            div { class: "card",
                div { class: "calendar-toolbar",
                    div { class: "btn-group",
                        button {
                            class: "btn btn-small",
                            onclick: move |_| scheduler.write().navigate(CalendarNav::Today(local_today())),
                            "Today"
                        }
                        button {
                            class: "btn btn-small",
                            onclick: move |_| scheduler.write().navigate(CalendarNav::Back),
                            "Back"
                        }
                        button {
                            class: "btn btn-small",
                            onclick: move |_| scheduler.write().navigate(CalendarNav::Next),
                            "Next"
                        }
                    }
                    span { class: "calendar-title", "{title}" }
                    div { class: "btn-group",
                        for option in CalendarView::ALL {
                            button {
                                class: if option == view { "btn btn-small active" } else { "btn btn-small" },
                                onclick: move |_| scheduler.write().set_view(option),
                                {option.label()}
                            }
                        }
                    }
                }

                CalendarGrid {
                    events,
                    view,
                    anchor,
                    today: local_today(),
                    on_select_event: move |id| {
                        scheduler.write().select_event(id);
                    },
                    on_select_slot: move |start| scheduler.write().select_slot(start),
                }
            }

            {
                match dialog {
                    Some(SchedulerDialog::Create(_)) => rsx! { CreateJobDialog { scheduler } },
                    Some(SchedulerDialog::Assign(_)) => rsx! { AssignJobDialog { scheduler } },
                    None => rsx! {},
                }
            }
        }
    }
}
