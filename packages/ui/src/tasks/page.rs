//! Task dashboard page.

use dioxus::prelude::*;
use scheduler_core::view::{DashboardState, LoadPhase, TaskQuery};

use super::{HistoryPanel, SignOffDialog, TaskGroupCard};
use crate::time::local_today;

/// Fetch companies for `query` and hand them to the state, which drops the
/// result if the filter moved on in the meantime.
pub(super) async fn load_tasks(mut dashboard: Signal<DashboardState>, query: TaskQuery) {
    match api::client().companies_with_tasks(&query).await {
        Ok(companies) => {
            dashboard.write().tasks_loaded(query, companies);
        }
        Err(e) => dashboard.write().tasks_failed(query, &e),
    }
}

pub(super) async fn load_history(mut dashboard: Signal<DashboardState>) {
    match api::client().task_history().await {
        Ok(history) => dashboard.write().history_loaded(history),
        Err(e) => dashboard.write().history_failed(&e),
    }
}

fn fetch_tasks(dashboard: Signal<DashboardState>, query: Option<TaskQuery>) {
    if let Some(query) = query {
        spawn(load_tasks(dashboard, query));
    }
}

#[component]
pub fn TaskDashboardPage() -> Element {
    let mut dashboard = use_signal(|| DashboardState::new(local_today()));

    use_hook(move || {
        spawn(async move {
            match api::client().load_dashboard().await {
                Ok(data) => {
                    let query = dashboard.write().initial_loaded(data);
                    if let Some(query) = query {
                        load_tasks(dashboard, query).await;
                    }
                }
                Err(e) => dashboard.write().initial_failed(&e),
            }
        })
    });

    let state = dashboard.read().clone();

    if let LoadPhase::Failed(message) = &state.phase {
        return rsx! {
            div { class: "page-container",
                div { class: "error-panel",
                    h2 { "Error" }
                    p { "{message}" }
                }
            }
        };
    }

    let is_today = state.is_today();
    let loading = state.phase == LoadPhase::Loading;

    rsx! {
        div { class: "page-container dashboard",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Daily Tasks" }
                    p { class: "page-description", {state.display_date()} }
                }
                div { class: "btn-group",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| {
                            let query = dashboard.write().previous_day();
                            fetch_tasks(dashboard, query);
                        },
                        "Previous Day"
                    }
                    if !is_today {
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| {
                                let query = dashboard.write().go_to_today(local_today());
                                fetch_tasks(dashboard, query);
                            },
                            "Today"
                        }
                    }
                }
            }

            div { class: "tabs",
                for slot in state.time_slots.iter() {
                    {
                        let id = slot.id;
                        let active = state.active_slot == Some(id);
                        rsx! {
                            button {
                                class: if active { "tab active" } else { "tab" },
                                onclick: move |_| {
                                    let query = dashboard.write().select_time_slot(id);
                                    fetch_tasks(dashboard, query);
                                },
                                "{slot.name}"
                            }
                        }
                    }
                }
            }

            div { class: "dashboard-layout",
                main { class: "dashboard-main",
                    if loading {
                        div { class: "loading", "Loading tasks..." }
                    } else if state.companies.is_empty() {
                        div { class: "empty-state",
                            p { "No tasks for this time slot" }
                        }
                    } else {
                        for company in state.companies.iter() {
                            div { class: "card company-card", key: "{company.id}",
                                div { class: "card-header",
                                    h2 { class: "card-title", "{company.name}" }
                                    if let Some(description) = company.description.as_ref().filter(|d| !d.is_empty()) {
                                        p { class: "card-description", "{description}" }
                                    }
                                }
                                for group in company.task_groups.iter() {
                                    TaskGroupCard {
                                        key: "{group.id}",
                                        group: group.clone(),
                                        show_sign_off: state.shows_sign_off_button(group),
                                        can_sign_off: state.can_sign_off(group),
                                        on_sign_off: move |id| {
                                            dashboard.write().open_sign_off(id, local_today());
                                        },
                                    }
                                }
                            }
                        }
                    }
                }

                aside { class: "dashboard-sidebar",
                    HistoryPanel { entries: state.visible_history().to_vec() }
                }
            }

            if state.signoff.is_some() {
                SignOffDialog { dashboard }
            }
        }
    }
}
