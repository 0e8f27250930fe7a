//! Recent sign-off history sidebar.

use dioxus::prelude::*;
use scheduler_core::SignOff;

use crate::time::format_timestamp;

#[component]
pub fn HistoryPanel(entries: Vec<SignOff>) -> Element {
    rsx! {
        div { class: "card history-panel",
            div { class: "card-header",
                h2 { class: "card-title", "Recent Sign-Offs" }
            }
            if entries.is_empty() {
                div { class: "empty-state",
                    p { "No sign-offs yet" }
                }
            } else {
                ul { class: "history-list",
                    for entry in entries.iter() {
                        li { class: "history-item", key: "{entry.id}",
                            div { class: "history-title",
                                "{entry.company_name} - {entry.task_group_name}"
                            }
                            div { class: "history-meta",
                                "{entry.team_member_name} · {entry.time_slot_name} · "
                                {entry.completed_date.format("%-d %b %Y").to_string()}
                            }
                            div { class: "history-meta muted", {format_timestamp(entry.sign_off_date)} }
                            if let Some(notes) = entry.notes.as_ref().filter(|n| !n.is_empty()) {
                                div { class: "history-notes", "{notes}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
