//! A task group with its tasks and sign-off action.

use dioxus::prelude::*;
use scheduler_core::{TaskGroup, TaskGroupId};

use crate::time::format_timestamp;

/// Props for TaskGroupCard component.
#[derive(Props, Clone, PartialEq)]
pub struct TaskGroupCardProps {
    pub group: TaskGroup,
    /// False once the group has a sign-off for the active date.
    pub show_sign_off: bool,
    /// Sign-off is only enabled for today.
    pub can_sign_off: bool,
    pub on_sign_off: EventHandler<TaskGroupId>,
}

#[component]
pub fn TaskGroupCard(props: TaskGroupCardProps) -> Element {
    let group = &props.group;
    let id = group.id;
    let on_sign_off = props.on_sign_off;

    rsx! {
        div { class: "task-group",
            div { class: "task-group-header",
                h3 { class: "task-group-name", "{group.name}" }
                if let Some(time) = &group.dallas_time {
                    span { class: "task-group-time", "{time}" }
                }
                if props.show_sign_off {
                    button {
                        class: "btn btn-small btn-primary",
                        disabled: !props.can_sign_off,
                        title: if props.can_sign_off { "" } else { "Sign-off is only available for today" },
                        onclick: move |_| on_sign_off.call(id),
                        "Sign Off"
                    }
                } else if let Some(signoff) = &group.latest_signoff {
                    span { class: "status-badge badge-completed",
                        "Signed off by {signoff.team_member_name}"
                    }
                    span { class: "task-group-time", {format_timestamp(signoff.sign_off_date)} }
                }
            }

            if !group.tasks.is_empty() {
                ol { class: "task-list",
                    for task in group.tasks.iter() {
                        li { key: "{task.id}", "{task.description}" }
                    }
                }
            }
        }
    }
}
