//! Team member and index screens.

use dioxus::prelude::*;
use scheduler_core::view::RegistryState;
use scheduler_core::{Index, IndexForm, TeamMember, TeamMemberForm};

use super::actions::refresh;
use super::page::{RegistryView, registry_page};

impl RegistryView for TeamMember {
    const TITLE: &'static str = "Team Members";
    const DESCRIPTION: &'static str = "People who can take jobs and sign off tasks";
    const EMPTY: &'static str = "No team members yet";
    const COLUMNS: &'static [&'static str] = &["Name", "Email"];

    fn cells(&self) -> Element {
        rsx! {
            td { "{self.name}" }
            td { "{self.email}" }
        }
    }

    fn fields(values: &TeamMemberForm, mut state: Signal<RegistryState<Self>>) -> Element {
        rsx! {
            div { class: "form-group",
                label { r#for: "member-name", "Name" }
                input {
                    id: "member-name",
                    r#type: "text",
                    required: true,
                    value: "{values.name}",
                    oninput: move |e| state.write().edit(|form| form.name = e.value()),
                }
            }
            div { class: "form-group",
                label { r#for: "member-email", "Email" }
                input {
                    id: "member-email",
                    r#type: "email",
                    required: true,
                    value: "{values.email}",
                    oninput: move |e| state.write().edit(|form| form.email = e.value()),
                }
            }
        }
    }
}

impl RegistryView for Index {
    const TITLE: &'static str = "Indexes";
    const DESCRIPTION: &'static str = "Groupings that jobs are scheduled against";
    const EMPTY: &'static str = "No indexes yet";
    const COLUMNS: &'static [&'static str] = &["Name", "Description"];

    fn cells(&self) -> Element {
        rsx! {
            td { "{self.name}" }
            td { class: "muted", "{self.description}" }
        }
    }

    fn fields(values: &IndexForm, mut state: Signal<RegistryState<Self>>) -> Element {
        rsx! {
            div { class: "form-group",
                label { r#for: "index-name", "Name" }
                input {
                    id: "index-name",
                    r#type: "text",
                    required: true,
                    value: "{values.name}",
                    oninput: move |e| state.write().edit(|form| form.name = e.value()),
                }
            }
            div { class: "form-group",
                label { r#for: "index-description", "Description" }
                textarea {
                    id: "index-description",
                    rows: 3,
                    value: "{values.description}",
                    oninput: move |e| state.write().edit(|form| form.description = e.value()),
                }
            }
        }
    }
}

/// Table of team members with add, edit and delete.
#[component]
pub fn TeamMembersPage() -> Element {
    let state = use_signal(RegistryState::<TeamMember>::new);
    use_hook(move || refresh(state));
    registry_page(state)
}

#[component]
pub fn IndexesPage() -> Element {
    let state = use_signal(RegistryState::<Index>::new);
    use_hook(move || refresh(state));
    registry_page(state)
}
