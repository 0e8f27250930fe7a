//! The list/add/edit/delete screen, shared by every registry entity.

use api::RegistryEndpoint;
use dioxus::prelude::*;
use scheduler_core::view::{RegistryEntity, RegistryState};

use super::actions::{confirm_delete, save};
use crate::{AlertDialog, ConfirmDialog, Modal};

/// What differs between registry screens: copy, columns and form inputs.
pub(crate) trait RegistryView: RegistryEndpoint {
    const TITLE: &'static str;
    const DESCRIPTION: &'static str;
    const EMPTY: &'static str;
    /// Data column headers. "Actions" is appended.
    const COLUMNS: &'static [&'static str];

    /// One `td` per entry of [`RegistryView::COLUMNS`].
    fn cells(&self) -> Element;

    fn fields(values: &Self::Form, state: Signal<RegistryState<Self>>) -> Element;
}

pub(crate) fn registry_page<E: RegistryView>(mut state: Signal<RegistryState<E>>) -> Element {
    let current = state.read().clone();
    let add_label = format!("Add {}", E::NOUN);

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", {E::TITLE} }
                    p { class: "page-description", {E::DESCRIPTION} }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| state.write().open_add(),
                    "{add_label}"
                }
            }

            div { class: "card",
                if current.items.is_empty() {
                    div { class: "empty-state",
                        p { {E::EMPTY} }
                    }
                } else {
                    div { class: "table-container",
                        table { class: "data-table",
                            thead {
                                tr {
                                    for column in E::COLUMNS {
                                        th { "{column}" }
                                    }
                                    th { class: "text-right", "Actions" }
                                }
                            }
                            tbody {
                                for item in current.items.iter() {
                                    {
                                        let id = item.id();
                                        rsx! {
                                            tr { class: "data-row", key: "{id}",
                                                {item.cells()}
                                                td { class: "text-right",
                                                    button {
                                                        class: "btn btn-small",
                                                        onclick: move |_| {
                                                            state.write().open_edit(id);
                                                        },
                                                        "Edit"
                                                    }
                                                    button {
                                                        class: "btn btn-small btn-danger",
                                                        onclick: move |_| state.write().request_delete(id),
                                                        "Delete"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(editor) = current.editor.clone() {
                Modal {
                    title: editor.title(),
                    on_close: move |_| state.write().close_editor(),
                    form {
                        onsubmit: move |e: FormEvent| {
                            e.prevent_default();
                            save(state);
                        },
                        if let Some(err) = &editor.error {
                            div { class: "error-message", "{err}" }
                        }
                        {E::fields(&editor.form, state)}
                        div { class: "form-actions",
                            button {
                                r#type: "submit",
                                class: "btn btn-primary",
                                disabled: editor.submit.in_flight(),
                                "Save"
                            }
                            button {
                                r#type: "button",
                                class: "btn btn-secondary",
                                onclick: move |_| state.write().close_editor(),
                                "Cancel"
                            }
                        }
                    }
                }
            }

            if current.pending_delete.is_some() {
                ConfirmDialog {
                    message: E::DELETE_PROMPT.to_string(),
                    on_confirm: move |_| confirm_delete(state),
                    on_cancel: move |_| state.write().cancel_delete(),
                }
            }

            // Last, so it stacks over the editor it reports on.
            if let Some(message) = current.alert.clone() {
                AlertDialog {
                    message,
                    on_dismiss: move |_| state.write().dismiss_alert(),
                }
            }
        }
    }
}
