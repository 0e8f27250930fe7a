//! Modal building blocks shared by every screen.

use dioxus::prelude::*;

/// A centered dialog over a dimmed backdrop. Clicking the backdrop closes it.
#[component]
pub fn Modal(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                onclick: move |e: MouseEvent| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal-body", {children} }
            }
        }
    }
}

/// Blocking message with a single acknowledge button.
#[component]
pub fn AlertDialog(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div { class: "modal-backdrop modal-backdrop-top",
            div { class: "modal modal-small", role: "alertdialog",
                div { class: "modal-body",
                    p { "{message}" }
                }
                div { class: "form-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_dismiss.call(()),
                        "OK"
                    }
                }
            }
        }
    }
}

/// Yes/no question, used before destructive actions.
#[component]
pub fn ConfirmDialog(
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "modal-backdrop modal-backdrop-top",
            div { class: "modal modal-small", role: "alertdialog",
                div { class: "modal-body",
                    p { "{message}" }
                }
                div { class: "form-actions",
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
