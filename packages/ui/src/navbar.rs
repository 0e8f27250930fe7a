use dioxus::prelude::*;

/// Top navigation bar. Links are supplied by the platform crate so they can
/// use its own `Route` enum.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        nav { id: "navbar",
            span { class: "navbar-brand", "Ops Scheduler" }
            div { class: "navbar-links", {children} }
        }
    }
}
