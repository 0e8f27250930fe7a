// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

use dioxus::prelude::*;

use ui::Navbar;
use ui::registry::{IndexesPage, TeamMembersPage};
use ui::scheduler::SchedulerPage;
use ui::tasks::TaskDashboardPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Scheduler {},
        #[route("/tasks")]
        Tasks {},
        #[route("/team")]
        Team {},
        #[route("/indexes")]
        Indexes {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "desktop")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_err() {
            eprintln!("tracing subscriber already installed");
        }
    }

    tracing::info!("Starting scheduler front end");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Ops Scheduler" }

        Router::<Route> {}
    }
}

/// Shared navbar above every page.
#[component]
fn AppLayout() -> Element {
    rsx! {
        Navbar {
            Link { to: Route::Scheduler {}, active_class: "active", "Scheduler" }
            Link { to: Route::Tasks {}, active_class: "active", "Tasks" }
            Link { to: Route::Team {}, active_class: "active", "Team Members" }
            Link { to: Route::Indexes {}, active_class: "active", "Indexes" }
        }

        main { class: "app-main",
            Outlet::<Route> {}
        }
    }
}

#[component]
fn Scheduler() -> Element {
    rsx! {
        SchedulerPage {}
    }
}

#[component]
fn Tasks() -> Element {
    rsx! {
        TaskDashboardPage {}
    }
}

#[component]
fn Team() -> Element {
    rsx! {
        TeamMembersPage {}
    }
}

#[component]
fn Indexes() -> Element {
    rsx! {
        IndexesPage {}
    }
}
