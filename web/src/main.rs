use dioxus::prelude::*;

use ui::components::{register_routes, AppNavbar, RouteLinks};
use ui::core::config::DashboardConfig;
use ui::services::use_dashboard_services;
use ui::views::{CycleDashboard, Home, ProjectTrends, Upload};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/upload")]
    Upload {},
    #[route("/cycles/:id")]
    CycleDashboard { id: i64 },
    #[route("/projects/:id")]
    ProjectTrends { id: i64 },
}

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_upload(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Upload {},
        "{label}"
    })
}
fn nav_cycle(id: i64, label: &str) -> Element {
    rsx!(Link {
        to: Route::CycleDashboard { id },
        "{label}"
    })
}
fn nav_project(id: i64, label: &str) -> Element {
    rsx!(Link {
        to: Route::ProjectTrends { id },
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_routes(RouteLinks {
        home: nav_home,
        upload: nav_upload,
        cycle: nav_cycle,
        project: nav_project,
    });
    use_dashboard_services(DashboardConfig::from_env());

    let lang_code = use_signal(|| ui::i18n::FALLBACK_LANGUAGE.to_string());
    use_context_provider(|| lang_code);

    rsx! {
        document::Style { "{ui::THEME_CSS}" }

        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Shared navbar around the web-specific `Route` outlet.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
