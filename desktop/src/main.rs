#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::{register_routes, AppNavbar, RouteLinks};
use ui::core::config::DashboardConfig;
use ui::services::use_dashboard_services;
use ui::views::{CycleDashboard, Home, ProjectTrends, Upload};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
    #[route("/upload")]
    Upload {},
    #[route("/cycles/:id")]
    CycleDashboard { id: i64 },
    #[route("/projects/:id")]
    ProjectTrends { id: i64 },
}

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Bugdash – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resolve_resource_dir()),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_upload(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Upload {}, "{label}" })
}
fn nav_cycle(id: i64, label: &str) -> Element {
    rsx!(Link { to: Route::CycleDashboard { id }, "{label}" })
}
fn nav_project(id: i64, label: &str) -> Element {
    rsx!(Link { to: Route::ProjectTrends { id }, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // AppNavbar updates this on language selection; the routed subtree is keyed by it.
    let lang_code = use_signal(|| ui::i18n::FALLBACK_LANGUAGE.to_string());
    use_context_provider(|| lang_code);

    register_routes(RouteLinks {
        home: nav_home,
        upload: nav_upload,
        cycle: nav_cycle,
        project: nav_project,
    });
    use_dashboard_services(DashboardConfig::from_env());

    rsx! {
        // The shared theme is always inlined; desktop builds ship no stylesheet file.
        document::Style { "{ui::THEME_CSS}" }

        div {
            key: "{lang_code()}",
            Router::<Route> { }
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Shared navbar around the desktop-specific `Route` outlet.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
