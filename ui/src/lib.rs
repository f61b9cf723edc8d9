//! Shared UI crate for Bugdash: chart adapters, the upload flow, views and
//! localization used by both the web and desktop launchers.

pub mod charts;
pub mod core;
pub mod i18n;
pub mod preview;
pub mod projects;
pub mod services;
pub mod upload;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub mod routes;

    pub use app_navbar::AppNavbar;
    pub use routes::{register_routes, RouteLinks};
}

#[cfg(test)]
mod test_support;

/// Shared stylesheet, inlined by launchers that do not serve assets.
pub const THEME_CSS: &str = include_str!("../assets/theme/main.css");
