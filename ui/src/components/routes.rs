//! Route links supplied by the launcher.
//!
//! `ui` does not know the launcher's `Route` enum, so each launcher registers
//! functions that build a router `Link` around a label. Without a registration
//! the helpers fall back to plain anchors.

use api::{CycleId, ProjectId};
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

pub struct RouteLinks {
    pub home: fn(label: &str) -> Element,
    pub upload: fn(label: &str) -> Element,
    pub cycle: fn(id: CycleId, label: &str) -> Element,
    pub project: fn(id: ProjectId, label: &str) -> Element,
}

static ROUTE_LINKS: OnceCell<RouteLinks> = OnceCell::new();

/// First registration wins.
pub fn register_routes(links: RouteLinks) {
    let _ = ROUTE_LINKS.set(links);
}

pub(crate) fn registered() -> Option<&'static RouteLinks> {
    ROUTE_LINKS.get()
}

pub fn cycle_href(id: CycleId) -> String {
    format!("/cycles/{id}")
}

pub fn project_href(id: ProjectId) -> String {
    format!("/projects/{id}")
}

pub fn home_link(label: &str) -> Element {
    match registered() {
        Some(links) => (links.home)(label),
        None => anchor("/".to_string(), label),
    }
}

pub fn upload_link(label: &str) -> Element {
    match registered() {
        Some(links) => (links.upload)(label),
        None => anchor("/upload".to_string(), label),
    }
}

pub fn cycle_link(id: CycleId, label: &str) -> Element {
    match registered() {
        Some(links) => (links.cycle)(id, label),
        None => anchor(cycle_href(id), label),
    }
}

pub fn project_link(id: ProjectId, label: &str) -> Element {
    match registered() {
        Some(links) => (links.project)(id, label),
        None => anchor(project_href(id), label),
    }
}

fn anchor(href: String, label: &str) -> Element {
    rsx! { a { href: "{href}", "{label}" } }
}
