use api::ProjectId;
use dioxus::prelude::*;

use crate::charts::{use_chart_renderer, ChartCanvas};
use crate::services::use_backend;
use crate::t;

use super::load::settle;

pub const TREND_CANVAS: &str = "trendChart";
pub const CATEGORY_CANVAS: &str = "categoryChart";

/// Cross-cycle trends of one project.
#[component]
pub fn ProjectTrends(id: ReadOnlySignal<ProjectId>) -> Element {
    let backend = use_backend();
    let renderer = use_chart_renderer();

    let analytics = use_resource(move || {
        let backend = backend.clone();
        let project_id = id();
        async move {
            let api = backend?;
            settle("project analytics", api.project_analytics(project_id).await)
        }
    });

    use_effect(move || {
        let (Some(Some(loaded)), Some(renderer)) = (analytics.cloned(), renderer.clone()) else {
            return;
        };
        spawn(async move {
            renderer.render_trend(TREND_CANVAS, &loaded.trends).await;
            renderer
                .render_category_by_cycle(CATEGORY_CANVAS, &loaded.trends)
                .await;
        });
    });

    let (title, body) = match analytics.cloned() {
        None => (
            t!("trends-title-fallback"),
            rsx! { p { class: "card__placeholder", {t!("analytics-loading")} } },
        ),
        Some(None) => (
            t!("trends-title-fallback"),
            rsx! { p { class: "card__placeholder", {t!("analytics-unavailable")} } },
        ),
        Some(Some(loaded)) if loaded.trends.is_empty() => (
            loaded.project_name.clone(),
            rsx! { p { class: "card__placeholder", {t!("trends-empty")} } },
        ),
        Some(Some(loaded)) => (
            loaded.project_name.clone(),
            rsx! {
                div { class: "dashboard__charts",
                    ChartCanvas { id: TREND_CANVAS, title: t!("chart-trend") }
                    ChartCanvas { id: CATEGORY_CANVAS, title: t!("chart-category-by-cycle") }
                }
            },
        ),
    };

    rsx! {
        section { class: "page dashboard",
            h1 { "{title}" }
            {body}
        }
    }
}
