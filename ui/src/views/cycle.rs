use api::{CycleId, CycleMetrics};
use dioxus::prelude::*;

use crate::charts::{use_chart_renderer, ChartCanvas};
use crate::core::format::format_percent;
use crate::services::use_backend;
use crate::t;

use super::load::settle;

pub const CLASSIFICATION_CANVAS: &str = "classificationChart";
pub const TESTER_CANVAS: &str = "testerChart";
pub const COMPONENT_CANVAS: &str = "componentChart";

/// Per-cycle dashboard: KPI cards and three charts.
#[component]
pub fn CycleDashboard(id: ReadOnlySignal<CycleId>) -> Element {
    let backend = use_backend();
    let renderer = use_chart_renderer();

    let metrics = use_resource(move || {
        let backend = backend.clone();
        let cycle_id = id();
        async move {
            let api = backend?;
            settle("cycle analytics", api.cycle_analytics(cycle_id).await)
        }
    });

    use_effect(move || {
        let (Some(Some(loaded)), Some(renderer)) = (metrics.cloned(), renderer.clone()) else {
            return;
        };
        spawn(async move {
            renderer
                .render_classification(CLASSIFICATION_CANVAS, &loaded.classification_distribution)
                .await;
            renderer
                .render_testers(TESTER_CANVAS, &loaded.per_tester)
                .await;
            renderer
                .render_components(COMPONENT_CANVAS, &loaded.component_breakdown)
                .await;
        });
    });

    let body = match metrics.cloned() {
        None => rsx! { p { class: "card__placeholder", {t!("analytics-loading")} } },
        Some(None) => rsx! { p { class: "card__placeholder", {t!("analytics-unavailable")} } },
        Some(Some(loaded)) => rsx! {
            KpiCards { metrics: loaded }
            div { class: "dashboard__charts",
                ChartCanvas { id: CLASSIFICATION_CANVAS, title: t!("chart-classification") }
                ChartCanvas { id: TESTER_CANVAS, title: t!("chart-testers") }
                ChartCanvas { id: COMPONENT_CANVAS, title: t!("chart-components") }
            }
        },
    };

    rsx! {
        section { class: "page dashboard",
            h1 { {t!("cycle-title", id = id())} }
            {body}
        }
    }
}

#[component]
fn KpiCards(metrics: CycleMetrics) -> Element {
    let cards = [
        (t!("kpi-total-bugs"), metrics.total_bugs.to_string()),
        (t!("kpi-accuracy"), format!("{}%", format_percent(metrics.testing_accuracy))),
        (t!("kpi-invalid"), format!("{}%", format_percent(metrics.invalid_rate))),
        (t!("kpi-duplicate"), format!("{}%", format_percent(metrics.duplicate_rate))),
        (
            t!("kpi-misclassification"),
            format!("{}%", format_percent(metrics.misclassification_rate)),
        ),
        (t!("kpi-dde"), format!("{}%", format_percent(metrics.dde))),
    ];

    rsx! {
        div { class: "kpi-grid",
            for (label, value) in cards {
                div { key: "{label}", class: "kpi-card",
                    span { class: "kpi-card__value", "{value}" }
                    span { class: "kpi-card__label", "{label}" }
                }
            }
        }
    }
}
