use std::rc::Rc;

use dioxus::prelude::*;

use super::engine::{engine_gate, load_chart_engine, WebviewChartEngine};
use super::renderer::ChartRenderer;

/// Install the app-wide renderer and start loading the engine script.
///
/// Call once from the root component.
pub fn use_chart_runtime_provider(script_src: String) -> ChartRenderer {
    use_context_provider(move || {
        let (signal, gate) = engine_gate();
        spawn(async move {
            load_chart_engine(&script_src, signal).await;
        });
        ChartRenderer::new(Rc::new(WebviewChartEngine), gate)
    })
}

pub fn use_chart_renderer() -> Option<ChartRenderer> {
    try_use_context::<ChartRenderer>()
}

/// Titled card around a canvas the renderer can target by `id`.
#[component]
pub fn ChartCanvas(id: &'static str, title: String) -> Element {
    rsx! {
        figure { class: "chart-card",
            figcaption { class: "chart-card__title", "{title}" }
            div { class: "chart-card__body",
                canvas { id: "{id}", class: "chart-card__canvas" }
            }
        }
    }
}
