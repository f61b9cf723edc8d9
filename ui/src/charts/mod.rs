//! Analytics charts: aggregate → [`ChartSpec`] adapters, the Chart.js bridge,
//! and the renderer binding the two to canvas elements.

pub mod adapter;
mod canvas;
pub mod engine;
pub mod palette;
mod renderer;
pub mod spec;

pub use canvas::{use_chart_renderer, use_chart_runtime_provider, ChartCanvas};
pub use engine::{ChartEngine, ChartError, EngineGate, ReadySignal, WebviewChartEngine};
pub use renderer::{ChartRenderer, RenderOutcome};
pub use spec::ChartSpec;
