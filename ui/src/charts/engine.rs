//! Charting engine bridge and its one-shot readiness signal.
//!
//! The engine (Chart.js) lives in the page, not in Rust. It is loaded once by
//! [`load_chart_engine`], which resolves the [`ReadySignal`]; renderers park on
//! the matching [`EngineGate`] until then.

use async_trait::async_trait;
use futures_channel::oneshot;
use futures_util::future::{self, FutureExt, Shared};
use tracing::{debug, error};

use super::spec::ChartSpec;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("chart script bridge failed: {0}")]
    Eval(String),

    #[error("chart config could not be encoded: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result of binding a spec to a render target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mounted {
    Drawn,
    MissingTarget,
}

#[async_trait(?Send)]
pub trait ChartEngine {
    async fn mount(&self, target: &str, spec: &ChartSpec) -> Result<Mounted, ChartError>;
}

/// Create a linked ready signal / gate pair.
pub fn engine_gate() -> (ReadySignal, EngineGate) {
    let (tx, rx) = oneshot::channel();
    (ReadySignal(tx), EngineGate { ready: rx.shared() })
}

/// Resolves the gate. Consumed on use, so it fires at most once.
#[derive(Debug)]
pub struct ReadySignal(oneshot::Sender<()>);

impl ReadySignal {
    pub fn resolve(self) {
        let _ = self.0.send(());
    }
}

#[derive(Clone)]
pub struct EngineGate {
    ready: Shared<oneshot::Receiver<()>>,
}

impl EngineGate {
    pub fn is_ready(&self) -> bool {
        matches!(self.ready.peek(), Some(Ok(())))
    }

    /// Completes once the engine is ready. If the signal is dropped without
    /// resolving, the engine can never load and this never completes.
    pub async fn wait(&self) {
        if self.ready.clone().await.is_err() {
            debug!("chart engine signal dropped; render parked");
            future::pending::<()>().await;
        }
    }
}

/// Drives Chart.js inside the page through the Dioxus script bridge.
/// Works in the browser and in the desktop webview alike.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebviewChartEngine;

#[async_trait(?Send)]
impl ChartEngine for WebviewChartEngine {
    async fn mount(&self, target: &str, spec: &ChartSpec) -> Result<Mounted, ChartError> {
        let script = mount_script(target, &spec.to_config())?;
        let drawn = dioxus::document::eval(&script)
            .join::<bool>()
            .await
            .map_err(|err| ChartError::Eval(format!("{err:?}")))?;
        Ok(if drawn {
            Mounted::Drawn
        } else {
            Mounted::MissingTarget
        })
    }
}

/// Inject the engine script (unless the page already has it) and resolve
/// `signal` once it has loaded. On failure the signal is dropped unresolved.
pub async fn load_chart_engine(script_src: &str, signal: ReadySignal) {
    let script = match loader_script(script_src) {
        Ok(script) => script,
        Err(err) => {
            error!(%err, "chart engine loader could not be built");
            return;
        }
    };

    match dioxus::document::eval(&script).join::<bool>().await {
        Ok(true) => {
            debug!(src = script_src, "chart engine ready");
            signal.resolve();
        }
        Ok(false) => error!(src = script_src, "chart engine reported not loaded"),
        Err(err) => error!(src = script_src, error = ?err, "chart engine failed to load"),
    }
}

pub(crate) fn mount_script(
    target: &str,
    config: &serde_json::Value,
) -> Result<String, ChartError> {
    let target = serde_json::to_string(target)?;
    let config = serde_json::to_string(config)?;
    Ok(format!(
        r#"const canvas = document.getElementById({target});
if (!canvas) {{ return false; }}
const config = {config};
const scales = (config.options && config.options.scales) || {{}};
for (const axis of Object.values(scales)) {{
  const suffix = axis.ticks && axis.ticks.suffix;
  if (suffix) {{ axis.ticks.callback = (value) => value + suffix; }}
}}
const previous = Chart.getChart(canvas);
if (previous) {{ previous.destroy(); }}
new Chart(canvas, config);
return true;"#
    ))
}

pub(crate) fn loader_script(script_src: &str) -> Result<String, ChartError> {
    let src = serde_json::to_string(script_src)?;
    Ok(format!(
        r#"if (typeof window.Chart === "undefined") {{
  await new Promise((resolve, reject) => {{
    const tag = document.createElement("script");
    tag.src = {src};
    tag.async = true;
    tag.onload = resolve;
    tag.onerror = () => reject(new Error("failed to load " + tag.src));
    document.head.appendChild(tag);
  }});
}}
return typeof window.Chart !== "undefined";"#
    ))
}
