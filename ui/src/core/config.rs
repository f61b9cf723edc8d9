//! Runtime configuration for the dashboard client.

use serde::{Deserialize, Serialize};

use super::platform::{self, Platform};

/// Backend used by native builds when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Environment variable overriding the backend base URL on native builds.
pub const API_BASE_ENV: &str = "BUGDASH_API_BASE";

/// Chart.js bundle injected by the chart engine loader.
pub const CHART_SCRIPT_SRC: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Base URL the `/api/...` paths are joined onto.
    pub api_base: String,
    /// Script URL of the charting engine.
    pub chart_script_src: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: match Platform::current() {
                Platform::Web => platform::page_origin(),
                Platform::Desktop => None,
            }
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            chart_script_src: CHART_SCRIPT_SRC.to_string(),
        }
    }
}

impl DashboardConfig {
    /// Defaults plus process environment overrides (native only; the browser has none).
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup. Blank values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(base) = lookup(API_BASE_ENV).filter(|v| !v.trim().is_empty()) {
            self.api_base = base.trim().to_string();
        }
        self
    }
}
