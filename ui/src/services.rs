//! App-wide handles shared through the Dioxus context.

use std::rc::Rc;

use api::{DashboardApi, HttpDashboardApi};
use dioxus::prelude::*;
use tracing::{error, info};

use crate::charts::use_chart_runtime_provider;
use crate::core::config::DashboardConfig;

/// The backend client, absent when the configured base URL is unusable.
#[derive(Clone)]
pub struct Backend(Option<Rc<dyn DashboardApi>>);

impl Backend {
    pub fn from_config(config: &DashboardConfig) -> Self {
        match HttpDashboardApi::new(&config.api_base) {
            Ok(api) => {
                info!(base = %api.base(), "dashboard backend configured");
                Self(Some(Rc::new(api)))
            }
            Err(err) => {
                error!(%err, "dashboard backend unavailable");
                Self(None)
            }
        }
    }

    pub fn api(&self) -> Option<Rc<dyn DashboardApi>> {
        self.0.clone()
    }
}

/// Provide the backend and the chart runtime to every view below the root.
pub fn use_dashboard_services(config: DashboardConfig) {
    let chart_src = config.chart_script_src.clone();
    use_context_provider(move || Backend::from_config(&config));
    use_chart_runtime_provider(chart_src);
}

pub fn use_backend() -> Option<Rc<dyn DashboardApi>> {
    try_use_context::<Backend>().and_then(|backend| backend.api())
}
