//! Wire types shared by the backend endpoints.
//!
//! Aggregate fields default when missing so a partial payload still renders
//! (possibly as an empty chart) instead of failing to decode.

use serde::{Deserialize, Serialize};

use crate::ordered::OrderedMap;

pub type CycleId = i64;
pub type ProjectId = i64;

/// Category name → bug count, in server order.
pub type Distribution = OrderedMap<u64>;

/// Tester name → counts, in server order.
pub type TesterBreakdown = OrderedMap<TesterCounts>;

/// Component name → metrics, in server order.
pub type ComponentBreakdown = OrderedMap<ComponentMetric>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TesterCounts {
    pub valid: u64,
    pub invalid: u64,
    pub duplicate: u64,
    pub total: u64,
    pub accuracy: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentMetric {
    pub total: u64,
    pub accuracy: f64,
    pub valid: u64,
    pub invalid: u64,
}

/// One cycle's contribution to a project trend series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleTrendPoint {
    pub cycle_id: Option<CycleId>,
    pub cycle_name: String,
    pub created_at: Option<String>,
    pub testing_accuracy: f64,
    pub invalid_rate: f64,
    pub duplicate_rate: f64,
    pub classification_distribution: Option<Distribution>,
}

/// Response of `GET /api/analytics/cycle/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleMetrics {
    pub total_bugs: u64,
    pub testing_accuracy: f64,
    pub duplicate_rate: f64,
    pub invalid_rate: f64,
    pub misclassification_rate: f64,
    pub dde: f64,
    pub classification_distribution: Distribution,
    pub per_tester: TesterBreakdown,
    pub component_breakdown: ComponentBreakdown,
}

/// Response of `GET /api/analytics/project/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectAnalytics {
    pub project_id: ProjectId,
    pub project_name: String,
    pub trends: Vec<CycleTrendPoint>,
}

/// Success body of `POST /api/upload`.
///
/// The three counters are only present when the server ran classification;
/// `None` means "not reported", which is not the same as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResult {
    pub total_bugs: u64,
    pub source_system: String,
    pub cycle_id: CycleId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classified: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duplicates_found: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_confidence: Option<u64>,
}

/// Multipart payload for `POST /api/upload`.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadRequest {
    pub file_name: String,
    pub file_bytes: Vec<u8>,
    pub project_id: String,
    pub cycle_name: String,
    pub source_system: String,
}

/// Body of `POST /api/projects`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    pub description: String,
}

/// Success body of `POST /api/projects`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCreated {
    pub id: ProjectId,
    pub name: String,
}

/// One entry of `GET /api/projects`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSummary {
    pub id: ProjectId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Option<String>,
    pub cycle_count: u64,
}

/// Structured failure body (`{"detail": "..."}`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Outcome of a request that reached the server.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Ok(T),
    Failed { status: u16, detail: Option<String> },
}
