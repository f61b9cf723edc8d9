use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::TransportError;
use crate::types::{
    ApiResponse, CycleId, CycleMetrics, ErrorBody, NewProject, ProjectAnalytics, ProjectCreated,
    ProjectId, ProjectSummary, UploadRequest, UploadResult,
};

pub type ApiResult<T> = Result<ApiResponse<T>, TransportError>;

/// Backend operations used by the dashboard.
///
/// Futures are not `Send`: every caller runs on the single UI thread.
#[async_trait(?Send)]
pub trait DashboardApi {
    /// `POST /api/upload` (multipart).
    async fn upload(&self, request: UploadRequest) -> ApiResult<UploadResult>;

    /// `GET /api/projects`, in server order.
    async fn list_projects(&self) -> ApiResult<Vec<ProjectSummary>>;

    /// `POST /api/projects` (JSON).
    async fn create_project(&self, project: &NewProject) -> ApiResult<ProjectCreated>;

    /// `GET /api/analytics/cycle/{id}`.
    async fn cycle_analytics(&self, cycle_id: CycleId) -> ApiResult<CycleMetrics>;

    /// `GET /api/analytics/project/{id}`.
    async fn project_analytics(&self, project_id: ProjectId) -> ApiResult<ProjectAnalytics>;
}

/// reqwest-backed client (fetch on wasm, hyper on native).
#[derive(Debug, Clone)]
pub struct HttpDashboardApi {
    client: reqwest::Client,
    base: Url,
}

impl HttpDashboardApi {
    pub fn new(base: &str) -> Result<Self, TransportError> {
        // Url::join drops the last path segment unless the base ends with '/'.
        let normalized = format!("{}/", base.trim_end_matches('/'));
        let base = Url::parse(&normalized).map_err(|source| TransportError::InvalidBaseUrl {
            base: base.to_string(),
            source,
        })?;
        Ok(Self {
            client: reqwest::Client::new(),
            base,
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, TransportError> {
        self.base
            .join(path)
            .map_err(|source| TransportError::InvalidBaseUrl {
                base: self.base.to_string(),
                source,
            })
    }

    async fn read<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        decode_body(status, &body)
    }
}

#[async_trait(?Send)]
impl DashboardApi for HttpDashboardApi {
    async fn upload(&self, request: UploadRequest) -> ApiResult<UploadResult> {
        let url = self.endpoint("api/upload")?;
        debug!(file = %request.file_name, bytes = request.file_bytes.len(), "uploading report");

        let file = Part::bytes(request.file_bytes).file_name(request.file_name);
        let form = Form::new()
            .part("file", file)
            .text("project_id", request.project_id)
            .text("cycle_name", request.cycle_name)
            .text("source_system", request.source_system);

        let response = self.client.post(url).multipart(form).send().await?;
        Self::read(response).await
    }

    async fn list_projects(&self) -> ApiResult<Vec<ProjectSummary>> {
        let url = self.endpoint("api/projects")?;
        let response = self.client.get(url).send().await?;
        Self::read(response).await
    }

    async fn create_project(&self, project: &NewProject) -> ApiResult<ProjectCreated> {
        let url = self.endpoint("api/projects")?;
        let response = self.client.post(url).json(project).send().await?;
        Self::read(response).await
    }

    async fn cycle_analytics(&self, cycle_id: CycleId) -> ApiResult<CycleMetrics> {
        let url = self.endpoint(&format!("api/analytics/cycle/{cycle_id}"))?;
        let response = self.client.get(url).send().await?;
        Self::read(response).await
    }

    async fn project_analytics(&self, project_id: ProjectId) -> ApiResult<ProjectAnalytics> {
        let url = self.endpoint(&format!("api/analytics/project/{project_id}"))?;
        let response = self.client.get(url).send().await?;
        Self::read(response).await
    }
}

/// Map a status + raw body onto the response model.
///
/// Non-2xx bodies are read as `{"detail": "..."}`; any other shape (FastAPI
/// validation lists, HTML error pages) yields `detail: None`.
pub fn decode_body<T: DeserializeOwned>(status: u16, body: &[u8]) -> ApiResult<T> {
    if (200..300).contains(&status) {
        let value = serde_json::from_slice(body)?;
        return Ok(ApiResponse::Ok(value));
    }

    let detail = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|err| err.detail);
    Ok(ApiResponse::Failed { status, detail })
}
