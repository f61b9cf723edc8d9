//! Scriptable backend for unit tests.

use std::cell::{Cell, RefCell};

use api::{
    ApiResponse, ApiResult, CycleId, CycleMetrics, DashboardApi, NewProject, ProjectAnalytics,
    ProjectCreated, ProjectId, ProjectSummary, TransportError, UploadRequest, UploadResult,
};
use async_trait::async_trait;
use futures_channel::oneshot;

#[derive(Default)]
pub struct FakeApi {
    pub uploads: RefCell<Vec<UploadRequest>>,
    pub projects: RefCell<Vec<NewProject>>,
    pub analytics_calls: Cell<usize>,
    upload_reply: RefCell<Option<ApiResult<UploadResult>>>,
    project_reply: RefCell<Option<ApiResult<ProjectCreated>>>,
    list_reply: RefCell<Option<ApiResult<Vec<ProjectSummary>>>>,
    pub list_calls: Cell<usize>,
    hold: RefCell<Option<oneshot::Receiver<()>>>,
}

impl FakeApi {
    pub fn with_upload_reply(reply: ApiResult<UploadResult>) -> Self {
        let api = Self::default();
        *api.upload_reply.borrow_mut() = Some(reply);
        api
    }

    pub fn with_project_reply(reply: ApiResult<ProjectCreated>) -> Self {
        let api = Self::default();
        *api.project_reply.borrow_mut() = Some(reply);
        api
    }

    pub fn with_project_list(reply: ApiResult<Vec<ProjectSummary>>) -> Self {
        let api = Self::default();
        *api.list_reply.borrow_mut() = Some(reply);
        api
    }

    /// Park the next call until the returned sender fires (or is dropped).
    pub fn hold_next_call(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.hold.borrow_mut() = Some(rx);
        tx
    }

    async fn wait_if_held(&self) {
        let held = self.hold.borrow_mut().take();
        if let Some(release) = held {
            let _ = release.await;
        }
    }
}

/// A 2xx body that did not decode.
pub fn decode_error() -> TransportError {
    let err = serde_json::from_str::<u8>("not json").unwrap_err();
    TransportError::Decode(err)
}

/// A request that never reached the server.
pub fn request_error() -> TransportError {
    let err = reqwest::Client::new()
        .get("http://")
        .build()
        .unwrap_err();
    TransportError::Request(err)
}

pub fn summary(id: ProjectId, name: &str) -> ProjectSummary {
    ProjectSummary {
        id,
        name: name.to_string(),
        ..ProjectSummary::default()
    }
}

fn not_found<T>() -> ApiResult<T> {
    Ok(ApiResponse::Failed {
        status: 404,
        detail: None,
    })
}

#[async_trait(?Send)]
impl DashboardApi for FakeApi {
    async fn upload(&self, request: UploadRequest) -> ApiResult<UploadResult> {
        self.uploads.borrow_mut().push(request);
        self.wait_if_held().await;
        let reply = self.upload_reply.borrow_mut().take();
        reply.unwrap_or_else(not_found)
    }

    async fn list_projects(&self) -> ApiResult<Vec<ProjectSummary>> {
        self.list_calls.set(self.list_calls.get() + 1);
        self.wait_if_held().await;
        let reply = self.list_reply.borrow_mut().take();
        reply.unwrap_or_else(not_found)
    }

    async fn create_project(&self, project: &NewProject) -> ApiResult<ProjectCreated> {
        self.projects.borrow_mut().push(project.clone());
        self.wait_if_held().await;
        let reply = self.project_reply.borrow_mut().take();
        reply.unwrap_or_else(not_found)
    }

    async fn cycle_analytics(&self, _cycle_id: CycleId) -> ApiResult<CycleMetrics> {
        self.analytics_calls.set(self.analytics_calls.get() + 1);
        not_found()
    }

    async fn project_analytics(&self, _project_id: ProjectId) -> ApiResult<ProjectAnalytics> {
        self.analytics_calls.set(self.analytics_calls.get() + 1);
        not_found()
    }
}
