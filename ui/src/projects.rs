//! Project selector state and the quick-create dialog.

use api::{ApiResponse, DashboardApi, NewProject, ProjectId, ProjectSummary};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOption {
    pub id: ProjectId,
    pub name: String,
}

impl From<ProjectSummary> for ProjectOption {
    fn from(summary: ProjectSummary) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectSelector {
    options: Vec<ProjectOption>,
    selected: Option<ProjectId>,
}

impl ProjectSelector {
    /// Starts with the first option selected, like a native `<select>`.
    pub fn new(options: Vec<ProjectOption>) -> Self {
        let selected = options.first().map(|o| o.id);
        Self { options, selected }
    }

    pub fn options(&self) -> &[ProjectOption] {
        &self.options
    }

    pub fn selected(&self) -> Option<ProjectId> {
        self.selected
    }

    /// Select by the form value of an option; unknown values are ignored.
    pub fn select_value(&mut self, value: &str) {
        if let Ok(id) = value.parse::<ProjectId>() {
            if self.options.iter().any(|o| o.id == id) {
                self.selected = Some(id);
            }
        }
    }

    pub fn append_and_select(&mut self, option: ProjectOption) {
        self.selected = Some(option.id);
        self.options.push(option);
    }

    /// The value submitted as `project_id` (empty when nothing is selected).
    pub fn selected_value(&self) -> String {
        self.selected.map(|id| id.to_string()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickCreateForm {
    pub name: String,
    pub description: String,
    pub open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuickCreateOutcome {
    /// Blank name; nothing was sent.
    Skipped,
    Created(ProjectOption),
    Failed,
}

impl QuickCreateForm {
    /// On success: append and select the project, clear inputs, close.
    /// Otherwise the dialog keeps its state.
    pub fn apply(&mut self, selector: &mut ProjectSelector, outcome: &QuickCreateOutcome) {
        if let QuickCreateOutcome::Created(option) = outcome {
            selector.append_and_select(option.clone());
            self.name.clear();
            self.description.clear();
            self.open = false;
        }
    }
}

/// Existing projects for the selector, in server order. Any failure leaves
/// the selector empty; quick-create still works.
pub async fn load_projects(api: &dyn DashboardApi) -> Vec<ProjectOption> {
    match api.list_projects().await {
        Ok(ApiResponse::Ok(projects)) => projects.into_iter().map(ProjectOption::from).collect(),
        Ok(ApiResponse::Failed { status, detail }) => {
            warn!(status, detail = detail.as_deref().unwrap_or(""), "project list rejected");
            Vec::new()
        }
        Err(err) => {
            warn!(%err, "project list request failed");
            Vec::new()
        }
    }
}

/// Create a project from the dialog's inputs. The name is trimmed, the
/// description is sent as typed.
pub async fn create_project(
    api: &dyn DashboardApi,
    name: &str,
    description: &str,
) -> QuickCreateOutcome {
    let name = name.trim();
    if name.is_empty() {
        debug!("quick-create with blank name ignored");
        return QuickCreateOutcome::Skipped;
    }

    let project = NewProject {
        name: name.to_string(),
        description: description.to_string(),
    };
    match api.create_project(&project).await {
        Ok(ApiResponse::Ok(created)) => QuickCreateOutcome::Created(ProjectOption {
            id: created.id,
            name: created.name,
        }),
        Ok(ApiResponse::Failed { status, detail }) => {
            warn!(status, detail = detail.as_deref().unwrap_or(""), "project creation rejected");
            QuickCreateOutcome::Failed
        }
        Err(err) => {
            warn!(%err, "project creation request failed");
            QuickCreateOutcome::Failed
        }
    }
}
