use std::cell::{Cell, RefCell};
use std::rc::Rc;

use api::{ApiResponse, DashboardApi, UploadRequest, UploadResult};
use tracing::{debug, error, warn};

use crate::core::file::ReportFile;
use crate::preview;

use super::alert::{failure_alert, success_alert};
use super::slot::FileSlot;
use super::surface::{selection_label, UploadSurface};

/// Form values sent alongside the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionFields {
    pub project_id: String,
    pub cycle_name: String,
    pub source_system: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A submission was already in flight.
    Ignored,
    NoFile,
    Uploaded(UploadResult),
    Rejected { status: u16, detail: Option<String> },
    ReadFailed,
    TransportFailed,
}

/// Owns the selected-file slot and the submit flag; drives one upload at a time.
pub struct UploadOrchestrator<S> {
    api: Rc<dyn DashboardApi>,
    surface: S,
    slot: RefCell<FileSlot<dyn ReportFile>>,
    submit_enabled: Cell<bool>,
}

impl<S: UploadSurface> UploadOrchestrator<S> {
    pub fn new(api: Rc<dyn DashboardApi>, surface: S) -> Self {
        Self {
            api,
            surface,
            slot: RefCell::new(FileSlot::default()),
            submit_enabled: Cell::new(true),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled.get()
    }

    pub fn drag_enter(&self) {
        self.surface.set_drag_active(true);
    }

    pub fn drag_leave(&self) {
        self.surface.set_drag_active(false);
    }

    /// A file arrived through either channel (drop or picker).
    pub async fn select(&self, file: Rc<dyn ReportFile>) {
        self.slot.borrow_mut().replace(file.clone());
        self.surface
            .show_selection(selection_label(file.name(), file.size()));

        if let Some(table) = preview::preview(&*file).await {
            self.surface.show_preview(table);
        }
    }

    /// Claim the submit control and capture the current file.
    ///
    /// Runs synchronously, so a second trigger arriving before the first
    /// request is sent already sees the control disabled.
    pub fn begin_submit(
        self: Rc<Self>,
        fields: SubmissionFields,
    ) -> Result<PendingUpload<S>, SubmitOutcome> {
        if !self.submit_enabled.get() {
            debug!("upload already in flight; submit ignored");
            return Err(SubmitOutcome::Ignored);
        }
        let current = self.slot.borrow().current();
        let Some(file) = current else {
            warn!("submit without a selected file ignored");
            return Err(SubmitOutcome::NoFile);
        };

        Ok(PendingUpload {
            guard: InFlight::engage(self),
            file,
            fields,
        })
    }

    pub async fn submit(self: Rc<Self>, fields: SubmissionFields) -> SubmitOutcome {
        match self.begin_submit(fields) {
            Ok(pending) => pending.send().await,
            Err(outcome) => outcome,
        }
    }
}

/// A claimed submission. Dropping it, sent or not, releases the control.
pub struct PendingUpload<S: UploadSurface> {
    guard: InFlight<S>,
    file: Rc<dyn ReportFile>,
    fields: SubmissionFields,
}

impl<S: UploadSurface> PendingUpload<S> {
    pub async fn send(self) -> SubmitOutcome {
        let Self {
            guard,
            file,
            fields,
        } = self;
        let owner = &guard.owner;

        let file_bytes = match file.read_all().await {
            Ok(bytes) => bytes,
            Err(err) => {
                error!(%err, "selected file could not be read for upload");
                return SubmitOutcome::ReadFailed;
            }
        };

        let request = UploadRequest {
            file_name: file.name().to_string(),
            file_bytes,
            project_id: fields.project_id,
            cycle_name: fields.cycle_name,
            source_system: fields.source_system,
        };

        match owner.api.upload(request).await {
            Ok(ApiResponse::Ok(result)) => {
                owner.surface.show_result(success_alert(&result));
                SubmitOutcome::Uploaded(result)
            }
            Ok(ApiResponse::Failed { status, detail }) => {
                owner.surface.show_result(failure_alert(detail.clone()));
                SubmitOutcome::Rejected { status, detail }
            }
            Err(err) => {
                error!(%err, "upload request failed");
                SubmitOutcome::TransportFailed
            }
        }
    }
}

struct InFlight<S: UploadSurface> {
    owner: Rc<UploadOrchestrator<S>>,
}

impl<S: UploadSurface> InFlight<S> {
    fn engage(owner: Rc<UploadOrchestrator<S>>) -> Self {
        owner.submit_enabled.set(false);
        owner.surface.set_busy(true);
        Self { owner }
    }
}

impl<S: UploadSurface> Drop for InFlight<S> {
    fn drop(&mut self) {
        self.owner.submit_enabled.set(true);
        self.owner.surface.set_busy(false);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use api::{ApiResponse, UploadResult};
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;

    use super::*;
    use crate::core::file::testing::MemoryFile;
    use crate::preview::PreviewTable;
    use crate::test_support::{decode_error, request_error, FakeApi};
    use crate::upload::alert::{AlertTone, ResultAlert};

    #[derive(Debug, Clone, PartialEq)]
    enum Seen {
        Drag(bool),
        Selection(String),
        Preview(PreviewTable),
        Busy(bool),
        Result(ResultAlert),
    }

    #[derive(Default)]
    struct RecordingSurface {
        seen: RefCell<Vec<Seen>>,
    }

    impl RecordingSurface {
        fn busy_toggles(&self) -> Vec<bool> {
            self.seen
                .borrow()
                .iter()
                .filter_map(|s| match s {
                    Seen::Busy(b) => Some(*b),
                    _ => None,
                })
                .collect()
        }

        fn results(&self) -> Vec<ResultAlert> {
            self.seen
                .borrow()
                .iter()
                .filter_map(|s| match s {
                    Seen::Result(alert) => Some(alert.clone()),
                    _ => None,
                })
                .collect()
        }
    }

    impl UploadSurface for RecordingSurface {
        fn set_drag_active(&self, active: bool) {
            self.seen.borrow_mut().push(Seen::Drag(active));
        }

        fn show_selection(&self, label: String) {
            self.seen.borrow_mut().push(Seen::Selection(label));
        }

        fn show_preview(&self, table: PreviewTable) {
            self.seen.borrow_mut().push(Seen::Preview(table));
        }

        fn set_busy(&self, busy: bool) {
            self.seen.borrow_mut().push(Seen::Busy(busy));
        }

        fn show_result(&self, alert: ResultAlert) {
            self.seen.borrow_mut().push(Seen::Result(alert));
        }
    }

    fn uploaded(duplicates: Option<u64>) -> UploadResult {
        UploadResult {
            total_bugs: 40,
            source_system: "azure_devops".into(),
            cycle_id: 3,
            classified: Some(40),
            duplicates_found: duplicates,
            low_confidence: None,
        }
    }

    type Harness = (Rc<FakeApi>, Rc<UploadOrchestrator<RecordingSurface>>);

    fn orchestrator(api: FakeApi) -> Harness {
        let api = Rc::new(api);
        let orchestrator = UploadOrchestrator::new(api.clone(), RecordingSurface::default());
        (api, Rc::new(orchestrator))
    }

    fn fields() -> SubmissionFields {
        SubmissionFields {
            project_id: "2".into(),
            cycle_name: "Sprint 9".into(),
            source_system: "auto".into(),
        }
    }

    fn csv(name: &str) -> Rc<dyn ReportFile> {
        Rc::new(MemoryFile::new(name, "id,title\n1,Crash\n"))
    }

    fn select_and_submit(orchestrator: &Rc<UploadOrchestrator<RecordingSurface>>) -> SubmitOutcome {
        block_on(async {
            orchestrator.select(csv("bugs.csv")).await;
            orchestrator.clone().submit(fields()).await
        })
    }

    #[test]
    fn selection_updates_label_and_preview() {
        let (_, orchestrator) = orchestrator(FakeApi::default());
        block_on(orchestrator.select(csv("bugs.csv")));

        let seen = orchestrator.surface().seen.borrow();
        assert_eq!(seen[0], Seen::Selection("Selected: bugs.csv (0.0 KB)".into()));
        assert!(matches!(&seen[1], Seen::Preview(t) if t.headers == vec!["id", "title"]));
    }

    #[test]
    fn non_previewable_selection_only_updates_label() {
        let (_, orchestrator) = orchestrator(FakeApi::default());
        let file: Rc<dyn ReportFile> = Rc::new(MemoryFile::new("bugs.xlsx", vec![0u8; 2048]));
        block_on(orchestrator.select(file));

        assert_eq!(
            *orchestrator.surface().seen.borrow(),
            vec![Seen::Selection("Selected: bugs.xlsx (2.0 KB)".into())]
        );
    }

    #[test]
    fn drag_toggles_indicator() {
        let (_, orchestrator) = orchestrator(FakeApi::default());
        orchestrator.drag_enter();
        orchestrator.drag_leave();
        assert_eq!(
            *orchestrator.surface().seen.borrow(),
            vec![Seen::Drag(true), Seen::Drag(false)]
        );
    }

    #[test]
    fn later_selection_is_the_one_submitted() {
        let (api, orchestrator) =
            orchestrator(FakeApi::with_upload_reply(Ok(ApiResponse::Ok(uploaded(None)))));
        block_on(async {
            orchestrator.select(csv("dropped.csv")).await;
            orchestrator.select(csv("picked.csv")).await;
            orchestrator.clone().submit(fields()).await;
        });

        let uploads = api.uploads.borrow();
        assert_eq!(uploads.len(), 1);
        assert_eq!(uploads[0].file_name, "picked.csv");
        assert_eq!(uploads[0].project_id, "2");
        assert_eq!(uploads[0].cycle_name, "Sprint 9");
        assert_eq!(uploads[0].source_system, "auto");
    }

    #[test]
    fn submit_without_file_does_nothing() {
        let (api, orchestrator) = orchestrator(FakeApi::default());
        let outcome = block_on(orchestrator.clone().submit(fields()));

        assert_eq!(outcome, SubmitOutcome::NoFile);
        assert!(api.uploads.borrow().is_empty());
        assert!(orchestrator.surface().seen.borrow().is_empty());
        assert!(orchestrator.submit_enabled());
    }

    #[test]
    fn claim_disables_before_anything_is_awaited() {
        let (api, orchestrator) = orchestrator(FakeApi::default());
        block_on(orchestrator.select(csv("bugs.csv")));

        let first = orchestrator.clone().begin_submit(fields());
        assert!(first.is_ok());
        assert!(!orchestrator.submit_enabled());

        let second = orchestrator.clone().begin_submit(fields());
        assert!(matches!(second, Err(SubmitOutcome::Ignored)));
        assert!(api.uploads.borrow().is_empty());

        drop(first);
        assert!(orchestrator.submit_enabled());
        assert_eq!(orchestrator.surface().busy_toggles(), vec![true, false]);
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let (api, orchestrator) =
            orchestrator(FakeApi::with_upload_reply(Ok(ApiResponse::Ok(uploaded(Some(0))))));
        let release = api.hold_next_call();
        block_on(orchestrator.select(csv("bugs.csv")));

        let mut pool = LocalPool::new();
        let first = Rc::new(RefCell::new(None));
        {
            let orchestrator = orchestrator.clone();
            let first = first.clone();
            pool.spawner()
                .spawn_local(async move {
                    *first.borrow_mut() = Some(orchestrator.submit(fields()).await);
                })
                .unwrap();
        }
        pool.run_until_stalled();

        assert!(!orchestrator.submit_enabled());
        assert_eq!(orchestrator.surface().busy_toggles(), vec![true]);

        let second = block_on(orchestrator.clone().submit(fields()));
        assert_eq!(second, SubmitOutcome::Ignored);
        assert_eq!(api.uploads.borrow().len(), 1);

        release.send(()).unwrap();
        pool.run_until_stalled();

        assert_eq!(
            *first.borrow(),
            Some(SubmitOutcome::Uploaded(uploaded(Some(0))))
        );
        assert!(orchestrator.submit_enabled());
        assert_eq!(orchestrator.surface().busy_toggles(), vec![true, false]);

        let alerts = orchestrator.surface().results();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].tone, AlertTone::Success);
        assert!(alerts[0].message.contains(" Duplicates: 0."));
        assert!(!alerts[0].message.contains("Low confidence"));
        assert_eq!(alerts[0].cycle_href().as_deref(), Some("/cycles/3"));
    }

    #[test]
    fn rejection_surfaces_detail() {
        let (_, orchestrator) = orchestrator(FakeApi::with_upload_reply(Ok(ApiResponse::Failed {
            status: 400,
            detail: Some("Unsupported file type".into()),
        })));
        let outcome = select_and_submit(&orchestrator);

        assert!(matches!(outcome, SubmitOutcome::Rejected { status: 400, .. }));
        let alerts = orchestrator.surface().results();
        assert_eq!(alerts[0].message, "Unsupported file type");
        assert_eq!(alerts[0].tone, AlertTone::Danger);
        assert_eq!(orchestrator.surface().busy_toggles(), vec![true, false]);
    }

    #[test]
    fn rejection_without_detail_uses_fallback() {
        let (_, orchestrator) = orchestrator(FakeApi::with_upload_reply(Ok(ApiResponse::Failed {
            status: 500,
            detail: None,
        })));
        select_and_submit(&orchestrator);

        assert_eq!(orchestrator.surface().results()[0].message, "Upload failed");
    }

    #[test]
    fn transport_failure_leaves_alert_untouched() {
        let (_, orchestrator) = orchestrator(FakeApi::with_upload_reply(Err(request_error())));
        let outcome = select_and_submit(&orchestrator);

        assert_eq!(outcome, SubmitOutcome::TransportFailed);
        assert!(orchestrator.surface().results().is_empty());
        assert!(orchestrator.submit_enabled());
        assert_eq!(orchestrator.surface().busy_toggles(), vec![true, false]);
    }

    #[test]
    fn malformed_success_body_is_logged_only() {
        let (_, orchestrator) = orchestrator(FakeApi::with_upload_reply(Err(decode_error())));
        let outcome = select_and_submit(&orchestrator);

        assert_eq!(outcome, SubmitOutcome::TransportFailed);
        assert!(orchestrator.surface().results().is_empty());
        assert!(orchestrator.submit_enabled());
    }

    #[test]
    fn unreadable_file_releases_the_control() {
        let (api, orchestrator) = orchestrator(FakeApi::default());
        let outcome = block_on(async {
            orchestrator
                .select(Rc::new(MemoryFile::unreadable("gone.csv")))
                .await;
            orchestrator.clone().submit(fields()).await
        });

        assert_eq!(outcome, SubmitOutcome::ReadFailed);
        assert!(api.uploads.borrow().is_empty());
        assert!(orchestrator.submit_enabled());
        assert_eq!(orchestrator.surface().busy_toggles(), vec![true, false]);
    }

    #[test]
    fn dropped_submission_still_releases_the_control() {
        let (api, orchestrator) =
            orchestrator(FakeApi::with_upload_reply(Ok(ApiResponse::Ok(uploaded(None)))));
        let _release = api.hold_next_call();
        block_on(orchestrator.select(csv("bugs.csv")));

        let mut pool = LocalPool::new();
        let handle = {
            let orchestrator = orchestrator.clone();
            pool.spawner()
                .spawn_local_with_handle(async move { orchestrator.submit(fields()).await })
                .unwrap()
        };
        pool.run_until_stalled();
        assert!(!orchestrator.submit_enabled());

        drop(handle);
        pool.run_until_stalled();

        assert!(orchestrator.submit_enabled());
        assert_eq!(orchestrator.surface().busy_toggles(), vec![true, false]);
    }
}
