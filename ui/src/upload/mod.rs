//! Report upload: file selection from two channels, local preview and a
//! single-flight submission.

pub mod alert;
mod orchestrator;
mod slot;
mod surface;
mod view;

pub use alert::{AlertTone, ResultAlert};
pub use orchestrator::{PendingUpload, SubmissionFields, SubmitOutcome, UploadOrchestrator};
pub use slot::FileSlot;
pub use surface::{selection_label, UploadSurface};
pub use view::UploadPanel;

pub use crate::core::file::{FileReadError, PickedFile, ReportFile};
