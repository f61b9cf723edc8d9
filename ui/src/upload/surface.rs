use crate::core::format::format_kib;
use crate::preview::PreviewTable;

use super::alert::ResultAlert;

/// The widgets the upload flow writes to, handed over at construction.
pub trait UploadSurface {
    fn set_drag_active(&self, active: bool);

    fn show_selection(&self, label: String);

    /// Fill and reveal the preview section.
    fn show_preview(&self, table: PreviewTable);

    /// `true` disables the submit control and shows the busy indicator.
    fn set_busy(&self, busy: bool);

    fn show_result(&self, alert: ResultAlert);
}

pub fn selection_label(name: &str, size: u64) -> String {
    format!("Selected: {name} ({})", format_kib(size))
}
