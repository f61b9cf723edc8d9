//! Result message shown after a submission reached the server.

use api::{CycleId, UploadResult};

use crate::components::routes::cycle_href;

pub const UPLOAD_FAILED: &str = "Upload failed";
pub const CYCLE_LINK_TEXT: &str = "View Cycle Details";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertTone {
    Success,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultAlert {
    pub tone: AlertTone,
    pub message: String,
    /// Set on success; the alert links to the cycle dashboard.
    pub cycle: Option<CycleId>,
}

impl ResultAlert {
    pub fn css_class(&self) -> &'static str {
        match self.tone {
            AlertTone::Success => "alert alert--success",
            AlertTone::Danger => "alert alert--danger",
        }
    }

    pub fn cycle_href(&self) -> Option<String> {
        self.cycle.map(cycle_href)
    }
}

/// `Uploaded N bugs to cycle. Source: S.` followed by each reported counter.
/// A counter the server left out is omitted; a reported zero is shown.
pub fn success_alert(result: &UploadResult) -> ResultAlert {
    let mut message = format!(
        "Uploaded {} bugs to cycle. Source: {}.",
        result.total_bugs, result.source_system
    );
    let counters = [
        ("Classified", result.classified),
        ("Duplicates", result.duplicates_found),
        ("Low confidence", result.low_confidence),
    ];
    for (label, value) in counters {
        if let Some(value) = value {
            message.push_str(&format!(" {label}: {value}."));
        }
    }

    ResultAlert {
        tone: AlertTone::Success,
        message,
        cycle: Some(result.cycle_id),
    }
}

pub fn failure_alert(detail: Option<String>) -> ResultAlert {
    ResultAlert {
        tone: AlertTone::Danger,
        message: detail.unwrap_or_else(|| UPLOAD_FAILED.to_string()),
        cycle: None,
    }
}
