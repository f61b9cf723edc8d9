use api::{ApiResponse, ApiResult, TransportError};
use tracing::{error, warn};

/// Collapse an analytics response into what the page can show.
///
/// A body that arrived but could not be decoded degrades to an empty
/// aggregate (empty charts); any other failure yields `None` (placeholder).
pub(crate) fn settle<T: Default>(what: &str, result: ApiResult<T>) -> Option<T> {
    match result {
        Ok(ApiResponse::Ok(value)) => Some(value),
        Ok(ApiResponse::Failed { status, detail }) => {
            warn!(what, status, detail = detail.as_deref().unwrap_or(""), "analytics unavailable");
            None
        }
        Err(TransportError::Decode(err)) => {
            warn!(what, %err, "analytics payload malformed; rendering empty");
            Some(T::default())
        }
        Err(err) => {
            error!(what, %err, "analytics request failed");
            None
        }
    }
}
