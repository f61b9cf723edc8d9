//! Bounded best-effort preview of a selected delimited-text report.
//!
//! Only the head of the file is read and only a handful of lines are shown.
//! Delimiters inside quoted fields are not understood.

use tracing::debug;

use crate::core::file::ReportFile;

/// Never read more than this many bytes of a file for preview.
pub const PREVIEW_BYTE_BUDGET: usize = 5000;
/// Header line plus up to five data lines.
pub const PREVIEW_LINE_WINDOW: usize = 6;
/// Data cells longer than this are cut.
pub const PREVIEW_CELL_CHARS: usize = 40;
pub const PREVIEW_DELIMITER: char = ',';

const PREVIEW_EXTENSION: &str = ".csv";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub fn is_previewable(file_name: &str) -> bool {
    let name = file_name.as_bytes();
    let ext = PREVIEW_EXTENSION.as_bytes();
    name.len() >= ext.len() && name[name.len() - ext.len()..].eq_ignore_ascii_case(ext)
}

/// Read the head of `file` and parse it. `None` means "leave the preview as it is".
pub async fn preview(file: &dyn ReportFile) -> Option<PreviewTable> {
    if !is_previewable(file.name()) {
        debug!(file = file.name(), "no preview for this file type");
        return None;
    }

    let bytes = match file.read_prefix(PREVIEW_BYTE_BUDGET).await {
        Ok(bytes) => bytes,
        Err(err) => {
            debug!(%err, "preview skipped");
            return None;
        }
    };

    let table = parse_preview(&decode_prefix(&bytes));
    if table.is_none() {
        debug!(file = file.name(), "too few lines to preview");
    }
    table
}

/// Decode a byte prefix as UTF-8. A multi-byte sequence cut at the end of the
/// prefix is dropped; anything else invalid is replaced.
pub fn decode_prefix(bytes: &[u8]) -> String {
    let bytes = &bytes[..bytes.len().min(PREVIEW_BYTE_BUDGET)];
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(err) if err.error_len().is_none() => {
            String::from_utf8_lossy(&bytes[..err.valid_up_to()]).into_owned()
        }
        Err(_) => String::from_utf8_lossy(bytes).into_owned(),
    }
}

pub fn parse_preview(text: &str) -> Option<PreviewTable> {
    let mut lines = text
        .split('\n')
        .take(PREVIEW_LINE_WINDOW)
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty());

    let header = lines.next()?;
    let rows: Vec<Vec<String>> = lines
        .map(|line| split_fields(line).map(truncate_cell).collect())
        .collect();
    if rows.is_empty() {
        return None;
    }

    Some(PreviewTable {
        headers: split_fields(header).collect(),
        rows,
    })
}

fn split_fields(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split(PREVIEW_DELIMITER).map(clean_field)
}

/// Trim, then strip one enclosing pair of double quotes.
pub fn clean_field(raw: &str) -> String {
    let field = raw.trim();
    field
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(field)
        .to_string()
}

fn truncate_cell(cell: String) -> String {
    match cell.char_indices().nth(PREVIEW_CELL_CHARS) {
        Some((cut, _)) => cell[..cut].to_string(),
        None => cell,
    }
}
