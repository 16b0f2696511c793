// src/catalog/parser.rs
//! Parses catalog response bodies into quickstart records.

use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::AppError;
use crate::model::QuickstartRecord;

/// Parse a quickstart document body.
///
/// Unknown component kinds inside the document are tolerated by the model
/// layer; only a structurally broken document fails here.
pub fn parse_quickstart_record(body: &str) -> Result<QuickstartRecord, AppError> {
    serde_json::from_str(body).map_err(|e| {
        log::error!("failed to parse quickstart document: {}", e);
        AppError::MalformedDocument(format!("{} (body: {})", e, preview(body)))
    })
}

fn preview(body: &str) -> &str {
    if body.len() <= ERROR_BODY_PREVIEW_LENGTH {
        return body;
    }
    let mut end = ERROR_BODY_PREVIEW_LENGTH;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
