// src/formatting/mod.rs
//! Renders classified quickstarts into the Markdown detail page.

mod page;
mod sections;
mod template;

pub use page::{compose_detail_body, compose_error_page, compose_single_section};
pub use sections::{empty_section_line, render_section};
pub use template::{render_page, DEFAULT_TEMPLATE_NAME};

use crate::catalog::RelatedResource;
use crate::error::AppError;
use crate::model::QuickstartRecord;
use crate::presentation::page_metadata;
use crate::types::{RenderedPage, TemplateName};
use std::path::Path;

/// Composes the complete detail page: body plus template wrapping.
pub fn render_detail_page(
    record: &QuickstartRecord,
    related: Option<&[RelatedResource]>,
    template: &TemplateName,
    templates_dir: Option<&Path>,
) -> Result<RenderedPage, AppError> {
    let body = compose_detail_body(record, related);
    let metadata = page_metadata(record);
    render_page(&body, &metadata, template, templates_dir)
}
