// src/formatting/template.rs
//! Wraps a composed page body in a Handlebars page template.
//!
//! Templates receive the page body plus the SEO metadata, so a template can
//! emit front matter for static-site ingestion. A `templates/` directory may
//! override the embedded default.

use crate::error::AppError;
use crate::presentation::PageMetadata;
use crate::types::{RenderedPage, TemplateName};
use handlebars::Handlebars;
use serde_json::json;
use std::path::Path;

/// The template compiled into the binary, used when no file overrides it.
const DEFAULT_PAGE_TEMPLATE: &str = include_str!("../../templates/default.hbs");

/// Name of the embedded template.
pub const DEFAULT_TEMPLATE_NAME: &str = "default";

/// Applies the named template to a page body.
///
/// Resolution order: `{templates_dir}/{name}.hbs` if it exists, then the
/// embedded default for the default name. Any other unresolved name is a
/// [`AppError::TemplateNotFound`].
pub fn render_page(
    body: &str,
    metadata: &PageMetadata,
    template: &TemplateName,
    templates_dir: Option<&Path>,
) -> Result<RenderedPage, AppError> {
    let source = load_template_source(template, templates_dir)?;

    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars
        .register_template_string(template.as_str(), &source)
        .map_err(|e| AppError::TemplateRender {
            name: template.to_string(),
            message: e.to_string(),
        })?;

    let data = json!({
        "title": metadata.title,
        "pageType": metadata.page_type,
        "tags": metadata.tags,
        "body": body,
    });

    let page = handlebars
        .render(template.as_str(), &data)
        .map_err(|e| AppError::TemplateRender {
            name: template.to_string(),
            message: e.to_string(),
        })?;

    log::debug!(
        "rendered page '{}' via template '{}' ({} bytes)",
        metadata.title,
        template,
        page.len()
    );

    Ok(RenderedPage::new(page))
}

fn load_template_source(
    template: &TemplateName,
    templates_dir: Option<&Path>,
) -> Result<String, AppError> {
    if let Some(dir) = templates_dir {
        let path = dir.join(format!("{}.hbs", template.as_str()));
        match std::fs::read_to_string(&path) {
            Ok(source) => return Ok(source),
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => {
                return Err(AppError::TemplateNotFound {
                    path: path.display().to_string(),
                    source: e,
                });
            }
            Err(_) => {}
        }
    }

    if template.as_str() == DEFAULT_TEMPLATE_NAME {
        return Ok(DEFAULT_PAGE_TEMPLATE.to_string());
    }

    Err(AppError::TemplateNotFound {
        path: format!("{}.hbs", template.as_str()),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such template"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::PageMetadata;

    fn metadata() -> PageMetadata {
        PageMetadata {
            title: "Redis".to_string(),
            page_type: "quickstarts",
            tags: vec!["cache".to_string()],
            search_hints: vec![],
        }
    }

    #[test]
    fn default_template_emits_front_matter_and_body() {
        let template = TemplateName::new(DEFAULT_TEMPLATE_NAME).unwrap();
        let page = render_page("# Redis\n\nbody text\n", &metadata(), &template, None).unwrap();

        assert!(page.as_str().starts_with("---\n"));
        assert!(page.as_str().contains("title: \"Redis\""));
        assert!(page.as_str().contains("type: quickstarts"));
        assert!(page.as_str().contains("# Redis\n\nbody text"));
    }

    #[test]
    fn unknown_template_without_a_file_is_an_error() {
        let template = TemplateName::new("nonexistent").unwrap();
        let err = render_page("body", &metadata(), &template, None).unwrap_err();
        assert!(matches!(err, AppError::TemplateNotFound { .. }));
    }

    #[test]
    fn markdown_body_is_not_html_escaped() {
        let template = TemplateName::new(DEFAULT_TEMPLATE_NAME).unwrap();
        let page = render_page(
            "[link](https://example.com?a=1&b=2)",
            &metadata(),
            &template,
            None,
        )
        .unwrap();
        assert!(page.as_str().contains("a=1&b=2"));
    }
}
