// src/formatting/page.rs
//! Assembles the full detail page (and the singular error page) from a
//! quickstart record.

use super::sections::render_section;
use crate::catalog::{classify, RelatedResource};
use crate::constants::{
    CHARS_PER_COMPONENT_ESTIMATE, LOGIN_LINK, PAGE_INITIAL_CAPACITY, QUICKSTARTS_REPO, SIGNUP_LINK,
};
use crate::model::QuickstartRecord;
use crate::presentation::{section_view, TabId};
use crate::types::RenderedPage;

/// Composes the Markdown body of the detail page: header, tab summary, all
/// four sections, and the page tools.
///
/// Pure — no events are emitted during composition; only tab *activation*
/// emits, and composition activates nothing.
pub fn compose_detail_body(
    record: &QuickstartRecord,
    related: Option<&[RelatedResource]>,
) -> String {
    let quickstart = classify(record);
    let quickstart_url = record.quickstart_url();
    let capacity = PAGE_INITIAL_CAPACITY
        + quickstart.classified_len() * CHARS_PER_COMPONENT_ESTIMATE;
    let mut out = String::with_capacity(capacity);

    // Header
    out.push_str("# ");
    out.push_str(&record.metadata.display_name);
    if record.support_level.shows_shield() {
        out.push_str(" ✓");
    }
    out.push_str("\n\n");

    if let Some(icon) = &record.metadata.icon {
        out.push_str(&format!("![{}]({})\n\n", record.metadata.display_name, icon.url));
    }
    if let Some(summary) = &record.metadata.summary {
        out.push_str(summary.trim_end());
        out.push_str("\n\n");
    }
    if let Some(installer) = &quickstart.installer {
        out.push_str(&format!(
            "Installation: {} install available from your New Relic account.\n\n",
            installer.plan_type
        ));
    }
    out.push_str(&format!("[View repo]({})\n\n", quickstart_url));

    // Tab bar summary
    let tab_counts = [
        (TabId::Dashboards, quickstart.dashboards.len()),
        (TabId::Alerts, quickstart.alerts.len()),
        (TabId::DataSources, quickstart.documentation.len()),
    ];
    out.push_str("**Overview**");
    for (tab, count) in tab_counts {
        out.push_str(&format!(" · {} ({})", tab.label(), count));
    }
    out.push_str("\n\n");

    // Sections
    for tab in TabId::ALL {
        let view = section_view(&quickstart, tab, quickstart_url);
        render_section(tab, &view, &mut out);
        out.push('\n');
    }

    // Page tools
    out.push_str("---\n\n");
    out.push_str("## How to use this quickstart\n\n");
    out.push_str(&format!(
        "1. [Sign Up]({}) for a free New Relic account or [Log In]({}) to your existing account.\n",
        SIGNUP_LINK, LOGIN_LINK
    ));
    out.push_str("2. Click the install button.\n");
    out.push_str(
        "3. Install the quickstart to get started or improve how you monitor your environment. \
         It's filled with pre-built resources like dashboards, instrumentation, and alerts.\n\n",
    );

    out.push_str("## Authors\n\n");
    let authors = record.author_line();
    out.push_str(&authors);
    out.push_str("\n\n");

    out.push_str("## Support\n\n");
    out.push_str(record.support_level.label());
    out.push('\n');

    if let Some(resources) = related.filter(|resources| !resources.is_empty()) {
        out.push_str("\n## Related resources\n\n");
        for resource in resources {
            out.push_str(&format!("- [{}]({})\n", resource.title, resource.url));
        }
    }

    out
}

/// Composes the header plus a single activated section, for focused views.
pub fn compose_single_section(record: &QuickstartRecord, tab: TabId) -> String {
    let quickstart = classify(record);
    let quickstart_url = record.quickstart_url();
    let mut out = String::with_capacity(PAGE_INITIAL_CAPACITY);

    out.push_str("# ");
    out.push_str(&record.metadata.display_name);
    out.push_str("\n\n");

    let view = section_view(&quickstart, tab, quickstart_url);
    render_section(tab, &view, &mut out);
    out
}

/// The singular error page shown when no quickstart could be resolved.
///
/// No tabs, no classification — this replaces the detail view wholesale.
pub fn compose_error_page() -> RenderedPage {
    let mut out = String::new();
    out.push_str("# Quickstart not found\n\n");
    out.push_str(
        "We couldn't find the quickstart you're looking for. \
         It may have been renamed or removed from the catalog.\n\n",
    );
    out.push_str(&format!(
        "Browse the catalog for other quickstarts, or open an issue in the [quickstart repository]({}).\n",
        QUICKSTARTS_REPO
    ));
    RenderedPage::new(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Author, IconRef, QuickstartMetadata};
    use crate::types::{QuickstartId, QuickstartSlug, SupportLevel};

    fn record(support_level: SupportLevel, source_url: Option<&str>) -> QuickstartRecord {
        QuickstartRecord {
            metadata: QuickstartMetadata {
                display_name: "Redis".to_string(),
                slug: QuickstartSlug::parse("redis").unwrap(),
                keywords: vec![],
                icon: Some(IconRef {
                    url: "https://img.example.com/redis.svg".to_string(),
                }),
                summary: Some("In-memory data store.".to_string()),
                description: None,
                quickstart_components: vec![],
                authors: vec![Author {
                    name: "New Relic".to_string(),
                }],
                installer: None,
            },
            id: QuickstartId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap(),
            support_level,
            source_url: source_url.map(String::from),
        }
    }

    #[test]
    fn qualifying_support_level_renders_the_shield() {
        let body = compose_detail_body(&record(SupportLevel::NewRelic, None), None);
        assert!(body.starts_with("# Redis ✓\n"));
    }

    #[test]
    fn community_support_level_omits_the_shield() {
        let body = compose_detail_body(&record(SupportLevel::Community, None), None);
        assert!(body.starts_with("# Redis\n"));
    }

    #[test]
    fn empty_sections_fall_back_and_link_the_default_repo() {
        let body = compose_detail_body(&record(SupportLevel::Community, None), None);
        assert!(body.contains("## Dashboards"));
        assert!(body.contains("any dashboards yet"));
        assert!(body.contains(QUICKSTARTS_REPO));
    }

    #[test]
    fn source_url_overrides_the_repo_link() {
        let body = compose_detail_body(
            &record(SupportLevel::Community, Some("https://example.com/redis-src")),
            None,
        );
        assert!(body.contains("[View repo](https://example.com/redis-src)"));
    }

    #[test]
    fn related_resources_render_only_when_present() {
        let without = compose_detail_body(&record(SupportLevel::Community, None), None);
        assert!(!without.contains("## Related resources"));

        let resources = vec![crate::catalog::RelatedResource {
            title: "Docs".to_string(),
            url: "https://docs.example.com".to_string(),
        }];
        let with = compose_detail_body(&record(SupportLevel::Community, None), Some(&resources));
        assert!(with.contains("## Related resources"));
        assert!(with.contains("- [Docs](https://docs.example.com)"));
    }

    #[test]
    fn error_page_replaces_the_detail_view() {
        let page = compose_error_page();
        assert!(page.as_str().starts_with("# Quickstart not found"));
        assert!(!page.as_str().contains("## Overview"));
    }

    #[test]
    fn single_section_renders_header_and_that_section_only() {
        let body = compose_single_section(&record(SupportLevel::Community, None), TabId::Alerts);
        assert!(body.starts_with("# Redis\n"));
        assert!(body.contains("## Alerts"));
        assert!(!body.contains("## Dashboards"));
    }
}
