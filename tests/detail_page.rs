//! End-to-end page composition over the catalog fixtures: parse → classify →
//! render, including the empty-state and error-page paths.

use quickstart2page::{
    classify, compose_detail_body, compose_error_page, load_related_pages, parse_quickstart_record,
    related_resources_for, render_detail_page, QuickstartRecord, SupportLevel, TemplateName,
    QUICKSTARTS_REPO,
};
use std::path::Path;

fn fixture(name: &str) -> QuickstartRecord {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/catalog")
        .join(name);
    let body = std::fs::read_to_string(path).expect("fixture should exist");
    parse_quickstart_record(&body).expect("fixture should parse")
}

#[test]
fn redis_fixture_classifies_into_the_expected_buckets() {
    let record = fixture("redis.json");
    let quickstart = classify(&record);

    assert_eq!(quickstart.dashboards.len(), 1);
    assert_eq!(quickstart.alerts.len(), 2);
    assert_eq!(quickstart.documentation.len(), 1);

    // The syntheticCheck component has an unrecognized kind and lands nowhere.
    assert_eq!(record.metadata.quickstart_components.len(), 5);
    assert_eq!(quickstart.classified_len(), 4);
}

#[test]
fn full_page_renders_every_populated_section() {
    let record = fixture("redis.json");
    let body = compose_detail_body(&record, None);

    assert!(body.starts_with("# Redis ✓\n"), "NEW_RELIC tier shows the shield");
    assert!(body.contains("## Overview"));
    assert!(body.contains("### Redis overview"));
    assert!(body.contains("### High memory usage"));
    assert!(body.contains("### Latency anomaly"));
    assert!(body.contains("[View documentation](https://docs.example.com/redis)"));
    assert!(body.contains("New Relic, Jane Doe"));
    assert!(!body.contains("syntheticCheck"), "dropped kinds never reach the page");
}

#[test]
fn empty_quickstart_falls_back_per_section_with_the_default_repo() {
    let record = fixture("bare-host.json");
    assert!(record.source_url.is_none());

    let body = compose_detail_body(&record, None);

    for section in ["dashboards", "alerts", "data sources"] {
        assert!(
            body.contains(&format!("doesn't include any {} yet", section)),
            "section '{}' should fall back",
            section
        );
    }
    assert!(body.contains(QUICKSTARTS_REPO));
    assert!(
        body.starts_with("# Bare Host\n"),
        "COMMUNITY tier renders no shield"
    );
}

#[test]
fn support_tier_controls_the_badge() {
    let mut record = fixture("redis.json");
    assert_eq!(record.support_level, SupportLevel::NewRelic);
    assert!(compose_detail_body(&record, None).starts_with("# Redis ✓\n"));

    record.support_level = SupportLevel::Community;
    assert!(compose_detail_body(&record, None).starts_with("# Redis\n"));
}

#[test]
fn related_resources_panel_appears_only_for_a_table_hit() {
    let record = fixture("redis.json");
    let table_path =
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/related-pages.json");
    let table = load_related_pages(&table_path).unwrap();

    let related = related_resources_for(&table, &record.metadata.slug, &record.id);
    let body = compose_detail_body(&record, related);
    assert!(body.contains("## Related resources"));
    assert!(body.contains("[Redis monitoring best practices](https://example.com/blog/redis-monitoring)"));

    let other = fixture("bare-host.json");
    let related = related_resources_for(&table, &other.metadata.slug, &other.id);
    assert!(related.is_none());
    let body = compose_detail_body(&other, related);
    assert!(!body.contains("## Related resources"));
}

#[test]
fn templated_page_carries_front_matter_for_indexing() {
    let record = fixture("redis.json");
    let template = TemplateName::new("default").unwrap();

    let page = render_detail_page(&record, None, &template, None).unwrap();

    assert!(page.as_str().starts_with("---\n"));
    assert!(page.as_str().contains("title: \"Redis\""));
    assert!(page.as_str().contains("tags: [cache, database, infrastructure]"));
    assert!(page.as_str().contains("# Redis ✓"));
}

#[test]
fn error_page_renders_without_tabs_or_classification() {
    let page = compose_error_page();

    assert!(page.as_str().starts_with("# Quickstart not found"));
    for heading in ["## Overview", "## Dashboards", "## Alerts", "## Data sources"] {
        assert!(!page.as_str().contains(heading));
    }
    assert!(page.as_str().contains(QUICKSTARTS_REPO));
}
