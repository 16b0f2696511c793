// src/formatting/sections.rs
//! Renders individual tab sections to Markdown.
//!
//! Each section renders either its specialized content view or the shared
//! empty fallback; that decision was already made by the rendering policy in
//! `presentation::section_view`, so these functions only format.

use crate::catalog::ClassifiedQuickstart;
use crate::model::{AlertConditionPayload, AlertConditionType, DashboardPayload, DocumentationPayload};
use crate::presentation::{SectionView, TabId};

/// Renders one section under its tab heading.
pub fn render_section(tab: TabId, view: &SectionView<'_>, out: &mut String) {
    out.push_str("## ");
    out.push_str(tab.label());
    out.push_str("\n\n");

    match view {
        SectionView::Overview(quickstart) => render_overview(quickstart, out),
        SectionView::Dashboards(dashboards) => render_dashboards(dashboards, out),
        SectionView::Alerts(alerts) => render_alerts(alerts, out),
        SectionView::DataSources(documentation) => render_data_sources(documentation, out),
        SectionView::Empty {
            section_name,
            quickstart_url,
        } => out.push_str(&empty_section_line(section_name, quickstart_url)),
    }
}

/// The single-line empty fallback, shared by all sections.
pub fn empty_section_line(section_name: &str, quickstart_url: &str) -> String {
    format!(
        "This quickstart doesn't include any {} yet. Want to contribute? Add them in the [quickstart repository]({}).\n",
        section_name, quickstart_url
    )
}

fn render_overview(quickstart: &ClassifiedQuickstart, out: &mut String) {
    if let Some(description) = &quickstart.description {
        out.push_str(description.trim_end());
        out.push_str("\n\n");
    }

    out.push_str("This quickstart ships ");
    out.push_str(&count_phrase(quickstart.dashboards.len(), "dashboard"));
    out.push_str(", ");
    out.push_str(&count_phrase(quickstart.alerts.len(), "alert condition"));
    out.push_str(", and ");
    out.push_str(&count_phrase(quickstart.documentation.len(), "data source"));
    out.push_str(".\n");
}

fn render_dashboards(dashboards: &[DashboardPayload], out: &mut String) {
    for dashboard in dashboards {
        out.push_str("### ");
        out.push_str(&dashboard.display_name);
        out.push_str("\n\n");
        if let Some(description) = &dashboard.description {
            out.push_str(description.trim_end());
            out.push_str("\n\n");
        }
        for screenshot in &dashboard.screenshots {
            out.push_str(&format!(
                "![{}]({})\n",
                dashboard.display_name, screenshot.url
            ));
        }
        if !dashboard.screenshots.is_empty() {
            out.push('\n');
        }
    }
}

fn render_alerts(alerts: &[AlertConditionPayload], out: &mut String) {
    for alert in alerts {
        out.push_str("### ");
        out.push_str(&alert.display_name);
        out.push_str("\n\n");
        out.push_str(&format!("*{}*\n\n", condition_type_label(alert.condition_type)));
        if let Some(details) = &alert.details {
            out.push_str(details.trim_end());
            out.push_str("\n\n");
        }
    }
}

fn render_data_sources(documentation: &[DocumentationPayload], out: &mut String) {
    for doc in documentation {
        out.push_str("### ");
        out.push_str(&doc.display_name);
        out.push_str("\n\n");
        if let Some(description) = &doc.description {
            out.push_str(description.trim_end());
            out.push_str("\n\n");
        }
        if let Some(url) = &doc.url {
            out.push_str(&format!("[View documentation]({})\n\n", url));
        }
    }
}

fn condition_type_label(condition_type: AlertConditionType) -> &'static str {
    match condition_type {
        AlertConditionType::Static => "Static threshold",
        AlertConditionType::Baseline => "Baseline",
        AlertConditionType::Outlier => "Outlier",
    }
}

fn count_phrase(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
