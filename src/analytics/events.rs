// src/analytics/events.rs
//! Event shapes emitted by the detail page.
//!
//! Every event serializes with the wire field names the analytics pipeline
//! expects (`eventName`, `itemCount`, ...). Events are fire-and-forget: no
//! acknowledgement, no retry, no ordering guarantee.

use crate::constants::{INSTANT_OBSERVABILITY_EVENT, TAB_TOGGLE_CATEGORY};
use crate::presentation::TabId;
use crate::types::{QuickstartId, QuickstartSlug};
use serde::Serialize;

/// Emitted once per tab activation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationEvent {
    pub event_name: &'static str,
    pub quickstart_id: QuickstartId,
    pub quickstart_slug: QuickstartSlug,
    pub category: &'static str,
    pub tab_id: TabId,
    /// Bucket length observed at the moment of activation.
    pub item_count: usize,
}

impl NavigationEvent {
    pub fn tab_toggle(
        quickstart_id: QuickstartId,
        quickstart_slug: QuickstartSlug,
        tab_id: TabId,
        item_count: usize,
    ) -> Self {
        Self {
            event_name: INSTANT_OBSERVABILITY_EVENT,
            quickstart_id,
            quickstart_slug,
            category: TAB_TOGGLE_CATEGORY,
            tab_id,
            item_count,
        }
    }
}

/// Outbound call-to-action surfaces on the detail page.
#[allow(dead_code)] // Variants constructed by lib consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CtaCategory {
    #[serde(rename = "QuickstartViewRepoClick")]
    ViewRepo,
    #[serde(rename = "QuickstartDetailsSignUpClick")]
    SignUp,
    #[serde(rename = "QuickstartDetailsLoginClick")]
    LogIn,
}

/// Emitted when a call-to-action link is followed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToActionEvent {
    pub event_name: &'static str,
    /// The quickstart's slug; the analytics pipeline calls this field "name".
    pub quickstart_name: QuickstartSlug,
    pub quickstart_id: QuickstartId,
    pub category: CtaCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quickstart_url: Option<String>,
}

impl CallToActionEvent {
    pub fn new(
        quickstart_name: QuickstartSlug,
        quickstart_id: QuickstartId,
        category: CtaCategory,
        quickstart_url: Option<String>,
    ) -> Self {
        Self {
            event_name: INSTANT_OBSERVABILITY_EVENT,
            quickstart_name,
            quickstart_id,
            category,
            quickstart_url,
        }
    }
}

/// Any event a sink can receive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalyticsEvent {
    Navigation(NavigationEvent),
    CallToAction(CallToActionEvent),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_ids() -> (QuickstartId, QuickstartSlug) {
        (
            QuickstartId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap(),
            QuickstartSlug::parse("redis").unwrap(),
        )
    }

    #[test]
    fn navigation_event_serializes_with_wire_field_names() {
        let (id, slug) = sample_ids();
        let event = NavigationEvent::tab_toggle(id, slug, TabId::Dashboards, 3);
        let wire = serde_json::to_value(&event).unwrap();

        assert_eq!(wire["eventName"], "instantObservability");
        assert_eq!(wire["category"], "QuickstartTabToggle");
        assert_eq!(wire["tabId"], "dashboards");
        assert_eq!(wire["itemCount"], 3);
        assert_eq!(wire["quickstartSlug"], "redis");
    }

    #[test]
    fn cta_event_omits_absent_url() {
        let (id, slug) = sample_ids();
        let event = CallToActionEvent::new(slug, id, CtaCategory::SignUp, None);
        let wire = serde_json::to_value(&event).unwrap();

        assert_eq!(wire["category"], "QuickstartDetailsSignUpClick");
        assert!(wire.get("quickstartUrl").is_none());
    }

    #[test]
    fn data_sources_tab_serializes_kebab_cased() {
        let (id, slug) = sample_ids();
        let event = NavigationEvent::tab_toggle(id, slug, TabId::DataSources, 0);
        let wire = serde_json::to_value(&event).unwrap();
        assert_eq!(wire["tabId"], "data-sources");
    }
}
