// src/presentation/tabs.rs
//! The four-tab navigation surface of the quickstart detail page.
//!
//! [`TabController`] is a flat selector, not a guarded workflow: all four
//! tabs are reachable from any tab, exactly one is active, and the only side
//! effect anywhere in it is the navigation event sent on activation.

use crate::analytics::{AnalyticsEvent, CallToActionEvent, CtaCategory, EventSink, NavigationEvent};
use crate::catalog::ClassifiedQuickstart;
use crate::model::{AlertConditionPayload, DashboardPayload, DocumentationPayload};
use crate::types::ValidationError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Identifier of one detail-page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TabId {
    Overview,
    Dashboards,
    Alerts,
    DataSources,
}

impl TabId {
    /// Every tab, in display order.
    pub const ALL: [TabId; 4] = [
        TabId::Overview,
        TabId::Dashboards,
        TabId::Alerts,
        TabId::DataSources,
    ];

    /// The wire/URL identifier of this tab.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Dashboards => "dashboards",
            Self::Alerts => "alerts",
            Self::DataSources => "data-sources",
        }
    }

    /// Tab-bar label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Dashboards => "Dashboards",
            Self::Alerts => "Alerts",
            Self::DataSources => "Data sources",
        }
    }

    /// Lowercase section name used in empty-state copy.
    pub fn section_name(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Dashboards => "dashboards",
            Self::Alerts => "alerts",
            Self::DataSources => "data sources",
        }
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TabId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overview" => Ok(Self::Overview),
            "dashboards" => Ok(Self::Dashboards),
            "alerts" => Ok(Self::Alerts),
            "data-sources" => Ok(Self::DataSources),
            other => Err(ValidationError::UnknownTab(other.to_string())),
        }
    }
}

/// Read-only projection of one tab: its identifier, item count, and whether
/// it falls back to the empty view.
///
/// The overview tab has no backing bucket; it reports a count of zero but is
/// never empty — it always renders its dedicated content view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabProjection {
    pub id: TabId,
    pub count: usize,
    pub is_empty: bool,
}

/// What a section renders: its specialized content view, or the empty
/// fallback parameterized by section name and source location.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionView<'a> {
    Overview(&'a ClassifiedQuickstart),
    Dashboards(&'a [DashboardPayload]),
    Alerts(&'a [AlertConditionPayload]),
    DataSources(&'a [DocumentationPayload]),
    Empty {
        section_name: &'static str,
        quickstart_url: &'a str,
    },
}

/// Pure rendering policy for one tab of a classified quickstart.
///
/// Kept as a free function so page composition can render every section
/// without constructing a controller (and without a sink).
pub fn section_view<'a>(
    quickstart: &'a ClassifiedQuickstart,
    tab: TabId,
    quickstart_url: &'a str,
) -> SectionView<'a> {
    let empty = || SectionView::Empty {
        section_name: tab.section_name(),
        quickstart_url,
    };
    match tab {
        TabId::Overview => SectionView::Overview(quickstart),
        TabId::Dashboards if quickstart.dashboards.is_empty() => empty(),
        TabId::Dashboards => SectionView::Dashboards(&quickstart.dashboards),
        TabId::Alerts if quickstart.alerts.is_empty() => empty(),
        TabId::Alerts => SectionView::Alerts(&quickstart.alerts),
        TabId::DataSources if quickstart.documentation.is_empty() => empty(),
        TabId::DataSources => SectionView::DataSources(&quickstart.documentation),
    }
}

/// Drives the tabbed navigation surface for one page view.
///
/// Starts on [`TabId::Overview`]. [`activate`] is the single mutating
/// operation: it moves the active tab and sends exactly one
/// [`NavigationEvent`] to the injected sink, then returns — it never blocks
/// on delivery and never fails back to the caller.
///
/// [`activate`]: TabController::activate
pub struct TabController {
    quickstart: ClassifiedQuickstart,
    quickstart_url: String,
    active: TabId,
    sink: Arc<dyn EventSink>,
}

impl TabController {
    pub fn new(
        quickstart: ClassifiedQuickstart,
        quickstart_url: impl Into<String>,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            quickstart,
            quickstart_url: quickstart_url.into(),
            active: TabId::Overview,
            sink,
        }
    }

    #[allow(dead_code)] // Used by lib consumers
    pub fn quickstart(&self) -> &ClassifiedQuickstart {
        &self.quickstart
    }

    #[allow(dead_code)] // Used by lib consumers
    pub fn quickstart_url(&self) -> &str {
        &self.quickstart_url
    }

    /// The currently active tab.
    #[allow(dead_code)] // Used by lib consumers
    pub fn active(&self) -> TabId {
        self.active
    }

    /// Projection of a single tab.
    pub fn projection(&self, tab: TabId) -> TabProjection {
        let count = match tab {
            TabId::Overview => 0,
            TabId::Dashboards => self.quickstart.dashboards.len(),
            TabId::Alerts => self.quickstart.alerts.len(),
            TabId::DataSources => self.quickstart.documentation.len(),
        };
        TabProjection {
            id: tab,
            count,
            is_empty: tab != TabId::Overview && count == 0,
        }
    }

    /// Projections for the whole tab bar, in display order.
    #[allow(dead_code)] // Used by lib consumers
    pub fn projections(&self) -> [TabProjection; 4] {
        TabId::ALL.map(|tab| self.projection(tab))
    }

    /// Switches to `tab` and emits the navigation event.
    ///
    /// No transition is rejected; the item count on the event is the bucket
    /// length observed right now, not a cached value.
    pub fn activate(&mut self, tab: TabId) {
        self.active = tab;
        let projection = self.projection(tab);
        let event = NavigationEvent::tab_toggle(
            self.quickstart.id.clone(),
            self.quickstart.slug.clone(),
            tab,
            projection.count,
        );
        self.sink.record(&AnalyticsEvent::Navigation(event));
    }

    /// Rendering policy for the given tab.
    #[allow(dead_code)] // Used by lib consumers
    pub fn section_view(&self, tab: TabId) -> SectionView<'_> {
        section_view(&self.quickstart, tab, &self.quickstart_url)
    }

    /// Rendering policy for the active tab.
    #[allow(dead_code)] // Used by lib consumers
    pub fn active_section(&self) -> SectionView<'_> {
        self.section_view(self.active)
    }

    /// Reports a call-to-action click to the sink. One-way, like navigation.
    #[allow(dead_code)] // Used by lib consumers
    pub fn track_call_to_action(&self, category: CtaCategory) {
        let event = CallToActionEvent::new(
            self.quickstart.slug.clone(),
            self.quickstart.id.clone(),
            category,
            Some(self.quickstart_url.clone()),
        );
        self.sink.record(&AnalyticsEvent::CallToAction(event));
    }
}
