// src/catalog/classify.rs
//! Partitions a quickstart's component list into the three display buckets.

use crate::model::{
    AlertConditionPayload, DashboardPayload, DocumentationPayload, InstallPlan, QuickstartComponent,
    QuickstartRecord,
};
use crate::types::{QuickstartId, QuickstartSlug};

/// A quickstart with its components sorted into display buckets.
///
/// Derived fresh per page view, never persisted. The three buckets partition
/// the recognized input components exactly: every recognized component lands
/// in the bucket matching its discriminant, in input order. Components with
/// an unrecognized discriminant land nowhere.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedQuickstart {
    pub id: QuickstartId,
    pub display_name: String,
    pub slug: QuickstartSlug,
    pub description: Option<String>,
    pub installer: Option<InstallPlan>,
    pub documentation: Vec<DocumentationPayload>,
    pub alerts: Vec<AlertConditionPayload>,
    pub dashboards: Vec<DashboardPayload>,
}

impl ClassifiedQuickstart {
    /// Total number of components that were classified into a bucket.
    pub fn classified_len(&self) -> usize {
        self.documentation.len() + self.alerts.len() + self.dashboards.len()
    }
}

/// Classifies a quickstart record's components into buckets.
///
/// A single pass over the component list; the partition is stable, so two
/// dashboards the content author ordered deliberately stay in that order in
/// the dashboards bucket. Total over every input: unrecognized discriminants
/// are dropped through the logged branch below, never an error.
pub fn classify(record: &QuickstartRecord) -> ClassifiedQuickstart {
    let mut documentation = Vec::new();
    let mut alerts = Vec::new();
    let mut dashboards = Vec::new();

    for component in &record.metadata.quickstart_components {
        match component {
            QuickstartComponent::Documentation(payload) => documentation.push(payload.clone()),
            QuickstartComponent::AlertCondition(payload) => alerts.push(payload.clone()),
            QuickstartComponent::Dashboard(payload) => dashboards.push(payload.clone()),
            QuickstartComponent::Unrecognized(raw) => {
                // Documented tolerance: new content kinds surface in the log,
                // not on the page.
                log::debug!(
                    "dropping component with unrecognized kind '{}' from quickstart '{}'",
                    raw.kind,
                    record.metadata.slug
                );
            }
        }
    }

    ClassifiedQuickstart {
        id: record.id.clone(),
        display_name: record.metadata.display_name.clone(),
        slug: record.metadata.slug.clone(),
        description: record.metadata.description.clone(),
        installer: record.metadata.installer.clone(),
        documentation,
        alerts,
        dashboards,
    }
}
