// src/model/quickstart.rs
//! The quickstart record as delivered by the content catalog.

use super::component::QuickstartComponent;
use crate::constants::QUICKSTARTS_REPO;
use crate::types::{QuickstartId, QuickstartSlug, SupportLevel};
use serde::{Deserialize, Serialize};

/// Author credited in the page tools sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
}

/// Logo reference for the page header. Absence simply omits the logo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRef {
    pub url: String,
}

/// Install flow descriptor, passed through to the install surface untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallPlan {
    #[serde(rename = "type")]
    pub plan_type: String,
}

/// Content metadata of a quickstart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickstartMetadata {
    pub display_name: String,
    pub slug: QuickstartSlug,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub icon: Option<IconRef>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub quickstart_components: Vec<QuickstartComponent>,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub installer: Option<InstallPlan>,
}

/// A complete quickstart record, supplied wholesale per page view.
///
/// Constructed fresh from the catalog for every render and discarded when
/// navigation leaves the page; nothing here is cached or mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickstartRecord {
    pub metadata: QuickstartMetadata,
    pub id: QuickstartId,
    #[serde(default = "default_support_level")]
    pub support_level: SupportLevel,
    #[serde(default)]
    pub source_url: Option<String>,
}

fn default_support_level() -> SupportLevel {
    SupportLevel::Community
}

impl QuickstartRecord {
    /// The location of this quickstart's sources, falling back to the shared
    /// quickstarts repository when the record carries no `sourceUrl`.
    pub fn quickstart_url(&self) -> &str {
        self.source_url.as_deref().unwrap_or(QUICKSTARTS_REPO)
    }

    /// Authors joined for display. Empty author lists join to an empty string.
    pub fn author_line(&self) -> String {
        self.metadata
            .authors
            .iter()
            .map(|author| author.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record_json(source_url: Option<&str>) -> String {
        let source_field = source_url
            .map(|url| format!(r#""sourceUrl": "{}","#, url))
            .unwrap_or_default();
        format!(
            r#"{{
                "id": "550e8400-e29b-41d4-a716-446655440000",
                "supportLevel": "NEW_RELIC",
                {source_field}
                "metadata": {{
                    "displayName": "Redis",
                    "slug": "redis",
                    "authors": [{{"name": "New Relic"}}, {{"name": "Jane Doe"}}],
                    "quickstartComponents": []
                }}
            }}"#
        )
    }

    #[test]
    fn source_url_falls_back_to_the_quickstarts_repo() {
        let record: QuickstartRecord = serde_json::from_str(&record_json(None)).unwrap();
        assert_eq!(record.quickstart_url(), QUICKSTARTS_REPO);

        let record: QuickstartRecord =
            serde_json::from_str(&record_json(Some("https://example.com/redis"))).unwrap();
        assert_eq!(record.quickstart_url(), "https://example.com/redis");
    }

    #[test]
    fn author_line_joins_names_and_tolerates_absence() {
        let mut record: QuickstartRecord = serde_json::from_str(&record_json(None)).unwrap();
        assert_eq!(record.author_line(), "New Relic, Jane Doe");

        record.metadata.authors.clear();
        assert_eq!(record.author_line(), "");
    }

    #[test]
    fn missing_support_level_defaults_to_community() {
        let record: QuickstartRecord = serde_json::from_str(
            r#"{
                "id": "550e8400-e29b-41d4-a716-446655440000",
                "metadata": {"displayName": "Redis", "slug": "redis"}
            }"#,
        )
        .unwrap();
        assert_eq!(record.support_level, SupportLevel::Community);
    }
}
