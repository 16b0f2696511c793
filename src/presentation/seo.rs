// src/presentation/seo.rs
//! Page metadata handed to the external SEO/indexing collaborator.

use crate::model::QuickstartRecord;
use serde::Serialize;

/// A structured hint for the external search indexer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchIndexHint {
    pub name: &'static str,
    pub class: &'static str,
    #[serde(rename = "data-type")]
    pub data_type: &'static str,
    pub content: String,
}

/// Everything the SEO collaborator needs for one detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub page_type: &'static str,
    pub tags: Vec<String>,
    pub search_hints: Vec<SearchIndexHint>,
}

/// Derives the SEO projection of a quickstart record.
pub fn page_metadata(record: &QuickstartRecord) -> PageMetadata {
    PageMetadata {
        title: record.metadata.display_name.clone(),
        page_type: "quickstarts",
        tags: record.metadata.keywords.clone(),
        search_hints: vec![SearchIndexHint {
            name: "quick_start_name",
            class: "swiftype",
            data_type: "string",
            content: record.metadata.display_name.clone(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuickstartMetadata;
    use crate::types::{QuickstartId, QuickstartSlug, SupportLevel};

    #[test]
    fn metadata_carries_title_tags_and_the_index_hint() {
        let record = QuickstartRecord {
            metadata: QuickstartMetadata {
                display_name: "Redis".to_string(),
                slug: QuickstartSlug::parse("redis").unwrap(),
                keywords: vec!["cache".to_string(), "database".to_string()],
                icon: None,
                summary: None,
                description: None,
                quickstart_components: vec![],
                authors: vec![],
                installer: None,
            },
            id: QuickstartId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap(),
            support_level: SupportLevel::Community,
            source_url: None,
        };

        let metadata = page_metadata(&record);

        assert_eq!(metadata.title, "Redis");
        assert_eq!(metadata.page_type, "quickstarts");
        assert_eq!(metadata.tags, vec!["cache", "database"]);
        assert_eq!(metadata.search_hints.len(), 1);
        assert_eq!(metadata.search_hints[0].name, "quick_start_name");
        assert_eq!(metadata.search_hints[0].content, "Redis");

        let wire = serde_json::to_value(&metadata.search_hints[0]).unwrap();
        assert_eq!(wire["data-type"], "string");
        assert_eq!(wire["class"], "swiftype");
    }
}
