// src/catalog/related.rs
//! Lookup into the externally supplied related-resources table.
//!
//! The table maps detail-page paths to curated resource lists. An absent key
//! means the page simply has no related-resources panel.

use crate::constants::RELATED_PAGES_PREFIX;
use crate::error::AppError;
use crate::types::{QuickstartId, QuickstartSlug};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One curated link in the related-resources panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedResource {
    pub title: String,
    pub url: String,
}

/// The full table, keyed by detail-page path, insertion order preserved.
pub type RelatedResourceTable = IndexMap<String, Vec<RelatedResource>>;

/// Loads a related-resources table from a JSON document on disk.
pub fn load_related_pages(path: &Path) -> Result<RelatedResourceTable, AppError> {
    let body = std::fs::read_to_string(path)?;
    serde_json::from_str(&body).map_err(|e| AppError::JsonParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Looks up the resources for one quickstart's detail page.
pub fn related_resources_for<'t>(
    table: &'t RelatedResourceTable,
    slug: &QuickstartSlug,
    id: &QuickstartId,
) -> Option<&'t [RelatedResource]> {
    table
        .get(&resource_key(slug, id))
        .map(|resources| resources.as_slice())
}

fn resource_key(slug: &QuickstartSlug, id: &QuickstartId) -> String {
    format!("{}/{}/{}", RELATED_PAGES_PREFIX, slug, id)
}
