// src/catalog/source.rs
//! Concrete quickstart sources: a catalog directory on disk and a remote
//! catalog endpoint.
//!
//! Both map "no such quickstart" to [`AppError::MissingQuickstart`] so the
//! caller can render the singular error page. Neither retries: a page view
//! resolves its record once.

use super::parser::parse_quickstart_record;
use crate::constants::CATALOG_DOCUMENT_EXTENSION;
use crate::error::AppError;
use crate::model::QuickstartRecord;
use crate::pipeline::QuickstartSource;
use crate::types::{QuickstartSlug, ValidatedUrl};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Resolves quickstarts from a directory of `{slug}.json` documents.
pub struct FileCatalogSource {
    root: PathBuf,
}

impl FileCatalogSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn document_path(&self, slug: &QuickstartSlug) -> PathBuf {
        self.root
            .join(format!("{}.{}", slug, CATALOG_DOCUMENT_EXTENSION))
    }

    /// Reads and parses a single quickstart document, bypassing slug lookup.
    pub async fn read_document(path: &Path) -> Result<QuickstartRecord, AppError> {
        let body = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::missing(path.display().to_string())
            } else {
                AppError::Io(e)
            }
        })?;
        parse_quickstart_record(&body)
    }
}

#[async_trait]
impl QuickstartSource for FileCatalogSource {
    async fn resolve(&self, slug: &QuickstartSlug) -> Result<QuickstartRecord, AppError> {
        let path = self.document_path(slug);
        log::debug!("resolving quickstart '{}' from {}", slug, path.display());
        Self::read_document(&path)
            .await
            .map_err(|e| match e {
                AppError::MissingQuickstart { .. } => AppError::missing(slug.as_str()),
                other => other,
            })
    }
}

/// Resolves quickstarts from a remote catalog endpoint.
///
/// Documents live at `{base}/quickstarts/{slug}.json`. A 404 is the
/// endpoint's way of saying the slug resolves to nothing.
pub struct HttpCatalogSource {
    base: ValidatedUrl,
    client: reqwest::Client,
}

impl HttpCatalogSource {
    pub fn new(base: ValidatedUrl) -> Self {
        Self {
            base,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl QuickstartSource for HttpCatalogSource {
    async fn resolve(&self, slug: &QuickstartSlug) -> Result<QuickstartRecord, AppError> {
        let document = format!("{}.{}", slug, CATALOG_DOCUMENT_EXTENSION);
        let url = self.base.join_segments(&["quickstarts", &document])?;
        log::debug!("resolving quickstart '{}' from {}", slug, url);

        let response = self.client.get(url.as_str()).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::missing(slug.as_str()));
        }
        if !status.is_success() {
            return Err(AppError::CatalogService {
                status: status.as_u16(),
                message: format!("unexpected status fetching '{}'", slug),
            });
        }

        let body = response.text().await?;
        parse_quickstart_record(&body)
    }
}
