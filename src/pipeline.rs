// src/pipeline.rs
//! Pipeline capability traits — abstract the three stages of the
//! quickstart-to-page pipeline.
//!
//! Each trait describes a single capability, enabling testing each stage in
//! isolation.

use crate::error::AppError;
use crate::model::QuickstartRecord;
use crate::output::DeliveryReport;
use crate::types::{QuickstartSlug, RenderedPage};

/// Resolves a quickstart record by slug.
///
/// A slug with no record behind it is [`AppError::MissingQuickstart`] — the
/// caller renders the singular error page for that case and propagates
/// everything else.
#[async_trait::async_trait]
pub trait QuickstartSource: Send + Sync {
    async fn resolve(&self, slug: &QuickstartSlug) -> Result<QuickstartRecord, AppError>;
}

/// Transforms a quickstart record into a rendered detail page.
pub trait PageComposer {
    fn compose(&self, record: &QuickstartRecord) -> Result<RenderedPage, AppError>;
}

/// Delivers a rendered page to its destinations.
pub trait PageDelivery {
    fn deliver(&self, page: RenderedPage) -> Result<DeliveryReport, AppError>;
}
