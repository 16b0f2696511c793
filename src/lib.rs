// src/lib.rs
//! quickstart2page library — renders quickstart catalog records into tabbed
//! detail pages.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `ValidationError`
//! - **Configuration** — `PipelineConfig`
//! - **Domain model** — `QuickstartRecord`, `QuickstartComponent`, payloads
//! - **Classification** — `classify`, `ClassifiedQuickstart`
//! - **Presentation** — `TabController`, `TabId`, `SectionView`, SEO metadata
//! - **Analytics** — `EventSink`, `NavigationEvent`, `CallToActionEvent`
//! - **Formatting** — `render_detail_page`, `compose_error_page`
//! - **Sources & delivery** — `FileCatalogSource`, `HttpCatalogSource`, `deliver`

// Internal modules — must match what's in main.rs
mod analytics;
mod catalog;
mod config;
mod constants;
mod error;
mod formatting;
mod model;
mod output;
mod pipeline;
mod presentation;
mod types;

// --- Error Handling ---
pub use crate::error::AppError;
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, PipelineConfig, QuickstartInput};

// --- Constants the interfaces promise ---
pub use crate::constants::{LOGIN_LINK, QUICKSTARTS_REPO, SHIELD_LEVELS, SIGNUP_LINK};

// --- Domain Model ---
pub use crate::model::{
    AlertConditionPayload, AlertConditionType, Author, DashboardPayload, DashboardScreenshot,
    DocumentationPayload, IconRef, InstallPlan, QuickstartComponent, QuickstartMetadata,
    QuickstartRecord, UnrecognizedComponent,
};

// --- Domain Types ---
pub use crate::types::{
    QuickstartId, QuickstartSlug, RenderedPage, SupportLevel, TemplateName, ValidatedUrl,
};

// --- Classification ---
pub use crate::catalog::{
    classify, load_related_pages, parse_quickstart_record, related_resources_for,
    ClassifiedQuickstart, FileCatalogSource, HttpCatalogSource, RelatedResource,
    RelatedResourceTable,
};

// --- Presentation ---
pub use crate::presentation::{
    page_metadata, section_view, PageMetadata, SearchIndexHint, SectionView, TabController, TabId,
    TabProjection,
};

// --- Analytics ---
pub use crate::analytics::{
    AnalyticsEvent, BufferingSink, CallToActionEvent, CtaCategory, EventSink, LogSink,
    NavigationEvent, NoopSink,
};

// --- Formatting ---
pub use crate::formatting::{
    compose_detail_body, compose_error_page, compose_single_section, render_detail_page,
    render_page,
};

// --- Delivery ---
pub use crate::output::{deliver, DeliveryPlan, DeliveryReport, DeliveryTarget, FailedDelivery};

// --- Pipeline Traits ---
pub use crate::pipeline::{PageComposer, PageDelivery, QuickstartSource};
