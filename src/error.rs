// src/error.rs
//! Application error types with structured error handling.
//!
//! The taxonomy is deliberately narrow. The only failure a reader of the
//! page ever sees is [`AppError::MissingQuickstart`], which renders the
//! singular error view. Everything else is operational (I/O, configuration,
//! delivery) and surfaces to the operator, not the page.

use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    /// The catalog has no record for the requested quickstart. Rendered as
    /// the singular error page; never a partial detail view.
    #[error("No quickstart found for '{locator}'")]
    MissingQuickstart { locator: String },

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Catalog returned an error ({status}): {message}")]
    CatalogService { status: u16, message: String },

    #[error("Malformed catalog document: {0}")]
    MalformedDocument(String),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error interacting with clipboard: {0}")]
    Clipboard(String),

    #[error("Template file not found at {path}: {source}")]
    TemplateNotFound {
        path: String,
        source: std::io::Error,
    },

    #[error("Template render error for template {name}: {message}")]
    TemplateRender { name: String, message: String },

    #[error("JSON parse error for {path}: {source}")]
    JsonParse {
        path: std::path::PathBuf,
        source: serde_json::Error,
    },

    #[error("Output delivery failed: {}", failures.join(", "))]
    DeliveryFailed { failures: Vec<String> },

    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),
}

impl AppError {
    /// Whether this error should render the singular error page instead of
    /// propagating to the operator.
    pub fn is_missing_quickstart(&self) -> bool {
        matches!(self, Self::MissingQuickstart { .. })
    }

    /// Missing-quickstart error for a locator that failed to resolve.
    pub fn missing(locator: impl Into<String>) -> Self {
        Self::MissingQuickstart {
            locator: locator.into(),
        }
    }
}

// Preserve error chains from anyhow at the application boundary.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal {
            message: err.to_string(),
            source: None,
        }
    }
}

impl From<arboard::Error> for AppError {
    fn from(err: arboard::Error) -> Self {
        AppError::Clipboard(format!("Clipboard error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedDocument(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;
