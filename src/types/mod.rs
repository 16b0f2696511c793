use thiserror::Error;

mod domain_types;
mod ids;

pub use domain_types::*;
pub use ids::*;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid quickstart ID format: {0}")]
    InvalidId(String),

    #[error("Invalid quickstart slug: {slug} - {reason}")]
    InvalidSlug { slug: String, reason: String },

    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),

    #[error("Unknown tab identifier: {0}")]
    UnknownTab(String),

    #[error("Invalid template name: {name} - {reason}")]
    InvalidTemplateName { name: String, reason: String },
}
