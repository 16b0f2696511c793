use super::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Catalog identifier of a quickstart.
///
/// The catalog issues UUIDs; both dashed and undashed forms are accepted and
/// normalized to the dashed, lowercase representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuickstartId(String);

impl QuickstartId {
    /// Parse a catalog ID, accepting dashed and undashed UUID forms.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        let uuid = Uuid::try_parse(trimmed)
            .map_err(|_| ValidationError::InvalidId(trimmed.to_string()))?;
        Ok(Self(uuid.hyphenated().to_string()))
    }

    /// Generate a fresh random ID. Useful for fixtures and benches.
    #[allow(dead_code)] // Used by lib consumers
    pub fn random() -> Self {
        Self(Uuid::new_v4().hyphenated().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuickstartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for QuickstartId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Wire documents are trusted to carry well-formed IDs; deserialization
// normalizes when possible and otherwise keeps the raw value, so a single
// odd ID never sinks a whole page render.
impl<'de> Deserialize<'de> for QuickstartId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw).unwrap_or(Self(raw)))
    }
}

static SLUG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug pattern is valid"));

/// URL-safe slug of a quickstart, e.g. `postgresql` or `aws-lambda`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuickstartSlug(String);

impl QuickstartSlug {
    /// Parse and validate a slug (lowercase kebab-case).
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let slug = input.trim();
        if slug.is_empty() {
            return Err(ValidationError::EmptyField("slug"));
        }
        if !SLUG_PATTERN.is_match(slug) {
            return Err(ValidationError::InvalidSlug {
                slug: slug.to_string(),
                reason: "expected lowercase kebab-case (letters, digits, hyphens)".to_string(),
            });
        }
        Ok(Self(slug.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuickstartSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
