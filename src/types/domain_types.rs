// src/types/domain_types.rs
//! Domain-specific newtypes and closed vocabularies.

use super::ValidationError;
use crate::constants::SHIELD_LEVELS;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Support tier of a quickstart, as published by the catalog.
///
/// Tiers the catalog adds in the future deserialize as [`Community`] — the
/// weakest claim we can make about an unknown tier, and one that never earns
/// the shield badge.
///
/// [`Community`]: SupportLevel::Community
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SupportLevel {
    NewRelic,
    Verified,
    #[serde(other)]
    Community,
}

impl SupportLevel {
    /// Whether this tier qualifies for the shield badge in the page header.
    ///
    /// A pure membership test against the static allow-list; not a stateful
    /// decision.
    pub fn shows_shield(&self) -> bool {
        SHIELD_LEVELS.contains(self)
    }

    /// Human label used in the support section of the page.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NewRelic => "Built by New Relic",
            Self::Verified => "Verified by New Relic",
            Self::Community => "Built by the community",
        }
    }
}

impl fmt::Display for SupportLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NewRelic => write!(f, "NEW_RELIC"),
            Self::Verified => write!(f, "VERIFIED"),
            Self::Community => write!(f, "COMMUNITY"),
        }
    }
}

/// A URL validated to be http(s) at construction time.
///
/// Used for operator-supplied locations (the catalog endpoint); URLs inside
/// catalog content are display-only strings and stay unvalidated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUrl(Url);

impl ValidatedUrl {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let parsed = Url::parse(input).map_err(|e| ValidationError::InvalidUrl {
            url: input.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ValidationError::InvalidUrl {
                url: input.to_string(),
                reason: "only HTTP and HTTPS URLs are supported".to_string(),
            });
        }
        Ok(Self(parsed))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Appends path segments, keeping the base path intact.
    pub fn join_segments(&self, segments: &[&str]) -> Result<Self, ValidationError> {
        let mut url = self.0.clone();
        {
            let mut parts = url
                .path_segments_mut()
                .map_err(|_| ValidationError::InvalidUrl {
                    url: self.0.to_string(),
                    reason: "URL cannot be a base".to_string(),
                })?;
            parts.pop_if_empty();
            for segment in segments {
                parts.push(segment);
            }
        }
        Ok(Self(url))
    }
}

impl fmt::Display for ValidatedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Page template name, restricted to filesystem-safe characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateName(String);

impl TemplateName {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyField("template"));
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ValidationError::InvalidTemplateName {
                name,
                reason: "only alphanumerics, hyphens, and underscores are allowed".to_string(),
            });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The composed Markdown detail page, ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage(String);

impl RenderedPage {
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    #[allow(dead_code)] // Used by lib consumers
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[allow(dead_code)] // Used by lib consumers
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[allow(dead_code)] // Used by lib consumers
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RenderedPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shield_badge_follows_the_allow_list() {
        assert!(SupportLevel::NewRelic.shows_shield());
        assert!(SupportLevel::Verified.shows_shield());
        assert!(!SupportLevel::Community.shows_shield());
    }

    #[test]
    fn unknown_support_tier_deserializes_as_community() {
        let level: SupportLevel = serde_json::from_str("\"ENTERPRISE\"").unwrap();
        assert_eq!(level, SupportLevel::Community);
    }

    #[test]
    fn known_support_tiers_round_trip() {
        let level: SupportLevel = serde_json::from_str("\"NEW_RELIC\"").unwrap();
        assert_eq!(level, SupportLevel::NewRelic);
        assert_eq!(serde_json::to_string(&level).unwrap(), "\"NEW_RELIC\"");
    }

    #[test]
    fn validated_url_rejects_non_http_schemes() {
        assert!(ValidatedUrl::parse("ftp://example.com").is_err());
        assert!(ValidatedUrl::parse("not a url").is_err());
        assert!(ValidatedUrl::parse("https://example.com/catalog").is_ok());
    }

    #[test]
    fn join_segments_extends_the_path() {
        let base = ValidatedUrl::parse("https://example.com/catalog/").unwrap();
        let joined = base.join_segments(&["quickstarts", "redis.json"]).unwrap();
        assert_eq!(
            joined.as_str(),
            "https://example.com/catalog/quickstarts/redis.json"
        );
    }

    #[test]
    fn template_name_rejects_path_characters() {
        assert!(TemplateName::new("default").is_ok());
        assert!(TemplateName::new("../escape").is_err());
        assert!(TemplateName::new("").is_err());
    }
}
