// src/constants.rs
//! Domain constants that define the fixed points of the catalog presentation.
//!
//! Each constant is named for the domain concept it pins down, not its
//! technical role. Reading these should tell you the story of the detail
//! page: where quickstart sources live, which support tiers earn a badge,
//! and which analytics vocabulary the page speaks.

use crate::types::SupportLevel;

// ---------------------------------------------------------------------------
// External locations
// ---------------------------------------------------------------------------

/// Fallback repository for quickstarts whose record carries no `sourceUrl`.
pub const QUICKSTARTS_REPO: &str = "https://github.com/newrelic/newrelic-quickstarts";

/// Account sign-up target for the "how to use" call to action.
pub const SIGNUP_LINK: &str = "https://newrelic.com/signup";

/// Account log-in target for the "how to use" call to action.
pub const LOGIN_LINK: &str = "https://login.newrelic.com/login";

/// Path prefix for keys in the related-resources table.
pub const RELATED_PAGES_PREFIX: &str = "/instant-observability";

// ---------------------------------------------------------------------------
// Support badge
// ---------------------------------------------------------------------------

/// Support tiers that qualify for the shield badge in the page header.
///
/// Membership in this list is the entire badge decision. Community-supported
/// quickstarts render without a badge.
pub const SHIELD_LEVELS: [SupportLevel; 2] = [SupportLevel::NewRelic, SupportLevel::Verified];

// ---------------------------------------------------------------------------
// Analytics vocabulary
// ---------------------------------------------------------------------------

/// Event name shared by every event the detail page emits.
pub const INSTANT_OBSERVABILITY_EVENT: &str = "instantObservability";

/// Category carried by tab-activation navigation events.
pub const TAB_TOGGLE_CATEGORY: &str = "QuickstartTabToggle";

// ---------------------------------------------------------------------------
// Catalog wire format
// ---------------------------------------------------------------------------

/// File extension of quickstart documents in a catalog directory.
pub const CATALOG_DOCUMENT_EXTENSION: &str = "json";

/// Maximum characters shown when previewing unparseable catalog bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;

// ---------------------------------------------------------------------------
// String capacity hints (performance, not correctness)
// ---------------------------------------------------------------------------

/// Estimated characters per rendered component, used to pre-allocate pages.
pub const CHARS_PER_COMPONENT_ESTIMATE: usize = 256;

/// Default initial capacity for page string builders.
pub const PAGE_INITIAL_CAPACITY: usize = 1024;
