// src/model/component.rs
//! Content components of a quickstart and their wire format.
//!
//! The catalog delivers components as `{"kind": ..., "payload": {...}}`
//! records. The three known kinds map to typed payloads; anything else is
//! preserved as [`QuickstartComponent::Unrecognized`] so the classifier can
//! drop it through an explicit branch instead of a parse failure.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Value};

/// Documentation entry bundled with a quickstart (shown as a data source).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DocumentationPayload {
    pub display_name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// How an alert condition evaluates its signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertConditionType {
    Static,
    Baseline,
    Outlier,
}

/// Alert condition bundled with a quickstart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertConditionPayload {
    pub display_name: String,
    #[serde(rename = "type")]
    pub condition_type: AlertConditionType,
    #[serde(default)]
    pub details: Option<String>,
}

/// Screenshot attached to a dashboard definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardScreenshot {
    pub url: String,
}

/// Dashboard bundled with a quickstart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPayload {
    pub display_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub screenshots: Vec<DashboardScreenshot>,
}

/// A component whose discriminant this crate does not know.
///
/// Not an error: the raw kind is kept for logging and the component is
/// classified into no bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedComponent {
    pub kind: String,
}

/// A single content component of a quickstart, discriminated by `kind`.
#[derive(Debug, Clone, PartialEq)]
pub enum QuickstartComponent {
    Documentation(DocumentationPayload),
    AlertCondition(AlertConditionPayload),
    Dashboard(DashboardPayload),
    Unrecognized(UnrecognizedComponent),
}

impl QuickstartComponent {
    /// The wire discriminant of this component.
    pub fn kind(&self) -> &str {
        match self {
            Self::Documentation(_) => "documentation",
            Self::AlertCondition(_) => "alertCondition",
            Self::Dashboard(_) => "dashboard",
            Self::Unrecognized(raw) => &raw.kind,
        }
    }
}

#[derive(Deserialize)]
struct RawComponent {
    kind: String,
    #[serde(default)]
    payload: Value,
}

impl<'de> Deserialize<'de> for QuickstartComponent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawComponent::deserialize(deserializer)?;
        match raw.kind.as_str() {
            "documentation" => serde_json::from_value(raw.payload)
                .map(Self::Documentation)
                .map_err(D::Error::custom),
            "alertCondition" => serde_json::from_value(raw.payload)
                .map(Self::AlertCondition)
                .map_err(D::Error::custom),
            "dashboard" => serde_json::from_value(raw.payload)
                .map(Self::Dashboard)
                .map_err(D::Error::custom),
            _ => Ok(Self::Unrecognized(UnrecognizedComponent { kind: raw.kind })),
        }
    }
}

impl Serialize for QuickstartComponent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let document = match self {
            Self::Documentation(payload) => json!({ "kind": self.kind(), "payload": payload }),
            Self::AlertCondition(payload) => json!({ "kind": self.kind(), "payload": payload }),
            Self::Dashboard(payload) => json!({ "kind": self.kind(), "payload": payload }),
            Self::Unrecognized(raw) => json!({ "kind": raw.kind, "payload": Value::Null }),
        };
        document.serialize(serializer)
    }
}
