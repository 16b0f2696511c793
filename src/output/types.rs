// src/output/types.rs
//! Immutable types for planning and reporting page delivery.

use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Where a rendered page goes.
#[derive(Debug, Clone)]
pub enum DeliveryTarget {
    /// Write the page to a file
    WriteFile { path: PathBuf, content: String },
    /// Copy the page to the clipboard
    CopyToClipboard { content: String },
    /// Print the page to stdout
    PrintToStdout { content: String },
}

/// The set of deliveries for one page render.
#[derive(Debug, Clone, Default)]
pub struct DeliveryPlan {
    pub targets: Vec<DeliveryTarget>,
}

impl DeliveryPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target(mut self, target: DeliveryTarget) -> Self {
        self.targets.push(target);
        self
    }

    #[allow(dead_code)] // Used by lib consumers
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// A delivery that failed, with the reason kept as display text.
#[derive(Debug, Clone)]
pub struct FailedDelivery {
    #[allow(dead_code)] // Used in error reporting
    pub target: DeliveryTarget,
    pub error: String,
}

/// Result of executing a delivery plan.
#[derive(Debug, Clone)]
pub struct DeliveryReport {
    pub delivered: Vec<DeliveryTarget>,
    pub failed: Vec<FailedDelivery>,
    pub bytes_written: usize,
    pub finished_at: DateTime<Utc>,
}

impl Default for DeliveryReport {
    fn default() -> Self {
        Self::new()
    }
}

impl DeliveryReport {
    pub fn new() -> Self {
        Self {
            delivered: Vec::new(),
            failed: Vec::new(),
            bytes_written: 0,
            finished_at: Utc::now(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}
