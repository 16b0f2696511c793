// src/output/writer.rs
//! Executes delivery plans. The only place in the crate that performs
//! page-output I/O.

use super::clipboard::copy_to_clipboard;
use super::types::{DeliveryPlan, DeliveryReport, DeliveryTarget, FailedDelivery};
use crate::error::AppError;
use chrono::Utc;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Executes every target in the plan, collecting partial failures instead of
/// aborting on the first one.
pub fn deliver(plan: DeliveryPlan) -> Result<DeliveryReport, AppError> {
    let mut report = DeliveryReport::new();

    log::info!("executing delivery plan with {} targets", plan.targets.len());

    for target in plan.targets {
        match execute_target(&target) {
            Ok(bytes) => {
                report.bytes_written += bytes;
                report.delivered.push(target);
            }
            Err(e) => {
                log::error!("delivery failed: {}", e);
                report.failed.push(FailedDelivery {
                    target,
                    error: e.to_string(),
                });
            }
        }
    }

    report.finished_at = Utc::now();

    log::info!(
        "delivery complete at {}: {} succeeded, {} failed, {} bytes",
        report.finished_at.to_rfc3339(),
        report.delivered.len(),
        report.failed.len(),
        report.bytes_written
    );

    Ok(report)
}

fn execute_target(target: &DeliveryTarget) -> Result<usize, AppError> {
    match target {
        DeliveryTarget::WriteFile { path, content } => write_file(path, content),
        DeliveryTarget::CopyToClipboard { content } => {
            copy_to_clipboard(content)?;
            Ok(content.len())
        }
        DeliveryTarget::PrintToStdout { content } => {
            print!("{}", content);
            std::io::stdout().flush()?;
            Ok(content.len())
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<usize, AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    log::info!("wrote page to {}", path.display());
    Ok(content.len())
}
