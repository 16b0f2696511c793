// src/output/mod.rs
//! Page delivery with clear separation of planning and execution.

mod clipboard;
mod types;
mod writer;

pub use clipboard::copy_to_clipboard;
pub use types::{DeliveryPlan, DeliveryReport, DeliveryTarget, FailedDelivery};
pub use writer::deliver;
