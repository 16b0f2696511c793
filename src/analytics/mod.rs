// src/analytics/mod.rs
//! Analytics events and the one-way sink they are sent to.
//!
//! The page never inspects an emission's outcome: failures in the analytics
//! backend must not affect navigation. Sinks are injected, not ambient.

mod events;
mod sink;

pub use events::{AnalyticsEvent, CallToActionEvent, CtaCategory, NavigationEvent};
pub use sink::{BufferingSink, EventSink, LogSink, NoopSink};
