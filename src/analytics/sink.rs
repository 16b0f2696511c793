// src/analytics/sink.rs
//! The event-sink capability and its concrete sinks.

use super::events::AnalyticsEvent;
use parking_lot::Mutex;

/// One-way message send to an analytics backend.
///
/// This trait is **object-safe** and injected wherever events originate, so
/// the core stays a pure function of its inputs plus this single side
/// channel.
///
/// # Laws
///
/// - **One-way**: `record` returns nothing and must not propagate failure.
///   A sink that cannot deliver swallows the loss; navigation never observes
///   analytics outcomes.
/// - **Non-blocking**: `record` must return promptly. Sinks that talk to a
///   network hand the event off and return.
pub trait EventSink: Send + Sync {
    fn record(&self, event: &AnalyticsEvent);
}

/// Sink that writes each event to the log at debug level.
///
/// The default sink for the CLI: events are visible under `--verbose`
/// without any analytics backend configured.
#[derive(Debug, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn record(&self, event: &AnalyticsEvent) {
        match serde_json::to_string(event) {
            Ok(wire) => log::debug!("analytics event: {}", wire),
            Err(e) => log::warn!("analytics event could not be serialized: {}", e),
        }
    }
}

/// Sink that drops every event.
#[allow(dead_code)] // Used by lib consumers
#[derive(Debug, Default)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn record(&self, _event: &AnalyticsEvent) {}
}

/// Sink that buffers events in memory, in emission order.
///
/// Backs the CLI's `--events-json` output and doubles as the recording stub
/// in tests.
#[derive(Debug, Default)]
pub struct BufferingSink {
    events: Mutex<Vec<AnalyticsEvent>>,
}

impl BufferingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies the buffered events without draining them.
    #[allow(dead_code)] // Used by lib consumers
    pub fn snapshot(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().clone()
    }

    /// Removes and returns all buffered events.
    pub fn drain(&self) -> Vec<AnalyticsEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    #[allow(dead_code)] // Used by lib consumers
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    #[allow(dead_code)] // Used by lib consumers
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventSink for BufferingSink {
    fn record(&self, event: &AnalyticsEvent) {
        self.events.lock().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::events::{CallToActionEvent, CtaCategory};
    use crate::types::{QuickstartId, QuickstartSlug};

    fn sample_event(category: CtaCategory) -> AnalyticsEvent {
        AnalyticsEvent::CallToAction(CallToActionEvent::new(
            QuickstartSlug::parse("redis").unwrap(),
            QuickstartId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap(),
            category,
            None,
        ))
    }

    #[test]
    fn buffering_sink_preserves_emission_order() {
        let sink = BufferingSink::new();
        sink.record(&sample_event(CtaCategory::SignUp));
        sink.record(&sample_event(CtaCategory::LogIn));

        let events = sink.drain();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], sample_event(CtaCategory::SignUp));
        assert_eq!(events[1], sample_event(CtaCategory::LogIn));
        assert!(sink.is_empty());
    }

    #[test]
    fn snapshot_does_not_drain() {
        let sink = BufferingSink::new();
        sink.record(&sample_event(CtaCategory::ViewRepo));

        assert_eq!(sink.snapshot().len(), 1);
        assert_eq!(sink.len(), 1);
    }
}
