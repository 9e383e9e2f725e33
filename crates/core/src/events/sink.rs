//! Domain event sink trait and implementations.

use std::sync::{Arc, Mutex};

use log::error;
use tokio::sync::mpsc;

use super::DomainEvent;

/// Trait for receiving domain events.
///
/// Core services emit events through this trait after successful mutations.
///
/// # Design Rules
///
/// - `emit()` must be fast and non-blocking (no store writes, no waiting)
/// - Implementations should queue events for async processing
/// - Failure to emit must not affect domain operations (best-effort)
pub trait DomainEventSink: Send + Sync {
    /// Emit a single domain event.
    fn emit(&self, event: DomainEvent);

    /// Emit multiple domain events.
    ///
    /// Default implementation calls `emit()` for each event.
    fn emit_batch(&self, events: Vec<DomainEvent>) {
        for event in events {
            self.emit(event);
        }
    }
}

/// No-op implementation for tests or contexts that don't need events.
#[derive(Clone, Default)]
pub struct NoOpDomainEventSink;

impl DomainEventSink for NoOpDomainEventSink {
    fn emit(&self, _event: DomainEvent) {
        // Intentionally empty - events are discarded
    }
}

/// Mock sink for testing - collects emitted events.
#[derive(Clone, Default)]
pub struct MockDomainEventSink {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MockDomainEventSink {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Clears collected events.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    /// Returns the number of collected events.
    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Returns true if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl DomainEventSink for MockDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Channel-backed sink that feeds the live stats worker.
///
/// Events are sent to an unbounded mpsc channel for processing by the
/// background recompute task. This keeps `emit()` fast and non-blocking.
pub struct ChannelDomainEventSink {
    sender: mpsc::UnboundedSender<DomainEvent>,
}

impl ChannelDomainEventSink {
    /// Creates a sink and the receiver half to hand to the live worker.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<DomainEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl DomainEventSink for ChannelDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        if let Err(e) = self.sender.send(event) {
            error!("Failed to send domain event to live worker: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_sink_does_not_panic() {
        let sink = NoOpDomainEventSink;
        sink.emit(DomainEvent::goal_changed(2000));
        sink.emit_batch(vec![
            DomainEvent::intake_changed(vec!["a".to_string()]),
            DomainEvent::intake_changed(vec!["b".to_string()]),
        ]);
    }

    #[test]
    fn test_mock_sink_collects_events() {
        let sink = MockDomainEventSink::new();
        assert!(sink.is_empty());

        sink.emit(DomainEvent::goal_changed(1800));
        assert_eq!(sink.len(), 1);

        sink.emit_batch(vec![
            DomainEvent::intake_changed(vec!["a".to_string()]),
            DomainEvent::intake_changed(vec!["b".to_string()]),
        ]);
        assert_eq!(sink.len(), 3);

        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_channel_sink_delivers_to_receiver() {
        let (sink, mut receiver) = ChannelDomainEventSink::new();

        sink.emit(DomainEvent::intake_changed(vec!["rec1".to_string()]));

        match receiver.try_recv() {
            Ok(DomainEvent::IntakeChanged { record_ids }) => {
                assert_eq!(record_ids, vec!["rec1"]);
            }
            other => panic!("Expected IntakeChanged, got {:?}", other),
        }
        assert!(receiver.try_recv().is_err());
    }
}
