//! Store event sink trait and implementations.

use std::sync::{Arc, Mutex};

use super::StoreEvent;

/// Trait for receiving store events.
///
/// `emit()` must not block and must not call back into the store's write
/// path. Failure to deliver an event never affects the store operation.
pub trait StoreEventSink: Send + Sync {
    fn emit(&self, event: StoreEvent);
}

/// No-op implementation for contexts that don't need events.
#[derive(Clone, Default)]
pub struct NoOpStoreEventSink;

impl StoreEventSink for NoOpStoreEventSink {
    fn emit(&self, _event: StoreEvent) {}
}

/// Collects emitted events in memory.
#[derive(Clone, Default)]
pub struct RecordingStoreEventSink {
    events: Arc<Mutex<Vec<StoreEvent>>>,
}

impl RecordingStoreEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<StoreEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.events.lock().map(|events| events.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StoreEventSink for RecordingStoreEventSink {
    fn emit(&self, event: StoreEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
