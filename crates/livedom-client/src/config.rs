//! Client configuration

use livedom_vdom::ReconcileConfig;

use crate::events::EventKind;

/// Attribute used to address elements from the server
pub const IDENTIFIER_ATTRIBUTE: &str = "identifier";

/// How queued snapshots are delivered to the reconciler
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeliveryMode {
    /// Apply every snapshot in arrival order
    Queue,
    /// Skip snapshots superseded by a newer one already queued
    #[default]
    Coalesce,
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Event types forwarded upstream
    pub captured_events: Vec<EventKind>,
    pub delivery: DeliveryMode,
    /// Attribute consulted first when naming an event target
    pub identifier_attribute: String,
    pub reconcile: ReconcileConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            captured_events: EventKind::defaults(),
            delivery: DeliveryMode::default(),
            identifier_attribute: IDENTIFIER_ATTRIBUTE.to_string(),
            reconcile: ReconcileConfig::default(),
        }
    }
}

impl ClientConfig {
    pub fn with_delivery(mut self, delivery: DeliveryMode) -> Self {
        self.delivery = delivery;
        self
    }

    pub fn with_captured_events(mut self, events: Vec<EventKind>) -> Self {
        self.captured_events = events;
        self
    }

    pub fn with_identifier_attribute(mut self, name: impl Into<String>) -> Self {
        self.identifier_attribute = name.into();
        self
    }

    pub fn with_reconcile(mut self, reconcile: ReconcileConfig) -> Self {
        self.reconcile = reconcile;
        self
    }

    /// Captured kind for a DOM event type name, if any
    pub fn captured(&self, event_type: &str) -> Option<&EventKind> {
        self.captured_events.iter().find(|kind| kind.name == event_type)
    }
}
