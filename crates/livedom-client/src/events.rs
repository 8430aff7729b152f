//! DOM event capture
//!
//! Host events whose type is in the configured table are turned into
//! `DOM_EVENT` messages. A load event reports the location instead of a
//! target.

use std::borrow::Cow;
use std::fmt;

use livedom_tree::{DomTree, NodeId};

/// DOM event interface the type belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventGroup {
    UiEvent,
    Event,
    MouseEvent,
}

impl EventGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventGroup::UiEvent => "UIEvent",
            EventGroup::Event => "Event",
            EventGroup::MouseEvent => "MouseEvent",
        }
    }
}

impl fmt::Display for EventGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A captured event type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventKind {
    pub group: EventGroup,
    pub name: Cow<'static, str>,
}

impl EventKind {
    pub const LOAD: EventKind = EventKind::new(EventGroup::UiEvent, "load");
    pub const CHANGE: EventKind = EventKind::new(EventGroup::Event, "change");
    pub const INPUT: EventKind = EventKind::new(EventGroup::Event, "input");
    pub const SUBMIT: EventKind = EventKind::new(EventGroup::Event, "submit");
    pub const CLICK: EventKind = EventKind::new(EventGroup::MouseEvent, "click");

    pub const fn new(group: EventGroup, name: &'static str) -> Self {
        Self {
            group,
            name: Cow::Borrowed(name),
        }
    }

    pub fn defaults() -> Vec<EventKind> {
        vec![Self::LOAD, Self::CHANGE, Self::INPUT, Self::SUBMIT, Self::CLICK]
    }

    /// `"<group> <type>"`, as sent in `DOMEventCategory`
    pub fn category(&self) -> String {
        format!("{} {}", self.group, self.name)
    }

    pub fn is_load(&self) -> bool {
        self.name == "load"
    }
}

/// An event raised by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEvent {
    /// DOM event type name, e.g. `"click"`
    pub event_type: String,
    pub target: Option<NodeId>,
    pub value: Option<String>,
}

impl HostEvent {
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            target: None,
            value: None,
        }
    }

    pub fn on(mut self, target: NodeId) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Name of an event target: `attribute`, then `id`, then empty
pub fn identifier_of(tree: &DomTree, target: NodeId, attribute: &str) -> String {
    tree.attribute(target, attribute)
        .or_else(|| tree.attribute(target, "id"))
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category() {
        assert_eq!(EventKind::LOAD.category(), "UIEvent load");
        assert_eq!(EventKind::SUBMIT.category(), "Event submit");
        assert_eq!(EventKind::CLICK.category(), "MouseEvent click");
        assert!(EventKind::LOAD.is_load());
    }

    #[test]
    fn test_identifier_fallbacks() {
        let mut tree = DomTree::new();
        let both = tree.create_element("button");
        tree.set_attribute(both, "identifier", "save").unwrap();
        tree.set_attribute(both, "id", "btn").unwrap();
        let id_only = tree.create_element("button");
        tree.set_attribute(id_only, "id", "btn").unwrap();
        let neither = tree.create_element("button");
        let text = tree.create_text("x");

        assert_eq!(identifier_of(&tree, both, "identifier"), "save");
        assert_eq!(identifier_of(&tree, id_only, "identifier"), "btn");
        assert_eq!(identifier_of(&tree, neither, "identifier"), "");
        assert_eq!(identifier_of(&tree, text, "identifier"), "");
    }
}
