//! Reconciler Configuration

use std::borrow::Cow;

use crate::node::{Element, PropClass, PropValue};

/// Prefix marking event-binding properties
pub const EVENT_PREFIX: &str = "on";

/// Property that forces replacement of its element
pub const FORCE_UPDATE: &str = "forceUpdate";

/// Property naming conventions used by the reconciler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileConfig {
    /// Names starting with this prefix are event bindings, never reflected
    pub event_prefix: Cow<'static, str>,

    /// Name of the force-update marker
    pub force_update_prop: Cow<'static, str>,
}

impl ReconcileConfig {
    /// Default conventions (`on*` events, `forceUpdate`)
    pub const DEFAULT: ReconcileConfig = ReconcileConfig {
        event_prefix: Cow::Borrowed(EVENT_PREFIX),
        force_update_prop: Cow::Borrowed(FORCE_UPDATE),
    };

    pub fn with_event_prefix(mut self, prefix: impl Into<Cow<'static, str>>) -> Self {
        self.event_prefix = prefix.into();
        self
    }

    pub fn with_force_update_prop(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.force_update_prop = name.into();
        self
    }

    /// Event bindings and the force-update marker are custom
    pub fn is_custom_property(&self, name: &str) -> bool {
        name.starts_with(self.event_prefix.as_ref()) || name == self.force_update_prop
    }

    /// Class is decided by name first, then by value type
    pub fn classify(&self, name: &str, value: &PropValue) -> PropClass {
        if self.is_custom_property(name) {
            PropClass::Custom
        } else if value.is_boolean() {
            PropClass::Boolean
        } else {
            PropClass::Generic
        }
    }

    /// Whether an element carries a truthy force-update marker
    pub fn forces_update(&self, element: &Element) -> bool {
        element
            .props
            .get(self.force_update_prop.as_ref())
            .is_some_and(PropValue::is_truthy)
    }
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
