//! Wire protocol
//!
//! Every message is an envelope `{ "event": NAME, "data": payload }`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Messages pushed by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum ServerMessage {
    /// New snapshot, in the JSON form of `livedom_vdom::Node`
    #[serde(rename = "VDOM_UPDATE")]
    VdomUpdate(Value),

    /// Session identifier to remember for reconnects
    #[serde(rename = "STORE_SESSION")]
    StoreSession { session_id: String },

    /// Server-side navigation to reflect in history
    #[serde(rename = "NAVIGATION_EVENT")]
    NavigationEvent { link_target: String },

    /// Clear and focus an input
    #[serde(rename = "CLEAR_INPUT_FIELD")]
    ClearInputField {
        #[serde(default)]
        identifier: String,
    },
}

impl ServerMessage {
    /// Decode one envelope
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    #[inline]
    pub fn is_snapshot(&self) -> bool {
        matches!(self, ServerMessage::VdomUpdate(_))
    }
}

/// Messages sent upstream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum ClientMessage {
    #[serde(rename = "REQUEST_SESSION")]
    RequestSession {},

    #[serde(rename = "RESTORE_SESSION")]
    RestoreSession { session_id: String },

    #[serde(rename = "DOM_EVENT")]
    DomEvent(DomEventMessage),
}

impl ClientMessage {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// A captured DOM event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomEventMessage {
    /// `"<group> <type>"`, e.g. `"MouseEvent click"`
    #[serde(rename = "DOMEventCategory")]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_anchor: Option<String>,
}

/// Current page location, split the way `window.location` exposes it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    /// Query including the leading `?`, or empty
    pub search: String,
    /// Fragment including the leading `#`, or empty
    pub anchor: String,
}

impl Location {
    /// Split a link target such as `/items?page=2#top`
    pub fn parse(target: &str) -> Self {
        let (rest, anchor) = match target.find('#') {
            Some(i) => target.split_at(i),
            None => (target, ""),
        };
        let (path, search) = match rest.find('?') {
            Some(i) => rest.split_at(i),
            None => (rest, ""),
        };
        Self {
            path: if path.is_empty() { "/".to_string() } else { path.to_string() },
            search: search.to_string(),
            anchor: anchor.to_string(),
        }
    }
}
