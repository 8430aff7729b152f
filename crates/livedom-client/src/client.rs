//! Client state machine
//!
//! Owns the live tree and its render session, and reacts to server
//! messages and connection changes. Upstream messages are returned to the
//! caller, which owns the transport.

use livedom_tree::{DomTree, NodeId};
use livedom_vdom::{CommitStats, Node, Session};
use tracing::{debug, info, trace};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::events::{HostEvent, identifier_of};
use crate::protocol::{ClientMessage, DomEventMessage, Location, ServerMessage};
use crate::store::{MemoryStore, SessionStore};

/// One connected page
#[derive(Debug)]
pub struct Client<S: SessionStore = MemoryStore> {
    config: ClientConfig,
    tree: DomTree,
    session: Session<DomTree>,
    store: S,
    location: Location,
    history: Vec<String>,
    connected: bool,
    last_commit: Option<CommitStats>,
}

impl Client<MemoryStore> {
    /// Client at `/` with an empty in-memory store
    pub fn new(config: ClientConfig) -> Self {
        Self::with_store(config, MemoryStore::new(), Location::parse("/"))
    }
}

impl<S: SessionStore> Client<S> {
    pub fn with_store(config: ClientConfig, store: S, location: Location) -> Self {
        let tree = DomTree::new();
        let session = Session::with_config(tree.root(), config.reconcile.clone());
        Self {
            config,
            tree,
            session,
            store,
            location,
            history: Vec::new(),
            connected: false,
            last_commit: None,
        }
    }

    // ------------------------------------------------------------------
    // Connection lifecycle
    // ------------------------------------------------------------------

    /// First connection: resume a stored session or ask for a new one
    pub fn on_connect(&mut self) -> ClientMessage {
        self.connected = true;
        match self.store.load() {
            Some(session_id) => {
                info!("Connected, restoring session {}", session_id);
                ClientMessage::RestoreSession { session_id }
            }
            None => {
                info!("Connected, requesting a session");
                ClientMessage::RequestSession {}
            }
        }
    }

    pub fn on_disconnect(&mut self) {
        if self.connected {
            info!("Disconnected");
        }
        self.connected = false;
    }

    /// Reconnected: re-announce the current page
    pub fn on_reconnect(&mut self) -> ClientMessage {
        self.connected = true;
        info!("Reconnected at {}", self.location.path);
        self.load_event()
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    // ------------------------------------------------------------------
    // Server messages
    // ------------------------------------------------------------------

    /// Apply one server message
    pub fn handle(&mut self, message: ServerMessage) -> Result<(), ClientError> {
        match message {
            ServerMessage::VdomUpdate(value) => {
                let node = Node::from_json_with(&value, self.session.config())?;
                self.apply(node)?;
            }
            ServerMessage::StoreSession { session_id } => {
                debug!("Storing session {}", session_id);
                self.store.save(&session_id);
            }
            ServerMessage::NavigationEvent { link_target } => {
                debug!("Navigating to {}", link_target);
                self.location = Location::parse(&link_target);
                self.history.push(link_target);
            }
            ServerMessage::ClearInputField { identifier } => {
                self.clear_input_field(&identifier)?;
            }
        }
        Ok(())
    }

    /// Reconcile the live tree to `node`
    pub fn apply(&mut self, node: Node) -> Result<CommitStats, ClientError> {
        let stats = self.session.commit(&mut self.tree, Some(node))?;
        self.last_commit = Some(stats);
        Ok(stats)
    }

    /// Reset and focus the element addressed by `identifier`.
    /// An empty identifier does nothing.
    pub fn clear_input_field(&mut self, identifier: &str) -> Result<(), ClientError> {
        if identifier.is_empty() {
            return Ok(());
        }
        let target = self
            .tree
            .find_by_attribute(self.tree.root(), &self.config.identifier_attribute, identifier)
            .ok_or_else(|| ClientError::UnknownIdentifier(identifier.to_string()))?;

        self.tree.set_value(target, "")?;
        self.tree.focus(target)?;
        trace!("Cleared input {} ({})", identifier, target);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Host events
    // ------------------------------------------------------------------

    /// Upstream message for a host event, or `None` if its type is not captured
    pub fn capture(&self, event: &HostEvent) -> Option<ClientMessage> {
        let Some(kind) = self.config.captured(&event.event_type) else {
            trace!("Ignoring uncaptured {} event", event.event_type);
            return None;
        };
        if kind.is_load() {
            return Some(self.load_event());
        }

        let target = event
            .target
            .map(|id| identifier_of(&self.tree, id, &self.config.identifier_attribute))
            .unwrap_or_default();
        Some(ClientMessage::DomEvent(DomEventMessage {
            category: kind.category(),
            target: Some(target),
            value: Some(event.value.clone().unwrap_or_default()),
            ..Default::default()
        }))
    }

    /// Browser history moved: adopt `location` and announce it like a load
    pub fn on_popstate(&mut self, location: Location) -> ClientMessage {
        self.location = location;
        self.load_event()
    }

    fn load_event(&self) -> ClientMessage {
        ClientMessage::DomEvent(DomEventMessage {
            category: crate::events::EventKind::LOAD.category(),
            link_target: Some(self.location.path.clone()),
            link_search: Some(self.location.search.clone()),
            link_anchor: Some(self.location.anchor.clone()),
            ..Default::default()
        })
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Mutable tree, for hosts reflecting user input
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    pub fn session(&self) -> &Session<DomTree> {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Link targets pushed by navigation events, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn last_commit(&self) -> Option<CommitStats> {
        self.last_commit
    }

    /// Element carrying `identifier` in the configured attribute
    pub fn element_by_identifier(&self, identifier: &str) -> Option<NodeId> {
        self.tree
            .find_by_attribute(self.tree.root(), &self.config.identifier_attribute, identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form() -> ServerMessage {
        ServerMessage::VdomUpdate(json!({
            "type": "form", "props": {"identifier": "f"}, "children": [
                {"type": "input", "props": {"identifier": "name"}, "children": []},
                {"type": "button", "props": {"id": "go", "onclick": {}}, "children": ["Go"]}
            ]
        }))
    }

    #[test]
    fn test_connect_without_stored_session() {
        let mut client = Client::new(ClientConfig::default());
        assert!(!client.is_connected());
        assert_eq!(client.on_connect(), ClientMessage::RequestSession {});
        assert!(client.is_connected());
    }

    #[test]
    fn test_stored_session_is_restored() {
        let mut client = Client::new(ClientConfig::default());
        client
            .handle(ServerMessage::StoreSession { session_id: "abc".into() })
            .unwrap();
        client.on_disconnect();
        assert!(!client.is_connected());

        assert_eq!(
            client.on_connect(),
            ClientMessage::RestoreSession { session_id: "abc".into() }
        );
    }

    #[test]
    fn test_navigation_pushes_history() {
        let mut client = Client::new(ClientConfig::default());
        client
            .handle(ServerMessage::NavigationEvent { link_target: "/items?page=2".into() })
            .unwrap();

        assert_eq!(client.history(), ["/items?page=2"]);
        assert_eq!(client.location().path, "/items");
        assert_eq!(client.location().search, "?page=2");
    }

    #[test]
    fn test_reconnect_reports_location() {
        let mut client = Client::with_store(
            ClientConfig::default(),
            MemoryStore::new(),
            Location::parse("/docs#intro"),
        );
        let message = client.on_reconnect();

        assert_eq!(
            message,
            ClientMessage::DomEvent(DomEventMessage {
                category: "UIEvent load".into(),
                link_target: Some("/docs".into()),
                link_search: Some(String::new()),
                link_anchor: Some("#intro".into()),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_capture_click_uses_id_fallback() {
        let mut client = Client::new(ClientConfig::default());
        client.handle(form()).unwrap();
        let button = client.tree().find_by_attribute(client.tree().root(), "id", "go").unwrap();

        let message = client.capture(&HostEvent::new("click").on(button)).unwrap();
        let ClientMessage::DomEvent(event) = message else {
            panic!("expected DOM_EVENT");
        };
        assert_eq!(event.category, "MouseEvent click");
        assert_eq!(event.target.as_deref(), Some("go"));
        assert_eq!(event.value.as_deref(), Some(""));
        assert_eq!(event.link_target, None);
    }

    #[test]
    fn test_uncaptured_event_is_ignored() {
        let client = Client::new(ClientConfig::default());
        assert_eq!(client.capture(&HostEvent::new("keydown")), None);
    }

    #[test]
    fn test_clear_input_field() {
        let mut client = Client::new(ClientConfig::default());
        client.handle(form()).unwrap();
        let input = client.element_by_identifier("name").unwrap();
        client.tree_mut().set_value(input, "typed").unwrap();

        client
            .handle(ServerMessage::ClearInputField { identifier: "name".into() })
            .unwrap();

        assert_eq!(client.tree().value(input), Some(""));
        assert_eq!(client.tree().focused(), Some(input));
    }

    #[test]
    fn test_clear_unknown_and_empty_identifier() {
        let mut client = Client::new(ClientConfig::default());
        client.handle(form()).unwrap();

        let err = client.clear_input_field("missing").unwrap_err();
        assert!(matches!(err, ClientError::UnknownIdentifier(ref id) if id == "missing"));
        assert!(client.clear_input_field("").is_ok());
        assert_eq!(client.tree().focused(), None);
    }

    #[test]
    fn test_malformed_snapshot_keeps_tree() {
        let mut client = Client::new(ClientConfig::default());
        client.handle(form()).unwrap();
        let before = client.session().previous().cloned();

        let err = client
            .handle(ServerMessage::VdomUpdate(json!({"type": "form", "props": {}})))
            .unwrap_err();

        assert!(!err.is_fatal());
        assert_eq!(client.session().previous().cloned(), before);
        assert_eq!(client.session().commits(), 1);
    }
}
