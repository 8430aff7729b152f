//! Session identifier persistence

/// Where the server-issued session id survives reconnects
pub trait SessionStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, session_id: &str);
}

/// Process-local store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    session_id: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with an id from an earlier connection
    pub fn with_session(session_id: impl Into<String>) -> Self {
        Self {
            session_id: Some(session_id.into()),
        }
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.session_id.clone()
    }

    fn save(&mut self, session_id: &str) {
        self.session_id = Some(session_id.to_string());
    }
}
