//! livedom client
//!
//! Everything around the reconciler on the receiving side:
//! - `protocol`: messages exchanged with the server
//! - `source`: serialized snapshot delivery from a channel
//! - `client`: applies server messages to the live tree
//! - `events`: turns host events into upstream messages

mod client;
mod config;
mod error;
mod events;
mod protocol;
mod source;
mod store;

pub use client::Client;
pub use config::{ClientConfig, DeliveryMode};
pub use error::ClientError;
pub use events::{EventGroup, EventKind, HostEvent, identifier_of};
pub use protocol::{ClientMessage, DomEventMessage, Location, ServerMessage};
pub use source::{Outbox, SnapshotSource, SourceStats};
pub use store::{MemoryStore, SessionStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
