//! Snapshot delivery
//!
//! Server messages arrive on a channel and are applied one at a time by a
//! single consumer, so reconciliation never interleaves. In coalescing mode
//! a run of queued `VDOM_UPDATE`s collapses to the newest one that decodes;
//! messages of other kinds are never skipped and keep their order.

use livedom_vdom::{Node, ReconcileConfig};
use smol::channel::{Receiver, Sender};
use tracing::{debug, warn};

use crate::config::DeliveryMode;
use crate::error::ClientError;
use crate::protocol::{ClientMessage, ServerMessage};
use crate::store::SessionStore;
use crate::Client;

/// Counters for one `run`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceStats {
    /// Messages handed to the client
    pub applied: u64,
    /// Snapshots skipped because a newer one was queued
    pub coalesced: u64,
    /// Messages dropped without losing the tree, including undecodable queued snapshots
    pub rejected: u64,
}

/// Single consumer of inbound server messages
pub struct SnapshotSource {
    inbound: Receiver<ServerMessage>,
    pending: Option<ServerMessage>,
}

impl SnapshotSource {
    pub fn new(inbound: Receiver<ServerMessage>) -> Self {
        Self { inbound, pending: None }
    }

    /// Apply messages until the channel closes.
    ///
    /// Rejected messages are logged and dropped. Errors that leave the live
    /// tree in an unknown state end the loop.
    pub async fn run<S: SessionStore>(&mut self, client: &mut Client<S>) -> Result<SourceStats, ClientError> {
        let delivery = client.config().delivery;
        let reconcile = client.config().reconcile.clone();
        let mut stats = SourceStats::default();

        while let Some(message) = self.next(delivery, &reconcile, &mut stats).await {
            stats.applied += 1;
            match client.handle(message) {
                Ok(()) => {}
                Err(err) if err.is_fatal() => {
                    warn!("Stopping snapshot source: {}", err);
                    return Err(err);
                }
                Err(err) => {
                    warn!("Dropped server message: {}", err);
                    stats.rejected += 1;
                }
            }
        }

        debug!(
            "Snapshot source closed: {} applied, {} coalesced, {} rejected",
            stats.applied, stats.coalesced, stats.rejected
        );
        Ok(stats)
    }

    async fn next(
        &mut self,
        delivery: DeliveryMode,
        reconcile: &ReconcileConfig,
        stats: &mut SourceStats,
    ) -> Option<ServerMessage> {
        let message = match self.pending.take() {
            Some(message) => message,
            None => self.inbound.recv().await.ok()?,
        };
        if delivery == DeliveryMode::Queue || !message.is_snapshot() {
            return Some(message);
        }

        // A queued snapshot only supersedes `latest` if it decodes
        let mut latest = message;
        while let Ok(queued) = self.inbound.try_recv() {
            let ServerMessage::VdomUpdate(value) = &queued else {
                self.pending = Some(queued);
                break;
            };
            match Node::from_json_with(value, reconcile) {
                Ok(_) => {
                    stats.coalesced += 1;
                    latest = queued;
                }
                Err(err) => {
                    warn!("Dropped queued snapshot: {}", err);
                    stats.rejected += 1;
                }
            }
        }
        Some(latest)
    }
}

/// Sending half for upstream messages
#[derive(Debug, Clone)]
pub struct Outbox {
    outbound: Sender<ClientMessage>,
}

impl Outbox {
    pub fn new(outbound: Sender<ClientMessage>) -> Self {
        Self { outbound }
    }

    pub async fn send(&self, message: ClientMessage) -> Result<(), ClientError> {
        self.outbound.send(message).await.map_err(|_| ClientError::ChannelClosed)
    }

    /// Send if present; uncaptured events produce nothing
    pub async fn forward(&self, message: Option<ClientMessage>) -> Result<(), ClientError> {
        match message {
            Some(message) => self.send(message).await,
            None => Ok(()),
        }
    }
}
